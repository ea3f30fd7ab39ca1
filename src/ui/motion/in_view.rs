//! Intersection observer hook
//!
//! Binds a `web_sys::IntersectionObserver` to a node and exposes the result as
//! a signal. On the server the signal stays `false`.

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::InViewOptions;

/// Node reference to attach plus the reactive intersection flag
#[derive(Clone, Copy)]
pub struct InView {
    pub node_ref: NodeRef<Div>,
    pub in_view: ReadSignal<bool>,
}

/// Observe the node attached to the returned `node_ref`.
///
/// No observer is created while `active` is false. With `trigger_once`, the
/// observer disconnects after the first intersection and `in_view` stays true.
pub fn use_in_view(active: Signal<bool>, trigger_once: Signal<bool>, options: InViewOptions) -> InView {
    let node_ref = NodeRef::<Div>::new();
    let (in_view, set_in_view) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use wasm_bindgen::JsCast;
        use wasm_bindgen::JsValue;
        use wasm_bindgen::closure::Closure;

        use crate::core::InViewLatch;

        type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

        // The callback lives next to its observer and is dropped on disconnect
        let observer: StoredValue<
            Option<(web_sys::IntersectionObserver, ObserverCallback)>,
            LocalStorage,
        > = StoredValue::new_local(None);

        let disconnect = move || {
            observer.try_update_value(|slot| {
                if let Some((current, _callback)) = slot.take() {
                    current.disconnect();
                }
            });
        };

        Effect::new(move |_| {
            disconnect();

            let Some(element) = node_ref.get() else {
                return;
            };
            if !active.get() {
                return;
            }

            let latch = InViewLatch::with_state(trigger_once.get(), in_view.get_untracked());
            if latch.is_latched() {
                return;
            }

            let latch = Rc::new(RefCell::new(latch));
            let callback = ObserverCallback::new(
                move |entries: js_sys::Array, current: web_sys::IntersectionObserver| {
                    let mut latch = latch.borrow_mut();
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                            continue;
                        };
                        if let Some(now) = latch.observe(entry.is_intersecting()) {
                            set_in_view.set(now);
                        }
                    }
                    if latch.is_latched() {
                        current.disconnect();
                    }
                },
            );

            let init = web_sys::IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(options.threshold));
            init.set_root_margin(&options.root_margin);

            match web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &init,
            ) {
                Ok(created) => {
                    created.observe(&element);
                    observer.set_value(Some((created, callback)));
                }
                Err(err) => {
                    tracing::warn!("IntersectionObserver unavailable: {:?}", err);
                }
            }
        });

        on_cleanup(move || disconnect());
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (active, trigger_once, options, set_in_view);
    }

    InView { node_ref, in_view }
}
