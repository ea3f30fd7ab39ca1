use std::hash::Hash;

use leptos::prelude::*;

use crate::core::{AnimateInMode, InViewOptions, RevealConfig, RevealPlan};
use crate::ui::motion::controls::{RevealControls, RevealHooks, use_reveal_controls};
use crate::ui::motion::in_view::use_in_view;

/// Staggered fade-in list.
///
/// Every item is wrapped in its own animatable container. All containers
/// follow one shared pose (hidden / visible) and each is delayed by its index
/// times the configured stagger, so siblings animate in sequence.
///
/// Items are keyed by `key`; positional keys are not supported because a
/// reorder would replay the wrong item's transition.
#[component]
pub fn FadeInList<T, K, KF, V, VF>(
    /// Items to render, in order
    #[prop(into)]
    list: Signal<Vec<T>>,
    /// Stable identity for each item
    key: KF,
    /// Renders one item
    render: VF,
    /// Layout, stagger, direction and timing
    #[prop(optional)]
    config: RevealConfig,
    /// When to reveal the list
    #[prop(into, default = AnimateInMode::default().into())]
    animate_in: Signal<AnimateInMode>,
    /// Intersection observer tuning for scroll-triggered lists
    #[prop(optional)]
    in_view_options: InViewOptions,
    /// Fired before each triggered transition begins
    #[prop(optional, into)]
    on_animation_start: Option<Callback<()>>,
    /// Fired after each triggered transition completes
    #[prop(optional, into)]
    on_animation_end: Option<Callback<()>>,
    /// External control handle; when set, the animate-in policy is skipped
    #[prop(optional)]
    controls: Option<RevealControls>,
    /// Additional CSS classes for the container
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    K: Eq + Hash + Clone + Send + Sync + 'static,
    KF: Fn(&T) -> K + Clone + Send + Sync + 'static,
    V: IntoView + 'static,
    VF: Fn(T) -> V + Clone + Send + Sync + 'static,
{
    let external = controls.is_some();
    let controls = controls.unwrap_or_else(use_reveal_controls);
    let hooks = RevealHooks {
        on_start: on_animation_start,
        on_end: on_animation_end,
    };

    let observes = Signal::derive(move || !external && animate_in.get().observes_viewport());
    let trigger_once = Signal::derive(move || animate_in.get().trigger_once());
    let in_view = use_in_view(observes, trigger_once, in_view_options);

    let settle = {
        let config = config.clone();
        Memo::new(move |_| {
            RevealPlan::new(config.clone(), list.with(|items| items.len())).settle_time()
        })
    };

    Effect::new(move |_| controls.set_settle_time(settle.get()));

    Effect::new(move |_| {
        let Some((mode, is_intersecting)) =
            policy_inputs(external, animate_in.get(), in_view.in_view.get())
        else {
            return;
        };
        controls.set_settle_time(settle.get_untracked());
        controls.drive(mode, is_intersecting, hooks);
    });

    let pose = controls.pose();
    let container_style = config.container_style();
    let container_class = if class.is_empty() {
        "fade-in-list".to_string()
    } else {
        format!("fade-in-list {}", class)
    };

    view! {
        <div
            node_ref=in_view.node_ref
            class=container_class
            style=container_style
            data-state=move || pose.get().as_str()
        >
            <For
                each=move || list.get().into_iter().enumerate()
                key=move |(_, item)| key(item)
                children=move |(index, item)| {
                    let motion = config.item(index);
                    let render = render.clone();

                    view! {
                        <div
                            class="fade-in-item"
                            style=move || motion.style(pose.get())
                        >
                            {render(item)}
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Inputs for the animate-in policy, or `None` when an external handle owns
/// the list and the policy must not run.
fn policy_inputs(
    external: bool,
    mode: AnimateInMode,
    in_view: bool,
) -> Option<(AnimateInMode, bool)> {
    (!external).then_some((mode, in_view))
}
