//! Reactive handle around a [`VisibilityController`].

use std::future::Future;
use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::{AnimateInMode, Animator, MotionError, VisibilityController, VisibilityState};

/// Animator that publishes the target pose to a signal.
///
/// Containers interpolate between poses with CSS transitions; the returned
/// future resolves once the slowest item has settled.
#[derive(Clone, Copy, Debug)]
pub struct SignalAnimator {
    pose: RwSignal<VisibilityState>,
    settle: RwSignal<Duration>,
}

impl Animator for SignalAnimator {
    fn animate(&self, target: VisibilityState) -> impl Future<Output = Result<(), MotionError>> {
        self.pose.set(target);
        let settle = self.settle.get_untracked();

        async move {
            #[cfg(feature = "hydrate")]
            {
                let ms = u32::try_from(settle.as_millis()).unwrap_or(u32::MAX);
                gloo_timers::future::TimeoutFuture::new(ms).await;
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = settle;
            }
            Ok(())
        }
    }
}

/// Lifecycle notifiers wrapped around each triggered transition
#[derive(Clone, Copy, Default)]
pub struct RevealHooks {
    pub on_start: Option<Callback<()>>,
    pub on_end: Option<Callback<()>>,
}

impl RevealHooks {
    fn start(&self) {
        if let Some(callback) = self.on_start.as_ref() {
            callback.run(());
        }
    }

    fn end(&self) {
        if let Some(callback) = self.on_end.as_ref() {
            callback.run(());
        }
    }
}

/// Copyable control handle for one reveal list.
///
/// Create one with [`use_reveal_controls`] and pass it to `FadeInList` as
/// `controls` to orchestrate the list from elsewhere.
#[derive(Clone, Copy)]
pub struct RevealControls {
    pose: RwSignal<VisibilityState>,
    settle: RwSignal<Duration>,
    controller: StoredValue<VisibilityController<SignalAnimator>, LocalStorage>,
}

impl RevealControls {
    fn new() -> Self {
        let pose = RwSignal::new(VisibilityState::Hidden);
        let settle = RwSignal::new(Duration::ZERO);
        let controller =
            StoredValue::new_local(VisibilityController::new(SignalAnimator { pose, settle }));

        Self {
            pose,
            settle,
            controller,
        }
    }

    /// Reactive pose every item container renders from
    pub fn pose(&self) -> Signal<VisibilityState> {
        self.pose.into()
    }

    /// Currently declared state (untracked)
    pub fn state(&self) -> VisibilityState {
        self.pose.get_untracked()
    }

    pub(crate) fn set_settle_time(&self, settle: Duration) {
        if self.settle.get_untracked() != settle {
            self.settle.set(settle);
        }
    }

    /// Start a transition to `target`, superseding any in-flight one
    pub fn start(&self, target: VisibilityState, hooks: RevealHooks) {
        let Some(controller) = self.controller.try_get_value() else {
            return;
        };
        if !controller.is_mounted() {
            return;
        }

        spawn_local(async move {
            controller.start(target, || hooks.start(), || hooks.end()).await;
        });
    }

    pub fn show(&self) {
        self.start(VisibilityState::Visible, RevealHooks::default());
    }

    pub fn hide(&self) {
        self.start(VisibilityState::Hidden, RevealHooks::default());
    }

    pub fn toggle(&self) {
        self.start(self.state().toggled(), RevealHooks::default());
    }

    /// Evaluate the animate-in policy and run whatever it asks for
    pub(crate) fn drive(&self, mode: AnimateInMode, is_intersecting: bool, hooks: RevealHooks) {
        let Some(controller) = self.controller.try_get_value() else {
            return;
        };

        spawn_local(async move {
            controller
                .drive(mode, is_intersecting, || hooks.start(), || hooks.end())
                .await;
        });
    }

    fn unmount(&self) {
        if let Some(controller) = self.controller.try_get_value() {
            controller.unmount();
        }
    }
}

/// Create a control handle owned by the current reactive scope.
///
/// The underlying controller is unmounted when the scope is cleaned up, so
/// pending transitions never fire callbacks into a torn-down view.
pub fn use_reveal_controls() -> RevealControls {
    let controls = RevealControls::new();
    on_cleanup(move || controls.unmount());
    controls
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_hooks(started: &Arc<AtomicUsize>, ended: &Arc<AtomicUsize>) -> RevealHooks {
        let started = started.clone();
        let ended = ended.clone();
        RevealHooks {
            on_start: Some(Callback::new(move |_| {
                started.fetch_add(1, Ordering::SeqCst);
            })),
            on_end: Some(Callback::new(move |_| {
                ended.fetch_add(1, Ordering::SeqCst);
            })),
        }
    }

    #[test]
    fn test_controls_start_hidden_and_mounted() {
        let owner = Owner::new();
        owner.with(|| {
            let controls = use_reveal_controls();
            assert_eq!(controls.state(), VisibilityState::Hidden);
            assert_eq!(controls.pose().get_untracked(), VisibilityState::Hidden);
            assert!(controls.controller.get_value().is_mounted());
        });
    }

    #[test]
    fn test_cleanup_unmounts_controller() {
        let owner = Owner::new();
        let controller = owner.with(|| {
            let controls = use_reveal_controls();
            controls.controller.get_value()
        });

        assert!(controller.is_mounted());
        owner.cleanup();
        assert!(!controller.is_mounted());
    }

    #[test]
    fn test_start_after_unmount_fires_no_hooks() {
        let owner = Owner::new();
        owner.with(|| {
            let controls = use_reveal_controls();
            let started = Arc::new(AtomicUsize::new(0));
            let ended = Arc::new(AtomicUsize::new(0));

            controls.unmount();
            controls.start(VisibilityState::Visible, counting_hooks(&started, &ended));
            controls.show();
            controls.toggle();

            assert_eq!(started.load(Ordering::SeqCst), 0);
            assert_eq!(ended.load(Ordering::SeqCst), 0);
            assert_eq!(controls.state(), VisibilityState::Hidden);
        });
    }

    #[test]
    fn test_settle_time_reaches_animator() {
        let owner = Owner::new();
        owner.with(|| {
            let controls = use_reveal_controls();
            controls.set_settle_time(Duration::from_millis(850));
            assert_eq!(controls.settle.get_untracked(), Duration::from_millis(850));
            assert_eq!(
                controls.controller.get_value().animator().settle.get_untracked(),
                Duration::from_millis(850)
            );
        });
    }
}
