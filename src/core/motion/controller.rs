//! Visibility state controller
//!
//! Holds the declared [`VisibilityState`] of one reveal list and plays
//! transitions through an injected [`Animator`].
//!
//! # Ordering
//!
//! - The declared state flips when a transition *begins*, so every container
//!   re-renders with the new pose immediately.
//! - A newer transition supersedes any in-flight one. The superseded await
//!   resolves as [`TransitionOutcome::Superseded`] and its end hook is skipped.
//! - After [`VisibilityController::unmount`], pending awaits resolve as
//!   [`TransitionOutcome::Abandoned`] and no hook fires.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use super::error::MotionError;
use super::policy::{AnimateInMode, VisibilityState, evaluate};

/// Plays the visual part of a transition.
///
/// The returned future resolves once the animation has finished. Errors are
/// logged and swallowed by the controller.
pub trait Animator {
    fn animate(&self, target: VisibilityState) -> impl Future<Output = Result<(), MotionError>>;
}

/// Animator that finishes immediately
#[derive(Clone, Copy, Debug, Default)]
pub struct InstantAnimator;

impl Animator for InstantAnimator {
    fn animate(&self, _target: VisibilityState) -> impl Future<Output = Result<(), MotionError>> {
        std::future::ready(Ok(()))
    }
}

/// How an awaited transition ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The animation finished and nothing replaced it
    Completed,
    /// A newer transition started before this one finished
    Superseded,
    /// The controller was unmounted
    Abandoned,
}

impl TransitionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, TransitionOutcome::Completed)
    }
}

#[derive(Debug)]
struct Shared {
    state: Cell<VisibilityState>,
    generation: Cell<u64>,
    has_been_visible: Cell<bool>,
    mounted: Cell<bool>,
}

/// Shared visibility state for one list. Clones observe the same state.
#[derive(Clone, Debug)]
pub struct VisibilityController<A> {
    shared: Rc<Shared>,
    animator: A,
}

impl<A: Animator> VisibilityController<A> {
    /// Create a mounted controller in the hidden state
    pub fn new(animator: A) -> Self {
        Self {
            shared: Rc::new(Shared {
                state: Cell::new(VisibilityState::Hidden),
                generation: Cell::new(0),
                has_been_visible: Cell::new(false),
                mounted: Cell::new(true),
            }),
            animator,
        }
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// Currently declared state
    pub fn state(&self) -> VisibilityState {
        self.shared.state.get()
    }

    /// Whether the visible state was ever declared
    pub fn has_been_visible(&self) -> bool {
        self.shared.has_been_visible.get()
    }

    pub fn is_mounted(&self) -> bool {
        self.shared.mounted.get()
    }

    /// Tear down: pending transitions are abandoned, new ones refused
    pub fn unmount(&self) {
        if self.shared.mounted.replace(false) {
            tracing::debug!("Reveal controller unmounted in state {}", self.state().as_str());
        }
    }

    /// Move to `target`, resolving after the animation finishes
    pub async fn transition_to(&self, target: VisibilityState) -> TransitionOutcome {
        let Some(generation) = self.begin(target) else {
            return TransitionOutcome::Abandoned;
        };

        if let Err(err) = self.animator.animate(target).await {
            tracing::warn!("Reveal animation to {} failed: {}", target.as_str(), err);
        }

        self.settle(generation)
    }

    /// Move to `target` with lifecycle hooks.
    ///
    /// `on_start` fires before the state flips; `on_end` fires only when the
    /// transition completes. Returns `None`, firing nothing, once unmounted.
    pub async fn start(
        &self,
        target: VisibilityState,
        on_start: impl FnOnce(),
        on_end: impl FnOnce(),
    ) -> Option<TransitionOutcome> {
        if !self.is_mounted() {
            return None;
        }

        on_start();
        let outcome = self.transition_to(target).await;
        if outcome.is_completed() {
            on_end();
        }
        Some(outcome)
    }

    /// Evaluate the animate-in policy and [`start`](Self::start) the
    /// transition it asks for. Returns `None` when no transition was needed.
    pub async fn drive(
        &self,
        mode: AnimateInMode,
        is_intersecting: bool,
        on_start: impl FnOnce(),
        on_end: impl FnOnce(),
    ) -> Option<TransitionOutcome> {
        if !self.is_mounted() {
            return None;
        }

        let target = evaluate(mode, is_intersecting, self.state(), self.has_been_visible())?;
        self.start(target, on_start, on_end).await
    }

    fn begin(&self, target: VisibilityState) -> Option<u64> {
        if !self.is_mounted() {
            return None;
        }

        let generation = self.shared.generation.get().wrapping_add(1);
        self.shared.generation.set(generation);
        self.shared.state.set(target);
        if target.is_visible() {
            self.shared.has_been_visible.set(true);
        }

        tracing::debug!("Reveal transition #{} to {}", generation, target.as_str());
        Some(generation)
    }

    fn settle(&self, generation: u64) -> TransitionOutcome {
        if !self.is_mounted() {
            TransitionOutcome::Abandoned
        } else if self.shared.generation.get() != generation {
            TransitionOutcome::Superseded
        } else {
            TransitionOutcome::Completed
        }
    }
}
