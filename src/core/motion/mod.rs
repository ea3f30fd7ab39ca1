//! Staggered reveal animation
//!
//! Framework-free building blocks behind the `FadeInList` component:
//! - [`policy`]: decides which pose a list should move to
//! - [`controller`]: owns the shared visibility state and plays transitions
//! - [`in_view`]: folds viewport intersection reports (trigger-once latch)
//! - [`stagger`]: per-item poses, timing and stagger delays
//! - [`direction`] / [`preset`]: poses and named timing presets

pub mod controller;
pub mod direction;
pub mod error;
pub mod in_view;
pub mod policy;
pub mod preset;
pub mod stagger;

pub use controller::{Animator, InstantAnimator, TransitionOutcome, VisibilityController};
pub use direction::{AnimationDirection, DEFAULT_DISPLACEMENT_PX, Displacement, Pose, PosePair};
pub use error::MotionError;
pub use in_view::{InViewLatch, InViewOptions};
pub use policy::{AnimateInMode, VisibilityState, evaluate};
pub use preset::{Easing, Transition, TransitionPreset};
pub use stagger::{DEFAULT_STAGGER_MS, FlexDirection, ItemMotion, RevealConfig, RevealPlan};
