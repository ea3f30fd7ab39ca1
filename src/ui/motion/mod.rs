//! Reveal animation components and hooks

pub mod controls;
pub mod fade_in_list;
pub mod in_view;

pub use controls::{RevealControls, RevealHooks, SignalAnimator, use_reveal_controls};
pub use fade_in_list::FadeInList;
pub use in_view::{InView, use_in_view};
