pub mod motion;
pub mod pages;

pub use motion::{FadeInList, RevealControls, RevealHooks, use_in_view, use_reveal_controls};
pub use pages::{LandingPage, NotFoundPage};
