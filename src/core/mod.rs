//! Core models and state machines for landing page motion

#[cfg(feature = "ssr")]
pub mod config;

pub mod motion;

pub use motion::*;
