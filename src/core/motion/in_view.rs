//! Viewport intersection state, independent of the browser binding.

/// Options forwarded to the browser's intersection observer
#[derive(Clone, Debug, PartialEq)]
pub struct InViewOptions {
    /// Fraction of the target that must be visible (0.0 to 1.0)
    pub threshold: f64,
    /// CSS-style margin around the root
    pub root_margin: String,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

impl InViewOptions {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn with_root_margin(mut self, root_margin: impl Into<String>) -> Self {
        self.root_margin = root_margin.into();
        self
    }
}

/// Folds raw intersection reports into the `in_view` flag.
///
/// With `trigger_once`, the first `true` latches and every later report is
/// ignored, so the observer can be disconnected.
#[derive(Clone, Debug, Default)]
pub struct InViewLatch {
    trigger_once: bool,
    in_view: bool,
    latched: bool,
}

impl InViewLatch {
    pub fn new(trigger_once: bool) -> Self {
        Self {
            trigger_once,
            in_view: false,
            latched: false,
        }
    }

    /// Resume from an already published flag, e.g. when an observer is rebuilt
    pub fn with_state(trigger_once: bool, in_view: bool) -> Self {
        Self {
            trigger_once,
            in_view,
            latched: trigger_once && in_view,
        }
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }

    pub fn is_latched(&self) -> bool {
        self.latched
    }

    /// Record an intersection report, returning the new flag if it changed
    pub fn observe(&mut self, intersecting: bool) -> Option<bool> {
        if self.latched || intersecting == self.in_view {
            return None;
        }

        self.in_view = intersecting;
        if intersecting && self.trigger_once {
            self.latched = true;
        }
        Some(intersecting)
    }
}
