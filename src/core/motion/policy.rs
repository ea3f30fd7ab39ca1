//! Animate-in policy: decides which pose a list should move to.

/// The two poses a reveal list can be in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum VisibilityState {
    #[default]
    Hidden,
    Visible,
}

impl VisibilityState {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisibilityState::Hidden => "hidden",
            VisibilityState::Visible => "visible",
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, VisibilityState::Visible)
    }

    pub fn toggled(&self) -> Self {
        match self {
            VisibilityState::Hidden => VisibilityState::Visible,
            VisibilityState::Visible => VisibilityState::Hidden,
        }
    }
}

/// How a list decides to appear
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimateInMode {
    /// Show (`true`) or hide (`false`) right away, without watching the viewport
    Immediate(bool),
    /// Follow viewport intersection
    ScrollTriggered {
        /// Stay visible after the first reveal
        trigger_once: bool,
    },
}

impl AnimateInMode {
    pub fn scroll(trigger_once: bool) -> Self {
        AnimateInMode::ScrollTriggered { trigger_once }
    }

    /// Whether this mode needs an intersection observer
    pub fn observes_viewport(&self) -> bool {
        matches!(self, AnimateInMode::ScrollTriggered { .. })
    }

    pub fn trigger_once(&self) -> bool {
        matches!(self, AnimateInMode::ScrollTriggered { trigger_once: true })
    }
}

impl Default for AnimateInMode {
    fn default() -> Self {
        AnimateInMode::Immediate(true)
    }
}

impl From<bool> for AnimateInMode {
    fn from(visible: bool) -> Self {
        AnimateInMode::Immediate(visible)
    }
}

/// Decide the transition for the current inputs.
///
/// Returns `None` when the list should stay where it is: it already holds the
/// requested pose, or a trigger-once list that has been revealed lost
/// intersection.
pub fn evaluate(
    mode: AnimateInMode,
    is_intersecting: bool,
    current: VisibilityState,
    has_been_visible: bool,
) -> Option<VisibilityState> {
    let target = match mode {
        AnimateInMode::Immediate(true) => VisibilityState::Visible,
        AnimateInMode::Immediate(false) => VisibilityState::Hidden,
        AnimateInMode::ScrollTriggered { .. } if is_intersecting => VisibilityState::Visible,
        AnimateInMode::ScrollTriggered { trigger_once } => {
            if trigger_once && has_been_visible {
                return None;
            }
            VisibilityState::Hidden
        }
    };

    (target != current).then_some(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use VisibilityState::{Hidden, Visible};

    #[test]
    fn test_immediate_true_reveals() {
        let mode = AnimateInMode::Immediate(true);
        assert_eq!(evaluate(mode, false, Hidden, false), Some(Visible));
        assert_eq!(evaluate(mode, true, Hidden, false), Some(Visible));
        assert_eq!(evaluate(mode, false, Visible, true), None);
    }

    #[test]
    fn test_immediate_false_hides() {
        let mode = AnimateInMode::Immediate(false);
        assert_eq!(evaluate(mode, true, Hidden, false), None);
        assert_eq!(evaluate(mode, false, Visible, true), Some(Hidden));
    }

    #[test]
    fn test_scroll_follows_intersection() {
        let mode = AnimateInMode::scroll(false);
        assert_eq!(evaluate(mode, true, Hidden, false), Some(Visible));
        assert_eq!(evaluate(mode, false, Visible, true), Some(Hidden));
        assert_eq!(evaluate(mode, true, Hidden, true), Some(Visible));
        assert_eq!(evaluate(mode, false, Hidden, true), None);
    }

    #[test]
    fn test_trigger_once_never_rehides() {
        let mode = AnimateInMode::scroll(true);
        assert_eq!(evaluate(mode, true, Hidden, false), Some(Visible));
        assert_eq!(evaluate(mode, false, Visible, true), None);
        assert_eq!(evaluate(mode, true, Visible, true), None);
    }

    #[test]
    fn test_trigger_once_before_first_reveal_stays_hidden() {
        let mode = AnimateInMode::scroll(true);
        assert_eq!(evaluate(mode, false, Hidden, false), None);
        assert_eq!(evaluate(mode, false, Visible, false), Some(Hidden));
    }

    #[test]
    fn test_mode_helpers() {
        assert_eq!(AnimateInMode::default(), AnimateInMode::Immediate(true));
        assert_eq!(AnimateInMode::from(false), AnimateInMode::Immediate(false));
        assert!(AnimateInMode::scroll(false).observes_viewport());
        assert!(!AnimateInMode::Immediate(true).observes_viewport());
        assert!(AnimateInMode::scroll(true).trigger_once());
        assert!(!AnimateInMode::scroll(false).trigger_once());
        assert_eq!(Hidden.toggled(), Visible);
        assert!(Visible.is_visible());
    }
}
