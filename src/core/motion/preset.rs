//! Named timing presets for reveal transitions.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::error::MotionError;

/// CSS easing curve
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    pub fn to_css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            Easing::EaseIn => "ease-in".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

/// Timing record for a single container's transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl Transition {
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Time from trigger until this transition settles
    pub fn end(&self) -> Duration {
        self.delay + self.duration
    }

    /// Inline CSS `transition` declaration covering opacity and transform
    pub fn to_css(&self) -> String {
        let timing = format!(
            "{}ms {} {}ms",
            self.duration.as_millis(),
            self.easing.to_css(),
            self.delay.as_millis()
        );
        format!("transition: opacity {timing}, transform {timing};")
    }
}

/// Named transition configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TransitionPreset {
    #[default]
    Default,
    Smooth,
    Snappy,
}

impl TransitionPreset {
    pub const ALL: [TransitionPreset; 3] = [
        TransitionPreset::Default,
        TransitionPreset::Smooth,
        TransitionPreset::Snappy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPreset::Default => "default",
            TransitionPreset::Smooth => "smooth",
            TransitionPreset::Snappy => "snappy",
        }
    }

    /// Timing record for this preset, with no delay
    pub fn transition(&self) -> Transition {
        let (duration_ms, easing) = match self {
            TransitionPreset::Default => (600, Easing::EaseOut),
            TransitionPreset::Smooth => (900, Easing::EaseInOut),
            TransitionPreset::Snappy => (300, Easing::CubicBezier(0.2, 0.0, 0.0, 1.0)),
        };

        Transition {
            duration: Duration::from_millis(duration_ms),
            delay: Duration::ZERO,
            easing,
        }
    }
}

impl fmt::Display for TransitionPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransitionPreset {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransitionPreset::ALL
            .into_iter()
            .find(|preset| preset.as_str() == s)
            .ok_or_else(|| MotionError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preset_exists() {
        let transition = TransitionPreset::default().transition();
        assert_eq!(transition.duration, Duration::from_millis(600));
        assert_eq!(transition.delay, Duration::ZERO);
        assert_eq!(transition.easing, Easing::EaseOut);
    }

    #[test]
    fn test_preset_names_round_trip() {
        for preset in TransitionPreset::ALL {
            assert_eq!(preset.as_str().parse::<TransitionPreset>(), Ok(preset));
        }
    }

    #[test]
    fn test_unknown_preset_is_rejected() {
        let err = "bouncy".parse::<TransitionPreset>().unwrap_err();
        assert_eq!(err, MotionError::UnknownPreset("bouncy".to_string()));
        assert_eq!(err.to_string(), "Unknown transition preset: bouncy");
    }

    #[test]
    fn test_transition_css() {
        let transition = TransitionPreset::Default
            .transition()
            .with_delay(Duration::from_millis(250));

        assert_eq!(
            transition.to_css(),
            "transition: opacity 600ms ease-out 250ms, transform 600ms ease-out 250ms;"
        );
        assert_eq!(transition.end(), Duration::from_millis(850));
    }

    #[test]
    fn test_cubic_bezier_css() {
        assert_eq!(
            Easing::CubicBezier(0.2, 0.0, 0.0, 1.0).to_css(),
            "cubic-bezier(0.2, 0, 0, 1)"
        );
        assert_eq!(Easing::Linear.to_css(), "linear");
    }
}
