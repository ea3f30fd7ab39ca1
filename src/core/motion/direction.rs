//! Fade directions and the poses they produce.

use std::fmt;
use std::str::FromStr;

use super::error::MotionError;
use super::policy::VisibilityState;

/// Default distance (in pixels) an item travels while fading in
pub const DEFAULT_DISPLACEMENT_PX: f64 = 100.0;

/// Side an item fades in from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AnimationDirection {
    Left,
    Right,
    #[default]
    Top,
    Bottom,
}

impl AnimationDirection {
    pub const ALL: [AnimationDirection; 4] = [
        AnimationDirection::Left,
        AnimationDirection::Right,
        AnimationDirection::Top,
        AnimationDirection::Bottom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationDirection::Left => "left",
            AnimationDirection::Right => "right",
            AnimationDirection::Top => "top",
            AnimationDirection::Bottom => "bottom",
        }
    }

    /// Whether the displacement runs along the horizontal axis
    pub fn is_horizontal(&self) -> bool {
        matches!(self, AnimationDirection::Left | AnimationDirection::Right)
    }
}

impl fmt::Display for AnimationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimationDirection {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnimationDirection::ALL
            .into_iter()
            .find(|direction| direction.as_str() == s)
            .ok_or_else(|| MotionError::UnknownDirection(s.to_string()))
    }
}

/// Non-negative displacement magnitude in pixels.
///
/// The direction decides sign and axis; the magnitude never carries a sign.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Displacement(f64);

impl Displacement {
    pub const ZERO: Displacement = Displacement(0.0);

    /// Validate a pixel magnitude
    pub fn new(px: f64) -> Result<Self, MotionError> {
        if px.is_finite() && px >= 0.0 {
            Ok(Self(px))
        } else {
            Err(MotionError::InvalidDisplacement(px))
        }
    }

    pub fn px(&self) -> f64 {
        self.0
    }
}

impl Default for Displacement {
    fn default() -> Self {
        Self(DEFAULT_DISPLACEMENT_PX)
    }
}

/// A named set of visual values a container animates toward
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Horizontal offset in pixels
    pub x: f64,
    /// Vertical offset in pixels
    pub y: f64,
    pub opacity: f64,
}

impl Pose {
    /// Resting pose: in place and fully opaque
    pub const REST: Pose = Pose {
        x: 0.0,
        y: 0.0,
        opacity: 1.0,
    };

    /// Inline CSS declarations for this pose
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate3d({}px, {}px, 0px);",
            self.opacity, self.x, self.y
        )
    }
}

/// Hidden/visible pose pair for one fade direction
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PosePair {
    pub hidden: Pose,
    pub visible: Pose,
}

impl PosePair {
    pub fn new(direction: AnimationDirection, displacement: Displacement) -> Self {
        let d = displacement.px();
        // `0.0 - d` keeps a zero displacement at +0 instead of -0
        let (x, y) = match direction {
            AnimationDirection::Left => (0.0 - d, 0.0),
            AnimationDirection::Right => (d, 0.0),
            AnimationDirection::Top => (0.0, 0.0 - d),
            AnimationDirection::Bottom => (0.0, d),
        };

        Self {
            hidden: Pose { x, y, opacity: 0.0 },
            visible: Pose::REST,
        }
    }

    pub fn pose(&self, state: VisibilityState) -> Pose {
        match state {
            VisibilityState::Hidden => self.hidden,
            VisibilityState::Visible => self.visible,
        }
    }
}
