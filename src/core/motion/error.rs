/// Errors raised while configuring or playing a reveal animation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MotionError {
    #[error("Unknown transition preset: {0}")]
    UnknownPreset(String),

    #[error("Unknown animation direction: {0}")]
    UnknownDirection(String),

    #[error("Displacement must be a finite, non-negative number of pixels, got {0}")]
    InvalidDisplacement(f64),

    #[error("Animation failed: {0}")]
    AnimationFailed(String),
}
