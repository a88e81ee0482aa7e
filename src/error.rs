use std::fmt;

/// Rejected launch options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    FpsOutOfRange { fps: u32, max: u32 },
    ZeroHealth,
    GaugeTooSmall { capacity: u32, min: u32 },
    ZeroRefillInterval,
    ZeroLiveProjectiles,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FpsOutOfRange { fps, max } => {
                write!(f, "frame rate out of range: {fps} (allowed 1..={max})")
            }
            Self::ZeroHealth => write!(f, "health must be at least 1"),
            Self::GaugeTooSmall { capacity, min } => write!(
                f,
                "gauge capacity {capacity} cannot pay for every ability (need at least {min})"
            ),
            Self::ZeroRefillInterval => write!(f, "gauge refill interval must be non-zero"),
            Self::ZeroLiveProjectiles => {
                write!(f, "at least one live projectile per side must be allowed")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
