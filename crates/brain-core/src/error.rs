use thiserror::Error;

/// Reasons a [`PlacementConfig`](crate::PlacementConfig) is rejected by `validate`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("placement config has no regions")]
    NoRegions,
    #[error("boundary has no ellipsoids")]
    EmptyBoundary,
    #[error("ellipsoid {index} needs a finite center and positive finite radii")]
    InvalidEllipsoid { index: usize },
    #[error("region `{name}` has a non-finite center")]
    NonFiniteCenter { name: String },
    #[error("region `{name}` radius {radius} must be positive and finite")]
    InvalidRadius { name: String, radius: f32 },
    #[error("region `{name}` share {share} is outside [0, 1]")]
    InvalidShare { name: String, share: f32 },
    #[error("fraction shares sum to {0}, which is above 1")]
    SharesExceedOne(f32),
    #[error("only one remainder region is allowed, found {0}")]
    MultipleRemainders(usize),
    #[error("minimum separation {0} must be finite and non-negative")]
    InvalidSeparation(f32),
    #[error("attempts per point must be at least 1")]
    ZeroAttempts,
    #[error("radial profile inner={inner} span={span} must be finite and non-negative")]
    InvalidRadialProfile { inner: f32, span: f32 },
}

/// Failure to read a `#rrggbb` color string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("expected a #rrggbb color, got `{0}`")]
    Malformed(String),
}
