//! Crate-wide error type
//!
//! Every failure here is structural (bad configuration or I/O). The physics
//! step itself has no error path.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Disk with a non-positive or non-finite radius/mass, or placed where it cannot live.
    #[error("invalid disk: {0}")]
    InvalidDisk(String),

    /// Container rectangle that is inverted, degenerate or non-finite.
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),

    #[error("invalid time step {0}: must be finite and > 0")]
    InvalidTimeStep(f64),

    /// Any other rejected configuration value.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Initial layout could not place every disk.
    #[error("layout failed: {0}")]
    Layout(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
