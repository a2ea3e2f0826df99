//! Error types for the Galaxy2D camera subsystem

use std::fmt;

/// Result type for camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Camera subsystem errors
///
/// Every variant is a programmer or configuration error. Expected outcomes
/// such as an off-camera point are reported through `Option`, never here.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The object has no camera record (never registered, or unregistered)
    CameraNotFound(String),

    /// Startup configuration is unusable (zero resolution, unreadable file, bad TOML)
    InvalidConfig(String),

    /// An argument is out of range (zoom, clip planes, repeat count, ...)
    InvalidParameter(String),

    /// Registration or subsystem setup failed
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CameraNotFound(msg) => write!(f, "Camera not found: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
