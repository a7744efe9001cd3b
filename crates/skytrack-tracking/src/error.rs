//! Error types for tracking operations.

use thiserror::Error;

/// Result type for tracking operations.
pub type TrackingResult<T> = Result<T, TrackingError>;

/// Errors that can occur around the tracker.
///
/// `IouTracker::update` itself never fails; errors come from rejected
/// configuration or from the upstream detector.
#[derive(Debug, Error)]
pub enum TrackingError {
    #[error("Invalid tracker configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Detector '{detector}' failed: {message}")]
    Detection { detector: String, message: String },
}

impl TrackingError {
    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Create a detection failure error.
    pub fn detection_failed(detector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Detection {
            detector: detector.into(),
            message: message.into(),
        }
    }
}
