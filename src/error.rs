//! Error types for the face engagement library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Payload could not be turned into a frame
    #[error("Decode error: {0}")]
    Decode(String),

    /// Base64 payload was malformed
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Image container could not be decoded
    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Landmark/emotion detector failed or could not be initialized
    #[error("Detector error: {0}")]
    Detector(String),

    /// Head pose solve failed
    #[error("Pose estimation error: {0}")]
    PoseEstimation(#[from] PnpError),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl Error {
    /// True for failures that happen before a frame exists
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::Base64(_) | Self::Image(_))
    }
}

/// Failure modes of the Perspective-n-Point solve
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PnpError {
    /// Correspondences cannot determine a pose (collinear, coincident, zero frame)
    #[error("degenerate configuration: {0}")]
    DegenerateConfiguration(String),

    /// Input or intermediate values were NaN or infinite
    #[error("non-finite value in {0}")]
    NonFinite(&'static str),

    /// Refinement hit its iteration cap without improving on its seed
    #[error("solver did not converge after {iterations} iterations")]
    NotConverged {
        /// Iterations performed
        iterations: usize,
    },

    /// The recovered pose places model points behind the camera
    #[error("recovered pose places the face behind the camera")]
    BehindCamera,
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
