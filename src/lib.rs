//! Single-frame engagement analysis for interview video.
//!
//! Each frame gets an engagement read:
//! 1. A lighting gate measures mean luminance and flags dark or backlit frames
//! 2. An injected detector supplies the face box, six pose landmarks and an
//!    emotion vector
//! 3. Head pose is solved with `PnP` (Perspective-n-Point) against a fixed
//!    face model and classified into a gaze direction
//! 4. Emotion scores are fused into tension/relaxation levels with feedback
//!
//! Failures never escape as errors from [`FaceAnalyzer::analyze`]: every
//! outcome is a serializable [`AnalysisResult`].
//!
//! # Examples
//!
//! ```no_run
//! use face_engagement::{detector::RecordedDetector, FaceAnalyzer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let detector = RecordedDetector::from_file("detections/frontal.yaml")?;
//! let analyzer = FaceAnalyzer::new(detector);
//!
//! let payload = std::fs::read_to_string("frame.b64")?;
//! let result = analyzer.analyze(&payload);
//!
//! if let Some(pose) = &result.head_pose {
//!     println!("Yaw: {:.1}°, looking at camera: {}", pose.yaw, pose.is_looking_at_camera);
//! }
//! println!("{}", serde_json::to_string_pretty(&result)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Sharing a lazily loaded detector
//!
//! ```no_run
//! use face_engagement::{detector::{LazyDetector, RecordedDetector}, FaceAnalyzer};
//! use std::sync::Arc;
//!
//! let analyzer = Arc::new(FaceAnalyzer::new(LazyDetector::new(|| {
//!     RecordedDetector::from_file("detections/frontal.yaml")
//! })));
//!
//! let worker = Arc::clone(&analyzer);
//! std::thread::spawn(move || worker.analyze("data:image/png;base64,..."));
//! ```

/// Frame analysis orchestration
pub mod analysis;

/// Configuration management
pub mod config;

/// Constants used throughout the pipeline
pub mod constants;

/// Payload decoding
pub mod decode;

/// Landmark and emotion detector collaborator
pub mod detector;

/// Error types and result handling
pub mod error;

/// Perspective-n-Point solver
pub mod pnp;

/// Head pose estimation and direction classification
pub mod pose_estimation;

/// Image lighting assessment
pub mod quality;

/// Tension and relaxation scoring
pub mod tension;

/// Shared data types
pub mod types;

/// Numeric helpers
pub mod utils;

pub use analysis::{AnalysisResult, FaceAnalyzer};
pub use error::{Error, Result};
