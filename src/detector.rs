//! Landmark and emotion detector boundary.
//!
//! The detector itself is an external model. This module defines the
//! contract the analyzer calls through, an ensure-once wrapper for
//! expensive model handles, and a replay detector backed by a recorded
//! detection file.

use crate::{
    types::{EmotionVector, FaceRegion, LandmarkSet},
    Error, Result,
};
use image::DynamicImage;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

/// One detected face
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Bounding box of the face
    pub region: FaceRegion,
    /// Pose landmarks, when the landmark model found them
    #[serde(default)]
    pub landmarks: Option<LandmarkSet>,
    /// Emotion classifier output
    pub emotions: EmotionVector,
}

/// Landmark + emotion detector collaborator
pub trait FaceDetector: Send + Sync {
    /// Detect the primary face in a frame; `Ok(None)` when there is none
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying model fails
    fn detect(&self, frame: &DynamicImage) -> Result<Option<Detection>>;
}

impl<D: FaceDetector + ?Sized> FaceDetector for std::sync::Arc<D> {
    fn detect(&self, frame: &DynamicImage) -> Result<Option<Detection>> {
        (**self).detect(frame)
    }
}

impl<D: FaceDetector + ?Sized> FaceDetector for Box<D> {
    fn detect(&self, frame: &DynamicImage) -> Result<Option<Detection>> {
        (**self).detect(frame)
    }
}

type Loader<D> = Box<dyn Fn() -> Result<D> + Send + Sync>;

/// Builds the wrapped detector on first use, exactly once.
///
/// Concurrent first callers serialize on an init guard; only one runs the
/// loader. A failed load is returned to that caller and retried on the next.
pub struct LazyDetector<D> {
    cell: OnceLock<D>,
    init_guard: Mutex<()>,
    loader: Loader<D>,
}

impl<D: FaceDetector> LazyDetector<D> {
    /// Wrap a loader
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> Result<D> + Send + Sync + 'static,
    {
        Self {
            cell: OnceLock::new(),
            init_guard: Mutex::new(()),
            loader: Box::new(loader),
        }
    }

    /// Already-built instance, if any
    pub fn get(&self) -> Option<&D> {
        self.cell.get()
    }

    /// The detector, loading it if this is the first call
    ///
    /// # Errors
    ///
    /// Returns [`Error::Detector`] if loading fails or the guard was poisoned
    pub fn instance(&self) -> Result<&D> {
        if let Some(detector) = self.cell.get() {
            return Ok(detector);
        }

        let _guard = self
            .init_guard
            .lock()
            .map_err(|_| Error::Detector("detector initialization guard poisoned".to_string()))?;
        if let Some(detector) = self.cell.get() {
            return Ok(detector);
        }

        log::info!("Initializing face detector");
        let detector = (self.loader)().map_err(|e| match e {
            Error::Detector(msg) => Error::Detector(msg),
            other => Error::Detector(format!("failed to load detector: {other}")),
        })?;
        Ok(self.cell.get_or_init(|| detector))
    }
}

impl<D: FaceDetector> FaceDetector for LazyDetector<D> {
    fn detect(&self, frame: &DynamicImage) -> Result<Option<Detection>> {
        self.instance()?.detect(frame)
    }
}

/// On-disk form of a recorded detection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    /// `null` when the detector found no face
    #[serde(default)]
    pub face: Option<Detection>,
}

/// Replays a detection captured offline.
///
/// Landmark frame sizes left at zero in the recording are filled in from
/// the frame being analysed.
#[derive(Debug, Clone, Default)]
pub struct RecordedDetector {
    recording: Recording,
}

impl RecordedDetector {
    /// Replay a given detection (`None` for "no face")
    #[must_use]
    pub fn new(face: Option<Detection>) -> Self {
        Self {
            recording: Recording { face },
        }
    }

    /// Load a recording from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading recorded detection from: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a recording from YAML text
    ///
    /// # Errors
    ///
    /// Returns [`Error::Detector`] if the YAML does not describe a recording
    pub fn from_yaml(content: &str) -> Result<Self> {
        let recording: Recording = serde_yaml::from_str(content)
            .map_err(|e| Error::Detector(format!("Failed to parse recorded detection: {e}")))?;
        Ok(Self { recording })
    }
}

impl FaceDetector for RecordedDetector {
    fn detect(&self, frame: &DynamicImage) -> Result<Option<Detection>> {
        let Some(mut detection) = self.recording.face.clone() else {
            return Ok(None);
        };
        if let Some(landmarks) = detection.landmarks.as_mut() {
            if landmarks.frame_width == 0 {
                landmarks.frame_width = frame.width();
            }
            if landmarks.frame_height == 0 {
                landmarks.frame_height = frame.height();
            }
        }
        Ok(Some(detection))
    }
}
