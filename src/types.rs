//! Data carried between the detector collaborator and the analysers.

use crate::{constants::NUM_POSE_LANDMARKS, Error, Result};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Detected face bounding box in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceRegion {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width
    pub w: u32,
    /// Height
    pub h: u32,
}

impl FaceRegion {
    /// Create a new region
    #[must_use]
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// A box with zero width or height does not contain a face
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// The six landmarks the pose solve needs, in image pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandmarkSet {
    /// Nose tip
    pub nose_tip: [f64; 2],
    /// Chin
    pub chin: [f64; 2],
    /// Left eye outer corner
    pub left_eye_outer: [f64; 2],
    /// Right eye outer corner
    pub right_eye_outer: [f64; 2],
    /// Left mouth corner
    pub left_mouth_corner: [f64; 2],
    /// Right mouth corner
    pub right_mouth_corner: [f64; 2],
    /// Frame width in pixels
    #[serde(default)]
    pub frame_width: u32,
    /// Frame height in pixels
    #[serde(default)]
    pub frame_height: u32,
}

impl LandmarkSet {
    /// Image points in the same order as [`crate::constants::FACE_MODEL_POINTS`]
    #[must_use]
    pub fn image_points(&self) -> [Point2<f64>; NUM_POSE_LANDMARKS] {
        [
            self.nose_tip,
            self.chin,
            self.left_eye_outer,
            self.right_eye_outer,
            self.left_mouth_corner,
            self.right_mouth_corner,
        ]
        .map(|[x, y]| Point2::new(x, y))
    }

    /// Build a set from points ordered like the face model
    #[must_use]
    pub fn from_points(points: [[f64; 2]; NUM_POSE_LANDMARKS], frame_width: u32, frame_height: u32) -> Self {
        let [nose_tip, chin, left_eye_outer, right_eye_outer, left_mouth_corner, right_mouth_corner] = points;
        Self {
            nose_tip,
            chin,
            left_eye_outer,
            right_eye_outer,
            left_mouth_corner,
            right_mouth_corner,
            frame_width,
            frame_height,
        }
    }
}

/// The seven emotion classes in their fixed enumeration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    /// Anger
    Angry,
    /// Disgust
    Disgust,
    /// Fear or anxiety
    Fear,
    /// Happiness
    Happy,
    /// Sadness
    Sad,
    /// Surprise
    Surprise,
    /// Calm
    Neutral,
}

impl Emotion {
    /// All emotions; ties in [`EmotionVector::dominant`] go to the earliest entry
    pub const ALL: [Self; 7] = [
        Self::Angry,
        Self::Disgust,
        Self::Fear,
        Self::Happy,
        Self::Sad,
        Self::Surprise,
        Self::Neutral,
    ];

    /// Lowercase name as serialized
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Angry => "angry",
            Self::Disgust => "disgust",
            Self::Fear => "fear",
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Surprise => "surprise",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-emotion confidence, each in [0, 100]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionVector {
    /// Anger score
    pub angry: f64,
    /// Disgust score
    pub disgust: f64,
    /// Fear score
    pub fear: f64,
    /// Happiness score
    pub happy: f64,
    /// Sadness score
    pub sad: f64,
    /// Surprise score
    pub surprise: f64,
    /// Neutral score
    pub neutral: f64,
}

impl EmotionVector {
    /// Score for a single emotion
    #[must_use]
    pub fn score(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Angry => self.angry,
            Emotion::Disgust => self.disgust,
            Emotion::Fear => self.fear,
            Emotion::Happy => self.happy,
            Emotion::Sad => self.sad,
            Emotion::Surprise => self.surprise,
            Emotion::Neutral => self.neutral,
        }
    }

    /// Highest-scoring emotion; the first in [`Emotion::ALL`] wins a tie
    #[must_use]
    pub fn dominant(&self) -> Emotion {
        let mut best = Emotion::ALL[0];
        for emotion in Emotion::ALL.into_iter().skip(1) {
            if self.score(emotion) > self.score(best) {
                best = emotion;
            }
        }
        best
    }

    /// Check every score is finite and within [0, 100]
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] naming the first offending emotion
    pub fn validate(&self) -> Result<()> {
        for emotion in Emotion::ALL {
            let value = self.score(emotion);
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(Error::InvalidInput(format!(
                    "{emotion} score {value} outside [0, 100]"
                )));
            }
        }
        Ok(())
    }
}
