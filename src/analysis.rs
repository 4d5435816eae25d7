//! Per-frame orchestration: decode, lighting gate, detection, tension and
//! head pose, assembled into one [`AnalysisResult`].
//!
//! Only decoding and unexpected failures turn the response into
//! `success = false`. A missing face is a successful read with a lighting
//! aware message, and a failed pose solve just leaves `head_pose` empty.

use crate::{
    config::Config,
    decode::{Base64Decoder, FrameDecoder},
    detector::FaceDetector,
    pnp::PnpConfig,
    pose_estimation::{HeadPose, PoseEstimator},
    quality::{self, BrightnessStatus, QualityResult},
    tension::{self, TensionResult},
    types::{EmotionVector, FaceRegion},
    Result,
};
use image::DynamicImage;
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};

/// Message returned when the payload cannot be decoded
pub const INVALID_IMAGE_MESSAGE: &str = "invalid image data";

/// Why a frame produced no usable face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The detector found nothing
    NoFace,
    /// The detector returned a box with zero width or height
    DegenerateRegion,
}

/// Candidate-facing message for a frame without a usable face.
///
/// The lighting verdict picks the wording so a dark or backlit frame tells
/// the candidate what to fix.
#[must_use]
pub fn empty_message(reason: EmptyReason, status: BrightnessStatus) -> &'static str {
    match (reason, status) {
        (EmptyReason::NoFace, BrightnessStatus::TooDark) => {
            "The lighting is too dark to detect a face. Please move somewhere brighter."
        }
        (EmptyReason::NoFace, BrightnessStatus::TooBright) => {
            "The lighting is too bright to detect a face. Please avoid backlight."
        }
        (EmptyReason::NoFace, _) => "No face was detected. Please make sure your face is visible to the camera.",
        (EmptyReason::DegenerateRegion, BrightnessStatus::TooDark) => {
            "The lighting is too dark to recognize your face. Please try a brighter place."
        }
        (EmptyReason::DegenerateRegion, BrightnessStatus::TooBright) => {
            "The lighting is too bright. Please avoid backlight."
        }
        (EmptyReason::DegenerateRegion, _) => "No face was detected.",
    }
}

/// Full engagement read for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// False only for undecodable payloads and unexpected failures
    pub success: bool,
    /// True when a usable face region was found
    pub face_detected: bool,
    /// Face bounding box
    pub face_region: Option<FaceRegion>,
    /// Raw emotion scores from the classifier
    pub emotions: Option<EmotionVector>,
    /// Tension and relaxation read
    pub tension: Option<TensionResult>,
    /// Lighting verdict
    pub image_quality: Option<QualityResult>,
    /// Head orientation; empty when the pose could not be solved
    pub head_pose: Option<HeadPose>,
    /// Message for the candidate when no full read was possible
    pub error_message: Option<String>,
}

impl AnalysisResult {
    /// Terminal failure carrying only a message
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            face_detected: false,
            face_region: None,
            emotions: None,
            tension: None,
            image_quality: None,
            head_pose: None,
            error_message: Some(message.into()),
        }
    }

    /// Successful read of a frame without a usable face
    #[must_use]
    pub fn no_face(image_quality: QualityResult, reason: EmptyReason) -> Self {
        Self {
            success: true,
            face_detected: false,
            face_region: None,
            emotions: None,
            tension: None,
            image_quality: Some(image_quality),
            head_pose: None,
            error_message: Some(empty_message(reason, image_quality.brightness_status).to_string()),
        }
    }
}

/// Runs the analysis pipeline against an injected detector.
///
/// Holds no per-request state, so one analyzer can serve concurrent calls.
pub struct FaceAnalyzer<D, F = Base64Decoder> {
    detector: D,
    decoder: F,
    pose_estimator: PoseEstimator,
}

impl<D: FaceDetector> FaceAnalyzer<D> {
    /// Analyzer decoding standard base64 payloads
    #[must_use]
    pub fn new(detector: D) -> Self {
        Self::with_decoder(detector, Base64Decoder, PnpConfig::default())
    }

    /// Analyzer configured from a loaded [`Config`]
    #[must_use]
    pub fn from_config(detector: D, config: &Config) -> Self {
        Self::with_decoder(detector, Base64Decoder, config.pose)
    }
}

impl<D: FaceDetector, F: FrameDecoder> FaceAnalyzer<D, F> {
    /// Analyzer with a custom payload decoder and solver settings
    #[must_use]
    pub fn with_decoder(detector: D, decoder: F, pose: PnpConfig) -> Self {
        Self {
            detector,
            decoder,
            pose_estimator: PoseEstimator::new(pose),
        }
    }

    /// Analyze one base64 (or data URL) payload. Never fails; every
    /// outcome is a structured result.
    pub fn analyze(&self, image_base64: &str) -> AnalysisResult {
        let frame = match self.decoder.decode(image_base64) {
            Ok(frame) => frame,
            Err(e) => {
                if e.is_decode() {
                    warn!("Invalid image payload: {e}");
                } else {
                    warn!("Frame decoder failed: {e}");
                }
                return AnalysisResult::failure(INVALID_IMAGE_MESSAGE);
            }
        };
        debug!("Decoded {}x{} frame", frame.width(), frame.height());

        match self.analyze_frame(&frame) {
            Ok(result) => result,
            Err(e) => {
                error!("Face analysis error: {e}");
                AnalysisResult::failure(format!("An error occurred during analysis: {e}"))
            }
        }
    }

    /// Analyze an already-decoded frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the detector fails or reports an emotion vector
    /// outside [0, 100]. Pose failures are not errors.
    pub fn analyze_frame(&self, frame: &DynamicImage) -> Result<AnalysisResult> {
        let image_quality = quality::assess(frame);
        info!(
            "Brightness analysed: {:.1} ({:?})",
            image_quality.average_brightness, image_quality.brightness_status
        );

        let Some(detection) = self.detector.detect(frame)? else {
            info!("No face detected");
            return Ok(AnalysisResult::no_face(image_quality, EmptyReason::NoFace));
        };
        if detection.region.is_degenerate() {
            info!(
                "Detected face region is empty ({}x{})",
                detection.region.w, detection.region.h
            );
            return Ok(AnalysisResult::no_face(image_quality, EmptyReason::DegenerateRegion));
        }

        detection.emotions.validate()?;
        let tension = tension::score(&detection.emotions);

        let head_pose = match detection.landmarks.as_ref() {
            Some(landmarks) => match self.pose_estimator.estimate(landmarks) {
                Ok(pose) => {
                    info!(
                        "Head pose estimated: yaw={:.1}, pitch={:.1}, roll={:.1}",
                        pose.yaw, pose.pitch, pose.roll
                    );
                    Some(pose)
                }
                Err(e) => {
                    warn!("Head pose estimation failed: {e}");
                    None
                }
            },
            None => {
                warn!("No landmarks for head pose estimation");
                None
            }
        };

        info!(
            "Face analysis completed: dominant={}, tension={}, relax={}",
            tension.dominant_emotion, tension.tension_level, tension.relax_level
        );

        Ok(AnalysisResult {
            success: true,
            face_detected: true,
            face_region: Some(detection.region),
            emotions: Some(detection.emotions),
            tension: Some(tension),
            image_quality: Some(image_quality),
            head_pose,
            error_message: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::{Detection, RecordedDetector};
    use crate::Error;
    use image::{GrayImage, Luma};

    struct FailingDetector;

    impl FaceDetector for FailingDetector {
        fn detect(&self, _frame: &DynamicImage) -> Result<Option<Detection>> {
            Err(Error::Detector("model crashed".to_string()))
        }
    }

    struct UnavailableDecoder;

    impl FrameDecoder for UnavailableDecoder {
        fn decode(&self, _payload: &str) -> Result<DynamicImage> {
            Err(Error::Io(std::io::Error::new(std::io::ErrorKind::Other, "codec offline")))
        }
    }

    fn gray(value: u8) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_pixel(64, 48, Luma([value])))
    }

    fn face(region: FaceRegion) -> Detection {
        Detection {
            region,
            landmarks: None,
            emotions: EmotionVector {
                neutral: 80.0,
                happy: 20.0,
                ..EmotionVector::default()
            },
        }
    }

    #[test]
    fn test_empty_messages_depend_on_lighting() {
        for reason in [EmptyReason::NoFace, EmptyReason::DegenerateRegion] {
            let dark = empty_message(reason, BrightnessStatus::TooDark);
            let bright = empty_message(reason, BrightnessStatus::TooBright);
            let ok = empty_message(reason, BrightnessStatus::Ok);
            assert_ne!(dark, bright);
            assert_ne!(dark, ok);
            assert_ne!(bright, ok);
            assert_eq!(ok, empty_message(reason, BrightnessStatus::Unknown));
        }
        assert_ne!(
            empty_message(EmptyReason::NoFace, BrightnessStatus::Ok),
            empty_message(EmptyReason::DegenerateRegion, BrightnessStatus::Ok)
        );
    }

    #[test]
    fn test_failure_has_no_payload() {
        let result = AnalysisResult::failure(INVALID_IMAGE_MESSAGE);
        assert!(!result.success);
        assert!(!result.face_detected);
        assert!(result.face_region.is_none());
        assert!(result.image_quality.is_none());
        assert_eq!(result.error_message.as_deref(), Some("invalid image data"));
    }

    #[test]
    fn test_no_face_on_dark_frame() {
        let analyzer = FaceAnalyzer::new(RecordedDetector::new(None));
        let result = analyzer.analyze_frame(&gray(10)).unwrap();
        assert!(result.success);
        assert!(!result.face_detected);
        assert!(result.face_region.is_none());
        assert!(result.tension.is_none());
        assert_eq!(result.image_quality.unwrap().brightness_status, BrightnessStatus::TooDark);
        assert_eq!(
            result.error_message.as_deref(),
            Some(empty_message(EmptyReason::NoFace, BrightnessStatus::TooDark))
        );
    }

    #[test]
    fn test_degenerate_region_is_empty_detection() {
        let analyzer = FaceAnalyzer::new(RecordedDetector::new(Some(face(FaceRegion::new(5, 5, 0, 30)))));
        let result = analyzer.analyze_frame(&gray(128)).unwrap();
        assert!(result.success);
        assert!(!result.face_detected);
        assert!(result.face_region.is_none());
        assert_eq!(result.error_message.as_deref(), Some("No face was detected."));
    }

    #[test]
    fn test_face_without_landmarks_has_no_pose() {
        let analyzer = FaceAnalyzer::new(RecordedDetector::new(Some(face(FaceRegion::new(5, 5, 30, 30)))));
        let result = analyzer.analyze_frame(&gray(128)).unwrap();
        assert!(result.success);
        assert!(result.face_detected);
        assert!(result.head_pose.is_none());
        assert!(result.error_message.is_none());
        let tension = result.tension.unwrap();
        assert_eq!(tension.relax_level, 0.62);
    }

    #[test]
    fn test_detector_failure_is_reported() {
        let analyzer = FaceAnalyzer::new(FailingDetector);
        assert!(analyzer.analyze_frame(&gray(128)).is_err());

        let payload = crate::decode::encode_payload(&png(&gray(128)));
        let result = analyzer.analyze(&payload);
        assert!(!result.success);
        assert!(!result.face_detected);
        let message = result.error_message.unwrap();
        assert!(message.starts_with("An error occurred during analysis: "));
        assert!(message.contains("model crashed"));
    }

    #[test]
    fn test_invalid_emotions_take_error_path() {
        let mut detection = face(FaceRegion::new(5, 5, 30, 30));
        detection.emotions.fear = 250.0;
        let analyzer = FaceAnalyzer::new(RecordedDetector::new(Some(detection)));
        assert!(matches!(analyzer.analyze_frame(&gray(128)), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_malformed_payload() {
        let analyzer = FaceAnalyzer::new(RecordedDetector::new(None));
        let result = analyzer.analyze("%%%");
        assert_eq!(result, AnalysisResult::failure(INVALID_IMAGE_MESSAGE));
    }

    #[test]
    fn test_decoder_failure_of_any_kind_is_invalid_image() {
        let analyzer =
            FaceAnalyzer::with_decoder(RecordedDetector::new(None), UnavailableDecoder, PnpConfig::default());
        let result = analyzer.analyze("aGVsbG8=");
        assert!(!Error::Io(std::io::Error::new(std::io::ErrorKind::Other, "x")).is_decode());
        assert_eq!(result, AnalysisResult::failure(INVALID_IMAGE_MESSAGE));
    }

    fn png(frame: &DynamicImage) -> Vec<u8> {
        let mut buf = std::io::Cursor::new(Vec::new());
        frame.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }
}
