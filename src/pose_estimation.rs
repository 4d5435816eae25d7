use crate::{
    constants::{FACE_MODEL_POINTS, NUM_POSE_LANDMARKS, PITCH_THRESHOLD, SINGULARITY_EPSILON, YAW_THRESHOLD},
    pnp::{solve_pnp, CameraIntrinsics, PnpConfig},
    types::LandmarkSet,
    utils::round_to,
    Result,
};
use nalgebra::{Matrix3, Point3};
use serde::{Deserialize, Serialize};

/// Coarse gaze direction derived from yaw and pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceDirection {
    /// Within both thresholds
    Center,
    /// Yaw below the negative threshold
    Left,
    /// Yaw above the threshold
    Right,
    /// Pitch above the threshold
    Up,
    /// Pitch below the negative threshold
    Down,
    /// Outside the thresholds without a dominant axis
    Away,
}

impl FaceDirection {
    /// Classify angles in degrees. Yaw is checked before pitch.
    #[must_use]
    pub fn classify(yaw: f64, pitch: f64) -> Self {
        if yaw.abs() < YAW_THRESHOLD && pitch.abs() < PITCH_THRESHOLD {
            Self::Center
        } else if yaw < -YAW_THRESHOLD {
            Self::Left
        } else if yaw > YAW_THRESHOLD {
            Self::Right
        } else if pitch < -PITCH_THRESHOLD {
            Self::Down
        } else if pitch > PITCH_THRESHOLD {
            Self::Up
        } else {
            Self::Away
        }
    }
}

/// Feedback for the candidate about where they are looking
#[must_use]
pub fn feedback_message(is_looking_at_camera: bool, direction: FaceDirection) -> &'static str {
    if is_looking_at_camera {
        return "You are looking straight at the camera.";
    }
    match direction {
        FaceDirection::Left => "You are facing slightly left. Please look at the camera.",
        FaceDirection::Right => "You are facing slightly right. Please look at the camera.",
        FaceDirection::Up => "You are facing slightly up. Please look at the camera.",
        FaceDirection::Down => "You are facing slightly down. Please look at the camera.",
        FaceDirection::Center | FaceDirection::Away => "Please turn toward the camera.",
    }
}

/// Euler angles in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles {
    /// Yaw
    pub yaw: f64,
    /// Pitch
    pub pitch: f64,
    /// Roll
    pub roll: f64,
}

/// Head orientation for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadPose {
    /// Degrees, one decimal
    pub yaw: f64,
    /// Degrees, one decimal
    pub pitch: f64,
    /// Degrees, one decimal
    pub roll: f64,
    /// Both yaw and pitch within threshold
    pub is_looking_at_camera: bool,
    /// Coarse direction
    pub face_direction: FaceDirection,
    /// Candidate-facing message
    pub feedback_message: String,
}

impl HeadPose {
    /// Classify unrounded angles and round them for reporting
    #[must_use]
    pub fn from_angles(angles: EulerAngles) -> Self {
        let is_looking_at_camera = angles.yaw.abs() < YAW_THRESHOLD && angles.pitch.abs() < PITCH_THRESHOLD;
        let face_direction = FaceDirection::classify(angles.yaw, angles.pitch);
        Self {
            yaw: round_to(angles.yaw, 1),
            pitch: round_to(angles.pitch, 1),
            roll: round_to(angles.roll, 1),
            is_looking_at_camera,
            face_direction,
            feedback_message: feedback_message(is_looking_at_camera, face_direction).to_string(),
        }
    }
}

/// Head pose estimator using `PnP` against a fixed six-point face model
#[derive(Debug, Clone)]
pub struct PoseEstimator {
    model_points: [Point3<f64>; NUM_POSE_LANDMARKS],
    config: PnpConfig,
}

impl Default for PoseEstimator {
    fn default() -> Self {
        Self::new(PnpConfig::default())
    }
}

impl PoseEstimator {
    /// Create a new pose estimator with the built-in face model
    #[must_use]
    pub fn new(config: PnpConfig) -> Self {
        Self {
            model_points: FACE_MODEL_POINTS.map(|[x, y, z]| Point3::new(x, y, z)),
            config,
        }
    }

    /// Estimate head pose from the six pose landmarks.
    ///
    /// Intrinsics are approximated from the frame size carried by `landmarks`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PoseEstimation`] if:
    /// - The landmarks are degenerate (collinear, coincident, non-finite)
    /// - The frame has zero width
    /// - The solver fails to converge or places the face behind the camera
    pub fn estimate(&self, landmarks: &LandmarkSet) -> Result<HeadPose> {
        let intrinsics = CameraIntrinsics::from_frame(landmarks.frame_width, landmarks.frame_height);
        let solution = solve_pnp(&self.model_points, &landmarks.image_points(), &intrinsics, &self.config)?;
        log::debug!(
            "PnP solved in {} iterations, rms reprojection {:.3} px",
            solution.iterations,
            solution.rms_error
        );

        let angles = Self::rotation_matrix_to_euler(solution.rotation.matrix());
        Ok(HeadPose::from_angles(angles))
    }

    /// Convert rotation matrix to Euler angles in degrees.
    ///
    /// With `sy = sqrt(r00² + r10²)`: yaw = atan2(r10, r00),
    /// pitch = atan2(-r20, sy), roll = atan2(r21, r22). When `sy` is below
    /// [`SINGULARITY_EPSILON`] yaw is pinned to zero and roll becomes
    /// atan2(-r12, r11).
    #[must_use]
    pub fn rotation_matrix_to_euler(rotation_matrix: &Matrix3<f64>) -> EulerAngles {
        let r = rotation_matrix;
        let sy = (r[(0, 0)] * r[(0, 0)] + r[(1, 0)] * r[(1, 0)]).sqrt();

        let (yaw, pitch, roll) = if sy >= SINGULARITY_EPSILON {
            (
                r[(1, 0)].atan2(r[(0, 0)]),
                (-r[(2, 0)]).atan2(sy),
                r[(2, 1)].atan2(r[(2, 2)]),
            )
        } else {
            (0.0, (-r[(2, 0)]).atan2(sy), (-r[(1, 2)]).atan2(r[(1, 1)]))
        };

        EulerAngles {
            yaw: yaw.to_degrees(),
            pitch: pitch.to_degrees(),
            roll: roll.to_degrees(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Rotation3, Vector3};

    #[test]
    fn test_euler_angle_conversion() {
        // Identity: all zero
        let angles = PoseEstimator::rotation_matrix_to_euler(&Matrix3::identity());
        assert!(angles.yaw.abs() < 1e-9);
        assert!(angles.pitch.abs() < 1e-9);
        assert!(angles.roll.abs() < 1e-9);
    }

    #[test]
    fn test_euler_angle_yaw_is_rotation_about_z() {
        let r = Rotation3::from_axis_angle(&Vector3::z_axis(), 30f64.to_radians());
        let angles = PoseEstimator::rotation_matrix_to_euler(r.matrix());
        assert!((angles.yaw - 30.0).abs() < 1e-9);
        assert!(angles.pitch.abs() < 1e-9);
        assert!(angles.roll.abs() < 1e-9);
    }

    #[test]
    fn test_euler_angle_composite() {
        let r = Rotation3::from_euler_angles(10f64.to_radians(), -20f64.to_radians(), 25f64.to_radians());
        let angles = PoseEstimator::rotation_matrix_to_euler(r.matrix());
        assert!((angles.roll - 10.0).abs() < 1e-9);
        assert!((angles.pitch + 20.0).abs() < 1e-9);
        assert!((angles.yaw - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_euler_angle_gimbal_lock() {
        // Pitch of +90°: r00 = r10 = 0
        let r = Rotation3::from_euler_angles(0.3, std::f64::consts::FRAC_PI_2, 0.0);
        let m = r.matrix();
        let sy = (m[(0, 0)].powi(2) + m[(1, 0)].powi(2)).sqrt();
        assert!(sy < SINGULARITY_EPSILON);

        let angles = PoseEstimator::rotation_matrix_to_euler(m);
        assert_eq!(angles.yaw, 0.0);
        assert!((angles.pitch - 90.0).abs() < 1e-6);
        let expected_roll = (-m[(1, 2)]).atan2(m[(1, 1)]).to_degrees();
        assert!((angles.roll - expected_roll).abs() < 1e-9);
    }

    #[test]
    fn test_direction_classification() {
        assert_eq!(FaceDirection::classify(0.0, 0.0), FaceDirection::Center);
        assert_eq!(FaceDirection::classify(14.9, -14.9), FaceDirection::Center);
        assert_eq!(FaceDirection::classify(-20.0, 0.0), FaceDirection::Left);
        assert_eq!(FaceDirection::classify(20.0, 0.0), FaceDirection::Right);
        assert_eq!(FaceDirection::classify(0.0, -20.0), FaceDirection::Down);
        assert_eq!(FaceDirection::classify(0.0, 20.0), FaceDirection::Up);
    }

    #[test]
    fn test_direction_yaw_dominates_pitch() {
        assert_eq!(FaceDirection::classify(30.0, 40.0), FaceDirection::Right);
        assert_eq!(FaceDirection::classify(-30.0, -40.0), FaceDirection::Left);
    }

    #[test]
    fn test_direction_exact_threshold_is_away() {
        // |yaw| == 15 is neither center nor beyond the threshold
        assert_eq!(FaceDirection::classify(15.0, 0.0), FaceDirection::Away);
        assert_eq!(FaceDirection::classify(0.0, -15.0), FaceDirection::Away);
    }

    #[test]
    fn test_feedback_lookup() {
        let looking = feedback_message(true, FaceDirection::Center);
        let messages: Vec<&str> = [
            FaceDirection::Left,
            FaceDirection::Right,
            FaceDirection::Up,
            FaceDirection::Down,
            FaceDirection::Away,
        ]
        .iter()
        .map(|&d| feedback_message(false, d))
        .collect();

        for (i, a) in messages.iter().enumerate() {
            assert_ne!(*a, looking);
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_head_pose_rounds_after_classifying() {
        let pose = HeadPose::from_angles(EulerAngles {
            yaw: 14.96,
            pitch: -3.04,
            roll: 179.97,
        });
        // 14.96 rounds to 15.0 but classification saw 14.96
        assert_eq!(pose.yaw, 15.0);
        assert_eq!(pose.pitch, -3.0);
        assert_eq!(pose.roll, 180.0);
        assert!(pose.is_looking_at_camera);
        assert_eq!(pose.face_direction, FaceDirection::Center);
    }

    #[test]
    fn test_estimate_frontal_projection() {
        let estimator = PoseEstimator::default();
        let intrinsics = CameraIntrinsics::from_frame(640, 480);
        let rotation = Rotation3::from_axis_angle(&Vector3::x_axis(), std::f64::consts::PI);
        let translation = Vector3::new(0.0, 0.0, 1000.0);
        let points = FACE_MODEL_POINTS.map(|[x, y, z]| {
            let p = intrinsics.project(&(rotation * Vector3::new(x, y, z) + translation)).unwrap();
            [p.x, p.y]
        });

        let pose = estimator.estimate(&LandmarkSet::from_points(points, 640, 480)).unwrap();
        assert!(pose.yaw.abs() <= 0.1);
        assert!(pose.pitch.abs() <= 0.1);
        assert!((pose.roll.abs() - 180.0).abs() <= 0.1);
        assert!(pose.is_looking_at_camera);
        assert_eq!(pose.face_direction, FaceDirection::Center);
    }

    #[test]
    fn test_estimate_symmetric_face_off_model_proportions() {
        let estimator = PoseEstimator::default();
        let points = [[320.0, 240.0], [320.0, 400.0], [250.0, 200.0], [390.0, 200.0], [280.0, 330.0], [360.0, 330.0]];

        let pose = estimator.estimate(&LandmarkSet::from_points(points, 640, 480)).unwrap();
        assert!(pose.yaw.abs() <= 0.1);
        assert!(pose.pitch.abs() <= 0.1);
        assert!(pose.is_looking_at_camera);
        assert_eq!(pose.face_direction, FaceDirection::Center);
    }

    #[test]
    fn test_estimate_degenerate_landmarks() {
        let estimator = PoseEstimator::default();
        let points = [[10.0, 10.0], [20.0, 20.0], [30.0, 30.0], [40.0, 40.0], [50.0, 50.0], [60.0, 60.0]];
        let result = estimator.estimate(&LandmarkSet::from_points(points, 640, 480));
        assert!(matches!(result, Err(crate::Error::PoseEstimation(_))));
    }
}
