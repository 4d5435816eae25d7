//! Constants used throughout the analysis pipeline

/// Number of facial landmarks used for the pose solve
pub const NUM_POSE_LANDMARKS: usize = 6;

/// 3D anthropometric face model in millimetres, nose tip at the origin.
///
/// Order: nose tip, chin, left eye outer corner, right eye outer corner,
/// left mouth corner, right mouth corner.
pub const FACE_MODEL_POINTS: [[f64; 3]; NUM_POSE_LANDMARKS] = [
    [0.0, 0.0, 0.0],
    [0.0, -330.0, -65.0],
    [-225.0, 170.0, -135.0],
    [225.0, 170.0, -135.0],
    [-150.0, -150.0, -125.0],
    [150.0, -150.0, -125.0],
];

/// Camera matrix center factor (principal point = frame size / factor)
pub const CAMERA_CENTER_FACTOR: f64 = 2.0;

/// Mean luminance below which a frame is too dark
pub const DARK_THRESHOLD: u8 = 50;

/// Mean luminance above which a frame is too bright
pub const BRIGHT_THRESHOLD: u8 = 220;

const _: () = assert!(DARK_THRESHOLD < BRIGHT_THRESHOLD);

/// Brightness reported when the frame cannot be measured
pub const DEFAULT_BRIGHTNESS: f64 = 128.0;

/// Absolute yaw (degrees) below which the head counts as facing the camera
pub const YAW_THRESHOLD: f64 = 15.0;

/// Absolute pitch (degrees) below which the head counts as facing the camera
pub const PITCH_THRESHOLD: f64 = 15.0;

/// Below this `sy` the Euler decomposition takes the gimbal-lock branch
pub const SINGULARITY_EPSILON: f64 = 1e-6;

/// Emotion scores arrive as percentages
pub const EMOTION_SCALE: f64 = 100.0;

/// Tension above this is reported as negative feedback
pub const HIGH_TENSION: f64 = 0.6;

/// Tension above this is reported as a mild warning
pub const MODERATE_TENSION: f64 = 0.4;

/// Relaxation above this gets the strongest positive message
pub const HIGH_RELAX: f64 = 0.7;

/// Relaxation above this gets the calm positive message
pub const MODERATE_RELAX: f64 = 0.5;

/// Default PnP solver iteration cap
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Default PnP step-norm convergence tolerance
pub const DEFAULT_STEP_TOLERANCE: f64 = 1e-10;

/// Default PnP relative cost-change convergence tolerance
pub const DEFAULT_COST_TOLERANCE: f64 = 1e-10;

/// Numeric precision epsilon
pub const EPSILON: f64 = 1e-12;
