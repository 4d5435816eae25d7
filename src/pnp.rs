//! Perspective-n-Point solve for the six-point face model.
//!
//! The pose is seeded from a Direct Linear Transform of the 3×4 projection
//! matrix (object points normalized for conditioning), with a frontal seed as
//! a fallback, and then refined by Levenberg-Marquardt on the reprojection
//! error. Rotation updates are applied multiplicatively as
//! `exp([δω]×) · R` so the rotation stays orthonormal throughout.

use crate::{
    constants::{
        CAMERA_CENTER_FACTOR, DEFAULT_COST_TOLERANCE, DEFAULT_MAX_ITERATIONS, DEFAULT_STEP_TOLERANCE, EPSILON,
        NUM_POSE_LANDMARKS,
    },
    error::PnpError,
};
use nalgebra::{DMatrix, Matrix3, Point2, Point3, Rotation3, SMatrix, SVector, Vector2, Vector3, Vector6};
use serde::{Deserialize, Serialize};

const NUM_RESIDUALS: usize = 2 * NUM_POSE_LANDMARKS;

type Residuals = SVector<f64, NUM_RESIDUALS>;
type Jacobian = SMatrix<f64, NUM_RESIDUALS, 6>;

const INITIAL_DAMPING: f64 = 1e-3;
const MIN_DAMPING: f64 = 1e-12;
const MAX_DAMPING: f64 = 1e12;
const ROTATION_DIFF_STEP: f64 = 1e-6;
const TRANSLATION_DIFF_STEP: f64 = 1e-6;
/// Converged when every gradient component is this small relative to the cost
const GRADIENT_TOLERANCE: f64 = 1e-9;

/// Approximate pinhole intrinsics derived from frame geometry alone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraIntrinsics {
    /// Focal length in pixels (both axes)
    pub focal_length: f64,
    /// Principal point x
    pub cx: f64,
    /// Principal point y
    pub cy: f64,
}

impl CameraIntrinsics {
    /// Focal length = frame width, principal point = frame center, no distortion
    #[must_use]
    pub fn from_frame(width: u32, height: u32) -> Self {
        let width = f64::from(width);
        let height = f64::from(height);
        Self {
            focal_length: width,
            cx: width / CAMERA_CENTER_FACTOR,
            cy: height / CAMERA_CENTER_FACTOR,
        }
    }

    /// Camera matrix K
    #[must_use]
    pub fn matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            self.focal_length,
            0.0,
            self.cx,
            0.0,
            self.focal_length,
            self.cy,
            0.0,
            0.0,
            1.0,
        )
    }

    /// True when the focal length is usable
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.focal_length.is_finite() && self.cx.is_finite() && self.cy.is_finite() && self.focal_length > EPSILON
    }

    /// Project a camera-frame point; `None` at or behind the camera plane
    #[must_use]
    pub fn project(&self, point: &Vector3<f64>) -> Option<Point2<f64>> {
        if point.z <= EPSILON {
            return None;
        }
        let pixel = self.matrix() * point;
        Some(Point2::new(pixel.x / pixel.z, pixel.y / pixel.z))
    }

    fn pixel_to_normalized(&self, pixel: &Point2<f64>) -> (f64, f64) {
        (
            (pixel.x - self.cx) / self.focal_length,
            (pixel.y - self.cy) / self.focal_length,
        )
    }
}

/// Solver tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PnpConfig {
    /// Iteration cap for the refinement
    pub max_iterations: usize,
    /// Converged when the step norm falls below this (relative to the translation norm)
    pub step_tolerance: f64,
    /// Converged when the relative cost decrease falls below this
    pub cost_tolerance: f64,
}

impl Default for PnpConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            step_tolerance: DEFAULT_STEP_TOLERANCE,
            cost_tolerance: DEFAULT_COST_TOLERANCE,
        }
    }
}

/// Recovered model-to-camera transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PnpSolution {
    /// Rotation taking model coordinates into the camera frame
    pub rotation: Rotation3<f64>,
    /// Translation in model units (millimetres)
    pub translation: Vector3<f64>,
    /// Root-mean-square reprojection error in pixels
    pub rms_error: f64,
    /// Refinement iterations used
    pub iterations: usize,
}

/// Solve for the pose mapping `object` points onto the observed `image` points.
///
/// # Errors
///
/// Returns an error if:
/// - The intrinsics or any point are not finite
/// - The image points are coincident or collinear
/// - No seed yields a pose in front of the camera
/// - Refinement runs out of iterations without ever lowering the cost
pub fn solve_pnp(
    object: &[Point3<f64>; NUM_POSE_LANDMARKS],
    image: &[Point2<f64>; NUM_POSE_LANDMARKS],
    intrinsics: &CameraIntrinsics,
    config: &PnpConfig,
) -> Result<PnpSolution, PnpError> {
    if !intrinsics.is_valid() {
        return Err(PnpError::DegenerateConfiguration(format!(
            "invalid camera intrinsics (focal length {})",
            intrinsics.focal_length
        )));
    }
    if !object.iter().all(|p| p.coords.iter().all(|v| v.is_finite())) {
        return Err(PnpError::NonFinite("object points"));
    }
    if !image.iter().all(|p| p.coords.iter().all(|v| v.is_finite())) {
        return Err(PnpError::NonFinite("image points"));
    }
    check_image_spread(image)?;

    let mut seeds = Vec::with_capacity(2);
    if let Some(seed) = dlt_seed(object, image, intrinsics) {
        seeds.push(seed);
    } else {
        log::debug!("DLT seed unavailable, using frontal seed only");
    }
    if let Some(seed) = frontal_seed(image, intrinsics) {
        seeds.push(seed);
    }

    let mut best: Option<PnpSolution> = None;
    let mut last_error = PnpError::DegenerateConfiguration("no usable initial pose".to_string());
    for (rotation, translation) in seeds {
        match refine(object, image, intrinsics, rotation, translation, config) {
            Ok(solution) => {
                if best.map_or(true, |b| solution.rms_error < b.rms_error) {
                    best = Some(solution);
                }
            }
            Err(e) => {
                log::debug!("PnP refinement from seed failed: {e}");
                last_error = e;
            }
        }
    }

    best.ok_or(last_error)
}

/// Reject coincident or collinear image points via the 2×2 scatter matrix
fn check_image_spread(image: &[Point2<f64>; NUM_POSE_LANDMARKS]) -> Result<(), PnpError> {
    #[allow(clippy::cast_precision_loss)]
    let n = NUM_POSE_LANDMARKS as f64;
    let mean = image.iter().fold(Vector2::zeros(), |acc, p| acc + p.coords) / n;

    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for p in image {
        let dx = p.x - mean.x;
        let dy = p.y - mean.y;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }

    let trace = sxx + syy;
    let det = sxx * syy - sxy * sxy;
    let disc = ((trace * trace) / 4.0 - det).max(0.0).sqrt();
    let major = trace / 2.0 + disc;
    let minor = trace / 2.0 - disc;

    if major <= EPSILON {
        return Err(PnpError::DegenerateConfiguration("image points coincide".to_string()));
    }
    if minor <= 1e-9 * major {
        return Err(PnpError::DegenerateConfiguration("image points are collinear".to_string()));
    }
    Ok(())
}

/// Linear estimate of [R|t] from the null vector of the DLT system
fn dlt_seed(
    object: &[Point3<f64>; NUM_POSE_LANDMARKS],
    image: &[Point2<f64>; NUM_POSE_LANDMARKS],
    intrinsics: &CameraIntrinsics,
) -> Option<(Rotation3<f64>, Vector3<f64>)> {
    #[allow(clippy::cast_precision_loss)]
    let n = NUM_POSE_LANDMARKS as f64;
    let centroid = object.iter().fold(Vector3::zeros(), |acc, p| acc + p.coords) / n;
    let mean_dist = object.iter().map(|p| (p.coords - centroid).norm()).sum::<f64>() / n;
    if mean_dist <= EPSILON {
        return None;
    }
    let scale = 3.0_f64.sqrt() / mean_dist;

    let mut a = DMatrix::<f64>::zeros(NUM_RESIDUALS, 12);
    for (i, (obj, img)) in object.iter().zip(image.iter()).enumerate() {
        let xn = (obj.coords - centroid) * scale;
        let xh = [xn.x, xn.y, xn.z, 1.0];
        let (u, v) = intrinsics.pixel_to_normalized(img);

        // Row 2i:   [ Xh | 0  | -u Xh ]
        // Row 2i+1: [ 0  | Xh | -v Xh ]
        for (k, &value) in xh.iter().enumerate() {
            a[(2 * i, k)] = value;
            a[(2 * i, 8 + k)] = -u * value;
            a[(2 * i + 1, 4 + k)] = value;
            a[(2 * i + 1, 8 + k)] = -v * value;
        }
    }

    let ata = a.transpose() * &a;
    let eig = nalgebra::SymmetricEigen::new(ata);
    let mut min_idx = 0;
    let mut min_val = eig.eigenvalues[0].abs();
    for i in 1..12 {
        let value = eig.eigenvalues[i].abs();
        if value < min_val {
            min_val = value;
            min_idx = i;
        }
    }
    let p = eig.eigenvectors.column(min_idx);

    let m_n = Matrix3::new(p[0], p[1], p[2], p[4], p[5], p[6], p[8], p[9], p[10]);
    let p4_n = Vector3::new(p[3], p[7], p[11]);

    // Undo the object normalization: P = P_n · [sI, -s c; 0, 1]
    let mut m = m_n * scale;
    let mut p4 = p4_n - m * centroid;
    if m.determinant() < 0.0 {
        m = -m;
        p4 = -p4;
    }

    let svd = m.svd(true, true);
    let (u, v_t) = (svd.u?, svd.v_t?);
    let rotation = u * v_t;
    if rotation.determinant() <= 0.0 {
        return None;
    }
    let s = svd.singular_values.sum() / 3.0;
    if !s.is_finite() || s <= EPSILON {
        return None;
    }
    let translation = p4 / s;
    if !rotation.iter().chain(translation.iter()).all(|v| v.is_finite()) {
        return None;
    }

    let rotation = Rotation3::from_matrix_unchecked(rotation);
    let in_front = object.iter().all(|obj| (rotation * obj.coords + translation).z > EPSILON);
    in_front.then_some((rotation, translation))
}

/// Face squarely toward the camera, depth from the eye span
fn frontal_seed(
    image: &[Point2<f64>; NUM_POSE_LANDMARKS],
    intrinsics: &CameraIntrinsics,
) -> Option<(Rotation3<f64>, Vector3<f64>)> {
    const MODEL_EYE_SPAN: f64 = 450.0;

    let eye_span = (image[3] - image[2]).norm();
    if eye_span <= EPSILON {
        return None;
    }
    let depth = intrinsics.focal_length * MODEL_EYE_SPAN / eye_span;
    let (u, v) = intrinsics.pixel_to_normalized(&image[0]);
    let translation = Vector3::new(u * depth, v * depth, depth);

    // Model y points up, image y points down
    let rotation = Rotation3::from_axis_angle(&Vector3::x_axis(), std::f64::consts::PI);
    Some((rotation, translation))
}

fn residuals(
    object: &[Point3<f64>; NUM_POSE_LANDMARKS],
    image: &[Point2<f64>; NUM_POSE_LANDMARKS],
    intrinsics: &CameraIntrinsics,
    rotation: &Rotation3<f64>,
    translation: &Vector3<f64>,
) -> Result<Residuals, PnpError> {
    let mut r = Residuals::zeros();
    for (i, (obj, img)) in object.iter().zip(image.iter()).enumerate() {
        let projected = intrinsics
            .project(&(rotation * obj.coords + translation))
            .ok_or(PnpError::BehindCamera)?;
        r[2 * i] = projected.x - img.x;
        r[2 * i + 1] = projected.y - img.y;
    }
    if r.iter().all(|v| v.is_finite()) {
        Ok(r)
    } else {
        Err(PnpError::NonFinite("reprojection residuals"))
    }
}

fn apply_step(rotation: &Rotation3<f64>, translation: &Vector3<f64>, step: &Vector6<f64>) -> (Rotation3<f64>, Vector3<f64>) {
    let omega = Vector3::new(step[0], step[1], step[2]);
    let delta_t = Vector3::new(step[3], step[4], step[5]);
    (Rotation3::from_scaled_axis(omega) * rotation, translation + delta_t)
}

/// Central-difference Jacobian with respect to the (δω, δt) update
fn jacobian(
    object: &[Point3<f64>; NUM_POSE_LANDMARKS],
    image: &[Point2<f64>; NUM_POSE_LANDMARKS],
    intrinsics: &CameraIntrinsics,
    rotation: &Rotation3<f64>,
    translation: &Vector3<f64>,
) -> Result<Jacobian, PnpError> {
    let mut jac = Jacobian::zeros();
    for k in 0..6 {
        let h = if k < 3 {
            ROTATION_DIFF_STEP
        } else {
            TRANSLATION_DIFF_STEP * (1.0 + translation[k - 3].abs())
        };
        let mut step = Vector6::zeros();
        step[k] = h;
        let (r_plus, t_plus) = apply_step(rotation, translation, &step);
        step[k] = -h;
        let (r_minus, t_minus) = apply_step(rotation, translation, &step);

        let plus = residuals(object, image, intrinsics, &r_plus, &t_plus)?;
        let minus = residuals(object, image, intrinsics, &r_minus, &t_minus)?;
        jac.set_column(k, &((plus - minus) / (2.0 * h)));
    }
    Ok(jac)
}

fn refine(
    object: &[Point3<f64>; NUM_POSE_LANDMARKS],
    image: &[Point2<f64>; NUM_POSE_LANDMARKS],
    intrinsics: &CameraIntrinsics,
    mut rotation: Rotation3<f64>,
    mut translation: Vector3<f64>,
    config: &PnpConfig,
) -> Result<PnpSolution, PnpError> {
    let mut r = residuals(object, image, intrinsics, &rotation, &translation)?;
    let mut cost = r.norm_squared();
    let initial_cost = cost;
    let mut damping = INITIAL_DAMPING;

    let finish = |rotation: Rotation3<f64>, translation: Vector3<f64>, cost: f64, iterations: usize| {
        #[allow(clippy::cast_precision_loss)]
        let rms_error = (cost / NUM_POSE_LANDMARKS as f64).sqrt();
        log::debug!("PnP converged after {iterations} iterations, rms {rms_error:.4} px");
        PnpSolution {
            rotation,
            translation,
            rms_error,
            iterations,
        }
    };

    for iteration in 1..=config.max_iterations {
        if cost <= EPSILON {
            return Ok(finish(rotation, translation, cost, iteration - 1));
        }

        let jac = jacobian(object, image, intrinsics, &rotation, &translation)?;
        let jtj = jac.transpose() * jac;
        let gradient = jac.transpose() * r;
        if gradient.amax() <= GRADIENT_TOLERANCE * (1.0 + cost) {
            return Ok(finish(rotation, translation, cost, iteration - 1));
        }

        loop {
            let mut damped = jtj;
            for i in 0..6 {
                damped[(i, i)] += damping * jtj[(i, i)].max(EPSILON);
            }

            let candidate = damped.cholesky().map(|chol| -chol.solve(&gradient));
            let accepted = candidate.and_then(|step| {
                let (cand_r, cand_t) = apply_step(&rotation, &translation, &step);
                let cand_res = residuals(object, image, intrinsics, &cand_r, &cand_t).ok()?;
                let cand_cost = cand_res.norm_squared();
                (cand_cost < cost).then_some((step, cand_r, cand_t, cand_res, cand_cost))
            });

            match accepted {
                Some((step, cand_r, cand_t, cand_res, cand_cost)) => {
                    let decrease = cost - cand_cost;
                    rotation = cand_r;
                    translation = cand_t;
                    r = cand_res;
                    let previous = cost;
                    cost = cand_cost;
                    damping = (damping / 10.0).max(MIN_DAMPING);

                    let small_step = step.norm() <= config.step_tolerance * (1.0 + translation.norm());
                    let small_decrease = decrease <= config.cost_tolerance * previous;
                    if small_step || small_decrease {
                        return Ok(finish(rotation, translation, cost, iteration));
                    }
                    break;
                }
                None => {
                    damping *= 10.0;
                    if damping > MAX_DAMPING {
                        // No damping lowers the cost: local minimum
                        return Ok(finish(rotation, translation, cost, iteration));
                    }
                }
            }
        }
    }

    // Out of iterations: keep the best pose if refinement made progress
    if cost.is_finite() && cost < initial_cost {
        log::debug!("PnP hit the {} iteration cap, keeping best estimate", config.max_iterations);
        return Ok(finish(rotation, translation, cost, config.max_iterations));
    }

    Err(PnpError::NotConverged {
        iterations: config.max_iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FACE_MODEL_POINTS;

    fn model() -> [Point3<f64>; NUM_POSE_LANDMARKS] {
        FACE_MODEL_POINTS.map(|[x, y, z]| Point3::new(x, y, z))
    }

    fn project_all(
        rotation: &Rotation3<f64>,
        translation: &Vector3<f64>,
        intrinsics: &CameraIntrinsics,
    ) -> [Point2<f64>; NUM_POSE_LANDMARKS] {
        model().map(|p| intrinsics.project(&(rotation * p.coords + translation)).unwrap())
    }

    fn rotation_angle_between(a: &Rotation3<f64>, b: &Rotation3<f64>) -> f64 {
        (a.inverse() * b).angle()
    }

    #[test]
    fn test_intrinsics_from_frame() {
        let k = CameraIntrinsics::from_frame(640, 480);
        assert_eq!(k.focal_length, 640.0);
        assert_eq!(k.cx, 320.0);
        assert_eq!(k.cy, 240.0);
        assert_eq!(k.matrix()[(0, 0)], 640.0);
        assert_eq!(k.matrix()[(1, 2)], 240.0);
        assert_eq!(k.matrix()[(2, 2)], 1.0);
    }

    #[test]
    fn test_recovers_frontal_pose() {
        let k = CameraIntrinsics::from_frame(640, 480);
        let rotation = Rotation3::from_axis_angle(&Vector3::x_axis(), std::f64::consts::PI);
        let translation = Vector3::new(0.0, 0.0, 1000.0);
        let image = project_all(&rotation, &translation, &k);

        let solution = solve_pnp(&model(), &image, &k, &PnpConfig::default()).unwrap();
        assert!(rotation_angle_between(&solution.rotation, &rotation) < 1e-4);
        assert!((solution.translation - translation).norm() < 1e-2);
        assert!(solution.rms_error < 1e-3);
    }

    #[test]
    fn test_recovers_turned_pose() {
        let k = CameraIntrinsics::from_frame(1280, 720);
        let rotation = Rotation3::from_euler_angles(0.2, -0.35, 0.1)
            * Rotation3::from_axis_angle(&Vector3::x_axis(), std::f64::consts::PI);
        let translation = Vector3::new(40.0, -25.0, 1500.0);
        let image = project_all(&rotation, &translation, &k);

        let solution = solve_pnp(&model(), &image, &k, &PnpConfig::default()).unwrap();
        assert!(rotation_angle_between(&solution.rotation, &rotation) < 1e-4);
        assert!(solution.rms_error < 1e-3);
    }

    #[test]
    fn test_noisy_landmarks_still_converge() {
        let k = CameraIntrinsics::from_frame(640, 480);
        let rotation = Rotation3::from_axis_angle(&Vector3::x_axis(), std::f64::consts::PI);
        let translation = Vector3::new(0.0, 0.0, 1000.0);
        let mut image = project_all(&rotation, &translation, &k);
        let noise = [0.8, -0.5, 0.3, -0.9, 0.6, -0.2];
        for (p, n) in image.iter_mut().zip(noise) {
            p.x += n;
            p.y -= n;
        }

        let solution = solve_pnp(&model(), &image, &k, &PnpConfig::default()).unwrap();
        assert!(rotation_angle_between(&solution.rotation, &rotation) < 0.1);
        assert!(solution.rms_error < 2.0);
    }

    #[test]
    fn test_symmetric_landmarks_off_model_proportions() {
        // Symmetric about the principal point but not a projection of the model
        let k = CameraIntrinsics::from_frame(640, 480);
        let image = [[320.0, 240.0], [320.0, 400.0], [250.0, 200.0], [390.0, 200.0], [280.0, 330.0], [360.0, 330.0]]
            .map(|[x, y]| Point2::new(x, y));

        let solution = solve_pnp(&model(), &image, &k, &PnpConfig::default()).unwrap();
        assert!(solution.rms_error.is_finite());
        assert!(solution.iterations <= PnpConfig::default().max_iterations);

        // Mirror symmetry leaves no rotation out of the vertical plane
        let r = solution.rotation.matrix();
        assert!(r[(1, 0)].abs() < 1e-6);
        assert!(r[(2, 0)].abs() < 1e-6);
    }

    #[test]
    fn test_iteration_cap_keeps_best_estimate() {
        let k = CameraIntrinsics::from_frame(640, 480);
        let image = [[320.0, 240.0], [320.0, 400.0], [250.0, 200.0], [390.0, 200.0], [280.0, 330.0], [360.0, 330.0]]
            .map(|[x, y]| Point2::new(x, y));
        let config = PnpConfig {
            max_iterations: 2,
            ..PnpConfig::default()
        };

        let solution = solve_pnp(&model(), &image, &k, &config).unwrap();
        assert!(solution.iterations <= 2);
        assert!(solution.rms_error.is_finite());
    }

    #[test]
    fn test_collinear_points_rejected() {
        let k = CameraIntrinsics::from_frame(640, 480);
        let image: [Point2<f64>; NUM_POSE_LANDMARKS] = [0.0, 10.0, 20.0, 30.0, 40.0, 50.0]
            .map(|t| Point2::new(100.0 + t, 100.0 + 2.0 * t));
        let result = solve_pnp(&model(), &image, &k, &PnpConfig::default());
        assert!(matches!(result, Err(PnpError::DegenerateConfiguration(_))));
    }

    #[test]
    fn test_coincident_points_rejected() {
        let k = CameraIntrinsics::from_frame(640, 480);
        let image = [Point2::new(320.0, 240.0); NUM_POSE_LANDMARKS];
        let result = solve_pnp(&model(), &image, &k, &PnpConfig::default());
        assert!(matches!(result, Err(PnpError::DegenerateConfiguration(_))));
    }

    #[test]
    fn test_non_finite_rejected() {
        let k = CameraIntrinsics::from_frame(640, 480);
        let mut image = [Point2::new(320.0, 240.0); NUM_POSE_LANDMARKS];
        image[2] = Point2::new(f64::NAN, 1.0);
        let result = solve_pnp(&model(), &image, &k, &PnpConfig::default());
        assert_eq!(result, Err(PnpError::NonFinite("image points")));
    }

    #[test]
    fn test_zero_width_frame_rejected() {
        let k = CameraIntrinsics::from_frame(0, 480);
        let rotation = Rotation3::from_axis_angle(&Vector3::x_axis(), std::f64::consts::PI);
        let image = project_all(&rotation, &Vector3::new(0.0, 0.0, 1000.0), &CameraIntrinsics::from_frame(640, 480));
        let result = solve_pnp(&model(), &image, &k, &PnpConfig::default());
        assert!(matches!(result, Err(PnpError::DegenerateConfiguration(_))));
    }

    #[test]
    fn test_dlt_seed_exact_on_clean_data() {
        let k = CameraIntrinsics::from_frame(640, 480);
        let rotation = Rotation3::from_euler_angles(0.1, 0.2, -0.1)
            * Rotation3::from_axis_angle(&Vector3::x_axis(), std::f64::consts::PI);
        let translation = Vector3::new(10.0, 20.0, 900.0);
        let image = project_all(&rotation, &translation, &k);

        let (seed_r, seed_t) = dlt_seed(&model(), &image, &k).unwrap();
        assert!(rotation_angle_between(&seed_r, &rotation) < 1e-5);
        assert!((seed_t - translation).norm() < 1e-2);
    }

    #[test]
    fn test_projection_behind_camera_is_none() {
        let k = CameraIntrinsics::from_frame(640, 480);
        assert!(k.project(&Vector3::new(0.0, 0.0, -5.0)).is_none());
        assert!(k.project(&Vector3::new(0.0, 0.0, 0.0)).is_none());
        assert_eq!(k.project(&Vector3::new(0.0, 0.0, 10.0)), Some(Point2::new(320.0, 240.0)));
    }
}
