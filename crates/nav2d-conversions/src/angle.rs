//! Conversions between a planar heading and a spatial orientation.
//!
//! Headings are rotations about the z axis. Quaternions are `(x, y, z, w)`
//! with `w` the scalar part, and the roll/pitch/yaw decomposition follows the
//! Z-Y-X convention, so the yaw recovered here is the same angle a
//! roll/pitch/yaw decomposition of the full rotation would report.

use core::f64::consts::{PI, TAU};
use libm::{atan2, cos, fabs, sin};

use crate::spatial::Quaternion;

/// Normalize an angle to be within `(-PI, PI]`.
///
/// Angles at `-PI` will be normalized to `PI`.
///
/// # Arguments
///
/// * `angle`: The angle in radians to normalize.
///
/// # Returns
///
/// The normalized angle in radians.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle % TAU;
    if a > PI {
        a - TAU
    } else if a <= -PI {
        a + TAU
    } else {
        a
    }
}

/// Extract the rotation about the z axis from an orientation.
///
/// Evaluated as `atan2(2(wz + xy), w² + x² − y² − z²)`, which is independent
/// of the quaternion's scale. For a unit quaternion the denominator is the
/// familiar `1 − 2(y² + z²)`. When the pitch reaches ±90° the yaw is not
/// separable from the roll and `0.0` is returned.
///
/// # Returns
///
/// The yaw in radians, in `(-PI, PI]`.
pub fn yaw_from_orientation(q: &Quaternion) -> f64 {
    let norm_sq = q.x * q.x + q.y * q.y + q.z * q.z + q.w * q.w;
    let sin_pitch = 2.0 * (q.w * q.y - q.z * q.x) / norm_sq;
    if fabs(sin_pitch) >= 1.0 {
        return 0.0;
    }

    let siny = 2.0 * (q.w * q.z + q.x * q.y);
    let cosy = q.w * q.w + q.x * q.x - q.y * q.y - q.z * q.z;
    normalize_angle(atan2(siny, cosy))
}

/// Build the quaternion for a pure rotation of `yaw` radians about the z axis.
///
/// `yaw` is not normalized first. `yaw` and `yaw + 2π` produce `q` and `-q`,
/// which describe the same rotation.
pub fn orientation_from_yaw(yaw: f64) -> Quaternion {
    let half = yaw * 0.5;
    Quaternion::new(0.0, 0.0, sin(half), cos(half))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use core::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_normalize_angle() {
        assert_abs_diff_eq!(normalize_angle(0.0), 0.0, epsilon = EPSILON);
        assert_abs_diff_eq!(normalize_angle(PI), PI, epsilon = EPSILON);
        assert_abs_diff_eq!(normalize_angle(-PI), PI, epsilon = EPSILON); // -PI folds to PI
        assert_abs_diff_eq!(normalize_angle(3.0 * PI), PI, epsilon = EPSILON);
        assert_abs_diff_eq!(normalize_angle(-3.0 * PI), PI, epsilon = EPSILON);
        assert_abs_diff_eq!(normalize_angle(2.5 * PI), 0.5 * PI, epsilon = EPSILON);
        assert_abs_diff_eq!(normalize_angle(-2.5 * PI), -0.5 * PI, epsilon = EPSILON);
    }

    #[test]
    fn test_yaw_round_trip() {
        let eps = 1e-6;
        for theta in [-PI + eps, -FRAC_PI_2, 0.0, FRAC_PI_2, PI - eps] {
            let q = orientation_from_yaw(theta);
            assert_abs_diff_eq!(yaw_from_orientation(&q), theta, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_orientation_from_yaw_components() {
        let q = orientation_from_yaw(FRAC_PI_2);
        let half = core::f64::consts::FRAC_1_SQRT_2;
        assert_eq!(q.x, 0.0);
        assert_eq!(q.y, 0.0);
        assert_abs_diff_eq!(q.z, half, epsilon = EPSILON);
        assert_abs_diff_eq!(q.w, half, epsilon = EPSILON);

        let identity = orientation_from_yaw(0.0);
        assert_eq!(identity, Quaternion::IDENTITY);
    }

    #[test]
    fn test_unbounded_yaw_is_equivalent_rotation() {
        let q = orientation_from_yaw(0.4);
        let wrapped = orientation_from_yaw(0.4 + TAU);
        // Same rotation, opposite sign.
        assert_abs_diff_eq!(wrapped.z, -q.z, epsilon = EPSILON);
        assert_abs_diff_eq!(wrapped.w, -q.w, epsilon = EPSILON);
        assert_abs_diff_eq!(yaw_from_orientation(&wrapped), 0.4, epsilon = EPSILON);

        let large = orientation_from_yaw(7.0 * PI + 0.25);
        assert_abs_diff_eq!(yaw_from_orientation(&large), -PI + 0.25, epsilon = EPSILON);
    }

    #[test]
    fn test_yaw_at_pi_boundary_is_positive() {
        let q = orientation_from_yaw(-PI);
        assert_abs_diff_eq!(yaw_from_orientation(&q), PI, epsilon = EPSILON);
    }

    #[test]
    fn test_yaw_of_non_unit_quaternion() {
        let q = orientation_from_yaw(1.0);
        let scaled = Quaternion::new(q.x * 3.0, q.y * 3.0, q.z * 3.0, q.w * 3.0);
        assert_abs_diff_eq!(yaw_from_orientation(&scaled), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_yaw_ignores_roll_and_pitch() {
        let q = Quaternion::from_rpy(0.3, 0.4, -2.0);
        assert_abs_diff_eq!(yaw_from_orientation(&q), -2.0, epsilon = EPSILON);
    }

    #[test]
    fn test_yaw_at_gimbal_lock_is_zero() {
        // Pitch of exactly +90 degrees: 2(wy - zx) == 1.
        let half = core::f64::consts::FRAC_1_SQRT_2;
        let q = Quaternion::new(0.0, half, 0.0, half);
        assert_eq!(yaw_from_orientation(&q), 0.0);
    }
}
