//! # Orientation - quaternion to Euler angle conversion
//!
//! Converts a 3-D orientation quaternion into the three conventional Euler
//! angles (roll, pitch, yaw) using the extrinsic XYZ convention, the standard
//! aerospace roll-pitch-yaw decomposition:
//!
//! - roll (φ): rotation around the X axis, in (-π, π]
//! - pitch (θ): rotation around the Y axis, in [-π/2, π/2]
//! - yaw (ψ): rotation around the Z axis, in (-π, π]
//!
//! The input is a raw [`nalgebra::Quaternion`], not a `UnitQuaternion`: the
//! caller's quaternion is used as-is, without normalization or validation.
//! Output is only meaningful for unit-norm input; degenerate input passes
//! through the closed-form expressions unchanged (NaN components propagate to
//! the angles, a zero quaternion collapses to zero angles) and never panics.

use nalgebra as na;
use std::f64::consts::PI;

/// Convert degrees to radians
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Euler angles (roll, pitch, yaw), in radians unless converted.
///
/// A transient computation result: produced by [`quat_to_euler`], consumed by
/// the caller, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EulerAngles {
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl EulerAngles {
    /// Rescale all three angles from radians to degrees
    pub fn to_degrees(self) -> EulerAngles {
        EulerAngles {
            roll: rad_to_deg(self.roll),
            pitch: rad_to_deg(self.pitch),
            yaw: rad_to_deg(self.yaw),
        }
    }
}

/// Convert a quaternion to Euler angles (roll, pitch, yaw) in radians.
///
/// Extrinsic XYZ convention:
///
/// - roll  = atan2(2(wx + yz), 1 - 2(x² + y²))
/// - pitch = asin(clamp(2(wy - zx), -1, 1))
/// - yaw   = atan2(2(wz + xy), 1 - 2(y² + z²))
///
/// The asin argument is clamped to [-1, 1]: at pitch = ±90° (gimbal lock) the
/// raw argument can exceed the valid domain by floating-point error, and the
/// conversion saturates at ±π/2 instead of producing NaN.
pub fn quat_to_euler(q: &na::Quaternion<f64>) -> EulerAngles {
    let (x, y, z, w) = (q.i, q.j, q.k, q.w);

    let roll = (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y));
    let pitch = (2.0 * (w * y - z * x)).clamp(-1.0, 1.0).asin();
    let yaw = (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z));

    EulerAngles { roll, pitch, yaw }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2};

    const TOL: f64 = 1e-6;

    fn assert_near(actual: f64, expected: f64, what: &str) {
        assert!(
            (actual - expected).abs() < TOL,
            "{} should be {} but was {}",
            what,
            expected,
            actual
        );
    }

    #[test]
    fn test_identity_is_zero_in_both_units() {
        // (x, y, z, w) = (0, 0, 0, 1)
        let q = na::Quaternion::new(1.0, 0.0, 0.0, 0.0);

        let rad = quat_to_euler(&q);
        assert_near(rad.roll, 0.0, "roll (rad)");
        assert_near(rad.pitch, 0.0, "pitch (rad)");
        assert_near(rad.yaw, 0.0, "yaw (rad)");

        let deg = rad.to_degrees();
        assert_near(deg.roll, 0.0, "roll (deg)");
        assert_near(deg.pitch, 0.0, "pitch (deg)");
        assert_near(deg.yaw, 0.0, "yaw (deg)");
    }

    #[test]
    fn test_pure_yaw_rotation() {
        // 90° about Z: (x, y, z, w) = (0, 0, sin 45°, cos 45°)
        let q = na::Quaternion::new(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2);

        let angles = quat_to_euler(&q);
        assert_near(angles.roll, 0.0, "roll");
        assert_near(angles.pitch, 0.0, "pitch");
        assert_near(angles.yaw, FRAC_PI_2, "yaw");
        assert_near(angles.to_degrees().yaw, 90.0, "yaw (deg)");
    }

    #[test]
    fn test_pure_roll_rotation() {
        // 90° about X: (x, y, z, w) = (sin 45°, 0, 0, cos 45°)
        let q = na::Quaternion::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0, 0.0);

        let angles = quat_to_euler(&q);
        assert_near(angles.roll, FRAC_PI_2, "roll");
        assert_near(angles.pitch, 0.0, "pitch");
        assert_near(angles.yaw, 0.0, "yaw");
    }

    #[test]
    fn test_degrees_is_radians_scaled() {
        // Arbitrary (non-unit) quaternion: the scaling property must hold for
        // any input, not just well-formed rotations.
        let q = na::Quaternion::new(0.9, 0.1, 0.2, 0.3);

        let rad = quat_to_euler(&q);
        let deg = rad.to_degrees();
        assert_near(deg.roll, rad_to_deg(rad.roll), "roll scaling");
        assert_near(deg.pitch, rad_to_deg(rad.pitch), "pitch scaling");
        assert_near(deg.yaw, rad_to_deg(rad.yaw), "yaw scaling");
    }

    #[test]
    fn test_pitch_clamped_at_gimbal_lock() {
        // Slightly over-unit quaternion engineered so the raw asin argument
        // 2(wy - zx) = 2 * 0.7072² exceeds 1 by floating-point headroom.
        let q = na::Quaternion::new(0.7072, 0.0, 0.7072, 0.0);
        assert!(2.0 * (q.w * q.j - q.k * q.i) > 1.0);

        let angles = quat_to_euler(&q);
        assert!(!angles.pitch.is_nan(), "clamp must prevent NaN from asin");
        assert_near(angles.pitch, FRAC_PI_2, "pitch saturated at +90°");

        // And the mirror case at -90°.
        let q = na::Quaternion::new(0.7072, 0.0, -0.7072, 0.0);
        let angles = quat_to_euler(&q);
        assert_near(angles.pitch, -FRAC_PI_2, "pitch saturated at -90°");
    }

    #[test]
    fn test_pitch_stays_in_range() {
        let quats = [
            na::Quaternion::new(0.5, 0.5, 0.5, 0.5),
            na::Quaternion::new(-0.1, 0.9, 0.3, -0.2),
            na::Quaternion::new(2.0, 1.0, 1.5, 0.5),
        ];
        for q in &quats {
            let angles = quat_to_euler(q);
            assert!(
                angles.pitch >= -FRAC_PI_2 && angles.pitch <= FRAC_PI_2,
                "pitch {} out of [-π/2, π/2] for {:?}",
                angles.pitch,
                q
            );
        }
    }

    #[test]
    fn test_degenerate_input_does_not_panic() {
        // Zero-norm quaternion: implementation-defined output, no panic.
        let zero = na::Quaternion::new(0.0, 0.0, 0.0, 0.0);
        let angles = quat_to_euler(&zero);
        assert!(angles.pitch.abs() <= FRAC_PI_2);

        // NaN components propagate to the angles rather than being masked.
        let nan = na::Quaternion::new(f64::NAN, 0.0, 0.0, 0.0);
        let angles = quat_to_euler(&nan);
        assert!(angles.roll.is_nan());
        assert!(angles.pitch.is_nan());
        assert!(angles.yaw.is_nan());
    }

    #[test]
    fn test_deg_rad_helpers() {
        assert_near(deg_to_rad(180.0), PI, "deg_to_rad");
        assert_near(rad_to_deg(PI), 180.0, "rad_to_deg");
        assert_near(rad_to_deg(deg_to_rad(37.5)), 37.5, "round trip");
    }
}
