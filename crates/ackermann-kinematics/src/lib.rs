#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library for Ackermann steering kinematics."]
#![doc = ""]
#![doc = "This crate decomposes a steering angle into inner and outer wheel angles"]
#![doc = "and derives the turning radius and angular speed of a car-like vehicle."]
#![doc = ""]
#![doc = "Sign convention: a positive steering angle turns the vehicle to the left"]
#![doc = "(counter-clockwise). For positive velocity this yields a positive turning"]
#![doc = "radius and a positive angular speed. Headings are measured counter-clockwise"]
#![doc = "from the world x-axis, in degrees."]
#![doc = ""]
#![doc = "Beyond ±90° the tangent changes sign, so the turn direction of both the"]
#![doc = "wheel angles and the motion follows the signed rear-axle radius"]
#![doc = "`wheelbase / tan(delta)` rather than the sign of the steering angle."]

use core::fmt;
use libm::{atan, copysign, cos, fabs, tan};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod error;
pub use error::KinematicsError;

/// Steering angles with a magnitude below this threshold (degrees) are treated
/// as driving straight ahead.
pub const STRAIGHT_THRESHOLD_DEG: f64 = 0.1;

/// Tolerance used to detect a diverging tangent or a zero wheel radius.
const SINGULARITY_TOLERANCE: f64 = 1e-9;

/// Normalize an angle in degrees to be within `[-180, 180)`.
///
/// Angles at `180` will be normalized to `-180`.
pub fn normalize_angle_deg(angle: f64) -> f64 {
    let a = angle % 360.0;
    if a >= 180.0 {
        a - 360.0
    } else if a < -180.0 {
        a + 360.0
    } else {
        a
    }
}

/// Advance a heading by `angular_speed` over `dt` seconds.
///
/// # Arguments
///
/// * `heading_deg`: The current heading in degrees.
/// * `angular_speed`: Rate of heading change in rad/s (counter-clockwise positive).
/// * `dt`: The time delta in seconds over which the rate is applied.
///
/// # Errors
///
/// Returns `Err(KinematicsError::NonFiniteInput)` if any argument is NaN or infinite.
/// Returns `Err(KinematicsError::NegativeTimeDelta)` if `dt` is negative.
///
/// # Returns
///
/// The new heading in degrees, normalized to `[-180, 180)`.
pub fn integrate_heading(heading_deg: f64, angular_speed: f64, dt: f64) -> Result<f64, KinematicsError> {
    check_finite(heading_deg, "heading must be finite")?;
    check_finite(angular_speed, "angular speed must be finite")?;
    check_finite(dt, "time delta must be finite")?;
    if dt < 0.0 {
        return Err(KinematicsError::NegativeTimeDelta("must be non-negative"));
    }
    let delta_deg = (angular_speed * dt).to_degrees();
    Ok(normalize_angle_deg(heading_deg + delta_deg))
}

fn check_finite(value: f64, msg: &'static str) -> Result<(), KinematicsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(KinematicsError::NonFiniteInput(msg))
    }
}

fn is_straight(steering_angle_deg: f64) -> bool {
    fabs(steering_angle_deg) < STRAIGHT_THRESHOLD_DEG
}

/// Turning radius of the rear-axle centre.
///
/// Driving straight is its own case instead of a floating-point infinity, so
/// downstream arithmetic never sees an infinite radius.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurningRadius {
    /// The vehicle drives in a straight line (infinite radius).
    Straight,
    /// Signed radius in meters; positive for a left turn.
    Radius(f64),
}

impl TurningRadius {
    /// Returns the signed radius, or `None` when driving straight.
    pub fn radius(&self) -> Option<f64> {
        match self {
            TurningRadius::Straight => None,
            TurningRadius::Radius(r) => Some(*r),
        }
    }

    /// Returns `true` if the vehicle drives straight.
    pub fn is_straight(&self) -> bool {
        matches!(self, TurningRadius::Straight)
    }
}

impl fmt::Display for TurningRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurningRadius::Straight => write!(f, "straight"),
            TurningRadius::Radius(r) => write!(f, "{:.2} m", r),
        }
    }
}

/// Inner and outer front wheel angles.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelAngles {
    /// Angle of the wheel on the inside of the turn (degrees).
    pub inner_deg: f64,
    /// Angle of the wheel on the outside of the turn (degrees).
    pub outer_deg: f64,
}

impl WheelAngles {
    /// Construct wheel angles.
    pub const fn new(inner_deg: f64, outer_deg: f64) -> Self {
        WheelAngles { inner_deg, outer_deg }
    }
}

impl fmt::Display for WheelAngles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(inner: {:.2}°, outer: {:.2}°)", self.inner_deg, self.outer_deg)
    }
}

/// Turning radius and angular speed for a steering angle and linear velocity.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurningMotion {
    /// Turning radius of the rear-axle centre.
    pub radius: TurningRadius,
    /// Angular speed (rad/s), counter-clockwise positive.
    pub angular_speed: f64,
}

impl TurningMotion {
    /// Motion along a straight line.
    pub const STRAIGHT: TurningMotion = TurningMotion {
        radius: TurningRadius::Straight,
        angular_speed: 0.0,
    };
}

impl fmt::Display for TurningMotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(R: {}, ω: {:.3} rad/s)", self.radius, self.angular_speed)
    }
}

/// Ackermann steering kinematics helper.
///
/// This struct encapsulates the physical parameters of a car-like vehicle
/// (wheelbase and track width). The values are fixed for a playback session and
/// owned by the caller.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AckermannGeometry {
    /// Distance between front and rear axle (m).
    wheelbase: f64,
    /// Distance between left and right wheels on the same axle (m).
    track_width: f64,
}

impl AckermannGeometry {
    /// Construct a new Ackermann kinematics helper.
    ///
    /// # Arguments
    ///
    /// * `wheelbase`: Distance between the front and rear axles in meters.
    /// * `track_width`: Distance between the left and right wheels in meters.
    ///
    /// # Errors
    ///
    /// Returns `Err(KinematicsError::InvalidWheelbase)` if `wheelbase` is not positive and finite.
    /// Returns `Err(KinematicsError::InvalidTrackWidth)` if `track_width` is not positive and finite.
    pub const fn new(wheelbase: f64, track_width: f64) -> Result<Self, KinematicsError> {
        if !(wheelbase > 0.0) || !wheelbase.is_finite() {
            return Err(KinematicsError::InvalidWheelbase("must be positive and finite"));
        }
        if !(track_width > 0.0) || !track_width.is_finite() {
            return Err(KinematicsError::InvalidTrackWidth("must be positive and finite"));
        }
        Ok(AckermannGeometry {
            wheelbase,
            track_width,
        })
    }

    /// Returns the wheelbase.
    pub fn wheelbase(&self) -> f64 {
        self.wheelbase
    }

    /// Returns the track width.
    pub fn track_width(&self) -> f64 {
        self.track_width
    }

    /// Signed bicycle-model radius `wheelbase / tan(delta)` of the rear-axle centre.
    ///
    /// The caller must have ruled out straight-line steering.
    fn rear_axle_radius(&self, steering_angle_deg: f64) -> Result<f64, KinematicsError> {
        let delta = steering_angle_deg.to_radians();
        // tan(delta) diverges when the wheels are perpendicular to the chassis.
        if fabs(cos(delta)) < SINGULARITY_TOLERANCE {
            return Err(KinematicsError::GeometrySingularity { steering_angle_deg });
        }
        Ok(self.wheelbase / tan(delta))
    }

    /// Decomposes a steering angle into inner and outer wheel angles.
    ///
    /// Steering angles below [`STRAIGHT_THRESHOLD_DEG`] in magnitude return
    /// exactly `(0.0, 0.0)`. Otherwise both angles carry the sign of the
    /// signed rear-axle radius (the sign of the steering angle within ±90°)
    /// and the inner wheel always turns further than the outer.
    ///
    /// # Arguments
    ///
    /// * `steering_angle_deg`: The steering angle in degrees.
    ///
    /// # Errors
    ///
    /// Returns `Err(KinematicsError::NonFiniteInput)` if the steering angle is NaN or infinite.
    /// Returns `Err(KinematicsError::GeometrySingularity)` if the tangent of the
    /// steering angle diverges or either wheel's effective radius is zero.
    pub fn steering_geometry(&self, steering_angle_deg: f64) -> Result<WheelAngles, KinematicsError> {
        check_finite(steering_angle_deg, "steering angle must be finite")?;
        if is_straight(steering_angle_deg) {
            return Ok(WheelAngles::default());
        }

        // Work with the turn magnitude so "inner" is always the wheel closest to
        // the centre of rotation. The turn direction is the sign of the signed
        // radius, the same one `turning_dynamics` reports.
        let signed_radius = self.rear_axle_radius(steering_angle_deg)?;
        let radius = fabs(signed_radius);
        let half_track = self.track_width / 2.0;
        let inner_radius = radius - half_track;
        let outer_radius = radius + half_track;
        if fabs(inner_radius) < SINGULARITY_TOLERANCE || fabs(outer_radius) < SINGULARITY_TOLERANCE {
            return Err(KinematicsError::GeometrySingularity { steering_angle_deg });
        }

        let inner = atan(self.wheelbase / inner_radius).to_degrees();
        let outer = atan(self.wheelbase / outer_radius).to_degrees();

        Ok(WheelAngles::new(
            copysign(inner, signed_radius),
            copysign(outer, signed_radius),
        ))
    }

    /// Calculates the turning radius and angular speed for a steering angle
    /// and linear velocity.
    ///
    /// # Arguments
    ///
    /// * `steering_angle_deg`: The steering angle in degrees.
    /// * `velocity`: Linear velocity of the rear-axle centre (m/s).
    ///
    /// # Errors
    ///
    /// Returns `Err(KinematicsError::NonFiniteInput)` if the steering angle or velocity is NaN or infinite.
    /// Returns `Err(KinematicsError::GeometrySingularity)` if the tangent of the
    /// steering angle diverges.
    pub fn turning_dynamics(&self, steering_angle_deg: f64, velocity: f64) -> Result<TurningMotion, KinematicsError> {
        check_finite(steering_angle_deg, "steering angle must be finite")?;
        check_finite(velocity, "velocity must be finite")?;
        if is_straight(steering_angle_deg) {
            return Ok(TurningMotion::STRAIGHT);
        }

        let radius = self.rear_axle_radius(steering_angle_deg)?;
        if fabs(radius) < SINGULARITY_TOLERANCE {
            return Err(KinematicsError::GeometrySingularity { steering_angle_deg });
        }

        Ok(TurningMotion {
            radius: TurningRadius::Radius(radius),
            angular_speed: velocity / radius,
        })
    }
}

impl fmt::Display for AckermannGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AckermannGeometry (L: {:.2} m, W: {:.2} m)", self.wheelbase, self.track_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-6;

    fn car() -> AckermannGeometry {
        AckermannGeometry::new(4.0, 2.0).unwrap()
    }

    #[test]
    fn test_angle_normalization() {
        assert!((normalize_angle_deg(0.0) - 0.0).abs() < EPSILON);
        assert!((normalize_angle_deg(180.0) - (-180.0)).abs() < EPSILON); // 180 maps to -180 for [-180, 180)
        assert!((normalize_angle_deg(-180.0) - (-180.0)).abs() < EPSILON);
        assert!((normalize_angle_deg(450.0) - 90.0).abs() < EPSILON);
        assert!((normalize_angle_deg(-450.0) - (-90.0)).abs() < EPSILON);
        assert!((normalize_angle_deg(190.0) - (-170.0)).abs() < EPSILON);
    }

    #[test]
    fn test_geometry_constructor() {
        let geometry = car();
        assert_eq!(geometry.wheelbase(), 4.0);
        assert_eq!(geometry.track_width(), 2.0);
    }

    #[test]
    fn test_constructor_invalid_wheelbase() {
        let result = AckermannGeometry::new(0.0, 2.0);
        assert!(matches!(result, Err(KinematicsError::InvalidWheelbase(_))));
        let result_negative = AckermannGeometry::new(-1.0, 2.0);
        assert!(matches!(result_negative, Err(KinematicsError::InvalidWheelbase(_))));
        let result_nan = AckermannGeometry::new(f64::NAN, 2.0);
        assert!(matches!(result_nan, Err(KinematicsError::InvalidWheelbase(_))));
    }

    #[test]
    fn test_constructor_invalid_track_width() {
        let result = AckermannGeometry::new(4.0, 0.0);
        assert!(matches!(result, Err(KinematicsError::InvalidTrackWidth(_))));
        let result_infinite = AckermannGeometry::new(4.0, f64::INFINITY);
        assert!(matches!(result_infinite, Err(KinematicsError::InvalidTrackWidth(_))));
    }

    #[test]
    fn test_near_zero_steering_is_straight() {
        let geometry = car();
        for angle in [0.0, 0.05, -0.05, 0.0999, -0.0999] {
            let wheels = geometry.steering_geometry(angle).unwrap();
            assert_eq!(wheels, WheelAngles::new(0.0, 0.0));

            let motion = geometry.turning_dynamics(angle, 2.0).unwrap();
            assert_eq!(motion.radius, TurningRadius::Straight);
            assert_eq!(motion.angular_speed, 0.0);
        }
    }

    #[test]
    fn test_threshold_itself_is_a_turn() {
        let geometry = car();
        let wheels = geometry.steering_geometry(STRAIGHT_THRESHOLD_DEG).unwrap();
        assert!(wheels.inner_deg > 0.0);
        assert!(wheels.outer_deg > 0.0);
    }

    #[test]
    fn test_thirty_degree_turn() {
        let geometry = car();
        let wheels = geometry.steering_geometry(30.0).unwrap();

        // R = 4 / tan(30°) ≈ 6.9282
        // inner = atan(4 / (R - 1)) ≈ 34.0°
        // outer = atan(4 / (R + 1)) ≈ 26.8°
        let radius = 4.0 / 30.0_f64.to_radians().tan();
        let expected_inner = (4.0 / (radius - 1.0)).atan().to_degrees();
        let expected_outer = (4.0 / (radius + 1.0)).atan().to_degrees();

        assert!((wheels.inner_deg - expected_inner).abs() < EPSILON);
        assert!((wheels.outer_deg - expected_outer).abs() < EPSILON);
        assert!(wheels.outer_deg < 30.0 && 30.0 < wheels.inner_deg);
    }

    #[test]
    fn test_left_right_symmetry() {
        let geometry = car();
        for angle in [0.1, 5.0, 17.5, 30.0, 45.0, 60.0, 89.0] {
            let left = geometry.steering_geometry(angle).unwrap();
            let right = geometry.steering_geometry(-angle).unwrap();
            assert!((left.inner_deg + right.inner_deg).abs() < EPSILON);
            assert!((left.outer_deg + right.outer_deg).abs() < EPSILON);
            assert!(left.inner_deg.abs() > left.outer_deg.abs());
        }
    }

    #[test]
    fn test_perpendicular_steering_is_singular() {
        let geometry = car();
        for angle in [90.0, -90.0, 270.0] {
            let wheels = geometry.steering_geometry(angle);
            assert!(matches!(wheels, Err(KinematicsError::GeometrySingularity { .. })));
            let motion = geometry.turning_dynamics(angle, 2.0);
            assert!(matches!(motion, Err(KinematicsError::GeometrySingularity { .. })));
        }
    }

    #[test]
    fn test_inner_wheel_through_rotation_centre_is_singular() {
        let geometry = car();
        // tan(delta) = 4 puts the rear-axle radius at exactly half the track width.
        let angle = 4.0_f64.atan().to_degrees();
        let result = geometry.steering_geometry(angle);
        assert!(matches!(
            result,
            Err(KinematicsError::GeometrySingularity { steering_angle_deg }) if steering_angle_deg == angle
        ));
        // The rear-axle radius itself is still finite.
        assert!(geometry.turning_dynamics(angle, 1.0).is_ok());
    }

    #[test]
    fn test_turning_dynamics_left_turn() {
        let geometry = car();
        let motion = geometry.turning_dynamics(30.0, 2.0).unwrap();
        let expected_radius = 4.0 / 30.0_f64.to_radians().tan(); // ≈ 6.9282
        let radius = motion.radius.radius().unwrap();
        assert!((radius - expected_radius).abs() < EPSILON);
        assert!((motion.angular_speed - 2.0 / expected_radius).abs() < EPSILON);
        assert!(motion.angular_speed > 0.0);
    }

    #[test]
    fn test_turning_dynamics_right_turn_and_reverse() {
        let geometry = car();
        let right = geometry.turning_dynamics(-30.0, 2.0).unwrap();
        assert!(right.radius.radius().unwrap() < 0.0);
        assert!(right.angular_speed < 0.0);

        // Reversing while steering left rotates clockwise.
        let reverse = geometry.turning_dynamics(30.0, -2.0).unwrap();
        assert!(reverse.radius.radius().unwrap() > 0.0);
        assert!(reverse.angular_speed < 0.0);

        let stopped = geometry.turning_dynamics(30.0, 0.0).unwrap();
        assert_eq!(stopped.angular_speed, 0.0);
    }

    #[test]
    fn test_integrate_heading() {
        // 90°/s for half a second
        let heading = integrate_heading(10.0, core::f64::consts::FRAC_PI_2, 0.5).unwrap();
        assert!((heading - 55.0).abs() < EPSILON);

        let wrapped = integrate_heading(170.0, core::f64::consts::FRAC_PI_2, 1.0).unwrap();
        assert!((wrapped - (-100.0)).abs() < EPSILON);

        let unchanged = integrate_heading(42.0, 0.0, 3.0).unwrap();
        assert!((unchanged - 42.0).abs() < EPSILON);
    }

    #[test]
    fn test_integrate_heading_negative_dt() {
        let result = integrate_heading(0.0, 1.0, -0.1);
        assert!(matches!(result, Err(KinematicsError::NegativeTimeDelta("must be non-negative"))));
    }

    #[test]
    fn test_obtuse_steering_signs_agree() {
        let geometry = car();
        for angle in [100.0, 110.0, 120.0, -100.0, -110.0, -120.0] {
            let wheels = geometry.steering_geometry(angle).unwrap();
            let motion = geometry.turning_dynamics(angle, 2.0).unwrap();
            let radius = motion.radius.radius().unwrap();
            // tan(delta) < 0 past 90°, so a positive angle turns right.
            assert_eq!(radius > 0.0, angle < 0.0);
            assert_eq!(wheels.inner_deg > 0.0, radius > 0.0);
            assert_eq!(wheels.outer_deg > 0.0, radius > 0.0);
            assert_eq!(motion.angular_speed > 0.0, radius > 0.0);
        }
    }

    #[test]
    fn test_non_finite_inputs_are_rejected() {
        let geometry = car();
        for angle in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(geometry.steering_geometry(angle), Err(KinematicsError::NonFiniteInput(_))));
            assert!(matches!(geometry.turning_dynamics(angle, 2.0), Err(KinematicsError::NonFiniteInput(_))));
        }
        assert!(matches!(geometry.turning_dynamics(30.0, f64::NAN), Err(KinematicsError::NonFiniteInput(_))));
        // A straight steering angle does not excuse a bad velocity.
        assert!(matches!(geometry.turning_dynamics(0.0, f64::INFINITY), Err(KinematicsError::NonFiniteInput(_))));
        assert!(matches!(integrate_heading(0.0, f64::NAN, 1.0), Err(KinematicsError::NonFiniteInput(_))));
        assert!(matches!(integrate_heading(0.0, 1.0, f64::INFINITY), Err(KinematicsError::NonFiniteInput(_))));
    }

    #[test]
    fn test_turning_radius_accessors() {
        assert_eq!(TurningRadius::Straight.radius(), None);
        assert!(TurningRadius::Straight.is_straight());
        assert_eq!(TurningRadius::Radius(-3.5).radius(), Some(-3.5));
        assert!(!TurningRadius::Radius(-3.5).is_straight());
    }
}
