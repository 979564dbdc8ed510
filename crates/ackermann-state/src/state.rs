use std::fmt;

use ackermann_kinematics::TurningRadius;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Snapshot of the vehicle at one query time.
///
/// Computed fresh on every query and handed to the caller; a renderer only
/// needs `x`, `y` and `heading_deg`, the rest is informational.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleState {
    /// Query time this state was computed for (s).
    pub ts: f64,
    /// World-frame x position (m).
    pub x: f64,
    /// World-frame y position (m).
    pub y: f64,
    /// Reported heading (degrees), as produced by the heading strategy.
    pub heading_deg: f64,
    /// Steering angle of the resolved velocity sample (degrees).
    pub steering_angle_deg: f64,
    /// Inner front wheel angle (degrees).
    pub inner_angle_deg: f64,
    /// Outer front wheel angle (degrees).
    pub outer_angle_deg: f64,
    /// Linear velocity (m/s).
    pub velocity: f64,
    /// Angular speed (rad/s), counter-clockwise positive.
    pub angular_speed: f64,
    /// Turning radius of the rear-axle centre.
    pub turning_radius: TurningRadius,
}

impl fmt::Display for VehicleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t={:.2}s (x: {:.2}, y: {:.2}, heading: {:.2}°, R: {})",
            self.ts, self.x, self.y, self.heading_deg, self.turning_radius
        )
    }
}
