//! Heading strategies.
//!
//! Two ways of reporting heading have been used for this vehicle model: passing
//! the steering angle straight through, or integrating angular speed over time.
//! Neither is assumed; the caller picks one explicitly.

use ackermann_kinematics::{KinematicsError, integrate_heading, normalize_angle_deg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::state::VehicleState;

/// Quantities available to a heading strategy for the current query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingInput {
    /// The time being queried (s).
    pub query_time: f64,
    /// Steering angle of the resolved velocity sample (degrees).
    pub steering_angle_deg: f64,
    /// Angular speed derived from that sample (rad/s).
    pub angular_speed: f64,
}

/// Produces the reported heading for a query.
///
/// `previous` is the state returned by the previous query of the same playback
/// session, threaded through by the caller.
pub trait HeadingStrategy {
    /// Heading in degrees for `input`.
    fn heading_deg(&self, input: &HeadingInput, previous: Option<&VehicleState>) -> Result<f64, KinematicsError>;
}

/// Reports the steering angle itself as the heading.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SteeringPassthrough;

impl HeadingStrategy for SteeringPassthrough {
    fn heading_deg(&self, input: &HeadingInput, _previous: Option<&VehicleState>) -> Result<f64, KinematicsError> {
        Ok(input.steering_angle_deg)
    }
}

/// Integrates angular speed from the previous state's heading.
///
/// The first query of a session (no previous state) reports
/// `initial_heading_deg`. Later queries advance the previous heading by the
/// current angular speed over the elapsed time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntegrateAngularSpeed {
    /// Heading reported before any motion has been integrated (degrees).
    pub initial_heading_deg: f64,
}

impl HeadingStrategy for IntegrateAngularSpeed {
    fn heading_deg(&self, input: &HeadingInput, previous: Option<&VehicleState>) -> Result<f64, KinematicsError> {
        match previous {
            None => Ok(normalize_angle_deg(self.initial_heading_deg)),
            Some(prev) => integrate_heading(prev.heading_deg, input.angular_speed, input.query_time - prev.ts),
        }
    }
}

/// Configuration-friendly selector over the built-in strategies.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum HeadingMode {
    /// See [`SteeringPassthrough`].
    #[default]
    Passthrough,
    /// See [`IntegrateAngularSpeed`].
    Integrate {
        /// Heading before any motion has been integrated (degrees).
        #[cfg_attr(feature = "serde", serde(default))]
        initial_heading_deg: f64,
    },
}

impl HeadingStrategy for HeadingMode {
    fn heading_deg(&self, input: &HeadingInput, previous: Option<&VehicleState>) -> Result<f64, KinematicsError> {
        match *self {
            HeadingMode::Passthrough => SteeringPassthrough.heading_deg(input, previous),
            HeadingMode::Integrate { initial_heading_deg } => {
                IntegrateAngularSpeed { initial_heading_deg }.heading_deg(input, previous)
            }
        }
    }
}
