#![warn(missing_docs)]

//! Error types for the kinematics library.
//!
//! This module defines error types that can occur while validating vehicle
//! geometry and while evaluating the Ackermann steering model.

use core::fmt;

/// Errors that can occur in kinematic calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KinematicsError {
    /// Error for invalid wheelbase.
    /// This variant is returned when a wheelbase is provided that is not positive and finite.
    InvalidWheelbase(&'static str),
    /// Error for invalid track width.
    /// This variant is returned when a track width is provided that is not positive and finite.
    InvalidTrackWidth(&'static str),
    /// Error for negative time delta.
    /// This variant is returned when a negative time delta is used for heading integration.
    NegativeTimeDelta(&'static str),
    /// Error for a NaN or infinite input.
    /// This variant is returned when a steering angle, velocity, heading or time delta is not finite.
    NonFiniteInput(&'static str),
    /// The Ackermann formulas diverge for this steering angle.
    ///
    /// Returned when the tangent of the steering angle is unbounded (the wheels
    /// are perpendicular to the chassis) or when a wheel's effective radius
    /// passes through the instantaneous centre of rotation.
    GeometrySingularity {
        /// The steering angle (degrees) that produced the singularity.
        steering_angle_deg: f64,
    },
}

impl fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KinematicsError::InvalidWheelbase(msg) => write!(f, "Invalid wheelbase: {}", msg),
            KinematicsError::InvalidTrackWidth(msg) => write!(f, "Invalid track width: {}", msg),
            KinematicsError::NegativeTimeDelta(msg) => write!(f, "Negative time delta: {}", msg),
            KinematicsError::NonFiniteInput(msg) => write!(f, "Non-finite input: {}", msg),
            KinematicsError::GeometrySingularity { steering_angle_deg } => write!(
                f,
                "Steering geometry is singular at {:.3} deg",
                steering_angle_deg
            ),
        }
    }
}

impl core::error::Error for KinematicsError {}
