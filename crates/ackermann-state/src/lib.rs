//! Reconstruction of a vehicle's state from sparse, timestamped position and
//! steering events.
//!
//! [`compute_state`] is a pure function of the event source, the vehicle
//! geometry, the query time and (for integrating heading strategies) the
//! previous state. [`Playback`] threads that previous state through a session.

pub mod error;
pub mod heading;
pub mod playback;
pub mod state;

use tracing::trace;

use ackermann_events::{EventKind, EventQuery};
use ackermann_kinematics::{AckermannGeometry, KinematicsError};

pub use error::StateError;
pub use heading::{HeadingInput, HeadingMode, HeadingStrategy, IntegrateAngularSpeed, SteeringPassthrough};
pub use playback::{Playback, frame_times};
pub use state::VehicleState;

/// Computes the vehicle state at `query_time`.
///
/// Resolves the latest position and velocity/steering samples at or before
/// `query_time`, runs the Ackermann model on the steering sample, and asks
/// `heading` for the reported heading.
///
/// # Errors
///
/// Returns [`StateError::MissingData`] if either sample kind has no event at or
/// before `query_time`, and [`StateError::Kinematics`] if a resolved sample is
/// not finite, the steering angle is singular for `geometry`, or the heading
/// strategy rejects the time step.
pub fn compute_state<S, H>(
    source: &S,
    geometry: &AckermannGeometry,
    query_time: f64,
    heading: &H,
    previous: Option<&VehicleState>,
) -> Result<VehicleState, StateError>
where
    S: EventQuery + ?Sized,
    H: HeadingStrategy + ?Sized,
{
    let position = source
        .latest_position(query_time)
        .ok_or(StateError::MissingData {
            kind: EventKind::Position,
            query_time,
        })?;
    // A raw slice has not been through `EventLog` ingestion checks.
    if !position.x.is_finite() || !position.y.is_finite() {
        return Err(KinematicsError::NonFiniteInput("position must be finite").into());
    }
    let sample = source
        .latest_velocity(query_time)
        .ok_or(StateError::MissingData {
            kind: EventKind::Velocity,
            query_time,
        })?;

    let wheels = geometry.steering_geometry(sample.steering_angle)?;
    let motion = geometry.turning_dynamics(sample.steering_angle, sample.velocity)?;

    let input = HeadingInput {
        query_time,
        steering_angle_deg: sample.steering_angle,
        angular_speed: motion.angular_speed,
    };
    let heading_deg = heading.heading_deg(&input, previous)?;

    let state = VehicleState {
        ts: query_time,
        x: position.x,
        y: position.y,
        heading_deg,
        steering_angle_deg: sample.steering_angle,
        inner_angle_deg: wheels.inner_deg,
        outer_angle_deg: wheels.outer_deg,
        velocity: sample.velocity,
        angular_speed: motion.angular_speed,
        turning_radius: motion.radius,
    };
    trace!(%state, position_ts = position.ts, velocity_ts = sample.ts, "Computed vehicle state");
    Ok(state)
}
