//! Event records of the input feed.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two kinds of samples found in an event feed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A position fix.
    Position,
    /// A velocity and steering sample.
    Velocity,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Position => write!(f, "position"),
            EventKind::Velocity => write!(f, "velocity"),
        }
    }
}

/// A position fix at simulation time `ts` (seconds).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSample {
    /// Simulation time in seconds.
    pub ts: f64,
    /// World-frame x position (m).
    pub x: f64,
    /// World-frame y position (m).
    pub y: f64,
}

/// A steering angle and linear velocity at simulation time `ts` (seconds).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocitySample {
    /// Simulation time in seconds.
    pub ts: f64,
    /// Steering angle in degrees, positive to the left.
    pub steering_angle: f64,
    /// Linear velocity (m/s).
    pub velocity: f64,
}

/// A single timestamped event.
///
/// Serialized form is tagged by `kind`:
/// `{"kind": "position", "ts": 0.0, "x": 2.0, "y": 3.0}` or
/// `{"kind": "velocity", "ts": 0.0, "steering_angle": 15.0, "velocity": 2.0}`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A position fix.
    Position(PositionSample),
    /// A velocity and steering sample.
    Velocity(VelocitySample),
}

impl Event {
    /// Shorthand for a position event.
    pub const fn position(ts: f64, x: f64, y: f64) -> Self {
        Event::Position(PositionSample { ts, x, y })
    }

    /// Shorthand for a velocity event.
    pub const fn velocity(ts: f64, steering_angle: f64, velocity: f64) -> Self {
        Event::Velocity(VelocitySample {
            ts,
            steering_angle,
            velocity,
        })
    }

    /// Simulation time of the event.
    pub fn ts(&self) -> f64 {
        match self {
            Event::Position(p) => p.ts,
            Event::Velocity(v) => v.ts,
        }
    }

    /// The kind tag of the event.
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Position(_) => EventKind::Position,
            Event::Velocity(_) => EventKind::Velocity,
        }
    }

    /// Returns `true` if every sample value (not `ts`) is finite.
    pub fn has_finite_payload(&self) -> bool {
        match self {
            Event::Position(p) => p.x.is_finite() && p.y.is_finite(),
            Event::Velocity(v) => v.steering_angle.is_finite() && v.velocity.is_finite(),
        }
    }

    /// Returns the position sample, if this is a position event.
    pub fn as_position(&self) -> Option<&PositionSample> {
        match self {
            Event::Position(p) => Some(p),
            Event::Velocity(_) => None,
        }
    }

    /// Returns the velocity sample, if this is a velocity event.
    pub fn as_velocity(&self) -> Option<&VelocitySample> {
        match self {
            Event::Velocity(v) => Some(v),
            Event::Position(_) => None,
        }
    }
}
