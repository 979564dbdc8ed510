//! Explicit accumulator for a playback session.

use ackermann_events::EventQuery;
use ackermann_kinematics::AckermannGeometry;

use crate::error::StateError;
use crate::heading::HeadingStrategy;
use crate::state::VehicleState;
use crate::compute_state;

/// Drives repeated state queries over one immutable event source.
///
/// The previous successful state is kept here rather than in any global, and
/// handed to the heading strategy on the next query. A failed query leaves the
/// accumulator untouched.
#[derive(Debug)]
pub struct Playback<'a, S: ?Sized, H> {
    source: &'a S,
    geometry: AckermannGeometry,
    heading: H,
    previous: Option<VehicleState>,
}

impl<'a, S, H> Playback<'a, S, H>
where
    S: EventQuery + ?Sized,
    H: HeadingStrategy,
{
    /// Starts a session with no previous state.
    pub fn new(source: &'a S, geometry: AckermannGeometry, heading: H) -> Self {
        Playback {
            source,
            geometry,
            heading,
            previous: None,
        }
    }

    /// Computes the state at `query_time` and remembers it on success.
    pub fn step(&mut self, query_time: f64) -> Result<VehicleState, StateError> {
        let state = compute_state(
            self.source,
            &self.geometry,
            query_time,
            &self.heading,
            self.previous.as_ref(),
        )?;
        self.previous = Some(state);
        Ok(state)
    }

    /// The last successfully computed state, if any.
    pub fn previous(&self) -> Option<&VehicleState> {
        self.previous.as_ref()
    }

    /// Forgets the previous state, e.g. before replaying from the start.
    pub fn reset(&mut self) {
        self.previous = None;
    }

    /// Geometry used for every step of this session.
    pub fn geometry(&self) -> &AckermannGeometry {
        &self.geometry
    }
}

/// Query times `start, start + step, ...` up to and including `end`.
///
/// Times are computed as `start + i * step` so rounding does not accumulate.
/// Yields nothing when `step` is not positive or `end < start`.
pub fn frame_times(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = if step > 0.0 && end >= start {
        // Small slack so an `end` that is a whole number of steps away is included.
        ((end - start) / step + 1e-9).floor() as usize + 1
    } else {
        0
    };
    (0..count).map(move |i| start + i as f64 * step)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ackermann_events::{Event, EventKind, EventLog};
    use ackermann_kinematics::KinematicsError;

    use crate::heading::{IntegrateAngularSpeed, SteeringPassthrough};

    const EPSILON: f64 = 1e-9;

    fn car() -> AckermannGeometry {
        AckermannGeometry::new(4.0, 2.0).unwrap()
    }

    #[test]
    fn test_integrating_playback_accumulates_heading() {
        let log = EventLog::new(vec![
            Event::position(0.0, 0.0, 0.0),
            Event::velocity(0.0, 30.0, 2.0),
            Event::position(1.0, 2.0, 0.3),
        ])
        .unwrap();
        let mut playback = Playback::new(
            &log,
            car(),
            IntegrateAngularSpeed {
                initial_heading_deg: 0.0,
            },
        );

        let first = playback.step(0.0).unwrap();
        assert_eq!(first.heading_deg, 0.0);

        let second = playback.step(1.0).unwrap();
        let radius = 4.0 / 30.0_f64.to_radians().tan();
        let expected = (2.0 / radius).to_degrees(); // ω · 1 s
        assert!((second.heading_deg - expected).abs() < EPSILON);
        assert_eq!((second.x, second.y), (2.0, 0.3));

        playback.reset();
        assert!(playback.previous().is_none());
        assert_eq!(playback.step(1.0).unwrap().heading_deg, 0.0);
    }

    #[test]
    fn test_failed_step_keeps_previous_state() {
        let events = [
            Event::position(0.0, 1.0, 1.0),
            Event::velocity(0.0, 10.0, 1.0),
            Event::velocity(2.0, 90.0, 1.0),
        ];
        let mut playback = Playback::new(&events[..], car(), SteeringPassthrough);

        let missing = playback.step(-0.5);
        assert!(matches!(
            missing,
            Err(StateError::MissingData {
                kind: EventKind::Position,
                ..
            })
        ));
        assert!(playback.previous().is_none());

        let ok = playback.step(1.0).unwrap();
        let singular = playback.step(2.0);
        assert!(matches!(
            singular,
            Err(StateError::Kinematics(KinematicsError::GeometrySingularity { .. }))
        ));
        assert_eq!(playback.previous(), Some(&ok));
        assert_eq!(playback.geometry(), &car());
    }

    #[test]
    fn test_frame_times() {
        let times: Vec<f64> = frame_times(0.0, 1.0, 0.25).collect();
        assert_eq!(times, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

        let tenths: Vec<f64> = frame_times(0.0, 0.3, 0.1).collect();
        assert_eq!(tenths.len(), 4);

        assert_eq!(frame_times(1.0, 0.0, 0.1).count(), 0);
        assert_eq!(frame_times(0.0, 1.0, 0.0).count(), 0);
        assert_eq!(frame_times(2.0, 2.0, 0.5).collect::<Vec<_>>(), vec![2.0]);
    }
}
