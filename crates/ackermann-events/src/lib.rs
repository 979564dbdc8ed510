//! Timestamped position and steering events, and lookup of the latest sample
//! of each kind at an arbitrary query time.
//!
//! Two lookups are provided behind the [`EventQuery`] trait:
//!
//! - a plain `[Event]` slice, scanned linearly with no ordering assumption, and
//! - an [`EventLog`], validated once at ingestion and searched by bisection.

pub mod error;
pub mod event;
pub mod log;

pub use error::EventError;
pub use event::{Event, EventKind, PositionSample, VelocitySample};
pub use log::EventLog;

/// Lookup of the most recent event of a kind not newer than a query time.
pub trait EventQuery {
    /// Returns the latest event of `kind` whose `ts <= query_time`, or `None`
    /// if no such event exists.
    fn latest_of_kind(&self, kind: EventKind, query_time: f64) -> Option<&Event>;

    /// Latest position fix at or before `query_time`.
    fn latest_position(&self, query_time: f64) -> Option<&PositionSample> {
        self.latest_of_kind(EventKind::Position, query_time)
            .and_then(Event::as_position)
    }

    /// Latest velocity/steering sample at or before `query_time`.
    fn latest_velocity(&self, query_time: f64) -> Option<&VelocitySample> {
        self.latest_of_kind(EventKind::Velocity, query_time)
            .and_then(Event::as_velocity)
    }
}

/// Linear scan over `events` for the latest event of `kind` at or before `query_time`.
///
/// The whole slice is always scanned: without a sortedness guarantee an early
/// break on the first newer event could miss a valid match further on. Among
/// events sharing the newest timestamp, the one appearing last wins. Use
/// [`EventLog`] for repeated queries over a validated feed.
pub fn latest_of_kind(events: &[Event], kind: EventKind, query_time: f64) -> Option<&Event> {
    let mut latest: Option<&Event> = None;
    for event in events {
        if event.kind() != kind || !(event.ts() <= query_time) {
            continue;
        }
        if latest.is_none_or(|best| event.ts() >= best.ts()) {
            latest = Some(event);
        }
    }
    latest
}

impl EventQuery for [Event] {
    fn latest_of_kind(&self, kind: EventKind, query_time: f64) -> Option<&Event> {
        latest_of_kind(self, kind, query_time)
    }
}
