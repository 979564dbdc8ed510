//! Validated, indexed event log.

use tracing::debug;

use crate::EventQuery;
use crate::error::EventError;
use crate::event::{Event, EventKind};

/// An immutable event feed that has been checked once at ingestion.
///
/// Construction verifies that every timestamp and sample value is finite and that the events of
/// each kind appear in non-decreasing `ts` order (kinds may interleave freely).
/// Lookups then binary-search a per-kind index instead of scanning the feed.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
    positions: Vec<usize>,
    velocities: Vec<usize>,
}

impl EventLog {
    /// Validate `events` and build the per-kind index.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::NonFiniteTimestamp`] for a NaN or infinite `ts`,
    /// [`EventError::NonFiniteValue`] for a NaN or infinite sample value, and
    /// [`EventError::Unsorted`] when an event is older than the previous event of
    /// the same kind.
    pub fn new(events: Vec<Event>) -> Result<Self, EventError> {
        let mut positions: Vec<usize> = Vec::new();
        let mut velocities: Vec<usize> = Vec::new();

        for (index, event) in events.iter().enumerate() {
            let ts = event.ts();
            if !ts.is_finite() {
                return Err(EventError::NonFiniteTimestamp { index });
            }
            if !event.has_finite_payload() {
                return Err(EventError::NonFiniteValue { index });
            }

            let kind = event.kind();
            let bucket = match kind {
                EventKind::Position => &mut positions,
                EventKind::Velocity => &mut velocities,
            };
            if let Some(&prev) = bucket.last() {
                let previous_ts = events[prev].ts();
                if ts < previous_ts {
                    return Err(EventError::Unsorted {
                        kind,
                        index,
                        ts,
                        previous_ts,
                    });
                }
            }
            bucket.push(index);
        }

        debug!(
            events = events.len(),
            positions = positions.len(),
            velocities = velocities.len(),
            "Event log validated"
        );

        Ok(EventLog {
            events,
            positions,
            velocities,
        })
    }

    /// All events in feed order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of events in the log.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if the log holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Earliest and latest timestamp across all kinds, or `None` for an empty log.
    pub fn span(&self) -> Option<(f64, f64)> {
        self.events.iter().map(Event::ts).fold(None, |acc, ts| match acc {
            None => Some((ts, ts)),
            Some((lo, hi)) => Some((lo.min(ts), hi.max(ts))),
        })
    }

    fn index(&self, kind: EventKind) -> &[usize] {
        match kind {
            EventKind::Position => &self.positions,
            EventKind::Velocity => &self.velocities,
        }
    }
}

impl TryFrom<Vec<Event>> for EventLog {
    type Error = EventError;

    fn try_from(events: Vec<Event>) -> Result<Self, Self::Error> {
        EventLog::new(events)
    }
}

impl EventQuery for EventLog {
    fn latest_of_kind(&self, kind: EventKind, query_time: f64) -> Option<&Event> {
        let index = self.index(kind);
        // Sorted per kind, so everything at or before `query_time` forms a prefix.
        let count = index.partition_point(|&i| self.events[i].ts() <= query_time);
        count.checked_sub(1).map(|last| &self.events[index[last]])
    }
}
