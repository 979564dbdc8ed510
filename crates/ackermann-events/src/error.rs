//! Ingestion errors for event feeds.

use crate::event::EventKind;

/// Errors raised once, when an event feed is validated into an [`EventLog`](crate::EventLog).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EventError {
    /// An event carries a NaN or infinite timestamp.
    #[error("event {index} has a non-finite timestamp")]
    NonFiniteTimestamp {
        /// Position of the event in the feed.
        index: usize,
    },

    /// A position or velocity sample carries a NaN or infinite value.
    #[error("event {index} has a non-finite sample value")]
    NonFiniteValue {
        /// Position of the event in the feed.
        index: usize,
    },

    /// Events of one kind are not in non-decreasing timestamp order.
    #[error("{kind} event {index} at ts={ts} precedes the previous {kind} event at ts={previous_ts}")]
    Unsorted {
        /// Kind whose subsequence is out of order.
        kind: EventKind,
        /// Position of the offending event in the feed.
        index: usize,
        /// Timestamp of the offending event.
        ts: f64,
        /// Timestamp of the preceding event of the same kind.
        previous_ts: f64,
    },
}
