//! This module defines the error types used by the `ackermann-state` crate.

use ackermann_events::EventKind;
use ackermann_kinematics::KinematicsError;

/// Error type for a single state query.
///
/// Both variants are terminal for the query that raised them; callers decide
/// whether to skip the frame, wait for more data, or abort.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StateError {
    /// No event of `kind` exists at or before `query_time`.
    #[error("no {kind} event at or before t={query_time}")]
    MissingData {
        /// The kind that could not be resolved.
        kind: EventKind,
        /// The requested time.
        query_time: f64,
    },

    /// The kinematic model rejected the resolved sample.
    #[error("kinematics error: {0}")]
    Kinematics(#[from] KinematicsError),
}
