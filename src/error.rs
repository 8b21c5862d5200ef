//! Engine error types.
//!
//! Every failure here is local and synchronous: a rejected operation
//! leaves the session in its pre-call state. Capacity exhaustion during
//! a strategy run is deliberately *not* an error — pilgrims left
//! unassigned are a reportable partial result surfaced through
//! [`AllocationOutcome`](crate::engine::AllocationOutcome) and the
//! manifest summary.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised by allocation operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocationError {
    /// The strategy selector tag is not one of `family`, `preference`, `auto`.
    #[error("unknown allocation strategy '{tag}' (expected one of: family, preference, auto)")]
    UnknownStrategy { tag: String },

    /// The roster failed integrity validation; no allocation was attempted.
    #[error("roster failed validation with {} error(s)", errors.len())]
    InvalidRoster { errors: Vec<ValidationError> },

    /// A manual assignment referenced a room not in this session.
    #[error("unknown room '{0}'")]
    UnknownRoom(String),

    /// A manual assignment referenced a pilgrim not on this roster.
    #[error("unknown pilgrim '{0}'")]
    UnknownPilgrim(String),

    /// A manual assignment would exceed the room's remaining capacity.
    #[error("room '{room_id}' cannot take {requested} more occupant(s), {available} bed(s) free")]
    RoomFull {
        room_id: String,
        requested: usize,
        available: usize,
    },

    /// A manual assignment targeted a pilgrim who already holds a room.
    #[error("pilgrim '{pilgrim_id}' is already assigned to room '{room_id}'")]
    AlreadyAssigned {
        pilgrim_id: String,
        room_id: String,
    },

    /// The same pilgrim appeared twice in one manual assignment request.
    #[error("pilgrim '{0}' listed more than once in manual assignment request")]
    DuplicateManualRequest(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = AllocationError::UnknownStrategy {
            tag: "bogus".into(),
        };
        assert!(e.to_string().contains("bogus"));
        assert!(e.to_string().contains("family"));

        let e = AllocationError::RoomFull {
            room_id: "R1".into(),
            requested: 3,
            available: 1,
        };
        assert!(e.to_string().contains("R1"));
        assert!(e.to_string().contains('3'));
    }
}
