//! Smart/auto allocation (the default).
//!
//! Runs the preference-first pass, then sweeps still-unassigned
//! pilgrims into whatever capacity remains in their gender segment.
//!
//! # Fallback room order
//!
//! Candidate rooms (same gender, free beds) are visited:
//! 1. rooms whose type matches at least one remaining pilgrim's
//!    preference first,
//! 2. then rooms with more existing occupants (consolidating
//!    partially-filled rooms before emptier ones),
//! 3. room-number order as the final stable tie-break.
//!
//! Pilgrims left over when capacity runs out stay unassigned and are
//! reported, never raised as an error.

use std::collections::HashSet;

use tracing::debug;

use super::{AllocationStrategy, PreferenceFirst};
use crate::engine::AllocationSession;
use crate::error::AllocationError;
use crate::models::{Gender, RoomGender, RoomType};

/// Preference-first with a fallback fill over remaining capacity.
#[derive(Debug, Clone, Copy)]
pub struct Auto;

impl AllocationStrategy for Auto {
    fn name(&self) -> &'static str {
        "auto"
    }

    fn run(&self, session: &mut AllocationSession) -> Result<(), AllocationError> {
        PreferenceFirst.run(session)?;

        for gender in [Gender::Male, Gender::Female] {
            fallback_fill(session, gender)?;
        }
        Ok(())
    }
}

/// Sweeps one gender's unplaced pilgrims into rooms with free beds.
fn fallback_fill(session: &mut AllocationSession, gender: Gender) -> Result<(), AllocationError> {
    let remaining: Vec<String> = session
        .pilgrims()
        .iter()
        .filter(|p| !p.is_assigned() && p.gender == Some(gender))
        .map(|p| p.id.clone())
        .collect();
    if remaining.is_empty() {
        return Ok(());
    }

    let wanted_types: HashSet<RoomType> = session
        .pilgrims()
        .iter()
        .filter(|p| !p.is_assigned() && p.gender == Some(gender))
        .map(|p| p.room_preference)
        .collect();

    let mut candidates: Vec<(String, usize, usize, bool)> = session
        .rooms()
        .iter()
        .filter(|r| r.gender == RoomGender::from(gender) && !r.is_full())
        .map(|r| {
            (
                r.id.clone(),
                r.free_beds(),
                r.occupants.len(),
                wanted_types.contains(&r.room_type),
            )
        })
        .collect();
    // Preference-matching rooms first, then most-occupied; the sort is
    // stable, so equal keys keep room-number order.
    candidates.sort_by_key(|&(_, _, occupied, matches)| (!matches, std::cmp::Reverse(occupied)));

    let mut pending = remaining.into_iter();
    for (room_id, free, _, _) in candidates {
        for _ in 0..free {
            let Some(pilgrim_id) = pending.next() else {
                return Ok(());
            };
            debug!(pilgrim = pilgrim_id.as_str(), room = room_id.as_str(), "fallback placement");
            session.assign(&pilgrim_id, &room_id)?;
        }
    }

    let leftover = pending.count();
    if leftover > 0 {
        debug!(gender = ?gender, leftover, "fallback capacity exhausted");
    }
    Ok(())
}
