//! Room template generation.
//!
//! Derives the set of empty rooms needed to house a roster, split by
//! gender, from the declared room-size preferences.
//!
//! # Algorithm
//!
//! For each gender segment, count pilgrims per preference tier and open
//! `ceil(count / capacity)` rooms per tier, largest rooms first (quad →
//! triple → double) to minimize total room count and leftover
//! fragmentation. Preference rounding can still leave the segment's
//! generated capacity short of its head count; doubles are appended one
//! at a time until capacity covers the segment.

use crate::models::{Gender, Pilgrim, RoomType};

/// Plans the rooms for a roster: an ordered list of `(gender, type)`
/// pairs, one entry per room to open.
///
/// Pure function of the roster's gender/preference distribution. A
/// gender segment with zero pilgrims contributes no rooms. Pilgrims
/// without a gender are not counted (validation rejects them before
/// any session exists).
pub fn plan_rooms(roster: &[Pilgrim]) -> Vec<(Gender, RoomType)> {
    let mut plan = Vec::new();

    for gender in [Gender::Male, Gender::Female] {
        let segment: Vec<&Pilgrim> = roster
            .iter()
            .filter(|p| p.gender == Some(gender))
            .collect();
        if segment.is_empty() {
            continue;
        }

        let mut capacity = 0usize;
        for room_type in RoomType::LARGEST_FIRST {
            let count = segment
                .iter()
                .filter(|p| p.room_preference == room_type)
                .count();
            let rooms = count.div_ceil(room_type.capacity());
            for _ in 0..rooms {
                plan.push((gender, room_type));
                capacity += room_type.capacity();
            }
        }

        // Rounding underflow: top up with doubles until the segment fits.
        while capacity < segment.len() {
            plan.push((gender, RoomType::Double));
            capacity += RoomType::Double.capacity();
        }
    }

    plan
}
