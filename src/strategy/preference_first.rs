//! Preference-first allocation.
//!
//! Ignores family cohesion entirely: pilgrims are bucketed by
//! `(gender, room preference)` and packed into the pre-generated rooms
//! of exactly that gender and type, in room-number order. Pilgrims
//! left over once their bucket's rooms are full stay unassigned —
//! this strategy never crosses room types and never opens rooms.

use tracing::debug;

use super::AllocationStrategy;
use crate::engine::AllocationSession;
use crate::error::AllocationError;
use crate::models::{Gender, RoomGender, RoomType};

/// Groups strictly by declared room-size preference within gender.
#[derive(Debug, Clone, Copy)]
pub struct PreferenceFirst;

impl AllocationStrategy for PreferenceFirst {
    fn name(&self) -> &'static str {
        "preference"
    }

    fn run(&self, session: &mut AllocationSession) -> Result<(), AllocationError> {
        for gender in [Gender::Male, Gender::Female] {
            for room_type in RoomType::LARGEST_FIRST {
                fill_bucket(session, gender, room_type)?;
            }
        }
        Ok(())
    }
}

/// Packs one `(gender, type)` bucket into its matching rooms.
fn fill_bucket(
    session: &mut AllocationSession,
    gender: Gender,
    room_type: RoomType,
) -> Result<(), AllocationError> {
    let bucket: Vec<String> = session
        .pilgrims()
        .iter()
        .filter(|p| {
            !p.is_assigned() && p.gender == Some(gender) && p.room_preference == room_type
        })
        .map(|p| p.id.clone())
        .collect();
    if bucket.is_empty() {
        return Ok(());
    }

    let mut rooms: Vec<(u32, String, usize)> = session
        .rooms()
        .iter()
        .filter(|r| r.gender == RoomGender::from(gender) && r.room_type == room_type)
        .map(|r| (r.number, r.id.clone(), r.free_beds()))
        .collect();
    rooms.sort_by_key(|&(number, _, _)| number);

    let mut pending = bucket.into_iter();
    for (_, room_id, free) in rooms {
        for _ in 0..free {
            let Some(pilgrim_id) = pending.next() else {
                return Ok(());
            };
            session.assign(&pilgrim_id, &room_id)?;
        }
    }

    let leftover = pending.count();
    if leftover > 0 {
        debug!(
            gender = ?gender,
            room_type = room_type.name(),
            leftover,
            "bucket capacity exhausted"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pilgrim;
    use crate::strategy::StrategyKind;

    fn preferring(id: &str, gender: Gender, preference: RoomType) -> Pilgrim {
        Pilgrim::new(id, format!("Name {id}"), gender).with_preference(preference)
    }

    #[test]
    fn test_five_males_in_three_doubles() {
        // Template yields ceil(5/2) = 3 doubles; occupancy lands 2, 2, 1.
        let roster: Vec<Pilgrim> = (1..=5)
            .map(|i| preferring(&format!("P{i}"), Gender::Male, RoomType::Double))
            .collect();
        let mut session = AllocationSession::new(roster).unwrap();
        session.generate_rooms();
        assert_eq!(session.rooms().len(), 3);

        let outcome = session.allocate(StrategyKind::Preference).unwrap();

        assert_eq!(outcome.unassigned, 0);
        let counts: Vec<usize> = session.rooms().iter().map(|r| r.occupants.len()).collect();
        assert_eq!(counts, vec![2, 2, 1]);
    }

    #[test]
    fn test_rooms_filled_in_number_order() {
        let roster: Vec<Pilgrim> = (1..=3)
            .map(|i| preferring(&format!("P{i}"), Gender::Female, RoomType::Double))
            .collect();
        let mut session = AllocationSession::new(roster).unwrap();
        session.generate_rooms();

        session.allocate(StrategyKind::Preference).unwrap();

        // First room packed to capacity before the second opens.
        assert_eq!(session.rooms()[0].occupants.len(), 2);
        assert_eq!(session.rooms()[1].occupants.len(), 1);
    }

    #[test]
    fn test_no_fallback_across_types() {
        // Two quad-preferring males but only a double room available:
        // preference-first leaves them unassigned rather than crossing types.
        let roster = vec![
            preferring("P1", Gender::Male, RoomType::Quad),
            preferring("P2", Gender::Male, RoomType::Quad),
        ];
        let mut session = AllocationSession::new(roster).unwrap();
        session.open_room(RoomType::Double, RoomGender::Male);

        let outcome = session.allocate(StrategyKind::Preference).unwrap();

        assert_eq!(outcome.assigned, 0);
        assert_eq!(outcome.unassigned, 2);
        assert!(session.rooms()[0].is_empty());
    }

    #[test]
    fn test_no_fallback_across_genders() {
        let roster = vec![preferring("P1", Gender::Female, RoomType::Double)];
        let mut session = AllocationSession::new(roster).unwrap();
        session.open_room(RoomType::Double, RoomGender::Male);

        let outcome = session.allocate(StrategyKind::Preference).unwrap();

        assert_eq!(outcome.unassigned, 1);
        assert!(session.rooms()[0].is_empty());
    }

    #[test]
    fn test_family_cohesion_ignored() {
        use crate::models::FamilyRole;

        // Family spread across the roster; bucket order wins, not family.
        let roster = vec![
            preferring("P1", Gender::Male, RoomType::Double)
                .with_family("F1", FamilyRole::Head),
            preferring("P2", Gender::Male, RoomType::Double),
            preferring("P3", Gender::Male, RoomType::Double)
                .with_family("F1", FamilyRole::Child),
        ];
        let mut session = AllocationSession::new(roster).unwrap();
        session.generate_rooms();

        session.allocate(StrategyKind::Preference).unwrap();

        // Roster order packing: P1+P2 share the first double, P3 overflows.
        assert_eq!(session.rooms()[0].occupants, vec!["P1", "P2"]);
        assert_eq!(session.rooms()[1].occupants, vec!["P3"]);
    }

    #[test]
    fn test_leftovers_reported_not_errored() {
        let roster: Vec<Pilgrim> = (1..=4)
            .map(|i| preferring(&format!("P{i}"), Gender::Male, RoomType::Double))
            .collect();
        let mut session = AllocationSession::new(roster).unwrap();
        session.open_room(RoomType::Double, RoomGender::Male);

        let outcome = session.allocate(StrategyKind::Preference).unwrap();

        assert_eq!(outcome.assigned, 2);
        assert_eq!(outcome.unassigned, 2);
        assert_eq!(session.unassigned_pilgrims().len(), 2);
    }
}
