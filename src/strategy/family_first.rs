//! Family-first allocation.
//!
//! Processes family units in roster order, keeping each unit together:
//! an eligible explicit family-room request gets one fresh cross-gender
//! room; every other unit (including singles, which are units of size
//! 1) is split by gender and packed into rooms of the unit's preferred
//! type.

use tracing::debug;

use super::AllocationStrategy;
use crate::engine::AllocationSession;
use crate::error::AllocationError;
use crate::models::{FamilyUnit, Gender, RoomGender, RoomType};

/// Annotation on rooms opened for an explicit family-room request.
pub const FAMILY_ROOM_TAG: &str = "Family Room";

/// Largest family that fits one room; bigger families must split even
/// when they asked for a single room.
const FAMILY_ROOM_CAP: usize = 4;

/// Keeps family units together, gender-splitting only when required.
#[derive(Debug, Clone, Copy)]
pub struct FamilyFirst;

impl AllocationStrategy for FamilyFirst {
    fn name(&self) -> &'static str {
        "family"
    }

    fn run(&self, session: &mut AllocationSession) -> Result<(), AllocationError> {
        let units = FamilyUnit::group(session.pilgrims());

        for unit in units {
            if unit.wants_single_room && unit.member_count() <= FAMILY_ROOM_CAP {
                place_family_room(session, &unit)?;
            } else {
                for gender in [Gender::Male, Gender::Female] {
                    place_gender_split(session, &unit, gender)?;
                }
            }
        }
        Ok(())
    }
}

/// Seats a whole eligible unit in one fresh room, mixed-gender allowed.
fn place_family_room(
    session: &mut AllocationSession,
    unit: &FamilyUnit,
) -> Result<(), AllocationError> {
    let room_type = RoomType::for_count(unit.member_count());
    let room_id = session.open_special_room(room_type, RoomGender::Mixed, FAMILY_ROOM_TAG);
    debug!(
        family = unit.family_id.as_deref().unwrap_or("-"),
        room = room_id.as_str(),
        members = unit.member_count(),
        "opened family room"
    );

    for member in &unit.members {
        session.assign(&member.id, &room_id)?;
    }
    Ok(())
}

/// Packs one gender sub-group of a unit into rooms of the unit's
/// preferred type, reusing empty matching rooms before opening new
/// ones.
fn place_gender_split(
    session: &mut AllocationSession,
    unit: &FamilyUnit,
    gender: Gender,
) -> Result<(), AllocationError> {
    let members = unit.member_ids_of(gender);
    let room_type = unit.preferred_room_type;

    for chunk in members.chunks(room_type.capacity()) {
        let room_id = session
            .find_empty_room(gender, room_type)
            .unwrap_or_else(|| session.open_room(room_type, gender.into()));
        for id in chunk {
            session.assign(id, &room_id)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FamilyRole, Pilgrim};
    use crate::strategy::StrategyKind;

    fn family_member(id: &str, family: &str, role: FamilyRole, gender: Gender) -> Pilgrim {
        Pilgrim::new(id, format!("Name {id}"), gender).with_family(family, role)
    }

    #[test]
    fn test_family_room_for_eligible_request() {
        // One family of 4 (2 male, 2 female), explicit request, quad pref.
        let roster = vec![
            family_member("P1", "F1", FamilyRole::Head, Gender::Male)
                .with_preference(RoomType::Quad)
                .with_family_room_request(),
            family_member("P2", "F1", FamilyRole::Spouse, Gender::Female)
                .with_preference(RoomType::Quad),
            family_member("P3", "F1", FamilyRole::Child, Gender::Male)
                .with_preference(RoomType::Quad),
            family_member("P4", "F1", FamilyRole::Child, Gender::Female)
                .with_preference(RoomType::Quad),
        ];
        let mut session = AllocationSession::new(roster).unwrap();

        let outcome = session.allocate(StrategyKind::Family).unwrap();

        assert_eq!(outcome.assigned, 4);
        assert_eq!(outcome.unassigned, 0);
        assert_eq!(session.rooms().len(), 1);
        let room = &session.rooms()[0];
        assert_eq!(room.room_type, RoomType::Quad);
        assert_eq!(room.gender, RoomGender::Mixed);
        assert_eq!(room.special_request.as_deref(), Some(FAMILY_ROOM_TAG));
        assert_eq!(room.occupants.len(), 4);
    }

    #[test]
    fn test_family_room_sized_to_member_count() {
        let roster = vec![
            family_member("P1", "F1", FamilyRole::Head, Gender::Male).with_family_room_request(),
            family_member("P2", "F1", FamilyRole::Spouse, Gender::Female),
            family_member("P3", "F1", FamilyRole::Child, Gender::Female),
        ];
        let mut session = AllocationSession::new(roster).unwrap();
        session.allocate(StrategyKind::Family).unwrap();

        assert_eq!(session.rooms()[0].room_type, RoomType::Triple);
    }

    #[test]
    fn test_family_of_five_must_split() {
        // Eligibility is capped at 4; a size-5 single-room request splits
        // by gender instead.
        let roster = vec![
            family_member("P1", "F1", FamilyRole::Head, Gender::Male)
                .with_preference(RoomType::Quad)
                .with_family_room_request(),
            family_member("P2", "F1", FamilyRole::Spouse, Gender::Female),
            family_member("P3", "F1", FamilyRole::Child, Gender::Male),
            family_member("P4", "F1", FamilyRole::Child, Gender::Female),
            family_member("P5", "F1", FamilyRole::Child, Gender::Female),
        ];
        let mut session = AllocationSession::new(roster).unwrap();
        session.allocate(StrategyKind::Family).unwrap();

        assert!(session.rooms().len() > 1);
        assert!(session
            .rooms()
            .iter()
            .all(|r| r.gender != RoomGender::Mixed));
        assert!(session.unassigned_pilgrims().is_empty());
        // No room mixes genders.
        for room in session.rooms() {
            let genders: Vec<_> = room
                .occupants
                .iter()
                .map(|id| session.pilgrim(id).unwrap().gender.unwrap())
                .collect();
            assert!(genders.windows(2).all(|w| w[0] == w[1]));
        }
    }

    #[test]
    fn test_gender_split_uses_preferred_type() {
        // 5 males preferring triple: chunks of 3 + 2, both in triple rooms.
        let roster: Vec<Pilgrim> = (1..=5)
            .map(|i| {
                family_member(&format!("P{i}"), "F1", FamilyRole::Child, Gender::Male)
                    .with_preference(RoomType::Triple)
            })
            .collect();
        let mut session = AllocationSession::new(roster).unwrap();
        session.allocate(StrategyKind::Family).unwrap();

        assert_eq!(session.rooms().len(), 2);
        assert!(session.rooms().iter().all(|r| r.room_type == RoomType::Triple));
        let counts: Vec<usize> = session.rooms().iter().map(|r| r.occupants.len()).collect();
        assert_eq!(counts, vec![3, 2]);
    }

    #[test]
    fn test_singles_handled_as_units_of_one() {
        let roster = vec![
            Pilgrim::new("P1", "A", Gender::Male).with_preference(RoomType::Double),
            Pilgrim::new("P2", "B", Gender::Female).with_preference(RoomType::Double),
        ];
        let mut session = AllocationSession::new(roster).unwrap();
        let outcome = session.allocate(StrategyKind::Family).unwrap();

        assert_eq!(outcome.unassigned, 0);
        assert_eq!(session.rooms().len(), 2);
        assert_eq!(session.rooms()[0].gender, RoomGender::Male);
        assert_eq!(session.rooms()[1].gender, RoomGender::Female);
    }

    #[test]
    fn test_reuses_empty_template_rooms() {
        let roster = vec![
            family_member("P1", "F1", FamilyRole::Head, Gender::Male)
                .with_preference(RoomType::Double),
            family_member("P2", "F1", FamilyRole::Child, Gender::Male)
                .with_preference(RoomType::Double),
        ];
        let mut session = AllocationSession::new(roster).unwrap();
        session.generate_rooms();
        assert_eq!(session.rooms().len(), 1);

        session.allocate(StrategyKind::Family).unwrap();

        // The family takes the pre-generated double; no extra room opened.
        assert_eq!(session.rooms().len(), 1);
        assert_eq!(session.rooms()[0].occupants.len(), 2);
    }

    #[test]
    fn test_families_processed_in_roster_order() {
        let roster = vec![
            family_member("P1", "F2", FamilyRole::Head, Gender::Male)
                .with_preference(RoomType::Double),
            family_member("P2", "F1", FamilyRole::Head, Gender::Male)
                .with_preference(RoomType::Double),
        ];
        let mut session = AllocationSession::new(roster).unwrap();
        session.allocate(StrategyKind::Family).unwrap();

        // F2 appears first on the roster, so its member takes room R1.
        assert_eq!(session.pilgrim("P1").unwrap().room_assignment.as_deref(), Some("R1"));
        assert_eq!(session.pilgrim("P2").unwrap().room_assignment.as_deref(), Some("R2"));
    }
}
