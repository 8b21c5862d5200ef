//! Allocation session: the orchestrator.
//!
//! An [`AllocationSession`] owns one travel group's roster and room
//! list for the duration of an allocation exercise. All mutation of
//! allocation state flows through the session's `assign`/`unassign`
//! pair, which keeps the pilgrim→room and room→occupant sides
//! consistent in one place instead of once per strategy.
//!
//! Sessions are single-threaded and hold no shared state; callers must
//! serialize operations on one group but may run independent sessions
//! for different groups concurrently.

use tracing::{debug, info};

use super::template;
use crate::error::AllocationError;
use crate::models::{Gender, Pilgrim, Room, RoomGender, RoomType};
use crate::strategy::{AllocationStrategy, StrategyKind};
use crate::validation::validate_roster;

/// Result summary of one allocation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationOutcome {
    /// Name of the strategy that ran.
    pub strategy: &'static str,
    /// Pilgrims holding a room after the run.
    pub assigned: usize,
    /// Pilgrims left without a room. A partial result, not a failure;
    /// callers decide whether to add rooms or re-run differently.
    pub unassigned: usize,
}

/// In-memory allocation state for one travel group.
///
/// # Example
///
/// ```
/// use rooming::engine::AllocationSession;
/// use rooming::models::{Gender, Pilgrim, RoomType};
/// use rooming::strategy::StrategyKind;
///
/// let roster = vec![
///     Pilgrim::new("P1", "Ahmad", Gender::Male).with_preference(RoomType::Double),
///     Pilgrim::new("P2", "Budi", Gender::Male).with_preference(RoomType::Double),
/// ];
/// let mut session = AllocationSession::new(roster).unwrap();
/// session.generate_rooms();
///
/// let outcome = session.allocate(StrategyKind::Auto).unwrap();
/// assert_eq!(outcome.assigned, 2);
/// assert_eq!(outcome.unassigned, 0);
/// ```
#[derive(Debug, Clone)]
pub struct AllocationSession {
    pilgrims: Vec<Pilgrim>,
    rooms: Vec<Room>,
    next_room_number: u32,
}

impl AllocationSession {
    /// Creates a session over a roster.
    ///
    /// The roster is validated up front (duplicate IDs, missing
    /// gender); a malformed roster is rejected before any allocation
    /// can begin.
    pub fn new(roster: Vec<Pilgrim>) -> Result<Self, AllocationError> {
        validate_roster(&roster).map_err(|errors| AllocationError::InvalidRoster { errors })?;
        Ok(Self {
            pilgrims: roster,
            rooms: Vec::new(),
            next_room_number: 1,
        })
    }

    /// The roster, with engine-owned fields reflecting current state.
    pub fn pilgrims(&self) -> &[Pilgrim] {
        &self.pilgrims
    }

    /// The current room list.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Looks up a pilgrim by ID.
    pub fn pilgrim(&self, id: &str) -> Option<&Pilgrim> {
        self.pilgrims.iter().find(|p| p.id == id)
    }

    /// Looks up a room by ID.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Pilgrims currently without a room, in roster order.
    pub fn unassigned_pilgrims(&self) -> Vec<&Pilgrim> {
        self.pilgrims.iter().filter(|p| !p.is_assigned()).collect()
    }

    /// Whether no pilgrim holds a room and every room is empty.
    pub fn is_clear(&self) -> bool {
        self.pilgrims.iter().all(|p| !p.is_assigned())
            && self.rooms.iter().all(|r| r.is_empty())
    }

    /// Generates the empty room template for the roster.
    ///
    /// Discards any previous rooms and assignments, then opens rooms
    /// per the gender/preference distribution. Room numbers restart at
    /// 1 and run sequentially across both gender segments.
    pub fn generate_rooms(&mut self) {
        self.clear();
        self.rooms.clear();
        self.next_room_number = 1;

        let plan = template::plan_rooms(&self.pilgrims);
        for (gender, room_type) in plan {
            self.open_room(room_type, gender.into());
        }
        info!(rooms = self.rooms.len(), "generated room template");
    }

    /// Runs an allocation strategy over the current state.
    ///
    /// Mutates room occupancy and pilgrim assignments in place. The
    /// run is idempotent only when preceded by [`clear`](Self::clear)
    /// (or a fresh [`generate_rooms`](Self::generate_rooms)).
    pub fn allocate(&mut self, kind: StrategyKind) -> Result<AllocationOutcome, AllocationError> {
        let strategy = kind.strategy();
        info!(
            strategy = strategy.name(),
            pilgrims = self.pilgrims.len(),
            rooms = self.rooms.len(),
            "running allocation"
        );
        strategy.run(self)?;

        let assigned = self.pilgrims.iter().filter(|p| p.is_assigned()).count();
        Ok(AllocationOutcome {
            strategy: strategy.name(),
            assigned,
            unassigned: self.pilgrims.len() - assigned,
        })
    }

    /// Runs an allocation strategy selected by string tag
    /// (`family` / `preference` / `auto`).
    ///
    /// An unknown tag fails fast with
    /// [`AllocationError::UnknownStrategy`] before any state is
    /// touched.
    pub fn allocate_tagged(&mut self, tag: &str) -> Result<AllocationOutcome, AllocationError> {
        let kind: StrategyKind = tag.parse()?;
        self.allocate(kind)
    }

    /// Empties every room and resets every pilgrim's assignment and
    /// bed label. A no-op on an already-clear session.
    pub fn clear(&mut self) {
        for room in &mut self.rooms {
            room.occupants.clear();
        }
        for pilgrim in &mut self.pilgrims {
            pilgrim.room_assignment = None;
            pilgrim.bed_label = None;
        }
    }

    /// Manually seats explicitly chosen pilgrims in a room.
    ///
    /// All-or-nothing: the room must exist with enough free beds, and
    /// every pilgrim must exist, be unassigned, and appear only once in
    /// the request. Any violation rejects the whole request and leaves
    /// state untouched.
    pub fn assign_manual(
        &mut self,
        room_id: &str,
        pilgrim_ids: &[&str],
    ) -> Result<(), AllocationError> {
        let room = self
            .room(room_id)
            .ok_or_else(|| AllocationError::UnknownRoom(room_id.to_string()))?;

        if pilgrim_ids.len() > room.free_beds() {
            debug!(room = room_id, "manual assignment rejected: over capacity");
            return Err(AllocationError::RoomFull {
                room_id: room_id.to_string(),
                requested: pilgrim_ids.len(),
                available: room.free_beds(),
            });
        }

        for (i, id) in pilgrim_ids.iter().enumerate() {
            if pilgrim_ids[..i].contains(id) {
                return Err(AllocationError::DuplicateManualRequest(id.to_string()));
            }
            let pilgrim = self
                .pilgrim(id)
                .ok_or_else(|| AllocationError::UnknownPilgrim(id.to_string()))?;
            if let Some(held) = &pilgrim.room_assignment {
                debug!(pilgrim = *id, room = held.as_str(), "manual assignment rejected: already assigned");
                return Err(AllocationError::AlreadyAssigned {
                    pilgrim_id: id.to_string(),
                    room_id: held.clone(),
                });
            }
        }

        // Checks passed; assign cannot fail from here.
        for id in pilgrim_ids {
            self.assign(id, room_id)?;
        }
        Ok(())
    }

    /// Manually removes a pilgrim from their room.
    ///
    /// Remaining occupants keep their order and are re-labelled so bed
    /// labels stay positional.
    pub fn unassign_manual(&mut self, pilgrim_id: &str) -> Result<(), AllocationError> {
        self.pilgrim(pilgrim_id)
            .ok_or_else(|| AllocationError::UnknownPilgrim(pilgrim_id.to_string()))?;
        self.unassign(pilgrim_id);
        Ok(())
    }

    /// Seats a pilgrim in a room, updating both sides of the
    /// relationship atomically.
    pub(crate) fn assign(&mut self, pilgrim_id: &str, room_id: &str) -> Result<(), AllocationError> {
        let room_idx = self
            .rooms
            .iter()
            .position(|r| r.id == room_id)
            .ok_or_else(|| AllocationError::UnknownRoom(room_id.to_string()))?;
        if self.rooms[room_idx].is_full() {
            return Err(AllocationError::RoomFull {
                room_id: room_id.to_string(),
                requested: 1,
                available: 0,
            });
        }

        let pilgrim_idx = self
            .pilgrims
            .iter()
            .position(|p| p.id == pilgrim_id)
            .ok_or_else(|| AllocationError::UnknownPilgrim(pilgrim_id.to_string()))?;
        if let Some(held) = &self.pilgrims[pilgrim_idx].room_assignment {
            return Err(AllocationError::AlreadyAssigned {
                pilgrim_id: pilgrim_id.to_string(),
                room_id: held.clone(),
            });
        }

        let room = &mut self.rooms[room_idx];
        room.occupants.push(pilgrim_id.to_string());
        let bed = room.occupants.len();
        let pilgrim = &mut self.pilgrims[pilgrim_idx];
        pilgrim.room_assignment = Some(room_id.to_string());
        pilgrim.bed_label = Some(format!("Bed {bed}"));
        Ok(())
    }

    /// Removes a pilgrim from their room, if any, keeping both sides
    /// consistent and bed labels positional.
    pub(crate) fn unassign(&mut self, pilgrim_id: &str) {
        let Some(pilgrim) = self.pilgrims.iter_mut().find(|p| p.id == pilgrim_id) else {
            return;
        };
        let Some(room_id) = pilgrim.room_assignment.take() else {
            return;
        };
        pilgrim.bed_label = None;

        let Some(room) = self.rooms.iter_mut().find(|r| r.id == room_id) else {
            return;
        };
        room.occupants.retain(|id| id != pilgrim_id);

        // Close the positional gap in the remaining labels.
        let remaining: Vec<(usize, String)> = room
            .occupants
            .iter()
            .cloned()
            .enumerate()
            .collect();
        for (index, occupant_id) in remaining {
            if let Some(p) = self.pilgrims.iter_mut().find(|p| p.id == occupant_id) {
                p.bed_label = Some(format!("Bed {}", index + 1));
            }
        }
    }

    /// Opens a new empty room with the next sequential number.
    pub(crate) fn open_room(&mut self, room_type: RoomType, gender: RoomGender) -> String {
        let number = self.next_room_number;
        self.next_room_number += 1;
        let room = Room::new(number, room_type, gender);
        let id = room.id.clone();
        self.rooms.push(room);
        id
    }

    /// Opens a new room carrying a special-request annotation.
    pub(crate) fn open_special_room(
        &mut self,
        room_type: RoomType,
        gender: RoomGender,
        request: &str,
    ) -> String {
        let number = self.next_room_number;
        self.next_room_number += 1;
        let room = Room::new(number, room_type, gender).with_special_request(request);
        let id = room.id.clone();
        self.rooms.push(room);
        id
    }

    /// Finds the lowest-numbered empty room matching a gender and type.
    pub(crate) fn find_empty_room(&self, gender: Gender, room_type: RoomType) -> Option<String> {
        self.rooms
            .iter()
            .find(|r| r.is_empty() && r.room_type == room_type && r.gender == RoomGender::from(gender))
            .map(|r| r.id.clone())
    }
}
