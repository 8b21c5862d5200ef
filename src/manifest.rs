//! Rooming manifest projection.
//!
//! Renders a session's final room state into the structured summary
//! handed to display and export collaborators (the spreadsheet writer
//! lives outside this crate; no file I/O here). Projection is strictly
//! read-only.

use serde::Serialize;

use crate::engine::AllocationSession;
use crate::models::{FamilyUnit, RoomGender, RoomType};

/// The exportable room-occupancy report for one allocation run.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    /// Per-room occupancy, in room-number order.
    pub rooms: Vec<RoomManifest>,
    /// Run-level totals.
    pub summary: ManifestSummary,
}

/// One room's line in the manifest.
#[derive(Debug, Clone, Serialize)]
pub struct RoomManifest {
    pub room_id: String,
    pub room_number: u32,
    pub room_type: RoomType,
    /// Gender label ("Male" / "Female" / "Mixed").
    pub gender: &'static str,
    /// Reporting annotation (e.g. "Family Room").
    pub special_request: Option<String>,
    /// Occupants in bed order.
    pub occupants: Vec<OccupantEntry>,
    /// Numerator of the capacity fraction.
    pub occupied: usize,
    /// Denominator of the capacity fraction.
    pub capacity: usize,
}

/// One occupant line, with the preference badge shown next to the name.
#[derive(Debug, Clone, Serialize)]
pub struct OccupantEntry {
    pub pilgrim_id: String,
    pub name: String,
    /// Declared room-size preference badge.
    pub preference: RoomType,
    pub bed_label: Option<String>,
}

/// Run-level totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestSummary {
    pub total_pilgrims: usize,
    /// Family units on the roster (singletons included).
    pub total_families: usize,
    pub total_rooms: usize,
    /// Pilgrims left without a room. Callers inspect this to decide
    /// whether to add rooms or re-run with a different strategy.
    pub unassigned: usize,
    pub rooms_by_type: RoomTypeCounts,
}

/// Room-type histogram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RoomTypeCounts {
    pub double: usize,
    pub triple: usize,
    pub quad: usize,
}

impl Manifest {
    /// Projects the current session state into a manifest.
    pub fn project(session: &AllocationSession) -> Self {
        let mut rooms: Vec<RoomManifest> = session
            .rooms()
            .iter()
            .map(|room| RoomManifest {
                room_id: room.id.clone(),
                room_number: room.number,
                room_type: room.room_type,
                gender: room.gender.label(),
                special_request: room.special_request.clone(),
                occupants: room
                    .occupants
                    .iter()
                    .filter_map(|id| session.pilgrim(id))
                    .map(|p| OccupantEntry {
                        pilgrim_id: p.id.clone(),
                        name: p.name.clone(),
                        preference: p.room_preference,
                        bed_label: p.bed_label.clone(),
                    })
                    .collect(),
                occupied: room.occupants.len(),
                capacity: room.capacity(),
            })
            .collect();
        rooms.sort_by_key(|r| r.room_number);

        let mut by_type = RoomTypeCounts::default();
        for room in session.rooms() {
            match room.room_type {
                RoomType::Double => by_type.double += 1,
                RoomType::Triple => by_type.triple += 1,
                RoomType::Quad => by_type.quad += 1,
            }
        }

        Manifest {
            summary: ManifestSummary {
                total_pilgrims: session.pilgrims().len(),
                total_families: FamilyUnit::group(session.pilgrims()).len(),
                total_rooms: rooms.len(),
                unassigned: session.unassigned_pilgrims().len(),
                rooms_by_type: by_type,
            },
            rooms,
        }
    }

    /// Rooms created for an explicit cross-gender family request.
    pub fn mixed_rooms(&self) -> impl Iterator<Item = &RoomManifest> {
        self.rooms
            .iter()
            .filter(|r| r.gender == RoomGender::Mixed.label())
    }
}

impl AllocationSession {
    /// Projects the current state into a [`Manifest`].
    pub fn manifest(&self) -> Manifest {
        Manifest::project(self)
    }
}
