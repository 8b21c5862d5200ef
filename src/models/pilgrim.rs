//! Pilgrim model.
//!
//! A pilgrim is one traveler on a group roster. The roster itself is
//! owned by an external collaborator (persistence, family-relation and
//! mahram truth live there); the engine only ever mutates the two
//! allocation-owned fields `room_assignment` and `bed_label`.

use serde::{Deserialize, Serialize};

use super::RoomType;

/// Traveler gender, used for room segregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Role within a family unit.
///
/// Informational only — it selects the representative member whose
/// name and room preference speak for the family in reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyRole {
    /// Head of family (preferred representative).
    Head,
    Spouse,
    Child,
    /// Traveling alone or unaffiliated.
    #[default]
    Individual,
}

/// One traveler in a group roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pilgrim {
    /// Unique identifier, stable across recomputation.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Traveler gender. `None` marks a malformed source record;
    /// validation rejects it before allocation — the engine never guesses.
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Cohesion key: pilgrims sharing a non-`None` value are family members.
    #[serde(default)]
    pub family_id: Option<String>,
    /// Role within the family (default: individual).
    #[serde(default)]
    pub family_role: FamilyRole,
    /// Desired room size (default: quad when absent from the source record).
    #[serde(default)]
    pub room_preference: RoomType,
    /// Whether the family explicitly wants to share one room
    /// regardless of gender mix.
    #[serde(default)]
    pub family_room_request: bool,
    /// ID of the room currently holding this pilgrim. Engine-owned.
    #[serde(default)]
    pub room_assignment: Option<String>,
    /// Positional label within the assigned room (e.g. "Bed 2"). Engine-owned.
    #[serde(default)]
    pub bed_label: Option<String>,
}

impl Pilgrim {
    /// Creates a new unassigned pilgrim.
    pub fn new(id: impl Into<String>, name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            gender: Some(gender),
            family_id: None,
            family_role: FamilyRole::Individual,
            room_preference: RoomType::default(),
            family_room_request: false,
            room_assignment: None,
            bed_label: None,
        }
    }

    /// Sets the family affiliation.
    pub fn with_family(mut self, family_id: impl Into<String>, role: FamilyRole) -> Self {
        self.family_id = Some(family_id.into());
        self.family_role = role;
        self
    }

    /// Sets the room-size preference.
    pub fn with_preference(mut self, preference: RoomType) -> Self {
        self.room_preference = preference;
        self
    }

    /// Flags an explicit shared-family-room request.
    pub fn with_family_room_request(mut self) -> Self {
        self.family_room_request = true;
        self
    }

    /// Whether this pilgrim currently holds a room assignment.
    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.room_assignment.is_some()
    }
}
