//! Room model.
//!
//! A room is a fixed-capacity container created fresh at the start of
//! each allocation run and discarded on re-run. Capacity is determined
//! structurally by [`RoomType`] so the capacity invariant cannot drift
//! behind a string-keyed lookup.

use serde::{Deserialize, Serialize};

use super::Gender;

/// Room size class. Doubles as a pilgrim's room-size preference —
/// both live in the same three-valued domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Double,
    Triple,
    /// Largest class; also the default preference for records that
    /// omit one.
    #[default]
    Quad,
}

impl RoomType {
    /// Number of beds in a room of this type.
    #[inline]
    pub const fn capacity(self) -> usize {
        match self {
            RoomType::Double => 2,
            RoomType::Triple => 3,
            RoomType::Quad => 4,
        }
    }

    /// Smallest room type that can hold `count` occupants.
    ///
    /// Counts of 4 or more map to quad (the largest class); callers
    /// enforce their own upper bound before relying on this.
    pub fn for_count(count: usize) -> Self {
        match count {
            c if c >= 4 => RoomType::Quad,
            3 => RoomType::Triple,
            _ => RoomType::Double,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            RoomType::Double => "Double",
            RoomType::Triple => "Triple",
            RoomType::Quad => "Quad",
        }
    }

    /// All types, largest first — the template generation order that
    /// minimizes total room count.
    pub const LARGEST_FIRST: [RoomType; 3] = [RoomType::Quad, RoomType::Triple, RoomType::Double];
}

/// Gender restriction on a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomGender {
    Male,
    Female,
    /// Cross-gender room, created only for an explicit family-room request.
    Mixed,
}

impl RoomGender {
    /// Whether a pilgrim of `gender` may occupy a room with this restriction.
    #[inline]
    pub fn admits(self, gender: Gender) -> bool {
        match self {
            RoomGender::Mixed => true,
            RoomGender::Male => gender == Gender::Male,
            RoomGender::Female => gender == Gender::Female,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            RoomGender::Male => "Male",
            RoomGender::Female => "Female",
            RoomGender::Mixed => "Mixed",
        }
    }
}

impl From<Gender> for RoomGender {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => RoomGender::Male,
            Gender::Female => RoomGender::Female,
        }
    }
}

/// A physical hotel room within one allocation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique within the run ("R{number}", monotonic counter).
    pub id: String,
    /// Sequential display label, starting at 1 across the whole run.
    pub number: u32,
    /// Size class; determines capacity.
    pub room_type: RoomType,
    /// Gender restriction.
    pub gender: RoomGender,
    /// Ordered occupant pilgrim IDs. Never exceeds capacity.
    pub occupants: Vec<String>,
    /// Reporting annotation (e.g. "Family Room").
    pub special_request: Option<String>,
}

impl Room {
    /// Creates an empty room.
    pub fn new(number: u32, room_type: RoomType, gender: RoomGender) -> Self {
        Self {
            id: format!("R{number}"),
            number,
            room_type,
            gender,
            occupants: Vec::new(),
            special_request: None,
        }
    }

    /// Sets the special-request annotation.
    pub fn with_special_request(mut self, request: impl Into<String>) -> Self {
        self.special_request = Some(request.into());
        self
    }

    /// Bed count for this room.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.room_type.capacity()
    }

    /// Remaining free beds.
    #[inline]
    pub fn free_beds(&self) -> usize {
        self.capacity() - self.occupants.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupants.len() >= self.capacity()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }
}
