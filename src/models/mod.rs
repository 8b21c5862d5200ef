//! Allocation domain models.
//!
//! Core data types for the room/bed allocation problem: the roster
//! entry ([`Pilgrim`]), the fixed-capacity container ([`Room`]), and
//! the derived cohesion grouping ([`FamilyUnit`]).
//!
//! Rooms and family units live for exactly one allocation run; the
//! roster is owned by the surrounding administration layer and only
//! its two engine-owned fields (`room_assignment`, `bed_label`) are
//! ever mutated here.

mod family;
mod pilgrim;
mod room;

pub use family::FamilyUnit;
pub use pilgrim::{FamilyRole, Gender, Pilgrim};
pub use room::{Room, RoomGender, RoomType};
