//! Room/bed allocation engine for pilgrimage travel groups.
//!
//! Partitions a group roster into physical hotel rooms of fixed
//! capacities while honoring gender segregation, family-cohesion
//! requests, and partial-capacity fallback, then projects the result
//! into an exportable manifest. A constrained bin-packing problem with
//! domain tie-breaks, selectable strategies, and idempotent
//! re-planning.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Pilgrim`, `Room`, `RoomType`,
//!   `FamilyUnit`
//! - **`engine`**: `AllocationSession` orchestrator and the room
//!   template generator
//! - **`strategy`**: The three allocation algorithms — family-first,
//!   preference-first, auto
//! - **`manifest`**: Read-only occupancy report for export collaborators
//! - **`validation`**: Roster integrity checks (duplicate IDs, missing
//!   gender)
//! - **`error`**: `AllocationError`
//!
//! # Boundaries
//!
//! This is a library consumed by an administration/reporting layer,
//! not a service: persistence, file export, authentication, and
//! mahram/family-relation truth all live with the caller. The engine
//! mutates exactly two fields it owns on each pilgrim
//! (`room_assignment`, `bed_label`) and nothing else.
//!
//! # Example
//!
//! ```
//! use rooming::engine::AllocationSession;
//! use rooming::models::{Gender, Pilgrim, RoomType};
//!
//! let roster = vec![
//!     Pilgrim::new("P1", "Ahmad", Gender::Male).with_preference(RoomType::Double),
//!     Pilgrim::new("P2", "Budi", Gender::Male).with_preference(RoomType::Double),
//!     Pilgrim::new("P3", "Siti", Gender::Female),
//! ];
//!
//! let mut session = AllocationSession::new(roster).unwrap();
//! session.generate_rooms();
//! let outcome = session.allocate_tagged("auto").unwrap();
//! assert_eq!(outcome.unassigned, 0);
//!
//! let manifest = session.manifest();
//! assert_eq!(manifest.summary.total_pilgrims, 3);
//! ```

pub mod engine;
pub mod error;
pub mod manifest;
pub mod models;
pub mod strategy;
pub mod validation;

pub use engine::{AllocationOutcome, AllocationSession};
pub use error::AllocationError;
pub use manifest::Manifest;
pub use strategy::StrategyKind;
