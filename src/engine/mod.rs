//! Allocation engine: room templates and the session orchestrator.
//!
//! [`AllocationSession`] owns one group's roster and room list and
//! drives the full cycle: template generation → strategy run →
//! manual touch-up → clear and re-run.
//!
//! # Usage
//!
//! ```
//! use rooming::engine::AllocationSession;
//! use rooming::models::{Gender, Pilgrim};
//!
//! let roster = vec![Pilgrim::new("P1", "Ahmad", Gender::Male)];
//! let mut session = AllocationSession::new(roster).unwrap();
//! session.generate_rooms();
//! let outcome = session.allocate_tagged("auto").unwrap();
//! assert_eq!(outcome.unassigned, 0);
//! ```

mod session;
pub mod template;

pub use session::{AllocationOutcome, AllocationSession};
