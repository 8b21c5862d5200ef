//! Allocation strategies.
//!
//! Three interchangeable algorithms turn a grouped roster into room
//! assignments:
//!
//! | Strategy | Behavior |
//! |----------|----------|
//! | [`FamilyFirst`] | Keep family units together, gender-split only when required |
//! | [`PreferenceFirst`] | Group strictly by (gender, preference); no fallback |
//! | [`Auto`] | Preference pass, then sweep leftovers into free capacity |
//!
//! Strategies mutate session state only through the session's
//! `assign`/`open_room` operations, so the bidirectional-consistency
//! and capacity invariants hold regardless of which algorithm runs.

mod auto;
mod family_first;
mod preference_first;

pub use auto::Auto;
pub use family_first::FamilyFirst;
pub use preference_first::PreferenceFirst;

use std::fmt;
use std::fmt::Debug;
use std::str::FromStr;

use crate::engine::AllocationSession;
use crate::error::AllocationError;

/// An allocation algorithm.
///
/// Implementations are deterministic, finite passes over the session's
/// roster; pilgrims they cannot place are left unassigned for the
/// caller to inspect, never an error.
pub trait AllocationStrategy: Debug {
    /// Strategy tag (e.g. "family").
    fn name(&self) -> &'static str;

    /// Runs the algorithm, mutating room occupancy and pilgrim
    /// assignments in place.
    fn run(&self, session: &mut AllocationSession) -> Result<(), AllocationError>;
}

/// Strategy selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StrategyKind {
    /// Family-first: cohesion over preference.
    Family,
    /// Preference-first, no fallback.
    Preference,
    /// Preference-first plus fallback fill (the default).
    #[default]
    Auto,
}

impl StrategyKind {
    /// Instantiates the strategy for this selector.
    pub fn strategy(self) -> Box<dyn AllocationStrategy> {
        match self {
            StrategyKind::Family => Box::new(FamilyFirst),
            StrategyKind::Preference => Box::new(PreferenceFirst),
            StrategyKind::Auto => Box::new(Auto),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = AllocationError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "family" => Ok(StrategyKind::Family),
            "preference" => Ok(StrategyKind::Preference),
            "auto" => Ok(StrategyKind::Auto),
            other => Err(AllocationError::UnknownStrategy {
                tag: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            StrategyKind::Family => "family",
            StrategyKind::Preference => "preference",
            StrategyKind::Auto => "auto",
        };
        f.write_str(tag)
    }
}
