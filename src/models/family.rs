//! Family units.
//!
//! A family unit is the cohesion grouping derived from shared
//! `family_id` values. Units are rebuilt from the roster at the start
//! of each allocation run and never persisted; pilgrims with no family
//! affiliation become singleton units of size 1.

use serde::Serialize;

use super::{FamilyRole, Gender, Pilgrim, RoomType};

/// A group of pilgrims sharing a family identifier.
///
/// Derived, not persisted. Members are clones of the roster entries in
/// roster order; mutation of allocation state happens on the session's
/// roster, never on a unit.
#[derive(Debug, Clone, Serialize)]
pub struct FamilyUnit {
    /// Shared family identifier; `None` for a singleton unit.
    pub family_id: Option<String>,
    /// Members in roster order. Never empty.
    pub members: Vec<Pilgrim>,
    /// Preference of the representative member.
    pub preferred_room_type: RoomType,
    /// Whether any member requested one shared room for the family.
    pub wants_single_room: bool,
    /// Name of the representative member, for reporting.
    pub representative_name: String,
}

impl FamilyUnit {
    /// Groups a roster into family units, preserving the roster's
    /// order of first appearance.
    ///
    /// The representative is the member with [`FamilyRole::Head`], or
    /// the first member when none is marked head.
    pub fn group(roster: &[Pilgrim]) -> Vec<FamilyUnit> {
        let mut order: Vec<(Option<&str>, Vec<&Pilgrim>)> = Vec::new();

        for pilgrim in roster {
            match pilgrim.family_id.as_deref() {
                Some(fid) => {
                    if let Some((_, members)) = order
                        .iter_mut()
                        .find(|(key, _)| key.as_deref() == Some(fid))
                    {
                        members.push(pilgrim);
                    } else {
                        order.push((Some(fid), vec![pilgrim]));
                    }
                }
                None => order.push((None, vec![pilgrim])),
            }
        }

        order
            .into_iter()
            .map(|(family_id, members)| {
                let representative = members
                    .iter()
                    .find(|m| m.family_role == FamilyRole::Head)
                    .unwrap_or(&members[0]);

                FamilyUnit {
                    family_id: family_id.map(str::to_string),
                    preferred_room_type: representative.room_preference,
                    wants_single_room: members.iter().any(|m| m.family_room_request),
                    representative_name: representative.name.clone(),
                    members: members.into_iter().cloned().collect(),
                }
            })
            .collect()
    }

    #[inline]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn male_count(&self) -> usize {
        self.members
            .iter()
            .filter(|m| m.gender == Some(Gender::Male))
            .count()
    }

    pub fn female_count(&self) -> usize {
        self.members
            .iter()
            .filter(|m| m.gender == Some(Gender::Female))
            .count()
    }

    /// Member IDs of one gender, in roster order.
    pub fn member_ids_of(&self, gender: Gender) -> Vec<String> {
        self.members
            .iter()
            .filter(|m| m.gender == Some(gender))
            .map(|m| m.id.clone())
            .collect()
    }
}
