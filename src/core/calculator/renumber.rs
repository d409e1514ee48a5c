//! Canonical sub-phase numbering.
//!
//! After edits, a group's numbers can be out of chronological order or carry
//! gaps. The plan computed here restores, per group, a placeholder at 0 and
//! real sub-phases at 1..N in ascending (start_date, start_hour) order,
//! touching only the rows whose number actually changes.

use crate::models::subphase::SubPhase;
use std::collections::BTreeMap;

/// A single numbering correction: set `phases.sub_number` for row `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubNumberUpdate {
    pub id: i32,
    pub sub_number: i32,
}

/// Compute the minimal update list that restores canonical numbering for
/// every group of a project.
///
/// Rows already carrying their canonical number are omitted, so planning
/// twice without intervening edits yields an empty list the second time.
/// Ties on the start point keep their prior order: the input arrives in
/// stored (group_number, sub_number, id) order and the sort is stable.
pub fn plan_renumber(subphases: &[SubPhase]) -> Vec<SubNumberUpdate> {
    let mut buckets: BTreeMap<i32, Vec<&SubPhase>> = BTreeMap::new();
    for sp in subphases {
        buckets.entry(sp.group_number).or_default().push(sp);
    }

    let mut updates = Vec::new();

    for (_number, members) in buckets {
        let mut real: Vec<&SubPhase> = Vec::new();

        for sp in members {
            if sp.is_placeholder() {
                // the metadata carrier always sits at 0
                if sp.sub_number != 0 {
                    updates.push(SubNumberUpdate {
                        id: sp.id,
                        sub_number: 0,
                    });
                }
            } else {
                real.push(sp);
            }
        }

        real.sort_by_key(|sp| sp.start_key());

        for (pos, sp) in real.iter().enumerate() {
            let assigned = (pos + 1) as i32;
            if sp.sub_number != assigned {
                updates.push(SubNumberUpdate {
                    id: sp.id,
                    sub_number: assigned,
                });
            }
        }
    }

    updates
}
