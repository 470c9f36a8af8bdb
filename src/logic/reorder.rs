//! Reordering logic
//!
//! Single-element moves on the master list. Reordering always works on
//! master positions, so moves made while a filter is active still land
//! relative to the visible target.

use crate::model::record::Record;

/// Move the source record to the target record's position
///
/// The source is removed first, then reinserted at the index the target
/// occupies in the shortened list, so it ends up directly before the
/// target. Returns false (and leaves the list untouched) when the ids are
/// equal, either one is missing, or the source already sits there.
pub fn reorder<R: Record>(records: &mut Vec<R>, source_id: &str, target_id: &str) -> bool {
    if source_id == target_id {
        return false;
    }

    let Some(from) = records.iter().position(|r| r.id() == source_id) else {
        return false;
    };
    let Some(target_idx) = records.iter().position(|r| r.id() == target_id) else {
        return false;
    };

    let to = if target_idx > from {
        target_idx - 1
    } else {
        target_idx
    };
    if to == from {
        return false;
    }

    let record = records.remove(from);
    records.insert(to, record);
    true
}
