use super::normalize::{active_count, highest_active_order, normalize};
use super::Ordered;

/// Insert `record`, or replace the record with the same id.
///
/// An archived record is stored as-is and never shifts anything. An active
/// record is placed at its requested `order`, clamped to
/// `1..=active_count + 1`; an order of `0` means "append at the end". Active
/// records at or after the target move one slot later.
///
/// Every record already carrying `record`'s id is dropped first, so a
/// collection holding duplicates of that id comes out with a single copy.
#[must_use]
pub fn upsert<T: Ordered>(list: Vec<T>, record: T) -> Vec<T> {
    let rest: Vec<T> = list
        .into_iter()
        .filter(|existing| existing.id() != record.id())
        .collect();
    let mut compact = normalize(rest);

    if record.is_archived() {
        compact.push(record);
        return normalize(compact);
    }

    let highest = active_count(&compact);
    let requested = record.order();
    insert_at(compact, record, requested, highest)
}

/// Archive the first record whose id is `id`.
///
/// The archived record keeps its stored `order`; the active records behind
/// it close the gap. An unknown id only normalizes the collection.
#[must_use]
pub fn archive<T: Ordered>(mut list: Vec<T>, id: &str) -> Vec<T> {
    if let Some(record) = list.iter_mut().find(|record| record.id() == id) {
        record.set_archived(true);
    }
    normalize(list)
}

/// Bring the first record whose id is `id` back into the active ordering.
///
/// `requested` is clamped to `1..=highest_active_order + 1`; `None` or `0`
/// appends at the end. Active records at or after the target move one slot
/// later. Restoring a record that is already active moves it. An unknown id
/// only normalizes the collection.
#[must_use]
pub fn restore<T: Ordered>(list: Vec<T>, id: &str, requested: Option<u32>) -> Vec<T> {
    let mut compact = normalize(list);
    let Some(position) = compact.iter().position(|record| record.id() == id) else {
        return compact;
    };

    let record = compact.remove(position);
    let highest = highest_active_order(&compact);
    insert_at(compact, record, requested.unwrap_or(0), highest)
}

/// Open a slot at the clamped target and put `record` there, active.
///
/// `compact` must already be normalized and must not contain `record`.
fn insert_at<T: Ordered>(mut compact: Vec<T>, mut record: T, requested: u32, highest: u32) -> Vec<T> {
    let target = clamp_target(requested, highest);

    for existing in compact
        .iter_mut()
        .filter(|existing| !existing.is_archived() && existing.order() >= target)
    {
        existing.set_order(existing.order().saturating_add(1));
    }

    record.set_archived(false);
    record.set_order(target);
    compact.push(record);
    normalize(compact)
}

/// Clamp a requested order into `1..=highest + 1`; `0` appends.
fn clamp_target(requested: u32, highest: u32) -> u32 {
    let end = highest.saturating_add(1);
    if requested == 0 {
        end
    } else {
        requested.clamp(1, end)
    }
}
