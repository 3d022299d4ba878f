use super::Ordered;

/// Renumber the active records of `list` to `1..=N`.
///
/// Active records are stable-sorted by their current `order`, so records
/// sharing a value keep their relative position. An order of `0` means none
/// was given; those records go after every ordered one. Archived records are
/// left exactly as they are and are returned after the active ones.
#[must_use]
pub fn normalize<T: Ordered>(list: Vec<T>) -> Vec<T> {
    let (mut active, archived): (Vec<T>, Vec<T>) =
        list.into_iter().partition(|record| !record.is_archived());

    active.sort_by_key(|record| (record.order() == 0, record.order()));
    for (rank, record) in (1_u32..).zip(active.iter_mut()) {
        record.set_order(rank);
    }

    active.extend(archived);
    active
}

/// Number of active records in `list`.
#[must_use]
pub fn active_count<T: Ordered>(list: &[T]) -> u32 {
    let count = list.iter().filter(|record| !record.is_archived()).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Highest `order` among the active records of `list`, `0` when none are active.
#[must_use]
pub fn highest_active_order<T: Ordered>(list: &[T]) -> u32 {
    list.iter()
        .filter(|record| !record.is_archived())
        .map(Ordered::order)
        .max()
        .unwrap_or(0)
}
