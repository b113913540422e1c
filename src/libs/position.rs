//! Position engine for sibling sets.
//!
//! A sibling set is every direct child of one parent, ordered by `position`.
//! After each completed operation the positions of a sibling set are exactly
//! `0..n` with no gaps and no duplicates. The functions here are pure: they
//! take the current slots and return the assignment to write back, leaving
//! persistence to the caller.
//!
//! ## Operations
//!
//! - [`compact`] renumbers an ordered id sequence to `0..n`
//! - [`append_at_end`] yields the position for a new last sibling
//! - [`swap`] exchanges the positions of two siblings
//! - [`insert_at`] removes an item and reinserts it at a clamped index
//! - [`diff`] keeps only the slots whose position actually changed
//!
//! ```rust
//! use lanes::libs::position::{insert_at, Slot};
//!
//! let slots = vec![Slot::new(1, 0), Slot::new(2, 1), Slot::new(3, 2)];
//! let order = insert_at(&slots, 3, 0).unwrap();
//! let ids: Vec<_> = order.iter().map(|s| s.id).collect();
//! assert_eq!(ids, vec![3, 1, 2]);
//! ```

use crate::libs::entity::Id;

/// An id together with its position inside one sibling set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub id: Id,
    pub position: i64,
}

impl Slot {
    pub fn new(id: Id, position: i64) -> Self {
        Self { id, position }
    }
}

/// Renumbers `ids` to consecutive positions starting at 0, keeping their order.
pub fn compact(ids: &[Id]) -> Vec<Slot> {
    ids.iter().enumerate().map(|(index, &id)| Slot::new(id, index as i64)).collect()
}

/// Position for a sibling appended after the current maximum.
///
/// An empty set yields 0. The set is not assumed dense, so this is
/// `max + 1` rather than the sibling count.
pub fn append_at_end(siblings: &[Slot]) -> i64 {
    next_after(siblings.iter().map(|s| s.position).max())
}

/// `max + 1`, with an empty set treated as a maximum of -1.
pub fn next_after(max_position: Option<i64>) -> i64 {
    max_position.unwrap_or(-1) + 1
}

/// Exchanges the positions of two siblings. No other sibling is affected.
pub fn swap(a: Slot, b: Slot) -> (Slot, Slot) {
    (Slot::new(a.id, b.position), Slot::new(b.id, a.position))
}

/// Clamps a signed target index into `[0, len]`.
pub fn clamp_index(target: i64, len: usize) -> usize {
    if target <= 0 {
        0
    } else {
        (target as u64).min(len as u64) as usize
    }
}

/// Moves `moved` to `target` among the remaining siblings and renumbers the
/// whole set.
///
/// `target` indexes the sequence with the moved item removed and is clamped,
/// never rejected. Returns `None` when `moved` is not part of `siblings`.
pub fn insert_at(siblings: &[Slot], moved: Id, target: i64) -> Option<Vec<Slot>> {
    let mut ordered: Vec<Slot> = siblings.to_vec();
    ordered.sort_by_key(|s| (s.position, s.id));

    let from = ordered.iter().position(|s| s.id == moved)?;
    let item = ordered.remove(from);
    let index = clamp_index(target, ordered.len());
    ordered.insert(index, item);

    let ids: Vec<Id> = ordered.iter().map(|s| s.id).collect();
    Some(compact(&ids))
}

/// Slots from `after` whose position differs from the one in `before`.
pub fn diff(before: &[Slot], after: &[Slot]) -> Vec<Slot> {
    after
        .iter()
        .filter(|next| !before.iter().any(|prev| prev.id == next.id && prev.position == next.position))
        .copied()
        .collect()
}

/// True when the positions are exactly `0..n` in some order.
pub fn is_dense(slots: &[Slot]) -> bool {
    let mut positions: Vec<i64> = slots.iter().map(|s| s.position).collect();
    positions.sort_unstable();
    positions.iter().enumerate().all(|(index, &p)| p == index as i64)
}
