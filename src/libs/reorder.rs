//! Drag-style placement at an arbitrary index.
//!
//! The target index addresses the sibling sequence with the moved item taken
//! out, so `0` always means "first" and `len` means "last". Out-of-range
//! targets are clamped rather than rejected. The item keeps its parent;
//! moving between parents goes through [`crate::libs::moves`].

use crate::db::siblings::Siblings;
use crate::libs::entity::Item;
use crate::libs::moves::MoveOutcome;
use crate::libs::position;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::Connection;

/// Places `item` at `target` among its siblings and renumbers them `0..n`.
pub fn reorder_to(conn: &Connection, item: Item, target: i64) -> Result<MoveOutcome> {
    let siblings = Siblings::new(conn, item.level());

    let Some((parent, _)) = siblings.parent_of(item.id())? else {
        msg_debug!(format!("{} not found, reorder skipped", item));
        return Ok(MoveOutcome::NoOp);
    };

    let current = siblings.children(parent)?;
    let Some(next) = position::insert_at(&current, item.id(), target) else {
        return Ok(MoveOutcome::NoOp);
    };

    let changes = position::diff(&current, &next);
    if changes.is_empty() {
        return Ok(MoveOutcome::NoOp);
    }
    siblings.write(&changes)?;

    let position = next.iter().find(|s| s.id == item.id()).map(|s| s.position).unwrap_or_default();
    Ok(MoveOutcome::Reordered { item, position })
}
