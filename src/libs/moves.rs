//! Directional moves for swimlanes, lists and cards.
//!
//! Every move ends in exactly one of three ways:
//!
//! - **no-op**: the item is at the boundary, or the neighbour it should trade
//!   places with does not exist. Nothing is written.
//! - **swap**: the item trades positions with the sibling at `position ± 1`.
//! - **reparent-and-append**: the item leaves its sibling set (which is
//!   compacted behind it) and is appended to the end of a neighbouring
//!   parent's children.
//!
//! | Item      | Up / Down                   | Left / Right                |
//! |-----------|-----------------------------|-----------------------------|
//! | Swimlane  | swap within board           | not applicable              |
//! | List      | move to swimlane above/below| swap within swimlane        |
//! | Card      | swap within list            | move to list left/right     |
//!
//! Functions take a plain `Connection` reference; the façade in
//! `libs::kanban` hands them a transaction so a move either fully lands or
//! leaves no trace.

use crate::db::boards::Boards;
use crate::db::siblings::Siblings;
use crate::libs::entity::{Id, Item, Level};
use crate::libs::position::{self, Slot};
use crate::msg_debug;
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

/// Screen direction requested by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Which neighbour a move targets within an ordered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

impl Step {
    fn offset(self) -> i64 {
        match self {
            Step::Previous => -1,
            Step::Next => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveOutcome {
    NoOp,
    Swapped { item: Item, with: Id },
    Reparented { item: Item, from: Id, to: Id, position: i64 },
    Reordered { item: Item, position: i64 },
}

impl MoveOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, MoveOutcome::NoOp)
    }
}

/// Routes a directional request to the swap or reparent operation that
/// applies to the item's kind.
pub fn move_item(conn: &Connection, item: Item, direction: Direction) -> Result<MoveOutcome> {
    match (item.level(), direction) {
        (Level::Swimlane, Direction::Up) => swap_with_neighbor(conn, item, Step::Previous),
        (Level::Swimlane, Direction::Down) => swap_with_neighbor(conn, item, Step::Next),
        (Level::Swimlane, Direction::Left | Direction::Right) => {
            msg_debug!(format!("{} cannot move sideways", item));
            Ok(MoveOutcome::NoOp)
        }
        (Level::List, Direction::Left) => swap_with_neighbor(conn, item, Step::Previous),
        (Level::List, Direction::Right) => swap_with_neighbor(conn, item, Step::Next),
        (Level::List, Direction::Up) => move_to_adjacent_parent(conn, item, Step::Previous),
        (Level::List, Direction::Down) => move_to_adjacent_parent(conn, item, Step::Next),
        (Level::Card, Direction::Up) => swap_with_neighbor(conn, item, Step::Previous),
        (Level::Card, Direction::Down) => swap_with_neighbor(conn, item, Step::Next),
        (Level::Card, Direction::Left) => move_to_adjacent_parent(conn, item, Step::Previous),
        (Level::Card, Direction::Right) => move_to_adjacent_parent(conn, item, Step::Next),
    }
}

/// Swaps the item with the sibling at `position ± 1` under the same parent.
pub fn swap_with_neighbor(conn: &Connection, item: Item, step: Step) -> Result<MoveOutcome> {
    let siblings = Siblings::new(conn, item.level());

    let Some((parent, current)) = siblings.parent_of(item.id())? else {
        msg_debug!(format!("{} not found, move skipped", item));
        return Ok(MoveOutcome::NoOp);
    };

    if at_boundary(&siblings, parent, current, step)? {
        msg_debug!(format!("{} is already at the boundary", item));
        return Ok(MoveOutcome::NoOp);
    }

    let target = current + step.offset();
    let Some(other) = siblings.id_at(parent, target)? else {
        msg_debug!(format!("no {} at position {} beside {}", item.level(), target, item));
        return Ok(MoveOutcome::NoOp);
    };

    let (moved, displaced) = position::swap(Slot::new(item.id(), current), Slot::new(other, target));
    siblings.write(&[moved, displaced])?;

    Ok(MoveOutcome::Swapped { item, with: other })
}

/// Moves the item to the parent beside its own parent, appended at the end.
///
/// The source sibling set is compacted to close the gap. Swimlanes have no
/// positioned parent, so they never move this way.
pub fn move_to_adjacent_parent(conn: &Connection, item: Item, step: Step) -> Result<MoveOutcome> {
    let Some(parent_level) = item.level().parent_level() else {
        msg_debug!(format!("{} has no ordered parent", item));
        return Ok(MoveOutcome::NoOp);
    };

    let children = Siblings::new(conn, item.level());
    let parents = Siblings::new(conn, parent_level);

    let Some((parent, _)) = children.parent_of(item.id())? else {
        msg_debug!(format!("{} not found, move skipped", item));
        return Ok(MoveOutcome::NoOp);
    };
    let Some((grandparent, parent_position)) = parents.parent_of(parent)? else {
        msg_debug!(format!("{} #{} not found, move skipped", parent_level, parent));
        return Ok(MoveOutcome::NoOp);
    };

    if at_boundary(&parents, grandparent, parent_position, step)? {
        msg_debug!(format!("{} is already in the outermost {}", item, parent_level));
        return Ok(MoveOutcome::NoOp);
    }

    let Some(target) = parents.id_at(grandparent, parent_position + step.offset())? else {
        msg_debug!(format!("no {} beside {} #{}", parent_level, parent_level, parent));
        return Ok(MoveOutcome::NoOp);
    };

    reparent(&children, item, parent, target)
}

/// Drop-zone move: puts the item at the end of an arbitrary parent of the
/// right kind. Dropping onto the current parent changes nothing.
pub fn move_to_parent(conn: &Connection, item: Item, new_parent: Id) -> Result<MoveOutcome> {
    let children = Siblings::new(conn, item.level());

    let Some((parent, _)) = children.parent_of(item.id())? else {
        msg_debug!(format!("{} not found, drop skipped", item));
        return Ok(MoveOutcome::NoOp);
    };

    if parent == new_parent {
        return Ok(MoveOutcome::NoOp);
    }

    if !parent_exists(conn, item.level(), new_parent)? {
        msg_debug!(format!("drop target #{} for {} not found", new_parent, item));
        return Ok(MoveOutcome::NoOp);
    }

    reparent(&children, item, parent, new_parent)
}

fn reparent(children: &Siblings, item: Item, from: Id, to: Id) -> Result<MoveOutcome> {
    let before = children.children(from)?;
    let remaining: Vec<Id> = before.iter().map(|s| s.id).filter(|&id| id != item.id()).collect();
    children.write(&position::diff(&before, &position::compact(&remaining)))?;

    let position = position::append_at_end(&children.children(to)?);
    children.set_parent(item.id(), to)?;
    children.set_position(item.id(), position)?;

    Ok(MoveOutcome::Reparented { item, from, to, position })
}

fn at_boundary(siblings: &Siblings, parent: Id, current: i64, step: Step) -> Result<bool> {
    Ok(match step {
        Step::Previous => current <= 0,
        Step::Next => siblings.max_position(parent)?.map_or(true, |max| current >= max),
    })
}

fn parent_exists(conn: &Connection, level: Level, parent: Id) -> Result<bool> {
    match level.parent_level() {
        Some(parent_level) => Siblings::new(conn, parent_level).exists(parent),
        None => Ok(Boards::new(conn).get(parent)?.is_some()),
    }
}
