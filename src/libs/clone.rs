//! Deep copies of boards, swimlanes, lists and cards.
//!
//! The cloned root gets a `" (Copy)"` suffix and a fresh slot among its
//! siblings; every descendant keeps its name and its original position, so
//! the copy reads in the same order as the source. Descendant sets are
//! compacted after copying, which is a no-op for a dense source and repairs
//! the copy when the source was not.
//!
//! | Root     | Placement of the copy                                  |
//! |----------|--------------------------------------------------------|
//! | Board    | new root, boards are not positioned                    |
//! | Swimlane | directly after the source; later swimlanes shift by +1 |
//! | List     | appended after the last list of the same swimlane      |
//! | Card     | appended after the last card of the same list          |

use crate::db::boards::Boards;
use crate::db::cards::{Cards, NewCard};
use crate::db::lists::Lists;
use crate::db::siblings::Siblings;
use crate::db::swimlanes::Swimlanes;
use crate::libs::entity::{Card, Id, Level, List, Swimlane, COPY_SUFFIX};
use crate::libs::position;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::Connection;

/// Clones a board with its whole subtree. `None` when the board is missing.
pub fn clone_board(conn: &Connection, board_id: Id) -> Result<Option<Id>> {
    let Some(board) = Boards::new(conn).get(board_id)? else {
        msg_debug!(format!("board #{} not found, clone skipped", board_id));
        return Ok(None);
    };

    let new_board = Boards::new(conn).insert(&copy_name(&board.name), &board.description)?;
    for swimlane in Swimlanes::new(conn).by_board(board.id)? {
        copy_swimlane(conn, &swimlane, new_board, swimlane.position, &swimlane.name)?;
    }
    Siblings::new(conn, Level::Swimlane).compact(new_board)?;

    Ok(Some(new_board))
}

/// Clones a swimlane into the slot right after the source.
pub fn clone_swimlane(conn: &Connection, swimlane_id: Id) -> Result<Option<Id>> {
    let Some(swimlane) = Swimlanes::new(conn).get(swimlane_id)? else {
        msg_debug!(format!("swimlane #{} not found, clone skipped", swimlane_id));
        return Ok(None);
    };

    Siblings::new(conn, Level::Swimlane).shift_after(swimlane.board_id, swimlane.position, 1)?;
    let new_id = copy_swimlane(conn, &swimlane, swimlane.board_id, swimlane.position + 1, &copy_name(&swimlane.name))?;

    Ok(Some(new_id))
}

/// Clones a list to the end of its swimlane.
pub fn clone_list(conn: &Connection, list_id: Id) -> Result<Option<Id>> {
    let Some(list) = Lists::new(conn).get(list_id)? else {
        msg_debug!(format!("list #{} not found, clone skipped", list_id));
        return Ok(None);
    };

    let position = position::next_after(Siblings::new(conn, Level::List).max_position(list.swimlane_id)?);
    let new_id = copy_list(conn, &list, list.swimlane_id, position, &copy_name(&list.name))?;

    Ok(Some(new_id))
}

/// Clones a card to the end of its list.
pub fn clone_card(conn: &Connection, card_id: Id) -> Result<Option<Id>> {
    let Some(card) = Cards::new(conn).get(card_id)? else {
        msg_debug!(format!("card #{} not found, clone skipped", card_id));
        return Ok(None);
    };

    let position = position::next_after(Siblings::new(conn, Level::Card).max_position(card.list_id)?);
    let new_id = copy_card(conn, &card, card.list_id, position, &copy_name(&card.title))?;

    Ok(Some(new_id))
}

fn copy_swimlane(conn: &Connection, source: &Swimlane, board_id: Id, position: i64, name: &str) -> Result<Id> {
    let new_id = Swimlanes::new(conn).insert(board_id, name, position)?;
    for list in Lists::new(conn).by_swimlane(source.id)? {
        copy_list(conn, &list, new_id, list.position, &list.name)?;
    }
    Siblings::new(conn, Level::List).compact(new_id)?;

    Ok(new_id)
}

fn copy_list(conn: &Connection, source: &List, swimlane_id: Id, position: i64, name: &str) -> Result<Id> {
    let new_id = Lists::new(conn).insert(swimlane_id, name, position)?;
    for card in Cards::new(conn).by_list(source.id)? {
        copy_card(conn, &card, new_id, card.position, &card.title)?;
    }
    Siblings::new(conn, Level::Card).compact(new_id)?;

    Ok(new_id)
}

fn copy_card(conn: &Connection, source: &Card, list_id: Id, position: i64, title: &str) -> Result<Id> {
    let card = NewCard {
        title,
        description: &source.description,
        attachment: source.attachment.as_deref(),
    };

    Cards::new(conn).insert(list_id, &card, position)
}

fn copy_name(name: &str) -> String {
    format!("{}{}", name, COPY_SUFFIX)
}
