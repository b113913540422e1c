//! Command façade over the board store.
//!
//! [`Kanban`] owns the connection and exposes every operation the
//! presentation layer needs. Each mutating command runs inside one SQLite
//! transaction: a reparent that compacts one sibling set and appends to
//! another either commits as a whole or is rolled back as a whole.
//!
//! ## Usage
//!
//! ```rust
//! use lanes::libs::entity::Item;
//! use lanes::libs::kanban::Kanban;
//! use lanes::libs::moves::Direction;
//!
//! let mut kanban = Kanban::open_in_memory()?;
//! let board = kanban.create_board("Roadmap", "")?;
//! let lane = kanban.create_swimlane(board, "Backend")?;
//! let todo = kanban.create_list(lane, "Todo")?;
//! let a = kanban.create_card(todo, "A", "")?;
//! let b = kanban.create_card(todo, "B", "")?;
//!
//! kanban.move_item(Item::Card(b), Direction::Up)?;
//! let titles: Vec<_> = kanban.cards(todo)?.into_iter().map(|c| c.title).collect();
//! assert_eq!(titles, vec!["B", "A"]);
//! # let _ = a;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::db::boards::Boards;
use crate::db::cards::{Cards, NewCard};
use crate::db::db::Db;
use crate::db::lists::Lists;
use crate::db::siblings::Siblings;
use crate::db::swimlanes::Swimlanes;
use crate::libs::clone;
use crate::libs::entity::{Board, BoardTree, Card, Id, Item, Level, List, ListTree, Swimlane, SwimlaneTree};
use crate::libs::error::LanesError;
use crate::libs::messages::Message;
use crate::libs::moves::{self, Direction, MoveOutcome};
use crate::libs::position;
use crate::libs::reorder;
use crate::msg_error;
use anyhow::Result;
use rusqlite::Connection;

pub struct Kanban {
    conn: Connection,
}

impl Kanban {
    /// Opens the configured database in the data directory.
    pub fn new() -> Result<Self> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::from_db(Db::open_in_memory()?))
    }

    pub fn from_db(db: Db) -> Self {
        Self { conn: db.conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Runs `op` in a transaction, committing on success. On failure the
    /// transaction is dropped, which rolls back every statement `op` issued.
    fn in_transaction<T>(&mut self, op: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let tx = self.conn.transaction()?;
        match op(&tx) {
            Ok(value) => {
                tx.commit()?;
                Ok(value)
            }
            Err(e) => {
                // Missing parents are reported by the caller, not as store failures.
                if e.downcast_ref::<LanesError>().is_none() {
                    msg_error!(Message::StoreFailure(e.to_string()));
                }
                Err(e)
            }
        }
    }

    // === BOARDS ===

    pub fn create_board(&mut self, name: &str, description: &str) -> Result<Id> {
        Boards::new(&self.conn).insert(name, description)
    }

    pub fn update_board(&mut self, id: Id, name: &str, description: &str) -> Result<()> {
        if Boards::new(&self.conn).update(id, name, description)? == 0 {
            return Err(LanesError::not_found("board", id).into());
        }
        Ok(())
    }

    pub fn delete_board(&mut self, id: Id) -> Result<()> {
        if Boards::new(&self.conn).delete(id)? == 0 {
            return Err(LanesError::not_found("board", id).into());
        }
        Ok(())
    }

    pub fn boards(&self) -> Result<Vec<Board>> {
        Boards::new(&self.conn).list()
    }

    pub fn board(&self, id: Id) -> Result<Option<Board>> {
        Boards::new(&self.conn).get(id)
    }

    /// Reads the board with its full subtree, every level in position order.
    pub fn load_board(&self, id: Id) -> Result<Option<BoardTree>> {
        let Some(board) = self.board(id)? else {
            return Ok(None);
        };

        let mut swimlanes = Vec::new();
        for swimlane in self.swimlanes(id)? {
            let mut lists = Vec::new();
            for list in self.lists(swimlane.id)? {
                let cards = self.cards(list.id)?;
                lists.push(ListTree { list, cards });
            }
            swimlanes.push(SwimlaneTree { swimlane, lists });
        }

        Ok(Some(BoardTree { board, swimlanes }))
    }

    // === CREATE / EDIT ===

    /// Appends a new swimlane after the board's last one.
    pub fn create_swimlane(&mut self, board_id: Id, name: &str) -> Result<Id> {
        self.in_transaction(|conn| {
            if Boards::new(conn).get(board_id)?.is_none() {
                return Err(LanesError::not_found("board", board_id).into());
            }
            let position = position::next_after(Siblings::new(conn, Level::Swimlane).max_position(board_id)?);
            Swimlanes::new(conn).insert(board_id, name, position)
        })
    }

    pub fn create_list(&mut self, swimlane_id: Id, name: &str) -> Result<Id> {
        self.in_transaction(|conn| {
            require(conn, Level::Swimlane, swimlane_id)?;
            let position = position::next_after(Siblings::new(conn, Level::List).max_position(swimlane_id)?);
            Lists::new(conn).insert(swimlane_id, name, position)
        })
    }

    pub fn create_card(&mut self, list_id: Id, title: &str, description: &str) -> Result<Id> {
        let card = NewCard {
            title,
            description,
            attachment: None,
        };
        self.create_card_with(list_id, &card)
    }

    /// Appends a card, attachment included, in one step.
    pub fn create_card_with(&mut self, list_id: Id, card: &NewCard) -> Result<Id> {
        self.in_transaction(|conn| {
            require(conn, Level::List, list_id)?;
            let position = position::next_after(Siblings::new(conn, Level::Card).max_position(list_id)?);
            Cards::new(conn).insert(list_id, card, position)
        })
    }

    pub fn rename_swimlane(&mut self, id: Id, name: &str) -> Result<()> {
        if Swimlanes::new(&self.conn).rename(id, name)? == 0 {
            return Err(LanesError::not_found("swimlane", id).into());
        }
        Ok(())
    }

    pub fn rename_list(&mut self, id: Id, name: &str) -> Result<()> {
        if Lists::new(&self.conn).rename(id, name)? == 0 {
            return Err(LanesError::not_found("list", id).into());
        }
        Ok(())
    }

    pub fn update_card(&mut self, id: Id, title: &str, description: &str) -> Result<()> {
        if Cards::new(&self.conn).update(id, title, description)? == 0 {
            return Err(LanesError::not_found("card", id).into());
        }
        Ok(())
    }

    /// Replaces the card's attachment; `None` removes it.
    pub fn set_attachment(&mut self, id: Id, attachment: Option<&[u8]>) -> Result<()> {
        if Cards::new(&self.conn).set_attachment(id, attachment)? == 0 {
            return Err(LanesError::not_found("card", id).into());
        }
        Ok(())
    }

    /// Deletes the item with its descendants and closes the gap it leaves.
    pub fn delete(&mut self, item: Item) -> Result<()> {
        self.in_transaction(|conn| {
            let siblings = Siblings::new(conn, item.level());
            let Some((parent, _)) = siblings.parent_of(item.id())? else {
                return Err(LanesError::not_found(item.level().name(), item.id()).into());
            };
            siblings.delete(item.id())?;
            siblings.compact(parent)?;
            Ok(())
        })
    }

    // === READS ===

    pub fn swimlanes(&self, board_id: Id) -> Result<Vec<Swimlane>> {
        Swimlanes::new(&self.conn).by_board(board_id)
    }

    pub fn lists(&self, swimlane_id: Id) -> Result<Vec<List>> {
        Lists::new(&self.conn).by_swimlane(swimlane_id)
    }

    pub fn cards(&self, list_id: Id) -> Result<Vec<Card>> {
        Cards::new(&self.conn).by_list(list_id)
    }

    pub fn swimlane(&self, id: Id) -> Result<Option<Swimlane>> {
        Swimlanes::new(&self.conn).get(id)
    }

    pub fn list(&self, id: Id) -> Result<Option<List>> {
        Lists::new(&self.conn).get(id)
    }

    pub fn card(&self, id: Id) -> Result<Option<Card>> {
        Cards::new(&self.conn).get(id)
    }

    /// The board an item currently belongs to, for re-rendering after a change.
    pub fn board_of(&self, item: Item) -> Result<Option<Id>> {
        match item {
            Item::Swimlane(id) => Ok(self.swimlane(id)?.map(|s| s.board_id)),
            Item::List(id) => Lists::new(&self.conn).board_of(id),
            Item::Card(id) => Cards::new(&self.conn).board_of(id),
        }
    }

    // === ORDERING ===

    pub fn move_item(&mut self, item: Item, direction: Direction) -> Result<MoveOutcome> {
        self.in_transaction(|conn| moves::move_item(conn, item, direction))
    }

    /// Drops the item at the end of another parent of the matching kind.
    pub fn move_to_parent(&mut self, item: Item, parent: Id) -> Result<MoveOutcome> {
        self.in_transaction(|conn| moves::move_to_parent(conn, item, parent))
    }

    pub fn reorder_to(&mut self, item: Item, target_index: i64) -> Result<MoveOutcome> {
        self.in_transaction(|conn| reorder::reorder_to(conn, item, target_index))
    }

    // === CLONES ===

    pub fn clone_board(&mut self, id: Id) -> Result<Option<Id>> {
        self.in_transaction(|conn| clone::clone_board(conn, id))
    }

    pub fn clone_item(&mut self, item: Item) -> Result<Option<Id>> {
        self.in_transaction(|conn| match item {
            Item::Swimlane(id) => clone::clone_swimlane(conn, id),
            Item::List(id) => clone::clone_list(conn, id),
            Item::Card(id) => clone::clone_card(conn, id),
        })
    }
}

fn require(conn: &Connection, level: Level, id: Id) -> Result<()> {
    if !Siblings::new(conn, level).exists(id)? {
        return Err(LanesError::not_found(level.name(), id).into());
    }
    Ok(())
}
