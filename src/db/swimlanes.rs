use crate::libs::entity::{Id, Swimlane};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_SWIMLANE: &str = "INSERT INTO swimlanes (board_id, name, position) VALUES (?1, ?2, ?3)";
const RENAME_SWIMLANE: &str = "UPDATE swimlanes SET name = ?2 WHERE id = ?1";
const SELECT_SWIMLANES: &str = "SELECT id, board_id, name, position FROM swimlanes WHERE board_id = ?1 ORDER BY position, id";
const SELECT_SWIMLANE_BY_ID: &str = "SELECT id, board_id, name, position FROM swimlanes WHERE id = ?1";

pub struct Swimlanes<'a> {
    conn: &'a Connection,
}

impl<'a> Swimlanes<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Inserts a row at an explicit position; callers decide where it goes.
    pub fn insert(&self, board_id: Id, name: &str, position: i64) -> Result<Id> {
        self.conn.execute(INSERT_SWIMLANE, params![board_id, name, position])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn rename(&self, id: Id, name: &str) -> Result<usize> {
        Ok(self.conn.execute(RENAME_SWIMLANE, params![id, name])?)
    }

    pub fn by_board(&self, board_id: Id) -> Result<Vec<Swimlane>> {
        let mut stmt = self.conn.prepare(SELECT_SWIMLANES)?;
        let swimlanes = stmt.query_map(params![board_id], map_swimlane)?.collect::<Result<Vec<_>, _>>()?;

        Ok(swimlanes)
    }

    pub fn get(&self, id: Id) -> Result<Option<Swimlane>> {
        self.conn.query_row(SELECT_SWIMLANE_BY_ID, params![id], map_swimlane).optional().map_err(Into::into)
    }
}

fn map_swimlane(row: &Row) -> rusqlite::Result<Swimlane> {
    Ok(Swimlane {
        id: row.get(0)?,
        board_id: row.get(1)?,
        name: row.get(2)?,
        position: row.get(3)?,
    })
}
