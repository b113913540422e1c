use crate::libs::entity::{Board, Id};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_BOARD: &str = "INSERT INTO boards (name, description) VALUES (?1, ?2)";
const UPDATE_BOARD: &str = "UPDATE boards SET name = ?2, description = ?3 WHERE id = ?1";
const DELETE_BOARD: &str = "DELETE FROM boards WHERE id = ?1";
const SELECT_ALL_BOARDS: &str = "SELECT id, name, description FROM boards ORDER BY name, id";
const SELECT_BOARD_BY_ID: &str = "SELECT id, name, description FROM boards WHERE id = ?1";

pub struct Boards<'a> {
    conn: &'a Connection,
}

impl<'a> Boards<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn insert(&self, name: &str, description: &str) -> Result<Id> {
        self.conn.execute(INSERT_BOARD, params![name, description])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Returns the number of rows touched; 0 means the board does not exist.
    pub fn update(&self, id: Id, name: &str, description: &str) -> Result<usize> {
        Ok(self.conn.execute(UPDATE_BOARD, params![id, name, description])?)
    }

    pub fn delete(&self, id: Id) -> Result<usize> {
        Ok(self.conn.execute(DELETE_BOARD, params![id])?)
    }

    /// All boards ordered by name. Boards are not positioned.
    pub fn list(&self) -> Result<Vec<Board>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_BOARDS)?;
        let boards = stmt.query_map([], map_board)?.collect::<Result<Vec<_>, _>>()?;

        Ok(boards)
    }

    pub fn get(&self, id: Id) -> Result<Option<Board>> {
        self.conn.query_row(SELECT_BOARD_BY_ID, params![id], map_board).optional().map_err(Into::into)
    }
}

fn map_board(row: &Row) -> rusqlite::Result<Board> {
    Ok(Board {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
    })
}
