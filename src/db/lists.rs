use crate::libs::entity::{Id, List};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_LIST: &str = "INSERT INTO lists (swimlane_id, name, position) VALUES (?1, ?2, ?3)";
const RENAME_LIST: &str = "UPDATE lists SET name = ?2 WHERE id = ?1";
const SELECT_LISTS: &str = "SELECT id, swimlane_id, name, position FROM lists WHERE swimlane_id = ?1 ORDER BY position, id";
const SELECT_LIST_BY_ID: &str = "SELECT id, swimlane_id, name, position FROM lists WHERE id = ?1";
const SELECT_BOARD_OF_LIST: &str = "
    SELECT s.board_id FROM lists l
    JOIN swimlanes s ON s.id = l.swimlane_id
    WHERE l.id = ?1
";

pub struct Lists<'a> {
    conn: &'a Connection,
}

impl<'a> Lists<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn insert(&self, swimlane_id: Id, name: &str, position: i64) -> Result<Id> {
        self.conn.execute(INSERT_LIST, params![swimlane_id, name, position])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn rename(&self, id: Id, name: &str) -> Result<usize> {
        Ok(self.conn.execute(RENAME_LIST, params![id, name])?)
    }

    pub fn by_swimlane(&self, swimlane_id: Id) -> Result<Vec<List>> {
        let mut stmt = self.conn.prepare(SELECT_LISTS)?;
        let lists = stmt.query_map(params![swimlane_id], map_list)?.collect::<Result<Vec<_>, _>>()?;

        Ok(lists)
    }

    pub fn get(&self, id: Id) -> Result<Option<List>> {
        self.conn.query_row(SELECT_LIST_BY_ID, params![id], map_list).optional().map_err(Into::into)
    }

    pub fn board_of(&self, id: Id) -> Result<Option<Id>> {
        self.conn.query_row(SELECT_BOARD_OF_LIST, params![id], |row| row.get(0)).optional().map_err(Into::into)
    }
}

fn map_list(row: &Row) -> rusqlite::Result<List> {
    Ok(List {
        id: row.get(0)?,
        swimlane_id: row.get(1)?,
        name: row.get(2)?,
        position: row.get(3)?,
    })
}
