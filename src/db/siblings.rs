//! Level-generic access to sibling sets.
//!
//! Swimlanes, lists and cards share the same shape: an id, a parent foreign
//! key and a `position`. [`Siblings`] exposes the handful of store capabilities
//! the position engine needs over any of the three tables, so the move, reorder
//! and clone code never has to be written once per table.
//!
//! The struct borrows a `Connection`; passing a `Transaction` works as well
//! since it dereferences to one, which is how compound commands keep all of
//! their statements in a single unit of work.

use crate::libs::entity::{Id, Level};
use crate::libs::position::{self, Slot};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

pub struct Siblings<'a> {
    conn: &'a Connection,
    level: Level,
}

impl<'a> Siblings<'a> {
    pub fn new(conn: &'a Connection, level: Level) -> Self {
        Self { conn, level }
    }

    /// Children of `parent` sorted ascending by position (id breaks ties).
    pub fn children(&self, parent: Id) -> Result<Vec<Slot>> {
        let sql = format!(
            "SELECT id, position FROM {} WHERE {} = ?1 ORDER BY position, id",
            self.level.table(),
            self.level.parent_column()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let slots = stmt
            .query_map(params![parent], |row| Ok(Slot::new(row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(slots)
    }

    /// Parent id and position of `id`, or `None` when the row does not exist.
    pub fn parent_of(&self, id: Id) -> Result<Option<(Id, i64)>> {
        let sql = format!("SELECT {}, position FROM {} WHERE id = ?1", self.level.parent_column(), self.level.table());
        let row = self.conn.query_row(&sql, params![id], |row| Ok((row.get(0)?, row.get(1)?))).optional()?;

        Ok(row)
    }

    /// The sibling currently occupying `position` under `parent`.
    pub fn id_at(&self, parent: Id, position: i64) -> Result<Option<Id>> {
        let sql = format!(
            "SELECT id FROM {} WHERE {} = ?1 AND position = ?2 ORDER BY id LIMIT 1",
            self.level.table(),
            self.level.parent_column()
        );
        let id = self.conn.query_row(&sql, params![parent, position], |row| row.get(0)).optional()?;

        Ok(id)
    }

    pub fn exists(&self, id: Id) -> Result<bool> {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE id = ?1", self.level.table());
        let count: i64 = self.conn.query_row(&sql, params![id], |row| row.get(0))?;

        Ok(count > 0)
    }

    pub fn max_position(&self, parent: Id) -> Result<Option<i64>> {
        let sql = format!("SELECT MAX(position) FROM {} WHERE {} = ?1", self.level.table(), self.level.parent_column());
        let max: Option<i64> = self.conn.query_row(&sql, params![parent], |row| row.get(0))?;

        Ok(max)
    }

    pub fn set_position(&self, id: Id, position: i64) -> Result<()> {
        let sql = format!("UPDATE {} SET position = ?1 WHERE id = ?2", self.level.table());
        self.conn.execute(&sql, params![position, id])?;

        Ok(())
    }

    pub fn set_parent(&self, id: Id, parent: Id) -> Result<()> {
        let sql = format!("UPDATE {} SET {} = ?1 WHERE id = ?2", self.level.table(), self.level.parent_column());
        self.conn.execute(&sql, params![parent, id])?;

        Ok(())
    }

    /// Adds `delta` to every sibling whose position is greater than `after`.
    pub fn shift_after(&self, parent: Id, after: i64, delta: i64) -> Result<usize> {
        let sql = format!(
            "UPDATE {} SET position = position + ?1 WHERE {} = ?2 AND position > ?3",
            self.level.table(),
            self.level.parent_column()
        );
        let affected = self.conn.execute(&sql, params![delta, parent, after])?;

        Ok(affected)
    }

    /// Writes every slot's position back to the store.
    pub fn write(&self, slots: &[Slot]) -> Result<()> {
        for slot in slots {
            self.set_position(slot.id, slot.position)?;
        }

        Ok(())
    }

    /// Renumbers the children of `parent` to `0..n`, writing only the rows
    /// whose position changes. Returns the number of rows written.
    pub fn compact(&self, parent: Id) -> Result<usize> {
        let current = self.children(parent)?;
        let ids: Vec<Id> = current.iter().map(|s| s.id).collect();
        let changes = position::diff(&current, &position::compact(&ids));
        self.write(&changes)?;

        Ok(changes.len())
    }

    /// Deletes the row; descendants go with it through the cascade.
    pub fn delete(&self, id: Id) -> Result<usize> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", self.level.table());
        let affected = self.conn.execute(&sql, params![id])?;

        Ok(affected)
    }
}
