use super::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "lanes.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the configured database file in the data directory and applies
    /// pending migrations.
    pub fn new() -> Result<Db> {
        let config = Config::read()?;
        let db_file_path = DataStorage::new().get_path(config.db_file())?;
        Self::open(db_file_path)
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        configure(&conn)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    pub fn open_in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        configure(&conn)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Connection to the configured file without running migrations.
    pub fn new_without_migrations() -> Result<Connection> {
        let config = Config::read()?;
        let db_file_path = DataStorage::new().get_path(config.db_file())?;
        let conn = Connection::open(db_file_path)?;
        configure(&conn)?;

        Ok(conn)
    }
}

// Cascade deletes depend on SQLite enforcing foreign keys, which is off by default.
fn configure(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", "ON")?;
    Ok(())
}
