//! Read-only view of the schema version.
//!
//! The store applies pending migrations whenever a command opens it, so this
//! command opens the file without doing so and reports what it finds.

use crate::{
    db::{
        db::Db,
        migrations::{get_db_version, MigrationManager},
    },
    libs::{messages::Message, view::View},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Compare the database schema with the newest migration
    Status,
    /// Table of applied migrations
    History,
}

pub fn cmd(args: MigrationsArgs) -> Result<()> {
    let conn = Db::new_without_migrations()?;
    let manager = MigrationManager::new();

    match args.command {
        MigrationsCommand::Status => {
            let pending = manager.pending(&conn)?;
            msg_print!(Message::DatabaseVersion(get_db_version(&conn)?, manager.latest_version()));

            if pending.is_empty() {
                msg_success!(Message::DatabaseUpToDate);
                return Ok(());
            }
            msg_info!(Message::DatabaseNeedsUpdate);
            for (version, name) in pending {
                msg_print!(Message::MigrationPending(version, name.to_string()));
            }
        }
        MigrationsCommand::History => {
            let history = manager.get_migration_history(&conn)?;
            if history.is_empty() {
                msg_info!(Message::NoMigrationsApplied);
                return Ok(());
            }
            msg_print!(Message::MigrationHistory, true);
            View::migrations(&history);
        }
    }

    Ok(())
}
