//! Display implementation for lanes application messages.
//!
//! All user-facing text is defined here, in one match over [`Message`], so
//! wording stays consistent between commands and new variants cannot be
//! added without deciding their text.
//!
//! ```rust
//! use lanes::libs::messages::Message;
//!
//! assert_eq!(Message::BoardDeleted("Roadmap".into()).to_string(), "Board 'Roadmap' deleted");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === BOARD MESSAGES ===
            Message::BoardCreated(id, name) => format!("Board '{}' created with ID {}", name, id),
            Message::BoardUpdated(name) => format!("Board '{}' updated", name),
            Message::BoardDeleted(name) => format!("Board '{}' deleted", name),
            Message::BoardCloned(from, to) => format!("Board #{} cloned as board #{}", from, to),
            Message::BoardNotFound(id) => format!("Board with ID {} not found.", id),
            Message::BoardListHeader => "Boards:".to_string(),
            Message::NoBoardsFound => "No boards found. Create one with `lanes board create <name>`.".to_string(),
            Message::EmptyBoard(name) => format!("Board '{}' has no swimlanes yet.", name),
            Message::ActiveBoardSet(name) => format!("Active board is now '{}'", name),
            Message::ConfirmDeleteBoard(name) => format!("Delete board '{}' with all its swimlanes, lists and cards?", name),

            // === ITEM MESSAGES ===
            Message::ItemCreated(item, name) => format!("Created {} '{}'", item, name),
            Message::ItemRenamed(item, name) => format!("Renamed {} to '{}'", item, name),
            Message::ItemDeleted(item) => format!("Deleted {}", item),
            Message::ItemCloned(item, new_id) => format!("Cloned {} as #{}", item, new_id),
            Message::ItemNotFound(item) => format!("{} not found", item),
            Message::ConfirmDeleteItems(count) => format!("Delete {} item(s) together with everything they contain?", count),
            Message::AttachmentSet(id, size) => format!("Attached {} bytes to card #{}", size, id),
            Message::AttachmentCleared(id) => format!("Removed attachment from card #{}", id),

            // === MOVE MESSAGES ===
            Message::MoveNoOp(item) => format!("{} stays where it is", item),
            Message::Swapped(item, other) => format!("{} swapped places with #{}", item, other),
            Message::Reparented(item, from, to) => format!("{} moved from #{} to the end of #{}", item, from, to),
            Message::Reordered(item, position) => format!("{} moved to position {}", item, position),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigHeader => "Lanes configuration".to_string(),
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::PromptDbFile => "Database file name".to_string(),
            Message::PromptShowAfterChange => "Show the board after every change?".to_string(),
            Message::PromptName => "Name".to_string(),
            Message::PromptTitle => "Title".to_string(),
            Message::PromptDescription => "Description".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportSuccess(path) => format!("Board exported to {}", path),
            Message::ExportAttachmentSkipped(id, reason) => format!("Attachment of card #{} not embedded: {}", id, reason),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::StoreFailure(error) => format!("Database operation failed and was rolled back: {}", error),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::NothingToRollback => "Nothing to rollback".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rollback to v{} completed", version),
            Message::DatabaseVersion(current, latest) => format!("Database schema is at v{} of v{}", current, latest),
            Message::MigrationPending(version, name) => format!("  pending v{}: {}", version, name),
            Message::DatabaseNeedsUpdate => "Pending migrations will run on the next command".to_string(),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::MigrationHistory => "Applied migrations:".to_string(),
            Message::NoMigrationsApplied => "No migrations applied yet".to_string(),
        };

        write!(f, "{}", text)
    }
}
