//! Typed failures surfaced by the board commands.
//!
//! Moves, reorders and clones treat missing rows as no-ops; these errors are
//! reserved for direct edits where the caller names an entity that must exist.

use crate::libs::entity::Id;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LanesError {
    /// A board, swimlane, list or card id with no matching row
    #[error("{kind} #{id} not found")]
    NotFound { kind: &'static str, id: Id },

    /// A command needed a board but none was given or configured
    #[error("no active board: pass --board or run `lanes board use <id>`")]
    NoActiveBoard,

    /// Attachment file could not be read
    #[error("cannot read attachment {path}: {source}")]
    Attachment {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LanesError {
    pub fn not_found(kind: &'static str, id: Id) -> Self {
        LanesError::NotFound { kind, id }
    }
}
