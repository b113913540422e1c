//! Database layer for the lanes application.
//!
//! SQLite persistence for the board hierarchy. Each table gets a small
//! repository with row-level CRUD, and [`siblings`] provides the
//! table-agnostic sibling-set access used by the position engine.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lanes::db::{db::Db, boards::Boards, swimlanes::Swimlanes};
//!
//! let db = Db::open_in_memory()?;
//! let board_id = Boards::new(&db.conn).insert("Roadmap", "")?;
//! Swimlanes::new(&db.conn).insert(board_id, "Backend", 0)?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Repositories borrow a `Connection` and never open transactions of their
//! own; compound commands in `libs::kanban` wrap them in one.

/// Connection opening, pragmas and automatic migrations.
pub mod db;

/// Versioned schema changes and migration history.
pub mod migrations;

/// Board rows. Boards are the unpositioned roots of the hierarchy.
pub mod boards;

/// Swimlane rows, ordered within a board.
pub mod swimlanes;

/// List rows, ordered within a swimlane.
pub mod lists;

/// Card rows, ordered within a list, with optional binary attachment.
pub mod cards;

/// Position and parent access shared by every positioned table.
pub mod siblings;
