//! # Lanes - ordered kanban boards in the terminal
//!
//! Boards hold swimlanes, swimlanes hold lists and lists hold cards. Every
//! level below the board keeps a dense zero-based `position` among its
//! siblings, and every command that touches positions keeps it that way.
//!
//! ## Features
//!
//! - **Directional moves**: swap with a neighbour or hop to the adjacent parent
//! - **Reorder**: drop an item at any index within its parent
//! - **Clone**: deep copies of boards, swimlanes, lists and cards
//! - **Export**: CSV, JSON and Excel with embedded card images
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lanes::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
