//! Core library modules for lanes.
//!
//! - **Ordering engine**: `position`, `moves`, `reorder`, `clone`
//! - **Command façade**: `kanban` (one transaction per command)
//! - **Model and state**: `entity`, `context`, `config`, `data_storage`
//! - **Output**: `view`, `export`, `messages`, `error`
//!
//! ## Usage
//!
//! ```rust
//! use lanes::libs::entity::Item;
//! use lanes::libs::kanban::Kanban;
//!
//! let mut kanban = Kanban::open_in_memory()?;
//! let board = kanban.create_board("Roadmap", "")?;
//! let lane = kanban.create_swimlane(board, "Backend")?;
//! let list = kanban.create_list(lane, "Todo")?;
//! let card = kanban.create_card(list, "Write docs", "")?;
//! kanban.reorder_to(Item::Card(card), 0)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod clone;
pub mod config;
pub mod context;
pub mod data_storage;
pub mod entity;
pub mod error;
pub mod export;
pub mod kanban;
pub mod messages;
pub mod moves;
pub mod position;
pub mod reorder;
pub mod view;
