//! Board hierarchy types.
//!
//! Boards own swimlanes, swimlanes own lists and lists own cards. Every level
//! below the board carries an integer `position` that is only meaningful among
//! siblings sharing the same parent.
//!
//! ## Levels and items
//!
//! [`Level`] names one of the three ordered tables and knows its parent column,
//! which lets the sibling store and the move engine stay table-agnostic.
//! [`Item`] is the tagged variant the presentation layer hands to the engine:
//! one value per drag-capable entity kind, dispatched through a single
//! move/reorder interface.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned row identifier.
pub type Id = i64;

/// Suffix appended to the name or title of a cloned root.
pub const COPY_SUFFIX: &str = " (Copy)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: Id,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swimlane {
    pub id: Id,
    pub board_id: Id,
    pub name: String,
    pub position: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: Id,
    pub swimlane_id: Id,
    pub name: String,
    pub position: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: Id,
    pub list_id: Id,
    pub title: String,
    pub description: String,
    pub position: i64,
    pub created_at: Option<String>,
    #[serde(skip)]
    pub attachment: Option<Vec<u8>>,
}

impl Card {
    pub fn has_attachment(&self) -> bool {
        self.attachment.as_ref().is_some_and(|bytes| !bytes.is_empty())
    }
}

/// One of the three positioned tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Level {
    Swimlane,
    List,
    Card,
}

impl Level {
    pub fn table(self) -> &'static str {
        match self {
            Level::Swimlane => "swimlanes",
            Level::List => "lists",
            Level::Card => "cards",
        }
    }

    pub fn parent_column(self) -> &'static str {
        match self {
            Level::Swimlane => "board_id",
            Level::List => "swimlane_id",
            Level::Card => "list_id",
        }
    }

    /// The positioned level one step up, if the parent is itself ordered.
    /// Boards are not positioned, so swimlanes have none.
    pub fn parent_level(self) -> Option<Level> {
        match self {
            Level::Swimlane => None,
            Level::List => Some(Level::Swimlane),
            Level::Card => Some(Level::List),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Level::Swimlane => "swimlane",
            Level::List => "list",
            Level::Card => "card",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A positioned entity addressed by kind and id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Item {
    Swimlane(Id),
    List(Id),
    Card(Id),
}

impl Item {
    pub fn level(self) -> Level {
        match self {
            Item::Swimlane(_) => Level::Swimlane,
            Item::List(_) => Level::List,
            Item::Card(_) => Level::Card,
        }
    }

    pub fn id(self) -> Id {
        match self {
            Item::Swimlane(id) | Item::List(id) | Item::Card(id) => id,
        }
    }

    pub fn new(level: Level, id: Id) -> Self {
        match level {
            Level::Swimlane => Item::Swimlane(id),
            Level::List => Item::List(id),
            Level::Card => Item::Card(id),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.level(), self.id())
    }
}

/// A board with its full subtree, each level sorted by position.
#[derive(Debug, Clone, Serialize)]
pub struct BoardTree {
    pub board: Board,
    pub swimlanes: Vec<SwimlaneTree>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SwimlaneTree {
    pub swimlane: Swimlane,
    pub lists: Vec<ListTree>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListTree {
    pub list: List,
    pub cards: Vec<Card>,
}

impl BoardTree {
    pub fn card_count(&self) -> usize {
        self.swimlanes.iter().flat_map(|s| &s.lists).map(|l| l.cards.len()).sum()
    }
}
