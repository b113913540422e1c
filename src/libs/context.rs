//! Caller-scoped view state.
//!
//! The active board and the current multi-selection travel with each command
//! as an explicit value instead of living in process-wide globals.

use crate::libs::config::Config;
use crate::libs::entity::{Id, Item};
use crate::libs::error::LanesError;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewContext {
    board_id: Option<Id>,
    selection: BTreeSet<Item>,
}

impl ViewContext {
    pub fn new(board_id: Option<Id>) -> Self {
        Self {
            board_id,
            selection: BTreeSet::new(),
        }
    }

    /// An explicit board wins over the one remembered in the config.
    pub fn from_config(config: &Config, board_override: Option<Id>) -> Self {
        Self::new(board_override.or(config.active_board))
    }

    pub fn board_id(&self) -> Option<Id> {
        self.board_id
    }

    pub fn require_board(&self) -> Result<Id, LanesError> {
        self.board_id.ok_or(LanesError::NoActiveBoard)
    }

    pub fn set_board(&mut self, board_id: Id) {
        if self.board_id != Some(board_id) {
            self.clear_selection();
        }
        self.board_id = Some(board_id);
    }

    /// Adds to the selection; returns false if it was already selected.
    pub fn select(&mut self, item: Item) -> bool {
        self.selection.insert(item)
    }

    pub fn deselect(&mut self, item: Item) -> bool {
        self.selection.remove(&item)
    }

    pub fn is_selected(&self, item: Item) -> bool {
        self.selection.contains(&item)
    }

    pub fn selection(&self) -> impl Iterator<Item = Item> + '_ {
        self.selection.iter().copied()
    }

    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_beats_config() {
        let config = Config {
            active_board: Some(3),
            ..Config::default()
        };
        assert_eq!(ViewContext::from_config(&config, Some(9)).board_id(), Some(9));
        assert_eq!(ViewContext::from_config(&config, None).board_id(), Some(3));
    }

    #[test]
    fn missing_board_is_an_error() {
        assert!(matches!(ViewContext::default().require_board(), Err(LanesError::NoActiveBoard)));
    }

    #[test]
    fn switching_boards_clears_selection() {
        let mut ctx = ViewContext::new(Some(1));
        assert!(ctx.select(Item::Card(4)));
        assert!(!ctx.select(Item::Card(4)));
        ctx.set_board(1);
        assert_eq!(ctx.selection_len(), 1);
        ctx.set_board(2);
        assert_eq!(ctx.selection_len(), 0);
    }

    #[test]
    fn deselect_removes_only_that_item() {
        let mut ctx = ViewContext::new(Some(1));
        ctx.select(Item::List(2));
        ctx.select(Item::Card(4));

        assert!(ctx.deselect(Item::Card(4)));
        assert!(!ctx.deselect(Item::Card(4)));
        assert!(ctx.is_selected(Item::List(2)));
        assert_eq!(ctx.selection().collect::<Vec<_>>(), vec![Item::List(2)]);
    }
}
