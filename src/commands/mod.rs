//! Command-line interface.
//!
//! One subcommand group per hierarchy level plus `init` and `export`. Every
//! handler opens the store through [`Kanban`], runs one command and, when
//! `show_after_change` is on, prints the board the change landed in.

pub mod board;
pub mod card;
pub mod export;
pub mod init;
pub mod list;
pub mod migrations;
pub mod swimlane;

use crate::{
    libs::{
        config::Config,
        context::ViewContext,
        entity::{Id, Item},
        kanban::Kanban,
        messages::Message,
        moves::MoveOutcome,
        view::View,
    },
    msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage boards")]
    Board(board::BoardArgs),
    #[command(about = "Manage swimlanes of a board")]
    Swimlane(swimlane::SwimlaneArgs),
    #[command(about = "Manage lists inside swimlanes")]
    List(list::ListArgs),
    #[command(about = "Manage cards inside lists")]
    Card(card::CardArgs),
    #[command(about = "Export a board to CSV, JSON or Excel")]
    Export(export::ExportArgs),
    #[command(about = "Inspect the database schema version")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Board(args) => board::cmd(args),
            Commands::Swimlane(args) => swimlane::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Card(args) => card::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}

/// Prints the outcome of a move, reorder or drop.
pub(crate) fn report_move(outcome: MoveOutcome, item: Item) {
    match outcome {
        MoveOutcome::NoOp => msg_info!(Message::MoveNoOp(item)),
        MoveOutcome::Swapped { item, with } => msg_success!(Message::Swapped(item, with)),
        MoveOutcome::Reparented { item, from, to, .. } => msg_success!(Message::Reparented(item, from, to)),
        MoveOutcome::Reordered { item, position } => msg_success!(Message::Reordered(item, position)),
    }
}

/// Runs a move, reorder or drop on `item` and shows the boards it touched.
///
/// A drop can carry an item onto another board, so the owning board is read
/// before and after the change.
pub(crate) fn apply_move(item: Item, op: impl FnOnce(&mut Kanban) -> Result<MoveOutcome>) -> Result<()> {
    let mut kanban = Kanban::new()?;
    let source_board = kanban.board_of(item)?;
    let outcome = op(&mut kanban)?;
    report_move(outcome, item);

    let config = Config::read()?;
    if !outcome.changed() || !config.show_after_change {
        return Ok(());
    }
    for board_id in boards_to_render(source_board, kanban.board_of(item)?) {
        show_board(&kanban, &config, board_id)?;
    }
    Ok(())
}

/// Boards to redraw after a change, source first, without duplicates.
pub fn boards_to_render(source: Option<Id>, target: Option<Id>) -> Vec<Id> {
    let mut boards: Vec<Id> = source.into_iter().collect();
    if let Some(target) = target.filter(|t| source != Some(*t)) {
        boards.push(target);
    }
    boards
}

/// Clones `item` and shows the board with the copy in it.
pub(crate) fn apply_clone(item: Item) -> Result<()> {
    let mut kanban = Kanban::new()?;
    let Some(new_id) = kanban.clone_item(item)? else {
        return Err(msg_error_anyhow!(Message::ItemNotFound(item)));
    };
    msg_success!(Message::ItemCloned(item, new_id));

    show_after_change(&kanban, &Config::read()?, Item::new(item.level(), new_id))
}

/// Re-renders the board that owns `item`, if the config asks for it.
pub(crate) fn show_after_change(kanban: &Kanban, config: &Config, item: Item) -> Result<()> {
    if !config.show_after_change {
        return Ok(());
    }
    match kanban.board_of(item)? {
        Some(board_id) => show_board(kanban, config, board_id),
        None => Ok(()),
    }
}

pub(crate) fn show_board(kanban: &Kanban, config: &Config, board_id: Id) -> Result<()> {
    let Some(tree) = kanban.load_board(board_id)? else {
        return Ok(());
    };

    let mut context = ViewContext::from_config(config, None);
    context.set_board(board_id);

    if tree.swimlanes.is_empty() {
        msg_info!(Message::EmptyBoard(tree.board.name.clone()));
    }
    View::board(&tree, &context);
    Ok(())
}

/// Asks before deleting unless `--yes` was given.
pub(crate) fn confirm(prompt: Message, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(false)
        .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
    }
    Ok(confirmed)
}

/// Deletes every item in the selection after one confirmation, then shows
/// the boards they belonged to.
pub(crate) fn delete_selection(items: impl IntoIterator<Item = Item>, yes: bool) -> Result<()> {
    let config = Config::read()?;
    let mut kanban = Kanban::new()?;

    let mut context = ViewContext::from_config(&config, None);
    for item in items {
        if kanban.board_of(item)?.is_some() {
            context.select(item);
        } else {
            msg_info!(Message::ItemNotFound(item));
        }
    }

    if context.selection_len() == 0 || !confirm(Message::ConfirmDeleteItems(context.selection_len()), yes)? {
        return Ok(());
    }

    let mut boards = Vec::new();
    // Parents sort before their children, so a child may already be gone.
    let selected: Vec<Item> = context.selection().collect();
    for item in selected {
        context.deselect(item);
        let Some(board_id) = kanban.board_of(item)? else {
            continue;
        };
        if !boards.contains(&board_id) {
            boards.push(board_id);
        }
        kanban.delete(item)?;
        msg_success!(Message::ItemDeleted(item));
    }

    if config.show_after_change {
        for board_id in boards {
            show_board(&kanban, &config, board_id)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_board_is_rendered_once() {
        assert_eq!(boards_to_render(Some(1), Some(1)), vec![1]);
    }

    #[test]
    fn cross_board_drop_renders_both() {
        assert_eq!(boards_to_render(Some(1), Some(2)), vec![1, 2]);
        assert_eq!(boards_to_render(None, Some(2)), vec![2]);
        assert!(boards_to_render(None, None).is_empty());
    }
}
