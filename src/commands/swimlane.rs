use super::{apply_clone, apply_move, delete_selection, show_after_change};
use crate::{
    libs::{
        config::Config,
        context::ViewContext,
        entity::{Id, Item},
        kanban::Kanban,
        messages::Message,
        moves::Direction,
    },
    msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct SwimlaneArgs {
    #[command(subcommand)]
    command: SwimlaneCommand,
}

#[derive(Debug, Subcommand)]
enum SwimlaneCommand {
    /// Append a swimlane to a board
    Create {
        /// Swimlane name
        name: String,
        /// Board ID; defaults to the active board
        #[arg(short, long)]
        board: Option<Id>,
    },
    /// Rename a swimlane
    Rename { id: Id, name: String },
    /// Delete swimlanes with their lists and cards
    Delete {
        #[arg(required = true)]
        ids: Vec<Id>,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Swap with the swimlane above
    Up { id: Id },
    /// Swap with the swimlane below
    Down { id: Id },
    /// Move to a zero-based index within the board
    MoveTo {
        id: Id,
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// Deep-copy a swimlane right below the original
    Clone { id: Id },
}

pub fn cmd(args: SwimlaneArgs) -> Result<()> {
    match args.command {
        SwimlaneCommand::Create { name, board } => handle_create(name, board),
        SwimlaneCommand::Rename { id, name } => handle_rename(id, name),
        SwimlaneCommand::Delete { ids, yes } => delete_selection(ids.into_iter().map(Item::Swimlane), yes),
        SwimlaneCommand::Up { id } => {
            apply_move(Item::Swimlane(id), |k| k.move_item(Item::Swimlane(id), Direction::Up))
        }
        SwimlaneCommand::Down { id } => {
            apply_move(Item::Swimlane(id), |k| k.move_item(Item::Swimlane(id), Direction::Down))
        }
        SwimlaneCommand::MoveTo { id, index } => {
            apply_move(Item::Swimlane(id), |k| k.reorder_to(Item::Swimlane(id), index))
        }
        SwimlaneCommand::Clone { id } => apply_clone(Item::Swimlane(id)),
    }
}

fn handle_create(name: String, board: Option<Id>) -> Result<()> {
    let config = Config::read()?;
    let board_id = ViewContext::from_config(&config, board).require_board()?;

    let mut kanban = Kanban::new()?;
    let id = kanban.create_swimlane(board_id, &name)?;
    msg_success!(Message::ItemCreated(Item::Swimlane(id), name));

    show_after_change(&kanban, &config, Item::Swimlane(id))
}

fn handle_rename(id: Id, name: String) -> Result<()> {
    let mut kanban = Kanban::new()?;
    kanban.rename_swimlane(id, &name)?;
    msg_success!(Message::ItemRenamed(Item::Swimlane(id), name));

    show_after_change(&kanban, &Config::read()?, Item::Swimlane(id))
}
