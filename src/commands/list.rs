use super::{apply_clone, apply_move, delete_selection, show_after_change};
use crate::{
    libs::{
        config::Config,
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
pub struct ListArgs {
    #[command(subcommand)]
    command: ListCommand,
}

#[derive(Debug, Subcommand)]
enum ListCommand {
    /// Append a list to a swimlane
    Create {
        /// Swimlane ID
        swimlane: Id,
        /// List name
        name: String,
    },
    /// Rename a list
    Rename { id: Id, name: String },
    /// Delete lists with their cards
    Delete {
        #[arg(required = true)]
        ids: Vec<Id>,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Swap with the list on the left
    Left { id: Id },
    /// Swap with the list on the right
    Right { id: Id },
    /// Move to the end of the swimlane above
    Up { id: Id },
    /// Move to the end of the swimlane below
    Down { id: Id },
    /// Move to the end of another swimlane
    Drop {
        id: Id,
        /// Target swimlane ID
        swimlane: Id,
    },
    /// Move to a zero-based index within the swimlane
    MoveTo {
        id: Id,
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// Deep-copy a list to the end of its swimlane
    Clone { id: Id },
}

pub fn cmd(args: ListArgs) -> Result<()> {
    match args.command {
        ListCommand::Create { swimlane, name } => handle_create(swimlane, name),
        ListCommand::Rename { id, name } => handle_rename(id, name),
        ListCommand::Delete { ids, yes } => delete_selection(ids.into_iter().map(Item::List), yes),
        ListCommand::Left { id } => handle_direction(id, Direction::Left),
        ListCommand::Right { id } => handle_direction(id, Direction::Right),
        ListCommand::Up { id } => handle_direction(id, Direction::Up),
        ListCommand::Down { id } => handle_direction(id, Direction::Down),
        ListCommand::Drop { id, swimlane } => apply_move(Item::List(id), |k| k.move_to_parent(Item::List(id), swimlane)),
        ListCommand::MoveTo { id, index } => apply_move(Item::List(id), |k| k.reorder_to(Item::List(id), index)),
        ListCommand::Clone { id } => apply_clone(Item::List(id)),
    }
}

fn handle_create(swimlane: Id, name: String) -> Result<()> {
    let mut kanban = Kanban::new()?;
    let id = kanban.create_list(swimlane, &name)?;
    msg_success!(Message::ItemCreated(Item::List(id), name));

    show_after_change(&kanban, &Config::read()?, Item::List(id))
}

fn handle_rename(id: Id, name: String) -> Result<()> {
    let mut kanban = Kanban::new()?;
    kanban.rename_list(id, &name)?;
    msg_success!(Message::ItemRenamed(Item::List(id), name));

    show_after_change(&kanban, &Config::read()?, Item::List(id))
}

fn handle_direction(id: Id, direction: Direction) -> Result<()> {
    apply_move(Item::List(id), |k| k.move_item(Item::List(id), direction))
}
