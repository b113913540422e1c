use super::{confirm, show_board};
use crate::{
    libs::{config::Config, context::ViewContext, entity::Id, kanban::Kanban, messages::Message, view::View},
    msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct BoardArgs {
    #[command(subcommand)]
    command: BoardCommand,
}

#[derive(Debug, Subcommand)]
enum BoardCommand {
    /// Create a new board
    Create {
        /// Board name
        name: String,
        /// Board description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Make the new board the active one
        #[arg(long)]
        activate: bool,
    },
    /// List all boards
    List,
    /// Show a board with its swimlanes, lists and cards
    Show {
        /// Board ID; defaults to the active board
        id: Option<Id>,
    },
    /// Edit name and description of a board
    Edit {
        /// Board ID
        id: Id,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a board with everything on it
    Delete {
        /// Board ID
        id: Id,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Deep-copy a board
    Clone {
        /// Board ID
        id: Id,
    },
    /// Set the active board
    Use {
        /// Board ID
        id: Id,
    },
}

pub fn cmd(args: BoardArgs) -> Result<()> {
    match args.command {
        BoardCommand::Create {
            name,
            description,
            activate,
        } => handle_create(name, description, activate),
        BoardCommand::List => handle_list(),
        BoardCommand::Show { id } => handle_show(id),
        BoardCommand::Edit { id, name, description } => handle_edit(id, name, description),
        BoardCommand::Delete { id, yes } => handle_delete(id, yes),
        BoardCommand::Clone { id } => handle_clone(id),
        BoardCommand::Use { id } => handle_use(id),
    }
}

fn handle_create(name: String, description: String, activate: bool) -> Result<()> {
    let mut kanban = Kanban::new()?;
    let id = kanban.create_board(&name, &description)?;
    msg_success!(Message::BoardCreated(id, name.clone()));

    // The first board becomes active on its own.
    let mut config = Config::read()?;
    if activate || config.active_board.is_none() {
        config.active_board = Some(id);
        config.save()?;
        msg_info!(Message::ActiveBoardSet(name));
    }
    Ok(())
}

fn handle_list() -> Result<()> {
    let boards = Kanban::new()?.boards()?;

    if boards.is_empty() {
        msg_info!(Message::NoBoardsFound);
        return Ok(());
    }

    msg_print!(Message::BoardListHeader, true);
    View::boards(&boards);
    Ok(())
}

fn handle_show(id: Option<Id>) -> Result<()> {
    let config = Config::read()?;
    let board_id = ViewContext::from_config(&config, id).require_board()?;
    let kanban = Kanban::new()?;

    if kanban.board(board_id)?.is_none() {
        return Err(msg_error_anyhow!(Message::BoardNotFound(board_id)));
    }
    show_board(&kanban, &config, board_id)
}

fn handle_edit(id: Id, name: Option<String>, description: Option<String>) -> Result<()> {
    let mut kanban = Kanban::new()?;
    let Some(board) = kanban.board(id)? else {
        return Err(msg_error_anyhow!(Message::BoardNotFound(id)));
    };

    // Without flags, prompt for both fields starting from the current values.
    let (name, description) = if name.is_none() && description.is_none() {
        let name: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptName.to_string())
            .default(board.name.clone())
            .interact_text()?;
        let description: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDescription.to_string())
            .default(board.description.clone())
            .allow_empty(true)
            .interact_text()?;
        (name, description)
    } else {
        (name.unwrap_or(board.name), description.unwrap_or(board.description))
    };

    kanban.update_board(id, &name, &description)?;
    msg_success!(Message::BoardUpdated(name));
    Ok(())
}

fn handle_delete(id: Id, yes: bool) -> Result<()> {
    let mut kanban = Kanban::new()?;
    let Some(board) = kanban.board(id)? else {
        return Err(msg_error_anyhow!(Message::BoardNotFound(id)));
    };

    if !confirm(Message::ConfirmDeleteBoard(board.name.clone()), yes)? {
        return Ok(());
    }

    kanban.delete_board(id)?;
    msg_success!(Message::BoardDeleted(board.name));

    let mut config = Config::read()?;
    if config.active_board == Some(id) {
        config.active_board = None;
        config.save()?;
    }
    Ok(())
}

fn handle_clone(id: Id) -> Result<()> {
    let mut kanban = Kanban::new()?;
    match kanban.clone_board(id)? {
        Some(new_id) => {
            msg_success!(Message::BoardCloned(id, new_id));
            let config = Config::read()?;
            if config.show_after_change {
                show_board(&kanban, &config, new_id)?;
            }
            Ok(())
        }
        None => Err(msg_error_anyhow!(Message::BoardNotFound(id))),
    }
}

fn handle_use(id: Id) -> Result<()> {
    let Some(board) = Kanban::new()?.board(id)? else {
        return Err(msg_error_anyhow!(Message::BoardNotFound(id)));
    };

    let mut config = Config::read()?;
    let mut context = ViewContext::from_config(&config, None);
    context.set_board(board.id);
    config.active_board = context.board_id();
    config.save()?;

    msg_success!(Message::ActiveBoardSet(board.name));
    Ok(())
}
