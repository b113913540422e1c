use super::{apply_clone, apply_move, delete_selection, show_after_change};
use crate::{
    db::cards::NewCard,
    libs::{
        config::Config,
        entity::{Id, Item},
        error::LanesError,
        kanban::Kanban,
        messages::Message,
        moves::Direction,
    },
    msg_error_anyhow, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CardArgs {
    #[command(subcommand)]
    command: CardCommand,
}

#[derive(Debug, Subcommand)]
enum CardCommand {
    /// Append a card to a list
    Create {
        /// List ID
        list: Id,
        /// Card title
        title: String,
        /// Card description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Image file to attach
        #[arg(short, long)]
        attach: Option<PathBuf>,
    },
    /// Edit title and description; prompts when no flag is given
    Edit {
        id: Id,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete cards
    Delete {
        #[arg(required = true)]
        ids: Vec<Id>,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Swap with the card above
    Up { id: Id },
    /// Swap with the card below
    Down { id: Id },
    /// Move to the end of the list on the left
    Left { id: Id },
    /// Move to the end of the list on the right
    Right { id: Id },
    /// Move to the end of another list
    Drop {
        id: Id,
        /// Target list ID
        list: Id,
    },
    /// Move to a zero-based index within the list
    MoveTo {
        id: Id,
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// Copy a card to the end of its list
    Clone { id: Id },
    /// Attach an image file to a card
    Attach { id: Id, file: PathBuf },
    /// Remove the attachment of a card
    Detach { id: Id },
}

pub fn cmd(args: CardArgs) -> Result<()> {
    match args.command {
        CardCommand::Create {
            list,
            title,
            description,
            attach,
        } => handle_create(list, title, description, attach),
        CardCommand::Edit { id, title, description } => handle_edit(id, title, description),
        CardCommand::Delete { ids, yes } => delete_selection(ids.into_iter().map(Item::Card), yes),
        CardCommand::Up { id } => handle_direction(id, Direction::Up),
        CardCommand::Down { id } => handle_direction(id, Direction::Down),
        CardCommand::Left { id } => handle_direction(id, Direction::Left),
        CardCommand::Right { id } => handle_direction(id, Direction::Right),
        CardCommand::Drop { id, list } => apply_move(Item::Card(id), |k| k.move_to_parent(Item::Card(id), list)),
        CardCommand::MoveTo { id, index } => apply_move(Item::Card(id), |k| k.reorder_to(Item::Card(id), index)),
        CardCommand::Clone { id } => apply_clone(Item::Card(id)),
        CardCommand::Attach { id, file } => handle_attach(id, file),
        CardCommand::Detach { id } => handle_detach(id),
    }
}

fn read_attachment(path: PathBuf) -> Result<Vec<u8>, LanesError> {
    fs::read(&path).map_err(|source| LanesError::Attachment { path, source })
}

fn handle_create(list: Id, title: String, description: String, attach: Option<PathBuf>) -> Result<()> {
    let attachment = attach.map(read_attachment).transpose()?;

    let card = NewCard {
        title: &title,
        description: &description,
        attachment: attachment.as_deref(),
    };
    let mut kanban = Kanban::new()?;
    let id = kanban.create_card_with(list, &card)?;
    msg_success!(Message::ItemCreated(Item::Card(id), title));

    show_after_change(&kanban, &Config::read()?, Item::Card(id))
}

fn handle_edit(id: Id, title: Option<String>, description: Option<String>) -> Result<()> {
    let mut kanban = Kanban::new()?;
    let Some(card) = kanban.card(id)? else {
        return Err(msg_error_anyhow!(Message::ItemNotFound(Item::Card(id))));
    };

    let (title, description) = if title.is_none() && description.is_none() {
        let title: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTitle.to_string())
            .default(card.title.clone())
            .interact_text()?;
        let description: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDescription.to_string())
            .default(card.description.clone())
            .allow_empty(true)
            .interact_text()?;
        (title, description)
    } else {
        (title.unwrap_or(card.title), description.unwrap_or(card.description))
    };

    kanban.update_card(id, &title, &description)?;
    msg_success!(Message::ItemRenamed(Item::Card(id), title));

    show_after_change(&kanban, &Config::read()?, Item::Card(id))
}

fn handle_direction(id: Id, direction: Direction) -> Result<()> {
    apply_move(Item::Card(id), |k| k.move_item(Item::Card(id), direction))
}

fn handle_attach(id: Id, file: PathBuf) -> Result<()> {
    let bytes = read_attachment(file)?;

    let mut kanban = Kanban::new()?;
    kanban.set_attachment(id, Some(bytes.as_slice()))?;
    msg_success!(Message::AttachmentSet(id, bytes.len()));
    Ok(())
}

fn handle_detach(id: Id) -> Result<()> {
    let mut kanban = Kanban::new()?;
    kanban.set_attachment(id, None)?;
    msg_success!(Message::AttachmentCleared(id));
    Ok(())
}
