//! Board export command.

use crate::{
    libs::{
        config::Config,
        context::ViewContext,
        entity::Id,
        export::{ExportFormat, Exporter},
        kanban::Kanban,
        messages::Message,
    },
    msg_bail_anyhow,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Board ID; defaults to the active board
    board: Option<Id>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file; a timestamped name in the current directory by default
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let board_id = ViewContext::from_config(&Config::read()?, args.board).require_board()?;

    let Some(tree) = Kanban::new()?.load_board(board_id)? else {
        msg_bail_anyhow!(Message::BoardNotFound(board_id));
    };

    Exporter::new(args.format, args.output).export(&tree)
}
