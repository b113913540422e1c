//! Interactive configuration setup.

use crate::{
    db::db::Db,
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Keep the current settings and only create the database
    #[arg(short, long)]
    skip_prompts: bool,
}

/// Writes the configuration and makes sure the database schema is current.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    if !init_args.skip_prompts {
        Config::init()?.save()?;
        msg_success!(Message::ConfigSaved);
    }

    // Opening the store runs any pending migrations.
    Db::new()?;
    Ok(())
}
