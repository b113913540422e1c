//! Configuration management for the lanes application.
//!
//! Settings live in a JSON file inside the platform data directory, next to
//! the board database. A missing file is not an error: defaults are used
//! until `lanes init` writes one.
//!
//! ## Settings
//!
//! - **db_file**: database file name inside the data directory
//! - **active_board**: board used when a command is not given `--board`
//! - **show_after_change**: re-render the owning board after each change
//!
//! ```rust,no_run
//! use lanes::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.active_board = Some(1);
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::entity::Id;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Database file name, relative to the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_file: Option<String>,

    /// Board targeted by commands that are not given one explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_board: Option<Id>,

    /// Print the owning board after a successful change.
    #[serde(default = "default_show_after_change")]
    pub show_after_change: bool,
}

fn default_show_after_change() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_file: None,
            active_board: None,
            show_after_change: default_show_after_change(),
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    pub fn read() -> Result<Config> {
        let config_file_path = Self::path()?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file = File::create(Self::path()?)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn db_file(&self) -> &str {
        self.db_file.as_deref().unwrap_or(DB_FILE_NAME)
    }

    /// Interactive setup starting from the current settings.
    pub fn init() -> Result<Config> {
        let mut config = Config::read()?;

        msg_print!(Message::ConfigHeader, true);

        let db_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDbFile.to_string())
            .default(config.db_file().to_string())
            .interact_text()?;
        config.db_file = if db_file == DB_FILE_NAME { None } else { Some(db_file) };

        config.show_after_change = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptShowAfterChange.to_string())
            .default(config.show_after_change)
            .interact()?;

        Ok(config)
    }
}
