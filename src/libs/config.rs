//! Configuration management for the tasktrack application.
//!
//! Settings are stored as pretty-printed JSON (`config.json`) in the
//! platform-specific data directory resolved by [`DataStorage`]. A missing
//! file is not an error: the defaults are used instead.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasktrack::libs::config::Config;
//!
//! let config = Config::read()?;
//! let list = config.list_defaults();
//! println!("Sorting by {} ({})", list.sort_by, if list.ascending { "asc" } else { "desc" });
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::messages::{prompts, Message};
use super::task::SortKey;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default ordering for task listings.
///
/// Used by `list` when no `--sort-by` / `--desc` flags are given. Without a
/// saved configuration tasks are listed by due date, earliest first.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListConfig {
    pub sort_by: SortKey,
    pub ascending: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        ListConfig {
            sort_by: SortKey::DueDate,
            ascending: true,
        }
    }
}

/// Root configuration object. Every section is optional and omitted from
/// the file when unset.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<ListConfig>,
}

impl Config {
    /// Reads the configuration from the default data directory.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    /// Reads the configuration from `storage`, falling back to
    /// [`Config::default`] when no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Listing defaults, with built-in values for an unconfigured section.
    pub fn list_defaults(&self) -> ListConfig {
        self.list.unwrap_or_default()
    }

    /// Interactive setup of the listing defaults.
    ///
    /// Current values are preselected so pressing enter keeps them.
    pub fn init() -> Result<Config> {
        let mut config = Config::read()?;
        let current = config.list_defaults();

        msg_print!(Message::ConfigModuleList);

        let keys: Vec<&str> = SortKey::ALL.iter().map(SortKey::as_str).collect();
        let selected_key = SortKey::ALL.iter().position(|key| *key == current.sort_by).unwrap_or(0);
        let key_index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompts::PROMPT_SORT_KEY)
            .items(&keys)
            .default(selected_key)
            .interact()?;

        let directions = ["ascending", "descending"];
        let direction_index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompts::PROMPT_SORT_DIRECTION)
            .items(&directions)
            .default(if current.ascending { 0 } else { 1 })
            .interact()?;

        config.list = Some(ListConfig {
            sort_by: SortKey::ALL[key_index],
            ascending: direction_index == 0,
        });

        Ok(config)
    }
}
