//! Configuration management for the tasklist application.
//!
//! Settings are kept as pretty-printed JSON in `config.json` inside the
//! application data directory. A missing file, or a file missing some
//! fields, falls back to the defaults below, so the application runs
//! without any setup.
//!
//! ## Configuration Structure
//!
//! - **Storage**: Which database file inside the data directory holds the tasks
//! - **UI**: Delete confirmation and whether finished tasks are listed
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use tasklist::libs::config::Config;
//!
//! let config = Config::read()?;
//! if config.ui.confirm_delete {
//!     println!("Deletes will ask first");
//! }
//!
//! let updated = Config::init()?;
//! updated.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_debug, msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_DB_FILE_NAME: &str = "tasks.db";

/// Where task data lives.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite file name, resolved inside the data directory.
    pub db_file: String,
}

/// List screen behavior.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Ask before deleting a task.
    pub confirm_delete: bool,

    /// Show only unfinished tasks when no filter flag is given.
    pub hide_done: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            db_file: DEFAULT_DB_FILE_NAME.to_string(),
        }
    }
}

impl StorageConfig {
    /// Full path of the database file inside `storage`.
    pub fn db_path(&self, storage: &DataStorage) -> Result<PathBuf> {
        if self.db_file.trim().is_empty() {
            msg_bail_anyhow!(Message::DbFileEmpty);
        }
        storage.get_path(&self.db_file)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            confirm_delete: true,
            hide_done: false,
        }
    }
}

impl Config {
    /// Loads the configuration from the data directory, or the defaults if
    /// no file has been written yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            msg_debug!(format!("No config at {}, using defaults", path.display()));
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config =
            serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Interactive setup wizard, seeded with the current values.
    pub fn init() -> Result<Self> {
        // A broken file is reported rather than silently replaced
        let current = Self::read()?;

        msg_print!(Message::ConfigModuleStorage);
        let storage = StorageConfig {
            db_file: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDbFile.to_string())
                .default(current.storage.db_file)
                .validate_with(|input: &String| -> Result<(), String> {
                    if input.trim().is_empty() {
                        Err(Message::DbFileEmpty.to_string())
                    } else {
                        Ok(())
                    }
                })
                .interact_text()?,
        };

        msg_print!(Message::ConfigModuleUi);
        let ui = UiConfig {
            confirm_delete: Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptConfirmDeleteSetting.to_string())
                .default(current.ui.confirm_delete)
                .interact()?,
            hide_done: Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptHideDoneSetting.to_string())
                .default(current.ui.hide_done)
                .interact()?,
        };

        Ok(Config { storage, ui })
    }
}
