//! Configuration management for the appliance.
//!
//! Settings live in a JSON file in the platform data directory and cover
//! how the buttons are sampled and where the activity log is written.
//! Both sections are optional in the file; missing sections fall back to
//! defaults so the device runs with zero setup.

use crate::core::input::parse_key;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "tracking.csv";

/// Button sampling settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DeviceConfig {
    /// Poll interval in milliseconds; bounds the input sample rate.
    pub poll_interval: u64,
    /// Keyboard key standing in for button A (switch 1).
    pub button_a_key: String,
    /// Keyboard key standing in for button B (switch 2).
    pub button_b_key: String,
}

/// Activity log settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LogConfig {
    /// Append-only log file path.
    pub path: PathBuf,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<DeviceConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<LogConfig>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        DeviceConfig {
            poll_interval: 500,
            button_a_key: "F1".to_string(),
            button_b_key: "F2".to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file
    /// exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Runs the interactive setup wizard, pre-filling prompts with current
    /// values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let device = config.device.clone().unwrap_or_default();
        msg_print!(Message::ConfigDeviceSection);
        let poll_interval = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPollInterval.to_string())
            .default(device.poll_interval)
            .interact_text()?;
        let button_a_key: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptButtonAKey.to_string())
            .default(device.button_a_key)
            .interact_text()?;
        let button_b_key: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptButtonBKey.to_string())
            .default(device.button_b_key)
            .interact_text()?;
        for key in [&button_a_key, &button_b_key] {
            if parse_key(key).is_none() {
                msg_bail_anyhow!(Message::InvalidKeyName(key.clone()));
            }
        }
        config.device = Some(DeviceConfig {
            poll_interval,
            button_a_key,
            button_b_key,
        });

        msg_print!(Message::ConfigLogSection);
        let default_path = config.log.clone().map(|log| log.path).unwrap_or(Self::default_log_path()?);
        let path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptLogPath.to_string())
            .default(default_path.to_string_lossy().into_owned())
            .interact_text()?;
        config.log = Some(LogConfig { path: PathBuf::from(path) });

        Ok(config)
    }

    /// Effective device settings, defaulted when the section is absent.
    pub fn device(&self) -> DeviceConfig {
        self.device.clone().unwrap_or_default()
    }

    /// Effective log path, defaulted into the app data directory when the
    /// section is absent.
    pub fn log_path(&self) -> Result<PathBuf> {
        match &self.log {
            Some(log) => Ok(log.path.clone()),
            None => Self::default_log_path(),
        }
    }

    fn default_log_path() -> Result<PathBuf> {
        DataStorage::new().get_path(LOG_FILE_NAME)
    }
}
