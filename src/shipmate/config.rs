use crate::error::{Result, ShipmateError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

const DEFAULT_CHECKLIST_PATH: &str = "docs/STRIPE_INTEGRATION_GUIDE.md";
const DEFAULT_CHECKLIST_SECTION: &str = "Production Checklist";
const DEFAULT_CREDENTIALS_PATH: &str = "credentials/Credentials.xlsx";
const DEFAULT_CONVERTER_COMMAND: &str = "xlsx2csv";

/// Configuration for shipmate, stored in .shipmate/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShipmateConfig {
    /// Markdown document the checklist command scans
    #[serde(default = "default_checklist_path")]
    pub checklist_path: String,

    /// Phrase identifying the heading of the target section
    #[serde(default = "default_checklist_section")]
    pub checklist_section: String,

    /// Spreadsheet the credentials command hands to the converter
    #[serde(default = "default_credentials_path")]
    pub credentials_path: String,

    /// External program used to turn the spreadsheet into text
    #[serde(default = "default_converter_command")]
    pub converter_command: String,
}

fn default_checklist_path() -> String {
    DEFAULT_CHECKLIST_PATH.to_string()
}

fn default_checklist_section() -> String {
    DEFAULT_CHECKLIST_SECTION.to_string()
}

fn default_credentials_path() -> String {
    DEFAULT_CREDENTIALS_PATH.to_string()
}

fn default_converter_command() -> String {
    DEFAULT_CONVERTER_COMMAND.to_string()
}

impl Default for ShipmateConfig {
    fn default() -> Self {
        Self {
            checklist_path: default_checklist_path(),
            checklist_section: default_checklist_section(),
            credentials_path: default_credentials_path(),
            converter_command: default_converter_command(),
        }
    }
}

impl ShipmateConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShipmateError::Io)?;
        let config: ShipmateConfig =
            serde_json::from_str(&content).map_err(ShipmateError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShipmateError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShipmateError::Serialization)?;
        fs::write(config_path, content).map_err(ShipmateError::Io)?;
        Ok(())
    }

    /// Get a field by its config key, or None for an unknown key
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "checklist-path" => Some(&self.checklist_path),
            "checklist-section" => Some(&self.checklist_section),
            "credentials-path" => Some(&self.credentials_path),
            "converter-command" => Some(&self.converter_command),
            _ => None,
        }
    }

    /// Set a field by its config key; returns false for an unknown key
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        match key {
            "checklist-path" => self.checklist_path = value.to_string(),
            "checklist-section" => self.checklist_section = value.to_string(),
            "credentials-path" => self.credentials_path = value.to_string(),
            "converter-command" => self.converter_command = value.to_string(),
            _ => return false,
        }
        true
    }

    /// All config keys in display order, paired with their current values
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("checklist-path", self.checklist_path.as_str()),
            ("checklist-section", self.checklist_section.as_str()),
            ("credentials-path", self.credentials_path.as_str()),
            ("converter-command", self.converter_command.as_str()),
        ]
    }
}
