//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{DailyCodeError, Result};
use crate::generator::CATALOG;
use chrono::format::{Item, StrftimeItems};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(DailyCodeError::Io)` - The file could not be read
    /// * `Err(DailyCodeError::Config)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DailyCodeError::Io(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load from `path` when given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file carries no settings.
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                DailyCodeError::Config(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            DailyCodeError::Config(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `extension` must be non-empty and have no leading dot
    /// - `file_prefix` must not contain path separators
    /// - `date_format` must be a non-empty, well-formed strftime pattern
    /// - `snippets_per_file` must be between 1 and the catalog size
    pub fn validate(&self) -> Result<()> {
        if self.extension.is_empty() {
            return Err(invalid("extension must be non-empty"));
        }
        if self.extension.starts_with('.') {
            return Err(invalid(&format!(
                "extension must not have a leading dot (found '{}'). Use '{}' instead.",
                self.extension,
                self.extension.trim_start_matches('.')
            )));
        }

        if self.file_prefix.contains(['/', '\\']) {
            return Err(invalid(&format!(
                "file_prefix must not contain path separators (found '{}')",
                self.file_prefix
            )));
        }

        if self.date_format.is_empty() {
            return Err(invalid("date_format must be non-empty"));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(invalid(&format!(
                "date_format '{}' is not a valid strftime pattern",
                self.date_format
            )));
        }

        if self.snippets_per_file == 0 || self.snippets_per_file > CATALOG.len() {
            return Err(invalid(&format!(
                "snippets_per_file must be between 1 and {} (found {})",
                CATALOG.len(),
                self.snippets_per_file
            )));
        }

        Ok(())
    }

    /// File name for a given date stamp: `{file_prefix}{date_stamp}.{extension}`.
    pub fn file_name(&self, date_stamp: &str) -> String {
        format!("{}{}.{}", self.file_prefix, date_stamp, self.extension)
    }
}

fn invalid(reason: &str) -> DailyCodeError {
    DailyCodeError::Config(format!("config validation failed: {}", reason))
}
