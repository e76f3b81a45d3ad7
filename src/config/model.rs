//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for generating the daily file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the generated file is written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Text placed before the date stamp in the file name.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// File extension, without the leading dot.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// strftime pattern used to build today's date stamp.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How many distinct catalog snippets each file contains.
    #[serde(default = "default_snippets_per_file")]
    pub snippets_per_file: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            file_prefix: default_file_prefix(),
            extension: default_extension(),
            date_format: default_date_format(),
            snippets_per_file: default_snippets_per_file(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_file_prefix() -> String {
    "daily_code_".to_string()
}
fn default_extension() -> String {
    "rs".to_string()
}
fn default_date_format() -> String {
    "%Y_%m_%d".to_string()
}
fn default_snippets_per_file() -> usize {
    2
}
