use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::lyrics::scanner::ScannerKind;

/// Library configuration module
/// This module handles the configuration a host application hands to the parser.
/// The crate does no file I/O: the host reads the JSON text and passes it in.
/// Represents the library configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Parser behaviour
    #[serde(default)]
    pub parser: ParserConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Parser configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ParserConfig {
    // @field: Matching engine
    #[serde(default)]
    pub scanner: ScannerKind,

    // @field: Log and collect warnings for tags outside the known set
    #[serde(default = "default_true")]
    pub report_unknown_tags: bool,

    // @field: Trim whitespace around lyric text
    #[serde(default)]
    pub trim_lyric_text: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            scanner: ScannerKind::default(),
            report_unknown_tags: default_true(),
            trim_lyric_text: false,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from JSON text; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse lrcparse config JSON")
    }

    /// Serialize the configuration as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize lrcparse config to JSON")
    }
}
