use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::subtitle_processor::DEFAULT_SENTENCE_MARK;

/// Application configuration module
/// This module handles loading and validating the settings that shape output
/// file names and the punctuation mark.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Mark appended to caption lines by the punctuator
    #[serde(default = "default_sentence_mark")]
    pub sentence_mark: String,

    /// Suffix of the punctuated file name
    #[serde(default = "default_period_suffix")]
    pub period_suffix: String,

    /// Suffix of the skeleton file name written by the splitter
    #[serde(default = "default_timestamps_suffix")]
    pub timestamps_suffix: String,

    /// Suffix of the content file name written by the splitter
    #[serde(default = "default_content_suffix")]
    pub content_suffix: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_sentence_mark() -> String {
    DEFAULT_SENTENCE_MARK.to_string()
}

fn default_period_suffix() -> String {
    "_period_added".to_string()
}

fn default_timestamps_suffix() -> String {
    "_timestamps".to_string()
}

fn default_content_suffix() -> String {
    "_content".to_string()
}

impl Config {
    /// Load the configuration from a JSON file, falling back to defaults when
    /// the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;
        let config: Config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// The punctuation mark as a single character.
    pub fn mark(&self) -> Result<char> {
        let mut chars = self.sentence_mark.chars();
        match (chars.next(), chars.next()) {
            (Some(mark), None) if !mark.is_whitespace() => Ok(mark),
            _ => Err(anyhow!(
                "Sentence mark must be a single non-whitespace character, got {:?}",
                self.sentence_mark
            )),
        }
    }

    /// Suffixes appended by this tool, used to recognize its own output files.
    pub fn output_suffixes(&self) -> [&str; 3] {
        [
            self.period_suffix.as_str(),
            self.timestamps_suffix.as_str(),
            self.content_suffix.as_str(),
        ]
    }

    pub fn validate(&self) -> Result<()> {
        self.mark()?;

        let suffixes = self.output_suffixes();
        if suffixes.iter().any(|suffix| suffix.is_empty()) {
            return Err(anyhow!("Output file suffixes must not be empty"));
        }

        if suffixes[0] == suffixes[1] || suffixes[0] == suffixes[2] || suffixes[1] == suffixes[2] {
            return Err(anyhow!("Output file suffixes must be distinct: {:?}", suffixes));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sentence_mark: default_sentence_mark(),
            period_suffix: default_period_suffix(),
            timestamps_suffix: default_timestamps_suffix(),
            content_suffix: default_content_suffix(),
            log_level: LogLevel::default(),
        }
    }
}
