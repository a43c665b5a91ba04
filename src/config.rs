// ABOUTME: Configuration module for the aqilha-deck application
// ABOUTME: Provides output and metadata settings with environment variable handling

use crate::errors::{DeckError, Result};
use crate::pptx::{default_timestamp, PptxConfig};
use chrono::{DateTime, TimeZone, Utc};
use std::env;
use std::path::PathBuf;

/// Fixed output file name, written to the current directory
pub const DEFAULT_OUTPUT: &str = "عرض_عقيلها.pptx";

pub const DEFAULT_TITLE: &str = "عَقِلْها - نظام تحليل الازدحام المروري الذكي";

/// Global configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub output_path: PathBuf,
    pub title: String,
    pub creator: String,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            title: DEFAULT_TITLE.to_string(),
            creator: env!("CARGO_PKG_NAME").to_string(),
            created: default_timestamp(),
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let output_path = env::var("DECK_OUTPUT")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.output_path);
        let title = env::var("DECK_TITLE").unwrap_or(defaults.title);
        let creator = env::var("DECK_CREATOR").unwrap_or(defaults.creator);

        let created = match env::var("SOURCE_DATE_EPOCH") {
            Ok(value) => parse_epoch(&value)?,
            Err(_) => defaults.created,
        };

        Ok(Self {
            output_path,
            title,
            creator,
            created,
        })
    }

    /// Get a PPTX configuration, preferring an explicit title
    pub fn get_pptx_config(&self, title: Option<String>) -> PptxConfig {
        PptxConfig {
            title: title.unwrap_or_else(|| self.title.clone()),
            creator: self.creator.clone(),
            created: self.created,
        }
    }
}

/// Parse a unix timestamp in seconds, as used by reproducible builds
pub fn parse_epoch(value: &str) -> Result<DateTime<Utc>> {
    let seconds = value.trim().parse::<i64>().map_err(|e| {
        DeckError::ConfigError(format!("Invalid SOURCE_DATE_EPOCH {:?}: {}", value, e))
    })?;
    Utc.timestamp_opt(seconds, 0).single().ok_or_else(|| {
        DeckError::ConfigError(format!("SOURCE_DATE_EPOCH out of range: {}", seconds))
    })
}
