//! Read sheetboard.toml: which spreadsheet to pull and which ranges hold
//! the two tables.

use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use sheetboard_core::source::{CATEGORIES_RANGE, SheetRanges, TRANSACTIONS_RANGE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid reference date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("no access token: pass --token or set SHEETBOARD_TOKEN")]
    MissingToken,
}

// ── TOML shape ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct FileConfig {
    spreadsheet: SpreadsheetSection,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetSection {
    id: String,
    #[serde(default = "default_transactions_range")]
    transactions_range: String,
    #[serde(default = "default_categories_range")]
    categories_range: String,
}

fn default_transactions_range() -> String {
    TRANSACTIONS_RANGE.to_string()
}

fn default_categories_range() -> String {
    CATEGORIES_RANGE.to_string()
}

// ── Public config ───────────────────────────────────────────────────────────

/// Explicit configuration for one dashboard instance; nothing ambient.
#[derive(Debug, Clone)]
pub struct Config {
    pub spreadsheet_id: String,
    pub ranges: SheetRanges,
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let file: FileConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self {
            spreadsheet_id: file.spreadsheet.id,
            ranges: SheetRanges {
                transactions: file.spreadsheet.transactions_range,
                categories: file.spreadsheet.categories_range,
            },
        })
    }
}

/// Parse an `--as-of` override eagerly. A bad reference date is a
/// configuration error at the text boundary, never a pipeline concern.
pub fn parse_as_of(raw: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ConfigError::InvalidDate(raw.to_string()))
}
