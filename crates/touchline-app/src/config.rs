// Configuration loading and parsing (config/touchline.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file location relative to the base directory.
pub const CONFIG_FILE: &str = "config/touchline.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Public config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Config {
    pub squad: SquadConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SquadConfig {
    pub name: String,
    /// CSV file with one player per row.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub sort_by: SortKey,
    pub include_injured: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sort_by: SortKey::Overall,
            include_injured: true,
        }
    }
}

/// Which figure the squad report orders players by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Overall,
    Technical,
    Defensive,
    Physical,
    Name,
}

impl SortKey {
    pub fn from_str_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "overall" => Some(SortKey::Overall),
            "technical" => Some(SortKey::Technical),
            "defensive" => Some(SortKey::Defensive),
            "physical" => Some(SortKey::Physical),
            "name" => Some(SortKey::Name),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// touchline.toml structs
// ---------------------------------------------------------------------------

/// Raw deserialization target for the whole file.
#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    squad: SquadConfig,
    #[serde(default)]
    report: ReportSection,
}

#[derive(Debug, Clone, Deserialize)]
struct ReportSection {
    #[serde(default = "default_sort_by")]
    sort_by: String,
    #[serde(default = "default_include_injured")]
    include_injured: bool,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            sort_by: default_sort_by(),
            include_injured: default_include_injured(),
        }
    }
}

fn default_sort_by() -> String {
    "overall".into()
}

fn default_include_injured() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/touchline.toml` relative to `base_dir`.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join(CONFIG_FILE);
    let text = read_file(&path)?;
    parse_config(&text).map_err(|e| match e {
        ParseFailure::Toml(source) => ConfigError::ParseError { path, source },
        ParseFailure::Invalid(err) => err,
    })
}

/// Convenience wrapper: loads config relative to the current working directory.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    load_config_from(&cwd)
}

enum ParseFailure {
    Toml(toml::de::Error),
    Invalid(ConfigError),
}

fn parse_config(text: &str) -> Result<Config, ParseFailure> {
    let file: ConfigFile = toml::from_str(text).map_err(ParseFailure::Toml)?;
    validate(file).map_err(ParseFailure::Invalid)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(file: ConfigFile) -> Result<Config, ConfigError> {
    if file.squad.name.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "squad.name".into(),
            message: "must not be empty".into(),
        });
    }

    if file.squad.path.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "squad.path".into(),
            message: "must not be empty".into(),
        });
    }

    let sort_by =
        SortKey::from_str_key(&file.report.sort_by).ok_or_else(|| ConfigError::ValidationError {
            field: "report.sort_by".into(),
            message: format!(
                "must be one of overall, technical, defensive, physical, name; got \"{}\"",
                file.report.sort_by
            ),
        })?;

    Ok(Config {
        squad: file.squad,
        report: ReportConfig {
            sort_by,
            include_injured: file.report.include_injured,
        },
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
