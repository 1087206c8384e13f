//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tally/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::interpolator::AnimationConfig;
use crate::core::storage::default_data_file;
use crate::core::width::WidthConfig;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TallyConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub input: InputConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    pub data_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub currency_label: Option<String>,
    pub animation_ms: Option<u64>,
    pub frame_rate: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InputConfig {
    pub min_width: Option<u16>,
    pub padding: Option<u16>,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub data_file: Option<PathBuf>,
    pub ephemeral: bool,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CURRENCY_LABEL: &str = "INR";
pub const DEFAULT_ANIMATION_MS: u64 = 100;
pub const DEFAULT_FRAME_RATE: u32 = 60;
pub const MAX_FRAME_RATE: u32 = 240;
pub const DEFAULT_MIN_WIDTH: u16 = 6;
pub const DEFAULT_PADDING: u16 = 2;
const FALLBACK_DATA_FILE: &str = "tally-expenses.json";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Where the ledger is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageTarget {
    File(PathBuf),
    /// Keep everything in memory; nothing survives the session.
    Ephemeral,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub storage: StorageTarget,
    pub currency_label: String,
    pub animation: AnimationConfig,
    pub width: WidthConfig,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.tally/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tally").join("config.toml"))
}

/// Load config from `~/.tally/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TallyConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TallyConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TallyConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TallyConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<TallyConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TallyConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Tally Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [storage]
# data_file = "~/.tally/expenses.json"  # Or set TALLY_DATA_FILE env var

# [display]
# currency_label = "INR"
# animation_ms = 100                     # Amount readout animation length
# frame_rate = 60                        # Animation frames per second

# [input]
# min_width = 6                          # Narrowest amount field, in cells
# padding = 2                            # Extra cells beside the digits
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TallyConfig, cli: &CliOverrides) -> ResolvedConfig {
    ResolvedConfig {
        storage: resolve_storage(config, cli),
        currency_label: config
            .display
            .currency_label
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENCY_LABEL.to_string()),
        animation: AnimationConfig {
            duration: Duration::from_millis(
                config
                    .display
                    .animation_ms
                    .unwrap_or(DEFAULT_ANIMATION_MS)
                    .max(1),
            ),
            frame_rate: config
                .display
                .frame_rate
                .unwrap_or(DEFAULT_FRAME_RATE)
                .clamp(1, MAX_FRAME_RATE),
        },
        width: WidthConfig {
            min_width: config.input.min_width.unwrap_or(DEFAULT_MIN_WIDTH),
            padding: config.input.padding.unwrap_or(DEFAULT_PADDING),
        },
    }
}

/// Data file: CLI → env → config → `~/.tally/expenses.json`. `--ephemeral` wins over all.
fn resolve_storage(config: &TallyConfig, cli: &CliOverrides) -> StorageTarget {
    if cli.ephemeral {
        return StorageTarget::Ephemeral;
    }

    let path = cli
        .data_file
        .clone()
        .or_else(|| std::env::var("TALLY_DATA_FILE").ok().map(|p| expand_home(&p)))
        .or_else(|| config.storage.data_file.as_deref().map(expand_home))
        .or_else(default_data_file)
        .unwrap_or_else(|| {
            warn!("Could not determine home directory, storing expenses in the working directory");
            PathBuf::from(FALLBACK_DATA_FILE)
        });

    StorageTarget::File(path)
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}
