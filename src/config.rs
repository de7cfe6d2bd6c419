use crate::error::MigrateError;
use dirs::home_dir;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_NAME: &str = "solmigrate.toml";

/// Solidity version that `powerup` migrates to when nothing else is configured
pub const DEFAULT_TARGET_VERSION: &str = "0.8.24";
pub const DEFAULT_SOURCE_DIR: &str = "src";
pub const DEFAULT_EXTENSION: &str = "sol";

/// The legacy comment banners and the banners that replace them, in the order they are checked
pub const DEFAULT_BANNER_MAPPINGS: [(&str, &str); 2] = [
    (
        "/*´:°•.°+.*•´.*:˚.°*.˚•´.°:°•.°•.*•´.*:˚.°*.˚•´.°:°•.°+.*•´.*:*/",
        "/*«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-«-*/",
    ),
    (
        "/*.•°:°.´+˚.*°.˚:*.´•*.+°.•°:´*.´•*.•°.•°:°.´:•˚°.*°.˚:*.´+°.•*/",
        "/*-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»-»*/",
    ),
];

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub solidity: SolidityConfig,

    #[serde(default)]
    pub rebrand: RebrandConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct SolidityConfig {
    pub target_version: Option<String>,
    pub source_dir: Option<PathBuf>,
    pub extension: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RebrandConfig {
    pub mappings: Option<Vec<LiteralMapping>>,
}

/// A single legacy literal and its replacement
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LiteralMapping {
    pub from: String,
    pub to: String,
}

impl Config {
    /// Load config from a toml file
    pub fn from_file(path: &Path) -> Result<Self, MigrateError> {
        let config_str = fs::read_to_string(path).map_err(MigrateError::io(path))?;
        Self::from_toml(&config_str).inspect_err(|e| {
            warn!("Toml parse error in {}: {e}", path.display());
        })
    }

    pub fn from_toml(config_str: &str) -> Result<Self, MigrateError> {
        Ok(toml::from_str(config_str)?)
    }

    /// Try to load the config from expected locations
    pub fn load() -> Self {
        if let Ok(local_config) = Config::from_file(Path::new(CONFIG_NAME)) {
            debug!("Using local {CONFIG_NAME}");
            return local_config;
        }
        if let Some(home_dir) = home_dir() {
            let home_config = home_dir.join(".config").join(CONFIG_NAME);
            debug!("Checking {}", home_config.display());
            if let Ok(home_config) = Config::from_file(&home_config) {
                return home_config;
            }
        }
        // Nothing on disk is fine, everything has a default
        debug!("Unable to find {CONFIG_NAME}, using defaults");
        Config::default()
    }

    /// The version to migrate to. An explicit override wins over the config file.
    pub fn target_version(&self, cli_override: Option<&str>) -> Result<String, MigrateError> {
        let version = cli_override
            .or(self.solidity.target_version.as_deref())
            .unwrap_or(DEFAULT_TARGET_VERSION);
        validate_version(version)?;
        Ok(version.to_string())
    }

    pub fn source_dir(&self) -> PathBuf {
        self.solidity
            .source_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_DIR))
    }

    /// File extension without the leading dot
    pub fn extension(&self) -> String {
        let ext = self
            .solidity
            .extension
            .as_deref()
            .unwrap_or(DEFAULT_EXTENSION);
        ext.trim_start_matches('.').to_string()
    }

    /// The literals `rebrand` looks for. An empty `from` would match between every
    /// character and is rejected; entries that map a literal to itself are dropped.
    pub fn banner_mappings(&self) -> Result<Vec<LiteralMapping>, MigrateError> {
        let mappings = match &self.rebrand.mappings {
            Some(mappings) if !mappings.is_empty() => mappings,
            Some(_) => {
                warn!("[rebrand] mappings is empty, falling back to the default banners");
                return Ok(default_mappings());
            }
            None => return Ok(default_mappings()),
        };

        let mut valid = Vec::with_capacity(mappings.len());
        for (i, mapping) in mappings.iter().enumerate() {
            if mapping.from.is_empty() {
                return Err(MigrateError::InvalidInput(format!(
                    "[rebrand] mapping #{} has an empty `from`",
                    i + 1
                )));
            }
            if mapping.from == mapping.to {
                warn!(
                    "[rebrand] mapping #{} replaces {:?} with itself, ignoring it",
                    i + 1,
                    mapping.from
                );
                continue;
            }
            valid.push(mapping.clone());
        }
        Ok(valid)
    }
}

fn default_mappings() -> Vec<LiteralMapping> {
    DEFAULT_BANNER_MAPPINGS
        .iter()
        .map(|(from, to)| LiteralMapping {
            from: (*from).to_string(),
            to: (*to).to_string(),
        })
        .collect()
}

/// A target version has to look like MAJOR.MINOR.PATCH, the same shape the pragma regex captures
fn validate_version(version: &str) -> Result<(), MigrateError> {
    let parts: Vec<&str> = version.split('.').collect();
    let valid = parts.len() == 3
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));
    if valid {
        Ok(())
    } else {
        Err(MigrateError::InvalidInput(format!(
            "'{version}' is not a MAJOR.MINOR.PATCH Solidity version"
        )))
    }
}
