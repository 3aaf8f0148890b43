//! TOML-based configuration for ora2ch.
//!
//! Supports a config file (ora2ch.toml) with environment variable expansion.
//!
//! Example configuration:
//! ```toml
//! [source]
//! file = "${HOME}/dumps/all_tab_columns.txt"
//! # dsn = "ORACLE"
//! owner = "SALES"
//!
//! [target]
//! table_prefix = "ora_"
//! output = "clickhouse.sql"
//! locator = "ORACLE"
//!
//! [mapping]
//! unmapped = "fallback"
//! identity = "name"
//!
//! [general]
//! debug = false
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::connection::OdbcLocator;
use crate::catalog::{TableIdentity, DEFAULT_CATALOG_VIEW};
use crate::generate::{GeneratorOptions, DEFAULT_TABLE_PREFIX};
use crate::output::OutputTarget;
use crate::typemap::UnmappedPolicy;

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "ORA2CH_CONFIG";

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Both source.file and source.dsn are set; choose one")]
    ConflictingSource,

    #[error("No catalog source configured; set source.file or source.dsn")]
    MissingSource,

    #[error("No ODBC locator for the ENGINE clause; set target.locator or source.dsn")]
    MissingLocator,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Where the catalog comes from.
    pub source: SourceSettings,

    /// Where and how DDL is written.
    pub target: TargetSettings,

    /// Type and table identity policies.
    pub mapping: MappingSettings,

    pub general: GeneralSettings,
}

/// Catalog source configuration. Exactly one of `file` / `dsn` is used.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SourceSettings {
    /// Path to a bordered table dump (supports ${ENV_VAR} expansion).
    pub file: Option<String>,

    /// ODBC data source name for live reads (supports ${ENV_VAR} expansion).
    pub dsn: Option<String>,

    /// Only convert tables of this owner.
    pub owner: Option<String>,

    /// Catalog view queried in live mode.
    pub catalog_view: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            file: None,
            dsn: None,
            owner: None,
            catalog_view: DEFAULT_CATALOG_VIEW.to_string(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TargetSettings {
    /// Prefix for generated table names.
    pub table_prefix: String,

    /// Output file, or "-" for stdout.
    pub output: String,

    /// DSN written into `ENGINE = ODBC(...)`. Defaults to `source.dsn`.
    pub locator: Option<String>,
}

impl Default for TargetSettings {
    fn default() -> Self {
        Self {
            table_prefix: DEFAULT_TABLE_PREFIX.to_string(),
            output: "-".to_string(),
            locator: None,
        }
    }
}

/// Mapping policies.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MappingSettings {
    /// "fallback" or "fail".
    pub unmapped: UnmappedPolicy,

    /// "name" or "owner_and_name".
    pub identity: TableIdentity,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Verbose logging.
    pub debug: bool,
}

/// Where one run reads its catalog from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceMode {
    /// Parse a dump file.
    File(PathBuf),
    /// Query a live catalog.
    Live {
        locator: OdbcLocator,
        catalog_view: String,
    },
}

/// Fully resolved parameters of one conversion run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: SourceMode,
    pub output: OutputTarget,
    pub generator: GeneratorOptions,
    pub unmapped: UnmappedPolicy,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(content)?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. `explicit` (the `--config` flag)
    /// 2. Environment variable `ORA2CH_CONFIG`
    /// 3. `./ora2ch.toml`
    /// 4. `~/.config/ora2ch/config.toml`
    pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("ora2ch.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("ora2ch").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(Settings::default())
    }

    /// Resolve the catalog source, expanding environment variables.
    pub fn source_mode(&self) -> Result<SourceMode, SettingsError> {
        match (&self.source.file, &self.source.dsn) {
            (Some(_), Some(_)) => Err(SettingsError::ConflictingSource),
            (None, None) => Err(SettingsError::MissingSource),
            (Some(file), None) => Ok(SourceMode::File(PathBuf::from(expand_env_vars(file)?))),
            (None, Some(dsn)) => {
                let view = self.source.catalog_view.trim();
                let plain = view
                    .chars()
                    .all(|c| c.is_alphanumeric() || c == '_' || c == '.');
                if view.is_empty() || !plain {
                    return Err(SettingsError::InvalidConfig(format!(
                        "catalog_view '{}' is not a plain view name",
                        self.source.catalog_view
                    )));
                }
                Ok(SourceMode::Live {
                    locator: OdbcLocator::new(expand_env_vars(dsn)?).with_credentials_from_env(),
                    catalog_view: view.to_string(),
                })
            }
        }
    }

    /// The DSN for the generated `ENGINE` clause.
    pub fn resolved_locator(&self) -> Result<String, SettingsError> {
        match (&self.target.locator, &self.source.dsn) {
            (Some(locator), _) | (None, Some(locator)) => expand_env_vars(locator),
            (None, None) => Err(SettingsError::MissingLocator),
        }
    }

    /// Validate the settings and produce the parameters of one run.
    pub fn into_run_config(self) -> Result<RunConfig, SettingsError> {
        let source = self.source_mode()?;
        let locator = self.resolved_locator()?;
        let output = OutputTarget::parse(&expand_env_vars(&self.target.output)?);

        let mut generator = GeneratorOptions::new(locator)
            .with_prefix(self.target.table_prefix)
            .with_identity(self.mapping.identity);
        if let Some(owner) = self.source.owner {
            generator = generator.with_owner_filter(owner);
        }

        Ok(RunConfig {
            source,
            output,
            generator,
            unmapped: self.mapping.unmapped,
        })
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax. A `${` without a closing `}` is an
/// [`SettingsError::InvalidConfig`].
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        let var_name: String = if chars.next_if_eq(&'{').is_some() {
            let mut name = String::new();
            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(ch) => name.push(ch),
                    None => {
                        return Err(SettingsError::InvalidConfig(format!(
                            "unclosed '${{' in '{}'",
                            s
                        )))
                    }
                }
            }
            name
        } else {
            // $VAR ends at the first non-alphanumeric/underscore
            let mut name = String::new();
            while let Some(ch) = chars.next_if(|ch| ch.is_alphanumeric() || *ch == '_') {
                name.push(ch);
            }
            if name.is_empty() {
                // Just a lone $, keep it
                result.push('$');
                continue;
            }
            name
        };

        let value = env::var(&var_name).map_err(|_| SettingsError::MissingEnvVar(var_name))?;
        result.push_str(&value);
    }

    Ok(result)
}
