//! Configuration module for ora2ch.
//!
//! Handles the TOML settings file, environment variables, and ODBC
//! connection details.

mod connection;
mod settings;

pub use connection::{OdbcLocator, ODBC_PASSWORD_ENV_VAR, ODBC_USER_ENV_VAR};
pub use settings::{
    expand_env_vars, GeneralSettings, MappingSettings, RunConfig, Settings, SettingsError,
    SourceMode, SourceSettings, TargetSettings, CONFIG_ENV_VAR,
};
