//! ODBC connection configuration.
//!
//! Credentials are read from environment variables and never from the config
//! file:
//! - `ORA2CH_ODBC_USER`: Username (optional)
//! - `ORA2CH_ODBC_PASSWORD`: Password (optional)

use std::env;

pub const ODBC_USER_ENV_VAR: &str = "ORA2CH_ODBC_USER";
pub const ODBC_PASSWORD_ENV_VAR: &str = "ORA2CH_ODBC_PASSWORD";

/// How to reach the source catalog through the ODBC driver manager.
#[derive(Clone, PartialEq, Eq)]
pub struct OdbcLocator {
    /// Data source name.
    pub dsn: String,
    /// Username (optional, the DSN may carry its own).
    pub username: Option<String>,
    /// Password (optional).
    pub password: Option<String>,
}

impl OdbcLocator {
    pub fn new(dsn: impl Into<String>) -> Self {
        Self {
            dsn: dsn.into(),
            username: None,
            password: None,
        }
    }

    /// Fill in username and password from the environment.
    pub fn with_credentials_from_env(mut self) -> Self {
        self.username = env::var(ODBC_USER_ENV_VAR).ok();
        self.password = env::var(ODBC_PASSWORD_ENV_VAR).ok();
        self
    }

    /// Build the connection string for the driver manager.
    pub fn connection_string(&self) -> String {
        let mut parts = vec![format!("DSN={}", self.dsn)];

        if let Some(user) = &self.username {
            parts.push(format!("UID={}", user));
        }
        if let Some(pass) = &self.password {
            parts.push(format!("PWD={}", pass));
        }

        parts.join(";")
    }

    /// Connection string with the password masked, for logs.
    pub fn redacted(&self) -> String {
        let mut masked = self.clone();
        if masked.password.is_some() {
            masked.password = Some("***".to_string());
        }
        masked.connection_string()
    }
}

impl std::fmt::Debug for OdbcLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OdbcLocator")
            .field("dsn", &self.dsn)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}
