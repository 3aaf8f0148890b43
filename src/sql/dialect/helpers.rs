//! Shared helper functions for SQL dialect implementations.
//!
//! This module provides reusable building blocks that dialects can compose
//! to implement the `SqlDialect` trait with minimal duplication.

// =============================================================================
// Identifier Quoting
// =============================================================================

/// Quote identifier with backticks.
/// Used by: ClickHouse
pub fn quote_backtick(ident: &str) -> String {
    format!("`{}`", ident.replace('`', "``"))
}

// =============================================================================
// String Quoting
// =============================================================================

/// Quote string with single quotes (standard SQL).
pub fn quote_string_single(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

// =============================================================================
// Table Engines
// =============================================================================

/// Render an ODBC connection string of the form `DSN=<name>`.
///
/// Only the data source name goes into generated DDL; credentials are
/// resolved by the engine host from its own odbc.ini.
pub fn odbc_dsn_string(dsn: &str) -> String {
    format!("DSN={}", dsn)
}
