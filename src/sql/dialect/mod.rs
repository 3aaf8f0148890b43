//! SQL Dialect definitions and formatting rules.
//!
//! Generated DDL targets ClickHouse, but rendering still goes through the
//! `SqlDialect` trait so the DDL builders never hard-code quoting or
//! engine syntax:
//!
//! - Identifier quoting: `` ` `` (ClickHouse)
//! - String literals: single quotes with `''` escaping
//! - `DROP TABLE IF EXISTS` support
//! - `ENGINE = ...` clauses on CREATE TABLE
//!
//! # Usage
//!
//! ```ignore
//! use ora2ch::sql::dialect::{ClickHouse, SqlDialect};
//!
//! let quoted = ClickHouse.quote_identifier("OWNER");  // `OWNER`
//! ```

mod clickhouse;
pub mod helpers;

pub use clickhouse::ClickHouse;

use super::ddl::TableEngine;
use super::token::{Token, TokenStream};

/// SQL dialect trait - defines how DDL constructs are rendered.
///
/// The default implementations follow ANSI SQL where possible.
pub trait SqlDialect: std::fmt::Debug {
    /// Dialect name for display/logging.
    fn name(&self) -> &'static str;

    /// Quote an identifier (column name).
    fn quote_identifier(&self, ident: &str) -> String;

    /// Quote a string literal.
    ///
    /// Single quotes with `''` for escaping.
    fn quote_string(&self, s: &str) -> String {
        helpers::quote_string_single(s)
    }

    /// Whether `DROP TABLE IF EXISTS` is accepted.
    fn supports_if_exists(&self) -> bool {
        true
    }

    /// Emit the `ENGINE = ...` clause for a table engine.
    ///
    /// Returns an empty stream for dialects without table engines.
    fn emit_table_engine(&self, _engine: &TableEngine) -> TokenStream {
        TokenStream::new()
    }
}

/// Emit `ENGINE = <name>(<args>)` with comma-space separated string arguments.
pub(crate) fn emit_engine_call(name: &str, args: &[String]) -> TokenStream {
    let mut ts = TokenStream::new();
    ts.push(Token::Engine)
        .space()
        .push(Token::Eq)
        .space()
        .push(Token::Name(name.to_string()))
        .lparen();

    let mut first = true;
    for arg in args {
        if !first {
            ts.comma().space();
        }
        first = false;
        ts.push(Token::LitString(arg.clone()));
    }

    ts.rparen();
    ts
}
