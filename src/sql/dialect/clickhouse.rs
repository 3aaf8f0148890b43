//! ClickHouse SQL dialect.
//!
//! ClickHouse differences from ANSI:
//! - Backtick identifier quoting (`` `name` ``)
//! - Every table needs an `ENGINE = ...` clause
//! - The ODBC table engine proxies a remote table:
//!   `ENGINE = ODBC('DSN=<dsn>', '<schema>', '<table>')`

use super::helpers;
use super::{emit_engine_call, SqlDialect};
use crate::sql::ddl::TableEngine;
use crate::sql::token::TokenStream;

/// ClickHouse SQL dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickHouse;

impl SqlDialect for ClickHouse {
    fn name(&self) -> &'static str {
        "clickhouse"
    }

    fn quote_identifier(&self, ident: &str) -> String {
        helpers::quote_backtick(ident)
    }

    fn emit_table_engine(&self, engine: &TableEngine) -> TokenStream {
        match engine {
            TableEngine::Odbc {
                dsn,
                schema,
                table,
            } => emit_engine_call(
                "ODBC",
                &[helpers::odbc_dsn_string(dsn), schema.clone(), table.clone()],
            ),
        }
    }
}
