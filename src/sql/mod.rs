//! SQL generation module.
//!
//! This module provides a small type-safe DDL builder for the ClickHouse
//! tables generated from an Oracle catalog. It includes:
//!
//! - [`ddl`] - DROP TABLE / CREATE TABLE builders and table engines
//! - [`token`] - Token types for SQL generation
//! - [`dialect`] - SQL dialect implementations

pub mod ddl;
pub mod dialect;
pub mod token;


pub use dialect::{ClickHouse, SqlDialect};
pub use token::{Token, TokenStream};

// Re-export DDL types
pub use ddl::{ColumnDef, CreateTable, DdlStatement, DropTable, TableEngine};
