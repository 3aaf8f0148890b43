//! # ora2ch
//!
//! Generates ClickHouse DDL for Oracle tables reached through ODBC.
//!
//! ## Architecture
//!
//! The input is Oracle's column catalog (`ALL_TAB_COLUMNS`), read from a
//! bordered table dump or queried live. Each distinct table becomes a
//! `DROP TABLE IF EXISTS` plus a `CREATE TABLE ... ENGINE = ODBC(...)`:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │        Catalog (dump file or live ODBC query)            │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [catalog]
//! ┌─────────────────────────────────────────────────────────┐
//! │           ColumnRecords → TableCatalog                   │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [generate + typemap]
//! ┌─────────────────────────────────────────────────────────┐
//! │          ClickHouse DDL (sql tokens, dialect)            │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [output]
//! ┌─────────────────────────────────────────────────────────┐
//! │              File (durable append) or stdout             │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod config;
pub mod convert;
pub mod generate;
pub mod output;
pub mod sql;
pub mod typemap;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::catalog::{
        parse_dump, CatalogSource, ColumnRecord, DumpFile, LiveCatalog, TableCatalog,
        TableIdentity,
    };
    pub use crate::config::{RunConfig, Settings};
    pub use crate::convert::{convert, convert_records, run, ConvertError, ConvertOutput};
    pub use crate::generate::{DdlGenerator, GenerateError, GeneratorOptions};
    pub use crate::output::OutputTarget;
    pub use crate::typemap::{TypeMapping, UnmappedPolicy};
}

pub use convert::{ConvertError, ConvertResult};
