//! Oracle column catalog ingestion.
//!
//! A catalog is the column listing of `ALL_TAB_COLUMNS`, obtained either from
//! a bordered ASCII table dump or from a live ODBC query. Both routes yield the
//! same ordered sequence of [`ColumnRecord`]s:
//!
//! ```text
//! ┌──────────────────────┐      ┌──────────────────────┐
//! │  DumpFile            │      │  LiveCatalog         │
//! │  (parser::parse_dump)│      │  (CatalogConnection) │
//! └──────────┬───────────┘      └──────────┬───────────┘
//!            │        CATALOG_LAYOUT       │
//!            └──────────────┬──────────────┘
//!                           ▼
//!                  Vec<ColumnRecord>
//!                           │
//!                           ▼ [TableCatalog::build]
//!                  Vec<TableDescriptor>
//! ```

#[cfg(feature = "odbc")]
pub mod odbc;
pub mod parser;
pub mod reader;
pub mod table;

pub use parser::{parse_dump, ParseError};
pub use reader::{
    map_catalog_row, CatalogConnection, CatalogError, CatalogRow, CatalogSource, DumpFile,
    LiveCatalog, DEFAULT_CATALOG_VIEW,
};
pub use table::{TableCatalog, TableDescriptor, TableIdentity};

use serde::Serialize;

/// One physical column of one source table.
///
/// Records are built once by a catalog adapter and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnRecord {
    pub owner: String,
    pub table_name: String,
    pub column_name: String,
    /// Oracle type name, spaces removed (`TIMESTAMP(6)WITHTIMEZONE`).
    pub data_type: String,
    pub data_length: u64,
    pub data_precision: u64,
    pub nullable: bool,
}

/// A whitelisted `ALL_TAB_COLUMNS` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogField {
    Owner,
    TableName,
    ColumnName,
    DataType,
    DataLength,
    DataPrecision,
    Nullable,
}

/// Column index of every whitelisted field in an `ALL_TAB_COLUMNS` row.
///
/// Columns 4 (`DATA_TYPE_MOD`), 5 (`DATA_TYPE_OWNER`) and 8 (`DATA_SCALE`)
/// and everything past `NULLABLE` are ignored.
pub const CATALOG_LAYOUT: &[(CatalogField, usize)] = &[
    (CatalogField::Owner, 0),
    (CatalogField::TableName, 1),
    (CatalogField::ColumnName, 2),
    (CatalogField::DataType, 3),
    (CatalogField::DataLength, 6),
    (CatalogField::DataPrecision, 7),
    (CatalogField::Nullable, 9),
];

/// Number of row columns a record needs, up to and including `NULLABLE`.
pub const CATALOG_ROW_WIDTH: usize = 10;

impl CatalogField {
    fn apply(self, record: &mut ColumnRecord, value: &str) {
        match self {
            CatalogField::Owner => record.owner = value.to_string(),
            CatalogField::TableName => record.table_name = value.to_string(),
            CatalogField::ColumnName => record.column_name = value.to_string(),
            CatalogField::DataType => record.data_type = value.to_string(),
            CatalogField::DataLength => record.data_length = parse_count(value),
            CatalogField::DataPrecision => record.data_precision = parse_count(value),
            CatalogField::Nullable => record.nullable = value == "Y",
        }
    }
}

impl ColumnRecord {
    /// Build a record by reading each [`CATALOG_LAYOUT`] field through `field`.
    ///
    /// `field` receives the row column index; a missing value is read as empty.
    pub fn from_layout<'a, F>(field: F) -> Self
    where
        F: Fn(usize) -> Option<&'a str>,
    {
        let mut record = ColumnRecord::default();
        for (kind, index) in CATALOG_LAYOUT {
            kind.apply(&mut record, field(*index).unwrap_or(""));
        }
        record
    }
}

/// Unparsable counts read as zero.
fn parse_count(value: &str) -> u64 {
    value.trim().parse().unwrap_or(0)
}
