//! Catalog sources: where column records come from.
//!
//! [`CatalogSource`] hides whether records were parsed from a dump file or
//! fetched live. The live path delegates connection handling and the query
//! itself to a [`CatalogConnection`], which owns its own lifecycle.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::parser::{parse_dump, ParseError};
use super::{ColumnRecord, CATALOG_ROW_WIDTH};

/// Catalog view queried in live mode.
pub const DEFAULT_CATALOG_VIEW: &str = "all_tab_columns";

/// One raw result row as text; `None` is SQL NULL.
pub type CatalogRow = Vec<Option<String>>;

/// Errors raised while obtaining catalog records.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog connection failed: {0}")]
    Connection(String),

    #[error("catalog query failed: {0}")]
    Query(String),

    #[error("failed to read catalog dump '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse catalog dump: {0}")]
    Parse(#[from] ParseError),
}

/// Anything that yields the ordered column records of a catalog.
pub trait CatalogSource {
    /// Human-readable origin for logs.
    fn describe(&self) -> String;

    /// Read every column record, in catalog order.
    fn read_columns(&mut self) -> Result<Vec<ColumnRecord>, CatalogError>;
}

/// External collaborator that runs catalog queries.
pub trait CatalogConnection {
    /// Run `sql` and return every row as text.
    fn fetch_rows(&mut self, sql: &str) -> Result<Vec<CatalogRow>, CatalogError>;
}

// ============================================================================
// File mode
// ============================================================================

/// A bordered table dump on disk.
#[derive(Debug, Clone)]
pub struct DumpFile {
    path: PathBuf,
}

impl DumpFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for DumpFile {
    fn describe(&self) -> String {
        format!("dump file {}", self.path.display())
    }

    fn read_columns(&mut self) -> Result<Vec<ColumnRecord>, CatalogError> {
        let content = fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(bytes = content.len(), path = %self.path.display(), "read catalog dump");

        Ok(parse_dump(&content)?)
    }
}

// ============================================================================
// Live mode
// ============================================================================

/// Catalog read through a live connection with `SELECT * FROM <view>`.
#[derive(Debug)]
pub struct LiveCatalog<C> {
    connection: C,
    view: String,
}

impl<C: CatalogConnection> LiveCatalog<C> {
    pub fn new(connection: C) -> Self {
        Self {
            connection,
            view: DEFAULT_CATALOG_VIEW.to_string(),
        }
    }

    /// Query a different catalog view (e.g. `dba_tab_columns`).
    pub fn with_view(mut self, view: impl Into<String>) -> Self {
        self.view = view.into();
        self
    }

    /// The query sent to the connection.
    pub fn query(&self) -> String {
        format!("SELECT * FROM {}", self.view)
    }
}

impl<C: CatalogConnection> CatalogSource for LiveCatalog<C> {
    fn describe(&self) -> String {
        format!("live catalog view {}", self.view)
    }

    fn read_columns(&mut self) -> Result<Vec<ColumnRecord>, CatalogError> {
        let sql = self.query();
        let rows = self.connection.fetch_rows(&sql)?;
        info!(rows = rows.len(), view = %self.view, "fetched catalog rows");

        rows.iter()
            .enumerate()
            .map(|(index, row)| map_catalog_row(index, row))
            .collect()
    }
}

/// Map one `ALL_TAB_COLUMNS` row onto a [`ColumnRecord`].
///
/// NULL counts read as zero. Spaces are removed from the data type so live
/// and dump records share the same type spelling.
pub fn map_catalog_row(
    index: usize,
    row: &[Option<String>],
) -> Result<ColumnRecord, CatalogError> {
    if row.len() < CATALOG_ROW_WIDTH {
        return Err(CatalogError::Query(format!(
            "row {} has {} columns, expected at least {}",
            index,
            row.len(),
            CATALOG_ROW_WIDTH
        )));
    }

    let mut record =
        ColumnRecord::from_layout(|column| row.get(column).and_then(|v| v.as_deref()));
    record.data_type.retain(|c| c != ' ');
    Ok(record)
}
