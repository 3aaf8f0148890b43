//! ODBC-backed catalog connection.
//!
//! Only compiled with the `odbc` feature; linking needs an ODBC driver
//! manager (unixODBC on Linux).

use odbc_api::{buffers::TextRowSet, ConnectionOptions, Cursor, Environment, ResultSetMetadata};
use tracing::{debug, info};

use super::reader::{CatalogConnection, CatalogError, CatalogRow};
use crate::config::OdbcLocator;

/// Rows fetched per round trip.
const BATCH_SIZE: usize = 1000;

/// Longest text value fetched per cell.
const MAX_TEXT_LEN: usize = 4096;

/// Catalog connection through the ODBC driver manager.
pub struct OdbcConnection {
    env: Environment,
    connection_string: String,
    redacted: String,
}

impl OdbcConnection {
    /// Create the ODBC environment for `locator`.
    ///
    /// The connection itself is opened per query and closed when the query's
    /// rows have been read.
    pub fn new(locator: &OdbcLocator) -> Result<Self, CatalogError> {
        let env = Environment::new().map_err(|e| {
            CatalogError::Connection(format!("failed to create ODBC environment: {}", e))
        })?;

        Ok(Self {
            env,
            connection_string: locator.connection_string(),
            redacted: locator.redacted(),
        })
    }
}

impl CatalogConnection for OdbcConnection {
    fn fetch_rows(&mut self, sql: &str) -> Result<Vec<CatalogRow>, CatalogError> {
        info!(connection = %self.redacted, "connecting to catalog via ODBC");
        let conn = self
            .env
            .connect_with_connection_string(&self.connection_string, ConnectionOptions::default())
            .map_err(|e| CatalogError::Connection(format!("{} ({})", e, self.redacted)))?;
        debug!("ODBC connection established");

        let mut rows = Vec::new();

        if let Some(mut cursor) = conn
            .execute(sql, ())
            .map_err(|e| CatalogError::Query(format!("{} - SQL: {}", e, sql)))?
        {
            let num_cols = cursor
                .num_result_cols()
                .map_err(|e| CatalogError::Query(format!("failed to get column count: {}", e)))?
                as usize;

            let mut buffers = TextRowSet::for_cursor(BATCH_SIZE, &mut cursor, Some(MAX_TEXT_LEN))
                .map_err(|e| CatalogError::Query(format!("failed to create row buffer: {}", e)))?;

            let mut row_cursor = cursor
                .bind_buffer(&mut buffers)
                .map_err(|e| CatalogError::Query(format!("failed to bind buffer: {}", e)))?;

            while let Some(batch) = row_cursor
                .fetch()
                .map_err(|e| CatalogError::Query(format!("failed to fetch rows: {}", e)))?
            {
                for row_idx in 0..batch.num_rows() {
                    let mut row = Vec::with_capacity(num_cols);
                    for col_idx in 0..num_cols {
                        let value = batch
                            .at(col_idx, row_idx)
                            .map(|bytes| String::from_utf8_lossy(bytes).to_string());
                        row.push(value);
                    }
                    rows.push(row);
                }
            }
        }

        debug!(rows = rows.len(), "ODBC query complete");
        Ok(rows)
    }
}
