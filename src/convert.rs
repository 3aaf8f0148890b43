//! End-to-end conversion from an Oracle catalog to ClickHouse DDL.
//!
//! ```text
//! Catalog source → ColumnRecords → TableCatalog → DdlGenerator → Output
//! ```
//!
//! # Example
//!
//! ```ignore
//! use ora2ch::convert::convert_records;
//! use ora2ch::generate::GeneratorOptions;
//! use ora2ch::typemap::TypeMapping;
//!
//! let records = ora2ch::catalog::parse_dump(&dump)?;
//! let ddl = convert_records(&records, &TypeMapping::default(), &GeneratorOptions::new("mydsn"))?;
//! print!("{}", ddl);
//! ```

use tracing::info;

use crate::catalog::{CatalogError, CatalogSource, ColumnRecord, DumpFile, TableCatalog};
use crate::config::{RunConfig, SettingsError, SourceMode};
use crate::generate::{DdlGenerator, GenerateError, GeneratorOptions};
use crate::output::{write_output, OutputError};
use crate::typemap::TypeMapping;

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can end a conversion run.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Configuration error: {0}")]
    Config(#[from] SettingsError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Mapping error: {0}")]
    Mapping(#[from] GenerateError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type ConvertResult<T> = Result<T, ConvertError>;

// ============================================================================
// Result Types
// ============================================================================

/// Result of converting a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOutput {
    /// The generated DDL text.
    pub ddl: String,

    /// Distinct tables in the catalog.
    pub tables: usize,

    /// Column records read.
    pub columns: usize,
}

// ============================================================================
// Conversion Functions
// ============================================================================

/// Convert already-read column records to DDL text.
pub fn convert_records(
    records: &[ColumnRecord],
    mapping: &TypeMapping,
    options: &GeneratorOptions,
) -> ConvertResult<String> {
    let catalog = TableCatalog::build(records, options.identity);
    let ddl = DdlGenerator::new(mapping, options.clone()).generate(&catalog)?;
    Ok(ddl)
}

/// Read every record from `source` and convert it.
pub fn convert(
    source: &mut dyn CatalogSource,
    mapping: &TypeMapping,
    options: &GeneratorOptions,
) -> ConvertResult<ConvertOutput> {
    info!(source = %source.describe(), "reading catalog");
    let records = source.read_columns()?;

    let catalog = TableCatalog::build(&records, options.identity);
    info!(
        columns = records.len(),
        tables = catalog.table_count(),
        "catalog loaded"
    );

    let ddl = DdlGenerator::new(mapping, options.clone()).generate(&catalog)?;

    Ok(ConvertOutput {
        ddl,
        tables: catalog.table_count(),
        columns: records.len(),
    })
}

/// Run one configured conversion: read, generate, then write the output in a
/// single append.
///
/// Nothing is written when reading or generation fails.
pub fn run(config: &RunConfig) -> ConvertResult<ConvertOutput> {
    let mapping = TypeMapping::oracle_to_clickhouse(config.unmapped);
    let mut source = open_source(&config.source)?;

    let output = convert(source.as_mut(), &mapping, &config.generator)?;
    write_output(&config.output, &output.ddl)?;

    info!(
        tables = output.tables,
        output = %config.output,
        "conversion complete"
    );
    Ok(output)
}

/// Open the catalog source a run reads from.
pub fn open_source(mode: &SourceMode) -> Result<Box<dyn CatalogSource>, CatalogError> {
    match mode {
        SourceMode::File(path) => Ok(Box::new(DumpFile::new(path.clone()))),
        SourceMode::Live {
            locator,
            catalog_view,
        } => open_live(locator, catalog_view),
    }
}

#[cfg(feature = "odbc")]
fn open_live(
    locator: &crate::config::OdbcLocator,
    catalog_view: &str,
) -> Result<Box<dyn CatalogSource>, CatalogError> {
    use crate::catalog::{odbc::OdbcConnection, LiveCatalog};

    let connection = OdbcConnection::new(locator)?;
    Ok(Box::new(LiveCatalog::new(connection).with_view(catalog_view)))
}

#[cfg(not(feature = "odbc"))]
fn open_live(
    locator: &crate::config::OdbcLocator,
    _catalog_view: &str,
) -> Result<Box<dyn CatalogSource>, CatalogError> {
    Err(CatalogError::Connection(format!(
        "cannot reach '{}': built without the `odbc` feature",
        locator.dsn
    )))
}
