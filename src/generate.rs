//! ClickHouse DDL generation for a table catalog.
//!
//! Each table becomes one block:
//!
//! ```text
//! DROP TABLE IF EXISTS ora_ORDERS;
//! CREATE TABLE ora_ORDERS (`ID` Decimal256(30),`NOTE` String) ENGINE = ODBC('DSN=ORCL', 'SALES', 'ORDERS');
//!
//! ```
//!
//! Blocks follow the catalog's table order and columns keep input order, so
//! the same catalog always produces the same text. Two tables that would share
//! a target name are rejected rather than emitted as two blocks.

use std::collections::HashMap;

use tracing::debug;

use crate::catalog::{TableCatalog, TableDescriptor, TableIdentity};
use crate::sql::{
    ClickHouse, ColumnDef, CreateTable, DdlStatement, DropTable, SqlDialect, TableEngine,
    TokenStream,
};
use crate::typemap::{TypeMapping, UnmappedTypeError};

/// Errors raised while generating DDL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Unmapped(#[from] UnmappedTypeError),

    #[error("tables {first} and {second} both map to target table '{name}'")]
    DuplicateTarget {
        name: String,
        first: String,
        second: String,
    },
}

/// Default prefix for generated table names.
pub const DEFAULT_TABLE_PREFIX: &str = "ora_";

/// Options for DDL generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Prepended to every target table name.
    pub table_prefix: String,

    /// ODBC data source name written into every `ENGINE = ODBC(...)` clause.
    pub source_locator: String,

    /// Only emit tables owned by this owner.
    pub owner_filter: Option<String>,

    /// How target table names are derived.
    pub identity: TableIdentity,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            table_prefix: DEFAULT_TABLE_PREFIX.to_string(),
            source_locator: String::new(),
            owner_filter: None,
            identity: TableIdentity::default(),
        }
    }
}

impl GeneratorOptions {
    pub fn new(source_locator: impl Into<String>) -> Self {
        Self {
            source_locator: source_locator.into(),
            ..Default::default()
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.table_prefix = prefix.into();
        self
    }

    pub fn with_owner_filter(mut self, owner: impl Into<String>) -> Self {
        self.owner_filter = Some(owner.into());
        self
    }

    pub fn with_identity(mut self, identity: TableIdentity) -> Self {
        self.identity = identity;
        self
    }

    /// Target table name for a descriptor.
    pub fn target_name(&self, table: &TableDescriptor<'_>) -> String {
        match self.identity {
            TableIdentity::Name => format!("{}{}", self.table_prefix, table.table_name),
            TableIdentity::OwnerAndName => {
                format!("{}{}_{}", self.table_prefix, table.owner, table.table_name)
            }
        }
    }
}

/// Renders a [`TableCatalog`] as ClickHouse DDL.
#[derive(Debug)]
pub struct DdlGenerator<'m> {
    mapping: &'m TypeMapping,
    options: GeneratorOptions,
    dialect: ClickHouse,
}

impl<'m> DdlGenerator<'m> {
    pub fn new(mapping: &'m TypeMapping, options: GeneratorOptions) -> Self {
        Self {
            mapping,
            options,
            dialect: ClickHouse,
        }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generate the DDL text for every table in `catalog`.
    ///
    /// An empty catalog yields an empty string. Fails with
    /// [`GenerateError::DuplicateTarget`] when two emitted tables get the same
    /// target name, e.g. `A_B.C` and `A.B_C` under owner-and-name identity.
    pub fn generate(&self, catalog: &TableCatalog<'_>) -> Result<String, GenerateError> {
        let mut out = String::new();
        let mut targets: HashMap<String, String> = HashMap::new();

        for table in catalog.descriptors() {
            if table.columns.is_empty() {
                debug!(table = table.table_name, "skipping table without columns");
                continue;
            }
            if let Some(owner) = &self.options.owner_filter {
                if table.owner != owner.as_str() {
                    debug!(
                        table = table.table_name,
                        owner = table.owner,
                        "skipping table outside owner filter"
                    );
                    continue;
                }
            }

            let name = self.options.target_name(table);
            let source = format!("{}.{}", table.owner, table.table_name);
            if let Some(first) = targets.get(&name) {
                return Err(GenerateError::DuplicateTarget {
                    name,
                    first: first.clone(),
                    second: source,
                });
            }

            out.push_str(&self.table_block(table)?);
            targets.insert(name, source);
        }

        Ok(out)
    }

    /// The DROP and CREATE statements for one table, followed by a blank line.
    pub fn table_block(&self, table: &TableDescriptor<'_>) -> Result<String, UnmappedTypeError> {
        let name = self.options.target_name(table);
        let dialect: &dyn SqlDialect = &self.dialect;

        let columns = table
            .columns
            .iter()
            .map(|col| {
                let target = self.mapping.lookup(&col.data_type)?;
                Ok(ColumnDef::new(col.column_name.as_str(), target))
            })
            .collect::<Result<Vec<_>, UnmappedTypeError>>()?;

        let statements: [DdlStatement; 2] = [
            DropTable::new(name.as_str()).if_exists().into(),
            CreateTable::new(name.as_str())
                .columns(columns)
                .engine(TableEngine::odbc(
                    self.options.source_locator.as_str(),
                    table.owner,
                    table.table_name,
                ))
                .into(),
        ];

        let mut ts = TokenStream::new();
        for statement in &statements {
            ts.append(&statement.to_tokens(dialect)).semicolon().newline();
        }
        ts.newline();

        debug!(
            table = %name,
            columns = table.columns.len(),
            dialect = dialect.name(),
            "generated table DDL"
        );
        Ok(ts.serialize(dialect))
    }
}
