//! Grouping of column records into distinct tables.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ColumnRecord;

/// What makes two column records belong to the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableIdentity {
    /// Table name alone. Same-named tables of different owners collapse into
    /// one table owned by whichever owner appears first.
    #[default]
    Name,
    /// Owner and table name.
    OwnerAndName,
}

/// One distinct source table and its columns in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDescriptor<'a> {
    /// Owner of the first record seen for this table.
    pub owner: &'a str,
    pub table_name: &'a str,
    pub columns: Vec<&'a ColumnRecord>,
}

/// Distinct tables of a catalog, in first-seen order.
#[derive(Debug, Clone)]
pub struct TableCatalog<'a> {
    identity: TableIdentity,
    tables: Vec<TableDescriptor<'a>>,
}

impl<'a> TableCatalog<'a> {
    /// Group `records` into tables in a single pass.
    pub fn build(records: &'a [ColumnRecord], identity: TableIdentity) -> Self {
        let mut slots: HashMap<(&'a str, &'a str), usize> = HashMap::new();
        let mut tables: Vec<TableDescriptor<'a>> = Vec::new();

        for record in records {
            let owner_key = match identity {
                TableIdentity::Name => "",
                TableIdentity::OwnerAndName => record.owner.as_str(),
            };
            let key = (owner_key, record.table_name.as_str());

            let slot = *slots.entry(key).or_insert_with(|| {
                debug!(owner = %record.owner, table = %record.table_name, "new table");
                tables.push(TableDescriptor {
                    owner: &record.owner,
                    table_name: &record.table_name,
                    columns: Vec::new(),
                });
                tables.len() - 1
            });
            tables[slot].columns.push(record);
        }

        Self { identity, tables }
    }

    pub fn identity(&self) -> TableIdentity {
        self.identity
    }

    /// Tables in the order their identity was first seen.
    pub fn descriptors(&self) -> &[TableDescriptor<'a>] {
        &self.tables
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn column_count(&self) -> usize {
        self.tables.iter().map(|t| t.columns.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
