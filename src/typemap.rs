//! Oracle to ClickHouse column type mapping.
//!
//! Keys are Oracle type names in the space-stripped spelling both catalog
//! readers produce (`TIMESTAMP(6) WITH TIME ZONE` becomes
//! `TIMESTAMP(6)WITHTIMEZONE`). Lookup is exact and case-sensitive.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Sentinel key whose value is used for unregistered types.
pub const FALLBACK_KEY: &str = "UNKNOWN";

static ORACLE_TO_CLICKHOUSE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("ANYDATA", "String"),
        ("BINARY_DOUBLE", "String"),
        ("BLOB", "String"),
        ("CHAR", "String"),
        ("CLOB", "String"),
        ("COL_CLS_LIST", "String"),
        ("DATE", "DateTime"),
        ("DS_VARRAY_4_CLOB", "String"),
        ("FLOAT", "Float128"),
        ("LONG", "Int128"),
        ("LONGRAW", "Int128"),
        ("NUMBER", "Decimal256(30)"),
        ("NVARCHAR2", "String"),
        ("RAW", "String"),
        ("ROWID", "Int128"),
        ("SDO_DIM_ARRAY", "String"),
        ("SDO_GEOMETRY", "String"),
        ("SDO_NUMBER_ARRAY", "String"),
        ("SDO_ORGSCL_TYPE", "String"),
        ("SDO_STRING_ARRAY", "String"),
        ("TIMESTAMP(0)", "DateTime"),
        ("TIMESTAMP(3)", "DateTime"),
        ("TIMESTAMP(3)WITHTIMEZONE", "DateTime"),
        ("TIMESTAMP(6)", "DateTime"),
        ("TIMESTAMP(6)WITHTIMEZONE", "DateTime"),
        ("TIMESTAMP(9)", "DateTime"),
        ("UNDEFINED", "String"),
        ("VARCHAR2", "String"),
        ("XMLTYPE", "String"),
        (FALLBACK_KEY, "String"),
    ])
});

/// What to do with a source type the table does not register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmappedPolicy {
    /// Use the target type registered for [`FALLBACK_KEY`].
    #[default]
    Fallback,
    /// Reject the type.
    Fail,
}

/// A source type with no registered target type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no ClickHouse type registered for Oracle type '{data_type}'")]
pub struct UnmappedTypeError {
    pub data_type: String,
}

/// Read-only view over the embedded type table.
#[derive(Debug, Clone, Copy)]
pub struct TypeMapping {
    table: &'static HashMap<&'static str, &'static str>,
    policy: UnmappedPolicy,
}

impl Default for TypeMapping {
    fn default() -> Self {
        Self::oracle_to_clickhouse(UnmappedPolicy::default())
    }
}

impl TypeMapping {
    /// The built-in Oracle to ClickHouse table.
    pub fn oracle_to_clickhouse(policy: UnmappedPolicy) -> Self {
        Self {
            table: &*ORACLE_TO_CLICKHOUSE,
            policy,
        }
    }

    pub fn policy(&self) -> UnmappedPolicy {
        self.policy
    }

    /// Resolve an Oracle type to its ClickHouse type.
    pub fn lookup(&self, data_type: &str) -> Result<&'static str, UnmappedTypeError> {
        if let Some(target) = self.table.get(data_type).copied() {
            return Ok(target);
        }

        let unmapped = || UnmappedTypeError {
            data_type: data_type.to_string(),
        };
        match self.policy {
            UnmappedPolicy::Fail => Err(unmapped()),
            UnmappedPolicy::Fallback => {
                let target = self.table.get(FALLBACK_KEY).copied().ok_or_else(unmapped)?;
                warn!(data_type, clickhouse_type = target, "unmapped Oracle type, using fallback");
                Ok(target)
            }
        }
    }

    pub fn contains(&self, data_type: &str) -> bool {
        self.table.contains_key(data_type)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Registered pairs sorted by source type.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        let mut pairs: Vec<_> = self.table.iter().map(|(k, v)| (*k, *v)).collect();
        pairs.sort_unstable();
        pairs.into_iter()
    }
}
