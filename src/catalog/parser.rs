//! Parser for bordered ASCII table dumps of `ALL_TAB_COLUMNS`.
//!
//! The dump looks like the output of an interactive SQL client:
//!
//! ```text
//! +-------------------------------------------------------------+
//! | SELECT * FROM all_tab_columns                               |
//! +-------------------------------------------------------------+
//! +-------+------------+-------------+-----------+ ... +--------+
//! | OWNER | TABLE_NAME | COLUMN_NAME | DATA_TYPE | ... |NULLABLE|
//! +-------+------------+-------------+-----------+ ... +--------+
//! | HR    | EMP        | ID          | NUMBER    | ... | N      |
//! +-------+------------+-------------+-----------+ ... +--------+
//! ```
//!
//! Border lines start with `+`. Data rows are the non-border lines from the
//! fourth border onwards. Spaces are stripped from a data row before it is
//! split on `|`, so position 0 is always the empty text before the leading
//! pipe and field `i` of [`CATALOG_LAYOUT`](super::CATALOG_LAYOUT) sits at
//! position `i + 1`.

use tracing::debug;

use super::{ColumnRecord, CATALOG_ROW_WIDTH};

/// Lines starting with this character are borders.
pub const BORDER_PREFIX: char = '+';

/// Border count at which the data region begins.
pub const DATA_REGION_BORDER: usize = 4;

/// Positions a data row must have after splitting: the leading empty text
/// plus every column up to `NULLABLE`.
///
/// The empty text after a closing `|` counts as a position. A row that stops
/// after `DATA_SCALE` but ends with `|` therefore passes, and its missing
/// `NULLABLE` reads as not nullable.
pub const MIN_ROW_FIELDS: usize = CATALOG_ROW_WIDTH + 1;

const MALFORMED_ROW: &str = "malformed row";

/// A data row that does not carry a full catalog record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{reason} at line index {line}")]
pub struct ParseError {
    /// 0-based index of the offending line in the input.
    pub line: usize,
    pub reason: String,
}

impl ParseError {
    fn malformed(line: usize) -> Self {
        Self {
            line,
            reason: MALFORMED_ROW.to_string(),
        }
    }
}

/// Parse a catalog dump into column records, in input order.
///
/// Input without a data region (empty, or fewer than four borders) yields an
/// empty vector. An empty or short row inside the data region is an error.
pub fn parse_dump(content: &str) -> Result<Vec<ColumnRecord>, ParseError> {
    let content = content.strip_suffix('\n').unwrap_or(content);

    let mut borders = 0usize;
    let mut records = Vec::new();

    for (index, raw) in content.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if line.starts_with(BORDER_PREFIX) {
            borders += 1;
            continue;
        }
        if borders < DATA_REGION_BORDER {
            continue;
        }

        records.push(parse_row(line, index)?);
    }

    debug!(borders, records = records.len(), "parsed catalog dump");
    Ok(records)
}

fn parse_row(line: &str, index: usize) -> Result<ColumnRecord, ParseError> {
    if line.is_empty() {
        return Err(ParseError::malformed(index));
    }

    let stripped = line.replace(' ', "");
    let fields: Vec<&str> = stripped.split('|').collect();
    if fields.len() < MIN_ROW_FIELDS {
        return Err(ParseError::malformed(index));
    }

    Ok(ColumnRecord::from_layout(|column| fields.get(column + 1).copied()))
}
