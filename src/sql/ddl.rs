//! DDL (Data Definition Language) support.
//!
//! This module provides types and builders for the DROP / CREATE TABLE
//! statements emitted for each converted table.
//!
//! # Examples
//!
//! ```ignore
//! use ora2ch::sql::ddl::{ColumnDef, CreateTable, TableEngine};
//! use ora2ch::sql::dialect::ClickHouse;
//!
//! let table = CreateTable::new("ora_users")
//!     .column(ColumnDef::new("ID", "Decimal256(30)"))
//!     .column(ColumnDef::new("NAME", "String"))
//!     .engine(TableEngine::odbc("ORCL", "HR", "USERS"));
//!
//! println!("{}", table.to_sql(&ClickHouse));
//! ```

use super::dialect::SqlDialect;
use super::token::{Token, TokenStream};

/// DDL statement types.
#[derive(Debug, Clone)]
pub enum DdlStatement {
    CreateTable(CreateTable),
    DropTable(DropTable),
}

impl DdlStatement {
    /// Convert to SQL for the given dialect.
    pub fn to_sql(&self, dialect: &dyn SqlDialect) -> String {
        self.to_tokens(dialect).serialize(dialect)
    }

    /// Convert to token stream.
    pub fn to_tokens(&self, dialect: &dyn SqlDialect) -> TokenStream {
        match self {
            DdlStatement::CreateTable(ct) => ct.to_tokens(dialect),
            DdlStatement::DropTable(dt) => dt.to_tokens(dialect),
        }
    }
}

impl From<CreateTable> for DdlStatement {
    fn from(ct: CreateTable) -> Self {
        DdlStatement::CreateTable(ct)
    }
}

impl From<DropTable> for DdlStatement {
    fn from(dt: DropTable) -> Self {
        DdlStatement::DropTable(dt)
    }
}

// ============================================================================
// CREATE TABLE
// ============================================================================

/// CREATE TABLE statement.
#[derive(Debug, Clone)]
#[must_use = "DDL statements have no effect until converted to SQL with to_sql()"]
pub struct CreateTable {
    pub name: String,
    pub columns: Vec<ColumnDef>,
    pub engine: Option<TableEngine>,
}

impl CreateTable {
    /// Create a new CREATE TABLE statement.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            engine: None,
        }
    }

    /// Add a column definition.
    pub fn column(mut self, col: ColumnDef) -> Self {
        self.columns.push(col);
        self
    }

    /// Add multiple column definitions.
    pub fn columns(mut self, cols: impl IntoIterator<Item = ColumnDef>) -> Self {
        self.columns.extend(cols);
        self
    }

    /// Set the table engine.
    pub fn engine(mut self, engine: TableEngine) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Convert to SQL for the given dialect.
    pub fn to_sql(&self, dialect: &dyn SqlDialect) -> String {
        self.to_tokens(dialect).serialize(dialect)
    }

    /// Convert to token stream.
    ///
    /// Column definitions are separated by a bare comma.
    pub fn to_tokens(&self, dialect: &dyn SqlDialect) -> TokenStream {
        let mut ts = TokenStream::new();

        ts.push(Token::Create)
            .space()
            .push(Token::Table)
            .space()
            .push(Token::Name(self.name.clone()))
            .space()
            .lparen();

        let mut first = true;
        for col in &self.columns {
            if !first {
                ts.comma();
            }
            first = false;
            ts.append(&col.to_tokens());
        }

        ts.rparen();

        if let Some(ref engine) = self.engine {
            let clause = dialect.emit_table_engine(engine);
            if !clause.is_empty() {
                ts.space().append(&clause);
            }
        }

        ts
    }
}

// ============================================================================
// Column Definition
// ============================================================================

/// Column definition for CREATE TABLE.
///
/// The data type is the already-resolved target type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    pub data_type: String,
}

impl ColumnDef {
    /// Create a new column definition.
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }

    /// Convert to token stream.
    pub fn to_tokens(&self) -> TokenStream {
        let mut ts = TokenStream::new();
        ts.push(Token::Ident(self.name.clone()))
            .space()
            .push(Token::TypeName(self.data_type.clone()));
        ts
    }
}

// ============================================================================
// Table Engines
// ============================================================================

/// Storage engine bound to a created table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEngine {
    /// Federated table read through an ODBC data source.
    Odbc {
        /// Data source name registered with the ODBC driver manager.
        dsn: String,
        /// Remote schema (Oracle owner).
        schema: String,
        /// Remote table name.
        table: String,
    },
}

impl TableEngine {
    pub fn odbc(
        dsn: impl Into<String>,
        schema: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        TableEngine::Odbc {
            dsn: dsn.into(),
            schema: schema.into(),
            table: table.into(),
        }
    }
}

// ============================================================================
// DROP TABLE
// ============================================================================

/// DROP TABLE statement.
#[derive(Debug, Clone)]
#[must_use = "DDL statements have no effect until converted to SQL with to_sql()"]
pub struct DropTable {
    pub if_exists: bool,
    pub name: String,
}

impl DropTable {
    /// Create a new DROP TABLE statement.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            if_exists: false,
            name: name.into(),
        }
    }

    /// Add IF EXISTS clause.
    pub fn if_exists(mut self) -> Self {
        self.if_exists = true;
        self
    }

    /// Convert to SQL for the given dialect.
    pub fn to_sql(&self, dialect: &dyn SqlDialect) -> String {
        self.to_tokens(dialect).serialize(dialect)
    }

    /// Convert to token stream.
    pub fn to_tokens(&self, dialect: &dyn SqlDialect) -> TokenStream {
        let mut ts = TokenStream::new();
        ts.push(Token::Drop).space().push(Token::Table);

        if self.if_exists && dialect.supports_if_exists() {
            ts.space().push(Token::If).space().push(Token::Exists);
        }

        ts.space().push(Token::Name(self.name.clone()));
        ts
    }
}

// ============================================================================
// Tests
// ============================================================================
