//! SQL dialect definitions and formatting rules.
//!
//! The DDL generator builds dialect-agnostic token streams; a `SqlDialect`
//! decides how identifiers are quoted, how column types are written and how
//! statements end.
//!
//! # Usage
//!
//! ```ignore
//! use schemashift::sql::dialect::{SqlDialect, TSql};
//!
//! let quoted = TSql.quote_identifier("user");  // [user]
//! ```

pub mod helpers;
mod tsql;

pub use tsql::TSql;

use crate::model::ColumnDescriptor;
use crate::sql::types::MssqlType;

/// SQL dialect trait - defines how DDL constructs are rendered.
pub trait SqlDialect: std::fmt::Debug {
    /// Quote an identifier (table, column, schema, constraint name).
    fn quote_identifier(&self, ident: &str) -> String;

    /// Render a column's data type including its length or precision.
    fn emit_column_type(&self, column: &ColumnDescriptor<MssqlType>) -> String;

    /// Text that ends a statement.
    fn statement_terminator(&self) -> &'static str {
        ";"
    }
}
