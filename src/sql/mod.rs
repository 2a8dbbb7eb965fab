//! SQL generation module.
//!
//! - [`types`] - SQL Server target types
//! - [`token`] - Token types for SQL generation
//! - [`dialect`] - SQL dialect implementations
//! - [`ddl`] - CREATE TABLE / CREATE VIEW builders and the DDL generator

pub mod ddl;
pub mod dialect;
pub mod token;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use ddl::{
    generate_ddl, ColumnDef, CreateTable, CreateView, DdlOptions, DdlOutput, DefaultClause,
    TableConstraint,
};
pub use dialect::{SqlDialect, TSql};
pub use token::{Token, TokenStream};
pub use types::MssqlType;
