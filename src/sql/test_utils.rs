//! Test utilities for SQL emission validation.
//!
//! Provides helpers for validating that emitted DDL is syntactically correct
//! T-SQL using sqlparser-rs for roundtrip validation.

use sqlparser::dialect::MsSqlDialect;
use sqlparser::parser::Parser;

/// Validates that a SQL string parses as T-SQL.
///
/// # Example
///
/// ```ignore
/// use crate::sql::test_utils::validate_tsql;
///
/// validate_tsql("CREATE TABLE [dbo].[t] ([id] INT)").unwrap();
/// ```
pub fn validate_tsql(sql: &str) -> Result<(), String> {
    Parser::parse_sql(&MsSqlDialect {}, sql)
        .map(|_| ())
        .map_err(|e| format!("Invalid T-SQL: {}\nSQL: {}", e, sql))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid_sql() {
        validate_tsql("SELECT [id] FROM [dbo].[users]").unwrap();
    }

    #[test]
    fn test_validate_invalid_sql() {
        assert!(validate_tsql("SELEC * FORM users").is_err());
    }
}
