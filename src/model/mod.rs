//! Table and column descriptors.
//!
//! Descriptors are plain values: every pipeline stage takes a descriptor by
//! reference and returns a new one. The type tag is generic so the same shape
//! carries source types (as reported by the catalog) and resolved target
//! types.
//!
//! ```text
//! TableDescriptor<String>  ──[translate]──▶  TableDescriptor<MssqlType>
//! ```

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sql::types::MssqlType;

/// Length of an unbounded column, reported as `-1` by SQL Server catalogs.
pub const UNBOUNDED_LENGTH: u32 = u32::MAX;

/// A table as described by the source catalog.
pub type SourceTable = TableDescriptor<String>;

/// A table whose columns carry resolved SQL Server types.
pub type TargetTable = TableDescriptor<MssqlType>;

/// Errors detected when loading or checking a descriptor.
#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error("Failed to parse table description: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Primary key column '{column}' is not a column of {table}")]
    UnknownPrimaryKey { table: String, column: String },

    #[error("Unique constraint column '{column}' is not a column of {table}")]
    UnknownUniqueColumn { table: String, column: String },

    #[error("Duplicate column '{column}' in {table}")]
    DuplicateColumn { table: String, column: String },
}

/// Whether the described object is a base table or a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TableKind {
    #[default]
    Table,
    View,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Table => write!(f, "TABLE"),
            TableKind::View => write!(f, "VIEW"),
        }
    }
}

/// One column of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor<T> {
    /// Column name.
    pub name: String,
    /// Type tag: the catalog type name for sources, a resolved type for targets.
    pub data_type: T,
    /// Whether NULL values are allowed.
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    /// Maximum length. Byte length for source character types.
    ///
    /// A negative catalog length (`-1`, an unbounded column) is read as
    /// [`UNBOUNDED_LENGTH`] and written back as `-1`.
    #[serde(default, with = "catalog_length")]
    pub max_length: Option<u32>,
    /// Numeric precision.
    #[serde(default)]
    pub precision: Option<u32>,
    /// Numeric scale.
    #[serde(default)]
    pub scale: Option<i32>,
    #[serde(default)]
    pub is_primary_key: bool,
    #[serde(default)]
    pub is_unique: bool,
    /// Default value expression, copied verbatim into the DDL.
    #[serde(default)]
    pub default_value: Option<String>,
}

fn default_nullable() -> bool {
    true
}

mod catalog_length {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::UNBOUNDED_LENGTH;

    pub fn serialize<S: Serializer>(length: &Option<u32>, s: S) -> Result<S::Ok, S::Error> {
        match length {
            Some(UNBOUNDED_LENGTH) => s.serialize_some(&-1i64),
            Some(n) => s.serialize_some(n),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
        match Option::<i64>::deserialize(d)? {
            None => Ok(None),
            Some(n) if n < 0 => Ok(Some(UNBOUNDED_LENGTH)),
            Some(n) => u32::try_from(n)
                .map(Some)
                .map_err(|_| D::Error::custom(format!("column length {} is out of range", n))),
        }
    }
}

impl<T> ColumnDescriptor<T> {
    /// Create a nullable column with no length, precision or default.
    pub fn new(name: impl Into<String>, data_type: T) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: true,
            max_length: None,
            precision: None,
            scale: None,
            is_primary_key: false,
            is_unique: false,
            default_value: None,
        }
    }

    /// Mark the column as NOT NULL.
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Set the maximum length.
    pub fn length(mut self, length: u32) -> Self {
        self.max_length = Some(length);
        self
    }

    /// Set numeric precision and, optionally, scale.
    pub fn numeric(mut self, precision: u32, scale: Option<i32>) -> Self {
        self.precision = Some(precision);
        self.scale = scale;
        self
    }

    /// Flag the column as part of the primary key.
    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    /// Flag the column as unique.
    pub fn unique(mut self) -> Self {
        self.is_unique = true;
        self
    }

    /// Set the default value expression.
    pub fn default_value(mut self, expr: impl Into<String>) -> Self {
        self.default_value = Some(expr.into());
        self
    }

    /// Build a column with a different type tag, keeping every other attribute.
    pub fn with_type<U>(&self, data_type: U) -> ColumnDescriptor<U> {
        ColumnDescriptor {
            name: self.name.clone(),
            data_type,
            nullable: self.nullable,
            max_length: self.max_length,
            precision: self.precision,
            scale: self.scale,
            is_primary_key: self.is_primary_key,
            is_unique: self.is_unique,
            default_value: self.default_value.clone(),
        }
    }
}

/// A table or view with its ordered columns and keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescriptor<T> {
    /// Table or view name.
    pub name: String,
    /// Owning schema.
    pub schema: String,
    #[serde(default)]
    pub kind: TableKind,
    /// Columns in catalog order.
    pub columns: Vec<ColumnDescriptor<T>>,
    /// Primary key column names, in key order.
    #[serde(default)]
    pub primary_keys: Vec<String>,
    /// Unique constraints, one column group each.
    #[serde(default)]
    pub unique_constraints: Vec<Vec<String>>,
    /// Estimated number of rows, when the catalog reports it.
    #[serde(default)]
    pub row_count: Option<u64>,
}

impl<T> TableDescriptor<T> {
    /// Create an empty table descriptor.
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
            kind: TableKind::Table,
            columns: Vec::new(),
            primary_keys: Vec::new(),
            unique_constraints: Vec::new(),
            row_count: None,
        }
    }

    /// Add a column. Columns flagged as primary key are appended to the key list.
    pub fn column(mut self, column: ColumnDescriptor<T>) -> Self {
        if column.is_primary_key && !self.primary_keys.contains(&column.name) {
            self.primary_keys.push(column.name.clone());
        }
        self.columns.push(column);
        self
    }

    /// Add a unique constraint over a group of columns.
    pub fn unique(mut self, columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.unique_constraints
            .push(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Set the estimated row count.
    pub fn row_count(mut self, rows: u64) -> Self {
        self.row_count = Some(rows);
        self
    }

    /// Qualified `schema.name` for messages.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }

    pub fn has_primary_key(&self) -> bool {
        !self.primary_keys.is_empty()
    }

    /// Build a table with the given columns, keeping name, keys and row count.
    pub fn with_columns<U>(&self, columns: Vec<ColumnDescriptor<U>>) -> TableDescriptor<U> {
        TableDescriptor {
            name: self.name.clone(),
            schema: self.schema.clone(),
            kind: self.kind,
            columns,
            primary_keys: self.primary_keys.clone(),
            unique_constraints: self.unique_constraints.clone(),
            row_count: self.row_count,
        }
    }

    /// Check the descriptor invariants.
    ///
    /// Column names must be distinct and every key or unique-constraint column
    /// must name exactly one column. The translation engine assumes these hold
    /// and never repairs a descriptor, so callers check here first.
    pub fn validate(&self) -> Result<(), Vec<DescriptorError>> {
        let mut errors = Vec::new();
        let table = self.qualified_name();

        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.name.as_str()) {
                errors.push(DescriptorError::DuplicateColumn {
                    table: table.clone(),
                    column: column.name.clone(),
                });
            }
        }

        for key in &self.primary_keys {
            if !seen.contains(key.as_str()) {
                errors.push(DescriptorError::UnknownPrimaryKey {
                    table: table.clone(),
                    column: key.clone(),
                });
            }
        }

        for column in self.unique_constraints.iter().flatten() {
            if !seen.contains(column.as_str()) {
                errors.push(DescriptorError::UnknownUniqueColumn {
                    table: table.clone(),
                    column: column.clone(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl SourceTable {
    /// Parse a table description produced by the introspection side.
    pub fn from_json(json: &str) -> Result<Self, DescriptorError> {
        Ok(serde_json::from_str(json)?)
    }
}
