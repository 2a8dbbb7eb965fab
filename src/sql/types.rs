//! SQL Server column types.
//!
//! This is the closed set of target types the translator produces. Anything
//! the translator does not recognise is carried verbatim in
//! [`MssqlType::Other`] so it can still be emitted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Largest explicit length for NVARCHAR / NCHAR before `(MAX)` is required.
pub const MAX_UNICODE_LENGTH: u32 = 4000;

/// Largest explicit length for VARBINARY before `(MAX)` is required.
pub const MAX_BINARY_LENGTH: u32 = 8000;

/// A SQL Server data type, without its length/precision arguments.
///
/// Lengths, precision and scale live on the column; this enum only names the
/// type. The two `*Max` variants are the large-object forms that never take
/// a length.
///
/// # Examples
///
/// ```ignore
/// use schemashift::sql::types::MssqlType;
///
/// assert_eq!(MssqlType::parse("nvarchar"), MssqlType::NVarchar);
/// assert_eq!(MssqlType::parse("NVARCHAR(MAX)"), MssqlType::NVarcharMax);
/// assert_eq!(MssqlType::parse("money"), MssqlType::Other("money".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum MssqlType {
    /// Variable-length Unicode string, `NVARCHAR(n)`.
    NVarchar,
    /// Fixed-length Unicode string, `NCHAR(n)`.
    NChar,
    /// Unbounded Unicode string, `NVARCHAR(MAX)`.
    NVarcharMax,
    /// Variable-length binary, `VARBINARY(n)`.
    VarBinary,
    /// Unbounded binary, `VARBINARY(MAX)`.
    VarBinaryMax,
    /// 32-bit integer.
    Int,
    /// 64-bit integer.
    BigInt,
    /// Fixed-point decimal, `DECIMAL(p,s)`.
    Decimal,
    /// 8-byte floating point.
    Float,
    /// 4-byte floating point.
    Real,
    DateTime2,
    DateTimeOffset,
    UniqueIdentifier,
    Xml,
    /// Unrecognised type name, emitted as given.
    Other(String),
}

impl MssqlType {
    /// Resolve a type name. Unknown names become [`MssqlType::Other`].
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_uppercase().as_str() {
            "NVARCHAR" => MssqlType::NVarchar,
            "NCHAR" => MssqlType::NChar,
            "NVARCHAR(MAX)" => MssqlType::NVarcharMax,
            "VARBINARY" => MssqlType::VarBinary,
            "VARBINARY(MAX)" => MssqlType::VarBinaryMax,
            "INT" | "INTEGER" => MssqlType::Int,
            "BIGINT" => MssqlType::BigInt,
            "DECIMAL" | "NUMERIC" => MssqlType::Decimal,
            "FLOAT" => MssqlType::Float,
            "REAL" => MssqlType::Real,
            "DATETIME2" => MssqlType::DateTime2,
            "DATETIMEOFFSET" => MssqlType::DateTimeOffset,
            "UNIQUEIDENTIFIER" => MssqlType::UniqueIdentifier,
            "XML" => MssqlType::Xml,
            _ => MssqlType::Other(trimmed.to_string()),
        }
    }

    /// The type name as written in DDL, without arguments.
    pub fn name(&self) -> &str {
        match self {
            MssqlType::NVarchar => "NVARCHAR",
            MssqlType::NChar => "NCHAR",
            MssqlType::NVarcharMax => "NVARCHAR(MAX)",
            MssqlType::VarBinary => "VARBINARY",
            MssqlType::VarBinaryMax => "VARBINARY(MAX)",
            MssqlType::Int => "INT",
            MssqlType::BigInt => "BIGINT",
            MssqlType::Decimal => "DECIMAL",
            MssqlType::Float => "FLOAT",
            MssqlType::Real => "REAL",
            MssqlType::DateTime2 => "DATETIME2",
            MssqlType::DateTimeOffset => "DATETIMEOFFSET",
            MssqlType::UniqueIdentifier => "UNIQUEIDENTIFIER",
            MssqlType::Xml => "XML",
            MssqlType::Other(name) => name,
        }
    }

    /// Returns true for variable-length string and binary types, bounded or not.
    pub fn is_variable_length(&self) -> bool {
        matches!(
            self,
            MssqlType::NVarchar
                | MssqlType::NVarcharMax
                | MssqlType::VarBinary
                | MssqlType::VarBinaryMax
        )
    }

    /// Returns true for the unbounded `(MAX)` types.
    pub fn is_large_object(&self) -> bool {
        matches!(self, MssqlType::NVarcharMax | MssqlType::VarBinaryMax)
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, MssqlType::Int | MssqlType::BigInt)
    }

    /// Largest explicit length this type accepts, for types that take one.
    pub fn max_explicit_length(&self) -> Option<u32> {
        match self {
            MssqlType::NVarchar | MssqlType::NChar => Some(MAX_UNICODE_LENGTH),
            MssqlType::VarBinary => Some(MAX_BINARY_LENGTH),
            _ => None,
        }
    }

    /// Whether a column of this type and length is emitted as `(MAX)`.
    pub fn resolves_to_max(&self, length: Option<u32>) -> bool {
        if self.is_large_object() {
            return true;
        }
        match (self.max_explicit_length(), length) {
            (Some(limit), Some(n)) => n > limit,
            _ => false,
        }
    }
}

impl fmt::Display for MssqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<MssqlType> for String {
    fn from(t: MssqlType) -> Self {
        t.name().to_string()
    }
}

impl From<String> for MssqlType {
    fn from(s: String) -> Self {
        MssqlType::parse(&s)
    }
}
