//! Oracle → SQL Server type mapping.

use std::sync::LazyLock;

use regex::Regex;

use super::{SourceSystem, TypeMapper, TypeMapping};
use crate::sql::types::{MssqlType, MAX_BINARY_LENGTH, MAX_UNICODE_LENGTH};

/// Worst-case bytes per character for UTF-8 data in an Oracle column.
///
/// Oracle reports character lengths in bytes, SQL Server NVARCHAR takes a
/// character count. The conversion assumes every character may need four
/// bytes, whatever the source character set is.
pub const BYTES_PER_CHAR: u32 = 4;

/// NVARCHAR length used when the source reports none.
pub const DEFAULT_NVARCHAR_LENGTH: u32 = 255;

/// NCHAR length used when the source reports none.
pub const DEFAULT_NCHAR_LENGTH: u32 = 1;

/// Largest NUMBER precision that still fits an INT.
const MAX_INT_PRECISION: u32 = 9;

/// Type arguments such as the `(6)` in `TIMESTAMP(6) WITH TIME ZONE`.
static TYPE_ARGUMENTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("type argument pattern"));

/// Oracle column types with a fixed SQL Server counterpart.
///
/// Adding a variant here forces a decision in [`OracleType::target`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OracleType {
    Varchar2,
    Nvarchar2,
    Char,
    Nchar,
    Number,
    Float,
    BinaryFloat,
    BinaryDouble,
    Date,
    Timestamp,
    TimestampTz,
    TimestampLtz,
    Clob,
    Nclob,
    Blob,
    Raw,
    LongRaw,
    Rowid,
    Urowid,
    XmlType,
    Bfile,
    Long,
}

impl OracleType {
    /// Recognise an Oracle type name, ignoring case, spacing and any
    /// parenthesised arguments (`TIMESTAMP(6)`, `RAW(16)`).
    pub fn parse(s: &str) -> Option<Self> {
        let bare = TYPE_ARGUMENTS.replace_all(s, " ");
        let upper = bare.split_whitespace().collect::<Vec<_>>().join(" ").to_uppercase();
        let ty = match upper.as_str() {
            "VARCHAR2" => OracleType::Varchar2,
            "NVARCHAR2" => OracleType::Nvarchar2,
            "CHAR" => OracleType::Char,
            "NCHAR" => OracleType::Nchar,
            "NUMBER" => OracleType::Number,
            "FLOAT" => OracleType::Float,
            "BINARY_FLOAT" => OracleType::BinaryFloat,
            "BINARY_DOUBLE" => OracleType::BinaryDouble,
            "DATE" => OracleType::Date,
            "TIMESTAMP" => OracleType::Timestamp,
            "TIMESTAMP WITH TIME ZONE" => OracleType::TimestampTz,
            "TIMESTAMP WITH LOCAL TIME ZONE" => OracleType::TimestampLtz,
            "CLOB" => OracleType::Clob,
            "NCLOB" => OracleType::Nclob,
            "BLOB" => OracleType::Blob,
            "RAW" => OracleType::Raw,
            "LONG RAW" => OracleType::LongRaw,
            "ROWID" => OracleType::Rowid,
            "UROWID" => OracleType::Urowid,
            "XMLTYPE" => OracleType::XmlType,
            "BFILE" => OracleType::Bfile,
            "LONG" => OracleType::Long,
            _ => return None,
        };
        Some(ty)
    }

    /// The fixed SQL Server type for this Oracle type.
    ///
    /// NUMBER maps to DECIMAL here; [`OracleToMssqlMapper`] narrows it to an
    /// integer type based on precision and scale.
    pub fn target(self) -> MssqlType {
        match self {
            OracleType::Varchar2 | OracleType::Nvarchar2 => MssqlType::NVarchar,
            OracleType::Char | OracleType::Nchar => MssqlType::NChar,
            OracleType::Number => MssqlType::Decimal,
            OracleType::Float | OracleType::BinaryDouble => MssqlType::Float,
            OracleType::BinaryFloat => MssqlType::Real,
            OracleType::Date | OracleType::Timestamp | OracleType::TimestampLtz => {
                MssqlType::DateTime2
            }
            OracleType::TimestampTz => MssqlType::DateTimeOffset,
            OracleType::Clob | OracleType::Nclob | OracleType::Bfile | OracleType::Long => {
                MssqlType::NVarcharMax
            }
            OracleType::Blob | OracleType::LongRaw => MssqlType::VarBinaryMax,
            OracleType::Raw => MssqlType::VarBinary,
            OracleType::Rowid | OracleType::Urowid => MssqlType::UniqueIdentifier,
            OracleType::XmlType => MssqlType::Xml,
        }
    }

    /// Why this type maps the way it does, for the common types.
    fn explanation(self) -> Option<&'static str> {
        match self {
            OracleType::Varchar2 => Some("Mapped to NVARCHAR for Unicode support"),
            OracleType::Number => {
                Some("Mapped to DECIMAL for precision, or BIGINT if no precision specified")
            }
            OracleType::Date => Some("Mapped to DATETIME2 for better precision and range"),
            OracleType::Timestamp => Some("Mapped to DATETIME2 for SQL Server compatibility"),
            OracleType::Clob => Some("Mapped to NVARCHAR(MAX) for large text storage"),
            OracleType::Blob => Some("Mapped to VARBINARY(MAX) for large binary storage"),
            OracleType::Raw => Some("Mapped to VARBINARY for binary data"),
            OracleType::Rowid => Some("Mapped to UNIQUEIDENTIFIER as closest equivalent"),
            _ => None,
        }
    }
}

/// Human-readable reason for the mapping of an Oracle type.
pub fn explain_mapping(oracle_type: &str) -> String {
    OracleType::parse(oracle_type)
        .and_then(OracleType::explanation)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Direct mapping from {}", oracle_type))
}

/// Maps Oracle column types to SQL Server.
#[derive(Debug, Clone, Default)]
pub struct OracleToMssqlMapper;

impl OracleToMssqlMapper {
    pub fn new() -> Self {
        Self
    }
}

impl TypeMapper for OracleToMssqlMapper {
    fn source_system(&self) -> SourceSystem {
        SourceSystem::Oracle
    }

    fn map_type(
        &self,
        data_type: &str,
        max_length: Option<u32>,
        precision: Option<u32>,
        scale: Option<i32>,
    ) -> TypeMapping {
        let target = match OracleType::parse(data_type) {
            Some(OracleType::Number) => return map_number(max_length, precision, scale),
            Some(ty) => ty.target(),
            None => MssqlType::Other(data_type.to_string()),
        };

        let max_length = normalize_length(&target, max_length);
        TypeMapping::keep(target, max_length, precision, scale)
    }
}

/// NUMBER is an integer when it has no fractional digits, DECIMAL otherwise.
fn map_number(max_length: Option<u32>, precision: Option<u32>, scale: Option<i32>) -> TypeMapping {
    match (precision, scale) {
        (None, None) => TypeMapping::keep(MssqlType::BigInt, max_length, None, None),
        (p, None) | (p, Some(0)) => {
            let target = match p {
                Some(p) if (1..=MAX_INT_PRECISION).contains(&p) => MssqlType::Int,
                _ => MssqlType::BigInt,
            };
            TypeMapping::keep(target, max_length, None, None)
        }
        (p, Some(s)) => TypeMapping::keep(MssqlType::Decimal, max_length, p, Some(s)),
    }
}

/// Convert a source length to the target's length semantics.
fn normalize_length(target: &MssqlType, length: Option<u32>) -> Option<u32> {
    // Catalogs report 0 for columns without a declared length.
    let length = length.filter(|&n| n > 0);
    match (target, length) {
        (MssqlType::NVarchar, None) => Some(DEFAULT_NVARCHAR_LENGTH),
        (MssqlType::NChar, None) => Some(DEFAULT_NCHAR_LENGTH),
        (MssqlType::NVarchar | MssqlType::NChar, Some(bytes)) => {
            Some((bytes / BYTES_PER_CHAR).clamp(1, MAX_UNICODE_LENGTH))
        }
        (MssqlType::VarBinary, Some(bytes)) => Some(bytes.min(MAX_BINARY_LENGTH)),
        _ => length,
    }
}
