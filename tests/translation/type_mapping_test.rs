use schemashift::sql::MssqlType;
use schemashift::typemap::{explain_mapping, mapper_for, SourceSystem, TypeMapper};

fn oracle() -> Box<dyn TypeMapper> {
    mapper_for(SourceSystem::Oracle)
}

#[test]
fn test_number_mapping() {
    let mapper = oracle();

    assert_eq!(mapper.map_type("NUMBER", None, None, None).target, MssqlType::BigInt);
    assert_eq!(mapper.map_type("NUMBER", None, Some(9), Some(0)).target, MssqlType::Int);
    assert_eq!(mapper.map_type("NUMBER", None, Some(10), Some(0)).target, MssqlType::BigInt);

    let decimal = mapper.map_type("NUMBER", None, Some(10), Some(2));
    assert_eq!(decimal.target, MssqlType::Decimal);
    assert_eq!((decimal.precision, decimal.scale), (Some(10), Some(2)));
}

#[test]
fn test_character_lengths() {
    let mapper = oracle();

    assert_eq!(mapper.map_type("VARCHAR2", Some(400), None, None).max_length, Some(100));
    assert_eq!(mapper.map_type("VARCHAR2", Some(20000), None, None).max_length, Some(4000));
    assert_eq!(mapper.map_type("NVARCHAR2", None, None, None).max_length, Some(255));
    assert_eq!(mapper.map_type("CHAR", None, None, None).max_length, Some(1));
    assert_eq!(mapper.map_type("CHAR", Some(2), None, None).max_length, Some(1));
}

#[test]
fn test_mapping_is_deterministic() {
    let mapper = oracle();
    for source in [
        "VARCHAR2", "NVARCHAR2", "CHAR", "NCHAR", "NUMBER", "FLOAT", "BINARY_FLOAT",
        "BINARY_DOUBLE", "DATE", "TIMESTAMP", "CLOB", "NCLOB", "BLOB", "RAW", "LONG RAW",
        "ROWID", "UROWID", "XMLTYPE", "BFILE", "LONG",
    ] {
        let first = mapper.map_type(source, Some(100), Some(5), Some(0));
        let second = mapper.map_type(source, Some(100), Some(5), Some(0));
        assert_eq!(first, second, "{}", source);
    }
}

#[test]
fn test_unknown_type_passes_through() {
    let mapping = oracle().map_type("SDO_GEOMETRY", None, None, None);
    assert_eq!(mapping.target, MssqlType::Other("SDO_GEOMETRY".to_string()));
    assert_eq!(explain_mapping("SDO_GEOMETRY"), "Direct mapping from SDO_GEOMETRY");
}

#[test]
fn test_parameterised_timestamps() {
    let mapper = oracle();

    assert_eq!(mapper.map_type("TIMESTAMP(6)", None, None, None).target, MssqlType::DateTime2);
    assert_eq!(
        mapper.map_type("TIMESTAMP(6) WITH TIME ZONE", None, None, None).target,
        MssqlType::DateTimeOffset
    );
    assert_eq!(
        mapper.map_type("TIMESTAMP(3) WITH LOCAL TIME ZONE", None, None, None).target,
        MssqlType::DateTime2
    );
}
