use schemashift::naming::{
    is_reserved_word, sanitize_identifier, target_table_name, target_view_name, validate_name,
    NamingStyle, MAX_IDENTIFIER_LENGTH,
};

#[test]
fn test_validate_rejections() {
    let long = "a".repeat(MAX_IDENTIFIER_LENGTH + 1);
    for name in ["", long.as_str(), "1st_orders", "TABLE", "table", "Table"] {
        assert!(!validate_name(name).valid, "{:?} should be rejected", name);
    }
}

#[test]
fn test_validate_accepts_customer_orders() {
    let result = validate_name("customer_orders");
    assert!(result.valid);
    assert_eq!(result.message, "Valid table name");
}

#[test]
fn test_reserved_word_message() {
    let result = validate_name("TABLE");
    assert_eq!(
        result.message,
        "'TABLE' is a reserved word and cannot be used as a table name"
    );
    assert!(is_reserved_word("between"));
    assert!(!is_reserved_word("betweens"));
}

#[test]
fn test_generated_names_validate() {
    let name = target_table_name(NamingStyle::Standard, "SRC", "SALES", "Order Lines");
    assert_eq!(name, "src_order_lines");
    assert!(validate_name(&name).valid);

    let name = target_table_name(NamingStyle::SchemaPrefixed, "SRC", "SALES", "Order Lines");
    assert_eq!(name, "sales_src_order_lines");
    assert!(validate_name(&name).valid);
}

#[test]
fn test_view_name_keeps_source_case() {
    assert_eq!(target_view_name("Sales", "OrderLines"), "Sales_OrderLines");
    assert_eq!(sanitize_identifier("Sales_OrderLines"), "sales_orderlines");
}
