#[cfg(test)]
mod tests {
    use ora2ch::typemap::{TypeMapping, UnmappedPolicy, FALLBACK_KEY};

    const EXPECTED: &[(&str, &str)] = &[
        ("ANYDATA", "String"),
        ("BINARY_DOUBLE", "String"),
        ("BLOB", "String"),
        ("CHAR", "String"),
        ("CLOB", "String"),
        ("COL_CLS_LIST", "String"),
        ("DATE", "DateTime"),
        ("DS_VARRAY_4_CLOB", "String"),
        ("FLOAT", "Float128"),
        ("LONG", "Int128"),
        ("LONGRAW", "Int128"),
        ("NUMBER", "Decimal256(30)"),
        ("NVARCHAR2", "String"),
        ("RAW", "String"),
        ("ROWID", "Int128"),
        ("SDO_DIM_ARRAY", "String"),
        ("SDO_GEOMETRY", "String"),
        ("SDO_NUMBER_ARRAY", "String"),
        ("SDO_ORGSCL_TYPE", "String"),
        ("SDO_STRING_ARRAY", "String"),
        ("TIMESTAMP(0)", "DateTime"),
        ("TIMESTAMP(3)", "DateTime"),
        ("TIMESTAMP(3)WITHTIMEZONE", "DateTime"),
        ("TIMESTAMP(6)", "DateTime"),
        ("TIMESTAMP(6)WITHTIMEZONE", "DateTime"),
        ("TIMESTAMP(9)", "DateTime"),
        ("UNDEFINED", "String"),
        ("UNKNOWN", "String"),
        ("VARCHAR2", "String"),
        ("XMLTYPE", "String"),
    ];

    #[test]
    fn test_full_default_table() {
        let mapping = TypeMapping::oracle_to_clickhouse(UnmappedPolicy::Fail);

        for (oracle, clickhouse) in EXPECTED {
            assert_eq!(mapping.lookup(oracle).unwrap(), *clickhouse, "{}", oracle);
        }
        assert_eq!(mapping.len(), EXPECTED.len());
    }

    #[test]
    fn test_iter_matches_table() {
        let mapping = TypeMapping::default();
        let pairs: Vec<_> = mapping.iter().collect();
        assert_eq!(pairs, EXPECTED.to_vec());
    }

    #[test]
    fn test_fallback_never_empty() {
        let mapping = TypeMapping::default();
        for data_type in ["BFILE", "", "varchar2", "TIMESTAMP(6) WITH TIME ZONE"] {
            let target = mapping.lookup(data_type).unwrap();
            assert_eq!(target, mapping.lookup(FALLBACK_KEY).unwrap());
            assert!(!target.is_empty());
        }
    }

    #[test]
    fn test_fail_names_the_type() {
        let mapping = TypeMapping::oracle_to_clickhouse(UnmappedPolicy::Fail);
        let err = mapping.lookup("BFILE").unwrap_err();

        assert_eq!(err.data_type, "BFILE");
        assert_eq!(
            err.to_string(),
            "no ClickHouse type registered for Oracle type 'BFILE'"
        );
        assert_eq!(mapping.policy(), UnmappedPolicy::Fail);
    }
}
