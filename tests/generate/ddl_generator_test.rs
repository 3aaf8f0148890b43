#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use ora2ch::catalog::{parse_dump, ColumnRecord, TableCatalog, TableIdentity};
    use ora2ch::generate::{DdlGenerator, GenerateError, GeneratorOptions};
    use ora2ch::typemap::{TypeMapping, UnmappedPolicy};
    use std::fs;
    use std::path::PathBuf;

    fn fixture_records() -> Vec<ColumnRecord> {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("all_tab_columns.txt");
        parse_dump(&fs::read_to_string(path).unwrap()).unwrap()
    }

    fn rec(owner: &str, table: &str, column: &str, data_type: &str) -> ColumnRecord {
        ColumnRecord {
            owner: owner.into(),
            table_name: table.into(),
            column_name: column.into(),
            data_type: data_type.into(),
            ..Default::default()
        }
    }

    fn generate(records: &[ColumnRecord], options: GeneratorOptions) -> String {
        let catalog = TableCatalog::build(records, options.identity);
        let mapping = TypeMapping::default();
        DdlGenerator::new(&mapping, options).generate(&catalog).unwrap()
    }

    #[test]
    fn test_minimal_table() {
        let records = vec![
            rec("SCOTT", "FOO", "A", "VARCHAR2"),
            rec("SCOTT", "FOO", "B", "NUMBER"),
        ];
        let ddl = generate(&records, GeneratorOptions::new("mydsn").with_prefix("ora_"));

        assert_eq!(
            ddl,
            "DROP TABLE IF EXISTS ora_FOO;\n\
             CREATE TABLE ora_FOO (`A` String,`B` Decimal256(30)) ENGINE = ODBC('DSN=mydsn', 'SCOTT', 'FOO');\n\
             \n"
        );
    }

    #[test]
    fn test_fixture_catalog() {
        let ddl = generate(&fixture_records(), GeneratorOptions::new("ORCL"));

        assert_snapshot!(ddl.trim_end(), @r"
        DROP TABLE IF EXISTS ora_ORDERS;
        CREATE TABLE ora_ORDERS (`ORDER_ID` Decimal256(30),`PLACED_AT` DateTime,`NOTE` String,`STATUS` String) ENGINE = ODBC('DSN=ORCL', 'SALES', 'ORDERS');

        DROP TABLE IF EXISTS ora_EMPLOYEES;
        CREATE TABLE ora_EMPLOYEES (`EMP_ID` Decimal256(30),`HIRED` DateTime,`PHOTO` String,`LOCATION` String) ENGINE = ODBC('DSN=ORCL', 'HR', 'EMPLOYEES');
        ");
    }

    #[test]
    fn test_deterministic() {
        let records = fixture_records();
        let first = generate(&records, GeneratorOptions::new("ORCL"));
        let second = generate(&records, GeneratorOptions::new("ORCL"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_one_block_per_table() {
        let ddl = generate(&fixture_records(), GeneratorOptions::new("ORCL"));

        assert_eq!(ddl.matches("DROP TABLE IF EXISTS").count(), 2);
        assert_eq!(ddl.matches("CREATE TABLE").count(), 2);
        assert_eq!(ddl.matches(";\n\n").count(), 2);
        assert!(!ddl.contains(",)"));
    }

    #[test]
    fn test_engine_uses_unprefixed_names() {
        let records = vec![rec("SCOTT", "EMP", "ID", "NUMBER")];
        let ddl = generate(&records, GeneratorOptions::new("mydsn").with_prefix("x_"));

        assert!(ddl.contains("CREATE TABLE x_EMP ("));
        assert!(ddl.contains("ENGINE = ODBC('DSN=mydsn', 'SCOTT', 'EMP');"));
    }

    #[test]
    fn test_empty_prefix() {
        let records = vec![rec("SCOTT", "EMP", "ID", "NUMBER")];
        let ddl = generate(&records, GeneratorOptions::new("mydsn").with_prefix(""));
        assert!(ddl.starts_with("DROP TABLE IF EXISTS EMP;\n"));
    }

    #[test]
    fn test_unknown_type_falls_back_to_string() {
        let records = vec![rec("SCOTT", "EMP", "SPAN", "INTERVALDAYTOSECOND")];
        let ddl = generate(&records, GeneratorOptions::new("mydsn"));
        assert!(ddl.contains("(`SPAN` String)"));
    }

    #[test]
    fn test_unknown_type_fails_under_fail_policy() {
        let records = vec![
            rec("SCOTT", "EMP", "ID", "NUMBER"),
            rec("SCOTT", "EMP", "SPAN", "INTERVALDAYTOSECOND"),
        ];
        let catalog = TableCatalog::build(&records, TableIdentity::Name);
        let mapping = TypeMapping::oracle_to_clickhouse(UnmappedPolicy::Fail);

        let err = DdlGenerator::new(&mapping, GeneratorOptions::new("mydsn"))
            .generate(&catalog)
            .unwrap_err();
        assert!(matches!(
            err,
            GenerateError::Unmapped(ref e) if e.data_type == "INTERVALDAYTOSECOND"
        ));
    }

    #[test]
    fn test_owner_and_name_collision_is_an_error() {
        let records = vec![
            rec("A_B", "C", "X", "NUMBER"),
            rec("A", "B_C", "Y", "VARCHAR2"),
        ];
        let catalog = TableCatalog::build(&records, TableIdentity::OwnerAndName);
        let mapping = TypeMapping::default();
        let options = GeneratorOptions::new("mydsn").with_identity(TableIdentity::OwnerAndName);

        let err = DdlGenerator::new(&mapping, options)
            .generate(&catalog)
            .unwrap_err();
        assert!(matches!(
            err,
            GenerateError::DuplicateTarget { ref name, .. } if name == "ora_A_B_C"
        ));
    }

    #[test]
    fn test_distinct_owner_and_name_targets_are_kept() {
        let records = vec![
            rec("A_B", "C", "X", "NUMBER"),
            rec("A", "B_D", "Y", "VARCHAR2"),
        ];
        let ddl = generate(
            &records,
            GeneratorOptions::new("mydsn").with_identity(TableIdentity::OwnerAndName),
        );
        assert_eq!(ddl.matches("CREATE TABLE ora_A_B_C (").count(), 1);
        assert_eq!(ddl.matches("CREATE TABLE ora_A_B_D (").count(), 1);
    }

    #[test]
    fn test_owner_filter_on_fixture() {
        let ddl = generate(
            &fixture_records(),
            GeneratorOptions::new("ORCL").with_owner_filter("HR"),
        );

        assert!(!ddl.contains("ORDERS"));
        assert!(ddl.starts_with("DROP TABLE IF EXISTS ora_EMPLOYEES;"));
    }

    #[test]
    fn test_owner_and_name_identity() {
        let records = vec![
            rec("HR", "AUDIT", "ID", "NUMBER"),
            rec("OPS", "AUDIT", "ID", "NUMBER"),
        ];
        let ddl = generate(
            &records,
            GeneratorOptions::new("mydsn").with_identity(TableIdentity::OwnerAndName),
        );

        assert_snapshot!(ddl.trim_end(), @r"
        DROP TABLE IF EXISTS ora_HR_AUDIT;
        CREATE TABLE ora_HR_AUDIT (`ID` Decimal256(30)) ENGINE = ODBC('DSN=mydsn', 'HR', 'AUDIT');

        DROP TABLE IF EXISTS ora_OPS_AUDIT;
        CREATE TABLE ora_OPS_AUDIT (`ID` Decimal256(30)) ENGINE = ODBC('DSN=mydsn', 'OPS', 'AUDIT');
        ");
    }

    #[test]
    fn test_quotes_in_names_are_escaped() {
        let records = vec![rec("O'NEIL", "T", "we`ird", "CHAR")];
        let ddl = generate(&records, GeneratorOptions::new("mydsn"));

        assert!(ddl.contains("(`we``ird` String)"));
        assert!(ddl.contains("'O''NEIL'"));
    }
}
