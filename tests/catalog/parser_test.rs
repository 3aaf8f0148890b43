#[cfg(test)]
mod tests {
    use ora2ch::catalog::{parse_dump, ColumnRecord};
    use std::fs;
    use std::path::PathBuf;

    fn fixture() -> String {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("all_tab_columns.txt");
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_fixture_record_count_and_order() {
        let records = parse_dump(&fixture()).unwrap();

        let columns: Vec<_> = records.iter().map(|r| r.column_name.as_str()).collect();
        assert_eq!(
            columns,
            vec!["ORDER_ID", "PLACED_AT", "NOTE", "EMP_ID", "HIRED", "STATUS", "PHOTO", "LOCATION"]
        );
    }

    #[test]
    fn test_fixture_first_record() {
        let records = parse_dump(&fixture()).unwrap();

        assert_eq!(
            records[0],
            ColumnRecord {
                owner: "SALES".into(),
                table_name: "ORDERS".into(),
                column_name: "ORDER_ID".into(),
                data_type: "NUMBER".into(),
                data_length: 22,
                data_precision: 12,
                nullable: false,
            }
        );
    }

    #[test]
    fn test_fixture_empty_precision_reads_zero() {
        let records = parse_dump(&fixture()).unwrap();
        let placed = &records[1];

        assert_eq!(placed.data_type, "DATE");
        assert_eq!(placed.data_length, 7);
        assert_eq!(placed.data_precision, 0);
    }

    #[test]
    fn test_fixture_multi_word_type_is_compacted() {
        let records = parse_dump(&fixture()).unwrap();
        let hired = records.iter().find(|r| r.column_name == "HIRED").unwrap();

        assert_eq!(hired.data_type, "TIMESTAMP(6)WITHTIMEZONE");
        assert!(hired.nullable);
    }

    #[test]
    fn test_type_owner_column_is_not_a_field() {
        let records = parse_dump(&fixture()).unwrap();
        let location = records.iter().find(|r| r.column_name == "LOCATION").unwrap();

        assert_eq!(location.data_type, "SDO_GEOMETRY");
        assert_eq!(location.data_length, 1);
    }

    #[test]
    fn test_nullable_only_for_exact_y() {
        let dump = "+\n+\n+\n+\n| HR | T | A | CHAR | | | 1 | | | y |\n| HR | T | B | CHAR | | | 1 | | | YES |\n";
        let records = parse_dump(dump).unwrap();

        assert!(!records[0].nullable);
        assert!(!records[1].nullable);
    }

    #[test]
    fn test_non_numeric_counts_read_zero() {
        let dump = "+\n+\n+\n+\n| HR | T | A | CHAR | | | abc | -1 | | N |\n";
        let records = parse_dump(dump).unwrap();

        assert_eq!(records[0].data_length, 0);
        assert_eq!(records[0].data_precision, 0);
    }

    #[test]
    fn test_fewer_than_four_borders_yields_nothing() {
        let dump = "+---+\n| SELECT 1 |\n+---+\n| HR | T | A | CHAR | | | 1 | | | N |\n";
        assert!(parse_dump(dump).unwrap().is_empty());
    }

    #[test]
    fn test_rows_after_fifth_border_are_read() {
        let dump = "+\n+\n+\n+\n| HR | T | A | CHAR | | | 1 | | | N |\n+\n| HR | T | B | CHAR | | | 1 | | | Y |\n";
        let records = parse_dump(dump).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].column_name, "A");
        assert_eq!(records[1].column_name, "B");
        assert!(records[1].nullable);
    }

    #[test]
    fn test_malformed_row_reports_line_index() {
        let mut dump = fixture();
        dump.push_str("| SALES | ORDERS |\n");

        let err = parse_dump(&dump).unwrap_err();
        assert_eq!(err.line, 15);
        assert_eq!(err.to_string(), "malformed row at line index 15");
    }
}
