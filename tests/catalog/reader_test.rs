#[cfg(test)]
mod tests {
    use ora2ch::catalog::{
        CatalogConnection, CatalogError, CatalogRow, CatalogSource, DumpFile, LiveCatalog,
    };
    use std::cell::RefCell;
    use std::fs;
    use std::path::PathBuf;
    use std::rc::Rc;

    /// Connection double that records the SQL it was sent.
    struct Recorded {
        rows: Vec<CatalogRow>,
        sent: Rc<RefCell<Vec<String>>>,
    }

    impl CatalogConnection for Recorded {
        fn fetch_rows(&mut self, sql: &str) -> Result<Vec<CatalogRow>, CatalogError> {
            self.sent.borrow_mut().push(sql.to_string());
            Ok(self.rows.clone())
        }
    }

    struct Unreachable;

    impl CatalogConnection for Unreachable {
        fn fetch_rows(&mut self, _sql: &str) -> Result<Vec<CatalogRow>, CatalogError> {
            Err(CatalogError::Connection("ORA-12541: TNS:no listener".into()))
        }
    }

    fn row(values: [Option<&str>; 11]) -> CatalogRow {
        values.iter().map(|v| v.map(str::to_string)).collect()
    }

    #[test]
    fn test_dump_file_reads_fixture() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join("all_tab_columns.txt");
        let mut source = DumpFile::new(&path);

        let records = source.read_columns().unwrap();
        assert_eq!(records.len(), 8);
        assert!(source.describe().ends_with("all_tab_columns.txt"));
    }

    #[test]
    fn test_empty_dump_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        let records = DumpFile::new(&path).read_columns().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_malformed_dump_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "+\n+\n+\n+\n| HR | EMP |\n").unwrap();

        let err = DumpFile::new(&path).read_columns().unwrap_err();
        assert!(matches!(err, CatalogError::Parse(ref e) if e.line == 4));
    }

    #[test]
    fn test_live_catalog_sends_select_all() {
        let sent = Rc::new(RefCell::new(Vec::new()));
        let mut live = LiveCatalog::new(Recorded {
            rows: vec![row([
                Some("HR"),
                Some("EMP"),
                Some("ID"),
                Some("NUMBER"),
                None,
                None,
                Some("22"),
                Some("10"),
                Some("0"),
                Some("N"),
                Some("1"),
            ])],
            sent: Rc::clone(&sent),
        });

        let records = live.read_columns().unwrap();
        assert_eq!(*sent.borrow(), vec!["SELECT * FROM all_tab_columns".to_string()]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].table_name, "EMP");
        assert!(!records[0].nullable);
    }

    #[test]
    fn test_live_catalog_null_counts_read_zero() {
        let mut live = LiveCatalog::new(Recorded {
            rows: vec![row([
                Some("HR"),
                Some("EMP"),
                Some("NOTE"),
                Some("VARCHAR2"),
                None,
                None,
                None,
                None,
                None,
                None,
                None,
            ])],
            sent: Rc::default(),
        });

        let records = live.read_columns().unwrap();
        assert_eq!(records[0].data_length, 0);
        assert_eq!(records[0].data_precision, 0);
        assert!(!records[0].nullable);
    }

    #[test]
    fn test_live_catalog_connection_error_propagates() {
        let mut live = LiveCatalog::new(Unreachable);
        let err = live.read_columns().unwrap_err();
        assert!(matches!(err, CatalogError::Connection(msg) if msg.contains("ORA-12541")));
    }

    #[test]
    fn test_live_and_dump_agree_on_type_spelling() {
        let mut live = LiveCatalog::new(Recorded {
            rows: vec![row([
                Some("HR"),
                Some("EMP"),
                Some("HIRED"),
                Some("TIMESTAMP(6) WITH TIME ZONE"),
                None,
                None,
                Some("13"),
                None,
                Some("6"),
                Some("Y"),
                Some("2"),
            ])],
            sent: Rc::default(),
        })
        .with_view("dba_tab_columns");

        assert_eq!(live.query(), "SELECT * FROM dba_tab_columns");
        let records = live.read_columns().unwrap();
        assert_eq!(records[0].data_type, "TIMESTAMP(6)WITHTIMEZONE");
    }
}
