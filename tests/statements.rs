use std::io::{self, Cursor, Read};

use schemautil::{get_statements, get_statements_from_path, SchemaReader, SchemaUtilError, Statements};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// Hands out `good` once, then fails every read.
struct FailingReader {
    good: Cursor<Vec<u8>>,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.good.read(buf)?;
        if n > 0 {
            return Ok(n);
        }
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"))
    }
}

#[test]
fn schema_with_mixed_comments() {
    init_tracing();
    let schema = "\
-- accounts
CREATE TABLE accounts (
  id INT PRIMARY KEY,
# owner column added later
  owner TEXT
);

-- index
CREATE INDEX accounts_owner ON accounts (owner);
SELECT 1";
    let statements = get_statements(schema.as_bytes()).expect("read ok");
    assert_eq!(
        statements,
        vec![
            "CREATE TABLE accounts (  id INT PRIMARY KEY,  owner TEXT);",
            "CREATE INDEX accounts_owner ON accounts (owner);",
        ]
    );
}

#[test]
fn semicolon_inside_quotes_still_terminates() {
    let statements = get_statements("INSERT INTO t VALUES ('a;\nb');\n".as_bytes()).expect("read ok");
    assert_eq!(statements, vec!["INSERT INTO t VALUES ('a;", "b');"]);
}

#[test]
fn rereading_is_deterministic() {
    let schema = "A;\n-- x\nB\nC;\n";
    let first = get_statements(schema.as_bytes()).expect("first");
    let second = get_statements(schema.as_bytes()).expect("second");
    assert_eq!(first, second);
    assert_eq!(first, vec!["A;", "BC;"]);
}

#[test]
fn read_failure_propagates() {
    let reader = FailingReader { good: Cursor::new(b"A;\nB".to_vec()) };
    let err = get_statements(reader).unwrap_err();
    match err {
        SchemaUtilError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("expected I/O error, got {other}"),
    }
}

#[test]
fn lazy_reader_yields_statements_before_failure() {
    let reader = io::BufReader::new(FailingReader { good: Cursor::new(b"A;\nB;\nC".to_vec()) });
    let mut statements = Statements::new(reader);
    assert_eq!(statements.next().unwrap().expect("first"), "A;");
    assert_eq!(statements.next().unwrap().expect("second"), "B;");
    assert!(statements.next().unwrap().is_err(), "third item is the read error");
    assert!(statements.next().is_none(), "iteration stops after an error");
}

#[test]
fn invalid_utf8_is_an_io_error() {
    let err = get_statements(&b"SELECT \xff;\n"[..]).unwrap_err();
    match err {
        SchemaUtilError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::InvalidData),
        other => panic!("expected I/O error, got {other}"),
    }
}

#[test]
fn reads_from_file() {
    init_tracing();
    let path = std::env::temp_dir().join("schemautil_statements_test.sql");
    std::fs::write(&path, "-- schema\nCREATE TABLE t (id INT);\r\nDROP TABLE t;\r\n").expect("write temp file");
    let statements = get_statements_from_path(&path).expect("read file");
    assert_eq!(statements, vec!["CREATE TABLE t (id INT);", "DROP TABLE t;"]);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("schemautil_does_not_exist.sql");
    let err = SchemaReader::default().read_path(&path).unwrap_err();
    assert!(matches!(err, SchemaUtilError::Io(ref e) if e.kind() == io::ErrorKind::NotFound));
}
