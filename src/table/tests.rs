use super::*;
use crate::error::ErrorKind;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_input(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.csv");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn test_load_simple_table() {
    let (_dir, path) = write_input("name,age,city\nJohn,25,NYC\nJane,30,LA\n");
    let table = load_table(&path, 0, b',').unwrap();

    assert_eq!(table.columns(), &ByteRecord::from(vec!["name", "age", "city"]));
    assert_eq!(table.len(), 2);
    assert_eq!(table.column_count(), 3);
    assert_eq!(&table.rows()[1], &ByteRecord::from(vec!["Jane", "30", "LA"]));
}

#[test]
fn test_skips_header_lines() {
    let (_dir, path) = write_input("META1\nMETA2 has, commas\nid,value\n1,a\n2,b\n");
    let table = load_table(&path, 2, b',').unwrap();

    assert_eq!(table.columns(), &ByteRecord::from(vec!["id", "value"]));
    assert_eq!(table.len(), 2);
}

#[test]
fn test_quoted_fields() {
    let (_dir, path) =
        write_input("id,note\n1,\"hello, world\"\n2,\"she said \"\"hi\"\"\"\n3,\"multi\nline\"\n");
    let table = load_table(&path, 0, b',').unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(&table.rows()[0][1], b"hello, world");
    assert_eq!(&table.rows()[1][1], b"she said \"hi\"");
    assert_eq!(&table.rows()[2][1], b"multi\nline");
}

#[test]
fn test_custom_delimiter() {
    let (_dir, path) = write_input("a\tb\n1\t2\n");
    let table = load_table(&path, 0, b'\t').unwrap();

    assert_eq!(table.column_count(), 2);
    assert_eq!(&table.rows()[0], &ByteRecord::from(vec!["1", "2"]));
}

#[test]
fn test_header_only_table_has_no_rows() {
    let (_dir, path) = write_input("a,b,c\n");
    let table = load_table(&path, 0, b',').unwrap();

    assert!(table.is_empty());
    assert_eq!(table.column_count(), 3);
}

#[test]
fn test_ragged_row_is_parse_error() {
    let (_dir, path) = write_input("META\nMETA\na,b\n1,2\n3\n");
    let err = load_table(&path, 2, b',').unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
    let message = err.to_string();
    assert!(message.contains("line 5"), "unexpected message: {}", message);
    assert!(message.contains("1 fields, expected 2"));
}

#[test]
fn test_missing_column_row_is_parse_error() {
    let (_dir, path) = write_input("META1\nMETA2\n");
    let err = load_table(&path, 2, b',').unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(err.to_string().contains("no column-name row"));
}

#[test]
fn test_empty_file_is_parse_error() {
    let (_dir, path) = write_input("");
    let err = load_table(&path, 0, b',').unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_skip_past_end_is_io_error() {
    let (_dir, path) = write_input("a,b\n");
    let err = load_table(&path, 3, b',').unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_table(&dir.path().join("nope.csv"), 0, b',').unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_non_utf8_fields_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.csv");
    std::fs::write(&path, b"name\ncaf\xe9\n").unwrap();

    let table = load_table(&path, 0, b',').unwrap();
    assert_eq!(&table.rows()[0][0], b"caf\xe9");
}
