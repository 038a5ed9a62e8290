//! End-to-end pipeline tests: load a log file from disk, count itemsets,
//! write the report, and read it back.

use std::fs;
use std::path::Path;

use miner::{report, FrequencyTable, MinerError, SupportCounter, TransactionLog};

fn mine(path: &Path, set_size: usize) -> FrequencyTable {
    let log = TransactionLog::from_path(path).expect("load transaction log");
    let mut counter = SupportCounter::new(set_size);
    counter.observe_all(&log);
    counter.finish()
}

#[test]
fn report_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("log.dat");
    let output = dir.path().join("report.csv");
    fs::write(&input, "1 2 3\n1 2 4\n").unwrap();

    let table = mine(&input, 2);
    let rows = report::write_file(&output, &table, 1).expect("write report");

    assert_eq!(rows, 5);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "item set size (N),co-occurrence frequency,item 1 id,item 2 id\n\
         2,2,1,2\n\
         2,1,1,3\n\
         2,1,1,4\n\
         2,1,2,3\n\
         2,1,2,4\n"
    );

    dir.close().unwrap();
}

#[test]
fn duplicates_blanks_and_short_lines_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("log.dat");
    let output = dir.path().join("report.csv");
    fs::write(&input, "33 12 45 12\n33 45\n\n12 33\n45\n").unwrap();

    let table = mine(&input, 2);
    let rows = report::write_file(&output, &table, 2).expect("write report");

    // the duplicate 12 and the undersized lines contribute nothing extra
    assert_eq!(rows, 2);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "item set size (N),co-occurrence frequency,item 1 id,item 2 id\n\
         2,2,12,33\n\
         2,2,33,45\n"
    );

    dir.close().unwrap();
}

#[test]
fn empty_input_produces_header_only_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("log.dat");
    let output = dir.path().join("report.csv");
    fs::write(&input, "").unwrap();

    let table = mine(&input, 3);
    let rows = report::write_file(&output, &table, 4).expect("write report");

    assert_eq!(rows, 0);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "item set size (N),co-occurrence frequency,item 1 id,item 2 id,item 3 id\n"
    );

    dir.close().unwrap();
}

#[test]
fn report_replaces_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("log.dat");
    let output = dir.path().join("report.csv");
    fs::write(&input, "8 9\n").unwrap();
    fs::write(&output, "stale content from an earlier run\n").unwrap();

    let table = mine(&input, 2);
    report::write_file(&output, &table, 1).expect("write report");

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("item set size (N)"));
    assert!(!written.contains("stale content"));

    dir.close().unwrap();
}

#[test]
fn no_staging_file_left_behind() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("log.dat");
    let output = dir.path().join("report.csv");
    fs::write(&input, "1 2 3\n").unwrap();

    let table = mine(&input, 3);
    report::write_file(&output, &table, 1).expect("write report");

    assert!(output.exists());
    assert!(!dir.path().join("report.csv.tmp").exists());

    dir.close().unwrap();
}

#[test]
fn missing_input_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.dat");

    let err = TransactionLog::from_path(&path).expect_err("load must fail");
    assert!(matches!(err, MinerError::ReadInput { .. }));
    assert!(err.to_string().contains("missing.dat"));
    assert!(err.to_string().starts_with("IO error"));

    dir.close().unwrap();
}

#[test]
fn unwritable_report_path_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("log.dat");
    let output = dir.path().join("no_such_dir").join("report.csv");
    fs::write(&input, "1 2\n").unwrap();

    let table = mine(&input, 2);
    let err = report::write_file(&output, &table, 1).expect_err("write must fail");
    assert!(matches!(err, MinerError::WriteOutput { .. }));
    assert!(err.to_string().contains("report.csv"));

    dir.close().unwrap();
}
