//! Integration test: export separation results and read them back.

use std::fs;

use chrono::NaiveDate;
use hydrosep_io::{IoError, ReaderConfig, StreamflowSeries, WriterConfig, read_csv, write_csv};

fn hundred_days() -> StreamflowSeries {
    let start = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap();
    let dates: Vec<NaiveDate> = start.iter_days().take(100).collect();
    let q: Vec<f64> = (0..100).map(|i| 2.0 + (i as f64 * 0.3).sin().abs()).collect();
    StreamflowSeries::new(dates, q).expect("fixture is valid")
}

#[test]
fn export_shape_hundred_rows_three_methods() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("results.csv");
    let series = hundred_days();

    let a: Vec<f64> = series.discharge().iter().map(|q| q * 0.5).collect();
    let b: Vec<f64> = series.discharge().iter().map(|q| q * 0.25).collect();
    let c = vec![0.0; 100];
    write_csv(
        &path,
        &series,
        &[
            ("Lyne-Hollick", a.as_slice()),
            ("UKIH", b.as_slice()),
            ("Eckhardt", c.as_slice()),
        ],
        &WriterConfig::default(),
    )
    .unwrap();

    let text = fs::read_to_string(&path).expect("read back");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 101);
    assert_eq!(lines[0], "Date,Streamflow,Lyne-Hollick,UKIH,Eckhardt");
    for line in &lines[1..] {
        assert_eq!(line.split(',').count(), 5, "{line}");
    }
    assert!(lines[1].starts_with("2001-01-01,2,1,0.5,0"));
}

#[test]
fn exported_file_reads_back_as_same_series() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("results.csv");
    let series = hundred_days();
    let b = vec![1.0; 100];

    write_csv(&path, &series, &[("EWMA", b.as_slice())], &WriterConfig::default()).unwrap();
    let back = read_csv(&path, &ReaderConfig::default()).unwrap();
    assert_eq!(back, series);
}

#[test]
fn mismatched_column_leaves_existing_file_untouched() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("results.csv");
    fs::write(&path, "previous run\n").expect("seed output");
    let series = hundred_days();
    let short = vec![1.0; 99];

    let err = write_csv(&path, &series, &[("Furey", short.as_slice())], &WriterConfig::default())
        .unwrap_err();
    assert!(matches!(
        err,
        IoError::DimensionMismatch {
            expected: 100,
            got: 99,
            ..
        }
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), "previous run\n");

    let err = write_csv(&path, &series, &[], &WriterConfig::default().with_delimiter('x'))
        .unwrap_err();
    assert!(matches!(err, IoError::Validation { .. }));
    assert_eq!(fs::read_to_string(&path).unwrap(), "previous run\n");
}

#[test]
fn date_format_with_delimiter_reads_back() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("results.csv");
    let series = hundred_days();
    let b = vec![1.0; 100];
    let format = "%b %d, %Y";

    write_csv(
        &path,
        &series,
        &[("EWMA", b.as_slice())],
        &WriterConfig::default().with_date_format(format),
    )
    .unwrap();
    let back = read_csv(&path, &ReaderConfig::default().with_date_format(format)).unwrap();
    assert_eq!(back, series);
}

#[test]
fn write_into_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("no/such/dir/results.csv");
    let series = hundred_days();

    let err = write_csv(&path, &series, &[], &WriterConfig::default()).unwrap_err();
    assert!(matches!(err, IoError::Io { .. }), "{err:?}");
}
