//! CSV reader configuration and parsing for `(date, discharge)` tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::error::IoError;
use crate::series::StreamflowSeries;
use crate::validate::{self, ValidationCollector};

/// Time-of-day suffixes tried after the date format fails.
const DATETIME_SUFFIXES: [&str; 4] = [" %H:%M:%S", "T%H:%M:%S", " %H:%M", "T%H:%M"];

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for reading a streamflow table.
///
/// The first column is the date, the second the discharge; further columns
/// are ignored. Use the builder methods (`with_*`) to change the header
/// handling, delimiter, or date format.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderConfig {
    /// Whether the first non-blank line is a header row.
    has_header: bool,
    /// Field delimiter.
    delimiter: char,
    /// `chrono` format string for the date column.
    date_format: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: ',',
            date_format: "%Y-%m-%d".into(),
        }
    }
}

impl ReaderConfig {
    /// Set whether the first non-blank line is a header.
    pub fn with_has_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the date format (`chrono` strftime syntax).
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Returns whether a header row is expected.
    pub fn has_header(&self) -> bool {
        self.has_header
    }

    /// Returns the field delimiter.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Returns the date format.
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the delimiter is not a single ASCII
    /// byte or could appear inside a number or date, or the date format is
    /// empty or malformed.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut c = ValidationCollector::new();
        validate::check_delimiter(self.delimiter, &mut c);
        validate::check_date_format(&self.date_format, &mut c);
        c.finish()
    }
}

// ---------------------------------------------------------------------------
// read_csv
// ---------------------------------------------------------------------------

/// Read a `(date, discharge)` table from a CSV file.
///
/// Fields follow RFC 4180 quoting, so a quoted field may contain the
/// delimiter. Blank lines are skipped. Every malformed row is reported, not just the
/// first: unparseable dates or values, missing fields, negative or
/// non-finite discharge, and dates that do not increase are collected into
/// one [`IoError::Validation`] naming line numbers.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`IoError::FileNotFound`] | `path` does not exist |
/// | [`IoError::Io`] | the file cannot be opened |
/// | [`IoError::Csv`] | the file cannot be read |
/// | [`IoError::Validation`] | invalid config or malformed rows |
/// | [`IoError::EmptyFile`] | no data rows |
pub fn read_csv(path: &Path, config: &ReaderConfig) -> Result<StreamflowSeries, IoError> {
    config.validate()?;

    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|e| IoError::io(path, e))?;
    let series = parse_csv(file, path, config)?;

    if let Some((first, last)) = series.date_range() {
        info!(
            path = %path.display(),
            rows = series.len(),
            %first,
            %last,
            "read streamflow series"
        );
    }
    Ok(series)
}

/// Parse a `(date, discharge)` table from any reader.
///
/// `source` only labels errors; nothing is opened.
pub fn read_csv_from<R: Read>(
    reader: R,
    source: &Path,
    config: &ReaderConfig,
) -> Result<StreamflowSeries, IoError> {
    config.validate()?;
    parse_csv(reader, source, config)
}

fn parse_csv<R: Read>(
    reader: R,
    source: &Path,
    config: &ReaderConfig,
) -> Result<StreamflowSeries, IoError> {
    // `validate` guarantees an ASCII delimiter.
    let mut rdr = ReaderBuilder::new()
        .has_headers(config.has_header)
        .delimiter(config.delimiter as u8)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    if config.has_header {
        let header = rdr.headers().map_err(|e| IoError::csv(source, e))?;
        debug!(fields = header.len(), "skipping header");
    }

    let mut errors = ValidationCollector::new();
    let mut lines = Vec::new();
    let mut dates = Vec::new();
    let mut discharge = Vec::new();
    let mut record = StringRecord::new();

    loop {
        match rdr.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) if e.is_io_error() => return Err(IoError::csv(source, e)),
            Err(e) => {
                let line = e.position().map_or(0, |p| p.line());
                errors.push(format!("line {line}: {e}"));
                continue;
            }
        }
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line_no = record.position().map_or(0, |p| p.line() as usize);

        match parse_row(&record, config) {
            Ok((date, q)) => {
                lines.push(line_no);
                dates.push(date);
                discharge.push(q);
            }
            Err(msg) => errors.push(format!("line {line_no}: {msg}")),
        }
    }

    errors.merge(validate::validate_dates_increasing(&lines, &dates));
    errors.merge(validate::validate_discharge(&lines, &discharge));

    if errors.is_empty() && discharge.is_empty() {
        return Err(IoError::EmptyFile {
            path: source.to_path_buf(),
        });
    }
    errors.finish()?;

    Ok(StreamflowSeries::from_validated(dates, discharge))
}

/// Parse one data record into `(date, discharge)`.
fn parse_row(record: &StringRecord, config: &ReaderConfig) -> Result<(NaiveDate, f64), String> {
    let (Some(date_field), Some(value_field)) = (record.get(0), record.get(1)) else {
        return Err(format!(
            "expected at least 2 fields separated by {:?}",
            config.delimiter
        ));
    };
    let date_field = date_field.trim_start_matches('\u{feff}');

    let date = parse_date(date_field, &config.date_format);
    let value = value_field.parse::<f64>();

    match (date, value) {
        (Some(d), Ok(q)) => Ok((d, q)),
        (None, Ok(_)) => Err(format!("invalid date {date_field:?}")),
        (Some(_), Err(_)) => Err(format!("invalid discharge {value_field:?}")),
        (None, Err(_)) => Err(format!(
            "invalid date {date_field:?} and discharge {value_field:?}"
        )),
    }
}

/// Parse a date, falling back to a datetime whose date part is kept.
fn parse_date(field: &str, format: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(field, format) {
        return Some(d);
    }
    DATETIME_SUFFIXES.iter().find_map(|suffix| {
        NaiveDateTime::parse_from_str(field, &format!("{format}{suffix}"))
            .ok()
            .map(|dt| dt.date())
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
