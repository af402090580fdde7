//! CSV export of separation results.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use tracing::info;

use crate::error::IoError;
use crate::series::StreamflowSeries;
use crate::validate::{ValidationCollector, check_date_format, check_delimiter};

/// One named result column, in export order.
pub type Column<'a> = (&'a str, &'a [f64]);

/// Configuration for writing separation results.
#[derive(Debug, Clone, PartialEq)]
pub struct WriterConfig {
    /// Field delimiter.
    delimiter: char,
    /// `chrono` format string for the date column.
    date_format: String,
    /// Fixed number of decimals, or `None` for shortest round-trip output.
    precision: Option<usize>,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            date_format: "%Y-%m-%d".into(),
            precision: None,
        }
    }
}

impl WriterConfig {
    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the date format (`chrono` strftime syntax).
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Sets a fixed number of decimals for numeric columns.
    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    /// Returns the field delimiter.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Returns the date format.
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Returns the decimal precision.
    pub fn precision(&self) -> Option<usize> {
        self.precision
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the delimiter is not a single ASCII
    /// byte or could appear inside a number, or the date format is empty or
    /// malformed.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut c = ValidationCollector::new();
        check_delimiter(self.delimiter, &mut c);
        check_date_format(&self.date_format, &mut c);
        c.finish()
    }

    fn number(&self, v: f64) -> String {
        match self.precision {
            Some(p) => format!("{v:.p$}"),
            None => v.to_string(),
        }
    }
}

fn check_columns(series: &StreamflowSeries, columns: &[Column<'_>]) -> Result<(), IoError> {
    for &(name, values) in columns {
        if values.len() != series.len() {
            return Err(IoError::DimensionMismatch {
                name: name.to_string(),
                expected: series.len(),
                got: values.len(),
            });
        }
    }
    Ok(())
}

/// Write `Date,Streamflow,<label>...` rows for `series` and `columns` to `out`.
///
/// One row per record; result columns keep the order given. Fields that
/// contain the delimiter or a quote are quoted.
///
/// # Errors
///
/// Returns [`IoError::DimensionMismatch`] if any column length differs from
/// the series length, [`IoError::Validation`] for an invalid configuration,
/// or [`IoError::Csv`] / [`IoError::Io`] if writing fails. Nothing is
/// written when the configuration or a column is rejected.
pub fn write_results<W: Write>(
    out: W,
    series: &StreamflowSeries,
    columns: &[Column<'_>],
    config: &WriterConfig,
) -> Result<(), IoError> {
    config.validate()?;
    check_columns(series, columns)?;

    let sink = Path::new("<output>");
    let fail = |e: csv::Error| IoError::csv(sink, e);
    // `validate` guarantees an ASCII delimiter.
    let mut wtr = WriterBuilder::new()
        .delimiter(config.delimiter as u8)
        .from_writer(out);

    wtr.write_record(
        ["Date", "Streamflow"]
            .into_iter()
            .chain(columns.iter().map(|&(name, _)| name)),
    )
    .map_err(fail)?;

    let mut row = Vec::with_capacity(columns.len() + 2);
    for (i, (date, q)) in series.dates().iter().zip(series.discharge()).enumerate() {
        row.clear();
        row.push(date.format(&config.date_format).to_string());
        row.push(config.number(*q));
        row.extend(columns.iter().map(|&(_, values)| config.number(values[i])));
        wtr.write_record(&row).map_err(fail)?;
    }
    wtr.flush().map_err(|e| IoError::io(sink, e))?;
    Ok(())
}

/// Write separation results to a CSV file at `path`.
///
/// The configuration and column lengths are checked before the file is
/// created, so a rejected call leaves an existing file untouched.
///
/// # Errors
///
/// See [`write_results`]; I/O errors carry `path`.
pub fn write_csv(
    path: &Path,
    series: &StreamflowSeries,
    columns: &[Column<'_>],
    config: &WriterConfig,
) -> Result<(), IoError> {
    config.validate()?;
    check_columns(series, columns)?;

    let file = File::create(path).map_err(|e| IoError::io(path, e))?;
    write_results(file, series, columns, config).map_err(|e| e.with_path(path))?;
    info!(
        path = %path.display(),
        rows = series.len(),
        columns = columns.len(),
        "wrote separation results"
    );
    Ok(())
}
