//! Dated streamflow series container.

use chrono::NaiveDate;

use crate::error::IoError;
use crate::validate;

/// A dated discharge record loaded from a table.
///
/// Dates are strictly increasing and every discharge value is finite and
/// non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamflowSeries {
    dates: Vec<NaiveDate>,
    discharge: Vec<f64>,
}

impl StreamflowSeries {
    /// Creates a new `StreamflowSeries` after validating inputs.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::DimensionMismatch`] if the columns differ in length,
    /// or [`IoError::Validation`] if dates are not strictly increasing or a
    /// discharge value is negative or non-finite. Messages use 1-based row
    /// numbers.
    pub fn new(dates: Vec<NaiveDate>, discharge: Vec<f64>) -> Result<Self, IoError> {
        if dates.len() != discharge.len() {
            return Err(IoError::DimensionMismatch {
                name: "discharge".to_string(),
                expected: dates.len(),
                got: discharge.len(),
            });
        }
        let rows: Vec<usize> = (1..=dates.len()).collect();
        let mut c = validate::validate_dates_increasing(&rows, &dates);
        c.merge(validate::validate_discharge(&rows, &discharge));
        c.finish()?;
        Ok(Self { dates, discharge })
    }

    /// Builds a series whose rows were already checked by the reader.
    pub(crate) fn from_validated(dates: Vec<NaiveDate>, discharge: Vec<f64>) -> Self {
        debug_assert_eq!(dates.len(), discharge.len());
        Self { dates, discharge }
    }

    /// Returns the date sequence.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Returns the discharge values.
    pub fn discharge(&self) -> &[f64] {
        &self.discharge
    }

    /// First and last date, or `None` when empty.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((*self.dates.first()?, *self.dates.last()?))
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.discharge.len()
    }

    /// Returns `true` if the series has no rows.
    pub fn is_empty(&self) -> bool {
        self.discharge.is_empty()
    }

    /// Consumes self and returns `(dates, discharge)`.
    pub fn into_parts(self) -> (Vec<NaiveDate>, Vec<f64>) {
        (self.dates, self.discharge)
    }
}
