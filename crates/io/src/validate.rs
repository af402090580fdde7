//! Accumulated validation utilities.
//!
//! Provides [`ValidationCollector`] for gathering multiple validation errors
//! into a single [`IoError::Validation`], plus standalone helpers that check
//! the invariants of a streamflow table.

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};

use crate::error::IoError;

/// Upper bound on messages kept in `details`; the count stays exact.
const MAX_DETAILS: usize = 20;

// ---------------------------------------------------------------------------
// ValidationCollector
// ---------------------------------------------------------------------------

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
///
/// Create a collector, push zero or more error messages, then call
/// [`finish`](Self::finish) to obtain `Ok(())` when everything is valid or a
/// single `Err` that summarises every violation.
#[derive(Debug, Default)]
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Append every error from `other`.
    pub(crate) fn merge(&mut self, other: ValidationCollector) {
        self.errors.extend(other.errors);
    }

    /// Returns `true` when no errors have been recorded.
    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(IoError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins the first messages with `"; "` and notes
    /// how many more were dropped.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            return Ok(());
        }
        let count = self.errors.len();
        let mut details = self.errors[..count.min(MAX_DETAILS)].join("; ");
        if count > MAX_DETAILS {
            details.push_str(&format!("; ... and {} more", count - MAX_DETAILS));
        }
        Err(IoError::Validation { count, details })
    }
}

// ---------------------------------------------------------------------------
// Standalone validation helpers
// ---------------------------------------------------------------------------

/// Check that every discharge value is finite and non-negative.
///
/// `lines[i]` is the source line of `discharge[i]`, used in messages.
pub(crate) fn validate_discharge(lines: &[usize], discharge: &[f64]) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    for (&line, &q) in lines.iter().zip(discharge) {
        if !q.is_finite() {
            c.push(format!("line {line}: non-finite discharge {q}"));
        } else if q < 0.0 {
            c.push(format!("line {line}: negative discharge {q}"));
        }
    }

    c
}

/// Check that dates are strictly increasing.
///
/// Records one message per row whose date is not after its predecessor.
pub(crate) fn validate_dates_increasing(lines: &[usize], dates: &[NaiveDate]) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    for (w, pair) in dates.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            c.push(format!(
                "line {}: date {} is not after {}",
                lines[w + 1],
                pair[1],
                pair[0]
            ));
        }
    }

    c
}

/// Check that `delimiter` is a single ASCII byte that cannot appear inside a
/// number, a date or a line break.
pub(crate) fn check_delimiter(delimiter: char, c: &mut ValidationCollector) {
    if !delimiter.is_ascii()
        || delimiter.is_ascii_alphanumeric()
        || matches!(delimiter, '.' | '-' | '+' | '"' | '\n' | '\r')
    {
        c.push(format!("delimiter {delimiter:?} is not allowed"));
    }
}

/// Check that `format` is a non-empty, well-formed strftime string.
pub(crate) fn check_date_format(format: &str, c: &mut ValidationCollector) {
    if format.trim().is_empty() {
        c.push("date_format must not be empty");
    } else if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        c.push(format!("date_format {format:?} is not a valid strftime pattern"));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // -- ValidationCollector -------------------------------------------------

    #[test]
    fn collector_empty_is_ok() {
        let c = ValidationCollector::new();
        assert!(c.is_empty());
        assert_eq!(c.len(), 0);
        assert!(c.finish().is_ok());
    }

    #[test]
    fn collector_non_empty_is_err_with_correct_count() {
        let mut c = ValidationCollector::new();
        c.push("error one");
        c.push("error two");
        assert!(!c.is_empty());
        assert_eq!(c.len(), 2);

        let err = c.finish().unwrap_err();
        match err {
            IoError::Validation { count, details } => {
                assert_eq!(count, 2);
                assert_eq!(details, "error one; error two");
            }
            other => panic!("expected IoError::Validation, got {other:?}"),
        }
    }

    #[test]
    fn collector_merge_keeps_order() {
        let mut a = ValidationCollector::new();
        a.push("first");
        let mut b = ValidationCollector::new();
        b.push("second");
        a.merge(b);
        assert_eq!(a.len(), 2);
        match a.finish().unwrap_err() {
            IoError::Validation { details, .. } => assert_eq!(details, "first; second"),
            other => panic!("expected IoError::Validation, got {other:?}"),
        }
    }

    #[test]
    fn collector_truncates_details_but_not_count() {
        let mut c = ValidationCollector::new();
        for i in 0..25 {
            c.push(format!("e{i}"));
        }
        match c.finish().unwrap_err() {
            IoError::Validation { count, details } => {
                assert_eq!(count, 25);
                assert!(details.contains("e19"));
                assert!(!details.contains("e20"));
                assert!(details.ends_with("... and 5 more"));
            }
            other => panic!("expected IoError::Validation, got {other:?}"),
        }
    }

    // -- check_date_format ---------------------------------------------------

    #[test]
    fn date_formats() {
        let mut c = ValidationCollector::new();
        check_date_format("%Y-%m-%d", &mut c);
        check_date_format("%d/%m/%Y %H:%M", &mut c);
        assert!(c.is_empty());
        check_date_format("", &mut c);
        check_date_format("%Y-%Q", &mut c);
        assert_eq!(c.len(), 2);
    }

    // -- check_delimiter -----------------------------------------------------

    #[test]
    fn delimiters() {
        let mut c = ValidationCollector::new();
        for d in [',', ';', '\t', '|', ' '] {
            check_delimiter(d, &mut c);
        }
        assert!(c.is_empty());
        for d in ['a', '7', '.', '-', '"', '\n', 'é', '；'] {
            check_delimiter(d, &mut c);
        }
        assert_eq!(c.len(), 8);
    }

    // -- validate_discharge --------------------------------------------------

    #[test]
    fn discharge_valid_is_empty() {
        let c = validate_discharge(&[2, 3, 4], &[0.0, 1.5, 3.0]);
        assert!(c.is_empty());
    }

    #[test]
    fn discharge_violations_name_lines() {
        let c = validate_discharge(&[2, 3, 4, 5], &[1.0, -0.5, f64::NAN, f64::INFINITY]);
        assert_eq!(c.len(), 3);
        match c.finish().unwrap_err() {
            IoError::Validation { count, details } => {
                assert_eq!(count, 3);
                assert!(details.contains("line 3: negative discharge -0.5"));
                assert!(details.contains("line 4: non-finite discharge NaN"));
                assert!(details.contains("line 5: non-finite discharge inf"));
            }
            other => panic!("expected IoError::Validation, got {other:?}"),
        }
    }

    // -- validate_dates_increasing -------------------------------------------

    #[test]
    fn dates_increasing_is_empty() {
        let dates = [date(2020, 1, 1), date(2020, 1, 2), date(2020, 1, 5)];
        assert!(validate_dates_increasing(&[2, 3, 4], &dates).is_empty());
    }

    #[test]
    fn dates_repeated_and_backwards_are_errors() {
        let dates = [
            date(2020, 1, 1),
            date(2020, 1, 1),
            date(2020, 1, 3),
            date(2020, 1, 2),
        ];
        let c = validate_dates_increasing(&[2, 3, 5, 6], &dates);
        assert_eq!(c.len(), 2);
        match c.finish().unwrap_err() {
            IoError::Validation { details, .. } => {
                assert!(details.contains("line 3: date 2020-01-01 is not after 2020-01-01"));
                assert!(details.contains("line 6: date 2020-01-02 is not after 2020-01-03"));
            }
            other => panic!("expected IoError::Validation, got {other:?}"),
        }
    }
}
