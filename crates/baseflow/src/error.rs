//! Error types for the hydrosep-baseflow crate.

/// Error type for all fallible operations in the hydrosep-baseflow crate.
///
/// Covers malformed discharge input, mismatched dependency arrays, and
/// invalid method parameters. Degenerate separations (too few turning
/// points) are not errors: they yield an all-zero baseflow series.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BaseflowError {
    /// Returned when the discharge series has no samples.
    #[error("discharge series is empty")]
    EmptySeries,

    /// Returned when a discharge sample is NaN or infinite.
    #[error("non-finite discharge at index {index}")]
    NonFiniteDischarge {
        /// Position of the offending sample.
        index: usize,
    },

    /// Returned when a discharge sample is negative.
    #[error("negative discharge at index {index}: {value}")]
    NegativeDischarge {
        /// Position of the offending sample.
        index: usize,
        /// The negative value.
        value: f64,
    },

    /// Returned when a precomputed series does not match the discharge length.
    #[error("length mismatch: expected {expected}, got {got}")]
    LengthMismatch {
        /// Length of the discharge series.
        expected: usize,
        /// Length of the supplied series.
        got: usize,
    },

    /// Returned when a precomputed baseflow sample is above the discharge.
    #[error("precomputed baseflow exceeds discharge at index {index}: {value} > {discharge}")]
    ExceedsDischarge {
        /// Position of the offending sample.
        index: usize,
        /// The supplied baseflow value.
        value: f64,
        /// Discharge at that position.
        discharge: f64,
    },

    /// Returned when a Lyne-Hollick cache was built for a different record.
    #[error("lyne-hollick cache belongs to a different discharge record")]
    CacheMismatch,

    /// Returned when a window width is zero or even.
    #[error("window width must be odd and at least 1, got {width}")]
    InvalidWidth {
        /// The rejected width.
        width: usize,
    },

    /// Returned when a basin area is non-positive or non-finite.
    #[error("basin area must be finite and positive, got {area}")]
    InvalidArea {
        /// The rejected area in km².
        area: f64,
    },

    /// Returned when a method parameter is out of range.
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Accepted range.
        reason: &'static str,
    },

    /// Returned when a separation is requested with no methods.
    #[error("no separation methods requested")]
    NoMethods,

    /// Returned when a method name cannot be parsed.
    #[error("unknown separation method: {0:?}")]
    UnknownMethod(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_series() {
        assert_eq!(
            BaseflowError::EmptySeries.to_string(),
            "discharge series is empty"
        );
    }

    #[test]
    fn error_non_finite() {
        let err = BaseflowError::NonFiniteDischarge { index: 4 };
        assert_eq!(err.to_string(), "non-finite discharge at index 4");
    }

    #[test]
    fn error_negative() {
        let err = BaseflowError::NegativeDischarge {
            index: 2,
            value: -1.5,
        };
        assert_eq!(err.to_string(), "negative discharge at index 2: -1.5");
    }

    #[test]
    fn error_length_mismatch() {
        let err = BaseflowError::LengthMismatch {
            expected: 12,
            got: 10,
        };
        assert_eq!(err.to_string(), "length mismatch: expected 12, got 10");
    }

    #[test]
    fn error_exceeds_discharge() {
        let err = BaseflowError::ExceedsDischarge {
            index: 0,
            value: 100.0,
            discharge: 9.0,
        };
        assert_eq!(
            err.to_string(),
            "precomputed baseflow exceeds discharge at index 0: 100 > 9"
        );
    }

    #[test]
    fn error_cache_mismatch() {
        assert_eq!(
            BaseflowError::CacheMismatch.to_string(),
            "lyne-hollick cache belongs to a different discharge record"
        );
    }

    #[test]
    fn error_invalid_width() {
        let err = BaseflowError::InvalidWidth { width: 0 };
        assert_eq!(
            err.to_string(),
            "window width must be odd and at least 1, got 0"
        );
    }

    #[test]
    fn error_invalid_area() {
        let err = BaseflowError::InvalidArea { area: -3.0 };
        assert_eq!(
            err.to_string(),
            "basin area must be finite and positive, got -3"
        );
    }

    #[test]
    fn error_invalid_parameter() {
        let err = BaseflowError::InvalidParameter {
            name: "alpha",
            value: 1.5,
            reason: "must be in (0, 1)",
        };
        assert_eq!(
            err.to_string(),
            "invalid parameter alpha = 1.5: must be in (0, 1)"
        );
    }

    #[test]
    fn error_unknown_method() {
        let err = BaseflowError::UnknownMethod("hysep".into());
        assert_eq!(err.to_string(), "unknown separation method: \"hysep\"");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<BaseflowError>();
    }
}
