//! Separation method identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::BaseflowError;

/// A baseflow separation method.
///
/// Variants are ordered the way results are reported and exported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    /// Two-pass Lyne-Hollick digital filter.
    LyneHollick,
    /// UKIH smoothed minima.
    Ukih,
    /// HYSEP local minimum.
    LocalMinimum,
    /// HYSEP fixed interval.
    FixedInterval,
    /// HYSEP sliding interval.
    SlidingInterval,
    /// Chapman filter.
    Chapman,
    /// Chapman-Maxwell filter.
    ChapmanMaxwell,
    /// Boughton filter.
    Boughton,
    /// Furey filter.
    Furey,
    /// Eckhardt filter.
    Eckhardt,
    /// Exponentially weighted moving average.
    Ewma,
    /// Willems filter.
    Willems,
}

impl Method {
    /// Every method, in reporting order.
    pub const ALL: [Method; 12] = [
        Method::LyneHollick,
        Method::Ukih,
        Method::LocalMinimum,
        Method::FixedInterval,
        Method::SlidingInterval,
        Method::Chapman,
        Method::ChapmanMaxwell,
        Method::Boughton,
        Method::Furey,
        Method::Eckhardt,
        Method::Ewma,
        Method::Willems,
    ];

    /// Display label, also used as the export column header.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LyneHollick => "Lyne-Hollick",
            Self::Ukih => "UKIH",
            Self::LocalMinimum => "Local Min",
            Self::FixedInterval => "Fixed Interval",
            Self::SlidingInterval => "Sliding Interval",
            Self::Chapman => "Chapman",
            Self::ChapmanMaxwell => "CM",
            Self::Boughton => "Boughton",
            Self::Furey => "Furey",
            Self::Eckhardt => "Eckhardt",
            Self::Ewma => "EWMA",
            Self::Willems => "Willems",
        }
    }

    /// Short command-line key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::LyneHollick => "lh",
            Self::Ukih => "ukih",
            Self::LocalMinimum => "local-min",
            Self::FixedInterval => "fixed",
            Self::SlidingInterval => "slide",
            Self::Chapman => "chapman",
            Self::ChapmanMaxwell => "cm",
            Self::Boughton => "boughton",
            Self::Furey => "furey",
            Self::Eckhardt => "eckhardt",
            Self::Ewma => "ewma",
            Self::Willems => "willems",
        }
    }

    /// Whether this method fills its edges from a Lyne-Hollick series.
    pub fn needs_lyne_hollick(&self) -> bool {
        matches!(self, Self::LyneHollick | Self::Ukih | Self::LocalMinimum)
    }

    /// Whether an all-zero output from this method means "not applicable".
    pub fn can_degenerate(&self) -> bool {
        matches!(self, Self::Ukih | Self::LocalMinimum)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Method {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl FromStr for Method {
    type Err = BaseflowError;

    /// Parses a method from its label or key, ignoring case and treating
    /// spaces, dashes, and underscores alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = |t: &str| -> String {
            t.trim()
                .chars()
                .filter(|c| !matches!(c, ' ' | '-' | '_'))
                .flat_map(char::to_lowercase)
                .collect()
        };
        let wanted = norm(s);
        Method::ALL
            .into_iter()
            .find(|m| norm(m.label()) == wanted || norm(m.key()) == wanted)
            .ok_or_else(|| BaseflowError::UnknownMethod(s.to_string()))
    }
}
