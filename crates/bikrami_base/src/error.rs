//! Error types for Bikrami calendar classification.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar classification and table lookups.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BikramiError {
    /// Latitude or longitude outside the valid geographic range.
    InvalidLocation(&'static str),
    /// A derived astronomical quantity fell outside its table's bounds.
    OutOfRangeAstronomicalValue {
        /// Which quantity was out of range.
        quantity: &'static str,
        /// The offending value.
        value: f64,
    },
}

impl Display for BikramiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::OutOfRangeAstronomicalValue { quantity, value } => {
                write!(f, "{quantity} out of range: {value}")
            }
        }
    }
}

impl Error for BikramiError {}
