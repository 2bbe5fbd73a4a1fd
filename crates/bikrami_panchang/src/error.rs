//! Error type for the panchang pipeline.

use std::error::Error;
use std::fmt::{Display, Formatter};

use bikrami_base::BikramiError;

/// Errors from panchang resolution.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PanchangError {
    /// Error from calendar classification or a table lookup.
    Bikrami(BikramiError),
    /// Failure reported by the celestial collaborator.
    Celestial(String),
}

impl Display for PanchangError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bikrami(e) => write!(f, "calendar error: {e}"),
            Self::Celestial(msg) => write!(f, "celestial model error: {msg}"),
        }
    }
}

impl Error for PanchangError {}

impl From<BikramiError> for PanchangError {
    fn from(e: BikramiError) -> Self {
        Self::Bikrami(e)
    }
}
