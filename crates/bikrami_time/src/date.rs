//! Calendar date value types.

use serde::Serialize;

/// A date in the (proleptic) Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GregorianDate {
    /// Astronomical year (1 BCE = 0).
    pub year: i32,
    /// Month, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
}

impl GregorianDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

/// A date in the proleptic Julian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JulianDate {
    /// Astronomical year (1 BCE = 0).
    pub year: i32,
    /// Month, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
}

impl JulianDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}
