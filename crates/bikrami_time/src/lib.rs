//! Day-count and calendar conversions for the Bikrami panchang.
//!
//! This crate provides:
//! - Julian Day ↔ Gregorian calendar conversions (proleptic, no cutover)
//! - Proleptic Julian calendar → Julian Day, and the integer inverse used
//!   for pre-reform date display
//! - Weekday determination from a Julian Day
//! - Ahargana (days since the Kaliyuga epoch) base conversion and the
//!   desantara meridian correction
//! - Kali → Saka → Bikrami era-year offsets

pub mod ahargana;
pub mod date;
pub mod julian;
pub mod years;

pub use ahargana::{KALI_EPOCH_JD, SUNRISE_DAY_FRACTION, ahargana_from_jd, desantara};
pub use date::{GregorianDate, JulianDate};
pub use julian::{
    ENGLISH_MONTH_NAMES, GREGORIAN_REFORM_JDN, gregorian_to_jd, jd_to_gregorian, jd_to_julian,
    julian_to_jd, weekday_from_jd,
};
pub use years::{KALI_SAKA_OFFSET, SAKA_BIKRAMI_OFFSET, kali_to_saka, saka_to_bikrami};
