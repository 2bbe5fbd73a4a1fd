//! Pure Bikrami calendar classification primitives.
//!
//! This crate provides:
//! - Tithi computation and Purnimanta paksha resolution
//! - Lunar month (masa) numbering and adhimasa detection
//! - Nakshatra classification from the Moon's longitude
//! - Name tables (months, weekdays, nakshatras, paksha) in English and
//!   Gurmukhi, plus Gurmukhi digit transliteration
//!
//! Everything here is closed-form arithmetic over longitudes already
//! obtained from an astronomical model; nothing performs ephemeris work.

pub mod digits;
pub mod error;
pub mod geo;
pub mod masa;
pub mod nakshatra;
pub mod tithi;
pub mod vaar;

pub use digits::{GURMUKHI_DIGITS, to_gurmukhi_num};
pub use error::BikramiError;
pub use geo::GeoLocation;
pub use masa::{
    ALL_MONTHS, Adhimasa, BikramiMonth, SOLAR_MONTH_DEG, adhimasa_from_conjunctions,
    masa_num_from_longitudes,
};
pub use nakshatra::{ALL_NAKSHATRAS, NAKSHATRA_SPAN_DEG, Nakshatra, nakshatra_from_longitude};
pub use tithi::{
    Paksha, TITHI_SEGMENT_DEG, TithiPaksha, resolve_tithi_paksha, tithi_from_longitudes,
};
pub use vaar::{ALL_WEEKDAYS, Weekday};
