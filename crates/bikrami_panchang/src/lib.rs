//! Bikrami panchang resolution for a fixed observer.
//!
//! Converts a Gregorian (or proleptic Julian) calendar date into the
//! traditional Bikrami lunisolar representation: lunar date (month, paksha,
//! tithi), sidereal solar date, sunrise, nakshatra, and the Kali/Saka/
//! Bikrami era years, under the Purnimanta month convention.
//!
//! Astronomical quantities (true longitudes, conjunctions, the sidereal
//! solar date, the equation of time, sunrise) come from an injected
//! [`Celestial`] collaborator; everything in this crate is closed-form
//! calendar arithmetic over those quantities.

pub mod celestial;
pub mod error;
pub mod panchang;
pub mod panchang_types;

pub use celestial::{Celestial, LongitudePair, SauraDate};
pub use error::PanchangError;
pub use panchang::{
    AMRITSAR, IST_OFFSET_HOURS, InputCalendar, MonthYears, NormalizedDate, SunriseAhargana,
    UJJAIN, ahargana_at_sunrise, format_sunrise_ist, normalize_date, panchang_for_date,
    resolve_month_and_years, solar_civil_month,
};
pub use panchang_types::{
    JulianDateRecord, LunarDate, LunarEnglishDate, LunarPunjabiDate, PanchangRecord, SolarDate,
    SolarEnglishDate, SolarPunjabiDate,
};
