//! Output record types for the panchang pipeline.
//!
//! Field names follow the traditional Jantri JSON shape (camelCase on the
//! wire). The Gurmukhi representation mirrors the English one value for
//! value, differing only in glyph set. Records are plain immutable values:
//! one independent record per invocation.

use serde::Serialize;

use bikrami_time::GregorianDate;

/// The lunar date in English labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarEnglishDate {
    /// Lunar month, 1-12 (1 = Chet).
    pub month: u8,
    pub month_name: &'static str,
    pub paksh: &'static str,
    /// Day within the paksha, 1-15.
    pub tithi: u8,
    /// Bikrami year.
    pub year: i64,
}

/// The lunar date in Gurmukhi script.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarPunjabiDate {
    pub month: String,
    pub month_name: &'static str,
    pub paksh: &'static str,
    pub tithi: String,
    pub year: String,
}

/// The full lunar date block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarDate {
    /// Whole elapsed days since the Kaliyuga epoch at sunrise.
    pub ahargana: i64,
    /// True for an intercalary (adhimasa) month.
    pub mal_maas: bool,
    /// True on the full-moon day (Sudi 15).
    pub pooranmashi: bool,
    pub english_date: LunarEnglishDate,
    pub punjabi_date: LunarPunjabiDate,
    /// Lunar mansion of the Moon.
    pub nakshatra: &'static str,
    /// Elapsed fraction of the current tithi, [0, 1).
    pub tithi_fraction: f64,
}

/// The sidereal solar date in English labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarEnglishDate {
    /// Sidereal solar month, 1-12 (1 = Mesha).
    pub month: u8,
    /// Civil month name, Vaisakh-first ordering.
    pub month_name: &'static str,
    /// Day within the solar month.
    pub date: u8,
    /// Bikrami solar year.
    pub year: i64,
    /// Weekday name.
    pub day: &'static str,
}

/// The sidereal solar date in Gurmukhi script.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarPunjabiDate {
    pub month: String,
    pub month_name: &'static str,
    pub date: String,
    pub year: String,
    pub day: &'static str,
}

/// The full solar date block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarDate {
    pub english_date: SolarEnglishDate,
    pub punjabi_date: SolarPunjabiDate,
}

/// Julian-calendar equivalent, attached for pre-reform dates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JulianDateRecord {
    pub year: i32,
    pub month: u32,
    pub month_name: &'static str,
    pub date: u32,
}

/// The complete panchang for one civil date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanchangRecord {
    pub gregorian_date: GregorianDate,
    /// Julian Day at 00:00 UT of the input date.
    pub julian_day: f64,
    pub lunar_date: LunarDate,
    pub solar_date: SolarDate,
    /// Local sunrise, e.g. "7:27 AM IST".
    pub sunrise: String,
    pub kali_year: i64,
    pub saka_year: i64,
    /// Present when the Julian Day precedes the Gregorian reform, or the
    /// input was given in the Julian calendar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub julian_date: Option<JulianDateRecord>,
}
