//! Julian Day conversions for the Gregorian and proleptic Julian calendars.
//!
//! Julian Days here are true JD (zero at noon), so a calendar date taken at
//! 00:00 UT maps to a value ending in `.5`. Gregorian conversions are
//! proleptic in both directions, with no cutover branch, because the
//! Julian-input path converts historical dates through a linear JD mapping.

use crate::date::{GregorianDate, JulianDate};

/// Julian Day Number of the Gregorian calendar reform (British adoption,
/// 1752-09-14). Dates below this carry a Julian-calendar block in the
/// panchang output.
pub const GREGORIAN_REFORM_JDN: f64 = 2_361_221.0;

/// English month names, for the Julian-calendar date block.
pub const ENGLISH_MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Convert a proleptic Gregorian date to the Julian Day at 00:00 UT.
///
/// Integer algorithm (Fliegel-van-Flandern), exact over the whole
/// proleptic range.
pub fn gregorian_to_jd(date: GregorianDate) -> f64 {
    let y = i64::from(date.year);
    let m = i64::from(date.month);
    let d = i64::from(date.day);
    let adj = (m - 14) / 12; // -1 for Jan/Feb, 0 otherwise
    let jdn = (1461 * (y + 4800 + adj)) / 4 + (367 * (m - 2 - 12 * adj)) / 12
        - (3 * ((y + 4900 + adj) / 100)) / 4
        + d
        - 32_075;
    jdn as f64 - 0.5
}

/// Convert a Julian Day to the proleptic Gregorian date of its civil day.
///
/// The fractional part (time of day) is discarded.
pub fn jd_to_gregorian(jd: f64) -> GregorianDate {
    let jdn = (jd + 0.5).floor() as i64;
    let mut l = jdn + 68_569;
    let n = (4 * l) / 146_097;
    l -= (146_097 * n + 3) / 4;
    let i = (4000 * (l + 1)) / 1_461_001;
    l = l - (1461 * i) / 4 + 31;
    let j = (80 * l) / 2447;
    let day = l - (2447 * j) / 80;
    let month = j + 2 - 12 * (j / 11);
    let year = 100 * (n - 49) + i + j / 11;
    GregorianDate::new(year as i32, month as u32, day as u32)
}

/// Convert a proleptic Julian calendar date to the Julian Day at 00:00 UT.
pub fn julian_to_jd(date: JulianDate) -> f64 {
    let (y, m) = if date.month <= 2 {
        (f64::from(date.year) - 1.0, f64::from(date.month) + 12.0)
    } else {
        (f64::from(date.year), f64::from(date.month))
    };
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + f64::from(date.day) - 1524.5
}

/// Convert an integral Julian Day to its Julian calendar date.
///
/// Integer algorithm (Fliegel-van-Flandern family); the input is the JD
/// whose noon falls on the wanted civil day.
pub fn jd_to_julian(julian_day: i64) -> JulianDate {
    let j = julian_day + 1402;
    let k = (j - 1) / 1461;
    let l = j - 1461 * k;
    let n = (l - 1) / 365 - l / 1461;
    let i = l - 365 * n + 30;
    let p = 80 * i / 2447;
    let day = i - 2447 * p / 80;
    let q = p / 11;
    let month = p + 2 - 12 * q;
    let year = 4 * k + n + q - 4716;
    JulianDate::new(year as i32, month as u32, day as u32)
}

/// Weekday index of a Julian Day: 0 = Sunday .. 6 = Saturday.
pub fn weekday_from_jd(jd: f64) -> u8 {
    ((jd + 1.5).floor() as i64).rem_euclid(7) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gregorian_epoch_2000() {
        let jd = gregorian_to_jd(GregorianDate::new(2000, 1, 1));
        assert!((jd - 2_451_544.5).abs() < 1e-9);
    }

    #[test]
    fn gregorian_roundtrip() {
        for &(y, m, d) in &[
            (2024, 1, 15),
            (1999, 12, 31),
            (1752, 9, 14),
            (1469, 4, 24),
            (100, 3, 1),
        ] {
            let date = GregorianDate::new(y, m, d);
            assert_eq!(jd_to_gregorian(gregorian_to_jd(date)), date, "{y}-{m}-{d}");
        }
    }

    #[test]
    fn julian_reform_eve() {
        // Julian 1582-10-04 and Gregorian 1582-10-14 are the same day.
        let jd = julian_to_jd(JulianDate::new(1582, 10, 4));
        assert!((jd - 2_299_159.5).abs() < 1e-9);
        assert_eq!(jd_to_gregorian(jd), GregorianDate::new(1582, 10, 14));
    }

    #[test]
    fn julian_calendar_inverse() {
        assert_eq!(jd_to_julian(2_299_160), JulianDate::new(1582, 10, 4));
        assert_eq!(jd_to_julian(2_257_715), JulianDate::new(1469, 4, 15));
    }

    #[test]
    fn fifteenth_century_offset_is_nine_days() {
        let jd = julian_to_jd(JulianDate::new(1469, 4, 15));
        assert_eq!(jd_to_gregorian(jd), GregorianDate::new(1469, 4, 24));
    }

    #[test]
    fn weekday_known_dates() {
        // 2000-01-01 was a Saturday, 2024-01-15 a Monday.
        assert_eq!(weekday_from_jd(2_451_544.5), 6);
        assert_eq!(weekday_from_jd(2_460_324.5), 1);
    }
}
