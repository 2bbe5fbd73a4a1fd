//! The panchang pipeline: from a civil date to the full lunisolar record.
//!
//! The pipeline mirrors the traditional Jantri construction: normalize the
//! input date to a Julian Day, correct the ahargana to true local sunrise,
//! query the celestial model, then derive tithi/paksha, the lunar month,
//! the coupled era years, and the sidereal solar date. Each correction and
//! rule is a named step; the correction order is load-bearing and must not
//! be changed.

use bikrami_base::{
    BikramiError, BikramiMonth, GeoLocation, Weekday, adhimasa_from_conjunctions,
    masa_num_from_longitudes, nakshatra_from_longitude, resolve_tithi_paksha,
    tithi_from_longitudes, to_gurmukhi_num,
};
use bikrami_time::{
    ENGLISH_MONTH_NAMES, GREGORIAN_REFORM_JDN, GregorianDate, JulianDate, SUNRISE_DAY_FRACTION,
    ahargana_from_jd, desantara, gregorian_to_jd, jd_to_gregorian, jd_to_julian, julian_to_jd,
    kali_to_saka, saka_to_bikrami, weekday_from_jd,
};

use crate::celestial::Celestial;
use crate::error::PanchangError;
use crate::panchang_types::{
    JulianDateRecord, LunarDate, LunarEnglishDate, LunarPunjabiDate, PanchangRecord, SolarDate,
    SolarEnglishDate, SolarPunjabiDate,
};

/// Observer: Amritsar.
pub const AMRITSAR: GeoLocation = GeoLocation::new(31.6, 74.9);

/// Reference meridian of the astronomical model: Ujjain.
pub const UJJAIN: GeoLocation = GeoLocation::new(23.2, 75.8);

/// IST civil offset from UTC, hours.
pub const IST_OFFSET_HOURS: f64 = 5.5;

/// Which calendar the input date is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputCalendar {
    #[default]
    Gregorian,
    /// Proleptic Julian calendar, for historical Jantri dates.
    Julian,
}

/// A normalized input date: Gregorian fields, JD at 00:00 UT, weekday.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedDate {
    pub gregorian: GregorianDate,
    pub julian_day: f64,
    pub weekday: Weekday,
}

/// Resolve the input date to Gregorian fields, Julian Day, and weekday.
///
/// A Julian-calendar input is first mapped through its Julian Day to the
/// proleptic Gregorian equivalent; a Gregorian input converts directly.
pub fn normalize_date(year: i32, month: u32, day: u32, calendar: InputCalendar) -> NormalizedDate {
    let (gregorian, julian_day) = match calendar {
        InputCalendar::Gregorian => {
            let gregorian = GregorianDate::new(year, month, day);
            (gregorian, gregorian_to_jd(gregorian))
        }
        InputCalendar::Julian => {
            let julian_day = julian_to_jd(JulianDate::new(year, month, day));
            (jd_to_gregorian(julian_day), julian_day)
        }
    };
    NormalizedDate {
        gregorian,
        julian_day,
        weekday: Weekday::from_index(weekday_from_jd(julian_day)),
    }
}

/// Ahargana corrected to true local sunrise, plus the desantara used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunriseAhargana {
    pub ahargana: f64,
    pub desantara: f64,
}

/// Correct the base ahargana to true local sunrise at the observer.
///
/// Sequential corrections: nominal sunrise (+0.25 day), desantara (the
/// observer meridian's offset from the model's reference meridian), then
/// the equation of time evaluated at the corrected instant.
pub fn ahargana_at_sunrise<C: Celestial>(
    celestial: &C,
    julian_day: f64,
    year: i32,
) -> Result<SunriseAhargana, PanchangError> {
    let base = ahargana_from_jd(julian_day);
    let at_nominal_sunrise = base + SUNRISE_DAY_FRACTION;
    let desantara = desantara(AMRITSAR.longitude_deg, UJJAIN.longitude_deg);
    let at_observer_meridian = at_nominal_sunrise - desantara;
    let equation = celestial.daylight_equation(year, AMRITSAR.latitude_deg, at_observer_meridian)?;
    Ok(SunriseAhargana {
        ahargana: at_observer_meridian - equation,
        desantara,
    })
}

/// Lunar month index and the coupled era years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthYears {
    /// Lunar month, 0-11 after wraparound.
    pub month_index: u8,
    pub kali_year: i64,
    pub saka_year: i64,
    pub bikrami_year: i64,
    /// Bikrami solar year, adjusted near the new-year overlap window.
    pub solar_year: i64,
}

/// Apply the Purnimanta month shift and resolve the coupled era years.
///
/// The Kali year was anchored before the shift, so crossing from the last
/// month of one year into month 0 advances it here. The solar-year
/// adjustment corrects for the lunar and solar new-year instants falling
/// on different dates: the conditions are calendar tie-breaking rules and
/// are kept exactly as published Jantris apply them.
pub fn resolve_month_and_years(
    masa_num: u8,
    advances_month: bool,
    kali_year: i64,
    saura_masa: u8,
) -> MonthYears {
    let mut month_index = masa_num + u8::from(advances_month);
    let mut kali_year = kali_year;
    if month_index >= 12 {
        month_index -= 12;
        if month_index == 0 {
            // Chet Vadi: the wrap into the first month counts the next year.
            kali_year += 1;
        }
    }
    let saka_year = kali_to_saka(kali_year);
    let bikrami_year = saka_to_bikrami(saka_year);

    let mut solar_year = bikrami_year;
    if saura_masa == 0 && month_index == 11 {
        solar_year += 1;
    } else if (saura_masa == 10 || saura_masa == 11) && (month_index == 0 || month_index == 1) {
        solar_year -= 1;
    }

    MonthYears {
        month_index,
        kali_year,
        saka_year,
        bikrami_year,
        solar_year,
    }
}

/// Vaisakh-first civil index for the solar month name.
///
/// The sidereal count starts at Mesha but the Bikrami solar year begins
/// with Vaisakh, one month later.
pub fn solar_civil_month(saura_masa: u8) -> u8 {
    let shifted = saura_masa + 1;
    if shifted >= 12 { shifted - 12 } else { shifted }
}

/// Format a UTC sunrise instant as an IST clock string, e.g. "7:27 AM IST".
pub fn format_sunrise_ist(utc_hours: f64) -> String {
    let ist_hours = (utc_hours + IST_OFFSET_HOURS).rem_euclid(24.0);
    let total_minutes = ((ist_hours * 60.0).round() as i64).rem_euclid(24 * 60);
    let hour24 = total_minutes / 60;
    let minute = total_minutes % 60;
    let meridiem = if hour24 < 12 { "AM" } else { "PM" };
    let hour12 = match hour24 % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12}:{minute:02} {meridiem} IST")
}

/// Julian-calendar block for the output, from the noon JD of the civil day.
fn julian_date_record(julian_day: f64) -> Result<JulianDateRecord, PanchangError> {
    let date = jd_to_julian(julian_day.trunc() as i64 + 1);
    let month_name = ENGLISH_MONTH_NAMES
        .get((date.month as usize).wrapping_sub(1))
        .copied()
        .ok_or(PanchangError::Bikrami(
            BikramiError::OutOfRangeAstronomicalValue {
                quantity: "julian month",
                value: f64::from(date.month),
            },
        ))?;
    Ok(JulianDateRecord {
        year: date.year,
        month: date.month,
        month_name,
        date: date.day,
    })
}

/// Compute the full panchang record for a civil date.
///
/// `calendar` states which calendar the (year, month, day) triple is
/// expressed in; output is always keyed on the Gregorian equivalent.
pub fn panchang_for_date<C: Celestial>(
    celestial: &C,
    year: i32,
    month: u32,
    day: u32,
    calendar: InputCalendar,
) -> Result<PanchangRecord, PanchangError> {
    let normalized = normalize_date(year, month, day, calendar);
    let sunrise_ahargana =
        ahargana_at_sunrise(celestial, normalized.julian_day, normalized.gregorian.year)?;
    let ahargana = sunrise_ahargana.ahargana;

    AMRITSAR.validate()?;
    let sunrise = format_sunrise_ist(celestial.sunrise_utc_hours(normalized.gregorian, AMRITSAR)?);

    let longitudes = celestial.true_longitudes(ahargana)?;
    let tithi = tithi_from_longitudes(longitudes.solar_deg, longitudes.lunar_deg);
    let last_conjunction = celestial.last_conjunction_longitude(ahargana, tithi)?;
    let next_conjunction = celestial.next_conjunction_longitude(ahargana, tithi)?;
    let adhimasa = adhimasa_from_conjunctions(last_conjunction, next_conjunction);

    let masa_num = masa_num_from_longitudes(longitudes.solar_deg, last_conjunction);
    let saura = celestial.saura_masa_and_divasa(ahargana, sunrise_ahargana.desantara)?;

    // The Kali year anchors on the pre-shift masa number, offset to the
    // start of the traditional month-counting sequence.
    let kali_base =
        celestial.ahargana_to_kali(ahargana + f64::from(4 - i32::from(masa_num)) * 30.0)?;

    let tithi_paksha = resolve_tithi_paksha(tithi, adhimasa);
    let years =
        resolve_month_and_years(masa_num, tithi_paksha.advances_month, kali_base, saura.masa);

    let lunar_month = BikramiMonth::from_index(years.month_index)?;
    let solar_month = BikramiMonth::from_index(solar_civil_month(saura.masa))?;
    let nakshatra = nakshatra_from_longitude(longitudes.lunar_deg)?;

    let lunar_date = LunarDate {
        ahargana: ahargana.trunc() as i64,
        mal_maas: adhimasa.is_mal_maas(),
        pooranmashi: tithi_paksha.pooranmashi,
        english_date: LunarEnglishDate {
            month: years.month_index + 1,
            month_name: lunar_month.name_en(),
            paksh: tithi_paksha.paksha.name_en(),
            tithi: tithi_paksha.tithi_day,
            year: years.bikrami_year,
        },
        punjabi_date: LunarPunjabiDate {
            month: to_gurmukhi_num(i64::from(years.month_index + 1)),
            month_name: lunar_month.name_pa(),
            paksh: tithi_paksha.paksha.name_pa(),
            tithi: to_gurmukhi_num(i64::from(tithi_paksha.tithi_day)),
            year: to_gurmukhi_num(years.bikrami_year),
        },
        nakshatra: nakshatra.name_en(),
        tithi_fraction: tithi.fract(),
    };

    let solar_date = SolarDate {
        english_date: SolarEnglishDate {
            month: saura.masa + 1,
            month_name: solar_month.name_en(),
            date: saura.divasa,
            year: years.solar_year,
            day: normalized.weekday.name_en(),
        },
        punjabi_date: SolarPunjabiDate {
            month: to_gurmukhi_num(i64::from(saura.masa + 1)),
            month_name: solar_month.name_pa(),
            date: to_gurmukhi_num(i64::from(saura.divasa)),
            year: to_gurmukhi_num(years.solar_year),
            day: normalized.weekday.name_pa(),
        },
    };

    let julian_date = if normalized.julian_day < GREGORIAN_REFORM_JDN
        || calendar == InputCalendar::Julian
    {
        Some(julian_date_record(normalized.julian_day)?)
    } else {
        None
    };

    Ok(PanchangRecord {
        gregorian_date: normalized.gregorian,
        julian_day: normalized.julian_day,
        lunar_date,
        solar_date,
        sunrise,
        kali_year: years.kali_year,
        saka_year: years.saka_year,
        julian_date,
    })
}
