//! Lunar month (masa) classification: month names, the masa number rule,
//! and adhimasa (intercalary month) detection.

use crate::error::BikramiError;

/// One solar sign spans 30 degrees of solar longitude.
pub const SOLAR_MONTH_DEG: f64 = 30.0;

/// The twelve Bikrami months, Chet first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BikramiMonth {
    Chet,
    Vaisakh,
    Jeth,
    Harh,
    Sawan,
    Bhadon,
    Assu,
    Katak,
    Maghar,
    Poh,
    Magh,
    Phagan,
}

/// All twelve months in order (0 = Chet .. 11 = Phagan).
pub const ALL_MONTHS: [BikramiMonth; 12] = [
    BikramiMonth::Chet,
    BikramiMonth::Vaisakh,
    BikramiMonth::Jeth,
    BikramiMonth::Harh,
    BikramiMonth::Sawan,
    BikramiMonth::Bhadon,
    BikramiMonth::Assu,
    BikramiMonth::Katak,
    BikramiMonth::Maghar,
    BikramiMonth::Poh,
    BikramiMonth::Magh,
    BikramiMonth::Phagan,
];

impl BikramiMonth {
    /// English name.
    pub const fn name_en(self) -> &'static str {
        match self {
            Self::Chet => "Chet",
            Self::Vaisakh => "Vaisakh",
            Self::Jeth => "Jeth",
            Self::Harh => "Harh",
            Self::Sawan => "Sawan",
            Self::Bhadon => "Bhadon",
            Self::Assu => "Assu",
            Self::Katak => "Katak",
            Self::Maghar => "Maghar",
            Self::Poh => "Poh",
            Self::Magh => "Magh",
            Self::Phagan => "Phagan",
        }
    }

    /// Gurmukhi name.
    pub const fn name_pa(self) -> &'static str {
        match self {
            Self::Chet => "ਚੇਤ",
            Self::Vaisakh => "ਵੈਸਾਖ",
            Self::Jeth => "ਜੇਠ",
            Self::Harh => "ਹਾੜ",
            Self::Sawan => "ਸਾਵਣ",
            Self::Bhadon => "ਭਾਦੋਂ",
            Self::Assu => "ਅੱਸੂ",
            Self::Katak => "ਕੱਤਕ",
            Self::Maghar => "ਮੱਘਰ",
            Self::Poh => "ਪੋਹ",
            Self::Magh => "ਮਾਘ",
            Self::Phagan => "ਫੱਗਣ",
        }
    }

    /// 0-based index (Chet = 0 .. Phagan = 11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Checked lookup by 0-based index.
    pub fn from_index(index: u8) -> Result<Self, BikramiError> {
        ALL_MONTHS.get(index as usize).copied().ok_or(
            BikramiError::OutOfRangeAstronomicalValue {
                quantity: "lunar month index",
                value: f64::from(index),
            },
        )
    }
}

/// Whether a lunar month is an inserted (intercalary) month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Adhimasa {
    /// Inserted month ("mal maas"): both bounding new moons fall inside one
    /// 30-degree solar sign, so the lunation contains no sankranti.
    Adhika,
    /// Regular month.
    Nija,
}

impl Adhimasa {
    /// True for an inserted month.
    pub const fn is_mal_maas(self) -> bool {
        matches!(self, Self::Adhika)
    }
}

/// Classify adhimasa from the conjunction longitudes bounding a lunation.
pub fn adhimasa_from_conjunctions(
    last_conjunction_deg: f64,
    next_conjunction_deg: f64,
) -> Adhimasa {
    let last_sign = (last_conjunction_deg / SOLAR_MONTH_DEG).trunc();
    let next_sign = (next_conjunction_deg / SOLAR_MONTH_DEG).trunc();
    if last_sign == next_sign {
        Adhimasa::Adhika
    } else {
        Adhimasa::Nija
    }
}

/// Base lunar month index (0 = Chet) from the true solar longitude and the
/// longitude of the last conjunction.
///
/// The month takes its number from the Sun's current sign, bumped by one
/// when the last new moon fell in that same sign: the month is named for
/// the sign the Sun enters during it.
pub fn masa_num_from_longitudes(true_solar_deg: f64, last_conjunction_deg: f64) -> u8 {
    let mut masa = ((true_solar_deg / SOLAR_MONTH_DEG).trunc() as i32) % 12;
    if masa == ((last_conjunction_deg / SOLAR_MONTH_DEG).trunc() as i32) % 12 {
        masa += 1;
    }
    ((masa + 12) % 12) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lookup_roundtrip() {
        for (i, month) in ALL_MONTHS.iter().enumerate() {
            assert_eq!(month.index(), i as u8);
            assert_eq!(BikramiMonth::from_index(i as u8).unwrap(), *month);
        }
    }

    #[test]
    fn month_lookup_out_of_range() {
        let err = BikramiMonth::from_index(12).unwrap_err();
        assert!(matches!(
            err,
            BikramiError::OutOfRangeAstronomicalValue { .. }
        ));
    }

    #[test]
    fn adhimasa_same_sign() {
        assert_eq!(adhimasa_from_conjunctions(265.0, 269.0), Adhimasa::Adhika);
    }

    #[test]
    fn adhimasa_sign_crossed() {
        assert_eq!(adhimasa_from_conjunctions(265.0, 295.0), Adhimasa::Nija);
    }

    #[test]
    fn masa_num_plain() {
        // Sun in Makara (sign 9), last conjunction in Dhanu (sign 8): Poh.
        assert_eq!(masa_num_from_longitudes(271.3, 265.0), 9);
    }

    #[test]
    fn masa_num_bump_when_conjunction_in_same_sign() {
        // Last new moon already in the Sun's sign: month named for the next
        // sign entered.
        assert_eq!(masa_num_from_longitudes(271.3, 272.0), 10);
    }

    #[test]
    fn masa_num_wraps_to_chet() {
        // Sun and last conjunction both in Meena (sign 11).
        assert_eq!(masa_num_from_longitudes(355.0, 352.0), 0);
    }

    #[test]
    fn masa_num_always_in_range() {
        for solar in 0..36 {
            for conj in 0..36 {
                let masa = masa_num_from_longitudes(solar as f64 * 10.0, conj as f64 * 10.0);
                assert!(masa < 12);
            }
        }
    }
}
