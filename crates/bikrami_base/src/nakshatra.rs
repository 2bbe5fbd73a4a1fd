//! Nakshatra (lunar mansion) classification.
//!
//! The ecliptic is divided into 27 equal nakshatras of 13 deg 20' each;
//! the Moon's true longitude selects one.

use crate::error::BikramiError;

/// Span of one nakshatra: 360/27 degrees.
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// The 27 nakshatras, Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini .. 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// English name.
    pub const fn name_en(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// Gurmukhi name.
    pub const fn name_pa(self) -> &'static str {
        match self {
            Self::Ashwini => "ਅਸ਼ਵਨੀ",
            Self::Bharani => "ਭਰਨੀ",
            Self::Krittika => "ਕ੍ਰਿਤਿਕਾ",
            Self::Rohini => "ਰੋਹਿਣੀ",
            Self::Mrigashira => "ਮ੍ਰਿਗਸ਼ਿਰਾ",
            Self::Ardra => "ਆਰਦ੍ਰਾ",
            Self::Punarvasu => "ਪੁਨਰਵਸੂ",
            Self::Pushya => "ਪੁਸ਼ਯ",
            Self::Ashlesha => "ਅਸ਼ਲੇਸ਼ਾ",
            Self::Magha => "ਮਘਾ",
            Self::PurvaPhalguni => "ਪੂਰਵਾ ਫੱਗਣੀ",
            Self::UttaraPhalguni => "ਉੱਤਰਾ ਫੱਗਣੀ",
            Self::Hasta => "ਹਸਤ",
            Self::Chitra => "ਚਿਤਰਾ",
            Self::Swati => "ਸਵਾਤੀ",
            Self::Vishakha => "ਵਿਸ਼ਾਖਾ",
            Self::Anuradha => "ਅਨੁਰਾਧਾ",
            Self::Jyeshtha => "ਜਯੇਸ਼ਠਾ",
            Self::Mula => "ਮੂਲ",
            Self::PurvaAshadha => "ਪੂਰਵਾ ਅਸ਼ਾੜਾ",
            Self::UttaraAshadha => "ਉੱਤਰਾ ਅਸ਼ਾੜਾ",
            Self::Shravana => "ਸ਼੍ਰਵਣ",
            Self::Dhanishtha => "ਧਨਿਸ਼ਠਾ",
            Self::Shatabhisha => "ਸ਼ਤਭਿਸ਼ਾ",
            Self::PurvaBhadrapada => "ਪੂਰਵਾ ਭਾਦਰਪਦ",
            Self::UttaraBhadrapada => "ਉੱਤਰਾ ਭਾਦਰਪਦ",
            Self::Revati => "ਰੇਵਤੀ",
        }
    }

    /// 0-based index (Ashwini = 0 .. Revati = 26).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Classify the nakshatra from the Moon's true longitude.
///
/// Fails if the longitude is outside [0, 360), which can only happen when
/// the upstream model returns a bad value.
pub fn nakshatra_from_longitude(true_lunar_deg: f64) -> Result<Nakshatra, BikramiError> {
    if !(0.0..360.0).contains(&true_lunar_deg) {
        return Err(BikramiError::OutOfRangeAstronomicalValue {
            quantity: "lunar longitude",
            value: true_lunar_deg,
        });
    }
    let index = (true_lunar_deg * 27.0 / 360.0).trunc() as usize;
    ALL_NAKSHATRAS.get(index).copied().ok_or(
        BikramiError::OutOfRangeAstronomicalValue {
            quantity: "nakshatra index",
            value: index as f64,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last() {
        assert_eq!(nakshatra_from_longitude(0.0).unwrap(), Nakshatra::Ashwini);
        assert_eq!(
            nakshatra_from_longitude(359.999).unwrap(),
            Nakshatra::Revati
        );
    }

    #[test]
    fn interior_value() {
        // 310 degrees falls in the 24th mansion.
        assert_eq!(
            nakshatra_from_longitude(310.0).unwrap(),
            Nakshatra::Shatabhisha
        );
    }

    #[test]
    fn boundary_between_mansions() {
        let span = NAKSHATRA_SPAN_DEG;
        assert_eq!(
            nakshatra_from_longitude(span - 1e-9).unwrap(),
            Nakshatra::Ashwini
        );
        assert_eq!(nakshatra_from_longitude(span).unwrap(), Nakshatra::Bharani);
    }

    #[test]
    fn out_of_range_longitude_is_rejected() {
        assert!(nakshatra_from_longitude(360.0).is_err());
        assert!(nakshatra_from_longitude(-0.1).is_err());
    }

    #[test]
    fn indices_match_table() {
        for (i, nakshatra) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(nakshatra.index(), i as u8);
        }
    }
}
