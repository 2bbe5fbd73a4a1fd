//! Tithi (lunar day) and paksha resolution under the Purnimanta convention.

use crate::masa::Adhimasa;

/// One tithi spans 12 degrees of Moon-Sun elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Half of a lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing (bright) half.
    Sudi,
    /// Waning (dark) half.
    Vadi,
}

impl Paksha {
    /// English label.
    pub const fn name_en(self) -> &'static str {
        match self {
            Self::Sudi => "Sudi",
            Self::Vadi => "Vadi",
        }
    }

    /// Gurmukhi label.
    pub const fn name_pa(self) -> &'static str {
        match self {
            Self::Sudi => "ਸੁਦੀ",
            Self::Vadi => "ਵਦੀ",
        }
    }
}

/// Normalize an angle to [0, 360).
fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Tithi from the true solar and lunar longitudes.
///
/// Returns a value in [0, 30): the integer part plus one is the nominal
/// day-in-lunation, the fractional part is the elapsed fraction of the
/// current tithi's 12-degree arc.
pub fn tithi_from_longitudes(true_solar_deg: f64, true_lunar_deg: f64) -> f64 {
    normalize_360(true_lunar_deg - true_solar_deg) / TITHI_SEGMENT_DEG
}

/// Result of Purnimanta paksha resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiPaksha {
    /// The paksha.
    pub paksha: Paksha,
    /// 1-based day within the paksha, 1-15.
    pub tithi_day: u8,
    /// Whether the lunar month index advances by one at this boundary.
    pub advances_month: bool,
    /// Full-moon day: Sudi 15.
    pub pooranmashi: bool,
}

/// Resolve paksha and day-in-paksha from a raw tithi value.
///
/// Under Purnimanta the month ends at the full moon, so crossing into the
/// dark half advances the month index, except in an adhimasa month, which
/// keeps its index through both halves.
pub fn resolve_tithi_paksha(tithi: f64, adhimasa: Adhimasa) -> TithiPaksha {
    let mut tithi_day = tithi.trunc() as u8 + 1;
    let (paksha, advances_month) = if tithi_day > 15 {
        tithi_day -= 15;
        (Paksha::Vadi, adhimasa == Adhimasa::Nija)
    } else {
        (Paksha::Sudi, false)
    };
    let pooranmashi = paksha == Paksha::Sudi && tithi_day == 15;
    TithiPaksha {
        paksha,
        tithi_day,
        advances_month,
        pooranmashi,
    }
}
