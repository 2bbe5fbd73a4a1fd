//! The celestial collaborator contract.
//!
//! The pipeline consumes raw astronomical quantities from an external model
//! (Punjab Jantris use a Drik system; historical dates use Surya
//! Siddhanta). Implementations must be pure with respect to this crate:
//! every query is keyed on its parameters, never on prior call sequence,
//! so a single instance may be shared across threads.

use bikrami_base::GeoLocation;
use bikrami_time::GregorianDate;

use crate::error::PanchangError;

/// True solar and lunar ecliptic longitudes, degrees in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongitudePair {
    pub solar_deg: f64,
    pub lunar_deg: f64,
}

/// Sidereal solar month (0 = Mesha .. 11 = Meena) and day within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SauraDate {
    pub masa: u8,
    pub divasa: u8,
}

/// Astronomical queries the panchang pipeline needs.
pub trait Celestial {
    /// True solar and lunar longitudes at the given ahargana.
    fn true_longitudes(&self, ahargana: f64) -> Result<LongitudePair, PanchangError>;

    /// Longitude of the conjunction (new moon) opening the lunation that
    /// contains the given tithi.
    fn last_conjunction_longitude(&self, ahargana: f64, tithi: f64)
    -> Result<f64, PanchangError>;

    /// Longitude of the conjunction closing that lunation.
    fn next_conjunction_longitude(&self, ahargana: f64, tithi: f64)
    -> Result<f64, PanchangError>;

    /// Sidereal solar month and day-of-month at the given ahargana,
    /// corrected by the desantara.
    fn saura_masa_and_divasa(
        &self,
        ahargana: f64,
        desantara: f64,
    ) -> Result<SauraDate, PanchangError>;

    /// Equation-of-time correction as a fraction of a day.
    fn daylight_equation(
        &self,
        year: i32,
        latitude_deg: f64,
        ahargana: f64,
    ) -> Result<f64, PanchangError>;

    /// Kaliyuga year containing the given ahargana.
    fn ahargana_to_kali(&self, ahargana: f64) -> Result<i64, PanchangError>;

    /// Sunrise instant for a Gregorian date at a location, as fractional
    /// hours UTC in [0, 24).
    fn sunrise_utc_hours(
        &self,
        date: GregorianDate,
        location: GeoLocation,
    ) -> Result<f64, PanchangError>;
}
