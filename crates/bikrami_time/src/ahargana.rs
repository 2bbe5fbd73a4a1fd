//! Ahargana: elapsed days (with fractional day) since the Kaliyuga epoch.
//!
//! The ahargana is the internal time axis of the Surya Siddhanta family of
//! models; every astronomical query in the pipeline is keyed on it.

/// Julian Day of the Kaliyuga epoch (midnight, 18 February 3102 BCE).
pub const KALI_EPOCH_JD: f64 = 588_465.5;

/// Day fraction shifting the nominal instant from midnight to sunrise.
pub const SUNRISE_DAY_FRACTION: f64 = 0.25;

/// Base ahargana for a Julian Day.
pub fn ahargana_from_jd(jd: f64) -> f64 {
    jd - KALI_EPOCH_JD
}

/// Desantara: the observer meridian's offset from the model's reference
/// meridian, as a fraction of a day.
pub fn desantara(observer_longitude_deg: f64, reference_longitude_deg: f64) -> f64 {
    (observer_longitude_deg - reference_longitude_deg) / 360.0
}
