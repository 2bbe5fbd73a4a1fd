//! Geographic locations.

use crate::error::BikramiError;

/// A geographic location in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive, [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive, [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub const fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Check that latitude and longitude are within geographic bounds.
    pub fn validate(&self) -> Result<(), BikramiError> {
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(BikramiError::InvalidLocation("latitude outside [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(BikramiError::InvalidLocation(
                "longitude outside [-180, 180]",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_location() {
        assert!(GeoLocation::new(31.6, 74.9).validate().is_ok());
    }

    #[test]
    fn polar_boundary_is_valid() {
        assert!(GeoLocation::new(90.0, -180.0).validate().is_ok());
    }

    #[test]
    fn out_of_range_latitude() {
        let err = GeoLocation::new(91.0, 0.0).validate().unwrap_err();
        assert!(matches!(err, BikramiError::InvalidLocation(_)));
    }

    #[test]
    fn out_of_range_longitude() {
        assert!(GeoLocation::new(0.0, 181.0).validate().is_err());
    }
}
