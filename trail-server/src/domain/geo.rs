//! Geographic points and great-circle distance.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Error returned when constructing a point from out-of-range coordinates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinates: {reason}")]
pub struct InvalidCoordinates {
    reason: &'static str,
}

/// A WGS84 latitude/longitude pair in decimal degrees.
///
/// Latitude is always within `[-90, 90]` and longitude within `[-180, 180]`.
/// Both are finite. This type guarantees that any `GeoPoint` value is valid
/// by construction.
///
/// # Examples
///
/// ```
/// use trail_server::domain::GeoPoint;
///
/// let point = GeoPoint::new(46.55, 7.98).unwrap();
/// assert_eq!(point.lat(), 46.55);
///
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// assert!(GeoPoint::new(0.0, -180.5).is_err());
/// assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint", into = "RawPoint")]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Create a point, validating both coordinates.
    pub fn new(lat: f64, lon: f64) -> Result<Self, InvalidCoordinates> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(InvalidCoordinates {
                reason: "coordinates must be finite numbers",
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinates {
                reason: "latitude must be within [-90, 90]",
            });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(InvalidCoordinates {
                reason: "longitude must be within [-180, 180]",
            });
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Great-circle distance to another point in kilometres (haversine).
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let dphi = (other.lat - self.lat).to_radians();
        let dlambda = (other.lon - self.lon).to_radians();
        let a =
            (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
    }

    /// Position on the unit sphere as Cartesian `[x, y, z]`.
    ///
    /// Euclidean (chord) distance between two such vectors is monotonic in
    /// great-circle distance, so nearest-neighbour queries in this space
    /// agree with haversine ordering.
    pub fn to_unit_vector(&self) -> [f64; 3] {
        let phi = self.lat.to_radians();
        let lambda = self.lon.to_radians();
        [phi.cos() * lambda.cos(), phi.cos() * lambda.sin(), phi.sin()]
    }
}

impl fmt::Debug for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoPoint({}, {})", self.lat, self.lon)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5},{:.5}", self.lat, self.lon)
    }
}

/// Unvalidated wire form of a point.
#[derive(Serialize, Deserialize)]
struct RawPoint {
    lat: f64,
    lon: f64,
}

impl TryFrom<RawPoint> for GeoPoint {
    type Error = InvalidCoordinates;

    fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
        GeoPoint::new(raw.lat, raw.lon)
    }
}

impl From<GeoPoint> for RawPoint {
    fn from(point: GeoPoint) -> Self {
        RawPoint {
            lat: point.lat,
            lon: point.lon,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Every in-range pair is accepted
        #[test]
        fn in_range_accepted(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            prop_assert!(GeoPoint::new(lat, lon).is_ok());
        }

        /// Latitudes beyond the poles are always rejected
        #[test]
        fn out_of_range_lat_rejected(lat in 90.0001f64..1000.0, lon in -180.0f64..=180.0) {
            prop_assert!(GeoPoint::new(lat, lon).is_err());
            prop_assert!(GeoPoint::new(-lat, lon).is_err());
        }

        /// Distance is symmetric and non-negative
        #[test]
        fn distance_symmetric(
            a_lat in -90.0f64..=90.0, a_lon in -180.0f64..=180.0,
            b_lat in -90.0f64..=90.0, b_lon in -180.0f64..=180.0,
        ) {
            let a = GeoPoint::new(a_lat, a_lon).unwrap();
            let b = GeoPoint::new(b_lat, b_lon).unwrap();
            let ab = a.distance_km(&b);
            let ba = b.distance_km(&a);
            prop_assert!(ab >= 0.0);
            prop_assert!((ab - ba).abs() < 1e-6);
        }
    }
}
