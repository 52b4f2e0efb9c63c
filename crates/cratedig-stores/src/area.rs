//! Search rectangle around the user for the nearby-store query.
//!
//! Longitude span widens with latitude so the rectangle keeps roughly the
//! same physical half-width everywhere.

use cratedig_core::GeoPoint;
use serde::Serialize;

/// Text query sent to the places directory.
pub const STORE_SEARCH_QUERY: &str = "Vinyl record store near me";

const KM_PER_LAT_DEGREE: f64 = 111.32;

/// Below this cosine (about 89.4°) the longitude span would blow up.
const MIN_COS_LAT: f64 = 0.01;

/// Axis-aligned lat/lng rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchBounds {
    pub southwest: GeoPoint,
    pub northeast: GeoPoint,
}

impl SearchBounds {
    #[must_use]
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.southwest.lat..=self.northeast.lat).contains(&point.lat)
            && (self.southwest.lng..=self.northeast.lng).contains(&point.lng)
    }
}

/// Rectangle extending `radius_km` north, south, east and west of `center`.
///
/// Latitudes clamp to ±90 and longitudes to ±180; the rectangle does not
/// wrap across the antimeridian.
#[must_use]
pub fn search_bounds(center: GeoPoint, radius_km: f64) -> SearchBounds {
    let lat_delta = radius_km / KM_PER_LAT_DEGREE;
    let cos_lat = center.lat.to_radians().cos().max(MIN_COS_LAT);
    let lng_delta = radius_km / (KM_PER_LAT_DEGREE * cos_lat);

    SearchBounds {
        southwest: GeoPoint {
            lat: (center.lat - lat_delta).max(-90.0),
            lng: (center.lng - lng_delta).max(-180.0),
        },
        northeast: GeoPoint {
            lat: (center.lat + lat_delta).min(90.0),
            lng: (center.lng + lng_delta).min(180.0),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: GeoPoint = GeoPoint {
        lat: 51.507_4,
        lng: -0.127_8,
    };

    #[test]
    fn bounds_are_centered_on_origin() {
        let b = search_bounds(LONDON, 20.0);
        let mid_lat = (b.southwest.lat + b.northeast.lat) / 2.0;
        let mid_lng = (b.southwest.lng + b.northeast.lng) / 2.0;
        assert!((mid_lat - LONDON.lat).abs() < 1e-9);
        assert!((mid_lng - LONDON.lng).abs() < 1e-9);
        assert!(b.contains(LONDON));
    }

    #[test]
    fn lat_span_matches_radius() {
        let b = search_bounds(LONDON, 20.0);
        let span_km = (b.northeast.lat - b.southwest.lat) * KM_PER_LAT_DEGREE;
        assert!((span_km - 40.0).abs() < 1e-6, "got {span_km}");
    }

    #[test]
    fn lng_span_widens_away_from_equator() {
        let equator = search_bounds(GeoPoint { lat: 0.0, lng: 0.0 }, 20.0);
        let london = search_bounds(LONDON, 20.0);
        let eq_span = equator.northeast.lng - equator.southwest.lng;
        let ldn_span = london.northeast.lng - london.southwest.lng;
        assert!(ldn_span > eq_span * 1.5, "eq={eq_span} ldn={ldn_span}");
    }

    #[test]
    fn bounds_clamp_near_pole() {
        let b = search_bounds(
            GeoPoint {
                lat: 89.95,
                lng: 179.9,
            },
            50.0,
        );
        assert!(b.northeast.lat <= 90.0);
        assert!(b.northeast.lng <= 180.0);
        assert!(b.southwest.lng >= -180.0);
        assert!(b.southwest.lat.is_finite());
    }

    #[test]
    fn far_point_is_outside() {
        let b = search_bounds(LONDON, 20.0);
        let paris = GeoPoint {
            lat: 48.856_6,
            lng: 2.352_2,
        };
        assert!(!b.contains(paris));
    }
}
