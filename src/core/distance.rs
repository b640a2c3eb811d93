use crate::models::{Place, UserLocation};

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Round a distance to one decimal place, the precision surfaced to clients
#[inline]
pub fn round_km(distance_km: f64) -> f64 {
    (distance_km * 10.0).round() / 10.0
}

/// Distance to use for a candidate during scoring
///
/// When a live user location is available the distance is recomputed from
/// it and rounded to one decimal; otherwise the caller-supplied distance
/// field is used unchanged.
#[inline]
pub fn resolved_distance(place: &Place, user_location: Option<UserLocation>) -> f64 {
    match user_location {
        Some(loc) => round_km(haversine_distance(
            loc.latitude,
            loc.longitude,
            place.latitude,
            place.longitude,
        )),
        None => place.distance,
    }
}
