use crate::models::Coordinate;

/// Earth's mean radius in meters
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate the Haversine great-circle distance between two points in meters
///
/// Commutative, and zero for identical coordinates. Inputs are assumed
/// pre-validated by the caller; floating-point differences up to a meter are
/// considered equivalent.
#[inline]
pub fn haversine_distance_m(from: &Coordinate, to: &Coordinate) -> f64 {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}
