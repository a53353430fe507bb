use crate::entities::*;

/// Lower bound on the tessellation of circular areas.
pub const MIN_CIRCLE_POLYGON_SEGMENTS: usize = 32;

/// Approximate a circle on the sphere by a closed polygon.
///
/// The exterior ring consists of great-circle destination points at
/// equally spaced bearings around the center. Segment counts below
/// [`MIN_CIRCLE_POLYGON_SEGMENTS`] are raised to that minimum.
pub fn circle_polygon(center: MapPoint, radius: Distance, segments: usize) -> MapPolygon {
    debug_assert!(center.is_valid());
    debug_assert!(radius.is_valid());
    let segments = segments.max(MIN_CIRCLE_POLYGON_SEGMENTS);
    let (lat_rad, lng_rad) = center.to_lat_lng_rad();
    let angular_radius = radius.to_meters() / MEAN_EARTH_RADIUS.to_meters();
    let (lat_sin, lat_cos) = (lat_rad.sin(), lat_rad.cos());
    let (ar_sin, ar_cos) = (angular_radius.sin(), angular_radius.cos());
    let exterior = (0..segments)
        .map(|segment| {
            let bearing = std::f64::consts::TAU * segment as f64 / segments as f64;
            let lat2_sin = lat_sin * ar_cos + lat_cos * ar_sin * bearing.cos();
            let lat2_rad = lat2_sin.asin();
            let lng2_rad =
                lng_rad + (bearing.sin() * ar_sin * lat_cos).atan2(ar_cos - lat_sin * lat2_sin);
            // Clamping compensates rounding at the poles.
            MapPoint::from_lat_lng_deg(
                lat2_rad.to_degrees().clamp(-90.0, 90.0),
                wrap_lng_deg(lng2_rad.to_degrees()),
            )
        })
        .collect();
    MapPolygon::new(exterior)
}

fn wrap_lng_deg(lng_deg: f64) -> f64 {
    (lng_deg + 180.0).rem_euclid(360.0) - 180.0
}
