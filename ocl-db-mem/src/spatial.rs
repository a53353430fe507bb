// Exact geometric predicates over the stored geometries.
//
// Containment is evaluated in planar lat/lng space, which is
// accurate at venue and crawl scale away from the poles and the
// antimeridian. Distances are great-circle distances to the
// closest point, located by a planar projection onto the
// boundary segments.

use geo::Contains;
use geo_types::{Coord, LineString, Point, Polygon};

use ocl_core::entities::{Distance, MapBbox, MapGeometry, MapPoint, MapPolygon};

fn to_geo_polygon(polygon: &MapPolygon) -> Polygon {
    let exterior: Vec<Coord> = polygon
        .exterior()
        .iter()
        .map(|pt| {
            let (lat, lng) = pt.to_lat_lng_deg();
            Coord { x: lng, y: lat }
        })
        .collect();
    // The constructor closes the exterior ring.
    Polygon::new(LineString::from(exterior), vec![])
}

fn to_geo_point(pos: MapPoint) -> Point {
    let (lat, lng) = pos.to_lat_lng_deg();
    Point::new(lng, lat)
}

/// Checks if the position lies strictly inside the polygon.
pub(crate) fn polygon_contains(polygon: &MapPolygon, pos: MapPoint) -> bool {
    if !polygon.is_valid() || !pos.is_valid() {
        return false;
    }
    to_geo_polygon(polygon).contains(&to_geo_point(pos))
}

/// Great-circle distance from `pos` to the closest point of the
/// segment between `start` and `end`.
///
/// The closest point is located by a planar projection onto the
/// segment, which is sufficiently accurate for the short segments
/// of venue and home location boundaries.
fn segment_distance(pos: MapPoint, start: MapPoint, end: MapPoint) -> Distance {
    let (lat, lng) = pos.to_lat_lng_deg();
    let (lat1, lng1) = start.to_lat_lng_deg();
    let (lat2, lng2) = end.to_lat_lng_deg();

    let dx = lng2 - lng1;
    let dy = lat2 - lat1;
    if dx == 0.0 && dy == 0.0 {
        return MapPoint::distance(pos, start).unwrap_or(Distance::infinite());
    }

    let t = ((lng - lng1) * dx + (lat - lat1) * dy) / (dx * dx + dy * dy);
    let t = t.clamp(0.0, 1.0);
    let closest = MapPoint::from_lat_lng_deg(lat1 + t * dy, lng1 + t * dx);
    MapPoint::distance(pos, closest).unwrap_or(Distance::infinite())
}

/// Distance from a position to a polygon, zero if the position
/// lies inside.
pub(crate) fn polygon_distance(pos: MapPoint, polygon: &MapPolygon) -> Distance {
    if polygon_contains(polygon, pos) {
        return Distance::from_meters(0.0);
    }
    let exterior = polygon.exterior();
    let mut min = Distance::infinite();
    for (index, start) in exterior.iter().enumerate() {
        // The ring is stored without a closing vertex.
        let end = exterior[(index + 1) % exterior.len()];
        let dist = segment_distance(pos, *start, end);
        if dist < min {
            min = dist;
        }
    }
    min
}

/// Distance from a position to a venue geometry.
///
/// For areal geometries the distance is zero if the position lies
/// inside, otherwise the distance to the closest boundary segment.
pub(crate) fn geometry_distance(pos: MapPoint, geometry: &MapGeometry) -> Distance {
    match geometry {
        MapGeometry::Point(pt) => MapPoint::distance(pos, *pt).unwrap_or(Distance::infinite()),
        MapGeometry::Polygon(polygon) => polygon_distance(pos, polygon),
        MapGeometry::MultiPolygon(polygons) => polygons
            .iter()
            .map(|polygon| polygon_distance(pos, polygon))
            .fold(
                Distance::infinite(),
                |min, dist| if dist < min { dist } else { min },
            ),
    }
}

/// Lower bound for the distance from a position to anything
/// inside the box, zero if the position lies inside.
///
/// Boxes spanning the antimeridian are not approximated and
/// yield zero.
pub(crate) fn bbox_distance(pos: MapPoint, bbox: &MapBbox) -> Distance {
    if !bbox.is_valid() || !pos.is_valid() {
        return Distance::from_meters(0.0);
    }
    let sw = bbox.southwest();
    let ne = bbox.northeast();
    if sw.lng() > ne.lng() {
        return Distance::from_meters(0.0);
    }
    let (lat, lng) = pos.to_lat_lng_deg();
    let closest_lat = lat.clamp(sw.lat().to_deg(), ne.lat().to_deg());
    let closest_lng = lng.clamp(sw.lng().to_deg(), ne.lng().to_deg());
    if closest_lat == lat && closest_lng == lng {
        return Distance::from_meters(0.0);
    }
    let closest = MapPoint::from_lat_lng_deg(closest_lat, closest_lng);
    MapPoint::distance(pos, closest).unwrap_or(Distance::from_meters(0.0))
}

/// Checks if the geometry lies entirely within the boundary.
pub(crate) fn geometry_within(geometry: &MapGeometry, boundary: &MapPolygon) -> bool {
    if !geometry.is_valid() || !boundary.is_valid() {
        return false;
    }
    let boundary = to_geo_polygon(boundary);
    match geometry {
        MapGeometry::Point(pt) => boundary.contains(&to_geo_point(*pt)),
        MapGeometry::Polygon(polygon) => boundary.contains(&to_geo_polygon(polygon)),
        MapGeometry::MultiPolygon(polygons) => polygons
            .iter()
            .all(|polygon| boundary.contains(&to_geo_polygon(polygon))),
    }
}
