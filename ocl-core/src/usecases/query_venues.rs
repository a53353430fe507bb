use super::prelude::*;
use crate::util::validate::is_valid_search_radius;

/// All venues within `max_distance` of `center`, sorted nearest
/// first. For areal venues the distance is zero inside the area and
/// the distance to the closest boundary segment outside of it.
pub fn venues_near<R: VenueRepo>(
    repo: &R,
    center: MapPoint,
    max_distance: Distance,
) -> Result<Vec<Venue>> {
    if !center.is_valid() {
        return Err(Error::InvalidGeometry);
    }
    if !is_valid_search_radius(max_distance) {
        return Err(Error::Radius);
    }
    Ok(repo.venues_near(center, max_distance, None)?)
}

/// All venues lying entirely within the boundary polygon.
pub fn venues_within<R: VenueRepo>(repo: &R, boundary: &MapPolygon) -> Result<Vec<Venue>> {
    if !boundary.is_valid() {
        return Err(Error::InvalidGeometry);
    }
    Ok(repo.venues_within(boundary)?)
}

/// All venues lying entirely within the named postal area, or `None`
/// if no such area is stored.
pub fn venues_in_postal_area<R>(repo: &R, area_name: &str) -> Result<Option<Vec<Venue>>>
where
    R: VenueRepo + PostalAreaRepo,
{
    let Some(area) = repo.try_get_postal_area_by_name(area_name)? else {
        return Ok(None);
    };
    venues_within(repo, &area.boundary).map(Some)
}
