use super::prelude::*;
use crate::util::{
    geo::{circle_polygon, MIN_CIRCLE_POLYGON_SEGMENTS},
    validate::is_valid_search_radius,
};

/// Commits the home location of a crawl.
///
/// The circular area around the center is tessellated into a polygon
/// that spatial queries match on. Committing a location drops any
/// cached search candidates in the same update.
pub fn set_home_location<R: CrawlRepo>(
    repo: &R,
    id: &Id,
    center: MapPoint,
    radius: Distance,
) -> Result<HomeLocation> {
    if !center.is_valid() {
        return Err(Error::InvalidGeometry);
    }
    if !is_valid_search_radius(radius) {
        return Err(Error::Radius);
    }
    let polygon = circle_polygon(center, radius, MIN_CIRCLE_POLYGON_SEGMENTS);
    debug_assert!(polygon.is_valid());
    let location = HomeLocation {
        center,
        radius,
        polygon,
    };
    repo.update_crawl_location(id, &location)?;
    log::debug!("Committed home location of crawl {id} at {center} with radius {radius}");
    Ok(location)
}
