use super::prelude::*;
use crate::util::validate::is_valid_search_radius;

/// Stores geocoder candidates on the crawl so that a follow-up
/// search around the same address does not hit the geocoder again.
pub fn cache_search_locations<R: CrawlRepo>(
    repo: &R,
    id: &Id,
    candidates: Vec<GeocodedLocation>,
    radius: Distance,
) -> Result<SearchLocations> {
    if !is_valid_search_radius(radius) {
        return Err(Error::Radius);
    }
    for candidate in &candidates {
        if !candidate.center.is_valid() {
            return Err(Error::InvalidGeometry);
        }
        if let Some(boundary) = &candidate.boundary {
            if !boundary.is_valid() {
                return Err(Error::InvalidGeometry);
            }
        }
    }
    let cache = SearchLocations { candidates, radius };
    repo.update_crawl_search_locations(id, &cache)?;
    Ok(cache)
}
