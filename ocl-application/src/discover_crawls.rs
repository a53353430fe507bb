use super::*;

/// All published crawls whose home area covers the position and
/// whose period covers the instant.
pub fn discover_crawls(
    connections: &memory::Connections,
    pos: MapPoint,
    at: Timestamp,
) -> Result<Vec<Crawl>> {
    let db = connections.shared();
    let crawls = usecases::crawls_by_coordinate(&db, pos, at)?;
    Ok(crawls
        .into_iter()
        .filter(|crawl| crawl.is_published())
        .collect())
}

/// All venues within the given distance of the position, sorted
/// nearest first.
pub fn find_venues_near(
    connections: &memory::Connections,
    center: MapPoint,
    max_distance: Distance,
) -> Result<Vec<Venue>> {
    let db = connections.shared();
    Ok(usecases::venues_near(&db, center, max_distance)?)
}
