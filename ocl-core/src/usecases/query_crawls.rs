use super::prelude::*;

/// All crawls whose home polygon contains the given position and
/// whose period contains the given instant, bounds inclusive.
/// Crawls without a committed home location never match.
pub fn crawls_by_coordinate<R: CrawlRepo>(
    repo: &R,
    pos: MapPoint,
    active_at: Timestamp,
) -> Result<Vec<Crawl>> {
    if !pos.is_valid() {
        return Err(Error::InvalidGeometry);
    }
    Ok(repo.crawls_intersecting(pos, active_at)?)
}
