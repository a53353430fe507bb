use super::prelude::*;

/// Appends a venue to the walking order.
///
/// The venue must exist. Listing the same venue twice is a no-op.
pub fn add_venue<R>(repo: &R, id: &Id, venue_id: &Id) -> Result<()>
where
    R: CrawlRepo + VenueRepo,
{
    repo.get_venue(venue_id)?;
    let crawl = repo.get_crawl(id)?;
    if crawl.venues.contains(venue_id) {
        return Ok(());
    }
    let mut venues = crawl.venues;
    venues.push(venue_id.clone());
    repo.update_crawl_venues(id, &venues)?;
    Ok(())
}

/// Removes every occurrence of a venue from the walking order,
/// keeping the relative order of the remaining venues. Check-ins at
/// the removed venue are dropped by the same update.
pub fn remove_venue<R: CrawlRepo>(repo: &R, id: &Id, venue_id: &Id) -> Result<()> {
    let crawl = repo.get_crawl(id)?;
    if !crawl.venues.contains(venue_id) {
        return Ok(());
    }
    let venues: Vec<_> = crawl
        .venues
        .into_iter()
        .filter(|venue| venue != venue_id)
        .collect();
    repo.update_crawl_venues(id, &venues)?;
    Ok(())
}
