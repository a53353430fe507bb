use super::*;

/// Loads a crawl with walking order and roster expanded into full
/// documents.
pub fn crawl_view(connections: &memory::Connections, id: &Id) -> Result<usecases::CrawlView> {
    let db = connections.shared();
    Ok(usecases::load_crawl_view(&db, id)?)
}

/// Position markers of everyone checked in somewhere on the crawl,
/// except the requesting participant.
pub fn fellow_attendant_markers(
    connections: &memory::Connections,
    crawl_id: &Id,
    requester: &Id,
) -> Result<Vec<usecases::AttendantMarker>> {
    let db = connections.shared();
    let crawl = usecases::get_crawl(&db, crawl_id)?;
    Ok(usecases::expand_attendant_locations(&db, &crawl, requester)?)
}
