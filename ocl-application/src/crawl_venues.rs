use super::*;

pub fn add_venue_to_crawl(
    connections: &memory::Connections,
    id: &Id,
    venue_id: &Id,
) -> Result<()> {
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::add_venue(conn, id, venue_id))?)
}

pub fn remove_venue_from_crawl(
    connections: &memory::Connections,
    id: &Id,
    venue_id: &Id,
) -> Result<()> {
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::remove_venue(conn, id, venue_id))?)
}

/// Moves a venue one step towards the front of the walking order
/// and returns the resulting order.
pub fn move_venue_up(
    connections: &memory::Connections,
    id: &Id,
    venue_id: &Id,
) -> Result<Vec<Id>> {
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::reorder_venue_up(conn, id, venue_id))?)
}
