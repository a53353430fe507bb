use super::*;

pub fn store_venue(connections: &memory::Connections, new_venue: usecases::NewVenue) -> Result<Venue> {
    let venue = connections
        .exclusive()
        .transaction(|conn| usecases::create_venue(conn, new_venue))?;
    info!("Stored venue {} ({})", venue.id, venue.name);
    Ok(venue)
}

/// Replaces the address metadata of a venue, leaving its geometry
/// untouched.
pub fn amend_venue_address(
    connections: &memory::Connections,
    id: &Id,
    address: Option<Address>,
) -> Result<()> {
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::update_venue_address(conn, id, address))?)
}
