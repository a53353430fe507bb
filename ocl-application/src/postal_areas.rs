use super::*;

pub fn add_postal_area(
    connections: &memory::Connections,
    new_area: usecases::NewPostalArea,
) -> Result<PostalArea> {
    let area = connections
        .exclusive()
        .transaction(|conn| usecases::create_postal_area(conn, new_area))?;
    info!("Added postal area {} ({})", area.id, area.name);
    Ok(area)
}

/// All venues lying entirely within the named postal area, or
/// `None` if no area of that name is stored.
pub fn find_venues_by_postal_area(
    connections: &memory::Connections,
    area_name: &str,
) -> Result<Option<Vec<Venue>>> {
    let db = connections.shared();
    Ok(usecases::venues_in_postal_area(&db, area_name)?)
}
