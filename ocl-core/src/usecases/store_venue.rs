use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewVenue {
    pub name: String,
    pub geometry: MapGeometry,
    pub address: Option<Address>,
}

/// Creates a venue with a fixed geometry.
///
/// Malformed geometries are rejected at this point so that spatial
/// queries never have to skip over stored venues.
pub fn create_venue<R: VenueRepo>(repo: &R, new: NewVenue) -> Result<Venue> {
    let NewVenue {
        name,
        geometry,
        address,
    } = new;
    if name.trim().is_empty() {
        return Err(Error::Name);
    }
    if !geometry.is_valid() {
        return Err(Error::InvalidGeometry);
    }
    let venue = Venue {
        id: Id::new(),
        name,
        geometry,
        address: address.filter(|address| !address.is_empty()),
    };
    repo.create_venue(&venue)?;
    Ok(venue)
}

/// Replaces the address metadata of a venue. The geometry is fixed
/// at creation and stays untouched.
pub fn update_venue_address<R: VenueRepo>(
    repo: &R,
    id: &Id,
    address: Option<Address>,
) -> Result<()> {
    let address = address.filter(|address| !address.is_empty());
    repo.update_venue_address(id, address.as_ref())?;
    Ok(())
}
