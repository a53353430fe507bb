use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewPostalArea {
    pub name: String,
    pub description: String,
    pub boundary: MapPolygon,
}

/// Creates a postal area with a fixed boundary polygon.
pub fn create_postal_area<R: PostalAreaRepo>(repo: &R, new: NewPostalArea) -> Result<PostalArea> {
    let NewPostalArea {
        name,
        description,
        boundary,
    } = new;
    if name.trim().is_empty() {
        return Err(Error::Name);
    }
    if !boundary.is_valid() {
        return Err(Error::InvalidGeometry);
    }
    let area = PostalArea {
        id: Id::new(),
        name,
        description,
        boundary,
    };
    repo.create_postal_area(&area)?;
    Ok(area)
}
