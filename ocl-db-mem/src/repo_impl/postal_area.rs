use super::*;

impl<'a> PostalAreaRepo for DbConnection<'a> {
    fn create_postal_area(&self, area: &PostalArea) -> Result<()> {
        if !area.boundary.is_valid() {
            return Err(repo::Error::InvalidGeometry);
        }
        let mut postal_areas = self.store.postal_areas.write();
        if postal_areas.contains_key(&area.id) {
            return Err(repo::Error::AlreadyExists);
        }
        // The name is the lookup key and must be unique as well.
        if postal_areas.values().any(|stored| stored.name == area.name) {
            return Err(repo::Error::AlreadyExists);
        }
        postal_areas.insert(area.id.clone(), area.clone());
        Ok(())
    }

    fn try_get_postal_area_by_name(&self, name: &str) -> Result<Option<PostalArea>> {
        let postal_areas = self.store.postal_areas.read();
        Ok(postal_areas
            .values()
            .find(|area| area.name == name)
            .cloned())
    }

    fn count_postal_areas(&self) -> Result<usize> {
        Ok(self.store.postal_areas.read().len())
    }
}
