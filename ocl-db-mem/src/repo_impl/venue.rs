use std::cmp::Ordering;

use super::*;

impl<'a> VenueRepo for DbConnection<'a> {
    fn create_venue(&self, venue: &Venue) -> Result<()> {
        if !venue.geometry.is_valid() {
            return Err(repo::Error::InvalidGeometry);
        }
        let mut venues = self.store.venues.write();
        if venues.contains_key(&venue.id) {
            return Err(repo::Error::AlreadyExists);
        }
        venues.insert(venue.id.clone(), venue.clone());
        Ok(())
    }

    fn update_venue_address(&self, id: &Id, address: Option<&Address>) -> Result<()> {
        let mut venues = self.store.venues.write();
        let venue = venues.get_mut(id).ok_or(repo::Error::NotFound)?;
        venue.address = address.cloned();
        Ok(())
    }

    fn get_venue(&self, id: &Id) -> Result<Venue> {
        self.store
            .venues
            .read()
            .get(id)
            .cloned()
            .ok_or(repo::Error::NotFound)
    }

    fn get_venues(&self, ids: &[&Id]) -> Result<Vec<Venue>> {
        let venues = self.store.venues.read();
        Ok(ids
            .iter()
            .filter_map(|id| venues.get(*id).cloned())
            .collect())
    }

    fn count_venues(&self) -> Result<usize> {
        Ok(self.store.venues.read().len())
    }

    fn venues_near(
        &self,
        center: MapPoint,
        max_distance: Distance,
        restrict_to: Option<&[Id]>,
    ) -> Result<Vec<Venue>> {
        let venues = self.store.venues.read();
        let mut matches: Vec<_> = venues
            .values()
            .filter(|venue| {
                restrict_to
                    .map(|ids| ids.contains(&venue.id))
                    .unwrap_or(true)
            })
            // Cheap bounding box lower bound first, the exact
            // distance only for the remaining candidates.
            .filter(|venue| spatial::bbox_distance(center, &venue.geometry.bbox()) <= max_distance)
            .map(|venue| (venue, spatial::geometry_distance(center, &venue.geometry)))
            .filter(|(_, distance)| *distance <= max_distance)
            .collect();
        matches.sort_by(|(_, d1), (_, d2)| d1.partial_cmp(d2).unwrap_or(Ordering::Equal));
        Ok(matches
            .into_iter()
            .map(|(venue, _)| venue.clone())
            .collect())
    }

    fn venues_within(&self, boundary: &MapPolygon) -> Result<Vec<Venue>> {
        let venues = self.store.venues.read();
        Ok(venues
            .values()
            .filter(|venue| spatial::geometry_within(&venue.geometry, boundary))
            .cloned()
            .collect())
    }
}
