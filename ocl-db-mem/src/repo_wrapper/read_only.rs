use super::*;

impl<'a> CrawlRepo for DbReadOnly<'a> {
    fn create_crawl(&self, crawl: &Crawl) -> Result<()> {
        self.inner().create_crawl(crawl)
    }

    fn get_crawl(&self, id: &Id) -> Result<Crawl> {
        self.inner().get_crawl(id)
    }

    fn try_get_crawl(&self, id: &Id) -> Result<Option<Crawl>> {
        self.inner().try_get_crawl(id)
    }

    fn count_crawls(&self) -> Result<usize> {
        self.inner().count_crawls()
    }

    fn update_crawl_details(&self, id: &Id, details: &CrawlDetails) -> Result<()> {
        self.inner().update_crawl_details(id, details)
    }

    fn update_crawl_publication(&self, id: &Id, published: Option<Timestamp>) -> Result<()> {
        self.inner().update_crawl_publication(id, published)
    }

    fn update_crawl_venues(&self, id: &Id, venues: &[Id]) -> Result<()> {
        self.inner().update_crawl_venues(id, venues)
    }

    fn update_crawl_location(&self, id: &Id, location: &HomeLocation) -> Result<()> {
        self.inner().update_crawl_location(id, location)
    }

    fn update_crawl_search_locations(&self, id: &Id, cache: &SearchLocations) -> Result<()> {
        self.inner().update_crawl_search_locations(id, cache)
    }

    fn update_crawl_attendance(&self, id: &Id, transition: &AttendanceTransition) -> Result<()> {
        self.inner().update_crawl_attendance(id, transition)
    }

    fn crawls_intersecting(&self, pos: MapPoint, active_at: Timestamp) -> Result<Vec<Crawl>> {
        self.inner().crawls_intersecting(pos, active_at)
    }
}

impl<'a> VenueRepo for DbReadOnly<'a> {
    fn create_venue(&self, venue: &Venue) -> Result<()> {
        self.inner().create_venue(venue)
    }

    fn update_venue_address(&self, id: &Id, address: Option<&Address>) -> Result<()> {
        self.inner().update_venue_address(id, address)
    }

    fn get_venue(&self, id: &Id) -> Result<Venue> {
        self.inner().get_venue(id)
    }

    fn get_venues(&self, ids: &[&Id]) -> Result<Vec<Venue>> {
        self.inner().get_venues(ids)
    }

    fn count_venues(&self) -> Result<usize> {
        self.inner().count_venues()
    }

    fn venues_near(
        &self,
        center: MapPoint,
        max_distance: Distance,
        restrict_to: Option<&[Id]>,
    ) -> Result<Vec<Venue>> {
        self.inner().venues_near(center, max_distance, restrict_to)
    }

    fn venues_within(&self, boundary: &MapPolygon) -> Result<Vec<Venue>> {
        self.inner().venues_within(boundary)
    }
}

impl<'a> PostalAreaRepo for DbReadOnly<'a> {
    fn create_postal_area(&self, area: &PostalArea) -> Result<()> {
        self.inner().create_postal_area(area)
    }

    fn try_get_postal_area_by_name(&self, name: &str) -> Result<Option<PostalArea>> {
        self.inner().try_get_postal_area_by_name(name)
    }

    fn count_postal_areas(&self) -> Result<usize> {
        self.inner().count_postal_areas()
    }
}

impl<'a> ParticipantRepo for DbReadOnly<'a> {
    fn create_participant(&self, participant: &Participant) -> Result<()> {
        self.inner().create_participant(participant)
    }

    fn update_participant_position(&self, id: &Id, position: &LastPosition) -> Result<()> {
        self.inner().update_participant_position(id, position)
    }

    fn get_participant(&self, id: &Id) -> Result<Participant> {
        self.inner().get_participant(id)
    }

    fn get_participants(&self, ids: &[&Id]) -> Result<Vec<Participant>> {
        self.inner().get_participants(ids)
    }

    fn try_get_participant_by_username(&self, username: &Username) -> Result<Option<Participant>> {
        self.inner().try_get_participant_by_username(username)
    }

    fn all_participants(&self) -> Result<Vec<Participant>> {
        self.inner().all_participants()
    }

    fn count_participants(&self) -> Result<usize> {
        self.inner().count_participants()
    }
}
