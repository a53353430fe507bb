// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error("The geometry of the object is invalid")]
    InvalidGeometry,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug)]
pub struct CrawlDetails {
    pub name: String,
    pub description: String,
    pub period: TimeWindow,
}

pub trait CrawlRepo {
    fn create_crawl(&self, crawl: &Crawl) -> Result<()>;

    fn get_crawl(&self, id: &Id) -> Result<Crawl>;
    fn try_get_crawl(&self, id: &Id) -> Result<Option<Crawl>>;
    fn count_crawls(&self) -> Result<usize>;

    // Each update below replaces a single field group of the stored
    // document and nothing else. Concurrent updates of disjoint field
    // groups must not overwrite each other.
    fn update_crawl_details(&self, id: &Id, details: &CrawlDetails) -> Result<()>;
    fn update_crawl_publication(&self, id: &Id, published: Option<Timestamp>) -> Result<()>;
    fn update_crawl_venues(&self, id: &Id, venues: &[Id]) -> Result<()>;

    // Committing a home location also drops a previously cached
    // search result within the same update.
    fn update_crawl_location(&self, id: &Id, location: &HomeLocation) -> Result<()>;
    fn update_crawl_search_locations(&self, id: &Id, cache: &SearchLocations) -> Result<()>;

    // The whole transition is applied to the stored document
    // atomically, i.e. a reader never observes a participant
    // checked in at both an old and a new venue.
    fn update_crawl_attendance(&self, id: &Id, transition: &AttendanceTransition) -> Result<()>;

    // All crawls whose home polygon contains the given position and
    // whose period contains the given instant (bounds inclusive).
    fn crawls_intersecting(&self, pos: MapPoint, active_at: Timestamp) -> Result<Vec<Crawl>>;
}

pub trait VenueRepo {
    fn create_venue(&self, venue: &Venue) -> Result<()>;
    fn update_venue_address(&self, id: &Id, address: Option<&Address>) -> Result<()>;

    fn get_venue(&self, id: &Id) -> Result<Venue>;
    // Venues without a match are omitted from the result.
    fn get_venues(&self, ids: &[&Id]) -> Result<Vec<Venue>>;
    fn count_venues(&self) -> Result<usize>;

    // All venues whose geometry lies within `max_distance` of `center`,
    // sorted nearest first. For venues with an areal geometry the
    // distance is zero if `center` lies inside, otherwise the distance
    // to the closest boundary segment. `restrict_to` limits the
    // candidate set to the given venue ids.
    fn venues_near(
        &self,
        center: MapPoint,
        max_distance: Distance,
        restrict_to: Option<&[Id]>,
    ) -> Result<Vec<Venue>>;

    // All venues whose geometry lies entirely within the boundary.
    fn venues_within(&self, boundary: &MapPolygon) -> Result<Vec<Venue>>;
}

pub trait PostalAreaRepo {
    fn create_postal_area(&self, area: &PostalArea) -> Result<()>;
    fn try_get_postal_area_by_name(&self, name: &str) -> Result<Option<PostalArea>>;
    fn count_postal_areas(&self) -> Result<usize>;
}

pub trait ParticipantRepo {
    fn create_participant(&self, participant: &Participant) -> Result<()>;
    fn update_participant_position(&self, id: &Id, position: &LastPosition) -> Result<()>;

    fn get_participant(&self, id: &Id) -> Result<Participant>;
    // Participants without a match are omitted from the result.
    fn get_participants(&self, ids: &[&Id]) -> Result<Vec<Participant>>;
    fn try_get_participant_by_username(&self, username: &Username) -> Result<Option<Participant>>;

    fn all_participants(&self) -> Result<Vec<Participant>>;
    fn count_participants(&self) -> Result<usize>;
}
