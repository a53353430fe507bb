use crate::repositories::*;

pub trait Db: CrawlRepo + VenueRepo + PostalAreaRepo + ParticipantRepo {}

impl<T> Db for T where T: CrawlRepo + VenueRepo + PostalAreaRepo + ParticipantRepo {}
