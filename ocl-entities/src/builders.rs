pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{crawl_builder::*, participant_builder::*, venue_builder::*};

pub mod crawl_builder {

    use super::*;
    use crate::{crawl::*, id::*, participant::*, time::*};

    #[derive(Debug)]
    pub struct CrawlBuild {
        crawl: Crawl,
    }

    impl CrawlBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.crawl.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.crawl.name = name.into();
            self
        }
        pub fn description(mut self, description: &str) -> Self {
            self.crawl.description = description.into();
            self
        }
        pub fn owner(mut self, owner: &str) -> Self {
            self.crawl.owner = Username::new_unchecked(owner.into());
            self
        }
        pub fn period(mut self, start: Timestamp, end: Timestamp) -> Self {
            self.crawl.period = TimeWindow::new(start, end).unwrap();
            self
        }
        pub fn published(mut self, at: Timestamp) -> Self {
            self.crawl.published = Some(at);
            self
        }
        pub fn venues(mut self, venues: Vec<Id>) -> Self {
            self.crawl.venues = venues;
            self
        }
        pub fn location(mut self, location: HomeLocation) -> Self {
            self.crawl.location = Some(location);
            self
        }
        pub fn finish(self) -> Crawl {
            self.crawl
        }
    }

    impl Builder for Crawl {
        type Build = CrawlBuild;
        fn build() -> CrawlBuild {
            CrawlBuild {
                crawl: Crawl {
                    id: Id::new(),
                    name: "".into(),
                    description: "".into(),
                    owner: Username::new_unchecked("".into()),
                    period: TimeWindow::new(
                        Timestamp::from_secs(0),
                        Timestamp::from_secs(3600),
                    )
                    .unwrap(),
                    published: None,
                    venues: vec![],
                    search_locations: None,
                    location: None,
                    attendants: Default::default(),
                    attendants_location: Default::default(),
                },
            }
        }
    }
}

pub mod venue_builder {

    use super::*;
    use crate::{address::*, geo::*, id::*, venue::*};

    #[derive(Debug)]
    pub struct VenueBuild {
        venue: Venue,
    }

    impl VenueBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.venue.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.venue.name = name.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.venue.geometry = MapGeometry::Point(pos);
            self
        }
        pub fn geometry(mut self, geometry: MapGeometry) -> Self {
            self.venue.geometry = geometry;
            self
        }
        pub fn address(mut self, address: Address) -> Self {
            self.venue.address = Some(address);
            self
        }
        pub fn finish(self) -> Venue {
            self.venue
        }
    }

    impl Builder for Venue {
        type Build = VenueBuild;
        fn build() -> VenueBuild {
            VenueBuild {
                venue: Venue {
                    id: Id::new(),
                    name: "".into(),
                    geometry: MapGeometry::Point(MapPoint::from_lat_lng_deg(0.0, 0.0)),
                    address: None,
                },
            }
        }
    }
}

pub mod participant_builder {

    use super::*;
    use crate::{geo::*, id::*, participant::*, password::Password, time::*};

    #[derive(Debug)]
    pub struct ParticipantBuild {
        participant: Participant,
    }

    impl ParticipantBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.participant.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.participant.name = name.into();
            self
        }
        pub fn username(mut self, username: &str) -> Self {
            self.participant.username = Username::new_unchecked(username.into());
            self
        }
        pub fn last_position(mut self, pos: MapPoint, reported_at: Timestamp) -> Self {
            self.participant.last_position = Some(LastPosition { pos, reported_at });
            self
        }
        pub fn finish(self) -> Participant {
            self.participant
        }
    }

    impl Builder for Participant {
        type Build = ParticipantBuild;
        fn build() -> ParticipantBuild {
            ParticipantBuild {
                participant: Participant {
                    id: Id::new(),
                    name: "".into(),
                    username: Username::new_unchecked("".into()),
                    // Not a hash of anything, never verified in tests
                    // that use the builder default.
                    password: Password::from("builder-default".to_string()),
                    last_position: None,
                    created_at: Timestamp::from_secs(0),
                },
            }
        }
    }
}
