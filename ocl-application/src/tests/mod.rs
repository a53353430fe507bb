
pub mod prelude {

    pub fn default_new_crawl() -> usecases::NewCrawl {
        usecases::NewCrawl {
            id: Id::new(),
            name: "Friday night".into(),
            description: "The usual round through the old town".into(),
            owner: "ana".into(),
            start: Timestamp::from_secs(100),
            end: Timestamp::from_secs(200),
            venues: vec![],
        }
    }

    pub fn default_new_venue(name: &str, pos: MapPoint) -> usecases::NewVenue {
        usecases::NewVenue {
            name: name.into(),
            geometry: MapGeometry::Point(pos),
            address: None,
        }
    }

    pub fn default_new_participant(username: &str) -> usecases::NewParticipant {
        usecases::NewParticipant {
            name: "Mia Wallace".into(),
            username: username.into(),
            password: "s3cr3t-pw".into(),
        }
    }

    pub fn geocoded(place_name: &str, center: MapPoint) -> GeocodedLocation {
        GeocodedLocation {
            place_name: place_name.into(),
            center,
            boundary: None,
        }
    }

    pub fn enable_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    pub use ocl_core::{
        entities::*,
        gateways::geocode::GeoCodingGateway,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub mod memory {
        pub use super::super::super::memory::*;
    }

    pub use crate::{
        error::{AppError, BError},
        prelude as flows,
    };

    pub struct CannedGeoCoder {
        pub candidates: Vec<GeocodedLocation>,
    }

    impl GeoCodingGateway for CannedGeoCoder {
        fn resolve_place_name(&self, _query: &str) -> Vec<GeocodedLocation> {
            self.candidates.clone()
        }
    }

    pub struct BackendFixture {
        pub db_connections: memory::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            Self {
                db_connections: memory::Connections::init(),
            }
        }

        pub fn create_crawl(&self, new_crawl: usecases::NewCrawl) -> Id {
            flows::create_crawl(&self.db_connections, new_crawl)
                .unwrap()
                .id
        }

        pub fn create_venue(&self, name: &str, pos: MapPoint) -> Id {
            flows::store_venue(&self.db_connections, default_new_venue(name, pos))
                .unwrap()
                .id
        }

        pub fn register_participant(&self, username: &str) -> Id {
            flows::register_participant(&self.db_connections, default_new_participant(username))
                .unwrap()
                .id
        }

        pub fn try_get_crawl(&self, id: &Id) -> Option<Crawl> {
            match self.db_connections.shared().get_crawl(id) {
                Ok(crawl) => Some(crawl),
                Err(RepoError::NotFound) => None,
                x => x.map(|_| None).unwrap(),
            }
        }

        pub fn get_crawl(&self, id: &Id) -> Crawl {
            self.try_get_crawl(id).unwrap()
        }
    }
}
