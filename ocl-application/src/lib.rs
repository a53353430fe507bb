#[macro_use]
extern crate log;

mod choose_home_location;
mod crawl_venues;
mod crawl_view;
mod create_crawl;
mod discover_crawls;
mod postal_areas;
mod publish_crawl;
mod register_participant;
mod store_venue;
mod track_attendance;
mod update_crawl;

pub mod prelude {
    pub use super::{
        choose_home_location::*, crawl_venues::*, crawl_view::*, create_crawl::*,
        discover_crawls::*, postal_areas::*, publish_crawl::*, register_participant::*,
        store_venue::*, track_attendance::*, update_crawl::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use ocl_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod memory {
    pub use ocl_db_mem::Connections;
}
