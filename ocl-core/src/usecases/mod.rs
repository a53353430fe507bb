mod cache_search_locations;
mod create_crawl;
mod create_postal_area;
mod crawl_venues;
mod error;
mod join_crawl;
mod leave_crawl;
mod load_crawl_view;
mod publish_crawl;
mod query_crawls;
mod query_venues;
mod register_participant;
mod reorder_venue;
mod report_position;
mod set_home_location;
mod store_venue;
mod update_crawl;


type Result<T> = std::result::Result<T, Error>;

pub use self::{
    cache_search_locations::*, create_crawl::*, create_postal_area::*, crawl_venues::*,
    error::Error, join_crawl::*, leave_crawl::*, load_crawl_view::*, publish_crawl::*,
    query_crawls::*, query_venues::*, register_participant::*, reorder_venue::*,
    report_position::*, set_home_location::*, store_venue::*, update_crawl::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, repositories::*};
}
use self::prelude::*;

pub fn get_crawl<R: CrawlRepo>(repo: &R, id: &Id) -> Result<Crawl> {
    Ok(repo.get_crawl(id)?)
}
