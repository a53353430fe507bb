use super::*;

pub fn update_crawl(
    connections: &memory::Connections,
    id: &Id,
    changes: usecases::CrawlChanges,
) -> Result<Crawl> {
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::update_crawl(conn, id, changes))?)
}
