use super::*;

pub fn create_crawl(
    connections: &memory::Connections,
    new_crawl: usecases::NewCrawl,
) -> Result<Crawl> {
    let crawl = connections
        .exclusive()
        .transaction(|conn| usecases::create_crawl(conn, new_crawl))?;
    info!("Created crawl {} ({})", crawl.id, crawl.name);
    Ok(crawl)
}
