use super::*;

pub fn publish_crawl(connections: &memory::Connections, id: &Id) -> Result<()> {
    let at = Timestamp::now();
    connections
        .exclusive()
        .transaction(|conn| usecases::publish_crawl(conn, id, at))?;
    info!("Published crawl {id}");
    Ok(())
}

pub fn unpublish_crawl(connections: &memory::Connections, id: &Id) -> Result<()> {
    connections
        .exclusive()
        .transaction(|conn| usecases::unpublish_crawl(conn, id))?;
    info!("Unpublished crawl {id}");
    Ok(())
}
