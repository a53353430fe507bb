use super::prelude::*;

/// Marks a crawl as publicly discoverable.
///
/// Publishing twice only refreshes the publication timestamp.
pub fn publish_crawl<R: CrawlRepo>(repo: &R, id: &Id, at: Timestamp) -> Result<()> {
    log::info!("Publishing crawl {id}");
    repo.update_crawl_publication(id, Some(at))?;
    Ok(())
}

pub fn unpublish_crawl<R: CrawlRepo>(repo: &R, id: &Id) -> Result<()> {
    log::info!("Unpublishing crawl {id}");
    repo.update_crawl_publication(id, None)?;
    Ok(())
}
