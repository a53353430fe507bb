use super::prelude::*;

/// Enlists a participant on the crawl roster.
///
/// Joining twice is a no-op, as is joining a crawl that does not
/// exist.
pub fn join_crawl<R: CrawlRepo>(repo: &R, crawl_id: &Id, participant_id: &Id) -> Result<()> {
    if repo.try_get_crawl(crawl_id)?.is_none() {
        log::debug!("Ignoring join of unknown crawl {crawl_id}");
        return Ok(());
    }
    repo.update_crawl_attendance(
        crawl_id,
        &AttendanceTransition::Join {
            participant: participant_id.clone(),
        },
    )?;
    Ok(())
}
