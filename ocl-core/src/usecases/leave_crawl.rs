use super::prelude::*;

/// Drops a participant from the crawl roster and from every venue
/// check-in in one step.
///
/// Leaving without having joined is a no-op, as is leaving a crawl
/// that does not exist.
pub fn leave_crawl<R: CrawlRepo>(repo: &R, crawl_id: &Id, participant_id: &Id) -> Result<()> {
    if repo.try_get_crawl(crawl_id)?.is_none() {
        log::debug!("Ignoring leave of unknown crawl {crawl_id}");
        return Ok(());
    }
    repo.update_crawl_attendance(
        crawl_id,
        &AttendanceTransition::Leave {
            participant: participant_id.clone(),
        },
    )?;
    Ok(())
}
