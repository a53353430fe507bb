use super::prelude::*;

/// A participant counts as arrived at a venue within this distance.
pub const ARRIVAL_RADIUS: Distance = Distance::from_meters(15.0);

/// Processes a live position report of a participant on a crawl.
///
/// The position is always recorded on the participant, even without
/// any crawl membership. For roster members the venue check-ins of
/// the crawl are then re-derived from scratch: all previous
/// check-ins are cleared and the participant is checked in at every
/// listed venue within [`ARRIVAL_RADIUS`], in one atomic update.
///
/// Returns the venues the participant is now checked in at, nearest
/// first.
pub fn report_position<R>(
    repo: &R,
    crawl_id: &Id,
    participant_id: &Id,
    pos: MapPoint,
    now: Timestamp,
) -> Result<Vec<Id>>
where
    R: CrawlRepo + VenueRepo + ParticipantRepo,
{
    if !pos.is_valid() {
        return Err(Error::InvalidGeometry);
    }
    repo.update_participant_position(
        participant_id,
        &LastPosition {
            pos,
            reported_at: now,
        },
    )?;
    let Some(crawl) = repo.try_get_crawl(crawl_id)? else {
        log::debug!("Ignoring position report for unknown crawl {crawl_id}");
        return Ok(vec![]);
    };
    if !crawl.attendants.contains(participant_id) {
        return Ok(vec![]);
    }
    let venues = if crawl.venues.is_empty() {
        vec![]
    } else {
        repo.venues_near(pos, ARRIVAL_RADIUS, Some(&crawl.venues))?
            .into_iter()
            .map(|venue| venue.id)
            .collect()
    };
    repo.update_crawl_attendance(
        crawl_id,
        &AttendanceTransition::Relocate {
            participant: participant_id.clone(),
            venues: venues.clone(),
        },
    )?;
    log::debug!(
        "Participant {participant_id} on crawl {crawl_id} is near {} venue(s)",
        venues.len()
    );
    Ok(venues)
}
