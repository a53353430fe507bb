use std::collections::HashMap;

use super::prelude::*;

/// A fully resolved crawl: referenced venue and participant ids are
/// expanded into documents.
#[derive(Debug, Clone)]
pub struct CrawlView {
    pub crawl: Crawl,
    /// In walking order; ids without a stored venue are skipped.
    pub venues: Vec<Venue>,
    pub attendants: Vec<Participant>,
}

/// Position marker of a fellow attendant.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct AttendantMarker {
    pub id   : Id,
    pub name : String,
    pub pos  : MapPoint,
}

/// Resolves the venue ids of a crawl into venue documents,
/// preserving the walking order.
pub fn expand_ordered_venues<R: VenueRepo>(repo: &R, crawl: &Crawl) -> Result<Vec<Venue>> {
    let ids: Vec<_> = crawl.venues.iter().collect();
    let mut by_id: HashMap<_, _> = repo
        .get_venues(&ids)?
        .into_iter()
        .map(|venue| (venue.id.clone(), venue))
        .collect();
    Ok(crawl
        .venues
        .iter()
        .filter_map(|id| by_id.remove(id))
        .collect())
}

pub fn expand_attendants<R: ParticipantRepo>(repo: &R, crawl: &Crawl) -> Result<Vec<Participant>> {
    let ids: Vec<_> = crawl.attendants.iter().collect();
    Ok(repo.get_participants(&ids)?)
}

/// Markers for everyone checked in somewhere on the crawl, except
/// the requesting participant. Attendants without a recorded
/// position are omitted.
pub fn expand_attendant_locations<R: ParticipantRepo>(
    repo: &R,
    crawl: &Crawl,
    requester: &Id,
) -> Result<Vec<AttendantMarker>> {
    let ids: Vec<_> = crawl
        .attendants_location
        .participants()
        .into_iter()
        .filter(|id| *id != requester)
        .collect();
    let markers = repo
        .get_participants(&ids)?
        .into_iter()
        .filter_map(|participant| {
            participant.last_position.map(|last| AttendantMarker {
                id: participant.id,
                name: participant.name,
                pos: last.pos,
            })
        })
        .collect();
    Ok(markers)
}

/// Loads a crawl with venues and roster expanded.
pub fn load_crawl_view<R>(repo: &R, id: &Id) -> Result<CrawlView>
where
    R: CrawlRepo + VenueRepo + ParticipantRepo,
{
    let crawl = repo.get_crawl(id)?;
    let venues = expand_ordered_venues(repo, &crawl)?;
    let attendants = expand_attendants(repo, &crawl)?;
    Ok(CrawlView {
        crawl,
        venues,
        attendants,
    })
}
