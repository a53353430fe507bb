use super::prelude::*;

/// Moves a venue one position towards the front of the walking
/// order by swapping it with its predecessor.
///
/// Reordering the first venue is a no-op. Returns the resulting
/// order.
pub fn reorder_venue_up<R: CrawlRepo>(repo: &R, id: &Id, venue_id: &Id) -> Result<Vec<Id>> {
    let crawl = repo.get_crawl(id)?;
    let mut venues = crawl.venues;
    let Some(position) = venues.iter().position(|venue| venue == venue_id) else {
        return Err(Error::VenueNotInCrawl);
    };
    if position == 0 {
        return Ok(venues);
    }
    venues.swap(position, position - 1);
    repo.update_crawl_venues(id, &venues)?;
    Ok(venues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::{self, tests::MockDb};

    fn stored_crawl(db: &MockDb, venues: Vec<Id>) -> Crawl {
        usecases::create_crawl(
            db,
            usecases::NewCrawl {
                id: Id::new(),
                name: "Friday night".into(),
                description: "The usual round".into(),
                owner: "ana".into(),
                start: Timestamp::from_secs(100),
                end: Timestamp::from_secs(200),
                venues,
            },
        )
        .unwrap()
    }

    #[test]
    fn swap_with_predecessor_then_stop_at_the_front() {
        let db = MockDb::default();
        let (a, b) = (Id::new(), Id::new());
        let crawl = stored_crawl(&db, vec![a.clone(), b.clone()]);

        let order = reorder_venue_up(&db, &crawl.id, &b).unwrap();
        assert_eq!(order, vec![b.clone(), a.clone()]);
        assert_eq!(db.get_crawl(&crawl.id).unwrap().venues, order);

        // Already first: nothing changes.
        let order = reorder_venue_up(&db, &crawl.id, &b).unwrap();
        assert_eq!(order, vec![b.clone(), a.clone()]);

        // Moving the displaced venue back up restores the original order.
        let order = reorder_venue_up(&db, &crawl.id, &a).unwrap();
        assert_eq!(order, vec![a.clone(), b.clone()]);
        assert_eq!(db.get_crawl(&crawl.id).unwrap().venues, vec![a, b]);
    }

    #[test]
    fn reorder_unlisted_venue_fails() {
        let db = MockDb::default();
        let crawl = stored_crawl(&db, vec![Id::new()]);
        let err = reorder_venue_up(&db, &crawl.id, &Id::new()).unwrap_err();
        assert!(matches!(err, Error::VenueNotInCrawl));
    }
}
