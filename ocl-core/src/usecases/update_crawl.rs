use super::prelude::*;
use crate::util::validate::{CrawlField, FieldErrors};
use ocl_entities::time::TimeWindowError;

/// Partial update of the editable crawl fields. Omitted fields keep
/// their stored value.
#[derive(Debug, Clone, Default)]
pub struct CrawlChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start: Option<Timestamp>,
    pub end: Option<Timestamp>,
}

/// Updates name, description and schedule of a crawl.
///
/// The resulting period is validated against the stored values, so
/// moving only the start past the stored end is rejected as well.
pub fn update_crawl<R: CrawlRepo>(repo: &R, id: &Id, changes: CrawlChanges) -> Result<Crawl> {
    let mut crawl = repo.get_crawl(id)?;
    let CrawlChanges {
        name,
        description,
        start,
        end,
    } = changes;

    let mut errors = FieldErrors::default();
    let name = name.unwrap_or_else(|| crawl.name.clone());
    if name.trim().is_empty() {
        errors.add(CrawlField::Name, "must not be empty");
    }
    let description = description.unwrap_or_else(|| crawl.description.clone());
    if description.trim().is_empty() {
        errors.add(CrawlField::Description, "must not be empty");
    }
    let start = start.unwrap_or(crawl.period.start());
    let end = end.unwrap_or(crawl.period.end());
    let period = match TimeWindow::new(start, end) {
        Ok(period) => Some(period),
        Err(TimeWindowError) => {
            errors.add(CrawlField::Start, "must lie before the end");
            None
        }
    };
    let Some(period) = period else {
        return Err(Error::InvalidCrawl(errors));
    };
    if !errors.is_empty() {
        return Err(Error::InvalidCrawl(errors));
    }

    let details = CrawlDetails {
        name,
        description,
        period,
    };
    repo.update_crawl_details(id, &details)?;
    crawl.name = details.name;
    crawl.description = details.description;
    crawl.period = details.period;
    Ok(crawl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::{self, tests::MockDb};

    fn stored_crawl(db: &MockDb) -> Crawl {
        usecases::create_crawl(
            db,
            usecases::NewCrawl {
                id: Id::new(),
                name: "Friday night".into(),
                description: "The usual round".into(),
                owner: "ana".into(),
                start: Timestamp::from_secs(100),
                end: Timestamp::from_secs(200),
                venues: vec![],
            },
        )
        .unwrap()
    }

    #[test]
    fn rename_crawl() {
        let db = MockDb::default();
        let crawl = stored_crawl(&db);
        let updated = update_crawl(
            &db,
            &crawl.id,
            CrawlChanges {
                name: Some("Saturday night".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(updated.name, "Saturday night");
        assert_eq!(updated.description, crawl.description);
        let stored = db.get_crawl(&crawl.id).unwrap();
        assert_eq!(stored.name, "Saturday night");
        assert_eq!(stored.period, crawl.period);
    }

    #[test]
    fn reject_start_moved_past_stored_end() {
        let db = MockDb::default();
        let crawl = stored_crawl(&db);
        let err = update_crawl(
            &db,
            &crawl.id,
            CrawlChanges {
                start: Some(Timestamp::from_secs(500)),
                ..Default::default()
            },
        )
        .unwrap_err();
        match err {
            Error::InvalidCrawl(errors) => assert!(errors.contains(CrawlField::Start)),
            _ => panic!(),
        }
        let stored = db.get_crawl(&crawl.id).unwrap();
        assert_eq!(stored.period, crawl.period);
    }

    #[test]
    fn update_missing_crawl_fails() {
        let db = MockDb::default();
        let err = update_crawl(&db, &Id::new(), CrawlChanges::default()).unwrap_err();
        assert!(matches!(err, Error::Repo(crate::RepoError::NotFound)));
    }
}
