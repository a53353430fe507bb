use super::prelude::*;
use crate::util::validate::{CrawlField, FieldErrors};
use ocl_entities::{participant::UsernameParseError, time::TimeWindowError};

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewCrawl {
    pub id          : Id,
    pub name        : String,
    pub description : String,
    pub owner       : String,
    pub start       : Timestamp,
    pub end         : Timestamp,
    pub venues      : Vec<Id>,
}

/// Creates an unpublished crawl with an empty roster.
///
/// The venue list is stored exactly as given, order included. All
/// field violations are collected and reported together; nothing is
/// written in that case.
pub fn create_crawl<R: CrawlRepo>(repo: &R, new: NewCrawl) -> Result<Crawl> {
    let NewCrawl {
        id,
        name,
        description,
        owner,
        start,
        end,
        venues,
    } = new;
    let mut errors = FieldErrors::default();
    if name.trim().is_empty() {
        errors.add(CrawlField::Name, "must not be empty");
    }
    if description.trim().is_empty() {
        errors.add(CrawlField::Description, "must not be empty");
    }
    let owner = match owner.parse::<Username>() {
        Ok(owner) => Some(owner),
        Err(UsernameParseError::Empty) => {
            errors.add(CrawlField::Owner, "must not be empty");
            None
        }
        Err(UsernameParseError::InvalidCharacters) => {
            errors.add(CrawlField::Owner, "contains invalid characters");
            None
        }
    };
    let period = match TimeWindow::new(start, end) {
        Ok(period) => Some(period),
        Err(TimeWindowError) => {
            errors.add(CrawlField::Start, "must lie before the end");
            None
        }
    };
    let (Some(owner), Some(period)) = (owner, period) else {
        return Err(Error::InvalidCrawl(errors));
    };
    if !errors.is_empty() {
        return Err(Error::InvalidCrawl(errors));
    }

    let crawl = Crawl {
        id,
        name,
        description,
        owner,
        period,
        published: None,
        venues,
        search_locations: None,
        location: None,
        attendants: Default::default(),
        attendants_location: Default::default(),
    };
    log::debug!("Creating crawl {} ({})", crawl.name, crawl.id);
    repo.create_crawl(&crawl)?;
    Ok(crawl)
}
