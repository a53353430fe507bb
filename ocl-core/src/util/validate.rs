use std::{collections::BTreeMap, fmt};

use crate::entities::Distance;

/// Crawl fields that are subject to validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum CrawlField {
    Name,
    Description,
    Owner,
    Start,
    End,
}

/// Validation outcome of a crawl mutation, keyed by field.
///
/// All violations are collected before the mutation is rejected, so
/// a caller can report every offending field at once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<CrawlField, String>);

impl FieldErrors {
    pub fn add(&mut self, field: CrawlField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: CrawlField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn message(&self, field: CrawlField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CrawlField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

pub fn is_valid_search_radius(radius: Distance) -> bool {
    radius.is_valid() && radius.to_meters().is_finite() && radius.to_meters() > 0.0
}
