use crate::{repositories, util::validate::FieldErrors};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid crawl parameters: {0}")]
    InvalidCrawl(FieldErrors),
    #[error("Invalid or malformed geometry")]
    InvalidGeometry,
    #[error("Invalid distance radius")]
    Radius,
    #[error("The venue is not part of the crawl")]
    VenueNotInCrawl,
    #[error("The participant already exists")]
    ParticipantExists,
    #[error("Invalid username")]
    Username,
    #[error("Invalid password")]
    Password,
    #[error("The name is invalid")]
    Name,
    // Not raised by any current operation. Storage backends with
    // compare-and-swap semantics report rejected writes through
    // this variant.
    #[error("Conflicting concurrent modification")]
    Conflict,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<ocl_entities::participant::UsernameParseError> for Error {
    fn from(_: ocl_entities::participant::UsernameParseError) -> Self {
        Self::Username
    }
}

impl From<ocl_entities::password::PasswordParseError> for Error {
    fn from(_: ocl_entities::password::PasswordParseError) -> Self {
        Self::Password
    }
}

impl From<FieldErrors> for Error {
    fn from(errors: FieldErrors) -> Self {
        Self::InvalidCrawl(errors)
    }
}
