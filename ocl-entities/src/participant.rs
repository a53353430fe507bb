use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{geo::MapPoint, id::Id, password::Password, time::Timestamp};

/// Unique login handle of a participant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Username(String);

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum UsernameParseError {
    #[error("Empty username")]
    Empty,
    #[error("Username contains invalid characters")]
    InvalidCharacters,
}

impl Username {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub const fn new_unchecked(username: String) -> Self {
        Self(username)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for Username {
    type Err = UsernameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(UsernameParseError::Empty);
        }
        let valid = s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !valid {
            return Err(UsernameParseError::InvalidCharacters);
        }
        Ok(Self(s.to_owned()))
    }
}

impl From<Username> for String {
    fn from(from: Username) -> Self {
        from.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(&self.0)
    }
}

/// Most recent position report of a participant.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LastPosition {
    pub pos         : MapPoint,
    pub reported_at : Timestamp,
}

/// A registered user that can organize and attend crawls.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub id            : Id,
    pub name          : String,
    pub username      : Username,
    pub password      : Password,
    pub last_position : Option<LastPosition>,
    pub created_at    : Timestamp,
}
