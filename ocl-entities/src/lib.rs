#![deny(missing_debug_implementations)]

pub mod address;
pub mod area;
pub mod crawl;
pub mod geo;
pub mod id;
pub mod participant;
pub mod password;
pub mod time;
pub mod venue;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
