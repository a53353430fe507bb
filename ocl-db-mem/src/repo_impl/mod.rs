use ocl_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod crawl;
mod participant;
mod postal_area;
mod venue;

#[cfg(test)]
mod tests;

type Result<T> = std::result::Result<T, repo::Error>;
