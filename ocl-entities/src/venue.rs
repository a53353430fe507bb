use crate::{address::Address, geo::MapGeometry, id::Id};

/// A place of interest that can be visited during a crawl.
///
/// The geometry is fixed at creation time; only the address
/// metadata may be amended afterwards.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub id       : Id,
    pub name     : String,
    pub geometry : MapGeometry,
    pub address  : Option<Address>,
}
