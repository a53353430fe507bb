use crate::{geo::MapPolygon, id::Id};

/// Read-only reference area, e.g. a postal code district.
///
/// Used to resolve a "search by postal code" into a containment
/// query over the boundary polygon.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct PostalArea {
    pub id          : Id,
    pub name        : String,
    pub description : String,
    pub boundary    : MapPolygon,
}
