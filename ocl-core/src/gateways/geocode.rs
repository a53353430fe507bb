use crate::entities::GeocodedLocation;

pub trait GeoCodingGateway {
    /// Resolve a free-form place name or address into candidate
    /// locations. An empty result means the name could not be
    /// resolved.
    fn resolve_place_name(&self, query: &str) -> Vec<GeocodedLocation>;
}
