use ocl_core::gateways::geocode::GeoCodingGateway;

use super::*;

/// Resolves a free-form place query into candidate home locations
/// and caches them on the crawl, so repeating the search does not
/// hit the geocoder again.
pub fn search_home_candidates(
    connections: &memory::Connections,
    geocoder: &dyn GeoCodingGateway,
    crawl_id: &Id,
    query: &str,
    radius: Distance,
) -> Result<Vec<GeocodedLocation>> {
    let candidates = geocoder.resolve_place_name(query);
    if candidates.is_empty() {
        info!("No geocoding candidates for '{query}'");
    }
    let cache = connections
        .exclusive()
        .transaction(|conn| usecases::cache_search_locations(conn, crawl_id, candidates, radius))?;
    Ok(cache.candidates)
}

/// The candidates of the most recent search, served from the cache
/// without hitting the geocoder.
pub fn cached_home_candidates(
    connections: &memory::Connections,
    crawl_id: &Id,
) -> Result<Option<SearchLocations>> {
    let db = connections.shared();
    Ok(usecases::get_crawl(&db, crawl_id)?.search_locations)
}

/// Commits one of the candidates as the home location of the crawl.
pub fn commit_home_location(
    connections: &memory::Connections,
    crawl_id: &Id,
    center: MapPoint,
    radius: Distance,
) -> Result<HomeLocation> {
    Ok(connections.exclusive().transaction(|conn| {
        usecases::set_home_location(conn, crawl_id, center, radius).map_err(|err| {
            warn!("Failed to commit home location of crawl {crawl_id}: {err}");
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    fn search_home_candidates(
        fixture: &BackendFixture,
        geocoder: &CannedGeoCoder,
        crawl_id: &Id,
        query: &str,
        radius: Distance,
    ) -> super::Result<Vec<GeocodedLocation>> {
        super::search_home_candidates(
            &fixture.db_connections,
            geocoder,
            crawl_id,
            query,
            radius,
        )
    }

    fn commit_home_location(
        fixture: &BackendFixture,
        crawl_id: &Id,
        center: MapPoint,
        radius: Distance,
    ) -> super::Result<HomeLocation> {
        super::commit_home_location(&fixture.db_connections, crawl_id, center, radius)
    }

    #[test]
    fn searching_caches_the_candidates() {
        let fixture = BackendFixture::new();
        let id = fixture.create_crawl(default_new_crawl());
        let geocoder = CannedGeoCoder {
            candidates: vec![
                geocoded("Marktplatz, Stuttgart", MapPoint::from_lat_lng_deg(48.7757, 9.1790)),
                geocoded("Marktplatz, Ulm", MapPoint::from_lat_lng_deg(48.3973, 9.9926)),
            ],
        };

        let candidates = search_home_candidates(
            &fixture,
            &geocoder,
            &id,
            "Marktplatz",
            Distance::from_meters(500.0),
        )
        .unwrap();
        assert_eq!(candidates, geocoder.candidates);

        let cached = super::cached_home_candidates(&fixture.db_connections, &id)
            .unwrap()
            .unwrap();
        assert_eq!(cached.candidates, geocoder.candidates);
        assert_eq!(cached.radius, Distance::from_meters(500.0));
    }

    #[test]
    fn committing_a_location_drops_the_cached_candidates() {
        let fixture = BackendFixture::new();
        let id = fixture.create_crawl(default_new_crawl());
        let center = MapPoint::from_lat_lng_deg(48.7757, 9.1790);
        let geocoder = CannedGeoCoder {
            candidates: vec![geocoded("Marktplatz, Stuttgart", center)],
        };
        search_home_candidates(
            &fixture,
            &geocoder,
            &id,
            "Marktplatz",
            Distance::from_meters(500.0),
        )
        .unwrap();

        let location = commit_home_location(&fixture, &id, center, Distance::from_meters(500.0))
            .unwrap();
        assert_eq!(location.center, center);

        let stored = fixture.get_crawl(&id);
        assert_eq!(stored.location, Some(location));
        assert!(stored.search_locations.is_none());
    }

    #[test]
    fn an_oversized_radius_is_rejected() {
        let fixture = BackendFixture::new();
        let id = fixture.create_crawl(default_new_crawl());
        let center = MapPoint::from_lat_lng_deg(48.7757, 9.1790);

        let err = commit_home_location(&fixture, &id, center, Distance::from_meters(-1.0))
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Business(BError::Parameter(usecases::Error::Radius))
        ));
        assert!(fixture.get_crawl(&id).location.is_none());
    }
}
