use super::*;

use ocl_core::{
    usecases as uc,
    util::geo::{circle_polygon, MIN_CIRCLE_POLYGON_SEGMENTS},
    RepoError,
};
use ocl_entities::builders::*;

fn home(center: MapPoint, radius: Distance) -> HomeLocation {
    HomeLocation {
        center,
        radius,
        polygon: circle_polygon(center, radius, MIN_CIRCLE_POLYGON_SEGMENTS),
    }
}

#[test]
fn create_and_get_crawls() {
    let connections = Connections::init();
    let db = connections.exclusive();
    let crawl = Crawl::build().id("c").name("Ehrenrunde").finish();
    db.create_crawl(&crawl).unwrap();
    assert!(matches!(
        db.create_crawl(&crawl),
        Err(RepoError::AlreadyExists)
    ));
    assert_eq!(db.get_crawl(&crawl.id).unwrap(), crawl);
    assert_eq!(db.try_get_crawl(&"unknown".into()).unwrap(), None);
    assert!(matches!(
        db.get_crawl(&"unknown".into()),
        Err(RepoError::NotFound)
    ));
    drop(db);

    let read = connections.shared();
    assert_eq!(read.count_crawls().unwrap(), 1);
}

#[test]
fn venues_near_returns_the_nearest_first() {
    let connections = Connections::init();
    let db = connections.exclusive();
    let center = MapPoint::from_lat_lng_deg(48.7755, 9.1827);

    let close = Venue::build()
        .id("v-close")
        .pos(MapPoint::from_lat_lng_deg(48.775545, 9.1827))
        .finish();
    let mid = Venue::build()
        .id("v-mid")
        .pos(MapPoint::from_lat_lng_deg(48.77595, 9.1827))
        .finish();
    let far = Venue::build()
        .id("v-far")
        .pos(MapPoint::from_lat_lng_deg(48.8655, 9.1827))
        .finish();
    // An areal venue containing the center matches at distance zero.
    let block = Venue::build()
        .id("v-block")
        .geometry(MapGeometry::Polygon(MapPolygon::new(vec![
            MapPoint::from_lat_lng_deg(48.7745, 9.1817),
            MapPoint::from_lat_lng_deg(48.7745, 9.1837),
            MapPoint::from_lat_lng_deg(48.7765, 9.1837),
            MapPoint::from_lat_lng_deg(48.7765, 9.1817),
        ])))
        .finish();
    for venue in [&close, &mid, &far, &block] {
        db.create_venue(venue).unwrap();
    }

    let found = db
        .venues_near(center, Distance::from_meters(100.0), None)
        .unwrap();
    let ids: Vec<_> = found.into_iter().map(|venue| venue.id).collect();
    assert_eq!(ids, vec![block.id, close.id.clone(), mid.id]);

    let restricted = db
        .venues_near(
            center,
            Distance::from_meters(20_000.0),
            Some(&["v-close".into(), "v-far".into()]),
        )
        .unwrap();
    let ids: Vec<_> = restricted.into_iter().map(|venue| venue.id).collect();
    assert_eq!(ids, vec![close.id, far.id]);
}

#[test]
fn get_venues_omits_missing_ids() {
    let connections = Connections::init();
    let db = connections.exclusive();
    let venue = Venue::build().id("v").finish();
    db.create_venue(&venue).unwrap();
    let missing: Id = "unknown".into();
    let found = db.get_venues(&[&venue.id, &missing]).unwrap();
    assert_eq!(found, vec![venue]);
}

#[test]
fn invalid_geometries_are_rejected() {
    let connections = Connections::init();
    let db = connections.exclusive();
    let degenerate = Venue::build()
        .geometry(MapGeometry::Polygon(MapPolygon::new(vec![
            MapPoint::from_lat_lng_deg(0.0, 0.0),
            MapPoint::from_lat_lng_deg(1.0, 1.0),
        ])))
        .finish();
    assert!(matches!(
        db.create_venue(&degenerate),
        Err(RepoError::InvalidGeometry)
    ));
    assert_eq!(db.count_venues().unwrap(), 0);
}

#[test]
fn venues_within_requires_full_containment() {
    let connections = Connections::init();
    let db = connections.exclusive();
    let boundary = MapPolygon::new(vec![
        MapPoint::from_lat_lng_deg(48.77, 9.17),
        MapPoint::from_lat_lng_deg(48.77, 9.19),
        MapPoint::from_lat_lng_deg(48.78, 9.19),
        MapPoint::from_lat_lng_deg(48.78, 9.17),
    ]);

    let inside = Venue::build()
        .id("v-inside")
        .pos(MapPoint::from_lat_lng_deg(48.775, 9.18))
        .finish();
    let outside = Venue::build()
        .id("v-outside")
        .pos(MapPoint::from_lat_lng_deg(48.8, 9.18))
        .finish();
    let contained_area = Venue::build()
        .id("v-contained")
        .geometry(MapGeometry::Polygon(MapPolygon::new(vec![
            MapPoint::from_lat_lng_deg(48.772, 9.175),
            MapPoint::from_lat_lng_deg(48.772, 9.185),
            MapPoint::from_lat_lng_deg(48.778, 9.18),
        ])))
        .finish();
    let straddling_area = Venue::build()
        .id("v-straddling")
        .geometry(MapGeometry::Polygon(MapPolygon::new(vec![
            MapPoint::from_lat_lng_deg(48.775, 9.185),
            MapPoint::from_lat_lng_deg(48.775, 9.21),
            MapPoint::from_lat_lng_deg(48.779, 9.195),
        ])))
        .finish();
    for venue in [&inside, &outside, &contained_area, &straddling_area] {
        db.create_venue(venue).unwrap();
    }

    let mut ids: Vec<_> = db
        .venues_within(&boundary)
        .unwrap()
        .into_iter()
        .map(|venue| venue.id)
        .collect();
    ids.sort();
    assert_eq!(ids, vec![contained_area.id, inside.id]);
}

#[test]
fn crawls_intersecting_home_area_and_period() {
    let connections = Connections::init();
    let db = connections.exclusive();
    let center = MapPoint::from_lat_lng_deg(48.7755, 9.1827);
    let crawl = Crawl::build()
        .id("pub-tour")
        .period(Timestamp::from_secs(100), Timestamp::from_secs(200))
        .location(home(center, Distance::from_meters(500.0)))
        .finish();
    let unlocated = Crawl::build()
        .id("unlocated")
        .period(Timestamp::from_secs(100), Timestamp::from_secs(200))
        .finish();
    db.create_crawl(&crawl).unwrap();
    db.create_crawl(&unlocated).unwrap();

    // ~100m east of the center, well within the home circle.
    let inside = MapPoint::from_lat_lng_deg(48.7755, 9.1841);
    // ~10km north.
    let outside = MapPoint::from_lat_lng_deg(48.8655, 9.1827);

    for at in [100, 150, 200] {
        let hits = db
            .crawls_intersecting(inside, Timestamp::from_secs(at))
            .unwrap();
        assert_eq!(hits.len(), 1, "expected a hit at {at}");
        assert_eq!(hits[0].id, crawl.id);
    }
    for at in [99, 201] {
        let hits = db
            .crawls_intersecting(inside, Timestamp::from_secs(at))
            .unwrap();
        assert!(hits.is_empty(), "expected no hit at {at}");
    }
    let hits = db
        .crawls_intersecting(outside, Timestamp::from_secs(150))
        .unwrap();
    assert!(hits.is_empty());
}

#[test]
fn attendance_transitions_update_the_stored_crawl() {
    let connections = Connections::init();
    let db = connections.exclusive();
    let (a, b) = (Id::new(), Id::new());
    let crawl = Crawl::build().venues(vec![a.clone(), b.clone()]).finish();
    db.create_crawl(&crawl).unwrap();

    let p = Id::new();
    db.update_crawl_attendance(
        &crawl.id,
        &AttendanceTransition::Join {
            participant: p.clone(),
        },
    )
    .unwrap();
    db.update_crawl_attendance(
        &crawl.id,
        &AttendanceTransition::Relocate {
            participant: p.clone(),
            venues: vec![a.clone()],
        },
    )
    .unwrap();
    let stored = db.get_crawl(&crawl.id).unwrap();
    assert!(stored.attendants_location.contains(&a, &p));

    db.update_crawl_attendance(
        &crawl.id,
        &AttendanceTransition::Relocate {
            participant: p.clone(),
            venues: vec![b.clone()],
        },
    )
    .unwrap();
    let stored = db.get_crawl(&crawl.id).unwrap();
    assert!(!stored.attendants_location.contains(&a, &p));
    assert!(stored.attendants_location.contains(&b, &p));
    assert!(stored.attendance_is_consistent());

    db.update_crawl_attendance(
        &crawl.id,
        &AttendanceTransition::Leave {
            participant: p.clone(),
        },
    )
    .unwrap();
    let stored = db.get_crawl(&crawl.id).unwrap();
    assert!(stored.attendants.is_empty());
    assert!(stored.attendants_location.is_empty());
}

#[test]
fn delisting_venues_drops_their_check_ins() {
    let connections = Connections::init();
    let db = connections.exclusive();
    let (a, b) = (Id::new(), Id::new());
    let crawl = Crawl::build().venues(vec![a.clone(), b.clone()]).finish();
    db.create_crawl(&crawl).unwrap();

    let p = Id::new();
    db.update_crawl_attendance(
        &crawl.id,
        &AttendanceTransition::Join {
            participant: p.clone(),
        },
    )
    .unwrap();
    db.update_crawl_attendance(
        &crawl.id,
        &AttendanceTransition::Relocate {
            participant: p.clone(),
            venues: vec![a.clone()],
        },
    )
    .unwrap();

    db.update_crawl_venues(&crawl.id, &[b.clone()]).unwrap();
    let stored = db.get_crawl(&crawl.id).unwrap();
    assert_eq!(stored.venues, vec![b]);
    assert!(stored.attendants_location.is_empty());
    assert!(stored.attendants.contains(&p));
}

#[test]
fn failed_transactions_roll_back_all_changes() {
    let connections = Connections::init();
    let mut db = connections.exclusive();
    let venue = Venue::build().finish();
    let crawl = Crawl::build().finish();

    let result = db.transaction(|conn| {
        conn.create_venue(&venue)?;
        conn.create_crawl(&crawl)?;
        conn.create_crawl(&crawl)?;
        Ok::<_, uc::Error>(())
    });
    assert!(matches!(
        result,
        Err(uc::Error::Repo(RepoError::AlreadyExists))
    ));
    assert_eq!(db.count_venues().unwrap(), 0);
    assert_eq!(db.count_crawls().unwrap(), 0);

    let result = db.transaction(|conn| {
        conn.create_venue(&venue)?;
        conn.create_crawl(&crawl)?;
        Ok::<_, uc::Error>(())
    });
    assert!(result.is_ok());
    assert_eq!(db.count_venues().unwrap(), 1);
    assert_eq!(db.count_crawls().unwrap(), 1);
}

#[test]
fn duplicate_usernames_are_rejected() {
    let connections = Connections::init();
    let db = connections.exclusive();
    let mia = Participant::build().id("p-mia").username("mia").finish();
    db.create_participant(&mia).unwrap();

    let dup = Participant::build().id("p-dup").username("mia").finish();
    assert!(matches!(
        db.create_participant(&dup),
        Err(RepoError::AlreadyExists)
    ));

    let found = db
        .try_get_participant_by_username(&"mia".parse().unwrap())
        .unwrap();
    assert_eq!(found.map(|participant| participant.id), Some(mia.id));
}

#[test]
fn postal_area_names_are_the_lookup_key() {
    let connections = Connections::init();
    let db = connections.exclusive();
    let area = PostalArea {
        id: Id::new(),
        name: "70173".into(),
        description: "Stuttgart-Mitte".into(),
        boundary: MapPolygon::new(vec![
            MapPoint::from_lat_lng_deg(48.76, 9.16),
            MapPoint::from_lat_lng_deg(48.76, 9.20),
            MapPoint::from_lat_lng_deg(48.79, 9.20),
            MapPoint::from_lat_lng_deg(48.79, 9.16),
        ]),
    };
    db.create_postal_area(&area).unwrap();

    let clash = PostalArea {
        id: Id::new(),
        ..area.clone()
    };
    assert!(matches!(
        db.create_postal_area(&clash),
        Err(RepoError::AlreadyExists)
    ));

    assert_eq!(db.try_get_postal_area_by_name("70173").unwrap(), Some(area));
    assert_eq!(db.try_get_postal_area_by_name("70174").unwrap(), None);
    assert_eq!(db.count_postal_areas().unwrap(), 1);
}

#[test]
fn record_participant_positions() {
    let connections = Connections::init();
    let db = connections.exclusive();
    let position = LastPosition {
        pos: MapPoint::from_lat_lng_deg(48.7755, 9.1827),
        reported_at: Timestamp::from_secs(42),
    };

    let missing: Id = "nobody".into();
    assert!(matches!(
        db.update_participant_position(&missing, &position),
        Err(RepoError::NotFound)
    ));

    let mia = Participant::build().id("p-mia").username("mia").finish();
    db.create_participant(&mia).unwrap();
    db.update_participant_position(&mia.id, &position).unwrap();
    let stored = db.get_participant(&mia.id).unwrap();
    assert_eq!(stored.last_position, Some(position));
}
