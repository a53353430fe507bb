use std::collections::{BTreeMap, BTreeSet};

use crate::{
    geo::{Distance, MapPoint, MapPolygon},
    id::Id,
    participant::Username,
    time::{TimeWindow, Timestamp},
};

/// A single geocoder candidate kept in the search cache.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedLocation {
    pub place_name : String,
    pub center     : MapPoint,
    pub boundary   : Option<MapPolygon>,
}

/// Candidates of the most recent venue search around an address,
/// kept to avoid repeated external geocoding. Only meaningful
/// while no home location has been committed.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchLocations {
    pub candidates: Vec<GeocodedLocation>,
    pub radius: Distance,
}

/// Committed starting area of a crawl. The polygon is derived
/// from center and radius and is what spatial queries match on.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct HomeLocation {
    pub center  : MapPoint,
    pub radius  : Distance,
    pub polygon : MapPolygon,
}

/// Which participants are currently checked in at which venue.
///
/// Venues without attendants carry no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceMap(BTreeMap<Id, BTreeSet<Id>>);

impl AttendanceMap {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn venues(&self) -> impl Iterator<Item = &Id> {
        self.0.keys()
    }

    pub fn contains(&self, venue: &Id, participant: &Id) -> bool {
        self.0
            .get(venue)
            .map(|attendants| attendants.contains(participant))
            .unwrap_or(false)
    }

    pub fn attendants_at(&self, venue: &Id) -> impl Iterator<Item = &Id> {
        self.0.get(venue).into_iter().flatten()
    }

    /// All participant ids across all venues, deduplicated.
    pub fn participants(&self) -> BTreeSet<&Id> {
        self.0.values().flatten().collect()
    }

    pub fn venues_of(&self, participant: &Id) -> Vec<&Id> {
        self.0
            .iter()
            .filter(|(_, attendants)| attendants.contains(participant))
            .map(|(venue, _)| venue)
            .collect()
    }

    pub fn clear_participant(&mut self, participant: &Id) {
        for attendants in self.0.values_mut() {
            attendants.remove(participant);
        }
        self.0.retain(|_, attendants| !attendants.is_empty());
    }

    pub fn check_in(&mut self, venue: Id, participant: Id) {
        self.0.entry(venue).or_default().insert(participant);
    }

    pub fn retain_venues(&mut self, venues: &[Id]) {
        self.0.retain(|venue, _| venues.contains(venue));
    }
}

/// Atomic change of a crawl's attendance bookkeeping.
///
/// Storage backends apply a whole transition under a single
/// document update so that concurrent reports never observe a
/// participant removed from one venue but not yet added to the
/// next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceTransition {
    /// Enlist a participant on the crawl roster.
    Join { participant: Id },
    /// Drop a participant from the roster and all venue sets.
    Leave { participant: Id },
    /// Replace the venue check-ins of a participant, clearing
    /// every previous check-in first.
    Relocate { participant: Id, venues: Vec<Id> },
}

/// A scheduled, ordered multi-venue tour with live attendance.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Crawl {
    pub id                  : Id,
    pub name                : String,
    pub description         : String,
    pub owner               : Username,
    pub period              : TimeWindow,
    pub published           : Option<Timestamp>,
    /// Walking order, significant.
    pub venues              : Vec<Id>,
    pub search_locations    : Option<SearchLocations>,
    pub location            : Option<HomeLocation>,
    pub attendants          : BTreeSet<Id>,
    pub attendants_location : AttendanceMap,
}

impl Crawl {
    pub fn is_published(&self) -> bool {
        self.published.is_some()
    }

    pub fn publish(&mut self, at: Timestamp) {
        self.published = Some(at);
    }

    pub fn unpublish(&mut self) {
        self.published = None;
    }

    /// Commits a home location. Cached search candidates refer to
    /// yet-unconfirmed centers and become stale at this point.
    pub fn set_location(&mut self, location: HomeLocation) {
        self.search_locations = None;
        self.location = Some(location);
    }

    pub fn cache_search_locations(&mut self, cache: SearchLocations) {
        self.search_locations = Some(cache);
    }

    /// Replaces the ordered venue list. Check-ins at venues that
    /// are no longer listed are dropped.
    pub fn set_venues(&mut self, venues: Vec<Id>) {
        self.attendants_location.retain_venues(&venues);
        self.venues = venues;
    }

    /// Applies an attendance transition, upholding the containment
    /// invariants even if the roster or venue list has changed
    /// since the caller decided on the transition.
    pub fn apply_attendance(&mut self, transition: &AttendanceTransition) {
        match transition {
            AttendanceTransition::Join { participant } => {
                self.attendants.insert(participant.clone());
            }
            AttendanceTransition::Leave { participant } => {
                self.attendants.remove(participant);
                self.attendants_location.clear_participant(participant);
            }
            AttendanceTransition::Relocate {
                participant,
                venues,
            } => {
                self.attendants_location.clear_participant(participant);
                if !self.attendants.contains(participant) {
                    return;
                }
                for venue in venues {
                    if !self.venues.contains(venue) {
                        continue;
                    }
                    self.attendants_location
                        .check_in(venue.clone(), participant.clone());
                }
            }
        }
        debug_assert!(self.attendance_is_consistent());
    }

    /// Checked-in participants are always on the roster and only
    /// checked in at listed venues.
    pub fn attendance_is_consistent(&self) -> bool {
        self.attendants_location
            .participants()
            .iter()
            .all(|participant| self.attendants.contains(*participant))
            && self
                .attendants_location
                .venues()
                .all(|venue| self.venues.contains(venue))
    }
}
