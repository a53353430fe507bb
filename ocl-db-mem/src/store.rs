use std::collections::HashMap;

use parking_lot::RwLock;

use ocl_core::entities::*;

/// Collections of the in-memory database.
///
/// Every collection is guarded by its own lock so that a single
/// repository call is atomic with respect to the documents it
/// touches. In particular an attendance transition is applied to
/// the stored crawl under the collection lock and readers never
/// observe a partially applied transition.
#[derive(Default)]
pub(crate) struct MemStore {
    pub(crate) crawls: RwLock<HashMap<Id, Crawl>>,
    pub(crate) venues: RwLock<HashMap<Id, Venue>>,
    pub(crate) postal_areas: RwLock<HashMap<Id, PostalArea>>,
    pub(crate) participants: RwLock<HashMap<Id, Participant>>,
}

/// A copy of all collections, taken before a transaction and
/// written back if the transaction fails.
pub(crate) struct Checkpoint {
    crawls: HashMap<Id, Crawl>,
    venues: HashMap<Id, Venue>,
    postal_areas: HashMap<Id, PostalArea>,
    participants: HashMap<Id, Participant>,
}

impl MemStore {
    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            crawls: self.crawls.read().clone(),
            venues: self.venues.read().clone(),
            postal_areas: self.postal_areas.read().clone(),
            participants: self.participants.read().clone(),
        }
    }

    pub(crate) fn restore(&self, checkpoint: Checkpoint) {
        let Checkpoint {
            crawls,
            venues,
            postal_areas,
            participants,
        } = checkpoint;
        *self.crawls.write() = crawls;
        *self.venues.write() = venues;
        *self.postal_areas.write() = postal_areas;
        *self.participants.write() = participants;
    }
}
