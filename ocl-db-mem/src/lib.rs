use ocl_core::usecases as uc;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

mod repo_impl;
mod repo_wrapper;
mod spatial;
mod store;

use self::store::MemStore;

type SharedStore = Arc<RwLock<MemStore>>;

pub struct DbReadOnly<'a> {
    store: RwLockReadGuard<'a, MemStore>,
}

impl<'a> DbReadOnly<'a> {
    fn new(store: &'a SharedStore) -> Self {
        Self {
            store: store.read(),
        }
    }

    fn inner(&self) -> DbConnection<'_> {
        DbConnection::new(&self.store)
    }
}

pub struct DbReadWrite<'a> {
    store: RwLockWriteGuard<'a, MemStore>,
}

pub struct DbConnection<'a> {
    store: &'a MemStore,
}

impl<'a> DbConnection<'a> {
    fn new(store: &'a MemStore) -> Self {
        Self { store }
    }
}

impl<'a> DbReadWrite<'a> {
    fn new(store: &'a SharedStore) -> Self {
        Self {
            store: store.write(),
        }
    }

    fn inner(&self) -> DbConnection<'_> {
        DbConnection::new(&self.store)
    }

    pub fn transaction<T, F, E>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        // The exclusive lock held by this handle keeps all other
        // writers out between taking and restoring the checkpoint.
        let checkpoint = self.store.checkpoint();
        match f(&DbConnection::new(&self.store)) {
            Ok(result) => Ok(result),
            Err(err) => {
                log::debug!("Rolling back all changes of the failed transaction");
                self.store.restore(checkpoint);
                Err(err.into())
            }
        }
    }
}

#[derive(Clone, Default)]
pub struct Connections {
    // Only a single handle with write access will be handed
    // out at a time. Multiple read handles can be used
    // concurrently. Individual repository calls are consistent
    // either way because every collection is guarded by its
    // own lock.
    store: SharedStore,
}

impl Connections {
    pub fn init() -> Self {
        Self::default()
    }

    pub fn shared(&self) -> DbReadOnly<'_> {
        DbReadOnly::new(&self.store)
    }

    pub fn exclusive(&self) -> DbReadWrite<'_> {
        DbReadWrite::new(&self.store)
    }
}
