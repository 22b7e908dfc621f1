//! Process-wide snapshot of the movie catalog.
//!
//! The snapshot is a full, ordered copy of the catalog, shared by every
//! request. It is rebuilt in full from [`MovieStore::list_all`] - never
//! patched incrementally - once at process start and again after every
//! insert, update, or delete. The list view also rebuilds it on every
//! read, so it is a shared reload point rather than a cache in the
//! performance sense.
//!
//! A single-writer lock guards the swap. Concurrent requests still see
//! whichever rebuild finished last; the target deployment is
//! single-user, and no stronger guarantee is made.

use std::sync::{Arc, RwLock};

use crate::catalog::{CatalogError, Movie, MovieStore};

/// Shared, ordered snapshot of all catalog rows.
#[derive(Default)]
pub struct CatalogSnapshot {
    movies: RwLock<Arc<Vec<Movie>>>,
}

impl CatalogSnapshot {
    /// Create an empty snapshot. Call [`refresh`](Self::refresh) before
    /// the first read.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot with the store's current contents.
    pub fn refresh(&self, store: &dyn MovieStore) -> Result<(), CatalogError> {
        let movies = store.list_all()?;
        *self.movies.write().unwrap() = Arc::new(movies);
        Ok(())
    }

    /// The latest snapshot, in ranking order.
    pub fn current(&self) -> Arc<Vec<Movie>> {
        self.movies.read().unwrap().clone()
    }
}
