//! Movie catalog - the durable table of movie records.
//!
//! The catalog is the single source of truth for the list; the
//! process-wide [`crate::snapshot::CatalogSnapshot`] is rebuilt from
//! `list_all` after every mutation.

mod sqlite;
mod types;

pub use sqlite::SqliteStore;
pub use types::*;

/// Trait for movie catalog storage.
pub trait MovieStore: Send + Sync {
    /// List every movie, ordered by ranking ascending.
    ///
    /// Unbounded, no pagination. Rows with a NULL ranking sort where
    /// SQLite puts them (first, under ASC); imported rows carry the
    /// [`UNRANKED_RANKING`] sentinel instead of NULL so they land after
    /// every ranked row.
    fn list_all(&self) -> Result<Vec<Movie>, CatalogError>;

    /// Get a specific movie by id.
    fn get(&self, id: i64) -> Result<Movie, CatalogError>;

    /// Insert a new movie and return the persisted row with its assigned id.
    ///
    /// Titles are unique; inserting an existing title fails with
    /// [`CatalogError::DuplicateTitle`].
    fn insert(&self, new: &NewMovie) -> Result<Movie, CatalogError>;

    /// Overwrite all mutable fields of an existing movie.
    ///
    /// Full replacement, last writer wins. No partial-patch semantics.
    fn update(&self, id: i64, fields: &NewMovie) -> Result<(), CatalogError>;

    /// Delete a movie by id.
    fn delete(&self, id: i64) -> Result<(), CatalogError>;
}
