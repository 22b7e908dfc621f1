//! SQLite-backed movie catalog implementation.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection};

use super::{CatalogError, Movie, MovieStore, NewMovie};

/// SQLite-backed movie catalog.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Create a new SQLite store, creating the database file and table if needed.
    pub fn new(path: &Path) -> Result<Self, CatalogError> {
        let conn = Connection::open(path).map_err(|e| CatalogError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an in-memory SQLite store (useful for testing).
    pub fn in_memory() -> Result<Self, CatalogError> {
        let conn =
            Connection::open_in_memory().map_err(|e| CatalogError::Database(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), CatalogError> {
        conn.execute_batch(
            r#"
            -- One row per movie. Title uniqueness is the only constraint
            -- the store enforces; rating/year ranges live at the form
            -- boundary and a direct write can violate them.
            CREATE TABLE IF NOT EXISTS movies (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL UNIQUE,
                year INTEGER NOT NULL,
                description TEXT NOT NULL,
                rating REAL,
                ranking INTEGER,
                review TEXT,
                img_url TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_movies_ranking ON movies(ranking);
            "#,
        )
        .map_err(|e| CatalogError::Database(e.to_string()))?;

        Ok(())
    }

    /// Convert a row to a Movie.
    fn row_to_movie(row: &rusqlite::Row) -> rusqlite::Result<Movie> {
        Ok(Movie {
            id: row.get(0)?,
            title: row.get(1)?,
            year: row.get(2)?,
            description: row.get(3)?,
            rating: row.get(4)?,
            ranking: row.get(5)?,
            review: row.get(6)?,
            img_url: row.get(7)?,
        })
    }
}

impl MovieStore for SqliteStore {
    fn list_all(&self) -> Result<Vec<Movie>, CatalogError> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn
            .prepare(
                "SELECT id, title, year, description, rating, ranking, review, img_url
                 FROM movies ORDER BY ranking ASC",
            )
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        let rows = stmt
            .query_map([], Self::row_to_movie)
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        let mut movies = Vec::new();
        for row in rows {
            movies.push(row.map_err(|e| CatalogError::Database(e.to_string()))?);
        }
        Ok(movies)
    }

    fn get(&self, id: i64) -> Result<Movie, CatalogError> {
        let conn = self.conn.lock().unwrap();

        conn.query_row(
            "SELECT id, title, year, description, rating, ranking, review, img_url
             FROM movies WHERE id = ?",
            params![id],
            Self::row_to_movie,
        )
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => CatalogError::NotFound(id),
            _ => CatalogError::Database(e.to_string()),
        })
    }

    fn insert(&self, new: &NewMovie) -> Result<Movie, CatalogError> {
        let conn = self.conn.lock().unwrap();

        let result = conn.execute(
            "INSERT INTO movies (title, year, description, rating, ranking, review, img_url)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                &new.title,
                new.year,
                &new.description,
                new.rating,
                new.ranking,
                &new.review,
                &new.img_url,
            ],
        );

        match result {
            Ok(_) => Ok(new.with_id(conn.last_insert_rowid())),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(CatalogError::DuplicateTitle(new.title.clone()))
            }
            Err(e) => Err(CatalogError::Database(e.to_string())),
        }
    }

    fn update(&self, id: i64, fields: &NewMovie) -> Result<(), CatalogError> {
        let conn = self.conn.lock().unwrap();

        let result = conn.execute(
            "UPDATE movies
             SET title = ?, year = ?, description = ?, rating = ?, ranking = ?, review = ?, img_url = ?
             WHERE id = ?",
            params![
                &fields.title,
                fields.year,
                &fields.description,
                fields.rating,
                fields.ranking,
                &fields.review,
                &fields.img_url,
                id,
            ],
        );

        let rows_affected = match result {
            Ok(n) => n,
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                return Err(CatalogError::DuplicateTitle(fields.title.clone()));
            }
            Err(e) => return Err(CatalogError::Database(e.to_string())),
        };

        if rows_affected == 0 {
            return Err(CatalogError::NotFound(id));
        }

        Ok(())
    }

    fn delete(&self, id: i64) -> Result<(), CatalogError> {
        let conn = self.conn.lock().unwrap();

        let rows_affected = conn
            .execute("DELETE FROM movies WHERE id = ?", params![id])
            .map_err(|e| CatalogError::Database(e.to_string()))?;

        if rows_affected == 0 {
            return Err(CatalogError::NotFound(id));
        }

        Ok(())
    }
}
