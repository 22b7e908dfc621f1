pub mod catalog;
pub mod config;
pub mod metadata;
pub mod snapshot;
pub mod testing;

pub use catalog::{
    CatalogError, Movie, MovieStore, NewMovie, SqliteStore, REVIEW_PLACEHOLDER, UNRANKED_RANKING,
};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, DatabaseConfig,
    ServerConfig,
};
pub use metadata::{
    MetadataError, MovieDetail, MovieMetadata, MovieSummary, TmdbClient, TmdbConfig,
};
pub use snapshot::CatalogSnapshot;
