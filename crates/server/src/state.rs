use std::sync::Arc;

use sha2::{Digest, Sha256};

use marquee_core::{CatalogSnapshot, MovieMetadata, MovieStore};

use crate::web::error::PageError;
use crate::web::views::Pages;

/// Shared application state
pub struct AppState {
    store: Arc<dyn MovieStore>,
    metadata: Arc<dyn MovieMetadata>,
    snapshot: CatalogSnapshot,
    pages: Pages,
    form_token: String,
}

impl AppState {
    /// Build the state. The form token is derived from the configured
    /// signing secret and stays fixed for the process lifetime.
    pub fn new(
        secret_key: &str,
        store: Arc<dyn MovieStore>,
        metadata: Arc<dyn MovieMetadata>,
        pages: Pages,
    ) -> Self {
        let form_token = format!("{:x}", Sha256::digest(secret_key.as_bytes()));
        Self {
            store,
            metadata,
            snapshot: CatalogSnapshot::new(),
            pages,
            form_token,
        }
    }

    pub fn store(&self) -> &dyn MovieStore {
        self.store.as_ref()
    }

    pub fn metadata(&self) -> &dyn MovieMetadata {
        self.metadata.as_ref()
    }

    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    pub fn pages(&self) -> &Pages {
        &self.pages
    }

    pub fn form_token(&self) -> &str {
        &self.form_token
    }

    /// Check the hidden token submitted with a mutating form.
    pub fn verify_token(&self, token: &str) -> Result<(), PageError> {
        if token != self.form_token {
            return Err(PageError::BadRequest(
                "The form token does not match. Reload the page and try again.".to_string(),
            ));
        }
        Ok(())
    }
}
