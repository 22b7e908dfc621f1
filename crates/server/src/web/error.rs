//! User-visible error pages.
//!
//! Every handler failure maps to a status code and a rendered error
//! page; a missing record or a failing upstream call never takes the
//! process down.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use minijinja::{context, Environment};
use thiserror::Error;

use marquee_core::{CatalogError, MetadataError};

/// Errors surfaced to the browser as error pages.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Internal(String),
}

impl PageError {
    fn status(&self) -> StatusCode {
        match self {
            PageError::NotFound(_) => StatusCode::NOT_FOUND,
            PageError::BadRequest(_) => StatusCode::BAD_REQUEST,
            PageError::Conflict(_) => StatusCode::CONFLICT,
            PageError::Upstream(_) => StatusCode::BAD_GATEWAY,
            PageError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CatalogError> for PageError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(id) => {
                PageError::NotFound(format!("No movie with id {} in your list.", id))
            }
            CatalogError::DuplicateTitle(title) => {
                PageError::Conflict(format!("\"{}\" is already in your list.", title))
            }
            CatalogError::Database(message) => PageError::Internal(message),
        }
    }
}

impl From<MetadataError> for PageError {
    fn from(e: MetadataError) -> Self {
        match e {
            MetadataError::NotFound(id) => {
                PageError::NotFound(format!("The movie database has no entry with id {}.", id))
            }
            other => PageError::Upstream(other.to_string()),
        }
    }
}

impl From<minijinja::Error> for PageError {
    fn from(e: minijinja::Error) -> Self {
        PageError::Internal(e.to_string())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        // The error page renders from its own tiny environment so a
        // failure cannot recurse into the page that just failed.
        let rendered = (|| {
            let mut env = Environment::new();
            env.add_template("base.html", include_str!("../../templates/base.html"))?;
            env.add_template("error.html", include_str!("../../templates/error.html"))?;
            env.get_template("error.html")?.render(context! {
                status => status.as_u16(),
                reason => status.canonical_reason().unwrap_or("Error"),
                message => message,
            })
        })();

        match rendered {
            Ok(html) => (status, Html(html)).into_response(),
            Err(_) => (status, message).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            PageError::NotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            PageError::Conflict("x".into()).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            PageError::Upstream("x".into()).status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_catalog_not_found_maps_to_404() {
        let err: PageError = CatalogError::NotFound(7).into();
        assert!(matches!(err, PageError::NotFound(_)));
    }

    #[test]
    fn test_duplicate_title_maps_to_conflict() {
        let err: PageError = CatalogError::DuplicateTitle("Dune".into()).into();
        assert!(matches!(err, PageError::Conflict(_)));
        assert!(err.to_string().contains("Dune"));
    }

    #[test]
    fn test_metadata_missing_field_maps_to_upstream() {
        let err: PageError = MetadataError::MissingField("poster_path").into();
        assert!(matches!(err, PageError::Upstream(_)));
    }
}
