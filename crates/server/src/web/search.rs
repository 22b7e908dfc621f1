//! TMDB search and import pages.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use minijinja::context;
use serde::Deserialize;
use tracing::info;

use marquee_core::{NewMovie, REVIEW_PLACEHOLDER, UNRANKED_RANKING};

use crate::state::AppState;

use super::error::PageError;
use super::forms::{FieldErrors, SearchForm};

/// GET /search
pub async fn search_form(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    state.pages().render(
        "search.html",
        context! {
            form => SearchForm::default(),
            errors => FieldErrors::new(),
            token => state.form_token(),
        },
    )
}

/// POST /search
pub async fn search_submit(
    State(state): State<Arc<AppState>>,
    axum::Form(form): axum::Form<SearchForm>,
) -> Result<Response, PageError> {
    state.verify_token(&form.token)?;

    let title = match form.validate() {
        Ok(title) => title,
        Err(errors) => {
            let page = state.pages().render(
                "search.html",
                context! {
                    form => form,
                    errors => errors,
                    token => state.form_token(),
                },
            )?;
            return Ok(page.into_response());
        }
    };

    // Results pass through in service order; an empty list renders the
    // no-results selection view rather than an error.
    let options = state.metadata().search_movies(&title).await?;
    info!("TMDB search for '{}' returned {} results", title, options.len());

    let page = state.pages().render(
        "select.html",
        context! {
            options => options,
            query => title,
        },
    )?;
    Ok(page.into_response())
}

#[derive(Debug, Deserialize)]
pub struct ImportParams {
    pub id: Option<u64>,
}

/// GET /find?id={tmdb_id}
pub async fn import(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ImportParams>,
) -> Result<Redirect, PageError> {
    let id = params
        .id
        .ok_or_else(|| PageError::BadRequest("Missing id query parameter.".to_string()))?;

    let detail = state.metadata().movie_detail(id).await?;
    let year = detail.year().ok_or_else(|| {
        PageError::Upstream(format!(
            "Release date \"{}\" has no usable year",
            detail.release_date
        ))
    })?;

    let new = NewMovie {
        title: detail.title.clone(),
        year,
        description: detail.overview.clone(),
        rating: Some(0.0),
        ranking: Some(UNRANKED_RANKING),
        review: Some(REVIEW_PLACEHOLDER.to_string()),
        img_url: state.metadata().image_url(&detail.poster_path),
    };

    let movie = state.store().insert(&new)?;
    state.snapshot().refresh(state.store())?;
    info!("Imported movie {} ({}) from TMDB id {}", movie.title, movie.id, id);

    Ok(Redirect::to("/"))
}
