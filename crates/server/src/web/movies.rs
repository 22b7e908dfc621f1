//! List, add, edit, and delete pages.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use minijinja::context;
use tracing::info;

use crate::state::AppState;

use super::error::PageError;
use super::forms::{AddForm, EditForm, FieldErrors};

/// Rebuild the snapshot and render the list view over it.
///
/// Every path that ends on the list view goes through here, so the
/// snapshot is never stale for the next read.
pub(crate) fn render_list(state: &AppState) -> Result<Html<String>, PageError> {
    state.snapshot().refresh(state.store())?;
    let movies = state.snapshot().current();
    state
        .pages()
        .render("index.html", context! { movies => &*movies })
}

/// GET /
pub async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    render_list(&state)
}

/// GET /add
pub async fn add_form(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    state.pages().render(
        "add.html",
        context! {
            form => AddForm::default(),
            errors => FieldErrors::new(),
            token => state.form_token(),
        },
    )
}

/// POST /add
pub async fn add_submit(
    State(state): State<Arc<AppState>>,
    axum::Form(form): axum::Form<AddForm>,
) -> Result<Response, PageError> {
    state.verify_token(&form.token)?;

    let new = match form.validate() {
        Ok(new) => new,
        Err(errors) => {
            let page = state.pages().render(
                "add.html",
                context! {
                    form => form,
                    errors => errors,
                    token => state.form_token(),
                },
            )?;
            return Ok(page.into_response());
        }
    };

    let movie = state.store().insert(&new)?;
    info!("Added movie {} ({})", movie.title, movie.id);

    Ok(render_list(&state)?.into_response())
}

/// GET /edit/{id}
pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let movie = state.store().get(id)?;
    let form = EditForm::from_movie(&movie);
    state.pages().render(
        "edit.html",
        context! {
            movie => movie,
            form => form,
            errors => FieldErrors::new(),
            token => state.form_token(),
        },
    )
}

/// POST /edit/{id}
pub async fn edit_submit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    axum::Form(form): axum::Form<EditForm>,
) -> Result<Response, PageError> {
    state.verify_token(&form.token)?;

    let movie = state.store().get(id)?;

    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(errors) => {
            let page = state.pages().render(
                "edit.html",
                context! {
                    movie => movie,
                    form => form,
                    errors => errors,
                    token => state.form_token(),
                },
            )?;
            return Ok(page.into_response());
        }
    };

    state.store().update(id, &fields)?;
    info!("Updated movie {} ({})", fields.title, id);

    Ok(render_list(&state)?.into_response())
}

/// GET /delete/{id}
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    // Confirm existence first; a missing id is a 404 page, not a fault.
    let movie = state.store().get(id)?;
    state.store().delete(id)?;
    info!("Deleted movie {} ({})", movie.title, id);

    render_list(&state)
}
