use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{movies, search};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(movies::home))
        .route("/add", get(movies::add_form).post(movies::add_submit))
        .route("/edit/{id}", get(movies::edit_form).post(movies::edit_submit))
        .route("/delete/{id}", get(movies::delete))
        .route("/search", get(search::search_form).post(search::search_submit))
        .route("/find", get(search::import))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
