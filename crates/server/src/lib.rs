pub mod state;
pub mod web;

pub use state::AppState;
pub use web::create_router;
