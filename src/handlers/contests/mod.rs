//! Contest handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Contest routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_contests).post(handler::create_contest))
        .route("/{id}", get(handler::get_contest).put(handler::update_contest))
        .route("/{id}/results", get(handler::get_results))
}
