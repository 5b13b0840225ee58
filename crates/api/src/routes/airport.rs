//! Route definitions for the `/airports` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::airport;
use crate::state::AppState;

/// Routes mounted at `/airports`.
///
/// ```text
/// GET  /        list
/// POST /        create
/// GET  /{id}    get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(airport::list).post(airport::create))
        .route("/{id}", get(airport::get_by_id))
}
