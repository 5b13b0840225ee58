//! Route definitions for the `/airplane-types` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::airplane_type;
use crate::state::AppState;

/// Routes mounted at `/airplane-types`.
///
/// ```text
/// GET  /        list
/// POST /        create
/// GET  /{id}    get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(airplane_type::list).post(airplane_type::create))
        .route("/{id}", get(airplane_type::get_by_id))
}
