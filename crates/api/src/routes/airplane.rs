//! Route definitions for the `/airplanes` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::airplane;
use crate::state::AppState;

/// Routes mounted at `/airplanes`.
///
/// ```text
/// GET    /                    list
/// POST   /                    create
/// GET    /{id}                get_by_id
/// POST   /{id}/upload-image   upload_image (multipart)
/// DELETE /{id}/image          delete_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(airplane::list).post(airplane::create))
        .route("/{id}", get(airplane::get_by_id))
        .route("/{id}/upload-image", post(airplane::upload_image))
        .route("/{id}/image", delete(airplane::delete_image))
}
