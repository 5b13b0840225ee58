pub mod airplane;
pub mod airplane_type;
pub mod airport;
pub mod health;
pub mod route;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /airports                          list (auth), create (staff)
/// /airports/{id}                     detail (auth)
///
/// /airplane-types                    list (auth), create (staff)
/// /airplane-types/{id}               detail (auth)
///
/// /airplanes                         list (auth), create (staff)
/// /airplanes/{id}                    detail (auth)
/// /airplanes/{id}/upload-image       multipart upload (staff)
/// /airplanes/{id}/image              delete stored image (staff)
///
/// /routes?source=&destination=       list + filter (auth), create (staff)
/// /routes/{id}                       detail (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/airports", airport::router())
        .nest("/airplane-types", airplane_type::router())
        .nest("/airplanes", airplane::router())
        .nest("/routes", route::router())
}
