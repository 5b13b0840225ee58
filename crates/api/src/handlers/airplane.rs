//! Handlers for the `/airplanes` resource, including image upload.
//!
//! Two explicit serializer variants are rendered here: a compact list form
//! (type name flattened to a string) and a full detail form (nested type).
//! `capacity` is computed at render time in both; it is never stored.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use skyport_core::error::CoreError;
use skyport_core::fleet::{capacity, validate_airplane_dimensions, validate_name};
use skyport_core::types::DbId;
use skyport_db::models::airplane::{AirplaneRow, CreateAirplane};
use skyport_db::repositories::AirplaneRepo;

use crate::error::{AppError, AppResult};
use crate::media::{self, MediaStore};
use crate::middleware::{RequireAuth, RequireStaff};
use crate::state::AppState;

/// Compact list representation: one summary row per airplane.
#[derive(Debug, Serialize)]
pub struct AirplaneList {
    pub id: DbId,
    pub name: String,
    /// Type name, flattened to a string.
    pub airplane_type: String,
    pub capacity: i64,
    /// Public media URL, `null` until an image is uploaded.
    pub image: Option<String>,
}

impl From<AirplaneRow> for AirplaneList {
    fn from(row: AirplaneRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            airplane_type: row.airplane_type_name,
            capacity: capacity(row.rows, row.seats_in_row),
            image: row.image.as_deref().map(MediaStore::url_for),
        }
    }
}

/// Nested type reference used by the detail representation.
#[derive(Debug, Serialize)]
pub struct AirplaneTypeRef {
    pub id: DbId,
    pub name: String,
}

/// Full detail representation with the expanded type.
#[derive(Debug, Serialize)]
pub struct AirplaneDetail {
    pub id: DbId,
    pub name: String,
    pub rows: i64,
    pub seats_in_row: i64,
    pub capacity: i64,
    pub airplane_type: AirplaneTypeRef,
    pub image: Option<String>,
}

impl From<AirplaneRow> for AirplaneDetail {
    fn from(row: AirplaneRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            rows: row.rows,
            seats_in_row: row.seats_in_row,
            capacity: capacity(row.rows, row.seats_in_row),
            airplane_type: AirplaneTypeRef {
                id: row.airplane_type_id,
                name: row.airplane_type_name,
            },
            image: row.image.as_deref().map(MediaStore::url_for),
        }
    }
}

/// Response body for the image upload and delete endpoints.
#[derive(Debug, Serialize)]
pub struct AirplaneImage {
    pub id: DbId,
    pub image: Option<String>,
}

/// GET /api/v1/airplanes
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<Vec<AirplaneList>>> {
    let airplanes = AirplaneRepo::list(&state.pool).await?;
    Ok(Json(airplanes.into_iter().map(AirplaneList::from).collect()))
}

/// POST /api/v1/airplanes
pub async fn create(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Json(input): Json<CreateAirplane>,
) -> AppResult<(StatusCode, Json<AirplaneDetail>)> {
    validate_name(&input.name, "name")?;
    validate_airplane_dimensions(input.rows, input.seats_in_row)?;

    let airplane = AirplaneRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(airplane.into())))
}

/// GET /api/v1/airplanes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<DbId>,
) -> AppResult<Json<AirplaneDetail>> {
    let airplane = find_airplane(&state, id).await?;
    Ok(Json(airplane.into()))
}

/// POST /api/v1/airplanes/{id}/upload-image
///
/// Accepts a multipart form with a required `image` file field. The payload
/// must fully decode as an image; anything else is rejected with 400 before
/// any state changes. A successful upload replaces (and removes) any
/// previously stored file.
pub async fn upload_image(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<Json<AirplaneImage>> {
    let airplane = find_airplane(&state, id).await?;

    let mut upload: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("image") {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            upload = Some(data.to_vec());
        }
    }

    let data = upload.ok_or_else(|| {
        AppError::BadRequest("Multipart field 'image' is required".into())
    })?;

    let format = media::validate_image(&data)?;

    let relative = state
        .media
        .save_airplane_image(&airplane.name, format, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store image: {e}")))?;

    AirplaneRepo::set_image(&state.pool, id, Some(&relative)).await?;

    // A replaced image must not leave an orphaned file behind.
    if let Some(old) = airplane.image.as_deref() {
        if let Err(e) = state.media.delete(old).await {
            tracing::warn!(airplane_id = id, error = %e, "Failed to remove replaced image");
        }
    }

    Ok(Json(AirplaneImage {
        id,
        image: Some(MediaStore::url_for(&relative)),
    }))
}

/// DELETE /api/v1/airplanes/{id}/image
///
/// Removes the stored file and clears the column. Idempotent: deleting an
/// airplane with no image is a no-op 204.
pub async fn delete_image(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let airplane = find_airplane(&state, id).await?;

    if let Some(relative) = airplane.image.as_deref() {
        state
            .media
            .delete(relative)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to remove image: {e}")))?;
        AirplaneRepo::set_image(&state.pool, id, None).await?;
    }

    Ok(StatusCode::NO_CONTENT)
}

async fn find_airplane(state: &AppState, id: DbId) -> AppResult<AirplaneRow> {
    AirplaneRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Airplane",
            id,
        }))
}
