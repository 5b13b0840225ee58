//! Airplane entity model and DTOs.
//!
//! Queries always join `airplane_types` so the type name is available to
//! both serializer variants without a second round trip.

use serde::Deserialize;
use skyport_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `airplanes` table joined with its type name.
#[derive(Debug, Clone, FromRow)]
pub struct AirplaneRow {
    pub id: DbId,
    pub name: String,
    pub rows: i64,
    pub seats_in_row: i64,
    pub airplane_type_id: DbId,
    pub airplane_type_name: String,
    /// Relative media path; `None` until an image is uploaded.
    pub image: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new airplane. `airplane_type` is an id reference.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAirplane {
    pub name: String,
    pub rows: i64,
    pub seats_in_row: i64,
    pub airplane_type: DbId,
}
