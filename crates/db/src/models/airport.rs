//! Airport entity model and DTO.

use serde::{Deserialize, Serialize};
use skyport_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `airports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Airport {
    pub id: DbId,
    pub name: String,
    pub closest_big_city: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new airport.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAirport {
    pub name: String,
    pub closest_big_city: String,
}
