//! Airplane type entity model and DTO.

use serde::{Deserialize, Serialize};
use skyport_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `airplane_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AirplaneType {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new airplane type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAirplaneType {
    pub name: String,
}
