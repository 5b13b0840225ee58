//! Route entity model and DTOs.
//!
//! Queries join `airports` twice (source and destination) so list and
//! detail serializers can render airport names without extra lookups.

use serde::Deserialize;
use skyport_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `routes` table joined with both airport names and cities.
#[derive(Debug, Clone, FromRow)]
pub struct RouteRow {
    pub id: DbId,
    pub source_id: DbId,
    pub source_name: String,
    pub source_closest_big_city: String,
    pub destination_id: DbId,
    pub destination_name: String,
    pub destination_closest_big_city: String,
    pub distance: i64,
    pub created_at: Timestamp,
}

/// DTO for creating a new route. `source` / `destination` are airport ids.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoute {
    pub source: DbId,
    pub destination: DbId,
    pub distance: i64,
}
