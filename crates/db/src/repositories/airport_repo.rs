//! Repository for the `airports` table.

use skyport_core::types::DbId;

use crate::models::airport::{Airport, CreateAirport};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, closest_big_city, created_at";

/// Provides CRUD operations for airports.
pub struct AirportRepo;

impl AirportRepo {
    /// Insert a new airport, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateAirport) -> Result<Airport, sqlx::Error> {
        let query = format!(
            "INSERT INTO airports (name, closest_big_city)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Airport>(&query)
            .bind(&input.name)
            .bind(&input.closest_big_city)
            .fetch_one(pool)
            .await
    }

    /// Find an airport by its internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Airport>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM airports WHERE id = $1");
        sqlx::query_as::<_, Airport>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all airports, alphabetical by name.
    pub async fn list(pool: &DbPool) -> Result<Vec<Airport>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM airports ORDER BY name");
        sqlx::query_as::<_, Airport>(&query).fetch_all(pool).await
    }
}
