//! Repository for the `airplane_types` table.

use skyport_core::types::DbId;

use crate::models::airplane_type::{AirplaneType, CreateAirplaneType};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at";

/// Provides CRUD operations for airplane types.
pub struct AirplaneTypeRepo;

impl AirplaneTypeRepo {
    /// Insert a new airplane type, returning the created row.
    pub async fn create(
        pool: &DbPool,
        input: &CreateAirplaneType,
    ) -> Result<AirplaneType, sqlx::Error> {
        let query = format!(
            "INSERT INTO airplane_types (name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AirplaneType>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find an airplane type by its internal ID.
    pub async fn find_by_id(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<AirplaneType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM airplane_types WHERE id = $1");
        sqlx::query_as::<_, AirplaneType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all airplane types, alphabetical by name.
    pub async fn list(pool: &DbPool) -> Result<Vec<AirplaneType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM airplane_types ORDER BY name");
        sqlx::query_as::<_, AirplaneType>(&query)
            .fetch_all(pool)
            .await
    }
}
