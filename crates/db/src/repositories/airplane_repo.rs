//! Repository for the `airplanes` table.
//!
//! Every read joins `airplane_types` so callers get the type name in the
//! same row.

use skyport_core::types::DbId;

use crate::models::airplane::{AirplaneRow, CreateAirplane};
use crate::DbPool;

/// Joined column list shared across queries to avoid repetition.
const COLUMNS: &str = "a.id, a.name, a.rows, a.seats_in_row, a.airplane_type_id, \
                       t.name AS airplane_type_name, a.image, a.created_at";

/// Joined FROM clause shared across queries.
const FROM: &str = "FROM airplanes a JOIN airplane_types t ON t.id = a.airplane_type_id";

/// Provides CRUD operations for airplanes.
pub struct AirplaneRepo;

impl AirplaneRepo {
    /// Insert a new airplane, returning the created row joined with its type.
    pub async fn create(pool: &DbPool, input: &CreateAirplane) -> Result<AirplaneRow, sqlx::Error> {
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO airplanes (name, rows, seats_in_row, airplane_type_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(input.rows)
        .bind(input.seats_in_row)
        .bind(input.airplane_type)
        .fetch_one(pool)
        .await?;

        // The row was just inserted, so the lookup cannot miss.
        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find an airplane by its internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<AirplaneRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM} WHERE a.id = $1");
        sqlx::query_as::<_, AirplaneRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all airplanes, alphabetical by name.
    pub async fn list(pool: &DbPool) -> Result<Vec<AirplaneRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM} ORDER BY a.name");
        sqlx::query_as::<_, AirplaneRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// Set (or clear) the stored image path. Returns `true` if a row matched.
    pub async fn set_image(
        pool: &DbPool,
        id: DbId,
        image: Option<&str>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE airplanes SET image = $2 WHERE id = $1")
            .bind(id)
            .bind(image)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
