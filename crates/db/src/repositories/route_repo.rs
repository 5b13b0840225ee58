//! Repository for the `routes` table.
//!
//! Reads join `airports` twice, once per role (source / destination).

use skyport_core::types::DbId;

use crate::models::route::{CreateRoute, RouteRow};
use crate::DbPool;

/// Joined column list shared across queries to avoid repetition.
const COLUMNS: &str = "r.id, \
                       r.source_id, s.name AS source_name, \
                       s.closest_big_city AS source_closest_big_city, \
                       r.destination_id, d.name AS destination_name, \
                       d.closest_big_city AS destination_closest_big_city, \
                       r.distance, r.created_at";

/// Joined FROM clause shared across queries.
const FROM: &str = "FROM routes r \
                    JOIN airports s ON s.id = r.source_id \
                    JOIN airports d ON d.id = r.destination_id";

/// Provides CRUD operations for routes.
pub struct RouteRepo;

impl RouteRepo {
    /// Insert a new route, returning the created row joined with both airports.
    pub async fn create(pool: &DbPool, input: &CreateRoute) -> Result<RouteRow, sqlx::Error> {
        let id: DbId = sqlx::query_scalar(
            "INSERT INTO routes (source_id, destination_id, distance)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(input.source)
        .bind(input.destination)
        .bind(input.distance)
        .fetch_one(pool)
        .await?;

        // The row was just inserted, so the lookup cannot miss.
        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Find a route by its internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<RouteRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM} WHERE r.id = $1");
        sqlx::query_as::<_, RouteRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List routes, optionally narrowed by exact source / destination
    /// airport name. Absent filters impose no constraint; a name that
    /// matches no airport yields an empty list rather than an error.
    pub async fn list(
        pool: &DbPool,
        source: Option<&str>,
        destination: Option<&str>,
    ) -> Result<Vec<RouteRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} {FROM}
             WHERE ($1 IS NULL OR s.name = $1)
               AND ($2 IS NULL OR d.name = $2)
             ORDER BY r.id"
        );
        sqlx::query_as::<_, RouteRow>(&query)
            .bind(source)
            .bind(destination)
            .fetch_all(pool)
            .await
    }
}
