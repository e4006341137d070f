//! MySQL implementation of the LocationRepository trait.
//!
//! Rows live in the `locations` table. Inserts rely on `AUTO_INCREMENT`;
//! saving a record that carries an id is an upsert keyed on the primary key.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use agri_core::domain::entities::location::Location;
use agri_core::errors::DomainError;
use agri_core::repositories::LocationRepository;
use agri_shared::types::{PaginatedResponse, Pagination};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS locations (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        latitude DOUBLE NOT NULL,
        longitude DOUBLE NOT NULL
    )
"#;

/// MySQL implementation of LocationRepository
pub struct MySqlLocationRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlLocationRepository {
    /// Create a new MySQL location repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Create the `locations` table when it does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("create locations table", e))?;

        tracing::debug!("Location schema ready");
        Ok(())
    }

    /// Convert database row to Location entity
    fn row_to_location(row: &sqlx::mysql::MySqlRow) -> Result<Location, DomainError> {
        let id: i64 = row
            .try_get("id")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get id: {}", e) })?;
        let latitude: f64 = row
            .try_get("latitude")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get latitude: {}", e) })?;
        let longitude: f64 = row
            .try_get("longitude")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get longitude: {}", e) })?;

        Ok(Location::with_id(id, latitude, longitude))
    }
}

fn db_error(action: &str, e: sqlx::Error) -> DomainError {
    tracing::error!("Failed to {}: {}", action, e);
    DomainError::Internal {
        message: format!("Failed to {}: {}", action, e),
    }
}

fn count_from_row(row: &sqlx::mysql::MySqlRow) -> Result<u64, DomainError> {
    let count: i64 = row
        .try_get("count")
        .map_err(|e| DomainError::Internal { message: format!("Failed to get count: {}", e) })?;
    Ok(count.max(0) as u64)
}

#[async_trait]
impl LocationRepository for MySqlLocationRepository {
    async fn save(&self, mut location: Location) -> Result<Location, DomainError> {
        location.validate()?;

        match location.id {
            Some(id) => {
                let query = r#"
                    INSERT INTO locations (id, latitude, longitude)
                    VALUES (?, ?, ?)
                    ON DUPLICATE KEY UPDATE
                        latitude = VALUES(latitude),
                        longitude = VALUES(longitude)
                "#;

                sqlx::query(query)
                    .bind(id)
                    .bind(location.latitude)
                    .bind(location.longitude)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| db_error("save location", e))?;
            }
            None => {
                let query = "INSERT INTO locations (latitude, longitude) VALUES (?, ?)";

                let result = sqlx::query(query)
                    .bind(location.latitude)
                    .bind(location.longitude)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| db_error("insert location", e))?;

                location.id = Some(result.last_insert_id() as i64);
            }
        }

        tracing::debug!(location_id = ?location.id, "Saved location");
        Ok(location)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Location>, DomainError> {
        let query = "SELECT id, latitude, longitude FROM locations WHERE id = ? LIMIT 1";

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("find location by id", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_location(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let query = "SELECT COUNT(*) AS count FROM locations WHERE id = ?";

        let row = sqlx::query(query)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("check location existence", e))?;

        Ok(count_from_row(&row)? > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM locations WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete location", e))?;

        let removed = result.rows_affected() > 0;
        if removed {
            tracing::debug!(location_id = id, "Deleted location");
        }
        Ok(removed)
    }

    async fn find_all(&self) -> Result<Vec<Location>, DomainError> {
        let rows = sqlx::query("SELECT id, latitude, longitude FROM locations ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list locations", e))?;

        rows.iter().map(Self::row_to_location).collect()
    }

    async fn find_page(
        &self,
        pagination: Pagination,
    ) -> Result<PaginatedResponse<Location>, DomainError> {
        let pagination = pagination.validate();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("begin transaction", e))?;

        let count_row = sqlx::query("SELECT COUNT(*) AS count FROM locations")
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| db_error("count locations", e))?;
        let total = count_from_row(&count_row)?;

        let rows = sqlx::query(
            "SELECT id, latitude, longitude FROM locations ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(pagination.limit_i64())
        .bind(pagination.offset_i64())
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| db_error("list location page", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("commit transaction", e))?;

        let data = rows
            .iter()
            .map(Self::row_to_location)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedResponse::new(data, pagination, total))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM locations")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("count locations", e))?;

        count_from_row(&row)
    }
}
