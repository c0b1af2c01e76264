use crate::domain::models::location::Location;
use crate::domain::ports::LocationRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

const LOCATION_COLUMNS: &str = "location_id, club_id, location_name, address_line1, address_line2, \
city, state, postal_code, phone, capacity, timezone, is_primary_location, created_at, updated_at";

pub struct SqliteLocationRepo {
    pool: SqlitePool,
}

impl SqliteLocationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationRepository for SqliteLocationRepo {
    async fn list_by_club(&self, club_id: &str) -> Result<Vec<Location>, AppError> {
        sqlx::query_as::<_, Location>(&format!(
            "SELECT {LOCATION_COLUMNS} FROM locations \
             WHERE club_id = ? \
             ORDER BY is_primary_location DESC, location_name"
        ))
            .bind(club_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, club_id: &str, location_id: &str) -> Result<Option<Location>, AppError> {
        sqlx::query_as::<_, Location>(&format!(
            "SELECT {LOCATION_COLUMNS} FROM locations WHERE location_id = ? AND club_id = ?"
        ))
            .bind(location_id)
            .bind(club_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create(&self, location: &Location) -> Result<Location, AppError> {
        sqlx::query_as::<_, Location>(&format!(
            "INSERT INTO locations ({LOCATION_COLUMNS}) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {LOCATION_COLUMNS}"
        ))
            .bind(&location.location_id)
            .bind(&location.club_id)
            .bind(&location.location_name)
            .bind(&location.address_line1)
            .bind(&location.address_line2)
            .bind(&location.city)
            .bind(&location.state)
            .bind(&location.postal_code)
            .bind(&location.phone)
            .bind(location.capacity)
            .bind(&location.timezone)
            .bind(location.is_primary_location)
            .bind(location.created_at)
            .bind(location.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, location: &Location) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE locations SET \
             location_name = ?, address_line1 = ?, address_line2 = ?, \
             city = ?, state = ?, postal_code = ?, phone = ?, capacity = ?, \
             timezone = ?, is_primary_location = ?, updated_at = ? \
             WHERE location_id = ? AND club_id = ?",
        )
            .bind(&location.location_name)
            .bind(&location.address_line1)
            .bind(&location.address_line2)
            .bind(&location.city)
            .bind(&location.state)
            .bind(&location.postal_code)
            .bind(&location.phone)
            .bind(location.capacity)
            .bind(&location.timezone)
            .bind(location.is_primary_location)
            .bind(location.updated_at)
            .bind(&location.location_id)
            .bind(&location.club_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn delete(&self, club_id: &str, location_id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM locations WHERE location_id = ? AND club_id = ?")
            .bind(location_id)
            .bind(club_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn clear_primary(&self, club_id: &str, except_location_id: Option<&str>) -> Result<(), AppError> {
        match except_location_id {
            Some(location_id) => {
                sqlx::query("UPDATE locations SET is_primary_location = 0 WHERE club_id = ? AND location_id != ?")
                    .bind(club_id)
                    .bind(location_id)
                    .execute(&self.pool)
                    .await
            }
            None => {
                sqlx::query("UPDATE locations SET is_primary_location = 0 WHERE club_id = ?")
                    .bind(club_id)
                    .execute(&self.pool)
                    .await
            }
        }
        .map_err(AppError::Database)?;
        Ok(())
    }
}
