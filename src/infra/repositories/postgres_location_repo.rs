use crate::domain::models::location::Location;
use crate::domain::ports::LocationRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

const LOCATION_COLUMNS: &str = "location_id, club_id, location_name, address_line1, address_line2, \
city, state, postal_code, phone, capacity, timezone, is_primary_location, created_at, updated_at";

pub struct PostgresLocationRepo {
    pool: PgPool,
}

impl PostgresLocationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationRepository for PostgresLocationRepo {
    async fn list_by_club(&self, club_id: &str) -> Result<Vec<Location>, AppError> {
        sqlx::query_as::<_, Location>(&format!(
            "SELECT {LOCATION_COLUMNS} FROM locations \
             WHERE club_id = $1 \
             ORDER BY is_primary_location DESC, location_name"
        ))
            .bind(club_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, club_id: &str, location_id: &str) -> Result<Option<Location>, AppError> {
        sqlx::query_as::<_, Location>(&format!(
            "SELECT {LOCATION_COLUMNS} FROM locations WHERE location_id = $1 AND club_id = $2"
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
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
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
             location_name = $1, address_line1 = $2, address_line2 = $3, \
             city = $4, state = $5, postal_code = $6, phone = $7, capacity = $8, \
             timezone = $9, is_primary_location = $10, updated_at = $11 \
             WHERE location_id = $12 AND club_id = $13",
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
        sqlx::query("DELETE FROM locations WHERE location_id = $1 AND club_id = $2")
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
                sqlx::query("UPDATE locations SET is_primary_location = FALSE WHERE club_id = $1 AND location_id != $2")
                    .bind(club_id)
                    .bind(location_id)
                    .execute(&self.pool)
                    .await
            }
            None => {
                sqlx::query("UPDATE locations SET is_primary_location = FALSE WHERE club_id = $1")
                    .bind(club_id)
                    .execute(&self.pool)
                    .await
            }
        }
        .map_err(AppError::Database)?;
        Ok(())
    }
}
