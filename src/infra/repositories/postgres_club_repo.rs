use crate::domain::models::club::{Club, ClubSettings, DashboardStats};
use crate::domain::ports::ClubRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

pub struct PostgresClubRepo {
    pool: PgPool,
}

impl PostgresClubRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClubRepository for PostgresClubRepo {
    async fn find_by_id(&self, club_id: &str) -> Result<Option<Club>, AppError> {
        sqlx::query_as::<_, Club>(
            "SELECT club_id, club_name, description, website_url, logo_url, status, created_at, updated_at \
             FROM clubs WHERE club_id = $1",
        )
            .bind(club_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update_details(
        &self,
        club_id: &str,
        club_name: &str,
        description: Option<&str>,
        website_url: Option<&str>,
        logo_url: Option<&str>,
    ) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE clubs SET club_name = $1, description = $2, website_url = $3, logo_url = $4, updated_at = $5 \
             WHERE club_id = $6",
        )
            .bind(club_name)
            .bind(description)
            .bind(website_url)
            .bind(logo_url)
            .bind(Utc::now())
            .bind(club_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn find_settings(&self, club_id: &str) -> Result<Option<ClubSettings>, AppError> {
        sqlx::query_as::<_, ClubSettings>(
            "SELECT club_id, logo_url, primary_color, secondary_color, locale, timezone, created_at, updated_at \
             FROM club_settings WHERE club_id = $1",
        )
            .bind(club_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn upsert_settings(&self, settings: &ClubSettings) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO club_settings (club_id, logo_url, primary_color, secondary_color, locale, timezone, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT (club_id) DO UPDATE SET \
             logo_url = excluded.logo_url, \
             primary_color = excluded.primary_color, \
             secondary_color = excluded.secondary_color, \
             locale = excluded.locale, \
             timezone = excluded.timezone, \
             updated_at = excluded.updated_at",
        )
            .bind(&settings.club_id)
            .bind(&settings.logo_url)
            .bind(&settings.primary_color)
            .bind(&settings.secondary_color)
            .bind(&settings.locale)
            .bind(&settings.timezone)
            .bind(settings.created_at)
            .bind(settings.updated_at)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn dashboard_stats(&self, club_id: &str) -> Result<DashboardStats, AppError> {
        sqlx::query_as::<_, DashboardStats>(
            "SELECT \
             (SELECT COUNT(*) FROM members WHERE club_id = $1 AND status = 'active' AND deleted_at IS NULL) AS active_members, \
             (SELECT COUNT(*) FROM members WHERE club_id = $1 AND status = 'pending' AND deleted_at IS NULL) AS pending_members, \
             (SELECT COUNT(*) FROM locations WHERE club_id = $1) AS total_locations, \
             (SELECT COUNT(*) FROM club_staff WHERE club_id = $1) AS total_staff",
        )
            .bind(club_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
