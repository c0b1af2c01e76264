use crate::domain::models::staff::{ClubAccess, StaffDetail, StaffMembership};
use crate::domain::ports::StaffRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::error;

pub struct PostgresStaffRepo {
    pool: PgPool,
}

impl PostgresStaffRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StaffRepository for PostgresStaffRepo {
    async fn active_memberships(&self, user_id: &str) -> Result<Vec<ClubAccess>, AppError> {
        sqlx::query_as::<_, ClubAccess>(
            "SELECT cs.club_id, cs.role, c.club_name \
             FROM club_staff cs \
             JOIN clubs c ON cs.club_id = c.club_id \
             WHERE cs.user_id = $1 AND c.status = 'active' \
             ORDER BY cs.is_primary_contact DESC, cs.created_at ASC, cs.club_id ASC",
        )
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_club(&self, club_id: &str) -> Result<Vec<StaffDetail>, AppError> {
        sqlx::query_as::<_, StaffDetail>(
            "SELECT cs.club_id, cs.user_id, cs.role, cs.is_primary_contact, \
             u.first_name, u.last_name, u.email, u.phone \
             FROM club_staff cs \
             JOIN users u ON cs.user_id = u.user_id \
             WHERE cs.club_id = $1 \
             ORDER BY cs.role, u.last_name, u.first_name",
        )
            .bind(club_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_detail(&self, club_id: &str, user_id: &str) -> Result<Option<StaffDetail>, AppError> {
        sqlx::query_as::<_, StaffDetail>(
            "SELECT cs.club_id, cs.user_id, cs.role, cs.is_primary_contact, \
             u.first_name, u.last_name, u.email, u.phone \
             FROM club_staff cs \
             JOIN users u ON cs.user_id = u.user_id \
             WHERE cs.club_id = $1 AND cs.user_id = $2",
        )
            .bind(club_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn add(&self, membership: &StaffMembership) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO club_staff (club_id, user_id, role, is_primary_contact, created_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
            .bind(&membership.club_id)
            .bind(&membership.user_id)
            .bind(&membership.role)
            .bind(membership.is_primary_contact)
            .bind(membership.created_at)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn update_role(
        &self,
        club_id: &str,
        user_id: &str,
        role: &str,
        is_primary_contact: bool,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE club_staff SET role = $1, is_primary_contact = $2 WHERE club_id = $3 AND user_id = $4")
            .bind(role)
            .bind(is_primary_contact)
            .bind(club_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn remove(&self, club_id: &str, user_id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM club_staff WHERE club_id = $1 AND user_id = $2")
            .bind(club_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Postgres staff removal failed: {:?}", e);
                AppError::Database(e)
            })?;
        Ok(())
    }
}
