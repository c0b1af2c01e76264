use crate::domain::models::identity::{Credential, Identity};
use crate::domain::ports::IdentityRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;

pub struct PostgresIdentityRepo {
    pool: PgPool,
}

impl PostgresIdentityRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityRepository for PostgresIdentityRepo {
    async fn create(&self, identity: &Identity) -> Result<Identity, AppError> {
        sqlx::query_as::<_, Identity>(
            "INSERT INTO users (user_id, email, password_hash, first_name, last_name, phone, deleted_at, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING user_id, email, password_hash, first_name, last_name, phone, deleted_at, created_at, updated_at",
        )
            .bind(&identity.user_id)
            .bind(&identity.email)
            .bind(&identity.password_hash)
            .bind(&identity.first_name)
            .bind(&identity.last_name)
            .bind(&identity.phone)
            .bind(identity.deleted_at)
            .bind(identity.created_at)
            .bind(identity.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, AppError> {
        sqlx::query_as::<_, Identity>(
            "SELECT user_id, email, password_hash, first_name, last_name, phone, deleted_at, created_at, updated_at \
             FROM users WHERE email = $1 AND deleted_at IS NULL",
        )
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_pending_setup(&self, email: &str) -> Result<Option<Identity>, AppError> {
        sqlx::query_as::<_, Identity>(
            "SELECT user_id, email, password_hash, first_name, last_name, phone, deleted_at, created_at, updated_at \
             FROM users WHERE email = $1 AND password_hash = $2 AND deleted_at IS NULL",
        )
            .bind(email)
            .bind(Credential::Unset.as_stored())
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn set_password(&self, user_id: &str, password_hash: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE users SET password_hash = $1, updated_at = $2 WHERE user_id = $3")
            .bind(password_hash)
            .bind(Utc::now())
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }

    async fn update_profile(
        &self,
        user_id: &str,
        first_name: &str,
        last_name: &str,
        phone: Option<&str>,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE users SET first_name = $1, last_name = $2, phone = $3, updated_at = $4 WHERE user_id = $5")
            .bind(first_name)
            .bind(last_name)
            .bind(phone)
            .bind(Utc::now())
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
