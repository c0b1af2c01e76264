use crate::domain::models::member::{Household, Member, MemberWithHousehold};
use crate::domain::ports::MemberRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

const MEMBER_COLUMNS: &str = "member_id, club_id, household_id, first_name, last_name, email, phone, \
date_of_birth, membership_type, membership_start_date, status, belt_rank, \
emergency_contact_name, emergency_contact_phone, is_primary_member, deleted_at, created_at, updated_at";

pub struct SqliteMemberRepo {
    pool: SqlitePool,
}

impl SqliteMemberRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for SqliteMemberRepo {
    async fn list_by_club(&self, club_id: &str) -> Result<Vec<MemberWithHousehold>, AppError> {
        sqlx::query_as::<_, MemberWithHousehold>(
            "SELECT m.member_id, m.club_id, m.household_id, m.first_name, m.last_name, m.email, m.phone, \
             m.date_of_birth, m.membership_type, m.membership_start_date, m.status, m.belt_rank, \
             m.emergency_contact_name, m.emergency_contact_phone, m.is_primary_member, m.deleted_at, \
             m.created_at, m.updated_at, h.household_name \
             FROM members m \
             LEFT JOIN households h ON m.household_id = h.household_id \
             WHERE m.club_id = ? AND m.deleted_at IS NULL \
             ORDER BY m.created_at DESC",
        )
            .bind(club_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn recent(&self, club_id: &str, limit: i64) -> Result<Vec<Member>, AppError> {
        sqlx::query_as::<_, Member>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members \
             WHERE club_id = ? AND deleted_at IS NULL \
             ORDER BY created_at DESC LIMIT ?"
        ))
            .bind(club_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn email_exists(&self, club_id: &str, email: &str) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM members WHERE club_id = ? AND email = ? AND deleted_at IS NULL",
        )
            .bind(club_id)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(count > 0)
    }

    async fn create(&self, member: &Member) -> Result<Member, AppError> {
        sqlx::query_as::<_, Member>(&format!(
            "INSERT INTO members ({MEMBER_COLUMNS}) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {MEMBER_COLUMNS}"
        ))
            .bind(&member.member_id)
            .bind(&member.club_id)
            .bind(&member.household_id)
            .bind(&member.first_name)
            .bind(&member.last_name)
            .bind(&member.email)
            .bind(&member.phone)
            .bind(member.date_of_birth)
            .bind(&member.membership_type)
            .bind(member.membership_start_date)
            .bind(&member.status)
            .bind(&member.belt_rank)
            .bind(&member.emergency_contact_name)
            .bind(&member.emergency_contact_phone)
            .bind(member.is_primary_member)
            .bind(member.deleted_at)
            .bind(member.created_at)
            .bind(member.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_households(&self, club_id: &str) -> Result<Vec<Household>, AppError> {
        sqlx::query_as::<_, Household>(
            "SELECT household_id, club_id, household_name, created_at, updated_at \
             FROM households WHERE club_id = ? ORDER BY household_name",
        )
            .bind(club_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create_household(&self, household: &Household) -> Result<Household, AppError> {
        sqlx::query_as::<_, Household>(
            "INSERT INTO households (household_id, club_id, household_name, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING household_id, club_id, household_name, created_at, updated_at",
        )
            .bind(&household.household_id)
            .bind(&household.club_id)
            .bind(&household.household_name)
            .bind(household.created_at)
            .bind(household.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
