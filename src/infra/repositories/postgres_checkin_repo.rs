use crate::domain::models::checkin::CheckInDetail;
use crate::domain::ports::CheckInRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresCheckInRepo {
    pool: PgPool,
}

impl PostgresCheckInRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CheckInRepository for PostgresCheckInRepo {
    async fn list_recent(&self, club_id: &str, limit: i64) -> Result<Vec<CheckInDetail>, AppError> {
        sqlx::query_as::<_, CheckInDetail>(
            "SELECT ci.checkin_id, ci.club_id, ci.member_id, ci.location_id, \
             ci.check_in_time, ci.check_out_time, ci.created_at, \
             m.first_name, m.last_name, m.email, l.location_name, l.timezone \
             FROM check_ins ci \
             JOIN members m ON ci.member_id = m.member_id \
             JOIN locations l ON ci.location_id = l.location_id \
             WHERE ci.club_id = $1 \
             ORDER BY ci.check_in_time DESC \
             LIMIT $2",
        )
            .bind(club_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
