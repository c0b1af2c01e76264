use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Attendance row. Times are stored in UTC and rendered in the location's
/// timezone.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct CheckIn {
    pub checkin_id: String,
    pub club_id: String,
    pub member_id: String,
    pub location_id: String,
    pub check_in_time: DateTime<Utc>,
    pub check_out_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Check-in list row: the check-in joined with member and location.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct CheckInDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub check_in: CheckIn,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub location_name: String,
    pub timezone: String,
}
