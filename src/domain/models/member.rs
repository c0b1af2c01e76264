use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Member {
    pub member_id: String,
    pub club_id: String,
    pub household_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub membership_type: String,
    pub membership_start_date: NaiveDate,
    pub status: String,
    pub belt_rank: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub is_primary_member: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    pub fn new(club_id: String, first_name: String, last_name: String) -> Self {
        let now = Utc::now();
        Self {
            member_id: Uuid::new_v4().to_string(),
            club_id,
            household_id: None,
            first_name,
            last_name,
            email: None,
            phone: None,
            date_of_birth: None,
            membership_type: "individual".to_string(),
            membership_start_date: now.date_naive(),
            status: "active".to_string(),
            belt_rank: None,
            emergency_contact_name: None,
            emergency_contact_phone: None,
            is_primary_member: false,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Member list row: the member plus its household's name, when any.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct MemberWithHousehold {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub member: Member,
    pub household_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Household {
    pub household_id: String,
    pub club_id: String,
    pub household_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Household {
    pub fn new(club_id: String, household_name: String) -> Self {
        let now = Utc::now();
        Self {
            household_id: Uuid::new_v4().to_string(),
            club_id,
            household_name,
            created_at: now,
            updated_at: now,
        }
    }
}
