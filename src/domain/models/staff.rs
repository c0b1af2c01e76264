use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Grants one identity access to one club.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct StaffMembership {
    pub club_id: String,
    pub user_id: String,
    pub role: String,
    pub is_primary_contact: bool,
    pub created_at: DateTime<Utc>,
}

impl StaffMembership {
    pub fn new(club_id: String, user_id: String, role: String, is_primary_contact: bool) -> Self {
        Self {
            club_id,
            user_id,
            role,
            is_primary_contact,
            created_at: Utc::now(),
        }
    }
}

/// The single club/role resolved for a request among an identity's active
/// memberships. Computed fresh per request, never persisted.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ClubAccess {
    pub club_id: String,
    pub role: String,
    pub club_name: String,
}

/// Staff roster row: membership joined with the identity's profile.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct StaffDetail {
    pub club_id: String,
    pub user_id: String,
    pub role: String,
    pub is_primary_contact: bool,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}
