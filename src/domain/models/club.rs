use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Club {
    pub club_id: String,
    pub club_name: String,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub logo_url: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Club {
    pub fn new(club_name: String) -> Self {
        let now = Utc::now();
        Self {
            club_id: Uuid::new_v4().to_string(),
            club_name,
            description: None,
            website_url: None,
            logo_url: None,
            status: "active".to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ClubSettings {
    pub club_id: String,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub locale: String,
    pub timezone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ClubSettings {
    pub fn defaults(club_id: String) -> Self {
        let now = Utc::now();
        Self {
            club_id,
            logo_url: None,
            primary_color: None,
            secondary_color: None,
            locale: "en-US".to_string(),
            timezone: "America/New_York".to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Stat tiles on the dashboard.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct DashboardStats {
    pub active_members: i64,
    pub pending_members: i64,
    pub total_locations: i64,
    pub total_staff: i64,
}
