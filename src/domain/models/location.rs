use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Location {
    pub location_id: String,
    pub club_id: String,
    pub location_name: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub phone: Option<String>,
    pub capacity: Option<i32>,
    pub timezone: String,
    pub is_primary_location: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Location {
    pub fn new(
        club_id: String,
        location_name: String,
        address_line1: String,
        city: String,
        state: String,
        postal_code: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            location_id: Uuid::new_v4().to_string(),
            club_id,
            location_name,
            address_line1,
            address_line2: None,
            city,
            state,
            postal_code,
            phone: None,
            capacity: None,
            timezone: "America/New_York".to_string(),
            is_primary_location: false,
            created_at: now,
            updated_at: now,
        }
    }
}
