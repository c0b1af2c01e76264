use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Placeholder stored in the `password_hash` column until the owner
/// completes the password setup flow. Must not appear anywhere else.
const UNSET_PASSWORD: &str = "TEMP_HASH_TO_BE_SET";

/// Two-state view of the stored credential column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Unset,
    Set(String),
}

impl Credential {
    pub fn from_stored(stored: &str) -> Self {
        if stored == UNSET_PASSWORD {
            Credential::Unset
        } else {
            Credential::Set(stored.to_string())
        }
    }

    pub fn as_stored(&self) -> &str {
        match self {
            Credential::Unset => UNSET_PASSWORD,
            Credential::Set(hash) => hash,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Identity {
    pub user_id: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identity {
    /// A staff-provisioned identity. The credential starts out unset so the
    /// owner has to go through the password setup flow before logging in.
    pub fn provisioned(email: String, first_name: String, last_name: String, phone: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            user_id: Uuid::new_v4().to_string(),
            email,
            password_hash: Credential::Unset.as_stored().to_string(),
            first_name,
            last_name,
            phone,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn credential(&self) -> Credential {
        Credential::from_stored(&self.password_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_round_trips_through_credential() {
        let identity = Identity::provisioned(
            "new@club.test".to_string(),
            "New".to_string(),
            "Staff".to_string(),
            None,
        );
        assert_eq!(identity.credential(), Credential::Unset);

        let set = Credential::Set("$argon2id$dummy".to_string());
        assert_eq!(Credential::from_stored(set.as_stored()), set);
    }
}
