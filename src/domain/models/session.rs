use serde::{Deserialize, Serialize};

/// Absolute session lifetime. Expiry is evaluated lazily at lookup time,
/// there is no background sweep.
pub const SESSION_TTL_HOURS: i64 = 24;

/// Identity snapshot captured at login. It is never re-read from storage
/// while the session lives, so profile edits only show up after re-login.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionUser {
    pub user_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}
