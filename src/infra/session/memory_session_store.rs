use std::collections::HashMap;
use crate::domain::models::session::{SessionUser, SESSION_TTL_HOURS};
use crate::domain::ports::SessionStore;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::{distributions::Alphanumeric, Rng};
use tokio::sync::RwLock;

struct StoredSession {
    user: SessionUser,
    expires_at: DateTime<Utc>,
}

/// Process-local token -> snapshot map. Entries past their absolute expiry
/// are treated as absent and removed when a lookup touches them; there is
/// no background sweep.
pub struct MemorySessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<String, StoredSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::with_ttl(Duration::hours(SESSION_TTL_HOURS))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self, user: &SessionUser) -> Result<String, AppError> {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(64)
            .map(char::from)
            .collect();

        let record = StoredSession {
            user: user.clone(),
            expires_at: Utc::now() + self.ttl,
        };
        self.sessions.write().await.insert(token.clone(), record);

        Ok(token)
    }

    async fn lookup(&self, token: &str) -> Result<Option<SessionUser>, AppError> {
        {
            let sessions = self.sessions.read().await;
            match sessions.get(token) {
                None => return Ok(None),
                Some(record) if Utc::now() < record.expires_at => {
                    return Ok(Some(record.user.clone()));
                }
                Some(_) => {}
            }
        }

        // Expired: purge on access.
        self.sessions.write().await.remove(token);
        Ok(None)
    }

    async fn destroy(&self, token: &str) -> Result<(), AppError> {
        self.sessions.write().await.remove(token);
        Ok(())
    }
}
