use std::sync::Arc;
use crate::domain::models::identity::Credential;
use crate::domain::models::session::SessionUser;
use crate::domain::ports::{IdentityRepository, SessionStore};
use crate::error::AppError;
use argon2::{password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand::rngs::OsRng;
use tracing::info;

/// Result of a credential check that did not fail outright: either a live
/// session was created, or the identity still has to bootstrap a password.
pub enum LoginOutcome {
    Success { token: String, user: SessionUser },
    SetupRequired { email: String },
}

pub struct AuthService {
    identities: Arc<dyn IdentityRepository>,
    sessions: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(identities: Arc<dyn IdentityRepository>, sessions: Arc<dyn SessionStore>) -> Self {
        Self { identities, sessions }
    }

    /// Soft-deleted identities miss the lookup, so they get the same
    /// `InvalidCredentials` as an unknown email or a wrong password.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let identity = self
            .identities
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let hash = match identity.credential() {
            Credential::Unset => {
                return Ok(LoginOutcome::SetupRequired { email: identity.email });
            }
            Credential::Set(hash) => hash,
        };

        let parsed = PasswordHash::new(&hash).map_err(|_| AppError::Internal)?;
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| AppError::InvalidCredentials)?;

        let user = SessionUser {
            user_id: identity.user_id,
            email: identity.email,
            first_name: identity.first_name,
            last_name: identity.last_name,
        };
        let token = self.sessions.create(&user).await?;

        Ok(LoginOutcome::Success { token, user })
    }

    /// One-time `Unset -> Set` transition. A second submission for an
    /// already-bootstrapped identity fails `InvalidRequest` and never
    /// overwrites the stored hash.
    pub async fn set_password(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), AppError> {
        if email.is_empty() || password.is_empty() || confirm_password.is_empty() {
            return Err(AppError::Validation("All fields are required".to_string()));
        }
        if password != confirm_password {
            return Err(AppError::Validation("Passwords do not match".to_string()));
        }
        if password.chars().count() < 6 {
            return Err(AppError::Validation(
                "Password must be at least 6 characters long".to_string(),
            ));
        }

        let identity = self
            .identities
            .find_pending_setup(email)
            .await?
            .ok_or(AppError::InvalidRequest)?;

        let password_hash = hash_password(password)?;
        self.identities
            .set_password(&identity.user_id, &password_hash)
            .await?;

        info!("Password set for user {}", identity.user_id);
        Ok(())
    }

    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        self.sessions.destroy(token).await
    }
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AppError::Internal)?
        .to_string())
}
