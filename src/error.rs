use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::api::flash::{redirect_with_flash, FlashKind};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Not logged in")]
    NotLoggedIn,
    #[error("No accessible clubs")]
    NoActiveClub,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Invalid setup request")]
    InvalidRequest,
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
    #[error("Internal server error")]
    Internal,
}

/// Every error becomes a redirect plus a one-shot notice, never a raw error
/// page. The first five variants are expected user/authorization outcomes
/// and are not logged; storage and template faults are.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (target, kind, message) = match &self {
            AppError::NotLoggedIn => (
                "/login",
                FlashKind::Error,
                "Please log in to access this page".to_string(),
            ),
            AppError::NoActiveClub => (
                "/setup",
                FlashKind::Error,
                "You do not have access to any clubs".to_string(),
            ),
            AppError::InvalidCredentials => (
                "/login",
                FlashKind::Error,
                "Invalid email or password".to_string(),
            ),
            AppError::Validation(msg) => ("/login", FlashKind::Error, msg.clone()),
            AppError::InvalidRequest => (
                "/login",
                FlashKind::Error,
                "Invalid setup request".to_string(),
            ),
            AppError::Database(e) => {
                error!("Storage error: {:?}", e);
                (
                    "/",
                    FlashKind::Error,
                    "An error occurred while processing your request".to_string(),
                )
            }
            AppError::Template(e) => {
                error!("Template rendering failed: {:?}", e);
                (
                    "/",
                    FlashKind::Error,
                    "An error occurred while processing your request".to_string(),
                )
            }
            AppError::Internal => {
                error!("Internal error");
                (
                    "/",
                    FlashKind::Error,
                    "An error occurred while processing your request".to_string(),
                )
            }
        };

        redirect_with_flash(target, kind, &message)
    }
}
