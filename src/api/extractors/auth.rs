use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use crate::state::AppState;
use crate::domain::models::session::SessionUser;
use crate::error::AppError;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::Span;

pub const SESSION_COOKIE: &str = "dojo_session";

/// The `authenticate` half of the access gate: session cookie -> stored
/// identity snapshot. A missing, unknown or expired token rejects with the
/// `NotLoggedIn` redirect. No side effects.
pub struct CurrentUser(pub SessionUser);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cookies = parts
            .extensions
            .get::<Cookies>()
            .cloned()
            .ok_or_else(|| AppError::Internal.into_response())?;

        let token = cookies
            .get(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .ok_or_else(|| AppError::NotLoggedIn.into_response())?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let user = app_state
            .sessions
            .lookup(&token)
            .await
            .map_err(IntoResponse::into_response)?
            .ok_or_else(|| AppError::NotLoggedIn.into_response())?;

        Span::current().record("user_id", user.user_id.as_str());

        Ok(CurrentUser(user))
    }
}
