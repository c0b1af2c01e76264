use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
};
use crate::api::extractors::auth::CurrentUser;
use crate::domain::models::session::SessionUser;
use crate::domain::models::staff::ClubAccess;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::Span;

/// The full gate for tenant-scoped endpoints: authenticate, then resolve
/// the caller's club among active memberships. Short-circuits on the first
/// failure; an identity without any active club rejects with the
/// `NoActiveClub` redirect to the onboarding page.
pub struct ClubContext {
    pub user: SessionUser,
    pub club: ClubAccess,
}

impl FromRequestParts<Arc<AppState>> for ClubContext {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &Arc<AppState>) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;

        let memberships = state
            .staff_repo
            .active_memberships(&user.user_id)
            .await
            .map_err(IntoResponse::into_response)?;

        let club = memberships
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NoActiveClub.into_response())?;

        Span::current().record("club_id", club.club_id.as_str());

        Ok(ClubContext { user, club })
    }
}
