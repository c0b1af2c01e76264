use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use crate::api::extractors::club::ClubContext;
use crate::api::flash::{set_flash, FlashKind};
use crate::api::views::{page_context, render_page};
use crate::domain::models::club::ClubSettings;
use crate::error::AppError;
use crate::state::AppState;
use serde::Deserialize;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::info;

#[derive(Deserialize)]
pub struct SettingsForm {
    pub club_name: Option<String>,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub logo_url: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub locale: Option<String>,
    pub timezone: Option<String>,
}

#[derive(Deserialize)]
pub struct ClubUpdateForm {
    pub club_name: Option<String>,
    pub description: Option<String>,
    pub website_url: Option<String>,
}

pub async fn settings_page(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    club_ctx: ClubContext,
) -> Result<impl IntoResponse, AppError> {
    let club_id = &club_ctx.club.club_id;

    let club = state
        .club_repo
        .find_by_id(club_id)
        .await?
        .ok_or(AppError::Internal)?;
    let settings = state
        .club_repo
        .find_settings(club_id)
        .await?
        .unwrap_or_else(|| ClubSettings::defaults(club_id.clone()));

    let mut ctx = page_context("Club Settings", &club_ctx);
    ctx.insert("club", &club);
    ctx.insert("settings", &settings);

    render_page(&state, &cookies, "club/settings.html", ctx)
}

pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    club_ctx: ClubContext,
    Form(form): Form<SettingsForm>,
) -> Result<Response, AppError> {
    let club_id = club_ctx.club.club_id.clone();

    let Some(club_name) = non_empty(form.club_name) else {
        set_flash(&cookies, FlashKind::Error, "Club name is required");
        return Ok(Redirect::to("/settings").into_response());
    };

    let logo_url = non_empty(form.logo_url);

    state
        .club_repo
        .update_details(
            &club_id,
            &club_name,
            non_empty(form.description).as_deref(),
            non_empty(form.website_url).as_deref(),
            logo_url.as_deref(),
        )
        .await?;

    let mut settings = ClubSettings::defaults(club_id.clone());
    settings.logo_url = logo_url;
    settings.primary_color = non_empty(form.primary_color);
    settings.secondary_color = non_empty(form.secondary_color);
    if let Some(locale) = non_empty(form.locale) {
        settings.locale = locale;
    }
    if let Some(timezone) = non_empty(form.timezone) {
        settings.timezone = timezone;
    }

    state.club_repo.upsert_settings(&settings).await?;
    info!("Updated settings for club {}", club_id);

    set_flash(&cookies, FlashKind::Success, "Club settings updated successfully");
    Ok(Redirect::to("/settings").into_response())
}

pub async fn club_page(_club_ctx: ClubContext) -> Redirect {
    Redirect::to("/settings")
}

pub async fn update_club(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    club_ctx: ClubContext,
    Form(form): Form<ClubUpdateForm>,
) -> Result<Response, AppError> {
    let club_id = club_ctx.club.club_id.clone();

    let Some(club_name) = non_empty(form.club_name) else {
        set_flash(&cookies, FlashKind::Error, "Club name is required");
        return Ok(Redirect::to("/club").into_response());
    };

    // Logo is not part of this form; carry the stored value through.
    let club = state
        .club_repo
        .find_by_id(&club_id)
        .await?
        .ok_or(AppError::Internal)?;

    state
        .club_repo
        .update_details(
            &club_id,
            &club_name,
            non_empty(form.description).as_deref(),
            non_empty(form.website_url).as_deref(),
            club.logo_url.as_deref(),
        )
        .await?;
    info!("Updated club {}", club_id);

    set_flash(&cookies, FlashKind::Success, "Club settings updated successfully!");
    Ok(Redirect::to("/club").into_response())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
