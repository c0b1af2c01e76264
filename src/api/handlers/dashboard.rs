use axum::{extract::State, response::IntoResponse, Json};
use crate::api::extractors::club::ClubContext;
use crate::api::views::{page_context, render_page};
use crate::error::AppError;
use crate::state::AppState;
use chrono::Utc;
use std::sync::Arc;
use tower_cookies::Cookies;

pub async fn show_dashboard(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    club_ctx: ClubContext,
) -> Result<impl IntoResponse, AppError> {
    let stats = state.club_repo.dashboard_stats(&club_ctx.club.club_id).await?;
    let recent_members = state.member_repo.recent(&club_ctx.club.club_id, 5).await?;

    let mut ctx = page_context("Dashboard - DojoPro Admin", &club_ctx);
    ctx.insert("stats", &stats);
    ctx.insert("recent_members", &recent_members);

    render_page(&state, &cookies, "dashboard.html", ctx)
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let database = match state.club_repo.ping().await {
        Ok(()) => "connected",
        Err(_) => "disconnected",
    };

    Json(serde_json::json!({
        "status": "healthy",
        "service": "admin-portal",
        "database": database,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
