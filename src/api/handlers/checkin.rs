use axum::{extract::State, response::IntoResponse};
use crate::api::extractors::club::ClubContext;
use crate::api::views::{page_context, render_page};
use crate::error::AppError;
use crate::state::AppState;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use std::sync::Arc;
use tower_cookies::Cookies;

#[derive(Serialize)]
struct CheckInRow {
    first_name: String,
    last_name: String,
    email: Option<String>,
    location_name: String,
    local_check_in_time: String,
    local_check_out_time: Option<String>,
}

pub async fn list_checkins(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    club_ctx: ClubContext,
) -> Result<impl IntoResponse, AppError> {
    let checkins = state
        .checkin_repo
        .list_recent(&club_ctx.club.club_id, 100)
        .await?;

    let rows: Vec<CheckInRow> = checkins
        .into_iter()
        .map(|detail| {
            let tz: Tz = detail.timezone.parse().unwrap_or(chrono_tz::America::New_York);
            CheckInRow {
                first_name: detail.first_name,
                last_name: detail.last_name,
                email: detail.email,
                location_name: detail.location_name,
                local_check_in_time: format_local(detail.check_in.check_in_time, tz),
                local_check_out_time: detail
                    .check_in
                    .check_out_time
                    .map(|t| format_local(t, tz)),
            }
        })
        .collect();

    let mut ctx = page_context("Checkins Management", &club_ctx);
    ctx.insert("checkins", &rows);

    render_page(&state, &cookies, "checkins/index.html", ctx)
}

fn format_local(time: DateTime<Utc>, tz: Tz) -> String {
    time.with_timezone(&tz).format("%Y-%m-%d %H:%M").to_string()
}
