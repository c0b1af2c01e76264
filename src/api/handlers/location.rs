use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use crate::api::extractors::club::ClubContext;
use crate::api::flash::{set_flash, FlashKind};
use crate::api::views::{page_context, render_page};
use crate::domain::models::location::Location;
use crate::error::AppError;
use crate::state::AppState;
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::info;

#[derive(Deserialize)]
pub struct LocationForm {
    pub location_name: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
    pub capacity: Option<String>,
    pub timezone: Option<String>,
    pub is_primary_location: Option<String>,
}

pub async fn list_locations(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    club_ctx: ClubContext,
) -> Result<impl IntoResponse, AppError> {
    let locations = state.location_repo.list_by_club(&club_ctx.club.club_id).await?;

    let mut ctx = page_context("Locations - DojoPro Admin", &club_ctx);
    ctx.insert("locations", &locations);

    render_page(&state, &cookies, "locations/index.html", ctx)
}

pub async fn add_location_page(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    club_ctx: ClubContext,
) -> Result<impl IntoResponse, AppError> {
    let ctx = page_context("Add New Location", &club_ctx);
    render_page(&state, &cookies, "locations/add.html", ctx)
}

pub async fn create_location(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    club_ctx: ClubContext,
    Form(form): Form<LocationForm>,
) -> Result<Response, AppError> {
    let club_id = club_ctx.club.club_id.clone();

    let required = [
        form.location_name.as_deref().unwrap_or("").trim(),
        form.address_line1.as_deref().unwrap_or("").trim(),
        form.city.as_deref().unwrap_or("").trim(),
        form.state.as_deref().unwrap_or("").trim(),
        form.postal_code.as_deref().unwrap_or("").trim(),
    ];
    if required.iter().any(|v| v.is_empty()) {
        set_flash(&cookies, FlashKind::Error, "Please fill in all required fields");
        return Ok(Redirect::to("/locations/add").into_response());
    }

    let is_primary = form.is_primary_location.is_some();
    if is_primary {
        state.location_repo.clear_primary(&club_id, None).await?;
    }

    let mut location = Location::new(
        club_id,
        required[0].to_string(),
        required[1].to_string(),
        required[2].to_string(),
        required[3].to_string(),
        required[4].to_string(),
    );
    location.address_line2 = non_empty(form.address_line2);
    location.phone = non_empty(form.phone);
    location.capacity = form.capacity.as_deref().and_then(|c| c.trim().parse::<i32>().ok());
    if let Some(tz) = non_empty(form.timezone) {
        location.timezone = tz;
    }
    location.is_primary_location = is_primary;

    let created = state.location_repo.create(&location).await?;
    info!("Created location {}", created.location_id);

    set_flash(&cookies, FlashKind::Success, "Location added successfully");
    Ok(Redirect::to("/locations").into_response())
}

pub async fn edit_location_page(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    club_ctx: ClubContext,
    Path(location_id): Path<String>,
) -> Result<Response, AppError> {
    let Some(location) = state
        .location_repo
        .find_by_id(&club_ctx.club.club_id, &location_id)
        .await?
    else {
        set_flash(&cookies, FlashKind::Error, "Location not found");
        return Ok(Redirect::to("/locations").into_response());
    };

    let mut ctx = page_context("Edit Location", &club_ctx);
    ctx.insert("location", &location);
    Ok(render_page(&state, &cookies, "locations/edit.html", ctx)?.into_response())
}

pub async fn update_location(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    club_ctx: ClubContext,
    Path(location_id): Path<String>,
    Form(form): Form<LocationForm>,
) -> Result<Response, AppError> {
    let club_id = club_ctx.club.club_id.clone();

    let Some(mut location) = state.location_repo.find_by_id(&club_id, &location_id).await? else {
        set_flash(&cookies, FlashKind::Error, "Location not found");
        return Ok(Redirect::to("/locations").into_response());
    };

    let is_primary = form.is_primary_location.is_some();
    if is_primary {
        state
            .location_repo
            .clear_primary(&club_id, Some(&location_id))
            .await?;
    }

    if let Some(name) = non_empty(form.location_name) {
        location.location_name = name;
    }
    if let Some(line1) = non_empty(form.address_line1) {
        location.address_line1 = line1;
    }
    location.address_line2 = non_empty(form.address_line2);
    if let Some(city) = non_empty(form.city) {
        location.city = city;
    }
    if let Some(state_field) = non_empty(form.state) {
        location.state = state_field;
    }
    if let Some(postal) = non_empty(form.postal_code) {
        location.postal_code = postal;
    }
    location.phone = non_empty(form.phone);
    location.capacity = form.capacity.as_deref().and_then(|c| c.trim().parse::<i32>().ok());
    if let Some(tz) = non_empty(form.timezone) {
        location.timezone = tz;
    }
    location.is_primary_location = is_primary;
    location.updated_at = Utc::now();

    state.location_repo.update(&location).await?;
    info!("Updated location {}", location_id);

    set_flash(&cookies, FlashKind::Success, "Location updated successfully");
    Ok(Redirect::to("/locations").into_response())
}

pub async fn delete_location(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    club_ctx: ClubContext,
    Path(location_id): Path<String>,
) -> Result<Response, AppError> {
    let club_id = club_ctx.club.club_id.clone();

    let Some(location) = state.location_repo.find_by_id(&club_id, &location_id).await? else {
        set_flash(&cookies, FlashKind::Error, "Location not found");
        return Ok(Redirect::to("/locations").into_response());
    };

    if location.is_primary_location {
        set_flash(&cookies, FlashKind::Error, "Cannot delete the primary location");
        return Ok(Redirect::to("/locations").into_response());
    }

    state.location_repo.delete(&club_id, &location_id).await?;
    info!("Deleted location {}", location_id);

    set_flash(&cookies, FlashKind::Success, "Location deleted successfully");
    Ok(Redirect::to("/locations").into_response())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
