use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use crate::api::extractors::club::ClubContext;
use crate::api::flash::{set_flash, FlashKind};
use crate::api::views::{page_context, render_page};
use crate::domain::models::identity::Identity;
use crate::domain::models::staff::StaffMembership;
use crate::error::AppError;
use crate::state::AppState;
use serde::Deserialize;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::info;

#[derive(Deserialize)]
pub struct AddStaffForm {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub is_primary_contact: Option<String>,
}

#[derive(Deserialize)]
pub struct EditStaffForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub is_primary_contact: Option<String>,
}

pub async fn list_staff(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    club_ctx: ClubContext,
) -> Result<impl IntoResponse, AppError> {
    let staff = state.staff_repo.list_by_club(&club_ctx.club.club_id).await?;

    let mut ctx = page_context("Staff Management", &club_ctx);
    ctx.insert("staff", &staff);

    render_page(&state, &cookies, "staff/index.html", ctx)
}

pub async fn add_staff_page(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    club_ctx: ClubContext,
) -> Result<impl IntoResponse, AppError> {
    let ctx = page_context("Add New Staff", &club_ctx);
    render_page(&state, &cookies, "staff/add.html", ctx)
}

pub async fn create_staff(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    club_ctx: ClubContext,
    Form(form): Form<AddStaffForm>,
) -> Result<Response, AppError> {
    let club_id = club_ctx.club.club_id.clone();

    let email = form.email.as_deref().unwrap_or("").trim().to_string();
    let first_name = form.first_name.as_deref().unwrap_or("").trim().to_string();
    let last_name = form.last_name.as_deref().unwrap_or("").trim().to_string();
    let role = form.role.as_deref().unwrap_or("").trim().to_string();

    if email.is_empty() || first_name.is_empty() || last_name.is_empty() || role.is_empty() {
        set_flash(&cookies, FlashKind::Error, "Email, name and role are required");
        return Ok(Redirect::to("/staff/add").into_response());
    }

    // Unknown emails are provisioned with an unset credential; the new
    // staff member picks a password through the setup flow on first login.
    let user_id = match state.identity_repo.find_by_email(&email).await? {
        Some(identity) => identity.user_id,
        None => {
            let identity = Identity::provisioned(
                email.clone(),
                first_name,
                last_name,
                non_empty(form.phone),
            );
            let created = state.identity_repo.create(&identity).await?;
            info!("Provisioned identity {} for staff onboarding", created.user_id);
            created.user_id
        }
    };

    if state.staff_repo.find_detail(&club_id, &user_id).await?.is_some() {
        set_flash(&cookies, FlashKind::Error, "This person is already a staff member");
        return Ok(Redirect::to("/staff/add").into_response());
    }

    let membership = StaffMembership::new(
        club_id,
        user_id.clone(),
        role,
        form.is_primary_contact.is_some(),
    );
    state.staff_repo.add(&membership).await?;
    info!("Added staff member {} to club {}", user_id, membership.club_id);

    set_flash(&cookies, FlashKind::Success, "Staff member added successfully");
    Ok(Redirect::to("/staff").into_response())
}

pub async fn edit_staff_page(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    club_ctx: ClubContext,
    Path(user_id): Path<String>,
) -> Result<Response, AppError> {
    let Some(staff) = state
        .staff_repo
        .find_detail(&club_ctx.club.club_id, &user_id)
        .await?
    else {
        set_flash(&cookies, FlashKind::Error, "Staff member not found");
        return Ok(Redirect::to("/staff").into_response());
    };

    let mut ctx = page_context("Edit Staff Member", &club_ctx);
    ctx.insert("staff_member", &staff);
    Ok(render_page(&state, &cookies, "staff/edit.html", ctx)?.into_response())
}

pub async fn update_staff(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    club_ctx: ClubContext,
    Path(user_id): Path<String>,
    Form(form): Form<EditStaffForm>,
) -> Result<Response, AppError> {
    let club_id = club_ctx.club.club_id.clone();

    let Some(staff) = state.staff_repo.find_detail(&club_id, &user_id).await? else {
        set_flash(&cookies, FlashKind::Error, "Staff member not found");
        return Ok(Redirect::to("/staff").into_response());
    };

    let first_name = non_empty(form.first_name).unwrap_or(staff.first_name);
    let last_name = non_empty(form.last_name).unwrap_or(staff.last_name);
    let phone = non_empty(form.phone);
    let role = non_empty(form.role).unwrap_or(staff.role);

    state
        .identity_repo
        .update_profile(&user_id, &first_name, &last_name, phone.as_deref())
        .await?;
    state
        .staff_repo
        .update_role(&club_id, &user_id, &role, form.is_primary_contact.is_some())
        .await?;

    info!("Updated staff member {}", user_id);

    set_flash(&cookies, FlashKind::Success, "Staff member updated successfully");
    Ok(Redirect::to("/staff").into_response())
}

pub async fn delete_staff(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    club_ctx: ClubContext,
    Path(user_id): Path<String>,
) -> Result<Response, AppError> {
    state
        .staff_repo
        .remove(&club_ctx.club.club_id, &user_id)
        .await?;

    info!("Removed staff member {}", user_id);

    set_flash(&cookies, FlashKind::Success, "Staff member removed successfully");
    Ok(Redirect::to("/staff").into_response())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
