use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use crate::api::extractors::club::ClubContext;
use crate::api::flash::{set_flash, FlashKind};
use crate::api::views::{page_context, render_page};
use crate::domain::models::member::{Household, Member};
use crate::error::AppError;
use crate::state::AppState;
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::info;

#[derive(Deserialize)]
pub struct CreateMemberForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub membership_type: Option<String>,
    pub household_id: Option<String>,
    pub belt_rank: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
}

pub async fn list_members(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    club_ctx: ClubContext,
) -> Result<impl IntoResponse, AppError> {
    let members = state.member_repo.list_by_club(&club_ctx.club.club_id).await?;

    let mut ctx = page_context("Members - DojoPro Admin", &club_ctx);
    ctx.insert("members", &members);

    render_page(&state, &cookies, "members/index.html", ctx)
}

pub async fn add_member_page(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    club_ctx: ClubContext,
) -> Result<impl IntoResponse, AppError> {
    let households = state.member_repo.list_households(&club_ctx.club.club_id).await?;

    let mut ctx = page_context("Add Member - DojoPro Admin", &club_ctx);
    ctx.insert("households", &households);

    render_page(&state, &cookies, "members/add.html", ctx)
}

pub async fn create_member(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    club_ctx: ClubContext,
    Form(form): Form<CreateMemberForm>,
) -> Result<Response, AppError> {
    let club_id = club_ctx.club.club_id.clone();

    let first_name = form.first_name.as_deref().unwrap_or("").trim().to_string();
    let last_name = form.last_name.as_deref().unwrap_or("").trim().to_string();

    if first_name.is_empty() || last_name.is_empty() {
        set_flash(&cookies, FlashKind::Error, "First name and last name are required");
        return Ok(Redirect::to("/members/add").into_response());
    }

    let email = non_empty(form.email);
    if let Some(ref email) = email {
        if state.member_repo.email_exists(&club_id, email).await? {
            set_flash(&cookies, FlashKind::Error, "A member with this email already exists");
            return Ok(Redirect::to("/members/add").into_response());
        }
    }

    let date_of_birth = match non_empty(form.date_of_birth) {
        Some(raw) => match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                set_flash(&cookies, FlashKind::Error, "Invalid date of birth");
                return Ok(Redirect::to("/members/add").into_response());
            }
        },
        None => None,
    };

    let membership_type = non_empty(form.membership_type).unwrap_or_else(|| "individual".to_string());
    let mut household_id = non_empty(form.household_id);

    // Family intake without a chosen household gets a fresh one, and the
    // member becomes its primary.
    let mut is_primary_member = false;
    if membership_type == "family" && household_id.is_none() {
        let household = Household::new(
            club_id.clone(),
            format!("{} {} Family", first_name, last_name),
        );
        let created = state.member_repo.create_household(&household).await?;
        household_id = Some(created.household_id);
        is_primary_member = true;
    }

    let mut member = Member::new(club_id, first_name.clone(), last_name.clone());
    member.email = email;
    member.phone = non_empty(form.phone);
    member.date_of_birth = date_of_birth;
    member.membership_type = membership_type;
    member.household_id = household_id;
    member.belt_rank = non_empty(form.belt_rank);
    member.emergency_contact_name = non_empty(form.emergency_contact_name);
    member.emergency_contact_phone = non_empty(form.emergency_contact_phone);
    member.is_primary_member = is_primary_member;

    let created = state.member_repo.create(&member).await?;
    info!("Created member {}", created.member_id);

    set_flash(
        &cookies,
        FlashKind::Success,
        &format!("Member {} {} added successfully!", first_name, last_name),
    );
    Ok(Redirect::to("/members").into_response())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
