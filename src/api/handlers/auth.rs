use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use crate::api::extractors::auth::{CurrentUser, SESSION_COOKIE};
use crate::api::flash::{set_flash, FlashKind};
use crate::api::views::{base_context, render_page};
use crate::domain::models::session::SESSION_TTL_HOURS;
use crate::domain::services::auth_service::LoginOutcome;
use crate::error::AppError;
use crate::state::AppState;
use serde::Deserialize;
use std::sync::Arc;
use time::Duration;
use tower_cookies::{cookie::SameSite, Cookie, Cookies};
use tracing::info;

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct SetupPasswordQuery {
    pub email: Option<String>,
}

#[derive(Deserialize)]
pub struct SetupPasswordForm {
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

pub async fn home(State(state): State<Arc<AppState>>, cookies: Cookies) -> Redirect {
    if has_session(&state, &cookies).await {
        Redirect::to("/dashboard")
    } else {
        Redirect::to("/login")
    }
}

pub async fn login_page(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
) -> Result<Response, AppError> {
    if has_session(&state, &cookies).await {
        return Ok(Redirect::to("/dashboard").into_response());
    }

    let ctx = base_context("Login - DojoPro Admin");
    Ok(render_page(&state, &cookies, "auth/login.html", ctx)?.into_response())
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let email = form.email.unwrap_or_default();
    let email = email.trim();
    let password = form.password.unwrap_or_default();

    if email.is_empty() || password.is_empty() {
        set_flash(&cookies, FlashKind::Error, "Please provide email and password");
        return Ok(Redirect::to("/login").into_response());
    }

    match state.auth_service.login(email, &password).await? {
        LoginOutcome::Success { token, user } => {
            set_session_cookie(&cookies, &token, state.config.secure_cookies);
            set_flash(
                &cookies,
                FlashKind::Success,
                &format!("Welcome back, {}!", user.first_name),
            );
            info!("User logged in: {}", user.user_id);
            Ok(Redirect::to("/dashboard").into_response())
        }
        LoginOutcome::SetupRequired { email } => {
            set_flash(&cookies, FlashKind::Info, "Please set up your password");
            Ok(Redirect::to(&setup_password_url(&email)).into_response())
        }
    }
}

pub async fn setup_password_page(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Query(query): Query<SetupPasswordQuery>,
) -> Result<Response, AppError> {
    let Some(email) = query.email.filter(|e| !e.is_empty()) else {
        set_flash(&cookies, FlashKind::Error, "Invalid setup link");
        return Ok(Redirect::to("/login").into_response());
    };

    let mut ctx = base_context("Set Up Password - DojoPro Admin");
    ctx.insert("email", &email);
    Ok(render_page(&state, &cookies, "auth/setup_password.html", ctx)?.into_response())
}

pub async fn setup_password(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Form(form): Form<SetupPasswordForm>,
) -> Result<Response, AppError> {
    let email = form.email.unwrap_or_default();
    let email = email.trim();
    let password = form.password.unwrap_or_default();
    let confirm_password = form.confirm_password.unwrap_or_default();

    match state
        .auth_service
        .set_password(email, &password, &confirm_password)
        .await
    {
        Ok(()) => {
            set_flash(
                &cookies,
                FlashKind::Success,
                "Password set successfully! Please log in.",
            );
            Ok(Redirect::to("/login").into_response())
        }
        // Validation failures return to the form with the email preserved.
        Err(AppError::Validation(msg)) => {
            set_flash(&cookies, FlashKind::Error, &msg);
            Ok(Redirect::to(&setup_password_url(email)).into_response())
        }
        Err(e) => Err(e),
    }
}

pub async fn setup_page(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    CurrentUser(user): CurrentUser,
) -> Result<Response, AppError> {
    let mut ctx = base_context("Get Started - DojoPro Admin");
    ctx.insert("user", &user);
    Ok(render_page(&state, &cookies, "setup.html", ctx)?.into_response())
}

pub async fn logout(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
) -> Result<Response, AppError> {
    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        state.auth_service.logout(cookie.value()).await?;
    }

    cookies.remove(Cookie::build((SESSION_COOKIE, "")).path("/").into());

    info!("User logged out");
    Ok(Redirect::to("/login").into_response())
}

async fn has_session(state: &AppState, cookies: &Cookies) -> bool {
    match cookies.get(SESSION_COOKIE) {
        Some(cookie) => state
            .sessions
            .lookup(cookie.value())
            .await
            .ok()
            .flatten()
            .is_some(),
        None => false,
    }
}

fn set_session_cookie(cookies: &Cookies, token: &str, secure: bool) {
    let mut cookie = Cookie::new(SESSION_COOKIE, token.to_string());
    cookie.set_http_only(true);
    cookie.set_secure(secure);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");
    cookie.set_max_age(Duration::hours(SESSION_TTL_HOURS));
    cookies.add(cookie);
}

fn setup_password_url(email: &str) -> String {
    match serde_urlencoded::to_string([("email", email)]) {
        Ok(query) => format!("/setup-password?{query}"),
        Err(_) => "/setup-password".to_string(),
    }
}
