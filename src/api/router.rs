use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{auth, checkin, dashboard, location, member, settings, staff};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(dashboard::health_check))

        // Auth & onboarding
        .route("/", get(auth::home))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/setup-password", get(auth::setup_password_page).post(auth::setup_password))
        .route("/logout", post(auth::logout))
        .route("/setup", get(auth::setup_page))

        // Tenant-scoped screens
        .route("/dashboard", get(dashboard::show_dashboard))

        .route("/members", get(member::list_members))
        .route("/members/add", get(member::add_member_page))
        .route("/members/create", post(member::create_member))

        .route("/locations", get(location::list_locations))
        .route("/locations/add", get(location::add_location_page).post(location::create_location))
        .route("/locations/{location_id}/edit", get(location::edit_location_page).post(location::update_location))
        .route("/locations/{location_id}/delete", post(location::delete_location))

        .route("/staff", get(staff::list_staff))
        .route("/staff/add", get(staff::add_staff_page).post(staff::create_staff))
        .route("/staff/{user_id}/edit", get(staff::edit_staff_page).post(staff::update_staff))
        .route("/staff/{user_id}/delete", post(staff::delete_staff))

        .route("/checkins", get(checkin::list_checkins))

        .route("/settings", get(settings::settings_page).post(settings::update_settings))
        .route("/club", get(settings::club_page))
        .route("/club/update", post(settings::update_club))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        club_id = tracing::field::Empty,
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
