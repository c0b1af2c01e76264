mod common;

use axum::http::StatusCode;
use common::{body_text, flash_of, location_of, TestApp};

async fn logged_in_owner(app: &TestApp) -> (String, String) {
    let club_id = app.seed_club("Tiger Dojo", "active").await;
    let user_id = app.seed_identity("owner@club.test", Some("correct-horse")).await;
    app.seed_staff(&club_id, &user_id, "owner", true).await;
    let token = app.login("owner@club.test", "correct-horse").await;
    (club_id, token)
}

#[tokio::test]
async fn test_settings_page_shows_club_with_default_settings() {
    let app = TestApp::new().await;
    let (_club_id, token) = logged_in_owner(&app).await;

    let response = app.get("/settings", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Tiger Dojo"));
    assert!(html.contains("en-US"));
    assert!(html.contains("America/New_York"));
}

#[tokio::test]
async fn test_update_settings_persists_details_and_colors() {
    let app = TestApp::new().await;
    let (club_id, token) = logged_in_owner(&app).await;

    let response = app
        .post_form(
            "/settings",
            &[
                ("club_name", "Tiger Dojo International"),
                ("description", "Karate and judo"),
                ("website_url", "https://tiger.example"),
                ("primary_color", "#112233"),
                ("secondary_color", "#445566"),
                ("locale", "de-DE"),
                ("timezone", "Europe/Berlin"),
            ],
            Some(&token),
        )
        .await;

    assert_eq!(location_of(&response), "/settings");
    let (kind, message) = flash_of(&response).unwrap();
    assert_eq!(kind, "success");
    assert_eq!(message, "Club settings updated successfully");

    let html = body_text(app.get("/settings", Some(&token)).await).await;
    assert!(html.contains("Tiger Dojo International"));
    assert!(html.contains("Karate and judo"));
    assert!(html.contains("#112233"));
    assert!(html.contains("Europe/Berlin"));

    // Upsert, not insert-only: a second save updates the same row.
    app.post_form(
        "/settings",
        &[("club_name", "Tiger Dojo International"), ("locale", "fr-FR")],
        Some(&token),
    )
    .await;

    let settings_rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM club_settings WHERE club_id = ?")
        .bind(&club_id)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(settings_rows, 1);
}

#[tokio::test]
async fn test_update_settings_requires_club_name() {
    let app = TestApp::new().await;
    let (_club_id, token) = logged_in_owner(&app).await;

    let response = app.post_form("/settings", &[("locale", "de-DE")], Some(&token)).await;

    assert_eq!(location_of(&response), "/settings");
    let (kind, message) = flash_of(&response).unwrap();
    assert_eq!(kind, "error");
    assert_eq!(message, "Club name is required");
}

#[tokio::test]
async fn test_club_update_keeps_existing_logo() {
    let app = TestApp::new().await;
    let (club_id, token) = logged_in_owner(&app).await;

    sqlx::query("UPDATE clubs SET logo_url = 'https://tiger.example/logo.png' WHERE club_id = ?")
        .bind(&club_id)
        .execute(&app.pool)
        .await
        .unwrap();

    let response = app
        .post_form(
            "/club/update",
            &[("club_name", "Tiger Dojo Renamed"), ("description", "New description")],
            Some(&token),
        )
        .await;

    assert_eq!(location_of(&response), "/club");

    let (name, logo): (String, Option<String>) =
        sqlx::query_as("SELECT club_name, logo_url FROM clubs WHERE club_id = ?")
            .bind(&club_id)
            .fetch_one(&app.pool)
            .await
            .unwrap();
    assert_eq!(name, "Tiger Dojo Renamed");
    assert_eq!(logo.as_deref(), Some("https://tiger.example/logo.png"));

    // /club is an alias of the settings screen.
    let alias = app.get("/club", Some(&token)).await;
    assert_eq!(location_of(&alias), "/settings");
}
