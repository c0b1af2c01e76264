mod common;

use common::{body_text, flash_of, location_of, TestApp};

async fn logged_in_owner(app: &TestApp) -> (String, String) {
    let club_id = app.seed_club("Tiger Dojo", "active").await;
    let user_id = app.seed_identity("owner@club.test", Some("correct-horse")).await;
    app.seed_staff(&club_id, &user_id, "owner", true).await;
    let token = app.login("owner@club.test", "correct-horse").await;
    (club_id, token)
}

async fn primary_location_names(app: &TestApp, club_id: &str) -> Vec<String> {
    sqlx::query_scalar("SELECT location_name FROM locations WHERE club_id = ? AND is_primary_location = 1")
        .bind(club_id)
        .fetch_all(&app.pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_add_location_and_list() {
    let app = TestApp::new().await;
    let (_club_id, token) = logged_in_owner(&app).await;

    let response = app
        .post_form(
            "/locations/add",
            &[
                ("location_name", "Main Mat"),
                ("address_line1", "12 Dojo Way"),
                ("city", "Springfield"),
                ("state", "NY"),
                ("postal_code", "10001"),
                ("capacity", "40"),
                ("is_primary_location", "on"),
            ],
            Some(&token),
        )
        .await;

    assert_eq!(location_of(&response), "/locations");
    let (kind, message) = flash_of(&response).unwrap();
    assert_eq!(kind, "success");
    assert_eq!(message, "Location added successfully");

    let html = body_text(app.get("/locations", Some(&token)).await).await;
    assert!(html.contains("Main Mat"));
    assert!(html.contains("40"));
    assert!(html.contains("Primary"));
}

#[tokio::test]
async fn test_add_location_requires_address_fields() {
    let app = TestApp::new().await;
    let (_club_id, token) = logged_in_owner(&app).await;

    let response = app
        .post_form("/locations/add", &[("location_name", "Main Mat")], Some(&token))
        .await;

    assert_eq!(location_of(&response), "/locations/add");
    let (kind, _) = flash_of(&response).unwrap();
    assert_eq!(kind, "error");
}

#[tokio::test]
async fn test_new_primary_location_clears_previous_primary() {
    let app = TestApp::new().await;
    let (club_id, token) = logged_in_owner(&app).await;
    app.seed_location(&club_id, "Old Primary", "America/New_York", true).await;

    app.post_form(
        "/locations/add",
        &[
            ("location_name", "New Primary"),
            ("address_line1", "34 Dojo Way"),
            ("city", "Springfield"),
            ("state", "NY"),
            ("postal_code", "10001"),
            ("is_primary_location", "on"),
        ],
        Some(&token),
    )
    .await;

    assert_eq!(primary_location_names(&app, &club_id).await, vec!["New Primary"]);
}

#[tokio::test]
async fn test_edit_location_keeps_primary_exclusive() {
    let app = TestApp::new().await;
    let (club_id, token) = logged_in_owner(&app).await;
    app.seed_location(&club_id, "Old Primary", "America/New_York", true).await;
    let annex = app.seed_location(&club_id, "Annex", "America/New_York", false).await;

    let response = app
        .post_form(
            &format!("/locations/{}/edit", annex),
            &[
                ("location_name", "Annex Renamed"),
                ("address_line1", "56 Dojo Way"),
                ("city", "Springfield"),
                ("state", "NY"),
                ("postal_code", "10001"),
                ("is_primary_location", "on"),
            ],
            Some(&token),
        )
        .await;

    assert_eq!(location_of(&response), "/locations");
    assert_eq!(primary_location_names(&app, &club_id).await, vec!["Annex Renamed"]);
}

#[tokio::test]
async fn test_primary_location_cannot_be_deleted() {
    let app = TestApp::new().await;
    let (club_id, token) = logged_in_owner(&app).await;
    let primary = app.seed_location(&club_id, "Main Mat", "America/New_York", true).await;

    let response = app
        .post_form(&format!("/locations/{}/delete", primary), &[], Some(&token))
        .await;

    assert_eq!(location_of(&response), "/locations");
    let (kind, message) = flash_of(&response).unwrap();
    assert_eq!(kind, "error");
    assert_eq!(message, "Cannot delete the primary location");

    let html = body_text(app.get("/locations", Some(&token)).await).await;
    assert!(html.contains("Main Mat"));
}

#[tokio::test]
async fn test_secondary_location_can_be_deleted() {
    let app = TestApp::new().await;
    let (club_id, token) = logged_in_owner(&app).await;
    app.seed_location(&club_id, "Main Mat", "America/New_York", true).await;
    let annex = app.seed_location(&club_id, "Annex", "America/New_York", false).await;

    let response = app
        .post_form(&format!("/locations/{}/delete", annex), &[], Some(&token))
        .await;

    assert_eq!(location_of(&response), "/locations");
    let (kind, message) = flash_of(&response).unwrap();
    assert_eq!(kind, "success");
    assert_eq!(message, "Location deleted successfully");

    let html = body_text(app.get("/locations", Some(&token)).await).await;
    assert!(!html.contains("Annex"));
}

#[tokio::test]
async fn test_unknown_location_edit_redirects_with_notice() {
    let app = TestApp::new().await;
    let (_club_id, token) = logged_in_owner(&app).await;

    let response = app.get("/locations/no-such-id/edit", Some(&token)).await;

    assert_eq!(location_of(&response), "/locations");
    let (_, message) = flash_of(&response).unwrap();
    assert_eq!(message, "Location not found");
}

#[tokio::test]
async fn test_location_of_another_club_is_not_reachable() {
    let app = TestApp::new().await;
    let (_club_id, token) = logged_in_owner(&app).await;

    let other_club = app.seed_club("Other Dojo", "active").await;
    let foreign = app.seed_location(&other_club, "Foreign Mat", "America/New_York", false).await;

    let response = app.get(&format!("/locations/{}/edit", foreign), Some(&token)).await;

    // Scoped lookups keep tenants isolated.
    assert_eq!(location_of(&response), "/locations");
    let (_, message) = flash_of(&response).unwrap();
    assert_eq!(message, "Location not found");
}
