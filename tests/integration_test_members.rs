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
async fn test_create_member_and_list() {
    let app = TestApp::new().await;
    let (_club_id, token) = logged_in_owner(&app).await;

    let response = app
        .post_form(
            "/members/create",
            &[
                ("first_name", "Mia"),
                ("last_name", "Tanaka"),
                ("email", "mia@family.test"),
                ("belt_rank", "blue"),
            ],
            Some(&token),
        )
        .await;

    assert_eq!(location_of(&response), "/members");
    let (kind, message) = flash_of(&response).unwrap();
    assert_eq!(kind, "success");
    assert_eq!(message, "Member Mia Tanaka added successfully!");

    let html = body_text(app.get("/members", Some(&token)).await).await;
    assert!(html.contains("Mia Tanaka"));
    assert!(html.contains("mia@family.test"));
    assert!(html.contains("blue"));
}

#[tokio::test]
async fn test_create_member_requires_names() {
    let app = TestApp::new().await;
    let (_club_id, token) = logged_in_owner(&app).await;

    let response = app
        .post_form("/members/create", &[("first_name", "Mia")], Some(&token))
        .await;

    assert_eq!(location_of(&response), "/members/add");
    let (kind, message) = flash_of(&response).unwrap();
    assert_eq!(kind, "error");
    assert_eq!(message, "First name and last name are required");
}

#[tokio::test]
async fn test_create_member_rejects_duplicate_email() {
    let app = TestApp::new().await;
    let (club_id, token) = logged_in_owner(&app).await;
    app.seed_member(&club_id, "Mia", "Tanaka", Some("mia@family.test"), "active")
        .await;

    let response = app
        .post_form(
            "/members/create",
            &[
                ("first_name", "Other"),
                ("last_name", "Person"),
                ("email", "mia@family.test"),
            ],
            Some(&token),
        )
        .await;

    assert_eq!(location_of(&response), "/members/add");
    let (_, message) = flash_of(&response).unwrap();
    assert_eq!(message, "A member with this email already exists");
}

#[tokio::test]
async fn test_duplicate_email_in_another_club_is_allowed() {
    let app = TestApp::new().await;
    let (_club_id, token) = logged_in_owner(&app).await;

    let other_club = app.seed_club("Other Dojo", "active").await;
    app.seed_member(&other_club, "Mia", "Tanaka", Some("mia@family.test"), "active")
        .await;

    let response = app
        .post_form(
            "/members/create",
            &[
                ("first_name", "Mia"),
                ("last_name", "Tanaka"),
                ("email", "mia@family.test"),
            ],
            Some(&token),
        )
        .await;

    assert_eq!(location_of(&response), "/members");
}

#[tokio::test]
async fn test_family_membership_creates_household() {
    let app = TestApp::new().await;
    let (club_id, token) = logged_in_owner(&app).await;

    let response = app
        .post_form(
            "/members/create",
            &[
                ("first_name", "Jon"),
                ("last_name", "Rivera"),
                ("membership_type", "family"),
            ],
            Some(&token),
        )
        .await;
    assert_eq!(location_of(&response), "/members");

    let html = body_text(app.get("/members", Some(&token)).await).await;
    assert!(html.contains("Jon Rivera Family"));

    let (household_count, is_primary): (i64, bool) = sqlx::query_as(
        "SELECT (SELECT COUNT(*) FROM households WHERE club_id = ?), \
         (SELECT is_primary_member FROM members WHERE club_id = ? AND last_name = 'Rivera')",
    )
    .bind(&club_id)
    .bind(&club_id)
    .fetch_one(&app.pool)
    .await
    .unwrap();
    assert_eq!(household_count, 1);
    assert!(is_primary);
}

#[tokio::test]
async fn test_invalid_date_of_birth_rejected() {
    let app = TestApp::new().await;
    let (_club_id, token) = logged_in_owner(&app).await;

    let response = app
        .post_form(
            "/members/create",
            &[
                ("first_name", "Mia"),
                ("last_name", "Tanaka"),
                ("date_of_birth", "31-12-2001"),
            ],
            Some(&token),
        )
        .await;

    assert_eq!(location_of(&response), "/members/add");
    let (_, message) = flash_of(&response).unwrap();
    assert_eq!(message, "Invalid date of birth");
}

#[tokio::test]
async fn test_soft_deleted_members_are_hidden() {
    let app = TestApp::new().await;
    let (club_id, token) = logged_in_owner(&app).await;

    app.seed_member(&club_id, "Kept", "Member", None, "active").await;
    let gone = app.seed_member(&club_id, "Gone", "Member", None, "active").await;
    app.soft_delete_member(&gone).await;

    let html = body_text(app.get("/members", Some(&token)).await).await;
    assert!(html.contains("Kept Member"));
    assert!(!html.contains("Gone Member"));
}

#[tokio::test]
async fn test_dashboard_stats_count_by_status() {
    let app = TestApp::new().await;
    let (club_id, token) = logged_in_owner(&app).await;

    app.seed_member(&club_id, "A", "One", None, "active").await;
    app.seed_member(&club_id, "B", "Two", None, "active").await;
    app.seed_member(&club_id, "C", "Three", None, "active").await;
    app.seed_member(&club_id, "D", "Four", None, "pending").await;
    app.seed_location(&club_id, "Main Mat", "America/New_York", true).await;

    // Another club's data must not leak into the counts.
    let other_club = app.seed_club("Other Dojo", "active").await;
    app.seed_member(&other_club, "X", "Other", None, "active").await;

    let response = app.get("/dashboard", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    assert!(html.contains(r#"id="active-members">3<"#));
    assert!(html.contains(r#"id="pending-members">1<"#));
    assert!(html.contains(r#"id="total-locations">1<"#));
    assert!(html.contains(r#"id="total-staff">1<"#));
}
