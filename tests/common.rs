use dojo_admin::{
    api::router::create_router,
    config::Config,
    domain::models::identity::Credential,
    domain::ports::SessionStore,
    domain::services::auth_service::{hash_password, AuthService},
    infra::factory::load_templates,
    infra::repositories::{
        sqlite_checkin_repo::SqliteCheckInRepo,
        sqlite_club_repo::SqliteClubRepo,
        sqlite_identity_repo::SqliteIdentityRepo,
        sqlite_location_repo::SqliteLocationRepo,
        sqlite_member_repo::SqliteMemberRepo,
        sqlite_staff_repo::SqliteStaffRepo,
    },
    infra::session::memory_session_store::MemorySessionStore,
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let templates = Arc::new(load_templates());
        let sessions: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            secure_cookies: false,
        };

        let identity_repo = Arc::new(SqliteIdentityRepo::new(pool.clone()));
        let auth_service = Arc::new(AuthService::new(identity_repo.clone(), sessions.clone()));

        let state = Arc::new(AppState {
            config,
            identity_repo,
            club_repo: Arc::new(SqliteClubRepo::new(pool.clone())),
            staff_repo: Arc::new(SqliteStaffRepo::new(pool.clone())),
            member_repo: Arc::new(SqliteMemberRepo::new(pool.clone())),
            location_repo: Arc::new(SqliteLocationRepo::new(pool.clone())),
            checkin_repo: Arc::new(SqliteCheckInRepo::new(pool.clone())),
            sessions,
            auth_service,
            templates,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    // --- seeding -----------------------------------------------------------

    pub async fn seed_club(&self, name: &str, status: &str) -> String {
        let club_id = Uuid::new_v4().to_string();
        let now = Utc::now();
        sqlx::query("INSERT INTO clubs (club_id, club_name, status, created_at, updated_at) VALUES (?, ?, ?, ?, ?)")
            .bind(&club_id)
            .bind(name)
            .bind(status)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .unwrap();
        club_id
    }

    /// `password: None` seeds a provisioned-but-not-onboarded identity.
    pub async fn seed_identity(&self, email: &str, password: Option<&str>) -> String {
        self.seed_identity_named(email, password, "Alex", "Doe").await
    }

    pub async fn seed_identity_named(
        &self,
        email: &str,
        password: Option<&str>,
        first_name: &str,
        last_name: &str,
    ) -> String {
        let user_id = Uuid::new_v4().to_string();
        let password_hash = match password {
            Some(p) => hash_password(p).unwrap(),
            None => Credential::Unset.as_stored().to_string(),
        };
        let now = Utc::now();
        sqlx::query(
            "INSERT INTO users (user_id, email, password_hash, first_name, last_name, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
            .bind(&user_id)
            .bind(email)
            .bind(&password_hash)
            .bind(first_name)
            .bind(last_name)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .unwrap();
        user_id
    }

    pub async fn soft_delete_identity(&self, user_id: &str) {
        sqlx::query("UPDATE users SET deleted_at = ? WHERE user_id = ?")
            .bind(Utc::now())
            .bind(user_id)
            .execute(&self.pool)
            .await
            .unwrap();
    }

    pub async fn seed_staff(&self, club_id: &str, user_id: &str, role: &str, is_primary_contact: bool) {
        self.seed_staff_at(club_id, user_id, role, is_primary_contact, Utc::now())
            .await;
    }

    pub async fn seed_staff_at(
        &self,
        club_id: &str,
        user_id: &str,
        role: &str,
        is_primary_contact: bool,
        created_at: DateTime<Utc>,
    ) {
        sqlx::query(
            "INSERT INTO club_staff (club_id, user_id, role, is_primary_contact, created_at) VALUES (?, ?, ?, ?, ?)",
        )
            .bind(club_id)
            .bind(user_id)
            .bind(role)
            .bind(is_primary_contact)
            .bind(created_at)
            .execute(&self.pool)
            .await
            .unwrap();
    }

    pub async fn seed_member(&self, club_id: &str, first_name: &str, last_name: &str, email: Option<&str>, status: &str) -> String {
        let member_id = Uuid::new_v4().to_string();
        let now = Utc::now();
        sqlx::query(
            "INSERT INTO members (member_id, club_id, first_name, last_name, email, membership_type, \
             membership_start_date, status, is_primary_member, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, 'individual', ?, ?, 0, ?, ?)",
        )
            .bind(&member_id)
            .bind(club_id)
            .bind(first_name)
            .bind(last_name)
            .bind(email)
            .bind(now.date_naive())
            .bind(status)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .unwrap();
        member_id
    }

    pub async fn soft_delete_member(&self, member_id: &str) {
        sqlx::query("UPDATE members SET deleted_at = ? WHERE member_id = ?")
            .bind(Utc::now())
            .bind(member_id)
            .execute(&self.pool)
            .await
            .unwrap();
    }

    pub async fn seed_location(&self, club_id: &str, name: &str, timezone: &str, is_primary: bool) -> String {
        let location_id = Uuid::new_v4().to_string();
        let now = Utc::now();
        sqlx::query(
            "INSERT INTO locations (location_id, club_id, location_name, address_line1, city, state, \
             postal_code, timezone, is_primary_location, created_at, updated_at) \
             VALUES (?, ?, ?, '1 Main St', 'Springfield', 'NY', '10001', ?, ?, ?, ?)",
        )
            .bind(&location_id)
            .bind(club_id)
            .bind(name)
            .bind(timezone)
            .bind(is_primary)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .unwrap();
        location_id
    }

    pub async fn seed_checkin(
        &self,
        club_id: &str,
        member_id: &str,
        location_id: &str,
        check_in_time: DateTime<Utc>,
        check_out_time: Option<DateTime<Utc>>,
    ) -> String {
        let checkin_id = Uuid::new_v4().to_string();
        sqlx::query(
            "INSERT INTO check_ins (checkin_id, club_id, member_id, location_id, check_in_time, check_out_time, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
            .bind(&checkin_id)
            .bind(club_id)
            .bind(member_id)
            .bind(location_id)
            .bind(check_in_time)
            .bind(check_out_time)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .unwrap();
        checkin_id
    }

    // --- requests ----------------------------------------------------------

    pub async fn get(&self, uri: &str, session: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = session {
            builder = builder.header(header::COOKIE, format!("dojo_session={}", token));
        }
        self.router
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_form(
        &self,
        uri: &str,
        params: &[(&str, &str)],
        session: Option<&str>,
    ) -> Response<Body> {
        let body = serde_urlencoded::to_string(params).unwrap();
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(token) = session {
            builder = builder.header(header::COOKIE, format!("dojo_session={}", token));
        }
        self.router
            .clone()
            .oneshot(builder.body(Body::from(body)).unwrap())
            .await
            .unwrap()
    }

    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post_form("/login", &[("email", email), ("password", password)], None)
            .await;

        assert_eq!(location_of(&response), "/dashboard", "login did not reach the dashboard");
        session_cookie(&response).expect("No session cookie returned")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

// --- response helpers ------------------------------------------------------

#[allow(dead_code)]
pub fn location_of(response: &Response<Body>) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .map(|h| h.to_str().unwrap().to_string())
        .unwrap_or_default()
}

#[allow(dead_code)]
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    cookie_value(response, "dojo_session")
}

/// Decodes the one-shot notice cookie into (kind, message).
#[allow(dead_code)]
pub fn flash_of(response: &Response<Body>) -> Option<(String, String)> {
    let raw = cookie_value(response, "dojo_flash")?;
    let bytes = URL_SAFE_NO_PAD.decode(raw).ok()?;
    let value: Value = serde_json::from_slice(&bytes).ok()?;
    Some((
        value["kind"].as_str()?.to_string(),
        value["message"].as_str()?.to_string(),
    ))
}

#[allow(dead_code)]
pub fn cookie_value(response: &Response<Body>, name: &str) -> Option<String> {
    let prefix = format!("{}=", name);
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .find(|c| c.starts_with(&prefix))
        .map(|c| {
            let rest = &c[prefix.len()..];
            rest.split(';').next().unwrap_or("").to_string()
        })
        .filter(|v| !v.is_empty())
}

#[allow(dead_code)]
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8_lossy(&bytes).to_string()
}
