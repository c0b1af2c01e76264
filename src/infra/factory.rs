use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;
use tera::Tera;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::ports::SessionStore;
use crate::domain::services::auth_service::AuthService;
use crate::infra::session::memory_session_store::MemorySessionStore;
use crate::infra::repositories::{
    postgres_checkin_repo::PostgresCheckInRepo, postgres_club_repo::PostgresClubRepo,
    postgres_identity_repo::PostgresIdentityRepo, postgres_location_repo::PostgresLocationRepo,
    postgres_member_repo::PostgresMemberRepo, postgres_staff_repo::PostgresStaffRepo,
    sqlite_checkin_repo::SqliteCheckInRepo, sqlite_club_repo::SqliteClubRepo,
    sqlite_identity_repo::SqliteIdentityRepo, sqlite_location_repo::SqliteLocationRepo,
    sqlite_member_repo::SqliteMemberRepo, sqlite_staff_repo::SqliteStaffRepo,
};

pub fn load_templates() -> Tera {
    let mut tera = Tera::default();
    tera.add_raw_template("base.html", include_str!("../templates/base.html"))
        .expect("Failed to load base template");
    tera.add_raw_template("auth/login.html", include_str!("../templates/auth/login.html"))
        .expect("Failed to load login template");
    tera.add_raw_template("auth/setup_password.html", include_str!("../templates/auth/setup_password.html"))
        .expect("Failed to load setup-password template");
    tera.add_raw_template("setup.html", include_str!("../templates/setup.html"))
        .expect("Failed to load setup template");
    tera.add_raw_template("dashboard.html", include_str!("../templates/dashboard.html"))
        .expect("Failed to load dashboard template");
    tera.add_raw_template("members/index.html", include_str!("../templates/members/index.html"))
        .expect("Failed to load members index template");
    tera.add_raw_template("members/add.html", include_str!("../templates/members/add.html"))
        .expect("Failed to load members add template");
    tera.add_raw_template("locations/index.html", include_str!("../templates/locations/index.html"))
        .expect("Failed to load locations index template");
    tera.add_raw_template("locations/add.html", include_str!("../templates/locations/add.html"))
        .expect("Failed to load locations add template");
    tera.add_raw_template("locations/edit.html", include_str!("../templates/locations/edit.html"))
        .expect("Failed to load locations edit template");
    tera.add_raw_template("staff/index.html", include_str!("../templates/staff/index.html"))
        .expect("Failed to load staff index template");
    tera.add_raw_template("staff/add.html", include_str!("../templates/staff/add.html"))
        .expect("Failed to load staff add template");
    tera.add_raw_template("staff/edit.html", include_str!("../templates/staff/edit.html"))
        .expect("Failed to load staff edit template");
    tera.add_raw_template("checkins/index.html", include_str!("../templates/checkins/index.html"))
        .expect("Failed to load checkins template");
    tera.add_raw_template("club/settings.html", include_str!("../templates/club/settings.html"))
        .expect("Failed to load club settings template");
    tera
}

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;
    let templates = Arc::new(load_templates());
    let sessions: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        let identity_repo = Arc::new(PostgresIdentityRepo::new(pool.clone()));
        let auth_service = Arc::new(AuthService::new(identity_repo.clone(), sessions.clone()));

        AppState {
            config: config.clone(),
            identity_repo,
            club_repo: Arc::new(PostgresClubRepo::new(pool.clone())),
            staff_repo: Arc::new(PostgresStaffRepo::new(pool.clone())),
            member_repo: Arc::new(PostgresMemberRepo::new(pool.clone())),
            location_repo: Arc::new(PostgresLocationRepo::new(pool.clone())),
            checkin_repo: Arc::new(PostgresCheckInRepo::new(pool.clone())),
            sessions,
            auth_service,
            templates,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        let identity_repo = Arc::new(SqliteIdentityRepo::new(pool.clone()));
        let auth_service = Arc::new(AuthService::new(identity_repo.clone(), sessions.clone()));

        AppState {
            config: config.clone(),
            identity_repo,
            club_repo: Arc::new(SqliteClubRepo::new(pool.clone())),
            staff_repo: Arc::new(SqliteStaffRepo::new(pool.clone())),
            member_repo: Arc::new(SqliteMemberRepo::new(pool.clone())),
            location_repo: Arc::new(SqliteLocationRepo::new(pool.clone())),
            checkin_repo: Arc::new(SqliteCheckInRepo::new(pool.clone())),
            sessions,
            auth_service,
            templates,
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
