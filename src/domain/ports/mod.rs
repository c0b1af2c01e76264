use crate::domain::models::{
    checkin::CheckInDetail,
    club::{Club, ClubSettings, DashboardStats},
    identity::Identity,
    location::Location,
    member::{Household, Member, MemberWithHousehold},
    session::SessionUser,
    staff::{ClubAccess, StaffDetail, StaffMembership},
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait IdentityRepository: Send + Sync {
    async fn create(&self, identity: &Identity) -> Result<Identity, AppError>;
    /// Lookup by email among non-deleted identities.
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, AppError>;
    /// Lookup by email restricted to identities whose credential is still
    /// unset. Covers both "unknown email" and "already bootstrapped" with a
    /// single miss.
    async fn find_pending_setup(&self, email: &str) -> Result<Option<Identity>, AppError>;
    async fn set_password(&self, user_id: &str, password_hash: &str) -> Result<(), AppError>;
    async fn update_profile(
        &self,
        user_id: &str,
        first_name: &str,
        last_name: &str,
        phone: Option<&str>,
    ) -> Result<(), AppError>;
}

#[async_trait]
pub trait ClubRepository: Send + Sync {
    async fn find_by_id(&self, club_id: &str) -> Result<Option<Club>, AppError>;
    async fn update_details(
        &self,
        club_id: &str,
        club_name: &str,
        description: Option<&str>,
        website_url: Option<&str>,
        logo_url: Option<&str>,
    ) -> Result<(), AppError>;
    async fn find_settings(&self, club_id: &str) -> Result<Option<ClubSettings>, AppError>;
    async fn upsert_settings(&self, settings: &ClubSettings) -> Result<(), AppError>;
    async fn dashboard_stats(&self, club_id: &str) -> Result<DashboardStats, AppError>;
    async fn ping(&self) -> Result<(), AppError>;
}

#[async_trait]
pub trait StaffRepository: Send + Sync {
    /// The access-gate query: memberships joined with their club, filtered
    /// to active clubs, in deterministic resolution order (primary contact
    /// first, then earliest membership, then club id).
    async fn active_memberships(&self, user_id: &str) -> Result<Vec<ClubAccess>, AppError>;
    async fn list_by_club(&self, club_id: &str) -> Result<Vec<StaffDetail>, AppError>;
    async fn find_detail(&self, club_id: &str, user_id: &str) -> Result<Option<StaffDetail>, AppError>;
    async fn add(&self, membership: &StaffMembership) -> Result<(), AppError>;
    async fn update_role(
        &self,
        club_id: &str,
        user_id: &str,
        role: &str,
        is_primary_contact: bool,
    ) -> Result<(), AppError>;
    async fn remove(&self, club_id: &str, user_id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn list_by_club(&self, club_id: &str) -> Result<Vec<MemberWithHousehold>, AppError>;
    async fn recent(&self, club_id: &str, limit: i64) -> Result<Vec<Member>, AppError>;
    async fn email_exists(&self, club_id: &str, email: &str) -> Result<bool, AppError>;
    async fn create(&self, member: &Member) -> Result<Member, AppError>;
    async fn list_households(&self, club_id: &str) -> Result<Vec<Household>, AppError>;
    async fn create_household(&self, household: &Household) -> Result<Household, AppError>;
}

#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn list_by_club(&self, club_id: &str) -> Result<Vec<Location>, AppError>;
    async fn find_by_id(&self, club_id: &str, location_id: &str) -> Result<Option<Location>, AppError>;
    async fn create(&self, location: &Location) -> Result<Location, AppError>;
    async fn update(&self, location: &Location) -> Result<(), AppError>;
    async fn delete(&self, club_id: &str, location_id: &str) -> Result<(), AppError>;
    /// Clears the primary flag across the club, optionally sparing one
    /// location. Keeps "at most one primary per club" true on the write path.
    async fn clear_primary(&self, club_id: &str, except_location_id: Option<&str>) -> Result<(), AppError>;
}

#[async_trait]
pub trait CheckInRepository: Send + Sync {
    async fn list_recent(&self, club_id: &str, limit: i64) -> Result<Vec<CheckInDetail>, AppError>;
}

/// Token -> identity-snapshot mapping with a fixed TTL. Expired entries are
/// treated as absent; purging them eagerly is an implementation detail.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, user: &SessionUser) -> Result<String, AppError>;
    async fn lookup(&self, token: &str) -> Result<Option<SessionUser>, AppError>;
    /// Idempotent: destroying an absent token is not an error.
    async fn destroy(&self, token: &str) -> Result<(), AppError>;
}
