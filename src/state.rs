use std::sync::Arc;
use crate::domain::ports::{
    CheckInRepository, ClubRepository, IdentityRepository, LocationRepository,
    MemberRepository, SessionStore, StaffRepository,
};
use crate::domain::services::auth_service::AuthService;
use crate::config::Config;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub identity_repo: Arc<dyn IdentityRepository>,
    pub club_repo: Arc<dyn ClubRepository>,
    pub staff_repo: Arc<dyn StaffRepository>,
    pub member_repo: Arc<dyn MemberRepository>,
    pub location_repo: Arc<dyn LocationRepository>,
    pub checkin_repo: Arc<dyn CheckInRepository>,
    pub sessions: Arc<dyn SessionStore>,
    pub auth_service: Arc<AuthService>,
    pub templates: Arc<Tera>,
}
