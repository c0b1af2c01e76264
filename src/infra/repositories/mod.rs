pub mod postgres_checkin_repo;
pub mod postgres_club_repo;
pub mod postgres_identity_repo;
pub mod postgres_location_repo;
pub mod postgres_member_repo;
pub mod postgres_staff_repo;
pub mod sqlite_checkin_repo;
pub mod sqlite_club_repo;
pub mod sqlite_identity_repo;
pub mod sqlite_location_repo;
pub mod sqlite_member_repo;
pub mod sqlite_staff_repo;
