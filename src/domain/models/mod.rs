pub mod checkin;
pub mod club;
pub mod identity;
pub mod location;
pub mod member;
pub mod session;
pub mod staff;
