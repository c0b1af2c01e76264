pub mod auth;
pub mod checkin;
pub mod dashboard;
pub mod location;
pub mod member;
pub mod settings;
pub mod staff;
