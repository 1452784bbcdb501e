pub mod auth;
pub mod citizen;
pub mod dashboard;
pub mod portal;
pub mod reports;
