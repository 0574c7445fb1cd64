pub mod admin;
pub mod auth;
pub mod builds;
pub mod orders;
