//! Business services for the admin panel.

pub mod auth;

pub use auth::{AdminAuthError, AdminAuthService};
