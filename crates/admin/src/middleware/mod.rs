//! HTTP middleware stack for the admin panel.

pub mod auth;
pub mod session;

pub use auth::{RequireAdminAuth, RequireAdminWrite};
pub use session::create_session_layer;
