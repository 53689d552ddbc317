//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Dashboard
//! GET  /                       - Entity counts
//!
//! # Auth
//! POST /auth/login             - Login with email + password
//! POST /auth/logout            - Logout (destroys the session)
//! GET  /auth/me                - Current admin identity
//!
//! # Catalog CRUD (auth required; writes need a non-viewer role)
//! GET/POST        /categories        PUT/DELETE /categories/{id}
//! GET/POST        /restaurants       PUT/DELETE /restaurants/{id}
//! GET/POST        /products          PUT/DELETE /products/{id}
//! GET/POST        /doctors           PUT/DELETE /doctors/{id}
//! GET/POST        /craftsmen         PUT/DELETE /craftsmen/{id}
//! GET/POST        /promos            PUT/DELETE /promos/{id}
//!
//! # Uploads
//! POST /uploads?folder=...     - Multipart image upload, returns public URL
//! ```

pub mod auth;
pub mod categories;
pub mod craftsmen;
pub mod dashboard;
pub mod doctors;
pub mod products;
pub mod promos;
pub mod restaurants;
pub mod uploads;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

/// Mount one CRUD entity at `/{name}` and `/{name}/{{id}}`.
macro_rules! crud_routes {
    ($router:expr, $name:literal, $module:ident) => {
        $router
            .route(
                concat!("/", $name),
                get($module::index).post($module::create),
            )
            .route(
                concat!("/", $name, "/{id}"),
                axum::routing::put($module::update).delete($module::delete),
            )
    };
}

/// Create all routes for the admin panel.
pub fn routes() -> Router<AppState> {
    let router = Router::new()
        // Dashboard
        .route("/", get(dashboard::index))
        // Auth
        .nest("/auth", auth_routes())
        // Uploads
        .route("/uploads", post(uploads::create));

    // The six managed entity types
    let router = crud_routes!(router, "categories", categories);
    let router = crud_routes!(router, "restaurants", restaurants);
    let router = crud_routes!(router, "products", products);
    let router = crud_routes!(router, "doctors", doctors);
    let router = crud_routes!(router, "craftsmen", craftsmen);
    crud_routes!(router, "promos", promos)
}
