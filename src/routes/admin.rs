//! Admin configuration route
//!
//! Serves the declarative admin-site configuration that a generic
//! admin-UI renderer consumes.

use crate::admin::{self, AdminSite};
use crate::state::AppState;
use axum::{routing::get, Json, Router};

/// Create admin routes
pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/", get(get_admin_site))
}

/// GET /api/v1/admin - The admin site configuration
async fn get_admin_site() -> Json<&'static AdminSite> {
    Json(admin::site())
}
