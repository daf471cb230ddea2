use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::postcodes::handlers;
use crate::features::postcodes::services::PostcodeService;

/// Create routes for the postcodes feature
pub fn routes(service: Arc<PostcodeService>) -> Router {
    Router::new()
        .route("/autocomplete", get(handlers::autocomplete))
        .route("/validate", get(handlers::validate))
        .with_state(service)
}
