pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::posts::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/tones", get(handlers::handle_tones))
        .route("/audiences", get(handlers::handle_audiences))
        .route("/generate-posts", post(handlers::handle_generate_posts))
        .with_state(state)
}
