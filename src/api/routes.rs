use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    reviews::{get_public_reviews, get_reviews, toggle_review},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/reviews/hostaway", get(get_reviews))
        .route("/api/reviews/public", get(get_public_reviews))
        .route("/api/reviews/:id/toggle", post(toggle_review))
        .with_state(state)
}
