use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::api::models::{ErrorResponse, ReviewListResponse, ToggleResponse};
use crate::domain::models::NormalizedReview;
use crate::store::StoreError;
use super::{AppState, PublicParams};

/// Manager view: every review, hidden ones included, in seed order.
pub async fn get_reviews(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = match state.store.lock() {
        Ok(store) => store,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "Store lock poisoned").into_response(),
    };

    Json(ReviewListResponse {
        status: "success",
        data: store.list_all(),
    })
    .into_response()
}

/// Public view: approved reviews only, optionally scoped to one listing.
pub async fn get_public_reviews(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PublicParams>,
) -> impl IntoResponse {
    let store = match state.store.lock() {
        Ok(store) => store,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "Store lock poisoned").into_response(),
    };

    let data = select_public(store.list_all(), params.listing.as_deref());

    Json(ReviewListResponse {
        status: "success",
        data,
    })
    .into_response()
}

pub async fn toggle_review(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(_) => return (StatusCode::INTERNAL_SERVER_ERROR, "Store lock poisoned").into_response(),
    };

    match store.toggle_visibility(id) {
        Ok(review) => Json(ToggleResponse {
            success: true,
            review,
        })
        .into_response(),
        Err(StoreError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Review not found".to_string(),
            }),
        )
            .into_response(),
    }
}

fn select_public(reviews: Vec<NormalizedReview>, listing: Option<&str>) -> Vec<NormalizedReview> {
    reviews
        .into_iter()
        .filter(|r| r.is_visible)
        .filter(|r| listing.is_none_or(|name| r.listing_name == name))
        .collect()
}
