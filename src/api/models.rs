use serde::Serialize;

use crate::domain::models::NormalizedReview;

#[derive(Serialize)]
pub struct ReviewListResponse {
    pub status: &'static str,
    pub data: Vec<NormalizedReview>,
}

#[derive(Serialize)]
pub struct ToggleResponse {
    pub success: bool,
    pub review: NormalizedReview,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
