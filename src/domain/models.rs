use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Review payload as delivered by the Hostaway feed.
///
/// `rating` is the overall score and is null on most guest reviews;
/// `reviewCategory` carries the per-category sub-scores instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReview {
    pub id: i64,
    #[serde(rename = "type")]
    pub review_type: String,
    pub status: String,
    #[serde(default)]
    pub rating: Option<f64>,
    pub public_review: String,
    #[serde(default)]
    pub review_category: Vec<CategoryRating>,
    pub submitted_at: String,
    pub guest_name: String,
    pub listing_name: String,
}

/// A named sub-score attached to a review (cleanliness, location, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRating {
    pub category: String,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewSource {
    Hostaway,
    Google,
}

/// Canonical in-system review shape served to both dashboard and public
/// views. `is_visible` is the only field mutated after creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedReview {
    pub id: i64,
    pub guest_name: String,
    pub date: String,
    pub rating: f64,
    pub comment: String,
    pub categories: HashMap<String, f64>,
    pub source: ReviewSource,
    pub is_visible: bool,
    pub listing_name: String,
}
