use log::debug;
use thiserror::Error;

use crate::domain::models::{NormalizedReview, RawReview};
use crate::domain::normalize::normalize_review;

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("review {0} not found")]
    NotFound(i64),
}

/// In-memory collection of normalized reviews.
///
/// Seeded once at process start and never grows or shrinks afterwards;
/// toggling visibility is the only mutation. Seed order is preserved.
pub struct ReviewStore {
    reviews: Vec<NormalizedReview>,
}

impl ReviewStore {
    pub fn new(raw_reviews: Vec<RawReview>) -> Self {
        let reviews = raw_reviews.into_iter().map(normalize_review).collect();
        Self { reviews }
    }

    /// Snapshot of every review in seed order (manager view).
    pub fn list_all(&self) -> Vec<NormalizedReview> {
        self.reviews.clone()
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Flips one review's visibility flag and returns the updated record.
    pub fn toggle_visibility(&mut self, id: i64) -> Result<NormalizedReview, StoreError> {
        let review = self
            .reviews
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))?;
        review.is_visible = !review.is_visible;
        debug!("Review {} visibility set to {}", id, review.is_visible);
        Ok(review.clone())
    }
}
