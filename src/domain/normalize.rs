use std::collections::HashMap;

use crate::domain::models::{CategoryRating, NormalizedReview, RawReview, ReviewSource};

/// Converts one raw Hostaway review into the canonical shape.
///
/// Never fails: missing optional fields degrade to zero/empty defaults.
/// Visibility always starts hidden; publishing is a moderation action.
pub fn normalize_review(raw: RawReview) -> NormalizedReview {
    let rating = derive_rating(raw.rating, &raw.review_category);
    let categories = category_map(raw.review_category);

    NormalizedReview {
        id: raw.id,
        guest_name: raw.guest_name,
        date: raw.submitted_at,
        rating,
        comment: raw.public_review,
        categories,
        source: ReviewSource::Hostaway,
        is_visible: false,
        listing_name: raw.listing_name,
    }
}

/// Single display rating, rounded to one decimal place.
///
/// The overall rating wins when it is set and strictly positive. The feed
/// uses a literal 0 as a placeholder, so 0 falls back to the mean of the
/// category sub-scores, or 0.0 when no categories were submitted.
fn derive_rating(overall: Option<f64>, categories: &[CategoryRating]) -> f64 {
    match overall {
        Some(rating) if rating > 0.0 => round_to_tenth(rating),
        _ if !categories.is_empty() => {
            let sum: f64 = categories.iter().map(|c| c.rating).sum();
            round_to_tenth(sum / categories.len() as f64)
        }
        _ => 0.0,
    }
}

/// Category name -> rating. Duplicate names are last-write-wins.
fn category_map(categories: Vec<CategoryRating>) -> HashMap<String, f64> {
    categories
        .into_iter()
        .map(|c| (c.category, c.rating))
        .collect()
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_review(id: i64, rating: Option<f64>, categories: Vec<(&str, f64)>) -> RawReview {
        RawReview {
            id,
            review_type: "guest-to-host".to_string(),
            status: "published".to_string(),
            rating,
            public_review: "Lovely stay.".to_string(),
            review_category: categories
                .into_iter()
                .map(|(category, rating)| CategoryRating {
                    category: category.to_string(),
                    rating,
                })
                .collect(),
            submitted_at: "2023-11-15 10:30:00".to_string(),
            guest_name: "Sarah Jenkins".to_string(),
            listing_name: "2B NI A 29 Shoreditch Heights".to_string(),
        }
    }

    #[test]
    fn overall_rating_wins_over_categories() {
        let raw = raw_review(1, Some(8.0), vec![("cleanliness", 2.0), ("location", 3.0)]);
        let review = normalize_review(raw);
        assert_eq!(review.rating, 8.0);
    }

    #[test]
    fn overall_rating_is_rounded_to_one_decimal() {
        let raw = raw_review(2, Some(8.666), vec![]);
        let review = normalize_review(raw);
        assert_eq!(review.rating, 8.7);
    }

    #[test]
    fn missing_overall_rating_falls_back_to_category_mean() {
        let raw = raw_review(
            7454,
            None,
            vec![("cleanliness", 9.0), ("location", 10.0), ("accuracy", 10.0)],
        );
        let review = normalize_review(raw);
        assert_eq!(review.rating, 9.7);
        assert_eq!(review.categories.get("cleanliness"), Some(&9.0));
        assert_eq!(review.categories.get("location"), Some(&10.0));
        assert_eq!(review.categories.get("accuracy"), Some(&10.0));
    }

    #[test]
    fn zero_overall_rating_is_treated_as_unset() {
        let raw = raw_review(3, Some(0.0), vec![("cleanliness", 6.0), ("value", 8.0)]);
        let review = normalize_review(raw);
        assert_eq!(review.rating, 7.0);
    }

    #[test]
    fn no_rating_and_no_categories_yields_zero() {
        let raw = raw_review(4, None, vec![]);
        let review = normalize_review(raw);
        assert_eq!(review.rating, 0.0);
        assert!(review.categories.is_empty());
    }

    #[test]
    fn duplicate_category_names_keep_the_last_value() {
        let raw = raw_review(5, Some(9.0), vec![("cleanliness", 4.0), ("cleanliness", 9.0)]);
        let review = normalize_review(raw);
        assert_eq!(review.categories.len(), 1);
        assert_eq!(review.categories.get("cleanliness"), Some(&9.0));
    }

    #[test]
    fn normalized_review_starts_hidden() {
        let review = normalize_review(raw_review(6, Some(10.0), vec![]));
        assert!(!review.is_visible);
    }

    #[test]
    fn fields_are_carried_over() {
        let review = normalize_review(raw_review(7, None, vec![("location", 10.0)]));
        assert_eq!(review.id, 7);
        assert_eq!(review.guest_name, "Sarah Jenkins");
        assert_eq!(review.comment, "Lovely stay.");
        assert_eq!(review.date, "2023-11-15 10:30:00");
        assert_eq!(review.listing_name, "2B NI A 29 Shoreditch Heights");
        assert_eq!(review.source, ReviewSource::Hostaway);
    }
}
