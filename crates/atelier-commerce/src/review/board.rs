//! The review board: stored reviews plus their aggregate rating.

use std::time::Duration;

use atelier_cache::Cache;
use serde::{Deserialize, Serialize};

use crate::review::{Review, ReviewForm};
use crate::CommerceError;

/// Storage key for the review list.
pub const REVIEWS_KEY: &str = "reviews";

/// Simulated submit latency used by the storefront.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(800);

/// Aggregate view of the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub total_reviews: usize,
    /// Mean rating, 0 when there are no reviews.
    pub average_rating: f64,
    pub rating_distribution: RatingDistribution,
}

impl ReviewSummary {
    /// Average with one decimal, e.g. `4.5`.
    pub fn average_display(&self) -> String {
        format!("{:.1}", self.average_rating)
    }

    /// Average rounded to whole stars.
    pub fn rounded_stars(&self) -> u8 {
        self.average_rating.round().clamp(0.0, 5.0) as u8
    }
}

/// Distribution of ratings (1-5 stars).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingDistribution {
    pub five_star: u32,
    pub four_star: u32,
    pub three_star: u32,
    pub two_star: u32,
    pub one_star: u32,
}

impl RatingDistribution {
    fn record(&mut self, stars: u8) {
        match stars {
            5 => self.five_star += 1,
            4 => self.four_star += 1,
            3 => self.three_star += 1,
            2 => self.two_star += 1,
            1 => self.one_star += 1,
            _ => {}
        }
    }

    /// Number of reviews with the given star count.
    pub fn count(&self, stars: u8) -> u32 {
        match stars {
            5 => self.five_star,
            4 => self.four_star,
            3 => self.three_star,
            2 => self.two_star,
            1 => self.one_star,
            _ => 0,
        }
    }

    /// Get percentage for a rating level.
    pub fn percentage(&self, stars: u8, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        self.count(stars) as f64 / total as f64 * 100.0
    }
}

/// Reviews loaded from local storage, newest first.
#[derive(Debug, Clone, Default)]
pub struct ReviewBoard {
    reviews: Vec<Review>,
    submit_delay: Duration,
}

impl ReviewBoard {
    /// Create an empty board with no submit latency.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the board from storage.
    pub fn load(cache: &Cache) -> Result<Self, CommerceError> {
        let reviews: Vec<Review> = cache.get_or_default(REVIEWS_KEY)?;
        tracing::debug!(count = reviews.len(), "loaded reviews");
        Ok(Self {
            reviews,
            submit_delay: Duration::ZERO,
        })
    }

    /// Wait this long before storing a submitted review.
    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Validate and store a review at the front of the board.
    ///
    /// Nothing is written when validation fails. The board only changes once
    /// the store accepted the new list.
    pub async fn submit(&mut self, form: ReviewForm, cache: &Cache) -> Result<Review, CommerceError> {
        form.validate()?;

        if !self.submit_delay.is_zero() {
            tokio::time::sleep(self.submit_delay).await;
        }

        let review = form.into_review();
        let mut reviews = Vec::with_capacity(self.reviews.len() + 1);
        reviews.push(review.clone());
        reviews.extend(self.reviews.iter().cloned());
        cache.set(REVIEWS_KEY, &reviews)?;
        self.reviews = reviews;

        tracing::info!(id = %review.id, rating = review.rating, "review submitted");
        Ok(review)
    }

    /// Mean rating over every review; 0 for an empty board.
    pub fn average_rating(&self) -> f64 {
        if self.reviews.is_empty() {
            return 0.0;
        }
        let total: u32 = self.reviews.iter().map(|r| r.rating as u32).sum();
        total as f64 / self.reviews.len() as f64
    }

    /// Count, average and distribution, recomputed from the full list.
    pub fn summary(&self) -> ReviewSummary {
        let mut rating_distribution = RatingDistribution::default();
        for review in &self.reviews {
            rating_distribution.record(review.rating);
        }
        ReviewSummary {
            total_reviews: self.reviews.len(),
            average_rating: self.average_rating(),
            rating_distribution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_cache::{CacheError, KvStore};

    struct ReadOnlyStore;

    impl KvStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &[u8]) -> Result<(), CacheError> {
            Err(CacheError::StoreError("read-only store".to_string()))
        }

        fn delete(&self, _key: &str) -> Result<(), CacheError> {
            Ok(())
        }

        fn keys(&self) -> Result<Vec<String>, CacheError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_empty_board() {
        let board = ReviewBoard::load(&Cache::in_memory()).unwrap();
        assert!(board.is_empty());
        let summary = board.summary();
        assert_eq!(summary.total_reviews, 0);
        assert_eq!(summary.average_rating, 0.0);
        assert_eq!(summary.average_display(), "0.0");
        assert_eq!(summary.rating_distribution.percentage(5, 0), 0.0);
    }

    #[tokio::test]
    async fn test_submit_prepends_and_persists() {
        let cache = Cache::in_memory();
        let mut board = ReviewBoard::load(&cache).unwrap();

        board
            .submit(ReviewForm::new("Ada", 4, "First review here."), &cache)
            .await
            .unwrap();
        board
            .submit(ReviewForm::new("Grace", 5, "Second review here."), &cache)
            .await
            .unwrap();

        let names: Vec<&str> = board.reviews().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Grace", "Ada"]);

        let reloaded = ReviewBoard::load(&cache).unwrap();
        assert_eq!(reloaded.reviews(), board.reviews());
    }

    #[tokio::test]
    async fn test_invalid_review_is_not_stored() {
        let cache = Cache::in_memory();
        let mut board = ReviewBoard::new();

        let err = board
            .submit(ReviewForm::new("Ada", 4, "too short"), &cache)
            .await
            .unwrap_err();
        assert!(err.field_errors().unwrap().has("comment"));
        assert!(board.is_empty());
        assert!(!cache.exists(REVIEWS_KEY).unwrap());
    }

    #[tokio::test]
    async fn test_failed_write_leaves_board_unchanged() {
        let cache = Cache::new(ReadOnlyStore);
        let mut board = ReviewBoard::load(&cache).unwrap();

        let result = board
            .submit(ReviewForm::new("Ada", 5, "Never gets stored."), &cache)
            .await;
        assert!(result.is_err());
        assert!(board.is_empty());
        assert_eq!(board.summary().total_reviews, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_delay() {
        let cache = Cache::in_memory();
        let mut board = ReviewBoard::new().with_submit_delay(DEFAULT_SUBMIT_DELAY);

        let started = tokio::time::Instant::now();
        board
            .submit(ReviewForm::new("Ada", 3, "Worth the wait."), &cache)
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(800));
    }

    #[tokio::test]
    async fn test_summary() {
        let cache = Cache::in_memory();
        let mut board = ReviewBoard::new();
        for rating in [5, 5, 4, 2] {
            board
                .submit(ReviewForm::new("Ada", rating, "Consistent quality."), &cache)
                .await
                .unwrap();
        }

        let summary = board.summary();
        assert_eq!(summary.total_reviews, 4);
        assert_eq!(summary.average_rating, 4.0);
        assert_eq!(summary.average_display(), "4.0");
        assert_eq!(summary.rounded_stars(), 4);
        assert_eq!(summary.rating_distribution.count(5), 2);
        assert_eq!(summary.rating_distribution.percentage(5, 4), 50.0);
        assert_eq!(summary.rating_distribution.count(1), 0);
    }
}
