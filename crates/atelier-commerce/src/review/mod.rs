//! Review module.
//!
//! Customer reviews are append-only and kept in local storage under the
//! `reviews` key, newest first.

mod board;
mod review;

pub use board::{RatingDistribution, ReviewBoard, ReviewSummary, DEFAULT_SUBMIT_DELAY, REVIEWS_KEY};
pub use review::{render_stars, Review, ReviewForm, MIN_COMMENT_CHARS};
