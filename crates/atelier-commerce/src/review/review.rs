//! Review data and the submission form.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ids::ReviewId;
use crate::validation::FieldErrors;

/// Shortest accepted comment, counted in characters.
pub const MIN_COMMENT_CHARS: usize = 10;

/// A submitted review. Never edited once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub name: String,
    /// 1 to 5 stars.
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

impl Review {
    /// Date as shown on the board, e.g. `Oct 18, 2026`.
    pub fn display_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }

    /// Render the rating as filled and empty stars.
    pub fn render_stars(&self) -> String {
        render_stars(self.rating)
    }
}

/// Render a star count as five filled/empty star glyphs.
pub fn render_stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Review form input. A rating of 0 means no star was picked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewForm {
    pub name: String,
    pub rating: u8,
    pub comment: String,
}

impl ReviewForm {
    pub fn new(name: impl Into<String>, rating: u8, comment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rating,
            comment: comment.into(),
        }
    }

    /// Validate the form, collecting one message per failing field.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.require("name", &self.name, "Name is required");

        match self.rating {
            0 => errors.add("rating", "Please select a rating"),
            1..=5 => {}
            _ => errors.add("rating", "Rating must be between 1 and 5"),
        }

        if self.comment.trim().is_empty() {
            errors.add("comment", "Comment is required");
        } else if self.comment.chars().count() < MIN_COMMENT_CHARS {
            errors.add(
                "comment",
                format!("Comment must be at least {MIN_COMMENT_CHARS} characters"),
            );
        }

        errors.into_result()
    }

    /// Turn a valid form into a review dated today.
    pub(crate) fn into_review(self) -> Review {
        self.into_review_on(Local::now().date_naive())
    }

    /// Name and comment are stored exactly as entered, so a stored comment
    /// always meets the length rule it was validated against.
    pub(crate) fn into_review_on(self, date: NaiveDate) -> Review {
        Review {
            id: ReviewId::generate(),
            name: self.name,
            rating: self.rating,
            comment: self.comment,
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form() {
        let form = ReviewForm::new("Ada", 5, "Beautiful knit, fits well.");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = ReviewForm::default().validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("rating"), Some("Please select a rating"));
        assert_eq!(errors.get("comment"), Some("Comment is required"));
    }

    #[test]
    fn test_comment_length_boundary() {
        let short = ReviewForm::new("Ada", 4, "123456789");
        assert_eq!(
            short.validate().unwrap_err().get("comment"),
            Some("Comment must be at least 10 characters")
        );

        let exact = ReviewForm::new("Ada", 4, "1234567890");
        assert!(exact.validate().is_ok());
    }

    #[test]
    fn test_comment_length_counts_characters() {
        // Ten characters, more than ten bytes.
        let form = ReviewForm::new("Zoë", 3, "très très!");
        assert_eq!(form.comment.chars().count(), 10);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_whitespace_name_is_missing() {
        let form = ReviewForm::new("   ", 2, "Runs a little small.");
        assert_eq!(form.validate().unwrap_err().get("name"), Some("Name is required"));
    }

    #[test]
    fn test_rating_out_of_range() {
        let form = ReviewForm::new("Ada", 6, "Too many stars here.");
        assert!(form.validate().unwrap_err().has("rating"));
    }

    #[test]
    fn test_display_date_and_stars() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 8).unwrap();
        let review = ReviewForm::new("Ada", 3, "Lovely colour.").into_review_on(date);
        assert_eq!(review.display_date(), "Oct 8, 2026");
        assert_eq!(review.render_stars(), "★★★☆☆");
        assert_eq!(review.name, "Ada");
        assert!(review.id.as_str().starts_with("rev_"));
    }

    #[test]
    fn test_stored_comment_keeps_validated_length() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 8).unwrap();
        let form = ReviewForm::new(" Ada ", 4, "ok        ");
        assert!(form.validate().is_ok());

        let review = form.into_review_on(date);
        assert_eq!(review.comment, "ok        ");
        assert!(review.comment.chars().count() >= MIN_COMMENT_CHARS);
        assert_eq!(review.name, " Ada ");
    }
}
