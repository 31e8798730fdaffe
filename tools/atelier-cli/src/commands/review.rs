//! Review board commands.

use anyhow::Result;
use atelier_commerce::review::{render_stars, ReviewBoard, ReviewForm};
use atelier_commerce::CommerceError;
use serde_json::json;

use super::{reject_form, ReviewArgs, ReviewCommand};
use crate::context::Context;
use crate::output::muted;

/// Run the review command.
pub async fn run(args: ReviewArgs, ctx: &Context) -> Result<()> {
    let cache = ctx.cache()?;
    let mut board = ReviewBoard::load(&cache)?.with_submit_delay(ctx.config.reviews.submit_delay());

    match args.command.unwrap_or(ReviewCommand::List) {
        ReviewCommand::List => show_board(ctx, &board),
        ReviewCommand::Add {
            name,
            rating,
            comment,
        } => {
            let form = ReviewForm::new(name, rating.unwrap_or(0), comment);

            let spinner = ctx.output.spinner("Submitting review...");
            let result = board.submit(form, &cache).await;
            spinner.finish_and_clear();

            let review = match result {
                Ok(review) => review,
                Err(CommerceError::Validation(errors)) => return Err(reject_form(ctx, &errors)),
                Err(e) => return Err(e.into()),
            };

            if ctx.output.is_json() {
                ctx.output.json(&review);
            } else {
                ctx.output.success("Thank you for your review!");
            }
        }
    }

    Ok(())
}

/// The feedback page.
pub fn show_board(ctx: &Context, board: &ReviewBoard) {
    let summary = board.summary();

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "summary": summary, "reviews": board.reviews() }));
        return;
    }

    ctx.output.header("Customer Reviews");

    if board.is_empty() {
        ctx.output.info("No reviews yet. Be the first to share your experience!");
        return;
    }

    ctx.output.line(&format!(
        "  {} {}  {}",
        render_stars(summary.rounded_stars()),
        summary.average_display(),
        muted(&review_count_label(summary.total_reviews))
    ));

    for stars in (1..=5u8).rev() {
        let pct = summary
            .rating_distribution
            .percentage(stars, summary.total_reviews);
        ctx.output.table_row(
            &[
                &format!("{stars}★"),
                &"█".repeat((pct / 10.0).round() as usize),
                &format!("{pct:.0}%"),
            ],
            &[3, 10, 4],
        );
    }

    for review in board.reviews() {
        ctx.output.line("");
        ctx.output.line(&format!(
            "  {}  {}  {}",
            review.render_stars(),
            review.name,
            muted(&review.display_date())
        ));
        ctx.output.line(&format!("  {}", review.comment));
    }
}

/// "(1 review)" or "(N reviews)".
fn review_count_label(total: usize) -> String {
    if total == 1 {
        "(1 review)".to_string()
    } else {
        format!("({total} reviews)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_count_label() {
        assert_eq!(review_count_label(1), "(1 review)");
        assert_eq!(review_count_label(3), "(3 reviews)");
    }
}
