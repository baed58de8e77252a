use crate::commands::AppContext;
use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use reelcrit_core::{reactions, submit_review, ReviewSubmitError};
use reelcrit_models::{ReactionKind, Review, ReviewDraft};
use std::collections::HashMap;

/// List a movie's reviews with their aggregate reaction counts; when logged
/// in, the viewer's own reactions are resolved as well.
pub async fn run_list(
    movie_id: String,
    show_spoilers: bool,
    ctx: &mut AppContext,
    output: &Output,
) -> Result<()> {
    let fetched = ctx.api.reviews(&movie_id).await;
    let reviews = match fetched {
        Ok(reviews) => reviews,
        Err(err) => return Err(ctx.fail(err, output)),
    };
    // A failed counts fetch must not take the review listing down with it.
    let counts = reactions::counts_by_review_or_empty(&ctx.api, &movie_id).await;
    let mine = if ctx.session.is_active() {
        reactions::viewer_reactions(&ctx.api, &reviews).await
    } else {
        HashMap::new()
    };

    if !output.is_human() {
        let items: Vec<serde_json::Value> = reviews
            .iter()
            .map(|review| {
                let (good, bad) = counts
                    .get(&review.id)
                    .map(|c| (c.good, c.bad))
                    .unwrap_or((0, 0));
                serde_json::json!({
                    "review": review,
                    "good": good,
                    "bad": bad,
                    "myReaction": mine.get(&review.id).copied().unwrap_or_default(),
                })
            })
            .collect();
        output.print_json(&serde_json::Value::Array(items));
        return Ok(());
    }

    if reviews.is_empty() {
        output.info("No reviews yet.");
        return Ok(());
    }

    for review in &reviews {
        let (good, bad) = counts
            .get(&review.id)
            .map(|c| (c.good, c.bad))
            .unwrap_or((0, 0));
        print_review(review, good, bad, mine.get(&review.id).copied(), show_spoilers, output);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn run_add(
    movie_id: String,
    title: String,
    description: String,
    acting: u8,
    cinematography: u8,
    originality: u8,
    entertainment: u8,
    story: u8,
    rating: u8,
    spoiler: bool,
    ctx: &mut AppContext,
    output: &Output,
) -> Result<()> {
    ctx.require_login(output)?;

    let draft = ReviewDraft {
        title,
        description,
        acting,
        cinematography,
        originality,
        entertainment,
        story,
        rating,
        has_spoiler: spoiler,
    };

    let result = submit_review(&ctx.api, &movie_id, &draft).await;
    match result {
        Ok(reviews) => {
            output.success(format!(
                "Review submitted; the movie now has {} review(s).",
                reviews.len()
            ));
            Ok(())
        }
        Err(ReviewSubmitError::Invalid(err)) => {
            output.error(format!("Review rejected: {}", err));
            Err(eyre!("invalid review"))
        }
        Err(ReviewSubmitError::Api(err)) => Err(ctx.fail(err, output)),
    }
}

/// The caller's own reviews across all movies.
pub async fn run_mine(ctx: &mut AppContext, output: &Output) -> Result<()> {
    ctx.require_login(output)?;

    let fetched = ctx.api.my_reviews().await;
    let reviews = match fetched {
        Ok(reviews) => reviews,
        Err(err) => return Err(ctx.fail(err, output)),
    };

    if !output.is_human() {
        output.print_json(&serde_json::to_value(&reviews)?);
        return Ok(());
    }

    if reviews.is_empty() {
        output.info("You have not written any reviews yet.");
        return Ok(());
    }

    for review in &reviews {
        output.println(format!(
            "{} — {} ({}/5)",
            review.movie_name, review.title, review.rating
        ));
        output.println(format!("  {}", review.description));
        output.println(format!(
            "  acting {} | cinematography {} | originality {} | entertainment {} | story {}",
            review.acting,
            review.cinematography,
            review.originality,
            review.entertainment,
            review.story
        ));
        output.println(format!(
            "  written {}  (movie {})",
            review.created_at.format("%Y-%m-%d"),
            review.movie_id
        ));
    }
    Ok(())
}

fn print_review(
    review: &Review,
    good: u64,
    bad: u64,
    mine: Option<ReactionKind>,
    show_spoilers: bool,
    output: &Output,
) {
    output.println(format!(
        "[{}] {} — {}/5 by {} ({})",
        review.id,
        review.title,
        review.rating,
        review.nick_name,
        review.created_at.format("%Y-%m-%d")
    ));

    if review.has_spoiler && !show_spoilers {
        output.println("  (spoiler hidden; pass --spoilers to reveal)");
    } else {
        output.println(format!("  {}", review.description));
        output.println(format!(
            "  acting {} | cinematography {} | originality {} | entertainment {} | story {}",
            review.acting,
            review.cinematography,
            review.originality,
            review.entertainment,
            review.story
        ));
    }

    let mine = match mine {
        Some(ReactionKind::Good) => "  [you: good]",
        Some(ReactionKind::Bad) => "  [you: bad]",
        _ => "",
    };
    output.println(format!("  +{} / -{}{}", good, bad, mine));
}
