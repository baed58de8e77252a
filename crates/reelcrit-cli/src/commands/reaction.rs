use crate::commands::AppContext;
use crate::output::Output;
use clap::ValueEnum;
use color_eyre::Result;
use reelcrit_core::submit_reaction;
use reelcrit_models::ReactionKind;

/// Only GOOD and BAD can be submitted; there is no toggle-off gesture, so
/// re-sending the active kind leaves it unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReactionChoice {
    Good,
    Bad,
}

impl From<ReactionChoice> for ReactionKind {
    fn from(choice: ReactionChoice) -> Self {
        match choice {
            ReactionChoice::Good => ReactionKind::Good,
            ReactionChoice::Bad => ReactionKind::Bad,
        }
    }
}

pub async fn run_react(
    movie_id: String,
    review_id: String,
    choice: ReactionChoice,
    ctx: &mut AppContext,
    output: &Output,
) -> Result<()> {
    ctx.require_login(output)?;

    let result = submit_reaction(&ctx.api, &movie_id, &review_id, choice.into()).await;
    let refresh = match result {
        Ok(refresh) => refresh,
        Err(err) => return Err(ctx.fail(err, output)),
    };

    let (good, bad) = refresh
        .counts
        .get(&review_id)
        .map(|c| (c.good, c.bad))
        .unwrap_or((0, 0));

    if output.is_human() {
        output.success(format!(
            "Reaction recorded: {} (now +{} / -{})",
            refresh.viewer_reaction.as_str(),
            good,
            bad
        ));
    } else {
        output.print_json(&serde_json::json!({
            "reviewId": review_id,
            "myReaction": refresh.viewer_reaction,
            "good": good,
            "bad": bad,
        }));
    }
    Ok(())
}
