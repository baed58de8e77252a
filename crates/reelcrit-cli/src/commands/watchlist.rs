use crate::commands::search::render_movie_table;
use crate::commands::AppContext;
use crate::output::Output;
use color_eyre::Result;
use reelcrit_core::watchlist;
use reelcrit_models::Movie;

pub async fn run_show(ctx: &mut AppContext, output: &Output) -> Result<()> {
    ctx.require_login(output)?;
    let result = watchlist::resolve_watchlist(&ctx.api).await;
    let movies = match result {
        Ok(movies) => movies,
        Err(err) => return Err(ctx.fail(err, output)),
    };
    print_watchlist(&movies, output)
}

pub async fn run_add(movie_id: String, ctx: &mut AppContext, output: &Output) -> Result<()> {
    ctx.require_login(output)?;
    let result = watchlist::add_and_refresh(&ctx.api, &movie_id).await;
    let movies = match result {
        Ok(movies) => movies,
        Err(err) => return Err(ctx.fail(err, output)),
    };
    output.success(format!("Added {} to your watchlist.", movie_id));
    print_watchlist(&movies, output)
}

pub async fn run_remove(movie_id: String, ctx: &mut AppContext, output: &Output) -> Result<()> {
    ctx.require_login(output)?;
    let result = watchlist::remove_and_refresh(&ctx.api, &movie_id).await;
    let movies = match result {
        Ok(movies) => movies,
        Err(err) => return Err(ctx.fail(err, output)),
    };
    output.success(format!("Removed {} from your watchlist.", movie_id));
    print_watchlist(&movies, output)
}

fn print_watchlist(movies: &[Movie], output: &Output) -> Result<()> {
    if !output.is_human() {
        output.print_json(&serde_json::to_value(movies)?);
        return Ok(());
    }
    if movies.is_empty() {
        output.info("Your watchlist is empty.");
    } else {
        output.println(render_movie_table(movies));
    }
    Ok(())
}
