use crate::commands::AppContext;
use crate::output::Output;
use color_eyre::Result;
use comfy_table::Table;
use reelcrit_core::SearchPager;
use reelcrit_models::Movie;

pub async fn run_search(
    query: Option<String>,
    pages: u32,
    all: bool,
    ctx: &mut AppContext,
    output: &Output,
) -> Result<()> {
    let mut pager = SearchPager::new(query);
    let mut fetched_pages = 0u32;

    while pager.has_more() && (all || fetched_pages < pages.max(1)) {
        let step = pager.load_next(&ctx.api).await;
        if let Err(err) = step {
            return Err(ctx.fail(err, output));
        }
        fetched_pages += 1;
    }

    let has_more = pager.has_more();
    let movies = pager.into_movies();

    if output.is_human() {
        if movies.is_empty() {
            output.info("No movies found.");
            return Ok(());
        }
        output.println(render_movie_table(&movies));
        if has_more {
            output.info("More results available; rerun with --pages or --all.");
        }
    } else {
        output.print_json(&serde_json::json!({
            "movies": movies,
            "hasMore": has_more,
        }));
    }

    Ok(())
}

pub fn render_movie_table(movies: &[Movie]) -> String {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Director", "Released", "Minutes"]);
    for movie in movies {
        table.add_row(vec![
            movie.movie_id.clone(),
            movie.movie_name.clone(),
            movie.director.clone(),
            movie.detail.open.clone(),
            movie.detail.running_time.to_string(),
        ]);
    }
    table.to_string()
}
