use crate::commands::search::render_movie_table;
use crate::commands::AppContext;
use crate::output::Output;
use color_eyre::eyre::Context;
use color_eyre::Result;
use reelcrit_models::{Movie, MovieDetail, NewMovie};
use std::path::{Path, PathBuf};

pub async fn run_show(
    movie_id: String,
    admin: bool,
    ctx: &mut AppContext,
    output: &Output,
) -> Result<()> {
    let result = if admin {
        ctx.api.movie_admin(&movie_id).await
    } else {
        ctx.api.movie(&movie_id).await
    };
    let movie = match result {
        Ok(movie) => movie,
        Err(err) => return Err(ctx.fail(err, output)),
    };

    if output.is_human() {
        print_movie(&movie, output);
    } else {
        output.print_json(&serde_json::to_value(&movie)?);
    }
    Ok(())
}

pub async fn run_list(ctx: &mut AppContext, output: &Output) -> Result<()> {
    let result = ctx.api.list_movies().await;
    let movies = match result {
        Ok(movies) => movies,
        Err(err) => return Err(ctx.fail(err, output)),
    };

    if output.is_human() {
        if movies.is_empty() {
            output.info("No movies registered.");
        } else {
            output.println(render_movie_table(&movies));
        }
    } else {
        output.print_json(&serde_json::to_value(&movies)?);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn run_add(
    name: String,
    director: String,
    actors: Vec<String>,
    poster: Option<String>,
    poster_file: Option<PathBuf>,
    open: String,
    categories: Vec<String>,
    country: String,
    running_time: u32,
    distributor: String,
    ctx: &mut AppContext,
    output: &Output,
) -> Result<()> {
    let poster = match (poster, poster_file) {
        (Some(url), _) => url,
        (None, Some(path)) => upload_poster(&path, ctx, output).await?,
        (None, None) => String::new(),
    };

    let movie = NewMovie {
        movie_name: name,
        director,
        actors,
        poster,
        detail: MovieDetail {
            open,
            categories,
            country,
            running_time,
            distributor,
        },
    };

    let result = ctx.api.create_movie(&movie).await;
    let created = match result {
        Ok(created) => created,
        Err(err) => return Err(ctx.fail(err, output)),
    };

    output.success(format!(
        "Registered \"{}\" as {}",
        created.movie_name, created.movie_id
    ));
    Ok(())
}

pub async fn run_upload(file: PathBuf, ctx: &mut AppContext, output: &Output) -> Result<()> {
    let url = upload_poster(&file, ctx, output).await?;
    if output.is_human() {
        output.success(format!("Uploaded: {}", url));
    } else {
        output.print_json(&serde_json::json!({ "url": url }));
    }
    Ok(())
}

async fn upload_poster(path: &Path, ctx: &mut AppContext, output: &Output) -> Result<String> {
    let bytes = std::fs::read(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("poster")
        .to_string();
    let result = ctx.api.upload_image(&file_name, bytes).await;
    result.map_err(|err| ctx.fail(err, output))
}

fn print_movie(movie: &Movie, output: &Output) {
    output.println(format!("{} ({})", movie.movie_name, movie.movie_id));
    output.println(format!("  Director:    {}", movie.director));
    output.println(format!("  Starring:    {}", movie.actors.join(", ")));
    output.println(format!("  Released:    {}", movie.detail.open));
    output.println(format!("  Categories:  {}", movie.detail.categories.join(", ")));
    output.println(format!("  Country:     {}", movie.detail.country));
    output.println(format!("  Runtime:     {} min", movie.detail.running_time));
    output.println(format!("  Distributor: {}", movie.detail.distributor));
    if !movie.poster.is_empty() {
        output.println(format!("  Poster:      {}", movie.poster));
    }
}
