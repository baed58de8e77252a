use clap::{ArgAction, Parser, Subcommand};
use commands::{account, config, movie, reaction, review, search, watchlist, AppContext};
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "reelcrit")]
#[command(about = "reelcrit - search movies, write reviews, keep a watchlist")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search movies by name
    #[command(long_about = "Search the movie catalog by case-insensitive substring match on the name. Results are cursor-paginated; the first page holds up to 19 movies, later pages up to 20.")]
    Search {
        /// Name filter; omit to list everything
        query: Option<String>,

        /// How many pages to fetch
        #[arg(long, default_value_t = 1)]
        pages: u32,

        /// Keep fetching until the catalog is exhausted
        #[arg(long, action = ArgAction::SetTrue, conflicts_with = "pages")]
        all: bool,
    },
    /// Inspect or register movies
    Movie {
        #[command(subcommand)]
        cmd: MovieCommands,
    },
    /// List other people's reviews for a movie
    Reviews {
        /// Movie id
        movie_id: String,

        /// Reveal spoiler-flagged review bodies
        #[arg(long, action = ArgAction::SetTrue)]
        spoilers: bool,
    },
    /// Write reviews and list your own
    Review {
        #[command(subcommand)]
        cmd: ReviewCommands,
    },
    /// React to a review with good or bad
    #[command(long_about = "Record a good/bad reaction to a review. Counts and your own reaction are re-read from the server after the update; re-sending the active kind leaves it unchanged (reactions cannot be withdrawn, only flipped).")]
    React {
        /// Movie the review belongs to
        movie_id: String,

        /// Review to react to
        review_id: String,

        /// Reaction kind
        #[arg(value_enum)]
        kind: reaction::ReactionChoice,
    },
    /// Manage your watchlist
    Watchlist {
        #[command(subcommand)]
        cmd: WatchlistCommands,
    },
    /// Store the token handed back by the external login flow
    Login {
        /// Token from the callback URL; prompted for when omitted
        #[arg(long)]
        token: Option<String>,
    },
    /// Clear the stored session
    Logout,
    /// Show the current session state
    Whoami,
    /// View or change configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum MovieCommands {
    /// Show one movie's details
    Show {
        movie_id: String,

        /// Use the admin-facing detail endpoint
        #[arg(long, action = ArgAction::SetTrue)]
        admin: bool,
    },
    /// List every registered movie (admin)
    List,
    /// Register a new movie (admin)
    Add {
        /// Movie name
        #[arg(long)]
        name: String,

        #[arg(long)]
        director: String,

        /// Repeat for each actor: --actor "A" --actor "B"
        #[arg(long = "actor")]
        actors: Vec<String>,

        /// Poster URL, if already uploaded
        #[arg(long, conflicts_with = "poster_file")]
        poster: Option<String>,

        /// Local poster image to upload first
        #[arg(long)]
        poster_file: Option<PathBuf>,

        /// Release date
        #[arg(long, default_value = "")]
        open: String,

        /// Repeat for each category label
        #[arg(long = "category")]
        categories: Vec<String>,

        #[arg(long, default_value = "")]
        country: String,

        /// Running time in minutes
        #[arg(long, default_value_t = 0)]
        running_time: u32,

        #[arg(long, default_value = "")]
        distributor: String,
    },
    /// Upload a poster image and print its URL
    Upload { file: PathBuf },
}

#[derive(Subcommand)]
enum ReviewCommands {
    /// Submit a review for a movie. Scores are integers 0-5; 0 means unset.
    Add {
        movie_id: String,

        /// One-line verdict
        #[arg(long)]
        title: String,

        /// Full text, up to 1000 characters
        #[arg(long)]
        description: String,

        #[arg(long, default_value_t = 0)]
        acting: u8,

        #[arg(long, default_value_t = 0)]
        cinematography: u8,

        #[arg(long, default_value_t = 0)]
        originality: u8,

        #[arg(long, default_value_t = 0)]
        entertainment: u8,

        #[arg(long, default_value_t = 0)]
        story: u8,

        /// Overall rating
        #[arg(long, default_value_t = 0)]
        rating: u8,

        /// Mark the body as containing spoilers
        #[arg(long, action = ArgAction::SetTrue)]
        spoiler: bool,
    },
    /// List your own reviews
    Mine,
}

#[derive(Subcommand)]
enum WatchlistCommands {
    /// Show your watchlist with full movie details
    Show,
    /// Add a movie
    Add { movie_id: String },
    /// Remove a movie
    Remove { movie_id: String },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Set the backend base URL
    SetUrl { url: String },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);
    let mut ctx = AppContext::load()?;

    match cli.command {
        Commands::Search { query, pages, all } => {
            search::run_search(query, pages, all, &mut ctx, &output).await
        }
        Commands::Movie { cmd } => match cmd {
            MovieCommands::Show { movie_id, admin } => {
                movie::run_show(movie_id, admin, &mut ctx, &output).await
            }
            MovieCommands::List => movie::run_list(&mut ctx, &output).await,
            MovieCommands::Add {
                name,
                director,
                actors,
                poster,
                poster_file,
                open,
                categories,
                country,
                running_time,
                distributor,
            } => {
                movie::run_add(
                    name,
                    director,
                    actors,
                    poster,
                    poster_file,
                    open,
                    categories,
                    country,
                    running_time,
                    distributor,
                    &mut ctx,
                    &output,
                )
                .await
            }
            MovieCommands::Upload { file } => movie::run_upload(file, &mut ctx, &output).await,
        },
        Commands::Reviews { movie_id, spoilers } => {
            review::run_list(movie_id, spoilers, &mut ctx, &output).await
        }
        Commands::Review { cmd } => match cmd {
            ReviewCommands::Add {
                movie_id,
                title,
                description,
                acting,
                cinematography,
                originality,
                entertainment,
                story,
                rating,
                spoiler,
            } => {
                review::run_add(
                    movie_id,
                    title,
                    description,
                    acting,
                    cinematography,
                    originality,
                    entertainment,
                    story,
                    rating,
                    spoiler,
                    &mut ctx,
                    &output,
                )
                .await
            }
            ReviewCommands::Mine => review::run_mine(&mut ctx, &output).await,
        },
        Commands::React {
            movie_id,
            review_id,
            kind,
        } => reaction::run_react(movie_id, review_id, kind, &mut ctx, &output).await,
        Commands::Watchlist { cmd } => match cmd {
            WatchlistCommands::Show => watchlist::run_show(&mut ctx, &output).await,
            WatchlistCommands::Add { movie_id } => {
                watchlist::run_add(movie_id, &mut ctx, &output).await
            }
            WatchlistCommands::Remove { movie_id } => {
                watchlist::run_remove(movie_id, &mut ctx, &output).await
            }
        },
        Commands::Login { token } => account::run_login(token, &mut ctx, &output).await,
        Commands::Logout => account::run_logout(&mut ctx, &output),
        Commands::Whoami => account::run_whoami(&ctx, &output),
        Commands::Config { cmd } => match cmd {
            ConfigCommands::Show => config::run_show(&ctx, &output),
            ConfigCommands::SetUrl { url } => config::run_set_url(url, &mut ctx, &output),
        },
    }
}
