//! Lyric-Harvest main entry point
//!
//! This is the command-line interface for the Lyric-Harvest corpus builder.

use anyhow::Context;
use clap::{Parser, Subcommand};
use lyric_harvest::config::{load_config_with_hash, Config};
use lyric_harvest::crawler::{harvest, Coordinator};
use lyric_harvest::output::{load_statistics, print_overall_summary, print_run_summary, print_statistics};
use lyric_harvest::{Genre, GenreCatalog};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Lyric-Harvest: a polite lyrics corpus builder
///
/// Lyric-Harvest crawls a lyrics site for a catalog of artists grouped by
/// genre, saving one text file per song under <corpus-root>/<genre>/<artist>/
/// and recording every skipped artist or song in a per-genre progress file.
#[derive(Parser, Debug)]
#[command(name = "lyric-harvest")]
#[command(version = "1.0.0")]
#[command(about = "A polite lyrics corpus builder", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape a single artist
    Artist {
        /// Artist display name
        name: String,

        /// Genre partition to save under
        #[arg(short, long)]
        genre: Genre,

        /// Maximum songs to scrape
        #[arg(long)]
        max_songs: Option<usize>,
    },

    /// Scrape the catalog artists of one genre
    Genre {
        genre: Genre,

        /// Maximum artists to scrape
        #[arg(long)]
        max_artists: Option<usize>,

        /// Maximum songs to scrape per artist
        #[arg(long)]
        max_songs: Option<usize>,
    },

    /// Scrape every genre of the catalog
    All {
        #[arg(long)]
        max_artists: Option<usize>,

        #[arg(long)]
        max_songs: Option<usize>,
    },

    /// Scrape an artist from an explicit index page URL
    Url {
        url: String,

        /// Artist display name, used for the corpus directory
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        genre: Genre,

        #[arg(long)]
        max_songs: Option<usize>,
    },

    /// Show statistics from persisted progress records and exit
    Stats,

    /// Validate config and show what would be crawled without crawling
    DryRun,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = load(cli.config.as_deref())?;
    let catalog = GenreCatalog::from_config(&config).context("Invalid artist catalog")?;

    match cli.command {
        Command::Artist {
            name,
            genre,
            max_songs,
        } => {
            let max_songs = max_songs.unwrap_or(config.crawler.max_songs_per_artist);
            let coordinator = Coordinator::new(config, catalog)?;
            let progress = coordinator.scrape_artist(&name, genre, max_songs).await?;
            print_run_summary(&progress);
        }

        Command::Genre {
            genre,
            max_artists,
            max_songs,
        } => {
            let max_artists = max_artists.unwrap_or(config.crawler.max_artists_per_genre);
            let max_songs = max_songs.unwrap_or(config.crawler.max_songs_per_artist);
            let coordinator = Coordinator::new(config, catalog)?;
            let progress = coordinator
                .scrape_genre(genre, max_artists, max_songs)
                .await?;
            print_run_summary(&progress);
        }

        Command::All {
            max_artists,
            max_songs,
        } => {
            let mut config = config;
            if let Some(max) = max_artists {
                config.crawler.max_artists_per_genre = max;
            }
            if let Some(max) = max_songs {
                config.crawler.max_songs_per_artist = max;
            }

            tracing::info!(
                "Starting full harvest: {} genres, {} artists in catalog",
                catalog.genres().count(),
                catalog.artist_count()
            );
            match harvest(config).await {
                Ok(overall) => print_overall_summary(&overall),
                Err(e) => {
                    tracing::error!("Harvest failed: {}", e);
                    return Err(e.into());
                }
            }
        }

        Command::Url {
            url,
            name,
            genre,
            max_songs,
        } => {
            let max_songs = max_songs.unwrap_or(config.crawler.max_songs_per_artist);
            let coordinator = Coordinator::new(config, catalog)?;
            let progress = coordinator
                .scrape_artist_url(&url, &name, genre, max_songs)
                .await?;
            print_run_summary(&progress);
        }

        Command::Stats => handle_stats(&config, &catalog)?,

        Command::DryRun => handle_dry_run(&config, &catalog),
    }

    Ok(())
}

/// Loads the configuration file, or the defaults when none is given
fn load(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::info!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);
    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("lyric_harvest=info,warn"),
            1 => EnvFilter::new("lyric_harvest=debug,info"),
            2 => EnvFilter::new("lyric_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the dry-run command: shows configuration and catalog
fn handle_dry_run(config: &Config, catalog: &GenreCatalog) {
    println!("=== Lyric-Harvest Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Max artists per genre: {}", config.crawler.max_artists_per_genre);
    println!("  Max songs per artist: {}", config.crawler.max_songs_per_artist);
    println!("  Skip existing songs: {}", config.crawler.skip_existing);

    println!("\nPoliteness:");
    println!("  Before each song: {}ms", config.politeness.before_song_ms);
    println!("  After each saved song: {}ms", config.politeness.after_song_ms);
    println!("  Between artists: {}ms", config.politeness.between_artists_ms);
    println!("  Between genres: {}ms", config.politeness.between_genres_ms);

    println!("\nSource:");
    println!("  Base URL: {}", config.source.base_url);
    println!("  User agent: {}", config.source.user_agent);
    println!("  Timeout: {}s", config.source.timeout_secs);
    if !config.source.slug_overrides.is_empty() {
        println!("  Slug overrides ({}):", config.source.slug_overrides.len());
        for (name, slug) in &config.source.slug_overrides {
            println!("    * {} -> {}", name, slug);
        }
    }

    println!("\nOutput:");
    println!("  Corpus root: {}", config.output.corpus_root);

    println!("\nCatalog ({} artists):", catalog.artist_count());
    for genre in catalog.genres() {
        // genres() only yields genres present in the catalog
        let artists = catalog.artists(genre).unwrap_or_default();
        let selected = artists.len().min(config.crawler.max_artists_per_genre);
        println!("  - {} ({} artists, {} selected)", genre, artists.len(), selected);
        for name in artists.iter().take(selected) {
            println!("    * {}", name);
        }
    }

    let planned: usize = catalog
        .genres()
        .map(|g| catalog.artists(g).map_or(0, |a| a.len()))
        .map(|n| n.min(config.crawler.max_artists_per_genre))
        .sum();

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would scrape {} artists, up to {} songs",
        planned,
        planned * config.crawler.max_songs_per_artist
    );
}

/// Handles the stats command: shows statistics from progress records
fn handle_stats(config: &Config, catalog: &GenreCatalog) -> anyhow::Result<()> {
    use lyric_harvest::storage::JsonProgressStore;

    println!("Corpus: {}\n", config.output.corpus_root);

    let store = JsonProgressStore::new(&config.output.corpus_root);
    let stats = load_statistics(&store, catalog.genres())
        .context("Failed to read progress records")?;
    print_statistics(&stats);

    Ok(())
}
