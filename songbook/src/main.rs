use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use songbook_core::{Library, songbook_state::sdt::DocumentArtist};
use songbook_shared::config::Config;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file to read
    #[arg(long, default_value = Config::FILENAME)]
    config: PathBuf,

    /// Music document to query, overriding the config file
    #[arg(long)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search artist names, song titles and lyrics
    Search { query: String },
    /// Show one artist by name, ignoring case
    Artist { name: String },
    /// List every artist with its song count
    Artists,
    /// Show totals and artists per country
    Stats,
    /// Show catalog totals alongside the artists matching an optional query
    Overview {
        #[arg(default_value = "")]
        query: String,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Read the config before logging is up, so its filter can be used.
    let config = Config::load(&args.config);
    let filter = config
        .as_ref()
        .map(|c| c.logging.filter.clone())
        .unwrap_or_else(|_| songbook_shared::config::Logging::default().filter);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let config = config.with_context(|| format!("Failed to load {}", args.config.display()))?;
    let data_path = args.data.unwrap_or(config.data.path);
    tracing::debug!(path = %data_path.display(), "using music document");

    let output = run(&Library::new(data_path), args.command)?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// Runs one command against a freshly loaded catalog, producing its JSON output.
fn run(library: &Library, command: Command) -> anyhow::Result<serde_json::Value> {
    Ok(match command {
        Command::Search { query } => {
            anyhow::ensure!(!query.trim().is_empty(), "query must not be empty");
            serde_json::to_value(library.search(&query).to_document())?
        }
        Command::Artist { name } => {
            let artist = library
                .find_artist(&name)
                .with_context(|| format!("artist '{name}' not found"))?;
            serde_json::to_value(DocumentArtist::from(&artist))?
        }
        Command::Artists => serde_json::to_value(library.list_artists())?,
        Command::Stats => serde_json::to_value(library.stats())?,
        Command::Overview { query } => serde_json::to_value(library.overview(&query))?,
    })
}
