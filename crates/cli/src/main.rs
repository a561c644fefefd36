//! pantry - browse a recipe collection from the terminal.

mod cmd;
mod output;
mod views;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pantry_lib::config::PantryConfig;
use tracing_subscriber::EnvFilter;

use cmd::{CliContext, ListArgs};
use output::OutputFormat;

/// Filter, search and pick recipes. State is shared through a URL query
/// and remembered between runs.
#[derive(Parser)]
#[command(name = "pantry")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Recipe data file (default: $PANTRY_RECIPES or the data directory's recipes.json)
  #[arg(long, global = true, value_name = "PATH")]
  recipes: Option<PathBuf>,

  /// Directory holding saved filters and favourites (default: $PANTRY_DATA_DIR)
  #[arg(long, global = true, value_name = "DIR")]
  data_dir: Option<PathBuf>,

  /// Query string of the location to open, e.g. "meal=dinner&keywords=quick"
  #[arg(long, global = true, value_name = "QUERY", default_value = "")]
  url: String,

  /// Output format
  #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
  output: OutputFormat,

  /// Enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// List recipes, optionally changing the filters first
  List(ListArgs),

  /// Show one recipe
  Show {
    /// Recipe slug
    slug: String,
  },

  /// Add or remove a recipe from favourites
  Favorite {
    /// Recipe slug
    slug: String,
  },

  /// Show a random recipe among those matching the filters
  Random,

  /// Clear every filter
  Clear,

  /// Show the keyword picker
  Keywords,

  /// Interactive session reading commands from stdin
  Browse,
}

fn init_tracing(verbose: bool) {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let ctx = CliContext {
    config: PantryConfig::resolve(cli.recipes, cli.data_dir),
    url: cli.url,
    output: cli.output,
  };

  match &cli.command {
    Commands::List(args) => cmd::cmd_list(&ctx, args),
    Commands::Show { slug } => cmd::cmd_show(&ctx, slug),
    Commands::Favorite { slug } => cmd::cmd_favorite(&ctx, slug),
    Commands::Random => cmd::cmd_random(&ctx),
    Commands::Clear => cmd::cmd_clear(&ctx),
    Commands::Keywords => cmd::cmd_keywords(&ctx),
    Commands::Browse => cmd::cmd_browse(&ctx),
  }
}
