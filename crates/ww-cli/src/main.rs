//! CLI frontend for Whisker Woods, a cat's rescue adventure.

mod commands;
mod narrator;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ww",
    about = "Whisker Woods: guide a healer cat through a procedurally grown forest",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log rule decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive game
    Play {
        /// RNG seed for a reproducible forest
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// The cat's name
        #[arg(short, long, default_value = ww_mechanics::config::DEFAULT_NAME)]
        name: String,

        /// Named rule preset (classic, peaceful, small)
        #[arg(short, long, conflicts_with = "rules")]
        preset: Option<String>,

        /// JSON rules file (see `ww rules`)
        #[arg(short, long)]
        rules: Option<PathBuf>,
    },

    /// Print a generated board as ASCII
    Map {
        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Show a tree canopy instead of the forest floor
        #[arg(short, long)]
        tree: bool,

        /// Named rule preset (classic, peaceful, small)
        #[arg(short, long, conflicts_with = "rules")]
        preset: Option<String>,

        /// JSON rules file
        #[arg(short, long)]
        rules: Option<PathBuf>,
    },

    /// Print rules as JSON, ready to edit and pass to --rules
    Rules {
        /// Named rule preset (classic, peaceful, small)
        #[arg(short, long)]
        preset: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            seed,
            name,
            preset,
            rules,
        } => commands::load_rules(preset.as_deref(), rules.as_deref())
            .and_then(|rules| commands::play::run(seed, &name, rules)),
        Commands::Map {
            seed,
            tree,
            preset,
            rules,
        } => commands::load_rules(preset.as_deref(), rules.as_deref())
            .and_then(|rules| commands::map::run(seed, tree, &rules)),
        Commands::Rules { preset } => commands::rules::run(preset.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
