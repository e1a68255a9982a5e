#![forbid(unsafe_code)]

mod cmd;
mod output;

use std::env;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cliquetope_engine::Config;
use cliquetope_engine::config::DEFAULT_CONFIG_FILE;
use output::OutputMode;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "ctope: homotopy types of clique complexes and clique graphs",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Settings file (defaults to `cliquetope.toml` in the working directory).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    const fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Classify every graph of a graph6 stream",
        long_about = "Classify the clique complex of each admitted graph of a graph6 stream\n\
                      and of its clique graph, writing one report row per graph.",
        after_help = "EXAMPLES:\n    # Scan a catalogue into an org table\n    ctope scan graphs9.g6 --output report.org\n\n\
                      # Resume after index 1200, appending to the report\n    ctope scan graphs9.g6 --start 1200 --output report.org\n\n\
                      # Read stdin, keep every record, emit JSON lines\n    geng 8 | ctope scan - --all --json"
    )]
    Scan(cmd::scan::ScanArgs),

    #[command(
        about = "Classify individual graphs",
        long_about = "Classify the clique complex of each graph6 record given on the command line.",
        after_help = "EXAMPLES:\n    # The 5-cycle\n    ctope classify Dhc\n\n\
                      # Include the clique graph\n    ctope classify Dhc --clique-graph --json"
    )]
    Classify(cmd::classify::ClassifyArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("CLIQUETOPE_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "ctope=debug,cliquetope=debug,info"
        } else {
            "ctope=info,cliquetope=info,warn"
        })
    });

    let format = env::var("CLIQUETOPE_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    // Reports go to stdout; logs stay on stderr.
    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = Config::load(&config_path)?;
    debug!(path = %config_path.display(), ?config, "loaded settings");

    let output = cli.output_mode();
    match cli.command {
        Commands::Scan(ref args) => cmd::scan::run_scan(args, config, output),
        Commands::Classify(ref args) => cmd::classify::run_classify(args, &config, output),
    }
}
