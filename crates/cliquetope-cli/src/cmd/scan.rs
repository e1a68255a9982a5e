//! `ctope scan`: batch classification of a graph6 stream.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use cliquetope_core::graph6::Graph6Reader;
use cliquetope_engine::{BatchOptions, BatchSummary, Config, HomotopyEngine, ReportSink, run_batch};
use tracing::info;

use crate::output::{JsonLinesSink, OrgTableSink, OutputMode};

/// Arguments for `ctope scan`.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// graph6 file, or `-` for stdin.
    #[arg(value_name = "FILE|-")]
    pub input: String,

    /// Resume after this index; graphs up to and including it are skipped.
    #[arg(long)]
    pub start: Option<usize>,

    /// Write the report here instead of stdout. Appended to when resuming.
    #[arg(long, short, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Keep every record (disables the research filter).
    #[arg(long)]
    pub all: bool,

    /// Skip graphs whose maximum degree is below this.
    #[arg(long, value_name = "N")]
    pub min_degree: Option<usize>,

    /// Largest clique graph (in vertices) worth classifying.
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Shuffled matching retries.
    #[arg(long, value_name = "N")]
    pub attempts: Option<usize>,

    /// Seed for the shuffled retries.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Wall-clock budget per graph.
    #[arg(long, value_name = "N")]
    pub timeout_secs: Option<u64>,
}

impl ScanArgs {
    /// Flags override the settings file.
    fn apply(&self, mut config: Config) -> Config {
        if let Some(n) = self.min_degree {
            config.scan.min_max_degree = n;
        }
        if self.all {
            config.scan.only_interesting = false;
        }
        if let Some(n) = self.limit {
            config.engine.clique_graph_limit = n;
        }
        if let Some(n) = self.attempts {
            config.engine.random_attempts = n;
        }
        if self.seed.is_some() {
            config.engine.seed = self.seed;
        }
        if self.timeout_secs.is_some() {
            config.engine.timeout_secs = self.timeout_secs;
        }
        config
    }
}

pub fn run_scan(args: &ScanArgs, config: Config, output: OutputMode) -> Result<()> {
    let config = args.apply(config);
    let mut engine = HomotopyEngine::new(&config.engine);
    let options = BatchOptions {
        start: args.start,
        ..BatchOptions::from_config(&config)
    };

    let (writer, appending) = open_output(args.output.as_deref(), args.start.is_some())?;
    let mut sink: Box<dyn ReportSink> = if output.is_json() {
        Box::new(JsonLinesSink::new(writer))
    } else {
        Box::new(OrgTableSink::new(writer, !appending))
    };

    let summary = if args.input == "-" {
        let graphs = Graph6Reader::new(io::stdin().lock());
        run_batch(&mut engine, graphs, &options, sink.as_mut())?
    } else {
        let file = File::open(&args.input)
            .with_context(|| format!("Failed to open {}", args.input))?;
        let graphs = Graph6Reader::new(BufReader::new(file));
        run_batch(&mut engine, graphs, &options, sink.as_mut())?
    };

    log_summary(&summary);
    Ok(())
}

/// Stdout, or the report file. An existing report is appended to when
/// resuming, so the returned flag tells whether a heading is already there.
fn open_output(path: Option<&Path>, resuming: bool) -> Result<(Box<dyn Write>, bool)> {
    let Some(path) = path else {
        return Ok((Box::new(io::stdout().lock()), false));
    };

    let appending = resuming && path.exists();
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(appending)
        .truncate(!appending)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    Ok((Box::new(BufWriter::new(file)), appending))
}

fn log_summary(summary: &BatchSummary) {
    info!(
        seen = summary.seen,
        examined = summary.examined,
        recorded = summary.recorded,
        filtered = summary.filtered,
        too_large = summary.too_large,
        failed = summary.failed,
        unresolved = summary.unresolved,
        "scan complete"
    );
}
