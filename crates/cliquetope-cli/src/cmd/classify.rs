//! `ctope classify`: one-off classification of graph6 records.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;
use cliquetope_core::graph6;
use cliquetope_engine::{Classification, Config, HomotopyEngine};
use serde::Serialize;

use crate::output::OutputMode;

/// Arguments for `ctope classify`.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// graph6 records.
    #[arg(required = true, value_name = "GRAPH6")]
    pub graphs: Vec<String>,

    /// Also classify the clique complex of the clique graph.
    #[arg(long)]
    pub clique_graph: bool,
}

#[derive(Debug, Serialize)]
struct ClassifyReport<'a> {
    graph6: &'a str,
    order: usize,
    graph: Classification,
    #[serde(skip_serializing_if = "Option::is_none")]
    clique_graph: Option<CliqueGraphReport>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum CliqueGraphReport {
    Classified {
        order: usize,
        #[serde(flatten)]
        classification: Classification,
    },
    TooLarge {
        limit: usize,
    },
}

pub fn run_classify(args: &ClassifyArgs, config: &Config, output: OutputMode) -> Result<()> {
    let mut engine = HomotopyEngine::new(&config.engine);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for record in &args.graphs {
        let graph = graph6::decode(record).with_context(|| format!("Failed to decode {record}"))?;
        let classification = engine
            .classify(&graph)
            .with_context(|| format!("Failed to classify {record}"))?;

        let clique_graph = if args.clique_graph {
            let found = engine
                .classify_clique_graph(&graph)
                .with_context(|| format!("Failed to classify the clique graph of {record}"))?;
            Some(found.map_or(
                CliqueGraphReport::TooLarge {
                    limit: config.engine.clique_graph_limit,
                },
                |found| CliqueGraphReport::Classified {
                    order: found.pared.order(),
                    classification: found.classification,
                },
            ))
        } else {
            None
        };

        let report = ClassifyReport {
            graph6: record,
            order: graph.order(),
            graph: classification,
            clique_graph,
        };
        if output.is_json() {
            serde_json::to_writer(&mut out, &report)?;
            writeln!(out)?;
        } else {
            write_text(&mut out, &report)?;
        }
    }
    Ok(())
}

fn write_text(out: &mut impl Write, report: &ClassifyReport<'_>) -> io::Result<()> {
    writeln!(
        out,
        "{}\t{}\t({})",
        report.graph6, report.graph.homotopy, report.graph.stage
    )?;
    match &report.clique_graph {
        Some(CliqueGraphReport::Classified {
            classification, ..
        }) => writeln!(
            out,
            "  K\t{}\t({})",
            classification.homotopy, classification.stage
        ),
        Some(CliqueGraphReport::TooLarge { limit }) => {
            writeln!(out, "  K\tclique graph exceeds {limit} vertices")
        }
        None => Ok(()),
    }
}
