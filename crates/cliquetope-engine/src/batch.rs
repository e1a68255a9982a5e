//! Batch classification of a graph stream.
//!
//! Each graph that passes the scan conditions is pared, classified, and its
//! pared clique graph classified too. Outcomes go to a [`ReportSink`]; a
//! failing graph becomes a [`RecordOutcome::Failed`] entry and the batch
//! moves on.

use std::fmt::Display;
use std::time::Duration;

use anyhow::Result;
use cliquetope_core::graph::{has_dominated_vertex, is_clique_helly, pared_graph};
use cliquetope_core::{Graph, HomologyOracle, MatchingOracle};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cancel::Cancellation;
use crate::config::Config;
use crate::driver::{Classification, HomotopyEngine};
use crate::error::EngineError;
use crate::matching::VertexOrder;
use crate::strategy::Classify;

/// Everything reported about one examined graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphRecord {
    /// Zero-based position in the input stream.
    pub index: usize,
    /// Order of the pared graph.
    pub order: usize,
    pub max_degree: usize,
    /// The input graph is clique-Helly.
    pub is_helly: bool,
    /// The pared clique graph is clique-Helly.
    pub is_clique_helly: bool,
    pub graph: Classification,
    pub clique_graph: Classification,
}

impl GraphRecord {
    /// `false` for the combinations already explained by clique-Helly
    /// theory: a Helly graph whose complex or clique-graph complex shows a
    /// circle, or a graph with a clique-Helly clique graph of the same
    /// homotopy type that shows a circle.
    #[must_use]
    pub fn is_interesting(&self) -> bool {
        let g = &self.graph.homotopy;
        let k = &self.clique_graph.homotopy;
        let helly_circle = self.is_helly && (g.mentions_circle() || k.mentions_circle());
        let same_circle = self.is_clique_helly && g == k && g.mentions_circle();
        !(helly_circle || same_circle)
    }

    #[must_use]
    pub const fn is_unresolved(&self) -> bool {
        !self.graph.homotopy.is_certified() || !self.clique_graph.homotopy.is_certified()
    }
}

/// One line of a batch report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RecordOutcome {
    Classified(GraphRecord),
    CliqueGraphTooLarge { index: usize, limit: usize },
    Failed { index: usize, message: String },
}

impl RecordOutcome {
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Classified(record) => record.index,
            Self::CliqueGraphTooLarge { index, .. } | Self::Failed { index, .. } => *index,
        }
    }
}

/// Destination for batch outcomes.
pub trait ReportSink {
    /// Called once before the first outcome.
    ///
    /// # Errors
    ///
    /// Returns an error when the sink cannot be written.
    fn begin(&mut self) -> Result<()> {
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error when the sink cannot be written.
    fn record(&mut self, outcome: &RecordOutcome) -> Result<()>;

    /// Called once after the last outcome.
    ///
    /// # Errors
    ///
    /// Returns an error when the sink cannot be written.
    fn finish(&mut self, _summary: &BatchSummary) -> Result<()> {
        Ok(())
    }
}

impl ReportSink for Vec<RecordOutcome> {
    fn record(&mut self, outcome: &RecordOutcome) -> Result<()> {
        self.push(outcome.clone());
        Ok(())
    }
}

/// Scan conditions and per-graph budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// Resume after this index (graphs at or before it are skipped).
    pub start: Option<usize>,
    pub min_max_degree: usize,
    pub only_interesting: bool,
    pub timeout: Option<Duration>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl BatchOptions {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            start: None,
            min_max_degree: config.scan.min_max_degree,
            only_interesting: config.scan.only_interesting,
            timeout: config.engine.timeout(),
        }
    }

    /// Connected, order above one, no dominated vertex, and a vertex of
    /// degree at least `min_max_degree`.
    #[must_use]
    pub fn admits(&self, graph: &Graph) -> bool {
        graph.order() > 1
            && graph.is_connected()
            && !has_dominated_vertex(graph)
            && graph.max_degree() >= self.min_max_degree
    }
}

/// Counters for a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Graphs read from the input (after the start index).
    pub seen: usize,
    /// Graphs that passed the scan conditions.
    pub examined: usize,
    /// Outcomes handed to the sink.
    pub recorded: usize,
    /// Classified graphs dropped by the research filter.
    pub filtered: usize,
    pub too_large: usize,
    pub failed: usize,
    /// Classified graphs with at least one unresolved descriptor.
    pub unresolved: usize,
}

/// Classify every admitted graph of `graphs` and report to `sink`.
///
/// Input items that fail to decode are reported as failures.
///
/// # Errors
///
/// Returns an error only when the sink fails; classification failures are
/// reported through the sink.
pub fn run_batch<O, M, H, I, E, S>(
    engine: &mut HomotopyEngine<O, M, H>,
    graphs: I,
    options: &BatchOptions,
    sink: &mut S,
) -> Result<BatchSummary>
where
    O: VertexOrder,
    M: MatchingOracle,
    H: HomologyOracle,
    I: IntoIterator<Item = Result<Graph, E>>,
    E: Display,
    S: ReportSink + ?Sized,
{
    let mut summary = BatchSummary::default();
    let first = options.start.map_or(0, |start| start + 1);
    sink.begin()?;

    for (index, item) in graphs.into_iter().enumerate().skip(first) {
        summary.seen += 1;

        let graph = match item {
            Ok(graph) => graph,
            Err(err) => {
                warn!(index, "unreadable graph: {err}");
                summary.failed += 1;
                summary.recorded += 1;
                sink.record(&RecordOutcome::Failed {
                    index,
                    message: err.to_string(),
                })?;
                continue;
            }
        };

        if !options.admits(&graph) {
            debug!(index, "skipped by scan conditions");
            continue;
        }
        summary.examined += 1;
        info!(index, order = graph.order(), "classifying graph");

        engine.set_cancellation(
            options
                .timeout
                .map_or_else(Cancellation::new, Cancellation::with_timeout),
        );
        let outcome = match classify_one(engine, index, &graph) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(index, "classification failed: {err}");
                RecordOutcome::Failed {
                    index,
                    message: err.to_string(),
                }
            }
        };

        match &outcome {
            RecordOutcome::Classified(record) => {
                if record.is_unresolved() {
                    summary.unresolved += 1;
                }
                if options.only_interesting && !record.is_interesting() {
                    summary.filtered += 1;
                    continue;
                }
            }
            RecordOutcome::CliqueGraphTooLarge { .. } => summary.too_large += 1,
            RecordOutcome::Failed { .. } => summary.failed += 1,
        }
        summary.recorded += 1;
        sink.record(&outcome)?;
    }

    sink.finish(&summary)?;
    info!(
        seen = summary.seen,
        examined = summary.examined,
        recorded = summary.recorded,
        failed = summary.failed,
        "batch finished"
    );
    Ok(summary)
}

fn classify_one<O, M, H>(
    engine: &mut HomotopyEngine<O, M, H>,
    index: usize,
    graph: &Graph,
) -> Result<RecordOutcome, EngineError>
where
    O: VertexOrder,
    M: MatchingOracle,
    H: HomologyOracle,
{
    let pared = pared_graph(graph);
    let classification = engine.classify(&pared)?;
    let Some(clique) = engine.classify_clique_graph(&pared)? else {
        return Ok(RecordOutcome::CliqueGraphTooLarge {
            index,
            limit: engine.clique_graph_limit(),
        });
    };

    Ok(RecordOutcome::Classified(GraphRecord {
        index,
        order: pared.order(),
        max_degree: graph.max_degree(),
        is_helly: is_clique_helly(graph),
        is_clique_helly: is_clique_helly(&clique.pared),
        graph: classification,
        clique_graph: clique.classification,
    }))
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;
    use crate::driver::Stage;
    use crate::homotopy::HomotopyType;
    use crate::strategy::testing::{cycle, engine, octahedron};

    fn all_graphs() -> BatchOptions {
        BatchOptions {
            min_max_degree: 0,
            only_interesting: false,
            ..BatchOptions::default()
        }
    }

    fn ok(graphs: Vec<Graph>) -> impl Iterator<Item = Result<Graph, Infallible>> {
        graphs.into_iter().map(Ok)
    }

    fn record(homotopy: HomotopyType, clique: HomotopyType, helly: bool, k_helly: bool) -> GraphRecord {
        GraphRecord {
            index: 0,
            order: 4,
            max_degree: 2,
            is_helly: helly,
            is_clique_helly: k_helly,
            graph: Classification::new(homotopy, Stage::Matching),
            clique_graph: Classification::new(clique, Stage::Matching),
        }
    }

    #[test]
    fn scan_conditions() {
        let options = BatchOptions::default();
        assert!(!options.admits(&Graph::with_vertices(1)));
        assert!(!options.admits(&Graph::with_vertices(3)));
        assert!(!options.admits(&cycle(6)), "max degree below five");
        assert!(all_graphs().admits(&cycle(6)));
        let pendant = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0), (3, 4)]);
        assert!(!all_graphs().admits(&pendant), "dominated vertex");
    }

    #[test]
    fn research_filter() {
        let circle = HomotopyType::sphere(1);
        let sphere = HomotopyType::sphere(2);
        assert!(!record(circle.clone(), sphere.clone(), true, false).is_interesting());
        assert!(!record(circle.clone(), circle.clone(), false, true).is_interesting());
        assert!(record(circle.clone(), circle.clone(), false, false).is_interesting());
        assert!(record(sphere.clone(), sphere, true, true).is_interesting());
        let unresolved = HomotopyType::Unresolved {
            betti: crate::betti::BettiSequence::new(vec![0, 1]),
        };
        assert!(record(unresolved.clone(), unresolved, true, true).is_interesting());
    }

    #[test]
    fn classifies_cycles_and_their_clique_graphs() {
        let mut sink = Vec::new();
        let summary = run_batch(&mut engine(), ok(vec![cycle(4), cycle(5)]), &all_graphs(), &mut sink)
            .expect("sink never fails");

        assert_eq!(summary.seen, 2);
        assert_eq!(summary.examined, 2);
        assert_eq!(summary.recorded, 2);
        for outcome in &sink {
            let RecordOutcome::Classified(record) = outcome else {
                panic!("unexpected outcome {outcome:?}");
            };
            assert_eq!(record.graph.homotopy, HomotopyType::sphere(1));
            assert_eq!(record.clique_graph.homotopy, HomotopyType::sphere(1));
            assert!(record.is_helly);
        }
        assert_eq!(sink[1].index(), 1);
    }

    #[test]
    fn start_index_skips_earlier_graphs() {
        let options = BatchOptions {
            start: Some(0),
            ..all_graphs()
        };
        let mut sink = Vec::new();
        let summary = run_batch(&mut engine(), ok(vec![cycle(4), cycle(5)]), &options, &mut sink)
            .expect("sink never fails");
        assert_eq!(summary.seen, 1);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].index(), 1);
    }

    #[test]
    fn oversized_clique_graph_is_reported() {
        let options = all_graphs();
        let mut engine = HomotopyEngine::new(&crate::config::EngineConfig {
            clique_graph_limit: 7,
            seed: Some(3),
            ..Default::default()
        });
        let mut sink = Vec::new();
        let summary = run_batch(&mut engine, ok(vec![octahedron(0)]), &options, &mut sink)
            .expect("sink never fails");
        assert_eq!(summary.too_large, 1);
        assert_eq!(sink, vec![RecordOutcome::CliqueGraphTooLarge { index: 0, limit: 7 }]);
    }

    #[test]
    fn decode_errors_do_not_stop_the_batch() {
        let items: Vec<Result<Graph, String>> =
            vec![Err("bad line".to_owned()), Ok(cycle(4))];
        let mut sink = Vec::new();
        let summary = run_batch(&mut engine(), items, &all_graphs(), &mut sink)
            .expect("sink never fails");
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.examined, 1);
        assert!(matches!(&sink[0], RecordOutcome::Failed { index: 0, message } if message == "bad line"));
        assert!(matches!(sink[1], RecordOutcome::Classified(_)));
    }

    #[test]
    fn expired_budget_fails_the_graph() {
        let options = BatchOptions {
            timeout: Some(Duration::ZERO),
            ..all_graphs()
        };
        let mut sink = Vec::new();
        let summary = run_batch(&mut engine(), ok(vec![cycle(4)]), &options, &mut sink)
            .expect("sink never fails");
        assert_eq!(summary.failed, 1);
        assert!(matches!(&sink[0], RecordOutcome::Failed { message, .. } if message.contains("cancelled")));
    }

    #[test]
    fn filter_drops_expected_records() {
        let options = BatchOptions {
            only_interesting: true,
            ..all_graphs()
        };
        let mut sink = Vec::new();
        let summary = run_batch(&mut engine(), ok(vec![cycle(4)]), &options, &mut sink)
            .expect("sink never fails");
        // C4 is clique-Helly and its complex is a circle.
        assert_eq!(summary.filtered, 1);
        assert!(sink.is_empty());
    }
}
