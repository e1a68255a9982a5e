//! Report rendering for the CLI.
//!
//! Batch outcomes go through a [`ReportSink`]: an org-mode table for humans
//! and for appending to research notes, or one JSON object per line.

use std::io::Write;

use anyhow::{Context, Result};
use cliquetope_engine::{BatchSummary, GraphRecord, RecordOutcome, ReportSink};

/// Output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Org table rows or plain lines.
    Text,
    /// Machine-readable JSON, one object per line.
    Json,
}

impl OutputMode {
    /// Returns `true` if JSON output was requested.
    pub const fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

pub const ORG_HEADING: &str = "| index | order | max d | Helly | K Helly | HT G | HT KG |";
pub const ORG_RULE: &str = "|-------+-------+-------+-------+---------+------+-------|";

/// Org-mode table, one row per outcome.
///
/// Rows are flushed as they are written so an interrupted scan leaves a
/// usable report behind.
pub struct OrgTableSink<W> {
    out: W,
    heading: bool,
}

impl<W: Write> OrgTableSink<W> {
    /// `heading` is `false` when appending to an existing table.
    pub const fn new(out: W, heading: bool) -> Self {
        Self { out, heading }
    }

    fn row(&mut self, outcome: &RecordOutcome) -> std::io::Result<()> {
        match outcome {
            RecordOutcome::Classified(record) => write_record_row(&mut self.out, record),
            RecordOutcome::CliqueGraphTooLarge { index, limit } => {
                writeln!(self.out, "|{index}|Clique graph exceeds {limit} vertices|||||")
            }
            RecordOutcome::Failed { index, message } => {
                writeln!(self.out, "|{index}|Failed: {}|||||", message.replace('|', "/"))
            }
        }
    }
}

fn write_record_row(out: &mut impl Write, record: &GraphRecord) -> std::io::Result<()> {
    writeln!(
        out,
        "|{}|{}|{}|{}|{}|{}|{}|",
        record.index,
        record.order,
        record.max_degree,
        record.is_helly,
        record.is_clique_helly,
        record.graph.homotopy,
        record.clique_graph.homotopy,
    )
}

impl<W: Write> ReportSink for OrgTableSink<W> {
    fn begin(&mut self) -> Result<()> {
        if self.heading {
            writeln!(self.out, "{ORG_HEADING}\n{ORG_RULE}").context("Failed to write report")?;
        }
        Ok(())
    }

    fn record(&mut self, outcome: &RecordOutcome) -> Result<()> {
        self.row(outcome).context("Failed to write report")?;
        self.out.flush().context("Failed to flush report")
    }

    fn finish(&mut self, _summary: &BatchSummary) -> Result<()> {
        self.out.flush().context("Failed to flush report")
    }
}

/// One serialized [`RecordOutcome`] per line, then the summary.
pub struct JsonLinesSink<W> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ReportSink for JsonLinesSink<W> {
    fn record(&mut self, outcome: &RecordOutcome) -> Result<()> {
        serde_json::to_writer(&mut self.out, outcome).context("Failed to serialize record")?;
        writeln!(self.out).context("Failed to write report")?;
        self.out.flush().context("Failed to flush report")
    }

    fn finish(&mut self, summary: &BatchSummary) -> Result<()> {
        serde_json::to_writer(&mut self.out, &serde_json::json!({ "summary": summary }))
            .context("Failed to serialize summary")?;
        writeln!(self.out).context("Failed to write report")?;
        self.out.flush().context("Failed to flush report")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cliquetope_engine::{Classification, HomotopyType, Stage};

    fn record() -> GraphRecord {
        GraphRecord {
            index: 12,
            order: 9,
            max_degree: 6,
            is_helly: false,
            is_clique_helly: true,
            graph: Classification::new(HomotopyType::sphere(1), Stage::StarCluster),
            clique_graph: Classification::new(
                HomotopyType::Spheres {
                    dimension: 1,
                    count: 2,
                },
                Stage::Cutpoint,
            ),
        }
    }

    fn render(sink: &mut dyn ReportSink, outcomes: &[RecordOutcome]) {
        sink.begin().expect("begin");
        for outcome in outcomes {
            sink.record(outcome).expect("record");
        }
        sink.finish(&BatchSummary::default()).expect("finish");
    }

    #[test]
    fn org_table_rows() {
        let mut buf = Vec::new();
        render(
            &mut OrgTableSink::new(&mut buf, true),
            &[
                RecordOutcome::Classified(record()),
                RecordOutcome::CliqueGraphTooLarge {
                    index: 13,
                    limit: 23,
                },
            ],
        );
        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], ORG_HEADING);
        assert_eq!(lines[1], ORG_RULE);
        assert_eq!(lines[2], "|12|9|6|false|true|\\(S^{1}\\)|\\(\\vee_{2}S^{1}\\)|");
        assert_eq!(lines[3], "|13|Clique graph exceeds 23 vertices|||||");
    }

    #[test]
    fn appended_table_has_no_heading() {
        let mut buf = Vec::new();
        render(
            &mut OrgTableSink::new(&mut buf, false),
            &[RecordOutcome::Failed {
                index: 4,
                message: "a|b".to_string(),
            }],
        );
        assert_eq!(String::from_utf8(buf).expect("utf8"), "|4|Failed: a/b|||||\n");
    }

    #[test]
    fn json_lines_end_with_summary() {
        let mut buf = Vec::new();
        render(
            &mut JsonLinesSink::new(&mut buf),
            &[RecordOutcome::Classified(record())],
        );
        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["outcome"], "classified");
        assert_eq!(lines[0]["graph"]["stage"], "star_cluster");
        assert_eq!(lines[1]["summary"]["seen"], 0);
    }
}
