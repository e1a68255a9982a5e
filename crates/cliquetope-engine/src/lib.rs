#![forbid(unsafe_code)]
//! cliquetope-engine library.
//!
//! The homotopy-type cascade: structural decompositions of a graph's clique
//! complex, discrete-Morse matchings with randomized retries, and
//! vertex-decomposability certificates for raw Betti numbers. On top of the
//! cascade sits a batch runner that classifies a stream of graphs and their
//! clique graphs.
//!
//! # Conventions
//!
//! - **Errors**: Use [`EngineError`]; expected non-resolution is a value
//!   ([`HomotopyType::Unresolved`]), not an error.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `debug!`, `trace!`).
//! - **Randomness**: Inject it through [`VertexOrder`]; nothing here touches
//!   a global RNG.

pub mod batch;
pub mod betti;
pub mod cancel;
pub mod config;
pub mod decomposable;
pub mod driver;
pub mod error;
pub mod homotopy;
pub mod matching;
pub mod strategy;

pub use batch::{BatchOptions, BatchSummary, GraphRecord, RecordOutcome, ReportSink, run_batch};
pub use betti::BettiSequence;
pub use cancel::{Cancellation, Cancelled};
pub use config::{Config, EngineConfig, ScanConfig};
pub use driver::{Classification, CliqueGraphClassification, HomotopyEngine, Stage};
pub use error::EngineError;
pub use homotopy::HomotopyType;
pub use matching::{IdentityOrder, MatchOutcome, ShuffledOrder, VertexOrder};
