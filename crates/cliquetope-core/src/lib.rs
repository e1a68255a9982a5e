#![forbid(unsafe_code)]
//! cliquetope-core library.
//!
//! Graphs, clique complexes, and the two oracles the homotopy engine leans
//! on: an acyclic (discrete Morse) matching and a Betti-number computation.
//!
//! # Conventions
//!
//! - **Errors**: Use [`CoreError`] for oracle failures, [`graph6::Graph6Error`]
//!   for malformed input.
//! - **Logging**: Use `tracing` macros (`debug!`, `trace!`).
//! - **Values**: [`Graph`] and [`SimplicialComplex`] are immutable from the
//!   caller's point of view; every derivation returns a fresh value.

pub mod complex;
pub mod error;
pub mod graph;
pub mod graph6;
pub mod homology;
pub mod morse;

pub use complex::{Face, SimplicialComplex, clique_complex};
pub use error::CoreError;
pub use graph::{Graph, Vertex};
pub use homology::{HomologyOracle, RankHomology};
pub use morse::{ElementMatching, MatchingOracle};
