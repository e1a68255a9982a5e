use cliquetope_core::CoreError;

use crate::cancel::Cancelled;

/// Failures that abandon the classification of one graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Cancelled(#[from] Cancelled),

    /// The cascade was handed a graph without vertices.
    #[error("cannot classify a graph with no vertices")]
    EmptyGraph,
}
