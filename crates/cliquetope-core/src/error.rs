/// Failures raised by the complex oracles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The complex has no facets (not even a single vertex).
    #[error("simplicial complex has no faces")]
    EmptyComplex,

    /// A guard tripped before an expensive computation.
    #[error("{what} too large: {size} (limit: {limit})")]
    TooLarge {
        what: &'static str,
        size: usize,
        limit: usize,
    },
}
