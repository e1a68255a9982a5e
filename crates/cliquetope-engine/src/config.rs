//! `cliquetope.toml` settings.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "cliquetope.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Shuffled matching retries after the deterministic runs fail.
    #[serde(default = "default_random_attempts")]
    pub random_attempts: usize,
    /// Largest clique graph (in vertices) worth classifying.
    #[serde(default = "default_clique_graph_limit")]
    pub clique_graph_limit: usize,
    /// Seed for the shuffles; entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Wall-clock budget per graph.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            random_attempts: default_random_attempts(),
            clique_graph_limit: default_clique_graph_limit(),
            seed: None,
            timeout_secs: None,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Graphs whose maximum degree is below this are skipped.
    #[serde(default = "default_min_max_degree")]
    pub min_max_degree: usize,
    /// Drop records that the research filter considers expected.
    #[serde(default = "default_true")]
    pub only_interesting: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            min_max_degree: default_min_max_degree(),
            only_interesting: default_true(),
        }
    }
}

const fn default_random_attempts() -> usize {
    5
}

const fn default_clique_graph_limit() -> usize {
    23
}

const fn default_min_max_degree() -> usize {
    5
}

const fn default_true() -> bool {
    true
}

impl Config {
    /// Load `path`, or the defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        toml::from_str::<Self>(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}
