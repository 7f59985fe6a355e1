/*!
# Configuration

Plain-data configuration objects. All of them implement `Default` and can be
(de-)serialized with `serde`, so callers may embed them in their own config files.
*/

use serde::{Deserialize, Serialize};

/// Structural flags of a graph.
///
/// Set at construction; a file load re-derives both flags from the file header
/// and returns the new effective config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Edges `(u, v)` and `(v, u)` are independent if set
    pub directed: bool,
    /// Edge weights are kept if set; otherwise every edge weighs `1`
    pub weighted: bool,
}

impl GraphConfig {
    pub const fn new(directed: bool, weighted: bool) -> Self {
        Self { directed, weighted }
    }

    pub const fn undirected() -> Self {
        Self::new(false, false)
    }

    pub const fn directed() -> Self {
        Self::new(true, false)
    }

    /// Returns the same config with weights enabled
    pub const fn weighted(mut self) -> Self {
        self.weighted = true;
        self
    }
}

/// How the loader reacts to tokens it cannot parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Unparseable numbers degrade (`NaN` weights, `0` counts, `false` flags, skipped edges)
    /// and are reported as warnings
    #[default]
    Permissive,
    /// Every unparseable or missing token fails the load with `MalformedInput`
    Strict,
}

/// Reporting options for the coloring strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ColoringConfig {
    /// Graphs with at most this many nodes get a per-vertex color dump in the logs
    pub verbose_threshold: usize,
}

impl Default for ColoringConfig {
    fn default() -> Self {
        Self {
            verbose_threshold: 10,
        }
    }
}

impl ColoringConfig {
    pub fn verbose_threshold(mut self, threshold: usize) -> Self {
        self.verbose_threshold = threshold;
        self
    }

    /// Returns *true* if a graph with `n` nodes should have its coloring dumped
    pub fn is_verbose_for(&self, n: usize) -> bool {
        n <= self.verbose_threshold
    }
}
