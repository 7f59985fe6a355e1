/*!
# IO

Utilities for reading graphs from and writing graphs to text, plus a JSON snapshot export.

## Input Format

A line-oriented edge list:
- line 1: `V A D P` (number of nodes, number of edges, directed ∈ {0,1}, weighted ∈ {0,1}),
- the next `A` lines: `origin destination [weight]` with 0-based indices; the weight is
  only read if `P = 1`.

Missing trailing edge lines are tolerated. Loading re-derives the direction/weight flags
from the header and returns the new effective [`GraphConfig`](crate::GraphConfig).
Nodes are labelled `"0"` to `"V-1"`.

How unparseable numbers are treated is selected by [`ParseMode`](crate::ParseMode) on a [`GraphLoader`].

## Output

- [`EdgeListWrite`] writes a graph back into the input format,
- [`JsonExport`] produces a `{ nodes: [...], edges: [...] }` snapshot of the live graph.
*/

pub mod edge_list;
pub mod header;
pub mod json;

use std::{io::BufRead, path::Path};

use crate::{ops::GraphStore, *};

pub use edge_list::*;
pub use header::*;
pub use json::*;

/// Shorthand for loading with default [`GraphLoader`] settings.
///
/// Automatically implemented for every graph representation.
pub trait GraphLoad: Sized {
    /// Replaces the content of `self` by the graph read from `reader` and returns the
    /// effective configuration taken from the header.
    ///
    /// The input is parsed completely before `self` is touched, so on error `self` is unchanged.
    fn load<R: BufRead>(&mut self, reader: R) -> Result<GraphConfig>;

    /// Like [`GraphLoad::load`] but reads from a file.
    ///
    /// # Errors
    /// Returns `GraphError::Io` if the file cannot be opened or read.
    fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<GraphConfig>;

    /// Creates a new graph from a reader
    fn try_read<R: BufRead>(reader: R) -> Result<Self>;

    /// Creates a new graph from a file
    fn try_read_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

impl<G: GraphStore> GraphLoad for G {
    fn load<R: BufRead>(&mut self, reader: R) -> Result<GraphConfig> {
        GraphLoader::default().load_into(self, reader)
    }

    fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<GraphConfig> {
        GraphLoader::default().load_file_into(self, path)
    }

    fn try_read<R: BufRead>(reader: R) -> Result<Self> {
        GraphLoader::default().read_graph(reader)
    }

    fn try_read_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        GraphLoader::default().read_graph_file(path)
    }
}

/// Returns `Err(GraphError::MalformedInput)` early when a condition fails
macro_rules! malformed_unless {
    ($cond : expr, $line : expr, $reason : expr) => {
        if !($cond) {
            return Err(GraphError::MalformedInput {
                line: $line,
                reason: $reason.into(),
            });
        }
    };
}

use malformed_unless;
