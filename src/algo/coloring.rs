/*!
# Vertex Coloring

Four strategies assigning colors `1, 2, ...` to the nodes so that adjacent nodes get different colors:

- [`GraphColoring::color_exhaustive`]: backtracking over increasing color budgets; optimal but exponential,
  only meant for small graphs,
- [`GraphColoring::color_welsh_powell`]: greedy in order of decreasing degree,
- [`GraphColoring::color_dsatur`]: greedy in order of decreasing saturation,
- [`GraphColoring::color_greedy`]: greedy in index order.

Self-loops are ignored by every strategy and by [`Coloring::is_proper`].
Only out-neighbors are considered, hence colorings are only guaranteed to be proper on undirected graphs.

[`GraphColoring::color_with`] runs a strategy, measures its duration and logs a summary
(plus a per-node dump for small graphs, see [`ColoringConfig`]).
*/

use super::*;
use crate::utils::{Timed, timed};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{cmp::Reverse, fmt::Display, time::Duration};
use tracing::{debug, info};

/// Colors are positive integers; uncolored nodes are `None`
pub type Color = u32;

/// Selects one of the coloring algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColoringStrategy {
    Exhaustive,
    WelshPowell,
    #[serde(rename = "dsatur")]
    DSatur,
    Greedy,
}

impl ColoringStrategy {
    pub const ALL: [Self; 4] = [
        Self::Exhaustive,
        Self::WelshPowell,
        Self::DSatur,
        Self::Greedy,
    ];
}

impl Display for ColoringStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Exhaustive => "exhaustive",
            Self::WelshPowell => "welsh-powell",
            Self::DSatur => "dsatur",
            Self::Greedy => "greedy",
        };
        write!(f, "{name}")
    }
}

/// A (possibly partial) assignment of colors to nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    colors: Vec<Option<Color>>,
}

impl Coloring {
    /// Creates an assignment for `n` nodes without any color
    pub fn uncolored(n: NumNodes) -> Self {
        Self {
            colors: vec![None; n as usize],
        }
    }

    pub fn color_of(&self, u: Node) -> Option<Color> {
        self.colors.get(u as usize).copied().flatten()
    }

    /// Returns the number of distinct colors in use
    pub fn num_colors(&self) -> NumNodes {
        self.colors.iter().flatten().unique().count() as NumNodes
    }

    /// Returns *true* if every node has a color
    pub fn is_complete(&self) -> bool {
        self.colors.iter().all(Option::is_some)
    }

    pub fn as_slice(&self) -> &[Option<Color>] {
        &self.colors
    }

    /// Returns *true* if the assignment covers every node of `graph` and no two
    /// distinct adjacent nodes share a color
    pub fn is_proper<G: AdjacencyList>(&self, graph: &G) -> Result<bool> {
        if self.colors.len() != graph.len() || !self.is_complete() {
            return Ok(false);
        }

        for u in graph.vertices_range() {
            if graph
                .neighbors_of(u)?
                .any(|v| v != u && self.color_of(v) == self.color_of(u))
            {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl From<Coloring> for Vec<Option<Color>> {
    fn from(coloring: Coloring) -> Self {
        coloring.colors
    }
}

/// Result of [`GraphColoring::color_with`]
#[derive(Debug, Clone, PartialEq)]
pub struct ColoringReport {
    pub strategy: ColoringStrategy,
    pub coloring: Coloring,
    /// Number of distinct colors used
    pub num_colors: NumNodes,
    /// Duration of the algorithm itself, without logging
    pub elapsed: Duration,
}

impl ColoringReport {
    fn new(strategy: ColoringStrategy, run: Timed<Coloring>) -> Self {
        Self {
            strategy,
            num_colors: run.value.num_colors(),
            coloring: run.value,
            elapsed: run.elapsed,
        }
    }
}

/// Returns *true* if no neighbor of `u` currently holds `color`.
/// Fails with `IndexOutOfRange` if `u >= n`.
pub fn is_safe<G: AdjacencyList>(
    graph: &G,
    u: Node,
    colors: &[Option<Color>],
    color: Color,
) -> Result<bool> {
    Ok(graph
        .neighbors_of(u)?
        .all(|v| colors.get(v as usize).copied().flatten() != Some(color)))
}

/// Returns the smallest color in `1..=n` not held by any neighbor of `u`
fn smallest_safe_color<G: AdjacencyList>(
    graph: &G,
    u: Node,
    colors: &[Option<Color>],
) -> Result<Color> {
    let n = graph.number_of_nodes();
    let mut used = NodeBitSet::new(n + 2);
    for v in graph.neighbors_of(u)? {
        if let Some(c) = colors[v as usize].filter(|&c| c <= n + 1) {
            used.set_bit(c);
        }
    }

    let mut color = 1;
    while used.get_bit(color) {
        color += 1;
    }
    Ok(color)
}

fn degrees<G: AdjacencyList>(graph: &G) -> Result<Vec<NumNodes>> {
    graph.vertices_range().map(|u| graph.degree_of(u)).collect()
}

/// Gives each node of `order` the smallest safe color
fn color_in_order<G, I>(graph: &G, order: I) -> Result<Coloring>
where
    G: AdjacencyList,
    I: IntoIterator<Item = Node>,
{
    let mut coloring = Coloring::uncolored(graph.number_of_nodes());
    for u in order {
        let color = smallest_safe_color(graph, u, &coloring.colors)?;
        coloring.colors[u as usize] = Some(color);
    }
    Ok(coloring)
}

/// Colors `u..n` in index order using colors `1..=budget`; returns *false* if impossible
fn backtrack<G: AdjacencyList>(
    graph: &G,
    u: Node,
    budget: Color,
    colors: &mut [Option<Color>],
) -> Result<bool> {
    if u == graph.number_of_nodes() {
        return Ok(true);
    }

    for color in 1..=budget {
        if is_safe(graph, u, colors, color)? {
            colors[u as usize] = Some(color);
            if backtrack(graph, u + 1, budget, colors)? {
                return Ok(true);
            }
            colors[u as usize] = None;
        }
    }
    Ok(false)
}

/// Vertex coloring on every graph
pub trait GraphColoring: AdjacencyList + VertexLabels + Sized {
    /// Finds a coloring with the fewest colors by trying budgets `k = 2, 3, ..., n` and
    /// backtracking over nodes in index order with colors `1..=k`.
    ///
    /// Runs in exponential time.
    fn color_exhaustive(&self) -> Result<Coloring> {
        let n = self.number_of_nodes();
        let mut colors = vec![None; n as usize];
        let budgets = if n < 2 { n..=n } else { 2..=n };

        for budget in budgets {
            if backtrack(self, 0, budget, &mut colors)? {
                debug!(budget, "exhaustive coloring found an assignment");
                break;
            }
            colors.fill(None);
        }

        Ok(Coloring { colors })
    }

    /// Colors nodes greedily in order of decreasing degree; ties keep index order
    fn color_welsh_powell(&self) -> Result<Coloring> {
        let degrees = degrees(self)?;
        let order = self
            .vertices_range()
            .sorted_by_key(|&u| Reverse(degrees[u as usize]))
            .collect_vec();

        color_in_order(self, order)
    }

    /// Repeatedly colors the uncolored node with highest saturation (ties: higher degree).
    ///
    /// The saturation of a node is incremented every time one of its neighbors gets colored,
    /// even if that color is already present in its neighborhood. This approximates the
    /// number of distinct neighboring colors used by textbook DSatur and may choose a different order.
    /// The remaining nodes are re-sorted stably each round, so remaining ties keep the order of the
    /// previous round.
    fn color_dsatur(&self) -> Result<Coloring> {
        let degrees = degrees(self)?;
        let mut saturation = vec![0 as NumNodes; self.len()];
        let mut coloring = Coloring::uncolored(self.number_of_nodes());
        let mut remaining = self.vertices_range().collect_vec();

        while !remaining.is_empty() {
            remaining.sort_by_key(|&u| {
                (
                    Reverse(saturation[u as usize]),
                    Reverse(degrees[u as usize]),
                )
            });
            let u = remaining.remove(0);

            let color = smallest_safe_color(self, u, &coloring.colors)?;
            coloring.colors[u as usize] = Some(color);
            for v in self.neighbors_of(u)? {
                saturation[v as usize] += 1;
            }
        }

        Ok(coloring)
    }

    /// Colors nodes greedily in index order
    fn color_greedy(&self) -> Result<Coloring> {
        color_in_order(self, self.vertices_range())
    }

    /// Runs `strategy`, measures its duration and logs the number of colors.
    /// If the graph has at most `config.verbose_threshold` nodes, the color of every node is logged as well.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjMatrix::from_edges(GraphConfig::undirected(), 3, [(0, 1), (1, 2), (2, 0)]).unwrap();
    /// let report = g.color_with(ColoringStrategy::DSatur, &ColoringConfig::default()).unwrap();
    /// assert_eq!(report.num_colors, 3);
    /// assert!(report.coloring.is_proper(&g).unwrap());
    /// ```
    fn color_with(
        &self,
        strategy: ColoringStrategy,
        config: &ColoringConfig,
    ) -> Result<ColoringReport> {
        let run = timed(|| match strategy {
            ColoringStrategy::Exhaustive => self.color_exhaustive(),
            ColoringStrategy::WelshPowell => self.color_welsh_powell(),
            ColoringStrategy::DSatur => self.color_dsatur(),
            ColoringStrategy::Greedy => self.color_greedy(),
        })
        .transpose()?;

        info!(
            %strategy,
            colors = run.value.num_colors(),
            elapsed_ms = run.elapsed_ms(),
            "coloring finished"
        );

        if config.is_verbose_for(self.len()) {
            for (label, color) in self.labels().zip(run.value.as_slice()) {
                info!(%strategy, vertex = label, color, "vertex color");
            }
        }

        Ok(ColoringReport::new(strategy, run))
    }
}

impl<G> GraphColoring for G where G: AdjacencyList + VertexLabels + Sized {}
