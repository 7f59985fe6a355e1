use super::*;
use tracing::{debug, trace};

/// Single-source shortest path distances and the predecessor tree computed by [`ShortestPath::dijkstra`]
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: Node,
    distances: Vec<Weight>,
    predecessors: Vec<Option<OptionalNode>>,
}

impl ShortestPaths {
    fn new(n: NumNodes, source: Node) -> Self {
        let mut distances = vec![Weight::INFINITY; n as usize];
        distances[source as usize] = 0.0;
        Self {
            source,
            distances,
            predecessors: vec![None; n as usize],
        }
    }

    pub fn source(&self) -> Node {
        self.source
    }

    /// Distances indexed by node; `+inf` for unreachable nodes
    pub fn distances(&self) -> &[Weight] {
        &self.distances
    }

    /// Returns the distance of `v` from the source (`+inf` if unreachable or out of range)
    pub fn distance_to(&self, v: Node) -> Weight {
        self.distances
            .get(v as usize)
            .copied()
            .unwrap_or(Weight::INFINITY)
    }

    /// Returns the node preceding `v` on a shortest path from the source.
    /// The source itself and unreachable nodes have no predecessor.
    pub fn predecessor_of(&self, v: Node) -> Option<Node> {
        self.predecessors
            .get(v as usize)
            .copied()
            .flatten()
            .map(|p| p.get())
    }

    pub fn is_reachable(&self, v: Node) -> bool {
        self.distance_to(v).is_finite()
    }

    /// Returns the path `source, ..., v` following the predecessor chain,
    /// or `None` if `v` is unreachable.
    pub fn path_to(&self, v: Node) -> Option<Vec<Node>> {
        if !self.is_reachable(v) {
            return None;
        }

        let mut path = vec![v];
        let mut current = v;
        while current != self.source {
            current = self.predecessor_of(current)?;
            path.push(current);

            // a chain longer than n nodes can only come from a cycle (e.g. caused by negative weights)
            if path.len() > self.distances.len() {
                return None;
            }
        }

        path.reverse();
        Some(path)
    }

    /// Selects the unvisited node with smallest finite distance; ties go to the smallest index
    fn closest_unvisited(&self, visited: &NodeBitSet) -> Option<Node> {
        let mut best: Option<(Node, Weight)> = None;
        for (u, &dist) in self.distances.iter().enumerate() {
            let u = u as Node;
            if visited.get_bit(u) || !dist.is_finite() {
                continue;
            }
            if best.is_none_or(|(_, best_dist)| dist < best_dist) {
                best = Some((u, dist));
            }
        }
        best.map(|(u, _)| u)
    }
}

/// Dijkstra's algorithm on every weighted graph.
///
/// Weights are assumed to be non-negative. Negative weights are not detected and may yield
/// distances that are not shortest.
pub trait ShortestPath: WeightedAdjacency + Sized {
    /// Computes distances and predecessors of all nodes from `source`.
    /// Fails with `IndexOutOfRange` if `source >= n`.
    ///
    /// Nodes that cannot be reached keep distance `+inf` and no predecessor; this is not an error.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(
    ///     GraphConfig::directed().weighted(),
    ///     3,
    ///     [(0, 1, 4.0), (0, 2, 1.0), (2, 1, 2.0)],
    /// )
    /// .unwrap();
    /// let paths = g.dijkstra(0).unwrap();
    /// assert_eq!(paths.distance_to(1), 3.0);
    /// assert_eq!(paths.path_to(1), Some(vec![0, 2, 1]));
    /// ```
    fn dijkstra(&self, source: Node) -> Result<ShortestPaths> {
        self.check_node(source)?;

        let mut paths = ShortestPaths::new(self.number_of_nodes(), source);
        let mut visited = self.vertex_bitset_unset();

        while let Some(u) = paths.closest_unvisited(&visited) {
            visited.set_bit(u);
            let dist_u = paths.distances[u as usize];
            trace!(node = u, distance = dist_u, "dijkstra settles");

            for (v, w) in self.weighted_neighbors_of(u)? {
                let candidate = dist_u + w;
                if candidate < paths.distances[v as usize] {
                    paths.distances[v as usize] = candidate;
                    paths.predecessors[v as usize] = OptionalNode::new(u);
                }
            }
        }

        debug!(
            source,
            reached = visited.cardinality(),
            nodes = self.number_of_nodes(),
            "dijkstra finished"
        );
        Ok(paths)
    }
}

impl<G> ShortestPath for G where G: WeightedAdjacency + Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::*;

    fn five_cycle<G: GraphFromScratch>() -> G {
        G::from_edges(
            GraphConfig::undirected(),
            5,
            [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)],
        )
        .unwrap()
    }

    #[test]
    fn five_cycle_distances() {
        for paths in [
            five_cycle::<AdjList>().dijkstra(0).unwrap(),
            five_cycle::<AdjMatrix>().dijkstra(0).unwrap(),
        ] {
            assert_eq!(paths.distances(), &[0.0, 1.0, 2.0, 2.0, 1.0]);
            assert_eq!(paths.predecessor_of(0), None);
            assert_eq!(paths.predecessor_of(2), Some(1));
            assert_eq!(paths.predecessor_of(3), Some(4));
            assert_eq!(paths.path_to(3), Some(vec![0, 4, 3]));
            assert_eq!(paths.path_to(0), Some(vec![0]));
        }
    }

    #[test]
    fn ties_settle_smallest_index_first() {
        //   1
        //  / \
        // 0   3 - 4
        //  \ /
        //   2
        let edges = [(0, 2), (2, 3), (0, 1), (1, 3), (3, 4)];
        for paths in [
            AdjList::from_edges(GraphConfig::undirected(), 5, edges)
                .unwrap()
                .dijkstra(0)
                .unwrap(),
            AdjMatrix::from_edges(GraphConfig::undirected(), 5, edges)
                .unwrap()
                .dijkstra(0)
                .unwrap(),
        ] {
            assert_eq!(paths.distance_to(3), 2.0);
            assert_eq!(paths.predecessor_of(3), Some(1));
            assert_eq!(paths.path_to(4), Some(vec![0, 1, 3, 4]));
        }
    }

    #[test]
    fn disconnected_remainder_stays_infinite() {
        let graph = AdjList::from_edges(GraphConfig::undirected(), 4, [(0, 1), (2, 3)]).unwrap();
        let paths = graph.dijkstra(0).unwrap();

        assert_eq!(paths.source(), 0);
        assert_eq!(paths.distance_to(1), 1.0);
        for v in [2, 3] {
            assert_eq!(paths.distance_to(v), Weight::INFINITY);
            assert_eq!(paths.predecessor_of(v), None);
            assert!(!paths.is_reachable(v));
            assert_eq!(paths.path_to(v), None);
        }
        assert_eq!(paths.distance_to(17), Weight::INFINITY);
    }

    #[test]
    fn weighted_detour_is_shorter() {
        // 0 -10-> 3, but 0 -1-> 1 -2-> 2 -3-> 3
        let graph = AdjMatrix::from_edges(
            GraphConfig::directed().weighted(),
            4,
            [(0, 3, 10.0), (0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0)],
        )
        .unwrap();

        let paths = graph.dijkstra(0).unwrap();
        assert_eq!(paths.distance_to(3), 6.0);
        assert_eq!(paths.path_to(3), Some(vec![0, 1, 2, 3]));

        // edges are directed
        let paths = graph.dijkstra(3).unwrap();
        assert!(paths.distances()[..3].iter().all(|d| d.is_infinite()));
        assert_eq!(paths.distance_to(3), 0.0);
    }

    #[test]
    fn source_out_of_range() {
        let graph = five_cycle::<AdjList>();
        assert!(matches!(
            graph.dijkstra(5),
            Err(GraphError::IndexOutOfRange { index: 5, len: 5 })
        ));
    }
}
