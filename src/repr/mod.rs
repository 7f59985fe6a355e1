/*!
# Graph Representations

A single [`Graph`] type is generic over the storage of a node's neighborhood:

- [`AdjList`] stores `(neighbor, weight)` pairs per node in insertion order,
- [`AdjMatrix`] stores one matrix row per node and reports neighbors in ascending order.

Both satisfy exactly the same contract (see [`GraphStore`](crate::ops::GraphStore)) and
report the same neighbor *sets* for the same content.
Direction and weights are runtime flags taken from [`GraphConfig`].

A graph is not thread-safe for mutation; share it behind external synchronization if needed.
*/

use crate::{ops::*, testing::test_graph_store, *};
use tracing::trace;

mod neighborhood;

pub use neighborhood::*;

/// A graph with labelled nodes `0..n` and per-node neighborhoods of type `Nbs`
#[derive(Debug, Clone)]
pub struct Graph<Nbs: Neighborhood> {
    config: GraphConfig,
    labels: Vec<String>,
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-List
pub type AdjList = Graph<ArrNeighborhood>;

/// Representation using an Adjacency-Matrix
pub type AdjMatrix = Graph<RowNeighborhood>;

impl<Nbs: Neighborhood> Default for Graph<Nbs> {
    fn default() -> Self {
        Self::with_config(GraphConfig::default())
    }
}

impl<Nbs: Neighborhood> GraphType for Graph<Nbs> {
    fn config(&self) -> GraphConfig {
        self.config
    }
}

impl<Nbs: Neighborhood> GraphNodeOrder for Graph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for Graph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> VertexLabels for Graph<Nbs> {
    fn label_of(&self, u: Node) -> Result<&str> {
        self.check_node(u)?;
        Ok(&self.labels[u as usize])
    }

    fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }
}

impl<Nbs: Neighborhood> AdjacencyList for Graph<Nbs> {
    fn neighbors_of(&self, u: Node) -> Result<impl Iterator<Item = Node> + '_> {
        self.check_node(u)?;
        Ok(self.nbs[u as usize].neighbors().map(|(v, _)| v))
    }

    fn degree_of(&self, u: Node) -> Result<NumNodes> {
        self.check_node(u)?;
        Ok(self.nbs[u as usize].num_of_neighbors())
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for Graph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;
        Ok(self.nbs[u as usize].has_neighbor(v))
    }
}

impl<Nbs: Neighborhood> WeightedAdjacency for Graph<Nbs> {
    fn weight_of(&self, u: Node, v: Node) -> Result<Weight> {
        self.check_node(u)?;
        self.check_node(v)?;
        self.nbs[u as usize]
            .weight_to(v)
            .ok_or(GraphError::EdgeNotFound {
                origin: u,
                destination: v,
            })
    }

    fn weighted_neighbors_of(&self, u: Node) -> Result<impl Iterator<Item = (Node, Weight)> + '_> {
        self.check_node(u)?;
        Ok(self.nbs[u as usize].neighbors())
    }
}

impl<Nbs: Neighborhood> GraphNew for Graph<Nbs> {
    fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            labels: Vec::new(),
            nbs: Vec::new(),
            num_edges: 0,
        }
    }

    fn reset(&mut self, config: GraphConfig) {
        self.config = config;
        self.labels.clear();
        self.nbs.clear();
        self.num_edges = 0;
    }
}

impl<Nbs: Neighborhood> GraphVertexEditing for Graph<Nbs> {
    fn insert_vertex<S: Into<String>>(&mut self, label: S) -> Node {
        let u = self.number_of_nodes();
        self.nbs.iter_mut().for_each(Nbs::grow);
        self.nbs.push(Nbs::new(u + 1));
        self.labels.push(label.into());
        u
    }

    fn remove_vertex(&mut self, label: &str) -> Result<Node> {
        let u = self
            .find_vertex(label)
            .ok_or_else(|| GraphError::VertexNotFound(label.to_owned()))?;

        // every neighbor of `u` (including a loop) accounts for one logical edge;
        // in directed graphs the edges pointing into `u` have to be counted separately
        let mut incident = self.nbs[u as usize].num_of_neighbors();
        if self.is_directed() {
            incident += self
                .nbs
                .iter()
                .enumerate()
                .filter(|&(w, nbs)| w != u as usize && nbs.has_neighbor(u))
                .count() as NumNodes;
        }

        self.nbs.remove(u as usize);
        self.labels.remove(u as usize);
        self.nbs.iter_mut().for_each(|nbs| nbs.shrink(u));
        self.num_edges -= incident as NumEdges;

        trace!(label, node = u, incident, "removed vertex");
        Ok(u)
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for Graph<Nbs> {
    fn insert_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;

        let weight = if self.is_weighted() {
            weight
        } else {
            DEFAULT_WEIGHT
        };

        let prev = self.nbs[u as usize].set_neighbor(v, weight);
        if self.is_undirected() && u != v {
            self.nbs[v as usize].set_neighbor(u, weight);
        }

        if prev.is_none() {
            self.num_edges += 1;
        }
        Ok(prev.is_none())
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.check_node(u)?;
        self.check_node(v)?;

        if !self.nbs[u as usize].try_remove_neighbor(v) {
            return Ok(false);
        }
        if self.is_undirected() && u != v {
            let mirrored = self.nbs[v as usize].try_remove_neighbor(u);
            debug_assert!(mirrored);
        }

        self.num_edges -= 1;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn labels_are_not_unique() {
        let mut graph = AdjList::new(false, false);
        assert_eq!(graph.insert_vertex("a"), 0);
        assert_eq!(graph.insert_vertex("b"), 1);
        assert_eq!(graph.insert_vertex("a"), 2);

        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.label_of(2).unwrap(), "a");
        assert_eq!(graph.find_vertex("a"), Some(0));
        assert!(matches!(
            graph.label_of(3),
            Err(GraphError::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn unweighted_graph_stores_unit_weights() {
        let mut graph = AdjMatrix::new(false, false);
        graph.insert_vertices(["x", "y"]);
        assert!(graph.insert_edge(0, 1, 42.0).unwrap());
        assert_eq!(graph.weight_of(1, 0).unwrap(), 1.0);

        let mut graph = AdjMatrix::new(false, true);
        graph.insert_vertices(["x", "y"]);
        graph.insert_edge(0, 1, 42.0).unwrap();
        assert_eq!(graph.weight_of(1, 0).unwrap(), 42.0);
    }

    #[test]
    fn duplicate_insert_overwrites_weight() {
        let mut graph = AdjList::from_edges(GraphConfig::directed().weighted(), 2, [(0, 1, 3.0)])
            .unwrap();
        assert!(!graph.insert_edge(0, 1, 5.0).unwrap());
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.weight_of(0, 1).unwrap(), 5.0);
        assert!(graph.weight_of(1, 0).unwrap_err().is_not_found());
    }

    #[test]
    fn undirected_self_loop_is_single_edge() {
        let mut graph = AdjList::from_edges(GraphConfig::undirected(), 2, [(1, 1)]).unwrap();
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.neighbors_of(1).unwrap().collect_vec(), vec![1]);
        assert!(graph.remove_edge(1, 1).unwrap());
        assert!(graph.is_singleton_graph());
    }

    fn remove_vertex_reindexes<Nbs: Neighborhood>(directed: bool) {
        // 0 - 1 - 2 - 3 with an extra edge 3 - 1
        let config = GraphConfig::new(directed, true);
        let mut graph: Graph<Nbs> =
            Graph::from_edges(config, 4, [(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0), (3, 1, 4.0)])
                .unwrap();

        assert_eq!(graph.remove_vertex("2").unwrap(), 2);
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.labels().collect_vec(), vec!["0", "1", "3"]);
        assert_eq!(graph.number_of_edges(), 2);

        // former node 3 is now node 2
        assert!(graph.has_edge(2, 1).unwrap());
        assert_eq!(graph.weight_of(2, 1).unwrap(), 4.0);
        assert_eq!(graph.has_edge(1, 2).unwrap(), !directed);
        assert!(graph.has_edge(0, 1).unwrap());

        assert!(matches!(
            graph.remove_vertex("2"),
            Err(GraphError::VertexNotFound(_))
        ));
    }

    #[test]
    fn remove_vertex_list() {
        remove_vertex_reindexes::<ArrNeighborhood>(false);
        remove_vertex_reindexes::<ArrNeighborhood>(true);
    }

    #[test]
    fn remove_vertex_matrix() {
        remove_vertex_reindexes::<RowNeighborhood>(false);
        remove_vertex_reindexes::<RowNeighborhood>(true);
    }

    #[test]
    fn out_of_range_edges() {
        let mut graph = AdjList::from_edges(GraphConfig::undirected(), 2, [(0, 1)]).unwrap();
        assert!(matches!(
            graph.insert_edge(0, 2, 1.0),
            Err(GraphError::IndexOutOfRange { index: 2, len: 2 })
        ));
        assert!(graph.remove_edge(5, 0).is_err());
        assert!(graph.has_edge(0, 9).is_err());
        assert!(graph.neighbors_of(2).is_err());
        assert!(!graph.remove_edge(0, 0).unwrap());
    }

    #[test]
    fn edges_and_clear() {
        let mut graph =
            AdjMatrix::from_edges(GraphConfig::undirected(), 3, [(1, 0), (2, 1), (2, 2)]).unwrap();
        assert_eq!(
            graph.edges().map(|e| e.edge()).collect_vec(),
            vec![Edge(0, 1), Edge(1, 2), Edge(2, 2)]
        );

        graph.clear();
        assert!(graph.is_empty());
        assert!(graph.is_undirected());
        assert_eq!(graph.edges().count(), 0);
    }

    #[test]
    fn reset_drops_everything() {
        let mut graph = AdjMatrix::from_edges(GraphConfig::undirected(), 3, [(0, 1)]).unwrap();
        graph.reset(GraphConfig::directed());
        assert!(graph.is_empty());
        assert!(graph.is_singleton_graph());
        assert!(graph.is_directed());
    }
}

// ---------- Testing ----------

test_graph_store!(
    test_adj_list_undir,
    AdjList,
    true,
    (
        GraphNew,
        AdjacencyList,
        CrossVariant,
        GraphEdgeEditing,
        Traversal,
        ShortestPath,
        GraphColoring
    )
);

test_graph_store!(
    test_adj_list_dir,
    AdjList,
    false,
    (
        GraphNew,
        AdjacencyList,
        CrossVariant,
        GraphEdgeEditing,
        Traversal,
        ShortestPath
    )
);

test_graph_store!(
    test_adj_matrix_undir,
    AdjMatrix,
    true,
    (
        GraphNew,
        AdjacencyList,
        CrossVariant,
        GraphEdgeEditing,
        Traversal,
        ShortestPath,
        GraphColoring
    )
);

test_graph_store!(
    test_adj_matrix_dir,
    AdjMatrix,
    false,
    (
        GraphNew,
        AdjacencyList,
        CrossVariant,
        GraphEdgeEditing,
        Traversal,
        ShortestPath
    )
);
