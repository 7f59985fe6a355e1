use std::ops::Range;

use itertools::Itertools;

use crate::*;

/// Structural flags of a graph
pub trait GraphType {
    /// Returns the effective configuration (direction and weight flags)
    fn config(&self) -> GraphConfig;

    fn is_directed(&self) -> bool {
        self.config().directed
    }

    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }

    fn is_weighted(&self) -> bool {
        self.config().weighted
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns the range `0..n` of all node indices.
    /// The range does not borrow the graph.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fails with `IndexOutOfRange` unless `u` is a live node
    fn check_node(&self, u: Node) -> Result<()> {
        if u < self.number_of_nodes() {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange {
                index: u,
                len: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of logical edges of the graph.
    /// An undirected edge `{u, v}` counts once.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Read access to vertex labels
pub trait VertexLabels: GraphNodeOrder {
    /// Returns the label of `u`.
    /// Fails with `IndexOutOfRange` if `u >= n`.
    fn label_of(&self, u: Node) -> Result<&str>;

    /// Returns an iterator over all labels in index order
    fn labels(&self) -> impl Iterator<Item = &str> + '_;

    /// Returns the smallest node carrying `label`, if any.
    /// Labels need not be unique.
    fn find_vertex(&self, label: &str) -> Option<Node> {
        self.labels()
            .position(|l| l == label)
            .map(|pos| pos as Node)
    }

    /// Maps a sequence of nodes to their labels
    fn labels_of(&self, nodes: &[Node]) -> Result<Vec<String>> {
        nodes
            .iter()
            .map(|&u| self.label_of(u).map(str::to_owned))
            .collect()
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder {
    /// Returns an iterator over the (out-)neighbors of `u`.
    /// Fails with `IndexOutOfRange` if `u >= n`.
    ///
    /// Adjacency lists yield neighbors in insertion order, adjacency matrices
    /// in ascending order. Both yield the same set.
    fn neighbors_of(&self, u: Node) -> Result<impl Iterator<Item = Node> + '_>;

    /// Returns the number of (outgoing) neighbors of `u`
    fn degree_of(&self, u: Node) -> Result<NumNodes> {
        Ok(self.neighbors_of(u)?.count() as NumNodes)
    }

    /// Returns the neighbors of `u` in ascending order
    fn ordered_neighbors_of(&self, u: Node) -> Result<Vec<Node>> {
        Ok(self.neighbors_of(u)?.sorted().collect_vec())
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge `(u, v)` exists in the graph.
    /// Fails with `IndexOutOfRange` if `u >= n || v >= n`.
    fn has_edge(&self, u: Node, v: Node) -> Result<bool>;
}

/// Access to stored edge weights
pub trait WeightedAdjacency: AdjacencyTest {
    /// Returns the weight of edge `(u, v)`.
    /// Fails with `EdgeNotFound` if the edge is absent and with `IndexOutOfRange` if `u >= n || v >= n`.
    fn weight_of(&self, u: Node, v: Node) -> Result<Weight>;

    /// Returns an iterator over `(neighbor, weight)` pairs of `u`, in the same order as `neighbors_of`
    fn weighted_neighbors_of(&self, u: Node) -> Result<impl Iterator<Item = (Node, Weight)> + '_>;

    /// Returns every logical edge once.
    /// For undirected graphs, edges are reported normalized (`origin <= destination`).
    fn weighted_edges(&self, only_normalized: bool) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices_range().flat_map(move |u| {
            self.weighted_neighbors_of(u)
                .into_iter()
                .flatten()
                .filter(move |&(v, _)| !only_normalized || Edge(u, v).is_normalized())
                .map(move |(v, w)| Edge(u, v).with_weight(w))
        })
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew: Sized {
    /// Creates an empty graph with the given flags
    fn with_config(config: GraphConfig) -> Self;

    /// Creates an empty graph
    fn new(directed: bool, weighted: bool) -> Self {
        Self::with_config(GraphConfig::new(directed, weighted))
    }

    /// Drops all nodes and edges and replaces the configuration
    fn reset(&mut self, config: GraphConfig);
}

/// Provides functions to insert/delete vertices
pub trait GraphVertexEditing: GraphNodeOrder {
    /// Appends a vertex and returns its index `n`.
    /// Labels are not required to be unique.
    fn insert_vertex<S: Into<String>>(&mut self, label: S) -> Node;

    /// Appends one vertex per label
    fn insert_vertices<S, I>(&mut self, labels: I) -> Range<Node>
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        let first = self.number_of_nodes();
        for label in labels {
            self.insert_vertex(label);
        }
        first..self.number_of_nodes()
    }

    /// Removes the smallest-index vertex labelled `label` together with all its edges.
    /// All higher indices shift down by one to keep indices contiguous.
    /// Returns the index the vertex had.
    /// Fails with `VertexNotFound` if no vertex carries `label`.
    fn remove_vertex(&mut self, label: &str) -> Result<Node>;
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNodeOrder {
    /// Adds the edge `(u, v)`; for undirected graphs both directions are installed as one logical edge.
    /// Unweighted graphs ignore `weight` and store `1`.
    ///
    /// Returns *true* if the edge is new. For an existing edge the weight is overwritten and *false* returned.
    /// Fails with `IndexOutOfRange` if `u >= n || v >= n`.
    fn insert_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<bool>;

    /// Adds all edges in the collection
    fn insert_edges<E, I>(&mut self, edges: I) -> Result<()>
    where
        E: Into<WeightedEdge>,
        I: IntoIterator<Item = E>,
    {
        for edge in edges {
            let WeightedEdge {
                origin,
                destination,
                weight,
            } = edge.into();
            self.insert_edge(origin, destination, weight)?;
        }
        Ok(())
    }

    /// Removes the edge `(u, v)`; for undirected graphs this also removes `(v, u)`.
    /// Returns *false* if the edge did not exist.
    /// Fails with `IndexOutOfRange` if `u >= n || v >= n`.
    fn remove_edge(&mut self, u: Node, v: Node) -> Result<bool>;
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Creates a graph with nodes labelled `"0".."n-1"` and the given edges
    fn from_edges<E, I>(config: GraphConfig, n: NumNodes, edges: I) -> Result<Self>
    where
        E: Into<WeightedEdge>,
        I: IntoIterator<Item = E>;
}

impl<G: GraphNew + GraphVertexEditing + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges<E, I>(config: GraphConfig, n: NumNodes, edges: I) -> Result<Self>
    where
        E: Into<WeightedEdge>,
        I: IntoIterator<Item = E>,
    {
        let mut graph = Self::with_config(config);
        graph.insert_vertices((0..n).map(|u| u.to_string()));
        graph.insert_edges(edges)?;
        Ok(graph)
    }
}

/// The full capability set every storage strategy provides.
/// Algorithms only require the read-only subsets they use.
pub trait GraphStore:
    GraphType
    + GraphNew
    + VertexLabels
    + AdjacencyList
    + WeightedAdjacency
    + GraphEdgeOrder
    + GraphVertexEditing
    + GraphEdgeEditing
{
    /// Returns every logical edge once; undirected edges are reported normalized (`u <= v`)
    fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.weighted_edges(self.is_undirected())
    }

    /// Drops all nodes and edges but keeps the configuration
    fn clear(&mut self) {
        self.reset(self.config());
    }
}

impl<G> GraphStore for G where
    G: GraphType
        + GraphNew
        + VertexLabels
        + AdjacencyList
        + WeightedAdjacency
        + GraphEdgeOrder
        + GraphVertexEditing
        + GraphEdgeEditing
{
}
