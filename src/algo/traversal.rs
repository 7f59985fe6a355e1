/*!
Breadth-first and depth-first traversals.

Both traversals are available as lazy iterators ([`Bfs`], [`Dfs`]) and as methods of the
[`Traversal`] trait that collect the full visitation order. Neighbors are explored in the
order the representation reports them (`neighbors_of`), so an adjacency list and an
adjacency matrix may produce different (but equally valid) orders.

Nodes unreachable from the start node never appear in the order.
*/

use super::*;
use itertools::Itertools;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Breadth-first traversal iterator.
///
/// Nodes are marked visited when they enter the queue, hence each reachable node is yielded once.
pub struct Bfs<'a, G> {
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<Node>,
}

impl<'a, G: AdjacencyList> Bfs<'a, G> {
    /// Creates a new traversal starting from `start`.
    /// Fails with `IndexOutOfRange` if `start >= n`.
    pub fn new(graph: &'a G, start: Node) -> Result<Self> {
        graph.check_node(start)?;
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Ok(Self {
            graph,
            visited,
            queue: VecDeque::from([start]),
        })
    }
}

impl<G: AdjacencyList> Iterator for Bfs<'_, G> {
    type Item = Result<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        match self.graph.neighbors_of(u) {
            Ok(neighbors) => {
                for v in neighbors {
                    if !self.visited.set_bit(v) {
                        self.queue.push_back(v);
                    }
                }
                Some(Ok(u))
            }
            Err(err) => {
                self.queue.clear();
                Some(Err(err))
            }
        }
    }
}

/// Depth-first traversal iterator.
///
/// Yields nodes in the pre-order of the recursive formulation: a node is visited, then each of its
/// neighbors (in `neighbors_of` order) that is still unvisited at that moment is explored completely
/// before the next neighbor is considered. Recursion is replaced by an explicit stack of frames.
pub struct Dfs<'a, G> {
    graph: &'a G,
    visited: NodeBitSet,
    frames: Vec<std::vec::IntoIter<Node>>,
    discovered: Option<Node>,
}

impl<'a, G: AdjacencyList> Dfs<'a, G> {
    /// Creates a new traversal starting from `start`.
    /// Fails with `IndexOutOfRange` if `start >= n`.
    pub fn new(graph: &'a G, start: Node) -> Result<Self> {
        graph.check_node(start)?;
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Ok(Self {
            graph,
            visited,
            frames: Vec::new(),
            discovered: Some(start),
        })
    }

    /// Finds the next unvisited neighbor of the innermost frame, unwinding finished frames
    fn discover(&mut self) -> Option<Node> {
        loop {
            let frame = self.frames.last_mut()?;
            match frame.find(|&v| !self.visited.get_bit(v)) {
                Some(v) => {
                    self.visited.set_bit(v);
                    return Some(v);
                }
                None => {
                    self.frames.pop();
                }
            }
        }
    }
}

impl<G: AdjacencyList> Iterator for Dfs<'_, G> {
    type Item = Result<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let u = match self.discovered.take() {
            Some(u) => u,
            None => self.discover()?,
        };

        match self.graph.neighbors_of(u) {
            Ok(neighbors) => {
                self.frames.push(neighbors.collect_vec().into_iter());
                Some(Ok(u))
            }
            Err(err) => {
                self.frames.clear();
                Some(Err(err))
            }
        }
    }
}

fn collect_order<I: Iterator<Item = Result<Node>>>(name: &str, start: Node, search: I) -> Result<Vec<Node>> {
    let order = search
        .inspect(|u| {
            if let Ok(u) = u {
                trace!(node = u, "{name} visit");
            }
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(start, visited = order.len(), "{name} finished");
    Ok(order)
}

/// Provides BFS and DFS directly on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns the nodes reachable from `start` in **breadth-first search (BFS) order**.
    /// Fails with `IndexOutOfRange` if `start >= n`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(GraphConfig::undirected(), 4, [(0, 1), (0, 2), (1, 3)]).unwrap();
    /// assert_eq!(g.bfs(0).unwrap(), vec![0, 1, 2, 3]);
    /// ```
    fn bfs(&self, start: Node) -> Result<Vec<Node>> {
        collect_order("bfs", start, Bfs::new(self, start)?)
    }

    /// Returns the nodes reachable from `start` in **depth-first search (DFS) order**.
    /// Fails with `IndexOutOfRange` if `start >= n`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(GraphConfig::undirected(), 4, [(0, 1), (0, 2), (1, 3)]).unwrap();
    /// assert_eq!(g.dfs(0).unwrap(), vec![0, 1, 3, 2]);
    /// ```
    fn dfs(&self, start: Node) -> Result<Vec<Node>> {
        collect_order("dfs", start, Dfs::new(self, start)?)
    }

    /// Like [`Traversal::bfs`] but returns the labels of the visited nodes
    fn bfs_labels(&self, start: Node) -> Result<Vec<String>>
    where
        Self: VertexLabels,
    {
        self.labels_of(&self.bfs(start)?)
    }

    /// Like [`Traversal::dfs`] but returns the labels of the visited nodes
    fn dfs_labels(&self, start: Node) -> Result<Vec<String>>
    where
        Self: VertexLabels,
    {
        self.labels_of(&self.dfs(start)?)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::repr::*;

    //  / 2 --- \
    // 1         4 - 3
    //  \ 0 - 5 /
    const EDGES: [(Node, Node); 6] = [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)];

    #[test]
    fn bfs_order() {
        let graph = AdjList::from_edges(GraphConfig::undirected(), 6, EDGES).unwrap();
        assert_eq!(graph.bfs(1).unwrap(), vec![1, 2, 0, 4, 5, 3]);

        let graph = AdjMatrix::from_edges(GraphConfig::undirected(), 6, EDGES).unwrap();
        assert_eq!(graph.bfs(1).unwrap(), vec![1, 0, 2, 5, 4, 3]);

        let graph = AdjMatrix::from_edges(GraphConfig::directed(), 6, EDGES).unwrap();
        assert_eq!(graph.bfs(5).unwrap(), vec![5, 4, 3]);
    }

    #[test]
    fn dfs_order() {
        let graph = AdjList::from_edges(GraphConfig::undirected(), 6, EDGES).unwrap();
        assert_eq!(graph.dfs(1).unwrap(), vec![1, 2, 4, 3, 5, 0]);

        let graph = AdjMatrix::from_edges(GraphConfig::undirected(), 6, EDGES).unwrap();
        assert_eq!(graph.dfs(1).unwrap(), vec![1, 0, 5, 4, 2, 3]);

        let graph = AdjList::from_edges(GraphConfig::directed(), 6, EDGES).unwrap();
        assert_eq!(graph.dfs(5).unwrap(), vec![5, 4, 3]);
    }

    #[test]
    fn dfs_rechecks_visited_lazily() {
        // 0 -> {1, 2}, 1 -> 2: the recursive formulation reaches 2 through 1 first
        let graph =
            AdjList::from_edges(GraphConfig::directed(), 3, [(0, 1), (0, 2), (1, 2)]).unwrap();
        assert_eq!(graph.dfs(0).unwrap(), vec![0, 1, 2]);
        assert_eq!(graph.bfs(0).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn unreachable_nodes_are_absent() {
        let graph = AdjList::from_edges(GraphConfig::undirected(), 4, [(0, 1), (2, 3)]).unwrap();
        assert_eq!(graph.bfs(0).unwrap(), vec![0, 1]);
        assert_eq!(graph.dfs(3).unwrap(), vec![3, 2]);
    }

    #[test]
    fn start_out_of_range() {
        let graph = AdjMatrix::from_edges(GraphConfig::undirected(), 2, [(0, 1)]).unwrap();
        assert!(matches!(
            graph.bfs(2),
            Err(GraphError::IndexOutOfRange { index: 2, len: 2 })
        ));
        assert!(graph.dfs(7).is_err());
        assert!(AdjList::default().bfs(0).is_err());
    }

    #[test]
    fn labels() {
        let mut graph = AdjList::new(false, false);
        graph.insert_vertices(["a", "b", "c"]);
        graph.insert_edge(0, 2, 1.0).unwrap();
        graph.insert_edge(2, 1, 1.0).unwrap();
        assert_eq!(graph.bfs_labels(0).unwrap(), vec!["a", "c", "b"]);
        assert_eq!(graph.dfs_labels(1).unwrap(), vec!["b", "c", "a"]);
    }

    #[test]
    fn iterators_are_lazy() {
        let graph = AdjList::from_edges(GraphConfig::undirected(), 3, [(0, 1), (1, 2)]).unwrap();
        let mut bfs = Bfs::new(&graph, 0).unwrap();
        assert_eq!(bfs.next().unwrap().unwrap(), 0);
        assert_eq!(Dfs::new(&graph, 2).unwrap().take(2).count(), 2);
    }
}
