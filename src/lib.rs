/*!
`wgraphs` is a small graph data structure & algorithms library for graphs that are
- **directed or undirected** : chosen at runtime through [`GraphConfig`]
- **weighted or unweighted** : unweighted graphs store weight `1` on every edge
- **labelled** : nodes are numbered `0` to `n - 1` and carry a (not necessarily unique) label

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; [`WeightedEdge`] adds the weight.

### Directed vs Undirected

- In an **undirected** graph, inserting `Edge(u, v)` makes `u` and `v` neighbors of each other as a
  single logical edge; removing either direction removes both.
- In a **directed** graph, `Edge(u, v)` and `Edge(v, u)` are independent.

### Available Representations

See the [`repr`] module:

- [`AdjList`](crate::repr::AdjList)
- [`AdjMatrix`](crate::repr::AdjMatrix)

Both implement the same set of traits from [`ops`] and are interchangeable for every algorithm.

# Usage

- [`prelude`] includes definitions for nodes, edges, configuration, errors, basic graph operations, and both representations,
- [`algo`] includes algorithm traits implemented on every graph: BFS/DFS ([`Traversal`](algo::Traversal)),
  Dijkstra ([`ShortestPath`](algo::ShortestPath)) and four vertex-coloring strategies ([`GraphColoring`](algo::GraphColoring)),
- [`io`] loads graphs from the `V A D P` text format and exports JSON snapshots,
- [`utils`] provides the timing wrapper used to report algorithm durations.

```
use wgraphs::{prelude::*, algo::*};

let graph = AdjList::from_edges(GraphConfig::undirected(), 3, [(0, 1), (1, 2)]).unwrap();
assert_eq!(graph.bfs(0).unwrap(), vec![0, 1, 2]);
assert_eq!(graph.dijkstra(0).unwrap().distance_to(2), 2.0);
```

All algorithms run synchronously on the calling thread. Graphs are not thread-safe for
concurrent mutation.
*/

pub mod algo;
pub mod config;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;

pub use config::*;
pub use edge::*;
pub use error::{GraphError, Result};
pub use node::*;

/// `wgraphs::prelude` includes definitions for nodes and edges, configuration and errors,
/// all basic graph operation traits as well as both representations.
pub mod prelude {
    pub use super::{config::*, edge::*, error::*, node::*, ops::*, repr::*};
}
