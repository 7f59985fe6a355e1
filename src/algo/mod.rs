/*!
# Graph Algorithms

This module provides the algorithms built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversal, shortest paths and vertex coloring.

Algorithms are provided as traits implemented on every graph that offers the required
read-only operations; they never modify the graph. Structured results are always returned as data,
logging via `tracing` is a side effect on top.
*/

mod coloring;
mod shortest_path;
mod traversal;

use crate::{ops::*, *};

pub use coloring::*;
pub use shortest_path::*;
pub use traversal::*;
