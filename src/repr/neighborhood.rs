use std::{
    iter::{Copied, Enumerate, FilterMap},
    slice::Iter,
};

use itertools::Itertools;

use super::*;

/// Storage of the weighted out-neighborhood of a single node.
///
/// Implementations decide the memory layout; a [`Graph`] keeps one `Neighborhood` per node
/// and never looks inside.
pub trait Neighborhood: Clone {
    /// Creates an empty neighborhood for a graph with `n` nodes
    fn new(n: NumNodes) -> Self;

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    type NeighborhoodIter<'a>: Iterator<Item = (Node, Weight)> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all `(neighbor, weight)` pairs in the Neighborhood
    fn neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Returns the weight towards `v` if `v` is in the Neighborhood
    /// ** Might panic if `v >= n` **
    fn weight_to(&self, v: Node) -> Option<Weight> {
        self.neighbors().find(|&(u, _)| u == v).map(|(_, w)| w)
    }

    /// Returns *true* if `v` is in the Neighborhood
    /// ** Might panic if `v >= n` **
    fn has_neighbor(&self, v: Node) -> bool {
        self.weight_to(v).is_some()
    }

    /// Adds `v` with weight `w` or overwrites its weight.
    /// Returns the previous weight if `v` was in the Neighborhood before.
    /// ** Might panic if `v >= n` **
    fn set_neighbor(&mut self, v: Node, w: Weight) -> Option<Weight>;

    /// Tries to remove a neighbor from the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    /// ** Might panic if `v >= n` **
    fn try_remove_neighbor(&mut self, v: Node) -> bool;

    /// The graph gained node `n` (the new last index)
    fn grow(&mut self);

    /// The graph lost node `v`: forget it and shift every higher index down by one
    fn shrink(&mut self, v: Node);
}

/// Adjacency-list neighborhood: `(neighbor, weight)` pairs in insertion order
#[derive(Debug, Default, Clone)]
pub struct ArrNeighborhood(pub Vec<(Node, Weight)>);

impl Neighborhood for ArrNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, (Node, Weight)>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn set_neighbor(&mut self, v: Node, w: Weight) -> Option<Weight> {
        if let Some((_, entry)) = self.0.iter_mut().find(|(u, _)| *u == v) {
            Some(std::mem::replace(entry, w))
        } else {
            self.0.push((v, w));
            None
        }
    }

    fn try_remove_neighbor(&mut self, v: Node) -> bool {
        // keep insertion order intact, so no `swap_remove`
        if let Some((pos, _)) = self.0.iter().find_position(|&&(u, _)| u == v) {
            self.0.remove(pos);
            true
        } else {
            false
        }
    }

    fn grow(&mut self) {}

    fn shrink(&mut self, v: Node) {
        self.0.retain(|&(u, _)| u != v);
        for (u, _) in self.0.iter_mut() {
            if *u > v {
                *u -= 1;
            }
        }
    }
}

type RowFilter = fn((usize, &Option<Weight>)) -> Option<(Node, Weight)>;

fn present_entry((v, w): (usize, &Option<Weight>)) -> Option<(Node, Weight)> {
    w.map(|w| (v as Node, w))
}

/// Adjacency-matrix neighborhood: one row of the matrix with a slot per node.
/// Neighbors are always reported in ascending order.
#[derive(Debug, Default, Clone)]
pub struct RowNeighborhood {
    row: Vec<Option<Weight>>,
    count: NumNodes,
}

impl Neighborhood for RowNeighborhood {
    fn new(n: NumNodes) -> Self {
        Self {
            row: vec![None; n as usize],
            count: 0,
        }
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.count
    }

    type NeighborhoodIter<'a>
        = FilterMap<Enumerate<Iter<'a, Option<Weight>>>, RowFilter>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.row
            .iter()
            .enumerate()
            .filter_map(present_entry as RowFilter)
    }

    fn weight_to(&self, v: Node) -> Option<Weight> {
        self.row[v as usize]
    }

    fn set_neighbor(&mut self, v: Node, w: Weight) -> Option<Weight> {
        let prev = self.row[v as usize].replace(w);
        if prev.is_none() {
            self.count += 1;
        }
        prev
    }

    fn try_remove_neighbor(&mut self, v: Node) -> bool {
        let removed = self.row[v as usize].take().is_some();
        if removed {
            self.count -= 1;
        }
        removed
    }

    fn grow(&mut self) {
        self.row.push(None);
    }

    fn shrink(&mut self, v: Node) {
        if self.row.remove(v as usize).is_some() {
            self.count -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise<N: Neighborhood>() -> N {
        let mut nbs = N::new(5);
        assert_eq!(nbs.set_neighbor(3, 2.0), None);
        assert_eq!(nbs.set_neighbor(1, 4.0), None);
        assert_eq!(nbs.set_neighbor(3, 7.0), Some(2.0));
        assert_eq!(nbs.num_of_neighbors(), 2);
        assert_eq!(nbs.weight_to(3), Some(7.0));
        assert!(!nbs.has_neighbor(0));
        nbs
    }

    #[test]
    fn arr_keeps_insertion_order() {
        let mut nbs: ArrNeighborhood = exercise();
        assert_eq!(nbs.neighbors().collect_vec(), vec![(3, 7.0), (1, 4.0)]);

        nbs.set_neighbor(4, 1.0);
        assert!(nbs.try_remove_neighbor(3));
        assert!(!nbs.try_remove_neighbor(3));
        assert_eq!(nbs.neighbors().collect_vec(), vec![(1, 4.0), (4, 1.0)]);

        nbs.shrink(1);
        assert_eq!(nbs.neighbors().collect_vec(), vec![(3, 1.0)]);
    }

    #[test]
    fn row_is_ascending() {
        let mut nbs: RowNeighborhood = exercise();
        assert_eq!(nbs.neighbors().collect_vec(), vec![(1, 4.0), (3, 7.0)]);

        nbs.grow();
        nbs.set_neighbor(5, 1.0);
        assert_eq!(nbs.num_of_neighbors(), 3);

        nbs.shrink(1);
        assert_eq!(nbs.num_of_neighbors(), 2);
        assert_eq!(nbs.neighbors().collect_vec(), vec![(2, 7.0), (4, 1.0)]);
    }
}
