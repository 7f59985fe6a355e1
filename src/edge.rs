use std::fmt::{Debug, Display};

use serde::Serialize;

use crate::{DEFAULT_WEIGHT, Node, Weight};

/// An edge is defined by two nodes/endpoints.
/// Whether it is directed depends on the graph it belongs to.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Attaches a weight to the edge
    pub fn with_weight(self, weight: Weight) -> WeightedEdge {
        WeightedEdge {
            origin: self.0,
            destination: self.1,
            weight,
        }
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// An edge together with its stored weight
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct WeightedEdge {
    #[serde(rename = "source")]
    pub origin: Node,
    #[serde(rename = "target")]
    pub destination: Node,
    pub weight: Weight,
}

impl WeightedEdge {
    /// Drops the weight
    pub fn edge(&self) -> Edge {
        Edge(self.origin, self.destination)
    }
}

impl From<Edge> for WeightedEdge {
    fn from(value: Edge) -> Self {
        value.with_weight(DEFAULT_WEIGHT)
    }
}

impl From<(Node, Node)> for WeightedEdge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1).with_weight(DEFAULT_WEIGHT)
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        Edge(value.0, value.1).with_weight(value.2)
    }
}

impl From<&(Node, Node, Weight)> for WeightedEdge {
    fn from(value: &(Node, Node, Weight)) -> Self {
        Edge(value.0, value.1).with_weight(value.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_and_reverse() {
        let e = Edge(4, 1);
        assert!(!e.is_normalized());
        assert_eq!(e.normalized(), Edge(1, 4));
        assert_eq!(e.reverse(), Edge(1, 4));
        assert!(Edge(2, 2).is_loop());
        assert_eq!(format!("{e}"), "(4,1)");
    }

    #[test]
    fn weighted_edge_serializes_as_source_target() {
        let json = serde_json::to_string(&WeightedEdge::from((0, 1, 2.5))).unwrap();
        assert_eq!(json, r#"{"source":0,"target":1,"weight":2.5}"#);
    }
}
