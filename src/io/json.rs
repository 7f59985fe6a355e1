//! # JSON
//!
//! A read-only `{ "nodes": [...], "edges": [...] }` snapshot of a live graph.
//! Undirected edges appear once, normalized.

use std::io::Write;

use serde::Serialize;

use super::*;
use crate::ops::*;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotNode {
    pub id: Node,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<SnapshotNode>,
    pub edges: Vec<WeightedEdge>,
}

pub trait JsonExport {
    /// Copies the current nodes and edges
    fn snapshot(&self) -> GraphSnapshot;

    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, &self.snapshot())?;
        Ok(())
    }
}

impl<G: GraphType + VertexLabels + WeightedAdjacency> JsonExport for G {
    fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self
                .labels()
                .enumerate()
                .map(|(id, label)| SnapshotNode {
                    id: id as Node,
                    label: label.to_owned(),
                })
                .collect(),
            edges: self.weighted_edges(self.is_undirected()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::*;

    #[test]
    fn snapshot_of_undirected_graph() {
        let mut graph = AdjList::new(false, true);
        graph.insert_vertices(["a", "b", "c"]);
        graph.insert_edge(1, 0, 2.0).unwrap();
        graph.insert_edge(1, 2, 0.5).unwrap();

        let snapshot = graph.snapshot();
        assert_eq!(snapshot.nodes.len(), 3);
        assert_eq!(snapshot.nodes[2].label, "c");
        assert_eq!(
            snapshot.edges,
            vec![
                WeightedEdge::from((0, 1, 2.0)),
                WeightedEdge::from((1, 2, 0.5))
            ]
        );

        let value: serde_json::Value = serde_json::from_str(&graph.to_json().unwrap()).unwrap();
        assert_eq!(value["nodes"][0]["label"], "a");
        assert_eq!(value["edges"][1]["source"], 1);
        assert_eq!(value["edges"][1]["target"], 2);
        assert_eq!(value["edges"][1]["weight"], 0.5);
    }

    #[test]
    fn directed_edges_keep_orientation() {
        let graph = AdjMatrix::from_edges(GraphConfig::directed(), 2, [(1, 0)]).unwrap();
        let mut buf = Vec::new();
        graph.write_json(&mut buf).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["edges"][0]["source"], 1);
        assert_eq!(value["edges"][0]["weight"], 1.0);
    }
}
