//! Error types shared by all graph operations and algorithms

use thiserror::Error;

use crate::{Node, NumNodes};

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("node {index} is out of range for a graph with {len} nodes")]
    IndexOutOfRange { index: Node, len: NumNodes },

    #[error("no vertex labelled {0:?}")]
    VertexNotFound(String),

    #[error("edge ({origin},{destination}) does not exist")]
    EdgeNotFound { origin: Node, destination: Node },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed input in line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },
}

impl GraphError {
    /// Returns *true* for both the vertex and the edge flavour of a missing entity
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GraphError::VertexNotFound(_) | GraphError::EdgeNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = GraphError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "node 7 is out of range for a graph with 3 nodes"
        );
        assert!(!err.is_not_found());

        let err = GraphError::EdgeNotFound {
            origin: 0,
            destination: 2,
        };
        assert_eq!(err.to_string(), "edge (0,2) does not exist");
        assert!(err.is_not_found());
        assert!(GraphError::VertexNotFound("a".into()).is_not_found());
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: GraphError = io.into();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
