//! # Header
//!
//! The header(-line) of a graph file consists of four whitespace separated integers
//!     "{V} {A} {D} {P}"
//! where `V` is the number of nodes, `A` the number of edge lines that follow, and `D`/`P`
//! flag the graph as directed/weighted when equal to `1`.

use std::{io::Write, str::FromStr};

use tracing::warn;

use super::*;

/// A parsed header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub number_of_nodes: NumNodes,
    pub number_of_edges: NumEdges,
    pub config: GraphConfig,
}

impl Header {
    pub fn new(number_of_nodes: NumNodes, number_of_edges: NumEdges, config: GraphConfig) -> Self {
        Self {
            number_of_nodes,
            number_of_edges,
            config,
        }
    }

    /// Tries to parse the header found in line `line_no` (1-based).
    ///
    /// In permissive mode missing or unparseable counts are read as `0` and flags as unset.
    pub fn parse_header(line: &str, line_no: usize, mode: ParseMode) -> Result<Self> {
        let mut parts = line.split_whitespace();

        let number_of_nodes = parse_token(parts.next(), mode, line_no, "number of nodes")?;
        let number_of_edges = parse_token(parts.next(), mode, line_no, "number of edges")?;
        let directed = parse_flag(parts.next(), mode, line_no, "directed flag")?;
        let weighted = parse_flag(parts.next(), mode, line_no, "weighted flag")?;

        Ok(Self {
            number_of_nodes: number_of_nodes.unwrap_or(0),
            number_of_edges: number_of_edges.unwrap_or(0),
            config: GraphConfig::new(directed, weighted),
        })
    }

    pub fn write_header<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(
            writer,
            "{} {} {} {}",
            self.number_of_nodes,
            self.number_of_edges,
            u8::from(self.config.directed),
            u8::from(self.config.weighted)
        )?;
        Ok(())
    }
}

/// Tries to parse a single token.
/// In permissive mode a missing or unparseable token is reported as a warning and yields `None`;
/// in strict mode it is a `MalformedInput` error.
pub(crate) fn parse_token<T: FromStr>(
    token: Option<&str>,
    mode: ParseMode,
    line: usize,
    name: &str,
) -> Result<Option<T>> {
    let reason = match token.map(str::parse::<T>) {
        Some(Ok(value)) => return Ok(Some(value)),
        Some(Err(_)) => format!("cannot parse {name}"),
        None => format!("missing {name}"),
    };

    malformed_unless!(mode == ParseMode::Permissive, line, reason);
    warn!(line, token, "{reason}");
    Ok(None)
}

fn parse_flag(token: Option<&str>, mode: ParseMode, line: usize, name: &str) -> Result<bool> {
    let value: Option<i64> = parse_token(token, mode, line, name)?;
    malformed_unless!(
        mode == ParseMode::Permissive || matches!(value, Some(0 | 1)),
        line,
        format!("{name} must be 0 or 1")
    );
    Ok(value == Some(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let header = Header::parse_header("3 2 0 1", 1, ParseMode::Strict).unwrap();
        assert_eq!(header, Header::new(3, 2, GraphConfig::new(false, true)));

        let header = Header::parse_header("  5\t0 1 0  ", 1, ParseMode::Strict).unwrap();
        assert_eq!(header, Header::new(5, 0, GraphConfig::directed()));
    }

    #[test]
    fn permissive_degrades() {
        let header = Header::parse_header("x 4 2", 1, ParseMode::Permissive).unwrap();
        assert_eq!(header.number_of_nodes, 0);
        assert_eq!(header.number_of_edges, 4);
        assert_eq!(header.config, GraphConfig::undirected());
    }

    #[test]
    fn strict_rejects() {
        for line in ["x 4 0 0", "3 2 0", "3 2 2 0", "3 -1 0 0"] {
            assert!(
                matches!(
                    Header::parse_header(line, 1, ParseMode::Strict),
                    Err(GraphError::MalformedInput { line: 1, .. })
                ),
                "{line}"
            );
        }
    }

    #[test]
    fn write() {
        let mut buf = Vec::new();
        Header::new(4, 3, GraphConfig::directed().weighted())
            .write_header(&mut buf)
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "4 3 1 1\n");
    }
}
