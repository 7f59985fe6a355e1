//! # EdgeList
//!
//! The EdgeList-Format consists of a [`Header`] followed by up to `A` lines
//! `u v [w]` representing an edge `(u, v)` with optional weight `w`.
//! Blank lines inside the edge block count towards `A` but carry no edge.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Lines, Write},
    path::Path,
};

use smallvec::SmallVec;
use tracing::{debug, error, warn};

use super::*;
use crate::ops::*;

/// A fully parsed (but not yet materialized) graph file
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeListDocument {
    pub header: Header,
    pub edges: Vec<WeightedEdge>,
}

impl EdgeListDocument {
    /// Builds a fresh graph from the document
    pub fn into_graph<G: GraphStore>(self) -> Result<G> {
        let mut graph = G::with_config(self.header.config);
        graph.insert_vertices((0..self.header.number_of_nodes).map(|u| u.to_string()));
        graph.insert_edges(self.edges)?;
        Ok(graph)
    }
}

/// A configurable reader for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct GraphLoader {
    mode: ParseMode,
}

impl GraphLoader {
    /// Creates a new (permissive) loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the parse mode
    pub fn mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    /// Parses the whole input without building a graph
    pub fn parse<R: BufRead>(&self, reader: R) -> Result<EdgeListDocument> {
        let mut lines = NumberedLines::new(reader.lines());

        let (line_no, line) = lines.next_non_blank()?.ok_or(GraphError::MalformedInput {
            line: 1,
            reason: "header not found".into(),
        })?;
        let header = Header::parse_header(&line, line_no, self.mode)?;
        debug!(
            nodes = header.number_of_nodes,
            edges = header.number_of_edges,
            directed = header.config.directed,
            weighted = header.config.weighted,
            "parsed header"
        );

        // the header is untrusted; do not preallocate arbitrarily large buffers
        let mut edges = Vec::with_capacity(header.number_of_edges.min(1 << 16) as usize);
        for _ in 0..header.number_of_edges {
            let Some((line_no, line)) = lines.next_line()? else {
                debug!(
                    expected = header.number_of_edges,
                    found = edges.len(),
                    "edge list ended early"
                );
                break;
            };

            if let Some(edge) = self.parse_edge_line(&header, &line, line_no)? {
                edges.push(edge);
            }
        }

        Ok(EdgeListDocument { header, edges })
    }

    /// Tries to parse a single edge line.
    /// Returns `None` for blank lines and (in permissive mode) for lines whose endpoints do not parse.
    fn parse_edge_line(
        &self,
        header: &Header,
        line: &str,
        line_no: usize,
    ) -> Result<Option<WeightedEdge>> {
        let parts: SmallVec<[&str; 4]> = line.split_whitespace().collect();
        if parts.is_empty() {
            return Ok(None);
        }

        let origin: Option<Node> = parse_token(parts.first().copied(), self.mode, line_no, "origin")?;
        let destination: Option<Node> =
            parse_token(parts.get(1).copied(), self.mode, line_no, "destination")?;

        let (Some(origin), Some(destination)) = (origin, destination) else {
            warn!(line = line_no, "skipping edge without valid endpoints");
            return Ok(None);
        };

        for node in [origin, destination] {
            if node >= header.number_of_nodes {
                return Err(GraphError::IndexOutOfRange {
                    index: node,
                    len: header.number_of_nodes,
                });
            }
        }

        let weight = if header.config.weighted {
            parse_token(parts.get(2).copied(), self.mode, line_no, "weight")?.unwrap_or(Weight::NAN)
        } else {
            DEFAULT_WEIGHT
        };

        Ok(Some(Edge(origin, destination).with_weight(weight)))
    }

    /// Reads a new graph from `reader`
    pub fn read_graph<G: GraphStore, R: BufRead>(&self, reader: R) -> Result<G> {
        self.parse(reader)?.into_graph()
    }

    /// Reads a new graph from a file
    pub fn read_graph_file<G: GraphStore, P: AsRef<Path>>(&self, path: P) -> Result<G> {
        self.read_graph(BufReader::new(File::open(path)?))
    }

    /// Replaces the content of `graph` by the graph read from `reader`
    /// and returns the effective configuration.
    /// On error, `graph` is left untouched and the failure is logged.
    pub fn load_into<G: GraphStore, R: BufRead>(&self, graph: &mut G, reader: R) -> Result<GraphConfig> {
        self.replace(graph, reader)
            .inspect_err(|err| error!(%err, "failed to load graph"))
    }

    /// Like [`GraphLoader::load_into`] but reads from a file
    ///
    /// # Errors
    /// Returns `GraphError::Io` if the file cannot be opened or read.
    pub fn load_file_into<G: GraphStore, P: AsRef<Path>>(
        &self,
        graph: &mut G,
        path: P,
    ) -> Result<GraphConfig> {
        let path = path.as_ref();
        File::open(path)
            .map_err(GraphError::from)
            .and_then(|file| self.replace(graph, BufReader::new(file)))
            .inspect_err(|err| error!(path = %path.display(), %err, "failed to load graph"))
    }

    fn replace<G: GraphStore, R: BufRead>(&self, graph: &mut G, reader: R) -> Result<GraphConfig> {
        let loaded: G = self.read_graph(reader)?;
        let config = loaded.config();
        if config != graph.config() {
            debug!(before = ?graph.config(), after = ?config, "configuration taken from header");
        }
        *graph = loaded;
        Ok(config)
    }
}

/// Lines of the input together with their 1-based line number
struct NumberedLines<R> {
    lines: Lines<R>,
    line_no: usize,
}

impl<R: BufRead> NumberedLines<R> {
    fn new(lines: Lines<R>) -> Self {
        Self { lines, line_no: 0 }
    }

    /// Returns the next line if it exists or propagate an error
    fn next_line(&mut self) -> Result<Option<(usize, String)>> {
        match self.lines.next() {
            None => Ok(None),
            Some(line) => {
                self.line_no += 1;
                Ok(Some((self.line_no, line?)))
            }
        }
    }

    /// Returns the next line containing a non-whitespace character
    fn next_non_blank(&mut self) -> Result<Option<(usize, String)>> {
        while let Some((line_no, line)) = self.next_line()? {
            if !line.trim().is_empty() {
                return Ok(Some((line_no, line)));
            }
        }
        Ok(None)
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Undirected edges are written once, normalized.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G: GraphType + WeightedAdjacency + GraphEdgeOrder> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, mut writer: W) -> Result<()> {
        Header::new(self.number_of_nodes(), self.number_of_edges(), self.config())
            .write_header(&mut writer)?;

        for edge in self.weighted_edges(self.is_undirected()) {
            if self.is_weighted() {
                writeln!(writer, "{} {} {}", edge.origin, edge.destination, edge.weight)?;
            } else {
                writeln!(writer, "{} {}", edge.origin, edge.destination)?;
            }
        }

        writer.flush()?;
        Ok(())
    }
}
