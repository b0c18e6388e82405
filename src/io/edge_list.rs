//! # EdgeList
//!
//! The EdgeList-Format is a whitespace-separated token stream: the first token
//! is the number of nodes `n`, the second the number of edges `m`, followed by
//! `m` pairs of 0-indexed endpoints. Tokens may be separated by any
//! whitespace, including line breaks, so
//!
//! ```text
//! 3
//! 3
//! 0 1
//! 0 2
//! 1 2
//! ```
//!
//! and `3 3 0 1 0 2 1 2` describe the same graph. Any other token layout is
//! rejected as invalid data; edges with out-of-range endpoints or self-loops
//! are rejected rather than inserted.

use std::{
    fs::File,
    io::{BufRead, BufWriter, ErrorKind, Read, Write},
    path::Path,
};

use super::*;
use crate::prelude::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListReader;

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self
    }
}

impl<G> GraphReader<G> for EdgeListReader
where
    G: GraphNew + GraphEdgeInsertion,
{
    fn try_read_graph<R: BufRead>(&self, mut reader: R) -> Result<G> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        let mut tokens = input.split_whitespace();

        let n: NumNodes = parse_next_value!(tokens, "Number of nodes");
        let m: NumEdges = parse_next_value!(tokens, "Number of edges");

        let mut graph = G::new(n);
        for i in 0..m {
            let u: Node = parse_next_value!(tokens, format!("Edge {i}>Source node"));
            let v: Node = parse_next_value!(tokens, format!("Edge {i}>Target node"));

            raise_error_unless!(
                u < n && v < n,
                ErrorKind::InvalidData,
                format!("Edge {i} ({u},{v}) has an endpoint out of range.")
            );
            raise_error_unless!(
                u != v,
                ErrorKind::InvalidData,
                format!("Edge {i} ({u},{v}) is a self-loop.")
            );

            graph.add_edge(u, v);
        }

        Ok(graph)
    }
}

/// Trait for creating graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphNew + GraphEdgeInsertion,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::new().try_read_graph(reader)
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl<G> GraphWriter<G> for EdgeListWriter
where
    G: AdjacencyList + GraphEdgeOrder,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", graph.number_of_nodes())?;
        writeln!(writer, "{}", graph.number_of_edges())?;

        for Edge(u, v) in graph.edges(true) {
            writeln!(writer, "{u} {v}")?;
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G> EdgeListWrite for G
where
    G: AdjacencyList + GraphEdgeOrder,
{
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::new().try_write_graph(self, writer)
    }
}
