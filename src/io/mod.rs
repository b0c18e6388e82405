/*!
# IO

Utilities for reading and writing graphs.

A single format is supported, the **edge list** used by the persisted graph
descriptions this crate consumes: a whitespace-separated token stream
consisting of the number of nodes `n`, the number of edges `m`, and `m` pairs
of 0-indexed endpoints. See [`edge_list`] for details.

To generalize over reading/writing, [`GraphReader`] and [`GraphWriter`] are
implemented by readers and writers for a specific format; shorthand traits
([`EdgeListRead`], [`EdgeListWrite`]) are implemented directly on the graph
types.

All failures are reported as [`std::io::Error`]; no partial graph is ever
returned.
*/

pub mod edge_list;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Result, Write},
    path::Path,
};

pub use edge_list::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
///
/// This trait provides both a low-level method to write to any
/// [`Write`] instance and a convenience wrapper to write directly
/// to files.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let next = $iterator.next();
        raise_error_unless!(
            next.is_some(),
            ErrorKind::InvalidData,
            format!("Premature end of input when parsing {}.", $name)
        );

        let parsed = next.unwrap().parse();
        raise_error_unless!(
            parsed.is_ok(),
            ErrorKind::InvalidData,
            format!("Invalid value found. Cannot parse {}.", $name)
        );

        parsed.unwrap()
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;
