/*!
# IO

Utilities for reading graphs and writing/reading fractional matchings.

## Formats

- **EdgeList** (graphs): the PACE-style format. A header `p <problem> <n> <m>`, followed by
  `m` lines `u v` with 1-indexed endpoints representing the edge `Edge(u - 1, v - 1)`.
  Lines starting with `c` are comments.
- **Matching** (solutions): a summary line `s <halves>` holding the total value in halves,
  followed by one line `u v <value>` per edge with non-zero value, 1-indexed, where `<value>`
  is `0.5` or `1`.

All functions return `std::io::Result`; malformed input yields errors of kind
[`ErrorKind::InvalidData`].
*/

pub mod edge_list;
pub mod matching;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
};

use crate::prelude::*;

pub use edge_list::*;
pub use matching::*;

/// Trait for types that can read graphs in a specific format.
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
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Returns the next line that is neither empty nor starts with `comment`
fn next_content_line<I>(lines: &mut I, comment: &str) -> Result<Option<String>>
where
    I: Iterator<Item = Result<String>>,
{
    for line in lines {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(comment) {
            continue;
        }
        return Ok(Some(trimmed.to_string()));
    }
    Ok(None)
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
        let Some(next) = $iterator.next() else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                format!("Premature end of line when parsing {}.", $name)
            ));
        };

        match next.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("Invalid value {next:?} found. Cannot parse {}.", $name)
                ));
            }
        }
    }};
}

use io_error;
use parse_next_value;
use raise_error_unless;
