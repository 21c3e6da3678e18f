//! # EdgeList
//!
//! The EdgeList-Format consists of a header `p <problem> <n> <m>`, followed by `m`
//! non-comment-lines `u v` representing an edge `Edge(u - 1, v - 1)`.

use itertools::Itertools;

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// If set, the second header token has to match
    problem: Option<String>,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    /// Default to the Pace-Format accepting any problem identifier
    fn default() -> Self {
        Self {
            problem: None,
            comment_identifier: "c".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the header to name `problem`
    pub fn problem<S: Into<String>>(mut self, problem: S) -> Self {
        self.problem = Some(problem.into());
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.comment_identifier = c.into();
        self
    }

    /// Parses `p <problem> <n> <m>`
    fn parse_header(&self, line: &str) -> Result<(NumNodes, NumEdges)> {
        let mut parts = line.split_whitespace();

        raise_error_unless!(
            parts.next() == Some("p"),
            ErrorKind::InvalidData,
            "Invalid header found"
        );

        let problem = parts.next();
        raise_error_unless!(
            problem.is_some()
                && self
                    .problem
                    .as_deref()
                    .is_none_or(|expected| problem == Some(expected)),
            ErrorKind::InvalidData,
            format!("Unexpected problem identifier {problem:?} in header")
        );

        let n: NumNodes = parse_next_value!(parts, "Header>Number of nodes");
        let m: NumEdges = parse_next_value!(parts, "Header>Number of edges");
        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            "Header is longer than expected"
        );

        Ok((n, m))
    }

    /// Reads header and edges; endpoints are converted to 0-indexed nodes and range-checked
    pub fn try_read_edges<R: BufRead>(&self, reader: R) -> Result<(NumNodes, Vec<Edge>)> {
        let mut lines = reader.lines();

        let header = next_content_line(&mut lines, &self.comment_identifier)?
            .ok_or_else(|| io_error!(ErrorKind::NotFound, "Header not found"))?;
        let (n, m) = self.parse_header(&header)?;

        let mut edges = Vec::new();
        while let Some(line) = next_content_line(&mut lines, &self.comment_identifier)? {
            let mut parts = line.split_whitespace();
            let u: Node = parse_next_value!(parts, "Source node");
            let v: Node = parse_next_value!(parts, "Target node");

            raise_error_unless!(
                (1..=n).contains(&u) && (1..=n).contains(&v),
                ErrorKind::InvalidData,
                format!("Edge {u} {v} is out of range for {n} nodes")
            );

            edges.push(Edge(u - 1, v - 1));
        }

        raise_error_unless!(
            edges.len() == m as usize,
            ErrorKind::InvalidData,
            format!("Header announces {m} edges, but {} were found", edges.len())
        );

        Ok((n, edges))
    }
}

impl<G: GraphFromScratch> GraphReader<G> for EdgeListReader {
    /// Duplicate edges are skipped, see [`GraphFromScratch::from_edges`].
    /// Use [`EdgeListReader::try_read_edges`] together with
    /// [`UndirectedGraph::try_from_edges`] to reject them instead.
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let (n, edges) = self.try_read_edges(reader)?;
        Ok(G::from_edges(n, edges))
    }
}

/// Trait for creating graphs form an EdgeListReader.
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
    G: GraphFromScratch,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListWriter {
    problem: String,
}

impl Default for EdgeListWriter {
    fn default() -> Self {
        Self {
            problem: "fm".to_string(),
        }
    }
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the problem identifier written to the header
    pub fn problem<S: Into<String>>(mut self, problem: S) -> Self {
        self.problem = problem.into();
        self
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> GraphWriter<G> for EdgeListWriter {
    /// Every edge is written once in normalized form, sorted
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        let edges = graph.edges(true).sorted().collect_vec();
        writeln!(
            writer,
            "p {} {} {}",
            self.problem,
            graph.number_of_nodes(),
            edges.len()
        )?;

        for Edge(u, v) in edges {
            writeln!(writer, "{} {}", u + 1, v + 1)?;
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

impl<G: AdjacencyList + GraphEdgeOrder> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}
