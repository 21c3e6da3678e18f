//! # Matching
//!
//! Fractional matchings are stored as a summary line `s <halves>` followed by one line
//! `u v <value>` per edge with non-zero value. Endpoints are 1-indexed and every edge is
//! written with `u < v`; `<value>` is either `0.5` or `1`.

use crate::algo::{EdgeValue, FractionalMatching};

use super::*;

/// Trait for writing a fractional matching
pub trait MatchingWrite {
    /// Tries to write the matching to a writer
    fn try_write_matching<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the matching to a file
    fn try_write_matching_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.try_write_matching(BufWriter::new(File::create(path)?))
    }
}

impl MatchingWrite for FractionalMatching {
    fn try_write_matching<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "s {}", self.total_halves())?;
        for (Edge(u, v), value) in self.iter() {
            writeln!(writer, "{} {} {}", u + 1, v + 1, value)?;
        }
        Ok(())
    }
}

/// Trait for reading a fractional matching
pub trait MatchingRead: Sized {
    /// Tries to read a matching from a given reader.
    /// Fails if a value is not `0.5` or `1`, an edge is listed twice or the summary does not
    /// match the values.
    fn try_read_matching<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the matching from a given file
    fn try_read_matching_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_matching(BufReader::new(File::open(path)?))
    }
}

impl MatchingRead for FractionalMatching {
    fn try_read_matching<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();

        let summary = next_content_line(&mut lines, "c")?
            .ok_or_else(|| io_error!(ErrorKind::NotFound, "Summary line not found"))?;
        let mut parts = summary.split_whitespace();
        raise_error_unless!(
            parts.next() == Some("s"),
            ErrorKind::InvalidData,
            "Invalid summary line found"
        );
        let halves: u64 = parse_next_value!(parts, "Summary>Total halves");

        let mut edges = Vec::new();
        while let Some(line) = next_content_line(&mut lines, "c")? {
            let mut parts = line.split_whitespace();
            let u: Node = parse_next_value!(parts, "Edge>First endpoint");
            let v: Node = parse_next_value!(parts, "Edge>Second endpoint");
            let value = parse_value(parts.next())?;

            raise_error_unless!(
                u > 0 && v > 0 && u != v,
                ErrorKind::InvalidData,
                format!("Invalid edge {u} {v}")
            );

            edges.push((Edge(u - 1, v - 1).normalized(), value));
        }

        let num_listed = edges.len();
        let matching = FractionalMatching::from_edges(edges);
        raise_error_unless!(
            matching.len() == num_listed,
            ErrorKind::InvalidData,
            "Edge listed more than once"
        );
        raise_error_unless!(
            matching.total_halves() == halves,
            ErrorKind::InvalidData,
            format!(
                "Summary announces {halves} halves, but edges sum up to {}",
                matching.total_halves()
            )
        );

        Ok(matching)
    }
}

fn parse_value(token: Option<&str>) -> Result<EdgeValue> {
    match token {
        Some("0.5") => Ok(EdgeValue::Half),
        Some("1") => Ok(EdgeValue::One),
        _ => Err(io_error!(
            ErrorKind::InvalidData,
            format!("Invalid edge value {token:?}")
        )),
    }
}
