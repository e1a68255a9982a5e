//! graph6 codec and a lazy reader for graph streams.
//!
//! graph6 is the line-oriented format written by nauty's `geng` and used by
//! most graph catalogues. Each line encodes one undirected simple graph: a
//! size prefix followed by the upper triangle of the adjacency matrix,
//! column by column, packed six bits per printable byte (offset 63).
//!
//! Vertices decode as `0..n`. Encoding relabels vertices to `0..n` in
//! ascending order first.

use std::io::BufRead;

use crate::graph::{Graph, Vertex};

const HEADER: &str = ">>graph6<<";
const BIAS: u8 = 63;
const LONG: u8 = 126;

#[derive(Debug, thiserror::Error)]
pub enum Graph6Error {
    #[error("line {line}: empty graph6 record")]
    Empty { line: usize },

    #[error("line {line}: byte {byte:#04x} outside the graph6 range")]
    InvalidByte { line: usize, byte: u8 },

    #[error("line {line}: sparse6/digraph6 records are not supported")]
    Unsupported { line: usize },

    #[error("line {line}: expected {expected} adjacency bytes, found {found}")]
    Length {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: graph too large ({order} vertices)")]
    TooLarge { line: usize, order: u64 },

    #[error("failed to read graph6 input: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Decode one graph6 record.
///
/// # Errors
///
/// Returns a [`Graph6Error`] when the record is empty, contains bytes
/// outside `63..=126`, or has the wrong number of adjacency bytes.
pub fn decode(record: &str) -> Result<Graph, Graph6Error> {
    decode_line(record, 1)
}

fn decode_line(record: &str, line: usize) -> Result<Graph, Graph6Error> {
    let record = record.trim();
    let record = record.strip_prefix(HEADER).unwrap_or(record);
    let bytes = record.as_bytes();

    match bytes.first() {
        None => return Err(Graph6Error::Empty { line }),
        Some(b':' | b'&' | b';') => return Err(Graph6Error::Unsupported { line }),
        Some(_) => {}
    }
    if let Some(&byte) = bytes.iter().find(|&&b| !(BIAS..=LONG).contains(&b)) {
        return Err(Graph6Error::InvalidByte { line, byte });
    }

    let (order, body) = decode_order(bytes, line)?;
    let n = u32::try_from(order).map_err(|_| Graph6Error::TooLarge { line, order })?;
    let pairs = (n as usize) * (n as usize).saturating_sub(1) / 2;
    let expected = pairs.div_ceil(6);
    if body.len() != expected {
        return Err(Graph6Error::Length {
            line,
            expected,
            found: body.len(),
        });
    }

    let mut graph = Graph::with_vertices(n);
    let mut bit = 0usize;
    for j in 1..n {
        for i in 0..j {
            let byte = body[bit / 6] - BIAS;
            if (byte >> (5 - bit % 6)) & 1 == 1 {
                graph.add_edge(i, j);
            }
            bit += 1;
        }
    }
    Ok(graph)
}

fn decode_order(bytes: &[u8], line: usize) -> Result<(u64, &[u8]), Graph6Error> {
    let take = |width: usize, from: usize| -> Result<u64, Graph6Error> {
        let chunk = bytes.get(from..from + width).ok_or(Graph6Error::Length {
            line,
            expected: from + width,
            found: bytes.len(),
        })?;
        Ok(chunk
            .iter()
            .fold(0u64, |acc, &b| (acc << 6) | u64::from(b - BIAS)))
    };

    if bytes[0] != LONG {
        return Ok((u64::from(bytes[0] - BIAS), &bytes[1..]));
    }
    if bytes.get(1) != Some(&LONG) {
        return Ok((take(3, 1)?, &bytes[4..]));
    }
    Ok((take(6, 2)?, &bytes[8..]))
}

/// Encode a graph as a graph6 record (without trailing newline).
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn encode(graph: &Graph) -> String {
    let graph = graph.relabeled();
    let n = graph.order();
    let mut out: Vec<u8> = Vec::new();

    let n64 = n as u64;
    if n <= 62 {
        out.push(BIAS + n64 as u8);
    } else if n <= 258_047 {
        out.push(LONG);
        out.extend((0..3).rev().map(|k| BIAS + ((n64 >> (6 * k)) & 0x3f) as u8));
    } else {
        out.push(LONG);
        out.push(LONG);
        out.extend((0..6).rev().map(|k| BIAS + ((n64 >> (6 * k)) & 0x3f) as u8));
    }

    let mut current = 0u8;
    let mut filled = 0;
    for j in 1..n as Vertex {
        for i in 0..j {
            current = (current << 1) | u8::from(graph.has_edge(i, j));
            filled += 1;
            if filled == 6 {
                out.push(BIAS + current);
                current = 0;
                filled = 0;
            }
        }
    }
    if filled > 0 {
        out.push(BIAS + (current << (6 - filled)));
    }

    String::from_utf8_lossy(&out).into_owned()
}

/// Lazy iterator over the graph6 records of a buffered reader.
///
/// Blank lines and the optional `>>graph6<<` header are skipped. Each item
/// is one decoded graph or the error for that line; iteration continues
/// past bad lines.
pub struct Graph6Reader<R> {
    lines: std::io::Lines<R>,
    line: usize,
}

impl<R: BufRead> Graph6Reader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for Graph6Reader<R> {
    type Item = Result<Graph, Graph6Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = match self.lines.next()? {
                Ok(raw) => raw,
                Err(err) => return Some(Err(err.into())),
            };
            self.line += 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed == HEADER {
                continue;
            }
            return Some(decode_line(trimmed, self.line));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(n: u32) -> Graph {
        Graph::from_edges((0..n).map(|i| (i, (i + 1) % n)))
    }

    #[test]
    fn decodes_known_records() {
        // Path 0-1-2 is "Bg": bits (0,1)=1 (0,2)=0 (1,2)=1 -> 101000.
        let path = decode("Bg").expect("valid record");
        assert_eq!(path.edges(), vec![(0, 1), (1, 2)]);

        let k4 = decode("C~").expect("valid record");
        assert!(k4.is_complete());
        assert_eq!(k4.order(), 4);

        let empty5 = decode("D??").expect("valid record");
        assert_eq!(empty5.order(), 5);
        assert_eq!(empty5.size(), 0);
    }

    #[test]
    fn encode_then_decode_recovers_cycle() {
        let c7 = cycle(7);
        let record = encode(&c7);
        assert_eq!(decode(&record).expect("own encoding decodes"), c7);
    }

    #[test]
    fn long_order_prefix() {
        let big = Graph::from_edges((0..70).map(|i| (i, i + 1)));
        let record = encode(&big);
        assert!(record.starts_with('~'));
        assert_eq!(decode(&record).expect("decodes"), big);
    }

    #[test]
    fn rejects_malformed_records() {
        assert!(matches!(decode(""), Err(Graph6Error::Empty { .. })));
        assert!(matches!(decode(":Fa@x^"), Err(Graph6Error::Unsupported { .. })));
        assert!(matches!(decode("C~~"), Err(Graph6Error::Length { .. })));
        assert!(matches!(decode("C\u{7f}"), Err(Graph6Error::InvalidByte { .. })));
    }

    #[test]
    fn reader_skips_blank_lines_and_header() {
        let input = ">>graph6<<\nBg\n\nC~\nC~~\n";
        let results: Vec<_> = Graph6Reader::new(input.as_bytes()).collect();
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_ok());
        assert!(matches!(results[2], Err(Graph6Error::Length { line: 5, .. })));
    }
}
