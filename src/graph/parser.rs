use super::{check_vertex_count, Edge, Graph};
use crate::error::{GraphError, Result};
use std::io::Read;
use std::str::FromStr;

/// Upper bound on edges reserved up front, so a bogus header cannot force a huge allocation.
const MAX_PREALLOCATED_EDGES: usize = 1 << 16;

/// Whitespace-separated tokens, each tagged with its 1-based line number.
struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Tokens<'a> {
        let inner = text
            .lines()
            .enumerate()
            .flat_map(|(index, line)| line.split_whitespace().map(move |token| (index + 1, token)));
        Tokens {
            inner: Box::new(inner),
        }
    }

    fn next_number<T: FromStr>(&mut self, expected: &'static str) -> Result<T> {
        let (line, token) = self
            .inner
            .next()
            .ok_or(GraphError::UnexpectedEof { expected })?;
        token.parse().map_err(|_| GraphError::InvalidInteger {
            expected,
            token: token.to_string(),
            line,
        })
    }
}

/// Reads a graph in the `V E` / `u v w` text format from any reader.
///
/// # Arguments
///
/// * `reader` - Source of the graph description, e.g. an opened file.
///
/// # Returns
///
/// The validated graph, or the first problem found in the input.
pub fn read_graph<R: Read>(mut reader: R) -> Result<Graph> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_graph(&text)
}

/// Parses a graph from its textual description.
///
/// The header holds the vertex and edge counts, followed by exactly `E` triples of
/// two endpoints and a signed weight. Line breaks only matter for error messages.
/// Anything after the last edge is rejected.
pub fn parse_graph(text: &str) -> Result<Graph> {
    let mut tokens = Tokens::new(text);

    let vertex_count: usize = tokens.next_number("vertex count")?;
    check_vertex_count(vertex_count)?;
    let edge_count: usize = tokens.next_number("edge count")?;

    let mut edges = Vec::with_capacity(edge_count.min(MAX_PREALLOCATED_EDGES));
    for _ in 0..edge_count {
        let u = tokens.next_number("edge endpoint")?;
        let v = tokens.next_number("edge endpoint")?;
        let weight = tokens.next_number("edge weight")?;
        edges.push(Edge::new(u, v, weight));
    }

    if let Some((line, token)) = tokens.inner.next() {
        return Err(GraphError::TrailingInput {
            token: token.to_string(),
            line,
        });
    }

    let graph = Graph::new(vertex_count, edges)?;
    log::info!(
        "Loaded graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}
