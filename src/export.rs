//! Catalog export: serialize enumerated graphs as text.
//!
//! Two textual forms:
//!
//! ```text
//! adjacency string   100101                  C(n,2) pair bits, code order
//! record             G3:4:3:6:100101         name:n:edges:max_edges:bits
//! ```
//!
//! plus JSON lines (`{"vertices":4,"edges":[[1,2],..],"code":"37"}`) for
//! tools that would rather not parse bit strings.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::model::{order_for_pairs, pair_count, Graph, Vertex};
use crate::{Error, Result};

/// Pair bits of `graph` under the natural order, most significant first.
pub fn to_adjacency_string(graph: &Graph) -> String {
    graph
        .upper_triangle()
        .into_iter()
        .map(|b| if b { '1' } else { '0' })
        .collect()
}

/// Rebuild a graph from its adjacency string. The vertex count is recovered
/// from the length, which must be `C(n, 2)` for some `n`.
pub fn from_adjacency_string(bits: &str) -> Result<Graph> {
    let n = order_for_pairs(bits.len()).ok_or_else(|| {
        Error::MalformedEncoding(format!(
            "length {} is not n(n-1)/2 for any supported n",
            bits.len()
        ))
    })?;

    let mut edges = Vec::new();
    let mut chars = bits.chars();
    for i in 1..=n {
        for j in (i + 1)..=n {
            match chars.next() {
                Some('1') => edges.push((i, j)),
                Some('0') => {}
                other => {
                    return Err(Error::MalformedEncoding(format!(
                        "unexpected {other:?} at pair ({i}, {j})"
                    )));
                }
            }
        }
    }
    Graph::from_edges(n, &edges)
}

/// One catalog line: `name:n:edges:max_edges:bits`.
pub fn to_record(name: &str, graph: &Graph) -> String {
    format!(
        "{}:{}:{}:{}:{}",
        name,
        graph.order(),
        graph.edge_count(),
        pair_count(graph.order()),
        to_adjacency_string(graph)
    )
}

/// Parse a catalog line back into its name and graph. Every field is
/// checked against the bit string.
pub fn parse_record(line: &str) -> Result<(String, Graph)> {
    let fields: Vec<&str> = line.trim().split(':').collect();
    let &[name, order, edges, max_edges, bits] = fields.as_slice() else {
        return Err(Error::MalformedEncoding(format!(
            "expected 5 ':'-separated fields, got {}",
            fields.len()
        )));
    };

    let order = parse_field("vertex count", order)?;
    let edges = parse_field("edge count", edges)?;
    let max_edges = parse_field("max edges", max_edges)?;

    let graph = from_adjacency_string(bits)?;
    if graph.order() != order {
        return Err(Error::MalformedEncoding(format!(
            "record says {order} vertices, bits encode {}",
            graph.order()
        )));
    }
    if max_edges != pair_count(order) {
        return Err(Error::MalformedEncoding(format!(
            "max edges {max_edges} does not match {order} vertices"
        )));
    }
    if graph.edge_count() != edges {
        return Err(Error::MalformedEncoding(format!(
            "record says {edges} edges, bits encode {}",
            graph.edge_count()
        )));
    }
    Ok((name.to_string(), graph))
}

fn parse_field(what: &str, field: &str) -> Result<usize> {
    field
        .parse()
        .map_err(|_| Error::MalformedEncoding(format!("{what} is not a number: {field:?}")))
}

/// Write a record catalog: a short header, then one `G<k>` record per graph.
/// Returns the number of graphs written.
pub fn write_catalog<I>(graphs: I, writer: &mut dyn Write) -> Result<usize>
where
    I: IntoIterator<Item = Graph>,
{
    writeln!(writer, "# orderly-graphs catalog")?;
    writeln!(writer, "# name:vertices:edges:max_edges:adjacency")?;

    let mut written = 0;
    for graph in graphs {
        writeln!(writer, "{}", to_record(&format!("G{written}"), &graph))?;
        written += 1;
    }
    Ok(written)
}

/// Read a catalog written by [`write_catalog`]. Blank lines and `#`
/// comments are skipped.
pub fn read_catalog(text: &str) -> Result<Vec<(String, Graph)>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(parse_record)
        .collect()
}

/// JSON shape of one exported graph. The code is a decimal string since
/// it can exceed what JSON numbers carry exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphRecord {
    pub vertices: usize,
    pub edges: Vec<(Vertex, Vertex)>,
    pub code: String,
}

impl From<&Graph> for GraphRecord {
    fn from(graph: &Graph) -> Self {
        Self {
            vertices: graph.order(),
            edges: graph.edges().collect(),
            code: graph.natural_code().to_string(),
        }
    }
}

/// Write one JSON object per line. Returns the number of graphs written.
pub fn write_json_lines<I>(graphs: I, writer: &mut dyn Write) -> Result<usize>
where
    I: IntoIterator<Item = Graph>,
{
    let mut written = 0;
    for graph in graphs {
        serde_json::to_writer(&mut *writer, &GraphRecord::from(&graph))?;
        writeln!(writer)?;
        written += 1;
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn path4() -> Graph {
        Graph::from_edges(4, &[(1, 2), (2, 3), (3, 4)]).unwrap()
    }

    #[test]
    fn test_adjacency_string() {
        assert_eq!(to_adjacency_string(&path4()), "100101");
        assert_eq!(to_adjacency_string(&Graph::empty(1).unwrap()), "");
        assert_eq!(to_adjacency_string(&Graph::complete(3).unwrap()), "111");
    }

    #[test]
    fn test_from_adjacency_string() {
        assert_eq!(from_adjacency_string("100101").unwrap(), path4());
        assert_eq!(from_adjacency_string("").unwrap(), Graph::empty(1).unwrap());
        assert_eq!(from_adjacency_string("1").unwrap(), Graph::complete(2).unwrap());
    }

    #[test]
    fn test_from_adjacency_string_bad_length() {
        for bits in ["10", "1010", "1111111"] {
            assert!(
                matches!(from_adjacency_string(bits), Err(Error::MalformedEncoding(_))),
                "{bits}"
            );
        }
    }

    #[test]
    fn test_from_adjacency_string_bad_char() {
        assert!(matches!(from_adjacency_string("1x0"), Err(Error::MalformedEncoding(_))));
    }

    #[test]
    fn test_record() {
        assert_eq!(to_record("P4", &path4()), "P4:4:3:6:100101");
        let (name, graph) = parse_record("P4:4:3:6:100101\n").unwrap();
        assert_eq!(name, "P4");
        assert_eq!(graph, path4());
    }

    #[test]
    fn test_parse_record_rejects_inconsistent_fields() {
        for line in [
            "P4:4:3:6",
            "P4:4:3:6:100101:extra",
            "P4:four:3:6:100101",
            "P4:5:3:6:100101",
            "P4:4:2:6:100101",
            "P4:4:3:7:100101",
            "P4:4:3:6:10010",
        ] {
            assert!(
                matches!(parse_record(line), Err(Error::MalformedEncoding(_))),
                "{line}"
            );
        }
    }

    #[test]
    fn test_write_and_read_catalog() {
        let graphs = vec![Graph::empty(3).unwrap(), Graph::complete(3).unwrap()];
        let mut out = Vec::new();
        let written = write_catalog(graphs.clone(), &mut out).unwrap();
        assert_eq!(written, 2);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("# orderly-graphs catalog\n"));
        assert!(text.contains("G0:3:0:3:000\n"));
        assert!(text.contains("G1:3:3:3:111\n"));

        let back: Vec<Graph> = read_catalog(&text).unwrap().into_iter().map(|(_, g)| g).collect();
        assert_eq!(back, graphs);
    }

    #[test]
    fn test_json_lines() {
        let mut out = Vec::new();
        let written = write_json_lines(vec![path4()], &mut out).unwrap();
        assert_eq!(written, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"vertices\":4,\"edges\":[[1,2],[2,3],[3,4]],\"code\":\"37\"}\n"
        );
    }
}
