//! Output renderers: Graphviz DOT and JSON.

use serde::Serialize;
use spanwood::Edge;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Directed,
    Undirected,
}

fn quote(id: &str) -> String {
    let mut out = String::with_capacity(id.len() + 2);
    out.push('"');
    for ch in id.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

/// Renders `edges` as a graph named `span`, declaring each node once in first-appearance order.
pub fn dot<E: Edge>(edges: &[E], orientation: Orientation, weights: bool) -> String {
    let (keyword, arrow) = match orientation {
        Orientation::Directed => ("digraph", "->"),
        Orientation::Undirected => ("graph", "--"),
    };

    let index = spanwood::graphlib::VertexIndex::from_edges(edges);
    let mut out = String::new();
    let _ = writeln!(out, "{keyword} span {{");
    for label in index.labels() {
        let _ = writeln!(out, "  {};", quote(label));
    }
    for e in edges {
        let _ = write!(
            out,
            "  {} {arrow} {}",
            quote(e.source()),
            quote(e.destination())
        );
        if weights {
            let _ = write!(out, " [label=\"{}\"]", e.weight());
        }
        out.push_str(";\n");
    }
    out.push_str("}\n");
    out
}

#[derive(Debug, Serialize)]
pub struct EdgeOut<'a> {
    pub source: &'a str,
    pub destination: &'a str,
    /// `None` for synthetic (infinite) edges.
    pub weight: Option<f64>,
    pub synthetic: bool,
}

#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub algorithm: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<&'a str>,
    pub total_weight: f64,
    pub synthetic: usize,
    pub edges: Vec<EdgeOut<'a>>,
}

impl<'a> Report<'a> {
    pub fn new<E: Edge>(
        algorithm: &'static str,
        root: Option<&'a str>,
        edges: &'a [E],
        is_synthetic: impl Fn(&E) -> bool,
    ) -> Self {
        let edges: Vec<EdgeOut<'a>> = edges
            .iter()
            .map(|e| {
                let synthetic = is_synthetic(e);
                EdgeOut {
                    source: e.source(),
                    destination: e.destination(),
                    weight: (!synthetic).then(|| e.weight()),
                    synthetic,
                }
            })
            .collect();
        Self {
            algorithm,
            root,
            total_weight: edges.iter().filter_map(|e| e.weight).sum(),
            synthetic: edges.iter().filter(|e| e.synthetic).count(),
            edges,
        }
    }
}

pub fn json(report: &Report<'_>, pretty: bool) -> Result<String, serde_json::Error> {
    let mut text = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    text.push('\n');
    Ok(text)
}
