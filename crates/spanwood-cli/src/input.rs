//! Edge-list reader.
//!
//! One edge per line: `<source> <destination> <weight>`, whitespace separated. Lines with fewer
//! than three tokens are skipped and tokens past the third are ignored.

use spanwood::WeightedEdge;
use std::io::Read;
use std::num::ParseFloatError;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("{path}:{line}: invalid weight `{token}`: {source}")]
    InvalidWeight {
        path: String,
        line: usize,
        token: String,
        source: ParseFloatError,
    },
}

pub fn parse_edges(text: &str, path: &str) -> Result<Vec<WeightedEdge>, InputError> {
    let mut edges: Vec<WeightedEdge> = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let mut tokens = line.split_whitespace();
        let (Some(v), Some(w), Some(token)) = (tokens.next(), tokens.next(), tokens.next()) else {
            continue;
        };
        let weight = token
            .parse::<f64>()
            .map_err(|source| InputError::InvalidWeight {
                path: path.to_string(),
                line: i + 1,
                token: token.to_string(),
                source,
            })?;
        let edge = WeightedEdge::new(v, w, weight);
        tracing::debug!("edge {edge}");
        edges.push(edge);
    }
    Ok(edges)
}

fn read_source(path: &str) -> Result<String, InputError> {
    let read = || -> std::io::Result<String> {
        if path == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        } else {
            std::fs::read_to_string(path)
        }
    };
    read().map_err(|source| InputError::Read {
        path: path.to_string(),
        source,
    })
}

/// Reads and concatenates the edges of every input, in order.
pub fn read_edges(paths: &[String]) -> Result<Vec<WeightedEdge>, InputError> {
    let mut edges: Vec<WeightedEdge> = Vec::new();
    for path in paths {
        tracing::info!("processing {path}");
        let text = read_source(path)?;
        edges.extend(parse_edges(&text, path)?);
    }
    Ok(edges)
}
