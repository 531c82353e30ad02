use serde::Serialize;
use std::fmt;

/// A weighted, directed edge between two labelled vertices.
///
/// Undirected consumers (Kruskal) simply ignore the orientation.
pub trait Edge {
    fn source(&self) -> &str;
    fn destination(&self) -> &str;
    fn weight(&self) -> f64;
}

impl<E: Edge + ?Sized> Edge for &E {
    fn source(&self) -> &str {
        (**self).source()
    }

    fn destination(&self) -> &str {
        (**self).destination()
    }

    fn weight(&self) -> f64 {
        (**self).weight()
    }
}

/// Owned edge value, used by the CLI reader and throughout the tests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedEdge {
    pub source: String,
    pub destination: String,
    pub weight: f64,
}

impl WeightedEdge {
    pub fn new(source: impl Into<String>, destination: impl Into<String>, weight: f64) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            weight,
        }
    }
}

impl Edge for WeightedEdge {
    fn source(&self) -> &str {
        &self.source
    }

    fn destination(&self) -> &str {
        &self.destination
    }

    fn weight(&self) -> f64 {
        self.weight
    }
}

impl fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {}", self.source, self.destination, self.weight)
    }
}
