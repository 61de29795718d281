//! Subgraph view

use crate::package_graph::domain::{ExtractionMode, Subgraph};
use serde::Serialize;

/// An extracted subgraph together with the query that produced it
///
/// Serializes flat: `{ "root", "mode", "maxDepth"?, "nodes", "edges" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubgraphView {
    pub root: String,
    #[serde(flatten)]
    pub mode: ExtractionMode,
    #[serde(flatten)]
    pub subgraph: Subgraph,
}
