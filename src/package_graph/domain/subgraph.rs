use serde::Serialize;

/// Version shown for bounded-mode dependency targets missing from the index
pub const UNKNOWN_VERSION: &str = "unknown";

/// Version shown for transitive-mode closure members missing from the index
pub const EXTERNAL_VERSION: &str = "external";

/// How a subgraph is cut out of the full dependency graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "mode")]
pub enum ExtractionMode {
    /// Forward edges only, at most `max_depth` hops from the root
    Bounded { max_depth: usize },
    /// Full forward closure plus full reverse closure, star-shaped on the root
    Transitive,
}

/// Relationship an edge represents, relative to the subgraph root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeKind {
    Direct,
    Transitive,
    Reverse,
    ReverseTransitive,
}

impl EdgeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeKind::Direct => "direct",
            EdgeKind::Transitive => "transitive",
            EdgeKind::Reverse => "reverse",
            EdgeKind::ReverseTransitive => "reverse-transitive",
        }
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of an extracted subgraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubgraphNode {
    pub id: String,
    pub name: String,
    pub version: String,
    /// Download size in bytes, 0 for placeholders
    pub size: u64,
    /// Raw dependency specifiers, empty for placeholders
    pub dependencies: Vec<String>,
    /// Set only for nodes built by [`SubgraphNode::placeholder`]
    #[serde(skip)]
    placeholder: bool,
}

impl SubgraphNode {
    pub fn placeholder(name: &str, version: &str) -> Self {
        Self {
            id: name.to_string(),
            name: name.to_string(),
            version: version.to_string(),
            size: 0,
            dependencies: Vec::new(),
            placeholder: true,
        }
    }

    /// Node for a package that has a record in the index
    pub fn package(name: &str, version: &str, size: u64, dependencies: Vec<String>) -> Self {
        Self {
            id: name.to_string(),
            name: name.to_string(),
            version: version.to_string(),
            size,
            dependencies,
            placeholder: false,
        }
    }

    /// True for nodes standing in for packages absent from the index
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }
}

/// A directed edge of an extracted subgraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubgraphEdge {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
}

/// Self-contained graph fragment: every edge endpoint is in `nodes`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Subgraph {
    pub nodes: Vec<SubgraphNode>,
    pub edges: Vec<SubgraphEdge>,
}

impl Subgraph {
    pub fn node(&self, id: &str) -> Option<&SubgraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    pub fn edge(&self, source: &str, target: &str) -> Option<&SubgraphEdge> {
        self.edges
            .iter()
            .find(|e| e.source == source && e.target == target)
    }
}
