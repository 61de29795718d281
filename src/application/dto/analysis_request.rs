use crate::package_graph::domain::ExtractionMode;

/// AnalysisRequest - one query against the current graph snapshot
///
/// `package: None` on the focus-package queries means "use the default
/// focus package" (`busybox` when loaded, else the first record).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisRequest {
    /// Size impact, bus factor, depth and notable facts of one package
    Stats { package: Option<String> },
    /// Packages with the most direct dependents
    Critical { limit: usize },
    /// Dependency cycles
    Cycles,
    /// Packages no other package depends on
    Leaves,
    /// Shortest dependency chain between two packages
    Path { from: String, to: String },
    /// Subgraph around one package
    Subgraph {
        package: Option<String>,
        mode: ExtractionMode,
    },
    /// Case-insensitive search over names and descriptions
    Search { query: String },
    /// Ecosystem-wide summary
    Overview { limit: usize },
    /// Full metadata and stats of one loaded package
    Details { package: String },
}

impl AnalysisRequest {
    /// Short name of the query, used in logs and progress messages
    pub fn name(&self) -> &'static str {
        match self {
            AnalysisRequest::Stats { .. } => "stats",
            AnalysisRequest::Critical { .. } => "critical",
            AnalysisRequest::Cycles => "cycles",
            AnalysisRequest::Leaves => "leaves",
            AnalysisRequest::Path { .. } => "path",
            AnalysisRequest::Subgraph { .. } => "subgraph",
            AnalysisRequest::Search { .. } => "search",
            AnalysisRequest::Overview { .. } => "overview",
            AnalysisRequest::Details { .. } => "details",
        }
    }
}
