pub mod analysis;
pub mod dependency_graph;
pub mod package;
pub mod subgraph;

pub use analysis::{BusFactor, CriticalPackage, SizeImpact};
pub use dependency_graph::{DependencyGraph, NodeId};
pub use package::{PackageName, PackageRecord, SONAME_PREFIX};
pub use subgraph::{EdgeKind, ExtractionMode, Subgraph, SubgraphEdge, SubgraphNode};
