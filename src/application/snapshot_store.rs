use crate::package_graph::domain::DependencyGraph;
use crate::package_graph::services::{GraphBuilder, IndexParser};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

/// SnapshotStore publishing the current dependency graph
///
/// Readers take an `Arc` to the snapshot that is current when they ask and
/// keep using it for the whole query, so a concurrent reload never shows them
/// a forward list from one index and a reverse list from another. Writers
/// build the replacement snapshot without holding the lock and swap it in
/// with a single write.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    current: Arc<RwLock<Arc<DependencyGraph>>>,
}

impl SnapshotStore {
    /// Creates a store holding the empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `graph`
    pub fn with_graph(graph: DependencyGraph) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(graph))),
        }
    }

    /// The snapshot current at the time of the call
    pub fn current(&self) -> Arc<DependencyGraph> {
        Arc::clone(&self.current.read())
    }

    /// Replaces the current snapshot and returns the one it replaced
    pub fn publish(&self, graph: DependencyGraph) -> Arc<DependencyGraph> {
        self.publish_shared(Arc::new(graph))
    }

    /// Swaps in an already shared snapshot and returns the one it replaced
    pub fn publish_shared(&self, next: Arc<DependencyGraph>) -> Arc<DependencyGraph> {
        info!(
            packages = next.package_count(),
            nodes = next.node_count(),
            edges = next.edge_count(),
            "publishing dependency graph snapshot"
        );
        std::mem::replace(&mut *self.current.write(), next)
    }

    /// Parses `content`, builds a new snapshot and publishes it.
    ///
    /// Returns the snapshot built from `content`, even if another writer has
    /// already replaced it by the time this returns.
    pub fn reload(&self, content: &str) -> Arc<DependencyGraph> {
        let next = Arc::new(GraphBuilder::build(IndexParser::parse(content)));
        self.publish_shared(Arc::clone(&next));
        next
    }
}
