use super::DependencyResolver;
use crate::package_graph::domain::{DependencyGraph, NodeId, PackageRecord};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// GraphBuilder service producing immutable dependency graph snapshots
///
/// Runs in time linear in the total number of dependency specifiers. Cycles
/// are legal input and are left for the analytics engine to report.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Builds forward and reverse adjacency for a package collection.
    ///
    /// Every record name is interned, in index order, even when it has no
    /// edges. Each dependency specifier is resolved with
    /// [`DependencyResolver::resolve_graph_node`]; empty and soname names add
    /// no edge. Duplicate edges collapse into one.
    pub fn build(records: Vec<PackageRecord>) -> DependencyGraph {
        let mut interner = Interner::default();
        for record in &records {
            interner.intern(record.name());
        }

        let mut edges: Vec<(NodeId, NodeId)> = Vec::new();
        let mut seen: HashSet<(NodeId, NodeId)> = HashSet::new();
        for record in &records {
            let source = interner.intern(record.name());
            for specifier in record.dependencies() {
                let Some(target) = DependencyResolver::resolve_graph_node(specifier) else {
                    continue;
                };
                let target = interner.intern(target.as_str());
                if seen.insert((source, target)) {
                    edges.push((source, target));
                }
            }
        }

        let node_count = interner.names.len();
        let mut forward = vec![Vec::new(); node_count];
        let mut reverse = vec![Vec::new(); node_count];
        for &(source, target) in &edges {
            forward[source.index()].push(target);
            reverse[target.index()].push(source);
        }

        debug!(
            packages = records.len(),
            nodes = node_count,
            edges = edges.len(),
            "built dependency graph"
        );

        DependencyGraph::from_parts(records, interner.names, interner.ids, forward, reverse)
    }
}

#[derive(Default)]
struct Interner {
    names: Vec<String>,
    ids: HashMap<String, NodeId>,
}

impl Interner {
    fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = NodeId::new(self.names.len());
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }
}
