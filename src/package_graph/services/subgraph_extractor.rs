use crate::package_graph::domain::subgraph::{EXTERNAL_VERSION, UNKNOWN_VERSION};
use crate::package_graph::domain::{
    DependencyGraph, EdgeKind, ExtractionMode, NodeId, Subgraph, SubgraphEdge, SubgraphNode,
};
use std::collections::HashSet;

/// SubgraphExtractor service cutting renderable fragments out of a snapshot
///
/// Both modes return self-consistent fragments: every edge endpoint is in
/// the node list, with placeholder nodes standing in for names that have no
/// record in the index. An unknown root yields a single placeholder node.
#[derive(Debug, Clone, Copy)]
pub struct SubgraphExtractor<'g> {
    graph: &'g DependencyGraph,
}

impl<'g> SubgraphExtractor<'g> {
    pub fn new(graph: &'g DependencyGraph) -> Self {
        Self { graph }
    }

    pub fn extract(&self, root: &str, mode: ExtractionMode) -> Subgraph {
        match mode {
            ExtractionMode::Bounded { max_depth } => self.bounded(root, max_depth),
            ExtractionMode::Transitive => self.transitive(root),
        }
    }

    /// Depth-limited forward walk from `root`.
    ///
    /// Packages within `max_depth` hops are expanded once each; dependencies
    /// one hop past the limit appear as nodes but are not expanded. Targets
    /// missing from the index become `unknown` placeholders. All edges are
    /// [`EdgeKind::Direct`].
    fn bounded(&self, root: &str, max_depth: usize) -> Subgraph {
        let mut fragment = FragmentBuilder::default();

        let Some(root_id) = self.known_node(root) else {
            fragment.add_node(SubgraphNode::placeholder(root, UNKNOWN_VERSION));
            return fragment.finish();
        };

        let mut visited = vec![false; self.graph.node_count()];
        let mut stack = vec![(root_id, 0usize)];

        while let Some((id, depth)) = stack.pop() {
            if depth > max_depth {
                fragment.add_node(self.node_for(id, UNKNOWN_VERSION));
                continue;
            }
            if visited[id.index()] {
                continue;
            }
            visited[id.index()] = true;
            fragment.add_node(self.node_for(id, UNKNOWN_VERSION));

            let source = self.graph.name(id);
            for &dep in self.graph.dependencies(id) {
                fragment.add_edge(source, self.graph.name(dep), EdgeKind::Direct);
                if self.graph.contains_package(self.graph.name(dep)) {
                    continue;
                }
                fragment.add_node(SubgraphNode::placeholder(self.graph.name(dep), UNKNOWN_VERSION));
            }
            stack.extend(
                self.graph
                    .dependencies(id)
                    .iter()
                    .rev()
                    .filter(|&&dep| self.graph.contains_package(self.graph.name(dep)))
                    .map(|&dep| (dep, depth + 1)),
            );
        }

        fragment.finish()
    }

    /// Full forward and reverse closures of `root`, as a star around it.
    ///
    /// Forward members link `root -> member`, tagged `direct` when `root`
    /// depends on the member itself and `transitive` otherwise. Reverse
    /// members link `member -> root`, tagged `reverse` or
    /// `reverse-transitive` the same way. Members without a record become
    /// `external` placeholders.
    fn transitive(&self, root: &str) -> Subgraph {
        let mut fragment = FragmentBuilder::default();

        let Some(root_id) = self.graph.node_id(root) else {
            fragment.add_node(SubgraphNode::placeholder(root, EXTERNAL_VERSION));
            return fragment.finish();
        };
        fragment.add_node(self.node_for(root_id, EXTERNAL_VERSION));

        // Out-of-index names have no forward edges, so walking every node
        // equals expanding only known packages.
        let graph = self.graph;
        let forward_members = self.closure(root_id, move |id| graph.dependencies(id));
        let reverse_members = self.closure(root_id, move |id| graph.dependents(id));

        for &member in forward_members.iter().chain(&reverse_members) {
            fragment.add_node(self.node_for(member, EXTERNAL_VERSION));
        }

        let direct = self.graph.dependencies(root_id);
        for &member in &forward_members {
            let kind = if direct.contains(&member) {
                EdgeKind::Direct
            } else {
                EdgeKind::Transitive
            };
            fragment.add_edge(root, self.graph.name(member), kind);
        }

        let direct_reverse = self.graph.dependents(root_id);
        for &member in &reverse_members {
            let kind = if direct_reverse.contains(&member) {
                EdgeKind::Reverse
            } else {
                EdgeKind::ReverseTransitive
            };
            fragment.add_edge(self.graph.name(member), root, kind);
        }

        fragment.finish()
    }

    /// Every node reachable from `root` through `neighbours`, in depth-first
    /// discovery order. `root` is a member only if a cycle leads back to it.
    fn closure<F>(&self, root: NodeId, neighbours: F) -> Vec<NodeId>
    where
        F: Fn(NodeId) -> &'g [NodeId],
    {
        let node_count = self.graph.node_count();
        let mut expanded = vec![false; node_count];
        let mut is_member = vec![false; node_count];
        let mut members = Vec::new();

        expanded[root.index()] = true;
        let mut stack: Vec<NodeId> = neighbours(root).iter().rev().copied().collect();

        while let Some(id) = stack.pop() {
            if !is_member[id.index()] {
                is_member[id.index()] = true;
                members.push(id);
            }
            if expanded[id.index()] {
                continue;
            }
            expanded[id.index()] = true;
            stack.extend(neighbours(id).iter().rev());
        }

        members
    }

    fn known_node(&self, name: &str) -> Option<NodeId> {
        if self.graph.contains_package(name) {
            self.graph.node_id(name)
        } else {
            None
        }
    }

    fn node_for(&self, id: NodeId, placeholder_version: &str) -> SubgraphNode {
        let name = self.graph.name(id);
        match self.graph.record(name) {
            Some(record) => SubgraphNode::package(
                name,
                record.version(),
                record.size(),
                record.dependencies().to_vec(),
            ),
            None => SubgraphNode::placeholder(name, placeholder_version),
        }
    }
}

/// Accumulates nodes in first-insertion order without duplicates
#[derive(Default)]
struct FragmentBuilder {
    nodes: Vec<SubgraphNode>,
    seen: HashSet<String>,
    edges: Vec<SubgraphEdge>,
}

impl FragmentBuilder {
    fn add_node(&mut self, node: SubgraphNode) {
        if self.seen.insert(node.id.clone()) {
            self.nodes.push(node);
        }
    }

    fn add_edge(&mut self, source: &str, target: &str, kind: EdgeKind) {
        self.edges.push(SubgraphEdge {
            source: source.to_string(),
            target: target.to_string(),
            kind,
        });
    }

    fn finish(self) -> Subgraph {
        Subgraph {
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}
