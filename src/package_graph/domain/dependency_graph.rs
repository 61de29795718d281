use super::PackageRecord;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Interned identity of a graph node
///
/// Ids are dense indices into the snapshot's name arena. Package records are
/// interned first (in index order), followed by dependency targets that have
/// no record of their own, in order of first appearance.
///
/// A snapshot holds at most `u32::MAX` distinct names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// # Panics
    /// Panics if `index` does not fit in `u32`.
    pub(crate) fn new(index: usize) -> Self {
        match u32::try_from(index) {
            Ok(index) => Self(index),
            Err(_) => panic!("node index {index} exceeds the u32 id space"),
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// DependencyGraph aggregate: an immutable snapshot of a package collection
///
/// Holds the records it was built from, an arena of interned names, and
/// index-based forward ("depends on") and reverse ("depended on by")
/// adjacency lists. The two lists are transposes of each other. Adjacency
/// lists are deduplicated and keep first-appearance order, so every
/// traversal over a snapshot is deterministic.
///
/// A snapshot is never mutated after construction; reloading means building
/// a new one (see [`GraphBuilder`](crate::package_graph::services::GraphBuilder)).
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    records: Vec<PackageRecord>,
    record_lookup: HashMap<String, usize>,
    names: Vec<String>,
    ids: HashMap<String, NodeId>,
    forward: Vec<Vec<NodeId>>,
    reverse: Vec<Vec<NodeId>>,
}

impl DependencyGraph {
    pub(crate) fn from_parts(
        records: Vec<PackageRecord>,
        names: Vec<String>,
        ids: HashMap<String, NodeId>,
        forward: Vec<Vec<NodeId>>,
        reverse: Vec<Vec<NodeId>>,
    ) -> Self {
        // First record wins when a name appears twice in the index.
        let mut record_lookup = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            record_lookup.entry(record.name().to_string()).or_insert(idx);
        }

        Self {
            records,
            record_lookup,
            names,
            ids,
            forward,
            reverse,
        }
    }

    /// All records, in index order
    pub fn records(&self) -> &[PackageRecord] {
        &self.records
    }

    /// Number of records in the loaded collection
    pub fn package_count(&self) -> usize {
        self.records.len()
    }

    /// Number of interned names, including dependency targets without a record
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.forward.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, name: &str) -> Option<&PackageRecord> {
        self.record_lookup.get(name).map(|&idx| &self.records[idx])
    }

    /// True if `name` has a record in the loaded index
    pub fn contains_package(&self, name: &str) -> bool {
        self.record_lookup.contains_key(name)
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.names[id.index()]
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.names.len()).map(NodeId::new)
    }

    /// Forward edges of `id`
    pub fn dependencies(&self, id: NodeId) -> &[NodeId] {
        &self.forward[id.index()]
    }

    /// Reverse edges of `id`
    pub fn dependents(&self, id: NodeId) -> &[NodeId] {
        &self.reverse[id.index()]
    }

    /// Resolved dependency names of `name`; empty for unknown names
    pub fn dependencies_of(&self, name: &str) -> Vec<&str> {
        self.node_id(name)
            .map(|id| self.names_of(self.dependencies(id)))
            .unwrap_or_default()
    }

    /// Names of packages depending on `name`; empty for unknown names
    pub fn dependents_of(&self, name: &str) -> Vec<&str> {
        self.node_id(name)
            .map(|id| self.names_of(self.dependents(id)))
            .unwrap_or_default()
    }

    pub fn dependent_count(&self, name: &str) -> usize {
        self.node_id(name)
            .map(|id| self.dependents(id).len())
            .unwrap_or(0)
    }

    /// Name-keyed view of the forward adjacency.
    ///
    /// Only names with at least one dependency appear as keys.
    pub fn forward_map(&self) -> BTreeMap<String, BTreeSet<String>> {
        self.adjacency_map(&self.forward)
    }

    /// Name-keyed view of the reverse adjacency.
    ///
    /// Only names with at least one dependent appear as keys.
    pub fn reverse_map(&self) -> BTreeMap<String, BTreeSet<String>> {
        self.adjacency_map(&self.reverse)
    }

    fn names_of(&self, ids: &[NodeId]) -> Vec<&str> {
        ids.iter().map(|&id| self.name(id)).collect()
    }

    fn adjacency_map(&self, lists: &[Vec<NodeId>]) -> BTreeMap<String, BTreeSet<String>> {
        lists
            .iter()
            .enumerate()
            .filter(|(_, targets)| !targets.is_empty())
            .map(|(idx, targets)| {
                (
                    self.names[idx].clone(),
                    targets.iter().map(|&t| self.name(t).to_string()).collect(),
                )
            })
            .collect()
    }
}
