use crate::package_graph::domain::analysis::{COMMON_DEPENDENT_THRESHOLD, TOP_DEPENDENTS_LIMIT};
use crate::package_graph::domain::{BusFactor, CriticalPackage, DependencyGraph, NodeId, SizeImpact};
use rayon::prelude::*;
use std::collections::VecDeque;

/// GraphAnalytics service over a dependency graph snapshot
///
/// All queries are pure reads of the snapshot, so one snapshot can serve any
/// number of concurrent callers. Unknown package names are not errors: they
/// produce empty or zero results.
///
/// Traversals use explicit stacks and per-call visited sets, so deep chains
/// and arbitrary cycles neither overflow the call stack nor loop forever.
#[derive(Debug, Clone, Copy)]
pub struct GraphAnalytics<'g> {
    graph: &'g DependencyGraph,
}

impl<'g> GraphAnalytics<'g> {
    pub fn new(graph: &'g DependencyGraph) -> Self {
        Self { graph }
    }

    /// Installed size of a package plus everything it transitively depends on.
    ///
    /// Walks the forward closure depth-first. Names without a record still
    /// count as closure members but add no size and are not expanded. The
    /// total saturates at `u64::MAX`.
    pub fn size_impact(&self, package_name: &str) -> SizeImpact {
        let direct_size = self
            .graph
            .record(package_name)
            .map(|r| r.installed_size())
            .unwrap_or(0);

        let Some(root) = self.graph.node_id(package_name) else {
            return SizeImpact {
                direct_size,
                total_size: direct_size,
                dependency_count: 0,
                packages: vec![package_name.to_string()],
            };
        };

        let mut visited = vec![false; self.graph.node_count()];
        let mut packages = Vec::new();
        let mut total_size = 0u64;
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            if visited[id.index()] {
                continue;
            }
            visited[id.index()] = true;

            let name = self.graph.name(id);
            packages.push(name.to_string());

            if let Some(record) = self.graph.record(name) {
                total_size = total_size.saturating_add(record.installed_size());
                stack.extend(self.graph.dependencies(id).iter().rev());
            }
        }

        SizeImpact {
            direct_size,
            total_size,
            dependency_count: packages.len() - 1,
            packages,
        }
    }

    /// Packages ranked by direct dependent count, highest first.
    ///
    /// Equal counts keep node order (index order, then first appearance of
    /// out-of-index targets).
    pub fn critical_packages(&self, limit: usize) -> Vec<CriticalPackage> {
        let total = self.graph.package_count();

        let mut critical: Vec<CriticalPackage> = self
            .graph
            .node_ids()
            .filter_map(|id| {
                let dependent_count = self.graph.dependents(id).len();
                (dependent_count > 0).then(|| CriticalPackage {
                    name: self.graph.name(id).to_string(),
                    dependent_count,
                    percentage: percentage(dependent_count, total),
                })
            })
            .collect();

        critical.sort_by(|a, b| b.dependent_count.cmp(&a.dependent_count));
        critical.truncate(limit);
        critical
    }

    /// Finds dependency cycles with a depth-first search over forward edges.
    ///
    /// Every package is tried as a root in index order, skipping nodes a
    /// previous search already reached. A cycle is reported whenever an edge
    /// hits a node on the current search path, as that path slice plus the
    /// closing name (`[a, b, c, a]`). The same cycle may be reported more
    /// than once when reached through different edges.
    pub fn detect_cycles(&self) -> Vec<Vec<String>> {
        let node_count = self.graph.node_count();
        let mut visited = vec![false; node_count];
        // Position on the current path, for nodes on the path.
        let mut path_position: Vec<Option<usize>> = vec![None; node_count];
        let mut path: Vec<NodeId> = Vec::new();
        let mut cycles = Vec::new();

        for record in self.graph.records() {
            let Some(root) = self.graph.node_id(record.name()) else {
                continue;
            };
            if visited[root.index()] {
                continue;
            }

            // Frames are (node, index of the next dependency to look at).
            let mut frames: Vec<(NodeId, usize)> = vec![(root, 0)];
            visited[root.index()] = true;
            path_position[root.index()] = Some(path.len());
            path.push(root);

            while let Some(frame) = frames.last_mut() {
                let (node, next) = *frame;
                let deps = self.graph.dependencies(node);

                if next == deps.len() {
                    frames.pop();
                    path.pop();
                    path_position[node.index()] = None;
                    continue;
                }
                frame.1 += 1;

                let dep = deps[next];
                if !visited[dep.index()] {
                    visited[dep.index()] = true;
                    path_position[dep.index()] = Some(path.len());
                    path.push(dep);
                    frames.push((dep, 0));
                } else if let Some(start) = path_position[dep.index()] {
                    let mut cycle: Vec<String> = path[start..]
                        .iter()
                        .map(|&id| self.graph.name(id).to_string())
                        .collect();
                    cycle.push(self.graph.name(dep).to_string());
                    cycles.push(cycle);
                }
            }
        }

        cycles
    }

    /// Length, in edges, of the longest forward chain found from a package.
    ///
    /// Each node is expanded at most once per call, at the depth where the
    /// depth-first walk first meets it; meeting it again only counts that
    /// hop. This bounds work on cyclic graphs and under-counts the true
    /// longest simple path in diamond or cyclic shapes.
    pub fn dependency_depth(&self, package_name: &str) -> usize {
        let Some(root) = self.graph.node_id(package_name) else {
            return 0;
        };

        let mut visited = vec![false; self.graph.node_count()];
        let mut max_depth = 0;
        let mut stack = vec![(root, 0usize)];

        while let Some((id, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if visited[id.index()] {
                continue;
            }
            visited[id.index()] = true;

            stack.extend(
                self.graph
                    .dependencies(id)
                    .iter()
                    .rev()
                    .map(|&dep| (dep, depth + 1)),
            );
        }

        max_depth
    }

    /// Packages nothing depends on, in index order
    pub fn leaf_packages(&self) -> Vec<String> {
        self.graph
            .records()
            .iter()
            .filter(|record| self.graph.dependent_count(record.name()) == 0)
            .map(|record| record.name().to_string())
            .collect()
    }

    /// Bus-factor view of a package.
    ///
    /// The criticality score weighs direct dependents fully and their own
    /// direct dependents by half: `round(direct + 0.5 * one_hop)`.
    pub fn bus_factor(&self, package_name: &str) -> BusFactor {
        let dependents = self
            .graph
            .node_id(package_name)
            .map(|id| self.graph.dependents(id))
            .unwrap_or(&[]);
        let dependent_count = dependents.len();

        let transitive_impact: usize = dependents
            .iter()
            .map(|&dep| self.graph.dependents(dep).len())
            .sum();
        let criticality_score =
            (dependent_count as f64 + transitive_impact as f64 * 0.5).round() as u64;

        let mut ranked: Vec<(NodeId, usize)> = dependents
            .iter()
            .map(|&dep| (dep, self.graph.dependents(dep).len()))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        BusFactor {
            is_common: dependent_count > COMMON_DEPENDENT_THRESHOLD,
            dependent_count,
            criticality_score,
            top_dependents: ranked
                .into_iter()
                .take(TOP_DEPENDENTS_LIMIT)
                .map(|(id, _)| self.graph.name(id).to_string())
                .collect(),
        }
    }

    /// Bus factors for many packages, computed in parallel
    pub fn bus_factors(&self, package_names: &[String]) -> Vec<(String, BusFactor)> {
        package_names
            .par_iter()
            .map(|name| (name.clone(), self.bus_factor(name)))
            .collect()
    }

    /// Fewest-hop forward path from `from` to `to`, both ends included.
    ///
    /// Breadth-first over dependencies; among equally short paths the one
    /// found first in adjacency order wins. Returns `None` when `to` is not
    /// reachable. Edges are directed, so the reverse query may differ.
    pub fn shortest_path(&self, from: &str, to: &str) -> Option<Vec<String>> {
        if from == to {
            return Some(vec![from.to_string()]);
        }
        let start = self.graph.node_id(from)?;
        let goal = self.graph.node_id(to)?;

        let mut parent: Vec<Option<NodeId>> = vec![None; self.graph.node_count()];
        let mut visited = vec![false; self.graph.node_count()];
        let mut queue = VecDeque::from([start]);
        visited[start.index()] = true;

        while let Some(current) = queue.pop_front() {
            if current == goal {
                return Some(self.unwind_path(&parent, goal));
            }
            for &dep in self.graph.dependencies(current) {
                if !visited[dep.index()] {
                    visited[dep.index()] = true;
                    parent[dep.index()] = Some(current);
                    queue.push_back(dep);
                }
            }
        }

        None
    }

    fn unwind_path(&self, parent: &[Option<NodeId>], goal: NodeId) -> Vec<String> {
        let mut path = vec![self.graph.name(goal).to_string()];
        let mut cursor = goal;
        while let Some(prev) = parent[cursor.index()] {
            path.push(self.graph.name(prev).to_string());
            cursor = prev;
        }
        path.reverse();
        path
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}
