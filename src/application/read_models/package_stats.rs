//! Per-package statistics view

use crate::package_graph::domain::{BusFactor, SizeImpact};
use serde::Serialize;

/// Total size impact above which a package is flagged [`NotableFact::Heavy`]
pub const HEAVY_SIZE_THRESHOLD: u64 = 50 * 1024 * 1024;

/// Criticality score above which a package is flagged [`NotableFact::Vip`]
pub const VIP_SCORE_THRESHOLD: u64 = 100;

/// Depth above which a package is flagged [`NotableFact::Deep`]
pub const DEEP_THRESHOLD: usize = 10;

/// Depth above which a package is flagged [`NotableFact::DeepTree`]
pub const DEEP_TREE_THRESHOLD: usize = 5;

/// Remarkable properties derived from a package's statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotableFact {
    /// Pulls in more than 50 MiB of installed size
    Heavy,
    /// Criticality score above 100
    Vip,
    /// Dependency depth above 10
    Deep,
    /// Dependency depth above 5
    DeepTree,
    /// More than 10 direct dependents
    Common,
}

impl NotableFact {
    /// Facts that hold for the given statistics, in declaration order
    pub fn collect(size_impact: &SizeImpact, bus_factor: &BusFactor, depth: usize) -> Vec<Self> {
        let mut facts = Vec::new();
        if size_impact.total_size > HEAVY_SIZE_THRESHOLD {
            facts.push(NotableFact::Heavy);
        }
        if bus_factor.criticality_score > VIP_SCORE_THRESHOLD {
            facts.push(NotableFact::Vip);
        }
        if depth > DEEP_THRESHOLD {
            facts.push(NotableFact::Deep);
        }
        if depth > DEEP_TREE_THRESHOLD {
            facts.push(NotableFact::DeepTree);
        }
        if bus_factor.is_common {
            facts.push(NotableFact::Common);
        }
        facts
    }

    pub fn description(self) -> &'static str {
        match self {
            NotableFact::Heavy => "Heavy footprint: more than 50 MB installed with dependencies",
            NotableFact::Vip => "VIP package: criticality score above 100",
            NotableFact::Deep => "Dependency inception: depth above 10",
            NotableFact::DeepTree => "Deep dependency tree: depth above 5",
            NotableFact::Common => "Common dependency: more than 10 direct dependents",
        }
    }
}

/// Size impact, bus factor, depth and notable facts of one package
///
/// Unknown names are valid: they report zero sizes, no dependents and
/// depth 0, with `version` left empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageStats {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub size_impact: SizeImpact,
    pub bus_factor: BusFactor,
    pub depth: usize,
    pub facts: Vec<NotableFact>,
}
