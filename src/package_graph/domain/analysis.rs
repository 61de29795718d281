//! Result records produced by the analytics engine.
//!
//! These are plain data consumed by formatters and external renderers;
//! field names serialize in camelCase.

use serde::Serialize;

/// Installed-size footprint of a package and everything it pulls in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeImpact {
    /// Installed size of the package itself (0 if unknown)
    pub direct_size: u64,
    /// Installed size summed over the whole forward closure, root included
    pub total_size: u64,
    /// Closure size excluding the root
    pub dependency_count: usize,
    /// Every name in the closure, root first
    pub packages: Vec<String>,
}

/// A package ranked by how many packages depend on it directly
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalPackage {
    pub name: String,
    pub dependent_count: usize,
    /// `dependent_count` as a percentage of all loaded packages
    pub percentage: f64,
}

/// "Bus factor" view of a package: how much breaks if it does
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusFactor {
    /// More than [`COMMON_DEPENDENT_THRESHOLD`] direct dependents
    pub is_common: bool,
    pub dependent_count: usize,
    /// `round(direct + 0.5 * one-hop transitive)` dependents
    pub criticality_score: u64,
    /// Up to five direct dependents, most depended-upon first
    pub top_dependents: Vec<String>,
}

/// Dependent count above which a package counts as common infrastructure
pub const COMMON_DEPENDENT_THRESHOLD: usize = 10;

/// Number of dependents listed in [`BusFactor::top_dependents`]
pub const TOP_DEPENDENTS_LIMIT: usize = 5;
