//! Ecosystem-wide summary view

use crate::package_graph::domain::CriticalPackage;
use serde::Serialize;

/// Default number of critical packages listed in the overview
pub const DEFAULT_OVERVIEW_LIMIT: usize = 20;

/// Number of leading critical packages whose share is summed
pub const TOP_SHARE_COUNT: usize = 5;

/// Summary of the whole loaded index
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EcosystemOverview {
    pub total_packages: usize,
    pub leaf_count: usize,
    /// `leaf_count` as a percentage of `total_packages`, 0 for an empty index
    pub leaf_percentage: f64,
    /// Direct dependent count of the most depended-upon package
    pub max_dependent_count: usize,
    /// Summed `percentage` of the top five critical packages
    pub top_share_percentage: f64,
    pub critical_packages: Vec<CriticalPackage>,
}
