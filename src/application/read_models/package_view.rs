//! Package listing and detail views

use super::PackageStats;
use crate::package_graph::domain::PackageRecord;
use serde::Serialize;

/// One line of a package listing (search results)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSummary {
    pub name: String,
    pub version: String,
    pub description: String,
    pub installed_size: u64,
}

impl From<&PackageRecord> for PackageSummary {
    fn from(record: &PackageRecord) -> Self {
        Self {
            name: record.name().to_string(),
            version: record.version().to_string(),
            description: record.description().to_string(),
            installed_size: record.installed_size(),
        }
    }
}

/// Everything known about one loaded package
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDetails {
    #[serde(flatten)]
    pub record: PackageRecord,
    /// Build timestamp as UTC RFC 3339, when the index carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub built_at: Option<String>,
    /// Resolved graph dependencies (sonames and empty names excluded)
    pub resolved_dependencies: Vec<String>,
    /// Loaded packages depending directly on this one
    pub dependents: Vec<String>,
    pub stats: PackageStats,
}
