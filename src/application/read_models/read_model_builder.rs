//! Builder for constructing read models from a graph snapshot

use super::overview::TOP_SHARE_COUNT;
use super::{EcosystemOverview, NotableFact, PackageDetails, PackageStats};
use crate::package_graph::domain::DependencyGraph;
use crate::package_graph::services::GraphAnalytics;
use chrono::{DateTime, SecondsFormat};

/// Builder for constructing read models from a [`DependencyGraph`]
///
/// Every method works on one snapshot and never fails; unknown names yield
/// the same neutral values the analytics engine reports for them.
pub struct ReadModelBuilder;

impl ReadModelBuilder {
    /// Stats view of `name`
    pub fn build_stats(graph: &DependencyGraph, name: &str) -> PackageStats {
        let analytics = GraphAnalytics::new(graph);
        let size_impact = analytics.size_impact(name);
        let bus_factor = analytics.bus_factor(name);
        let depth = analytics.dependency_depth(name);
        let facts = NotableFact::collect(&size_impact, &bus_factor, depth);

        PackageStats {
            name: name.to_string(),
            version: graph.record(name).map(|r| r.version().to_string()),
            size_impact,
            bus_factor,
            depth,
            facts,
        }
    }

    /// Details view of `name`; `None` when the index has no such record
    pub fn build_details(graph: &DependencyGraph, name: &str) -> Option<PackageDetails> {
        let record = graph.record(name)?.clone();
        let built_at = record.timestamp().and_then(Self::format_timestamp);

        Some(PackageDetails {
            built_at,
            resolved_dependencies: graph
                .dependencies_of(name)
                .into_iter()
                .map(str::to_string)
                .collect(),
            dependents: graph
                .dependents_of(name)
                .into_iter()
                .map(str::to_string)
                .collect(),
            stats: Self::build_stats(graph, name),
            record,
        })
    }

    /// Ecosystem overview listing up to `limit` critical packages
    pub fn build_overview(graph: &DependencyGraph, limit: usize) -> EcosystemOverview {
        let analytics = GraphAnalytics::new(graph);
        let total_packages = graph.package_count();
        let leaf_count = analytics.leaf_packages().len();
        let leaf_percentage = if total_packages == 0 {
            0.0
        } else {
            leaf_count as f64 / total_packages as f64 * 100.0
        };

        let top_share = analytics.critical_packages(TOP_SHARE_COUNT);
        let max_dependent_count = top_share.first().map_or(0, |c| c.dependent_count);
        let top_share_percentage = top_share.iter().map(|c| c.percentage).sum();

        EcosystemOverview {
            total_packages,
            leaf_count,
            leaf_percentage,
            max_dependent_count,
            top_share_percentage,
            critical_packages: analytics.critical_packages(limit),
        }
    }

    /// Renders a Unix timestamp as UTC RFC 3339 (`2023-12-07T13:56:36Z`)
    pub fn format_timestamp(timestamp: i64) -> Option<String> {
        DateTime::from_timestamp(timestamp, 0)
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}
