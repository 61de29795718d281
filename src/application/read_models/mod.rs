//! Read models for CQRS-lite pattern
//!
//! View-optimized structs assembled from a graph snapshot for the
//! formatters. The snapshot itself never leaves the application layer.

mod overview;
mod package_stats;
mod package_view;
mod read_model_builder;
mod subgraph_view;

pub use overview::EcosystemOverview;
pub use package_stats::{NotableFact, PackageStats};
pub use package_view::{PackageDetails, PackageSummary};
pub use read_model_builder::ReadModelBuilder;
pub use subgraph_view::SubgraphView;
