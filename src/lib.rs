//! apk-graph - dependency graph analysis for Alpine Linux package indexes
//!
//! This library parses an APKINDEX file into an immutable dependency graph
//! and answers structural questions about it: size impact, critical
//! packages, cycles, leaves, shortest paths, bus factors and subgraphs.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`package_graph`): Package records, the graph snapshot,
//!   and the parsing, building and analytics services
//! - **Application Layer** (`application`): Use cases, read models and the
//!   snapshot store
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```
//! use apk_graph::prelude::*;
//!
//! let graph = GraphBuilder::build(IndexParser::parse(
//!     "P:foo\nV:1.0\nD:bar baz\n\nP:bar\nV:2.0\n\nP:baz\nV:1.0\nD:bar\n",
//! ));
//!
//! let analytics = GraphAnalytics::new(&graph);
//! assert_eq!(analytics.leaf_packages(), vec!["foo"]);
//! assert_eq!(
//!     analytics.shortest_path("foo", "bar"),
//!     Some(vec!["foo".to_string(), "bar".to_string()])
//! );
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod package_graph;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdinReader, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::application::dto::{AnalysisRequest, AnalysisResponse, OutputFormat};
    pub use crate::application::use_cases::{AnalyzeUseCase, LoadIndexUseCase};
    pub use crate::application::SnapshotStore;
    pub use crate::package_graph::domain::{
        DependencyGraph, EdgeKind, ExtractionMode, PackageName, PackageRecord, Subgraph,
    };
    pub use crate::package_graph::services::{
        DependencyResolver, GraphAnalytics, GraphBuilder, IndexParser, SubgraphExtractor,
    };
    pub use crate::ports::outbound::{
        IndexReader, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
