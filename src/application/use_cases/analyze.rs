use crate::application::dto::{AnalysisRequest, AnalysisResponse};
use crate::application::read_models::{PackageSummary, ReadModelBuilder, SubgraphView};
use crate::application::{PackageSearch, SnapshotStore};
use crate::package_graph::domain::DependencyGraph;
use crate::package_graph::services::{GraphAnalytics, SubgraphExtractor};
use crate::shared::error::GraphError;
use crate::shared::Result;
use tracing::debug;

/// Package used when a focus-package query names none
pub const DEFAULT_FOCUS_PACKAGE: &str = "busybox";

/// AnalyzeUseCase - answers analysis queries against the current snapshot
///
/// Each call to [`execute`](Self::execute) takes the snapshot current at
/// that moment and answers the whole request from it.
pub struct AnalyzeUseCase {
    store: SnapshotStore,
    default_package: Option<String>,
}

impl AnalyzeUseCase {
    pub fn new(store: SnapshotStore) -> Self {
        Self {
            store,
            default_package: None,
        }
    }

    /// Overrides the focus package used when a query names none
    pub fn with_default_package(mut self, package: Option<String>) -> Self {
        self.default_package = package;
        self
    }

    /// Executes one analysis request
    ///
    /// Unknown package names are not errors for graph queries; they yield
    /// empty or zero results. Only `Details` requires a loaded record.
    ///
    /// # Errors
    /// - [`GraphError::PackageNotFound`] for details of an unknown package
    /// - [`GraphError::Validation`] when a focus package is needed but the
    ///   index is empty
    pub fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        let graph = self.store.current();
        debug!(query = request.name(), packages = graph.package_count(), "executing analysis");

        let analytics = GraphAnalytics::new(&graph);
        let response = match request {
            AnalysisRequest::Stats { package } => {
                let name = self.focus_package(&graph, package)?;
                AnalysisResponse::Stats(ReadModelBuilder::build_stats(&graph, &name))
            }
            AnalysisRequest::Critical { limit } => {
                AnalysisResponse::Critical(analytics.critical_packages(limit))
            }
            AnalysisRequest::Cycles => AnalysisResponse::Cycles(analytics.detect_cycles()),
            AnalysisRequest::Leaves => AnalysisResponse::Leaves(analytics.leaf_packages()),
            AnalysisRequest::Path { from, to } => {
                let path = analytics.shortest_path(&from, &to);
                AnalysisResponse::Path { from, to, path }
            }
            AnalysisRequest::Subgraph { package, mode } => {
                let root = self.focus_package(&graph, package)?;
                let subgraph = SubgraphExtractor::new(&graph).extract(&root, mode);
                AnalysisResponse::Subgraph(SubgraphView {
                    root,
                    mode,
                    subgraph,
                })
            }
            AnalysisRequest::Search { query } => {
                let matches = PackageSearch::search(&graph, &query)
                    .into_iter()
                    .map(PackageSummary::from)
                    .collect();
                AnalysisResponse::Search { query, matches }
            }
            AnalysisRequest::Overview { limit } => {
                AnalysisResponse::Overview(ReadModelBuilder::build_overview(&graph, limit))
            }
            AnalysisRequest::Details { package } => {
                let details = ReadModelBuilder::build_details(&graph, &package)
                    .ok_or(GraphError::PackageNotFound { name: package })?;
                AnalysisResponse::Details(details)
            }
        };

        Ok(response)
    }

    /// Resolves the package a focus query is about
    ///
    /// An explicit name is used as given, loaded or not. Otherwise the
    /// configured default, then `busybox`, then the first record.
    fn focus_package(&self, graph: &DependencyGraph, explicit: Option<String>) -> Result<String> {
        if let Some(name) = explicit.or_else(|| self.default_package.clone()) {
            return Ok(name);
        }
        if graph.contains_package(DEFAULT_FOCUS_PACKAGE) {
            return Ok(DEFAULT_FOCUS_PACKAGE.to_string());
        }
        graph
            .records()
            .first()
            .map(|record| record.name().to_string())
            .ok_or_else(|| {
                GraphError::Validation {
                    message: "No package given and the index contains no packages".to_string(),
                }
                .into()
            })
    }
}
