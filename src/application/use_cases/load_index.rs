use crate::application::SnapshotStore;
use crate::package_graph::domain::DependencyGraph;
use crate::package_graph::services::{GraphBuilder, IndexParser};
use crate::ports::outbound::{IndexReader, ProgressReporter};
use crate::shared::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Number of progress steps reported while loading
const LOAD_STEPS: usize = 2;

/// LoadIndexUseCase - reads, parses and publishes a package index
///
/// # Type Parameters
/// * `R` - IndexReader implementation
/// * `P` - ProgressReporter implementation
pub struct LoadIndexUseCase<R, P> {
    index_reader: R,
    progress_reporter: P,
}

impl<R, P> LoadIndexUseCase<R, P>
where
    R: IndexReader,
    P: ProgressReporter,
{
    pub fn new(index_reader: R, progress_reporter: P) -> Self {
        Self {
            index_reader,
            progress_reporter,
        }
    }

    /// Loads the index at `path` and publishes it into `store`
    ///
    /// The new snapshot is built completely before it is published, so
    /// readers of `store` see either the previous graph or the new one.
    ///
    /// # Returns
    /// The published snapshot
    ///
    /// # Errors
    /// Returns an error if the index cannot be read. Malformed content is
    /// never an error: unusable blocks are skipped by the parser.
    pub fn execute(&self, path: &Path, store: &SnapshotStore) -> Result<Arc<DependencyGraph>> {
        self.progress_reporter
            .report(&format!("📖 Loading package index from: {}", path.display()));

        let content = self.index_reader.read_index(path)?;
        debug!(bytes = content.len(), path = %path.display(), "read package index");

        self.progress_reporter
            .report_progress(1, LOAD_STEPS, Some("parsing index"));
        let records = IndexParser::parse(&content);
        if records.is_empty() {
            warn!(path = %path.display(), "package index contains no records");
            self.progress_reporter
                .report_error("⚠️  Warning: No package records found in the index.");
        }

        self.progress_reporter
            .report_progress(2, LOAD_STEPS, Some("building dependency graph"));
        let graph = Arc::new(GraphBuilder::build(records));
        store.publish_shared(Arc::clone(&graph));

        self.progress_reporter.report_completion(&format!(
            "✅ Loaded {} packages ({} dependency edges)",
            graph.package_count(),
            graph.edge_count()
        ));

        Ok(graph)
    }
}
