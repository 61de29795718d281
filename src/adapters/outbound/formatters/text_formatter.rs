use crate::application::dto::AnalysisResponse;
use crate::application::read_models::{
    EcosystemOverview, PackageDetails, PackageStats, PackageSummary, SubgraphView,
};
use crate::package_graph::domain::{CriticalPackage, ExtractionMode};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

const MIB: u64 = 1024 * 1024;

/// Markdown table header for critical packages
const CRITICAL_TABLE_HEADER: &str = "| Rank | Package | Dependents | Share |\n";

/// Markdown table separator line for critical packages
const CRITICAL_TABLE_SEPARATOR: &str = "|------|---------|------------|-------|\n";

/// Formats a byte count for humans: above 1 MiB as `X.XX MB`, else `X.XX KB`
pub fn format_size(bytes: u64) -> String {
    if bytes > MIB {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    } else {
        format!("{:.2} KB", bytes as f64 / 1024.0)
    }
}

/// TextFormatter adapter rendering responses as Markdown-flavoured text
///
/// Intended for terminals and for pasting into issues; machine consumers
/// should use [`JsonFormatter`](super::JsonFormatter).
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl TextFormatter {
    fn render_stats(&self, output: &mut String, stats: &PackageStats) {
        output.push_str("| Metric | Value |\n|--------|-------|\n");
        output.push_str(&format!(
            "| Installed size | {} |\n",
            format_size(stats.size_impact.direct_size)
        ));
        output.push_str(&format!(
            "| Total size with dependencies | {} |\n",
            format_size(stats.size_impact.total_size)
        ));
        output.push_str(&format!(
            "| Transitive dependencies | {} |\n",
            stats.size_impact.dependency_count
        ));
        output.push_str(&format!(
            "| Direct dependents | {} |\n",
            stats.bus_factor.dependent_count
        ));
        output.push_str(&format!(
            "| Criticality score | {} |\n",
            stats.bus_factor.criticality_score
        ));
        output.push_str(&format!("| Dependency depth | {} |\n\n", stats.depth));

        if !stats.bus_factor.top_dependents.is_empty() {
            output.push_str("### Top dependents\n\n");
            for dependent in &stats.bus_factor.top_dependents {
                output.push_str(&format!("- {}\n", dependent));
            }
            output.push('\n');
        }

        if !stats.facts.is_empty() {
            output.push_str("### Notable facts\n\n");
            for fact in &stats.facts {
                output.push_str(&format!("- {}\n", fact.description()));
            }
            output.push('\n');
        }
    }

    fn render_critical_table(&self, output: &mut String, critical: &[CriticalPackage]) {
        if critical.is_empty() {
            output.push_str("No package has dependents.\n\n");
            return;
        }
        output.push_str(CRITICAL_TABLE_HEADER);
        output.push_str(CRITICAL_TABLE_SEPARATOR);
        for (rank, package) in critical.iter().enumerate() {
            output.push_str(&format!(
                "| {} | {} | {} | {:.2}% |\n",
                rank + 1,
                Self::escape_cell(&package.name),
                package.dependent_count,
                package.percentage
            ));
        }
        output.push('\n');
    }

    fn render_cycles(&self, output: &mut String, cycles: &[Vec<String>]) {
        output.push_str("# Dependency cycles\n\n");
        if cycles.is_empty() {
            output.push_str("No dependency cycles found.\n");
            return;
        }
        for (idx, cycle) in cycles.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", idx + 1, cycle.join(" → ")));
        }
    }

    fn render_path(&self, output: &mut String, from: &str, to: &str, path: Option<&[String]>) {
        output.push_str(&format!("# Dependency path: {} → {}\n\n", from, to));
        match path {
            Some(path) => output.push_str(&format!(
                "{} ({} hop{})\n",
                path.join(" → "),
                path.len() - 1,
                if path.len() == 2 { "" } else { "s" }
            )),
            None => output.push_str(&format!(
                "No dependency path from {} to {}.\n",
                from, to
            )),
        }
    }

    fn render_subgraph(&self, output: &mut String, view: &SubgraphView) {
        let mode = match view.mode {
            ExtractionMode::Bounded { max_depth } => format!("depth {}", max_depth),
            ExtractionMode::Transitive => "transitive".to_string(),
        };
        output.push_str(&format!("# Subgraph: {} ({})\n\n", view.root, mode));

        output.push_str(&format!("## Nodes ({})\n\n", view.subgraph.nodes.len()));
        output.push_str("| Package | Version | Size |\n|---------|---------|------|\n");
        for node in &view.subgraph.nodes {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_cell(&node.name),
                Self::escape_cell(&node.version),
                format_size(node.size)
            ));
        }

        output.push_str(&format!("\n## Edges ({})\n\n", view.subgraph.edges.len()));
        if view.subgraph.edges.is_empty() {
            output.push_str("No edges.\n");
            return;
        }
        output.push_str("| From | To | Type |\n|------|----|------|\n");
        for edge in &view.subgraph.edges {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_cell(&edge.source),
                Self::escape_cell(&edge.target),
                edge.kind
            ));
        }
    }

    fn render_search(&self, output: &mut String, query: &str, matches: &[PackageSummary]) {
        output.push_str(&format!(
            "# Search results for \"{}\" ({})\n\n",
            query,
            matches.len()
        ));
        if matches.is_empty() {
            output.push_str("No packages found.\n");
            return;
        }
        output.push_str("| Package | Version | Installed size | Description |\n");
        output.push_str("|---------|---------|----------------|-------------|\n");
        for package in matches {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_cell(&package.name),
                Self::escape_cell(&package.version),
                format_size(package.installed_size),
                Self::escape_cell(&package.description)
            ));
        }
    }

    fn render_overview(&self, output: &mut String, overview: &EcosystemOverview) {
        output.push_str("# Ecosystem overview\n\n");
        output.push_str("| Metric | Value |\n|--------|-------|\n");
        output.push_str(&format!(
            "| Total packages | {} |\n",
            overview.total_packages
        ));
        output.push_str(&format!(
            "| Leaf packages | {} ({:.1}%) |\n",
            overview.leaf_count, overview.leaf_percentage
        ));
        output.push_str(&format!(
            "| Most dependents | {} |\n",
            overview.max_dependent_count
        ));
        output.push_str(&format!(
            "| Top 5 share of dependents | {:.1}% |\n\n",
            overview.top_share_percentage
        ));
        output.push_str("## Critical packages\n\n");
        self.render_critical_table(output, &overview.critical_packages);
    }

    fn render_details(&self, output: &mut String, details: &PackageDetails) {
        let record = &details.record;
        output.push_str(&format!("# {} {}\n\n", record.name(), record.version()));
        if !record.description().is_empty() {
            output.push_str(&format!("{}\n\n", record.description()));
        }

        output.push_str("| Field | Value |\n|-------|-------|\n");
        let mut field = |name: &str, value: &str| {
            if !value.is_empty() {
                output.push_str(&format!("| {} | {} |\n", name, Self::escape_cell(value)));
            }
        };
        field("Architecture", record.architecture());
        field("Size", &format_size(record.size()));
        field("Installed size", &format_size(record.installed_size()));
        field("Origin", record.origin());
        field("Maintainer", record.maintainer());
        field("License", record.license());
        field("URL", record.url());
        field("Built at", details.built_at.as_deref().unwrap_or_default());
        field("Commit", record.commit().unwrap_or_default());
        output.push('\n');

        self.render_list(output, "Dependencies", record.dependencies());
        self.render_list(output, "Provides", record.provides());
        self.render_list(output, "Dependents", &details.dependents);

        output.push_str("## Stats\n\n");
        self.render_stats(output, &details.stats);
    }

    fn render_list(&self, output: &mut String, title: &str, items: &[String]) {
        output.push_str(&format!("## {} ({})\n\n", title, items.len()));
        if items.is_empty() {
            output.push_str("None.\n\n");
            return;
        }
        for item in items {
            output.push_str(&format!("- {}\n", item));
        }
        output.push('\n');
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, response: &AnalysisResponse) -> Result<String> {
        let mut output = String::new();

        match response {
            AnalysisResponse::Stats(stats) => {
                match &stats.version {
                    Some(version) => {
                        output.push_str(&format!("# Package stats: {} {}\n\n", stats.name, version))
                    }
                    None => output.push_str(&format!(
                        "# Package stats: {} (not in index)\n\n",
                        stats.name
                    )),
                }
                self.render_stats(&mut output, stats);
            }
            AnalysisResponse::Critical(critical) => {
                output.push_str("# Critical packages\n\n");
                self.render_critical_table(&mut output, critical);
            }
            AnalysisResponse::Cycles(cycles) => self.render_cycles(&mut output, cycles),
            AnalysisResponse::Leaves(leaves) => {
                self.render_list(&mut output, "Leaf packages", leaves)
            }
            AnalysisResponse::Path { from, to, path } => {
                self.render_path(&mut output, from, to, path.as_deref())
            }
            AnalysisResponse::Subgraph(view) => self.render_subgraph(&mut output, view),
            AnalysisResponse::Search { query, matches } => {
                self.render_search(&mut output, query, matches)
            }
            AnalysisResponse::Overview(overview) => self.render_overview(&mut output, overview),
            AnalysisResponse::Details(details) => self.render_details(&mut output, details),
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::ReadModelBuilder;
    use crate::package_graph::domain::{Subgraph, SubgraphNode};
    use crate::package_graph::services::{GraphBuilder, IndexParser};

    fn render(response: &AnalysisResponse) -> String {
        TextFormatter::new().format(response).unwrap()
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(MIB), "1024.00 KB");
        assert_eq!(format_size(MIB + MIB / 2), "1.50 MB");
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(TextFormatter::escape_cell("a|b\nc"), "a\\|b c");
    }

    #[test]
    fn test_format_critical_table() {
        let output = render(&AnalysisResponse::Critical(vec![CriticalPackage {
            name: "musl".to_string(),
            dependent_count: 3,
            percentage: 75.0,
        }]));

        assert!(output.contains(CRITICAL_TABLE_HEADER));
        assert!(output.contains("| 1 | musl | 3 | 75.00% |"));
    }

    #[test]
    fn test_format_cycles() {
        let output = render(&AnalysisResponse::Cycles(vec![vec![
            "a".to_string(),
            "b".to_string(),
            "a".to_string(),
        ]]));
        assert!(output.contains("1. a → b → a"));

        let output = render(&AnalysisResponse::Cycles(Vec::new()));
        assert!(output.contains("No dependency cycles found."));
    }

    #[test]
    fn test_format_path() {
        let output = render(&AnalysisResponse::Path {
            from: "curl".to_string(),
            to: "musl".to_string(),
            path: Some(vec!["curl".to_string(), "musl".to_string()]),
        });
        assert!(output.contains("curl → musl (1 hop)"));

        let output = render(&AnalysisResponse::Path {
            from: "musl".to_string(),
            to: "curl".to_string(),
            path: None,
        });
        assert!(output.contains("No dependency path from musl to curl."));
    }

    #[test]
    fn test_format_subgraph() {
        let output = render(&AnalysisResponse::Subgraph(SubgraphView {
            root: "ghost".to_string(),
            mode: ExtractionMode::Transitive,
            subgraph: Subgraph {
                nodes: vec![SubgraphNode::placeholder("ghost", "external")],
                edges: Vec::new(),
            },
        }));

        assert!(output.contains("# Subgraph: ghost (transitive)"));
        assert!(output.contains("| ghost | external | 0.00 KB |"));
        assert!(output.contains("No edges."));
    }

    #[test]
    fn test_format_details() {
        let graph = GraphBuilder::build(IndexParser::parse(
            "P:curl\nV:8.5.0-r0\nT:URL tool\nS:2097152\nL:curl\nt:1701957396\n\
             D:musl so:libcurl.so.4\np:cmd:curl=8.5.0-r0\n\nP:musl\nV:1.2\n",
        ));
        let details = ReadModelBuilder::build_details(&graph, "curl").unwrap();
        let output = render(&AnalysisResponse::Details(details));

        assert!(output.starts_with("# curl 8.5.0-r0\n\nURL tool\n"));
        assert!(output.contains("| Size | 2.00 MB |"));
        assert!(output.contains("| Built at | 2023-12-07T13:56:36Z |"));
        assert!(output.contains("- so:libcurl.so.4"));
        assert!(output.contains("- cmd:curl=8.5.0-r0"));
        assert!(!output.contains("| Maintainer |"));
    }

    #[test]
    fn test_format_stats_for_unknown_package() {
        let graph = GraphBuilder::build(IndexParser::parse("P:a\nV:1\n"));
        let stats = ReadModelBuilder::build_stats(&graph, "ghost");
        let output = render(&AnalysisResponse::Stats(stats));

        assert!(output.contains("# Package stats: ghost (not in index)"));
        assert!(output.contains("| Dependency depth | 0 |"));
    }
}
