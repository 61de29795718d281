//! Case-insensitive package search over a graph snapshot

use crate::package_graph::domain::{DependencyGraph, PackageRecord};

/// Queries shorter than this many characters match nothing
pub const MIN_QUERY_LENGTH: usize = 2;

/// PackageSearch over record names and descriptions
pub struct PackageSearch;

impl PackageSearch {
    /// Records whose name or description contains `query`, ignoring case,
    /// in index order.
    pub fn search<'g>(graph: &'g DependencyGraph, query: &str) -> Vec<&'g PackageRecord> {
        if query.chars().count() < MIN_QUERY_LENGTH {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        graph
            .records()
            .iter()
            .filter(|record| {
                record.name().to_lowercase().contains(&needle)
                    || record.description().to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package_graph::services::{GraphBuilder, IndexParser};

    fn graph() -> DependencyGraph {
        GraphBuilder::build(IndexParser::parse(
            "P:curl\nV:8.5\nT:URL retrival utility\n\n\
             P:libcurl\nV:8.5\nT:The multiprotocol file transfer library\n\n\
             P:wget\nV:1.21\nT:Network utility to retrieve files from the Web (supports URLs)\n\n\
             P:zlib\nV:1.3\nT:A compression library\n",
        ))
    }

    fn names(records: Vec<&PackageRecord>) -> Vec<&str> {
        records.into_iter().map(PackageRecord::name).collect()
    }

    #[test]
    fn test_search_matches_name_and_description() {
        let graph = graph();
        assert_eq!(
            names(PackageSearch::search(&graph, "url")),
            vec!["curl", "libcurl", "wget"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let graph = graph();
        assert_eq!(names(PackageSearch::search(&graph, "ZLIB")), vec!["zlib"]);
        assert_eq!(
            names(PackageSearch::search(&graph, "Library")),
            vec!["libcurl", "zlib"]
        );
    }

    #[test]
    fn test_search_short_query_matches_nothing() {
        let graph = graph();
        assert!(PackageSearch::search(&graph, "c").is_empty());
        assert!(PackageSearch::search(&graph, "").is_empty());
    }

    #[test]
    fn test_search_no_match() {
        let graph = graph();
        assert!(PackageSearch::search(&graph, "openssl").is_empty());
    }
}
