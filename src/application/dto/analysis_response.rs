use crate::application::read_models::{
    EcosystemOverview, PackageDetails, PackageStats, PackageSummary, SubgraphView,
};
use crate::package_graph::domain::CriticalPackage;
use serde::Serialize;

/// AnalysisResponse - the typed result of one [`AnalysisRequest`]
///
/// Serializes untagged: the JSON form of each variant is its payload.
///
/// [`AnalysisRequest`]: super::AnalysisRequest
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResponse {
    Stats(PackageStats),
    Critical(Vec<CriticalPackage>),
    Cycles(Vec<Vec<String>>),
    Leaves(Vec<String>),
    Path {
        from: String,
        to: String,
        path: Option<Vec<String>>,
    },
    Subgraph(SubgraphView),
    Search {
        query: String,
        matches: Vec<PackageSummary>,
    },
    Overview(EcosystemOverview),
    Details(PackageDetails),
}

impl AnalysisResponse {
    /// True when the query found nothing to report: a path query without a
    /// route, or a search without matches
    pub fn is_not_found(&self) -> bool {
        match self {
            AnalysisResponse::Path { path, .. } => path.is_none(),
            AnalysisResponse::Search { matches, .. } => matches.is_empty(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serializes_payload_only() {
        let response = AnalysisResponse::Leaves(vec!["musl".to_string()]);
        assert_eq!(serde_json::to_string(&response).unwrap(), r#"["musl"]"#);
    }

    #[test]
    fn test_path_response_serializes_missing_route_as_null() {
        let response = AnalysisResponse::Path {
            from: "a".to_string(),
            to: "b".to_string(),
            path: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["from"], "a");
        assert!(json["path"].is_null());
        assert!(response.is_not_found());
    }

    #[test]
    fn test_is_not_found() {
        let found = AnalysisResponse::Path {
            from: "a".to_string(),
            to: "a".to_string(),
            path: Some(vec!["a".to_string()]),
        };
        assert!(!found.is_not_found());

        let empty_search = AnalysisResponse::Search {
            query: "zz".to_string(),
            matches: Vec::new(),
        };
        assert!(empty_search.is_not_found());
        assert!(!AnalysisResponse::Cycles(Vec::new()).is_not_found());
    }
}
