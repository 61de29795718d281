mod dependency_resolver;
mod graph_analytics;
mod graph_builder;
mod index_parser;
mod subgraph_extractor;

pub use dependency_resolver::DependencyResolver;
pub use graph_analytics::GraphAnalytics;
pub use graph_builder::GraphBuilder;
pub use index_parser::IndexParser;
pub use subgraph_extractor::SubgraphExtractor;
