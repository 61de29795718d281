/// Data Transfer Objects for the application layer
///
/// These carry requests into and results out of the use cases without
/// exposing the graph snapshot itself.
mod analysis_request;
mod analysis_response;
mod output_format;

pub use analysis_request::AnalysisRequest;
pub use analysis_response::AnalysisResponse;
pub use output_format::OutputFormat;
