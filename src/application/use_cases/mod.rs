/// Use cases module containing application logic orchestration
mod analyze;
mod load_index;

pub use analyze::{AnalyzeUseCase, DEFAULT_FOCUS_PACKAGE};
pub use load_index::LoadIndexUseCase;
