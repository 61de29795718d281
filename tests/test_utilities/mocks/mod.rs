/// Mock implementations for testing
mod mock_index_reader;
mod mock_progress_reporter;

pub use mock_index_reader::MockIndexReader;
pub use mock_progress_reporter::{MockProgressReporter, ReportedEvent};
