/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the file system, the console, and output renderers.
pub mod formatter;
pub mod index_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use formatter::ReportFormatter;
pub use index_reader::IndexReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
