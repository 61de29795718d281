/// Filesystem adapters for index input and report output
mod file_reader;
mod file_writer;

pub use file_reader::{FileSystemReader, StdinReader, STDIN_PATH};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
