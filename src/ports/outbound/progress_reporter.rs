/// ProgressReporter port for user-facing status messages
///
/// Implementations write to stderr (or nowhere) so that stdout stays
/// reserved for the rendered report.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports progress through a fixed number of steps
    ///
    /// # Arguments
    /// * `current` - Steps completed so far
    /// * `total` - Total number of steps
    /// * `message` - Optional description of the current step
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
