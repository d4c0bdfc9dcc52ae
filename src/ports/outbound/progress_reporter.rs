/// ProgressReporter port for reporting progress during operations
///
/// User-facing diagnostics (crawl progress, skipped dependencies, warnings)
/// flow through this port so that stdout stays reserved for the report.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports incremental progress of an operation whose total is unknown
    ///
    /// # Arguments
    /// * `completed` - Number of items finished so far
    /// * `current` - The item being worked on
    fn report_step(&self, completed: usize, current: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
