/// ProgressReporter port for reporting progress during an audit
///
/// Progress goes to a side channel (stderr) so it never mixes with the
/// report written to stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress of a bounded wait
    ///
    /// # Arguments
    /// * `current` - Current progress value (e.g. seconds waited)
    /// * `total` - Upper bound (e.g. timeout in seconds)
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
