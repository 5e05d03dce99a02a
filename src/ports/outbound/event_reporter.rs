/// EventReporter port for human-readable run output
///
/// This port abstracts where status lines go (stdout in production,
/// a capturing buffer in tests).
pub trait EventReporter {
    /// Reports a status message
    ///
    /// # Arguments
    /// * `message` - The status message to report
    fn report(&self, message: &str);

    /// Reports an error or warning message
    ///
    /// # Arguments
    /// * `message` - The error/warning message
    fn report_error(&self, message: &str);
}

impl<R: EventReporter + ?Sized> EventReporter for &R {
    fn report(&self, message: &str) {
        (**self).report(message);
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message);
    }
}
