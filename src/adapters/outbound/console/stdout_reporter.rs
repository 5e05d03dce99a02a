use crate::ports::outbound::EventReporter;

/// StdoutReporter adapter for reporting run events to stdout
///
/// Both status and error lines go to stdout so the run log reads as a
/// single ordered transcript.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReporter;

impl StdoutReporter {
    pub fn new() -> Self {
        Self
    }
}

impl EventReporter for StdoutReporter {
    fn report(&self, message: &str) {
        println!("{}", message);
    }

    fn report_error(&self, message: &str) {
        println!("{}", message);
    }
}
