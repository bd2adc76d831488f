use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards use-case log lines to `tracing` under a single target so they
/// can be filtered with `RUST_LOG=pos=debug`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "pos", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "pos", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "pos", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "pos", "{}", message);
    }
}
