use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// [`Logger`] port backed by `tracing` events under the `cartservice` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "cartservice", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "cartservice", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "cartservice", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "cartservice", "{}", message);
    }
}
