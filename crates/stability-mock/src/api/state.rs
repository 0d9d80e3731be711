//! Application state shared across handlers.

use std::time::Instant;

/// Shared state of the mock server.
///
/// The mock is stateless per request; the only thing handlers share is the
/// process start instant, used by the system status endpoint for uptime.
#[derive(Debug, Clone)]
pub struct AppState {
    started_at: Instant,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Seconds since the server started.
    #[must_use]
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
