//! Webserver state management

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Instant;

/// Core webserver state: counters and liveness, no request data
#[derive(Debug)]
pub struct WebServerState {
    pub server_start_time: Instant,
    is_running: AtomicBool,
    prediction_count: AtomicU64,
    run_count: AtomicU64,
}

impl WebServerState {
    pub fn new() -> Self {
        Self {
            server_start_time: Instant::now(),
            is_running: AtomicBool::new(true),
            prediction_count: AtomicU64::new(0),
            run_count: AtomicU64::new(0),
        }
    }

    pub fn is_running(&self) -> bool {
        self.is_running.load(Ordering::Relaxed)
    }

    pub fn set_running(&self, running: bool) {
        self.is_running.store(running, Ordering::Relaxed);
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }

    /// Record a served single prediction
    pub fn record_prediction(&self) -> u64 {
        self.prediction_count.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn prediction_count(&self) -> u64 {
        self.prediction_count.load(Ordering::Relaxed)
    }

    /// Record a completed optimization run
    pub fn record_run(&self) -> u64 {
        self.run_count.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn run_count(&self) -> u64 {
        self.run_count.load(Ordering::Relaxed)
    }
}

impl Default for WebServerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_starts_running_with_zero_counters() {
        let state = WebServerState::new();

        assert!(state.is_running());
        assert_eq!(state.prediction_count(), 0);
        assert_eq!(state.run_count(), 0);
    }

    #[test]
    fn test_counter_management() {
        let state = WebServerState::new();

        assert_eq!(state.record_prediction(), 1);
        assert_eq!(state.record_prediction(), 2);
        assert_eq!(state.prediction_count(), 2);

        assert_eq!(state.record_run(), 1);
        assert_eq!(state.run_count(), 1);
    }

    #[test]
    fn test_running_flag() {
        let state = WebServerState::new();

        state.set_running(false);
        assert!(!state.is_running());

        state.set_running(true);
        assert!(state.is_running());
    }
}
