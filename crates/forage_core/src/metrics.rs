//! Performance metrics collection for the simulation.
//!
//! Provides structured logging and counters for monitoring a run.

use crate::update::{TickOutcome, TickStatus};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

const DEFAULT_LOG_INTERVAL: u64 = 1000;

/// Run-level counters, safe to share with a reporting thread.
pub struct Metrics {
    tick_count: AtomicU64,
    degenerate_ticks: AtomicU64,
    claim_count: AtomicU64,
    food_remaining: AtomicU64,
    log_interval: u64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self::with_log_interval(DEFAULT_LOG_INTERVAL)
    }

    /// Logs a summary every `interval` advanced ticks (0 disables it).
    #[must_use]
    pub fn with_log_interval(interval: u64) -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            degenerate_ticks: AtomicU64::new(0),
            claim_count: AtomicU64::new(0),
            food_remaining: AtomicU64::new(0),
            log_interval: interval,
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&self, duration: Duration, outcome: &TickOutcome) {
        if outcome.status == TickStatus::Degenerate {
            self.degenerate_ticks.fetch_add(1, Ordering::Relaxed);
            return;
        }

        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        let claims = self
            .claim_count
            .fetch_add(outcome.claims.len() as u64, Ordering::Relaxed)
            + outcome.claims.len() as u64;
        let remaining = outcome.world.remaining_food() as u64;
        self.food_remaining.store(remaining, Ordering::Relaxed);

        if self.log_interval > 0 && tick % self.log_interval == 0 {
            tracing::info!(
                tick,
                claims,
                food_remaining = remaining,
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn degenerate_ticks(&self) -> u64 {
        self.degenerate_ticks.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn claim_count(&self) -> u64 {
        self.claim_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn food_remaining(&self) -> u64 {
        self.food_remaining.load(Ordering::Relaxed)
    }

    /// Gets elapsed wall time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Installs a fmt subscriber honouring `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .finish(),
    )
    .ok();
}
