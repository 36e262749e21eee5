//! Performance metrics collection for the simulation.
//!
//! Provides structured logging and metrics tracking for monitoring
//! generation throughput and population size.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Metrics collector for simulation statistics.
pub struct Metrics {
    generation_count: AtomicU64,
    live_count: AtomicU64,
    birth_count: AtomicU64,
    death_count: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            generation_count: AtomicU64::new(0),
            live_count: AtomicU64::new(0),
            birth_count: AtomicU64::new(0),
            death_count: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a completed generation step with its duration.
    pub fn record_step(&self, duration: Duration, live: usize, births: usize, deaths: usize) {
        self.generation_count.fetch_add(1, Ordering::Relaxed);
        self.live_count.store(live as u64, Ordering::Relaxed);
        self.birth_count.fetch_add(births as u64, Ordering::Relaxed);
        self.death_count.fetch_add(deaths as u64, Ordering::Relaxed);

        // Log at info level every 1000 generations
        let generation = self.generation_count.load(Ordering::Relaxed);
        if generation % 1000 == 0 {
            tracing::info!(
                generation = generation,
                live = live,
                duration_us = duration.as_micros() as u64,
                "Simulation step"
            );
        }
    }

    /// Gets the number of recorded generations.
    #[must_use]
    pub fn generation_count(&self) -> u64 {
        self.generation_count.load(Ordering::Relaxed)
    }

    /// Gets the live-cell count from the latest recorded step.
    #[must_use]
    pub fn live_count(&self) -> u64 {
        self.live_count.load(Ordering::Relaxed)
    }

    /// Gets the total births recorded so far.
    #[must_use]
    pub fn birth_count(&self) -> u64 {
        self.birth_count.load(Ordering::Relaxed)
    }

    /// Gets the total deaths recorded so far.
    #[must_use]
    pub fn death_count(&self) -> u64 {
        self.death_count.load(Ordering::Relaxed)
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .finish(),
    )
    .ok();
}
