//! # Sparselife Core
//!
//! The core engine pieces for sparselife - a sparse, toroidally wrapped
//! Game of Life simulation.
//!
//! This crate contains everything that is independent of any driver or
//! renderer:
//! - Sparse live-cell storage keyed by occupied rows
//! - The seed pattern catalogue with exact quarter-turn rotation
//! - Randomized pattern stamping for newly exposed grid area
//! - Configuration loading and structured logging helpers
//!
//! Performance of every operation tracks the number of live cells, never
//! the grid area.
//!
//! ## Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use sparselife_core::cells::CellSet;
//! use sparselife_core::patterns;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut cells = CellSet::new();
//! patterns::fill_region_with_patterns(&mut cells, (0, 0), (64, 64), 0.01, &mut rng)
//!     .expect("bounds are well ordered");
//! ```

/// Sparse live-cell storage keyed by occupied rows
pub mod cells;
/// Configuration management for grid and seeding parameters
pub mod config;
/// Error types shared across the engine
pub mod error;
/// Performance metrics collection and logging
pub mod metrics;
/// Seed pattern catalogue, rotation, and region stamping
pub mod patterns;

pub use cells::{Cell, CellSet};
pub use error::{CoreError, Result};
pub use metrics::{init_logging, Metrics};
