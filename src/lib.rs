//! Sparselife: a sparse, toroidally wrapped Game of Life engine.
//!
//! The engine is a library surface only. An external driver constructs a
//! [`model::game::GameOfLife`], resizes it when the viewport changes,
//! toggles cells on pointer input, steps it on a cadence it controls, and
//! enumerates the live cells once per render frame.

pub mod model;

pub use model::game::GameOfLife;
