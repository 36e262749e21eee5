//! Error types for sparselife_core.
//!
//! The taxonomy is deliberately small: every cell-set and stepping operation
//! is total over its documented inputs, so only region-bounded pattern
//! seeding can fail.

use crate::cells::Cell;
use thiserror::Error;

/// Main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Rectangular region bounds are inverted on at least one axis.
    #[error("invalid region: top-left {top_left:?} exceeds bottom-right {bottom_right:?}")]
    InvalidRegion {
        top_left: Cell,
        bottom_right: Cell,
    },
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
