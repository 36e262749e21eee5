pub use sparselife_core::{Cell, CellSet, Metrics};
pub mod cells {
    pub use sparselife_core::cells::*;
}
pub mod config {
    pub use sparselife_core::config::*;
}
pub mod error {
    pub use sparselife_core::error::*;
}
pub mod metrics {
    pub use sparselife_core::metrics::*;
}
pub mod patterns {
    pub use sparselife_core::patterns::*;
}

pub mod game;
