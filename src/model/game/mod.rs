use crate::model::cells::{Cell, CellSet};
use crate::model::config::AppConfig;
use crate::model::metrics::Metrics;
use crate::model::patterns;
use anyhow::Context;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

fn default_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(0)
}

pub mod update;

/// The simulation state: grid dimensions plus the sparse set of live cells.
///
/// The engine holds no scheduler and performs no I/O; every public
/// operation runs to completion on the caller's thread. Callers serialize
/// their own access - there is no internal locking because there is no
/// concurrent mutation surface.
#[derive(Serialize, Deserialize)]
pub struct GameOfLife {
    pub rows: u32,
    pub columns: u32,
    pub live_cells: CellSet,
    pub generation: u64,
    pub config: AppConfig,
    #[serde(skip, default = "default_rng")]
    pub rng: ChaCha8Rng,
    #[serde(skip, default)]
    pub metrics: Metrics,
}

impl GameOfLife {
    /// Creates an engine with the given dimensions and an empty live set.
    ///
    /// A configured seed makes resize seeding reproducible; without one the
    /// RNG draws from OS entropy.
    #[must_use]
    pub fn new(rows: u32, columns: u32, config: AppConfig) -> Self {
        let rng = match config.grid.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            rows,
            columns,
            live_cells: CellSet::new(),
            generation: 0,
            config,
            rng,
            metrics: Metrics::new(),
        }
    }

    /// Creates an engine sized from `config.grid`.
    #[must_use]
    pub fn from_config(config: AppConfig) -> Self {
        let (rows, columns) = (config.grid.rows, config.grid.columns);
        Self::new(rows, columns, config)
    }

    /// Updates the grid dimensions.
    ///
    /// When a dimension grows, the newly exposed band is seeded with
    /// randomly rotated, randomly chosen patterns: the row band
    /// `[previous_rows, rows) x [0, columns)` and the column band
    /// `[0, rows) x [previous_columns, columns)`. Both bands are seeded in
    /// the same call when both dimensions grow; their overlap corner may be
    /// swept twice.
    ///
    /// Shrinking leaves cells outside the new bounds in place; they stay
    /// live until toggled or consumed by a later step.
    pub fn resize(&mut self, rows: u32, columns: u32) -> anyhow::Result<()> {
        let previous_rows = self.rows;
        let previous_columns = self.columns;
        self.rows = rows;
        self.columns = columns;

        let chance = self.config.seeding.stamp_chance;
        if previous_rows < rows {
            patterns::fill_region_with_patterns(
                &mut self.live_cells,
                (previous_rows, 0),
                (rows, columns),
                chance,
                &mut self.rng,
            )
            .context("seeding newly exposed rows")?;
        }
        if previous_columns < columns {
            patterns::fill_region_with_patterns(
                &mut self.live_cells,
                (0, previous_columns),
                (rows, columns),
                chance,
                &mut self.rng,
            )
            .context("seeding newly exposed columns")?;
        }

        tracing::debug!(
            rows = rows,
            columns = columns,
            live = self.live_cells.len(),
            "Grid resized"
        );
        Ok(())
    }

    /// Flips the given cells between live and dead.
    ///
    /// Coordinates are not checked against the grid bounds; callers that
    /// care about bounds validate before toggling. Toroidal wrap applies to
    /// neighbor lookup only, never to toggle addressing.
    pub fn toggle_cells(&mut self, cells: &[Cell]) {
        self.live_cells.toggle_all(cells.iter().copied());
    }

    /// Kills every cell and restarts the generation counter, keeping the
    /// dimensions, configuration and RNG stream.
    pub fn clear(&mut self) {
        self.live_cells.clear();
        self.generation = 0;
        tracing::debug!(rows = self.rows, columns = self.columns, "Grid cleared");
    }

    /// Enumerates every live cell. Each call yields a fresh iterator; order
    /// is unspecified.
    pub fn live_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.live_cells.iter()
    }
}
