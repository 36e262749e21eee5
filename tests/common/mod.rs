use sparselife_core::cells::Cell;
use sparselife_lib::model::config::AppConfig;
use sparselife_lib::model::game::GameOfLife;

#[allow(dead_code)]
pub struct GameBuilder {
    config: AppConfig,
    rows: u32,
    columns: u32,
    cells: Vec<Cell>,
}

#[allow(dead_code)]
impl GameBuilder {
    pub fn new(rows: u32, columns: u32) -> Self {
        let mut config = AppConfig::default();
        config.grid.rows = rows;
        config.grid.columns = columns;
        // Tests opt into seeding explicitly via with_stamp_chance.
        config.seeding.stamp_chance = 0.0;
        Self {
            config,
            rows,
            columns,
            cells: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.grid.seed = Some(seed);
        self
    }

    pub fn with_stamp_chance(mut self, chance: f64) -> Self {
        self.config.seeding.stamp_chance = chance;
        self
    }

    pub fn with_cells(mut self, cells: &[Cell]) -> Self {
        self.cells.extend_from_slice(cells);
        self
    }

    pub fn build(self) -> GameOfLife {
        let mut game = GameOfLife::new(self.rows, self.columns, self.config);
        game.toggle_cells(&self.cells);
        game
    }
}
