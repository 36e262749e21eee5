use std::time::Instant;

use crate::model::cells::{Cell, CellSet};
use crate::model::game::GameOfLife;

impl GameOfLife {
    /// Advances the simulation by one generation.
    ///
    /// Births and deaths are computed entirely against the pre-step live
    /// set: every live cell is censused over its toroidal 8-neighborhood,
    /// and each dead neighbor enters a deduplicated frontier that is
    /// censused exactly once. Live cells with fewer than 2 or more than 3
    /// live neighbors die; frontier cells with exactly 3 are born. Work is
    /// proportional to live plus frontier cells, never to grid area.
    pub fn step(&mut self) {
        let started = Instant::now();
        self.generation += 1;

        // A zero-area grid has no neighborhoods to evaluate.
        if self.rows == 0 || self.columns == 0 {
            self.metrics
                .record_step(started.elapsed(), self.live_cells.len(), 0, 0);
            return;
        }

        let mut births: Vec<Cell> = Vec::new();
        let mut deaths: Vec<Cell> = Vec::new();
        let mut frontier = CellSet::new();

        for cell in self.live_cells.iter() {
            let (live_neighbors, dead_neighbors) = self.analyze_neighbors(cell);

            for neighbor in dead_neighbors {
                if frontier.contains(neighbor.0, neighbor.1) {
                    continue;
                }
                frontier.insert(neighbor);
                if self.live_neighbor_count(neighbor) == 3 {
                    births.push(neighbor);
                }
            }

            if !(2..=3).contains(&live_neighbors) {
                deaths.push(cell);
            }
        }

        // Births and deaths are disjoint: one set is currently dead, the
        // other currently live. Application order is immaterial.
        let (born, died) = (births.len(), deaths.len());
        self.live_cells.insert_all(births);
        self.live_cells.remove_all(deaths);

        self.metrics
            .record_step(started.elapsed(), self.live_cells.len(), born, died);
    }

    /// Toroidal 8-neighborhood of `cell` under the current dimensions.
    /// Row 0 wraps up to `rows - 1`, row `rows - 1` wraps down to 0;
    /// columns wrap the same way.
    fn neighborhood(&self, cell: Cell) -> [Cell; 8] {
        let (row, col) = cell;
        let above = if row == 0 { self.rows - 1 } else { row - 1 };
        let below = if row == self.rows - 1 { 0 } else { row + 1 };
        let left = if col == 0 { self.columns - 1 } else { col - 1 };
        let right = if col == self.columns - 1 { 0 } else { col + 1 };
        [
            (above, left),
            (above, col),
            (above, right),
            (row, left),
            (row, right),
            (below, left),
            (below, col),
            (below, right),
        ]
    }

    /// Counts live neighbors and collects the dead ones in one sweep.
    fn analyze_neighbors(&self, cell: Cell) -> (u8, Vec<Cell>) {
        let mut live = 0u8;
        let mut dead = Vec::with_capacity(8);
        for (row, col) in self.neighborhood(cell) {
            if self.live_cells.contains(row, col) {
                live += 1;
            } else {
                dead.push((row, col));
            }
        }
        (live, dead)
    }

    fn live_neighbor_count(&self, cell: Cell) -> u8 {
        self.neighborhood(cell)
            .iter()
            .filter(|&&(row, col)| self.live_cells.contains(row, col))
            .count() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::AppConfig;

    #[test]
    fn test_corner_neighborhood_wraps_to_every_other_cell_on_3x3() {
        let game = GameOfLife::new(3, 3, AppConfig::default());
        let mut neighbors: Vec<Cell> = game.neighborhood((0, 0)).to_vec();
        neighbors.sort_unstable();
        assert_eq!(
            neighbors,
            vec![
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 1),
                (1, 2),
                (2, 0),
                (2, 1),
                (2, 2),
            ]
        );
    }

    #[test]
    fn test_interior_neighborhood_does_not_wrap() {
        let game = GameOfLife::new(10, 10, AppConfig::default());
        let mut neighbors: Vec<Cell> = game.neighborhood((5, 5)).to_vec();
        neighbors.sort_unstable();
        assert_eq!(
            neighbors,
            vec![
                (4, 4),
                (4, 5),
                (4, 6),
                (5, 4),
                (5, 6),
                (6, 4),
                (6, 5),
                (6, 6),
            ]
        );
    }

    #[test]
    fn test_step_counts_births_and_deaths() {
        let mut game = GameOfLife::new(10, 10, AppConfig::default());
        // Vertical blinker: flips to horizontal in one step.
        game.toggle_cells(&[(3, 4), (4, 4), (5, 4)]);
        game.step();
        assert_eq!(game.generation, 1);
        assert!(game.live_cells.contains(4, 3));
        assert!(game.live_cells.contains(4, 4));
        assert!(game.live_cells.contains(4, 5));
        assert_eq!(game.live_cells.len(), 3);
        assert_eq!(game.metrics.birth_count(), 2);
        assert_eq!(game.metrics.death_count(), 2);
    }

    #[test]
    fn test_step_on_zero_area_grid_is_a_no_op() {
        let mut game = GameOfLife::new(0, 0, AppConfig::default());
        game.step();
        assert_eq!(game.generation, 1);
        assert!(game.live_cells.is_empty());
    }
}
