mod common;

use common::GameBuilder;
use sparselife_core::cells::CellSet;

#[test]
fn test_glider_translates_one_diagonal_cell_every_four_generations() {
    let mut game = GameBuilder::new(20, 20)
        .with_cells(&[(5, 6), (6, 7), (7, 5), (7, 6), (7, 7)])
        .build();

    for _ in 0..4 {
        game.step();
    }

    let expected: CellSet = [(6, 7), (7, 8), (8, 6), (8, 7), (8, 8)]
        .into_iter()
        .collect();
    assert_eq!(game.live_cells, expected);

    // Another period carries it one more cell down and right.
    for _ in 0..4 {
        game.step();
    }
    let expected: CellSet = [(7, 8), (8, 9), (9, 7), (9, 8), (9, 9)]
        .into_iter()
        .collect();
    assert_eq!(game.live_cells, expected);
}

#[test]
fn test_block_is_a_still_life() {
    let block = [(1, 1), (1, 2), (2, 1), (2, 2)];
    let mut game = GameBuilder::new(10, 10).with_cells(&block).build();
    let expected: CellSet = block.into_iter().collect();

    for generation in 1..=8 {
        game.step();
        assert_eq!(
            game.live_cells, expected,
            "block broke at generation {generation}"
        );
    }
}

#[test]
fn test_blinker_oscillates_with_period_two() {
    let vertical = [(3, 4), (4, 4), (5, 4)];
    let horizontal = [(4, 3), (4, 4), (4, 5)];
    let mut game = GameBuilder::new(9, 9).with_cells(&vertical).build();

    game.step();
    assert_eq!(game.live_cells, horizontal.into_iter().collect::<CellSet>());
    game.step();
    assert_eq!(game.live_cells, vertical.into_iter().collect::<CellSet>());
}

#[test]
fn test_blinker_oscillates_across_the_torus_seam() {
    // Vertical triple centered on row 0 of a 5x5 torus.
    let across_seam = [(4, 2), (0, 2), (1, 2)];
    let horizontal = [(0, 1), (0, 2), (0, 3)];
    let mut game = GameBuilder::new(5, 5).with_cells(&across_seam).build();

    game.step();
    assert_eq!(game.live_cells, horizontal.into_iter().collect::<CellSet>());
    game.step();
    assert_eq!(game.live_cells, across_seam.into_iter().collect::<CellSet>());
}

#[test]
fn test_lone_corner_cell_on_3x3_torus_dies_without_births() {
    // On a 3x3 torus every other cell neighbors the corner cell, so each
    // frontier cell sees exactly one live neighbor and nothing is born.
    let mut game = GameBuilder::new(3, 3).with_cells(&[(0, 0)]).build();
    game.step();
    assert!(game.live_cells.is_empty());
}

#[test]
fn test_underpopulation_and_overcrowding() {
    // A pair dies of loneliness.
    let mut game = GameBuilder::new(10, 10)
        .with_cells(&[(4, 4), (4, 5)])
        .build();
    game.step();
    assert!(game.live_cells.is_empty());

    // The center of a plus is crowded out while the arms live on.
    let plus = [(4, 4), (3, 4), (5, 4), (4, 3), (4, 5)];
    let mut game = GameBuilder::new(10, 10).with_cells(&plus).build();
    game.step();
    assert!(!game.live_cells.contains(4, 4), "crowded center must die");
    assert!(game.live_cells.contains(3, 4));
    assert!(game.live_cells.contains(5, 4));
}
