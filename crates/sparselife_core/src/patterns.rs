//! Seed pattern catalogue and the region stamping used when the grid grows.
//!
//! Patterns are immutable offset lists relative to a stamp anchor. Rotation
//! is exact integer quarter-turn rotation; random pattern and rotation
//! choice take a caller-supplied RNG so seeded runs reproduce.

use crate::cells::{Cell, CellSet};
use crate::error::{CoreError, Result};
use rand::Rng;

/// Relative offset from a stamp anchor, as `(row, column)`.
pub type Offset = (i32, i32);

/// A named, immutable sequence of live-cell offsets relative to an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub offsets: &'static [Offset],
}

/// The classic 5-cell glider, period 4, drifting one row and one column
/// per period.
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    offsets: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

/// Period-2 oscillator, three cells in a line.
pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    offsets: &[(0, 0), (0, 1), (0, 2)],
};

/// The 9-cell lightweight spaceship.
pub const LIGHTWEIGHT_SPACESHIP: Pattern = Pattern {
    name: "lightweight spaceship",
    offsets: &[
        (0, 1),
        (0, 4),
        (1, 0),
        (2, 0),
        (2, 4),
        (3, 0),
        (3, 1),
        (3, 2),
        (3, 3),
    ],
};

/// Every pattern eligible for random stamping.
pub const CATALOGUE: &[Pattern] = &[GLIDER, BLINKER, LIGHTWEIGHT_SPACESHIP];

// Quarter-turn rotation matrices for 0, 90, 180 and 270 degrees. Applied to
// an offset (x, y) they produce (x, y), (-y, x), (-x, -y) and (y, -x).
const ROTATIONS: [[[i32; 2]; 2]; 4] = [
    [[1, 0], [0, 1]],
    [[0, -1], [1, 0]],
    [[-1, 0], [0, -1]],
    [[0, 1], [-1, 0]],
];

/// Rotates every offset of a pattern by the given number of quarter turns.
/// Turn counts are taken modulo four.
#[must_use]
pub fn rotate(pattern: &Pattern, quarter_turns: u8) -> Vec<Offset> {
    let m = ROTATIONS[(quarter_turns % 4) as usize];
    pattern
        .offsets
        .iter()
        .map(|&(x, y)| (m[0][0] * x + m[0][1] * y, m[1][0] * x + m[1][1] * y))
        .collect()
}

/// Picks a pattern from the catalogue uniformly at random.
pub fn random_pattern<R: Rng + ?Sized>(rng: &mut R) -> &'static Pattern {
    &CATALOGUE[rng.gen_range(0..CATALOGUE.len())]
}

/// Picks a quarter-turn count in `0..4` uniformly at random.
pub fn random_rotation<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(0..4)
}

/// Sweeps the half-open rectangle `[top_left, bottom_right)` in row-major
/// order; at each coordinate, with probability `stamp_chance`, attempts to
/// stamp a randomly chosen, randomly rotated pattern anchored there.
///
/// A stamp is applied only when every rotated offset lands strictly inside
/// the region; otherwise the attempt is discarded whole. Stamps never wrap,
/// even though the live simulation does. Overlapping stamps union.
///
/// Fails with [`CoreError::InvalidRegion`] when the bounds are inverted on
/// either axis.
pub fn fill_region_with_patterns<R: Rng + ?Sized>(
    cells: &mut CellSet,
    top_left: Cell,
    bottom_right: Cell,
    stamp_chance: f64,
    rng: &mut R,
) -> Result<()> {
    let (row_start, col_start) = top_left;
    let (row_end, col_end) = bottom_right;
    if row_start > row_end || col_start > col_end {
        return Err(CoreError::InvalidRegion {
            top_left,
            bottom_right,
        });
    }

    for row in row_start..row_end {
        for col in col_start..col_end {
            if rng.gen::<f64>() >= stamp_chance {
                continue;
            }

            let pattern = random_pattern(rng);
            let offsets = rotate(pattern, random_rotation(rng));

            let stamp: Option<Vec<Cell>> = offsets
                .iter()
                .map(|&(dr, dc)| {
                    let r = i64::from(row) + i64::from(dr);
                    let c = i64::from(col) + i64::from(dc);
                    let inside = r >= i64::from(row_start)
                        && r < i64::from(row_end)
                        && c >= i64::from(col_start)
                        && c < i64::from(col_end);
                    inside.then(|| (r as u32, c as u32))
                })
                .collect();

            if let Some(stamp) = stamp {
                cells.insert_all(stamp);
            }
        }
    }

    Ok(())
}
