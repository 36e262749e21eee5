//! Sparse live-cell storage for the simulation grid.
//!
//! Cells are keyed by row, each occupied row holding the set of occupied
//! columns, so memory and iteration cost track the number of live cells
//! rather than the grid area. A row key is dropped as soon as its column
//! set empties; an empty column set never lingers under a live key.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A single grid coordinate as `(row, column)`.
pub type Cell = (u32, u32);

/// Sparse set of live cells, mapping occupied rows to their occupied columns.
///
/// Two mutation disciplines are exposed. In-place methods (`insert`,
/// `remove`, `toggle`, `merge_from` and their `_all` batch forms) are for
/// owned scratch structures on hot paths. Return-new counterparts (`added`,
/// `removed`, `toggled`, `union`) leave the receiver untouched, for call
/// sites that treat the set as a value and replace their reference.
///
/// Equality compares membership only; iteration order is unspecified.
///
/// # Examples
/// ```
/// use sparselife_core::cells::CellSet;
///
/// let mut cells = CellSet::new();
/// cells.insert((3, 4));
/// assert!(cells.contains(3, 4));
///
/// let next = cells.toggled([(3, 4)]);
/// assert!(next.is_empty());
/// assert!(cells.contains(3, 4));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSet {
    rows: HashMap<u32, HashSet<u32>>,
}

impl CellSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true iff the cell is recorded live.
    #[must_use]
    pub fn contains(&self, row: u32, col: u32) -> bool {
        self.rows.get(&row).map_or(false, |cols| cols.contains(&col))
    }

    /// Marks a cell live. Idempotent.
    pub fn insert(&mut self, cell: Cell) {
        let (row, col) = cell;
        self.rows.entry(row).or_default().insert(col);
    }

    /// Marks every given cell live.
    pub fn insert_all<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = Cell>,
    {
        for cell in cells {
            self.insert(cell);
        }
    }

    /// Unmarks a cell. Removing an absent cell is a no-op.
    pub fn remove(&mut self, cell: Cell) {
        let (row, col) = cell;
        if let Some(cols) = self.rows.get_mut(&row) {
            cols.remove(&col);
            if cols.is_empty() {
                self.rows.remove(&row);
            }
        }
    }

    /// Unmarks every given cell.
    pub fn remove_all<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = Cell>,
    {
        for cell in cells {
            self.remove(cell);
        }
    }

    /// Flips a cell between live and dead.
    pub fn toggle(&mut self, cell: Cell) {
        if self.contains(cell.0, cell.1) {
            self.remove(cell);
        } else {
            self.insert(cell);
        }
    }

    /// Flips every given cell.
    pub fn toggle_all<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = Cell>,
    {
        for cell in cells {
            self.toggle(cell);
        }
    }

    /// Unions another set into this one. The other set is read-only.
    pub fn merge_from(&mut self, other: &CellSet) {
        for (&row, cols) in &other.rows {
            self.rows
                .entry(row)
                .or_default()
                .extend(cols.iter().copied());
        }
    }

    /// Returns a new set with the given cells marked live.
    #[must_use]
    pub fn added<I>(&self, cells: I) -> CellSet
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut next = self.clone();
        next.insert_all(cells);
        next
    }

    /// Returns a new set with the given cells unmarked.
    #[must_use]
    pub fn removed<I>(&self, cells: I) -> CellSet
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut next = self.clone();
        next.remove_all(cells);
        next
    }

    /// Returns a new set with the given cells flipped.
    #[must_use]
    pub fn toggled<I>(&self, cells: I) -> CellSet
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut next = self.clone();
        next.toggle_all(cells);
        next
    }

    /// Returns the union of two sets, leaving both inputs untouched.
    #[must_use]
    pub fn union(&self, other: &CellSet) -> CellSet {
        let mut next = self.clone();
        next.merge_from(other);
        next
    }

    /// Yields every live cell exactly once. Each call produces a fresh,
    /// independent iterator; order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.rows
            .iter()
            .flat_map(|(&row, cols)| cols.iter().map(move |&col| (row, col)))
    }

    /// Number of live cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.values().map(HashSet::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Unmarks every cell.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Number of occupied rows. Every counted row holds at least one column.
    #[must_use]
    pub fn occupied_rows(&self) -> usize {
        self.rows.len()
    }

    #[cfg(test)]
    fn has_empty_row(&self) -> bool {
        self.rows.values().any(HashSet::is_empty)
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(cells: I) -> Self {
        let mut set = CellSet::new();
        set.insert_all(cells);
        set
    }
}
