//! The crossword grid model: slots, their crossings, and parsing of the
//! textual structure description.
//!
//! A structure description is a rectangular block of text in which `_` marks
//! an open cell and any other character marks a blocked one. Slots are the
//! maximal horizontal and vertical runs of open cells of length two or more;
//! a lone open cell belongs to no slot.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{PuzzleError, Result};

/// Index of a slot within its [`Grid`]. Slots are numbered in discovery
/// order: across slots row by row, then down slots column by column.
pub type SlotId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

/// One position in the grid where a word is placed. Immutable once the grid
/// is constructed; equality is over all four fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Slot {
    pub row: usize,
    pub col: usize,
    pub length: usize,
    pub direction: Direction,
}

impl Slot {
    /// The `(row, col)` coordinates this slot spans, in word order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |k| match self.direction {
            Direction::Across => (self.row, self.col + k),
            Direction::Down => (self.row + k, self.col),
        })
    }
}

/// The read-only geometry of a puzzle: the open/blocked cell matrix, the
/// derived slots, and the precomputed crossing relation between them.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    open: Vec<Vec<bool>>,
    slots: Vec<Slot>,
    neighbors: Vec<Vec<SlotId>>,
    overlaps: HashMap<(SlotId, SlotId), (usize, usize)>,
}

impl Grid {
    /// Parses a structure description.
    ///
    /// Fails with [`PuzzleError::RaggedStructure`] if the rows are not all
    /// the same width, and with [`PuzzleError::NoSlots`] if no run of open
    /// cells is long enough to hold a word.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text.lines().collect();
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());

        let mut open = Vec::with_capacity(height);
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<bool> = line.chars().map(|c| c == '_').collect();
            if cells.len() != width {
                return Err(PuzzleError::RaggedStructure {
                    row,
                    found: cells.len(),
                    expected: width,
                }
                .into());
            }
            open.push(cells);
        }

        let slots = derive_slots(&open, height, width);
        if slots.is_empty() {
            return Err(PuzzleError::NoSlots.into());
        }
        let (neighbors, overlaps) = derive_crossings(&slots);

        Ok(Self {
            width,
            height,
            open,
            slots,
            neighbors,
            overlaps,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.open[row][col]
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, id: SlotId) -> &Slot {
        &self.slots[id as usize]
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slot_ids(&self) -> impl Iterator<Item = SlotId> {
        0..self.slots.len() as SlotId
    }

    /// All slots sharing exactly one cell with `id`.
    pub fn neighbors(&self, id: SlotId) -> &[SlotId] {
        &self.neighbors[id as usize]
    }

    /// The crossing between two slots, as the pair of character offsets at
    /// which they must agree. Symmetric under argument swap (with the
    /// offsets swapped); `None` when the slots are disjoint or identical.
    pub fn overlap(&self, a: SlotId, b: SlotId) -> Option<(usize, usize)> {
        self.overlaps.get(&(a, b)).copied()
    }
}

fn derive_slots(open: &[Vec<bool>], height: usize, width: usize) -> Vec<Slot> {
    let mut slots = Vec::new();

    for row in 0..height {
        let mut col = 0;
        while col < width {
            let run = (col..width).take_while(|&c| open[row][c]).count();
            if run >= 2 {
                slots.push(Slot {
                    row,
                    col,
                    length: run,
                    direction: Direction::Across,
                });
            }
            col += run.max(1);
        }
    }

    for col in 0..width {
        let mut row = 0;
        while row < height {
            let run = (row..height).take_while(|&r| open[r][col]).count();
            if run >= 2 {
                slots.push(Slot {
                    row,
                    col,
                    length: run,
                    direction: Direction::Down,
                });
            }
            row += run.max(1);
        }
    }

    slots
}

type Crossings = (Vec<Vec<SlotId>>, HashMap<(SlotId, SlotId), (usize, usize)>);

fn derive_crossings(slots: &[Slot]) -> Crossings {
    // Index every open cell by the slots passing through it. A cell hosts at
    // most one across and one down slot, so each shared cell yields exactly
    // one crossing pair.
    let mut by_cell: HashMap<(usize, usize), Vec<(SlotId, usize)>> = HashMap::new();
    for (id, slot) in slots.iter().enumerate() {
        for (offset, cell) in slot.cells().enumerate() {
            by_cell.entry(cell).or_default().push((id as SlotId, offset));
        }
    }

    let mut neighbors: Vec<Vec<SlotId>> = vec![Vec::new(); slots.len()];
    let mut overlaps = HashMap::new();
    for occupants in by_cell.values() {
        for &(a, off_a) in occupants {
            for &(b, off_b) in occupants {
                if a != b {
                    overlaps.insert((a, b), (off_a, off_b));
                    neighbors[a as usize].push(b);
                }
            }
        }
    }
    for list in &mut neighbors {
        list.sort_unstable();
        list.dedup();
    }

    (neighbors, overlaps)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // 3x3 with a full top row and a full middle column:
    //   ___
    //   #_#
    //   #_#
    const CROSS: &str = "___\n#_#\n#_#";

    #[test]
    fn parses_slots_from_structure() {
        let grid = Grid::parse(CROSS).unwrap();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(
            grid.slots(),
            &[
                Slot {
                    row: 0,
                    col: 0,
                    length: 3,
                    direction: Direction::Across
                },
                Slot {
                    row: 0,
                    col: 1,
                    length: 3,
                    direction: Direction::Down
                },
            ]
        );
    }

    #[test]
    fn slot_length_matches_open_cells_spanned() {
        let grid = Grid::parse(CROSS).unwrap();
        for slot in grid.slots() {
            let open_count = slot.cells().filter(|&(r, c)| grid.is_open(r, c)).count();
            assert_eq!(open_count, slot.length);
        }
    }

    #[test]
    fn overlap_is_symmetric_with_swapped_offsets() {
        let grid = Grid::parse(CROSS).unwrap();

        assert_eq!(grid.overlap(0, 1), Some((1, 0)));
        assert_eq!(grid.overlap(1, 0), Some((0, 1)));
        assert_eq!(grid.overlap(0, 0), None);
    }

    #[test]
    fn neighbors_are_the_crossing_slots() {
        let grid = Grid::parse(CROSS).unwrap();

        assert_eq!(grid.neighbors(0), &[1]);
        assert_eq!(grid.neighbors(1), &[0]);
    }

    #[test]
    fn single_open_cells_form_no_slot() {
        // Two lone open cells and one across pair.
        let grid = Grid::parse("_#_\n###\n__#").unwrap();

        assert_eq!(
            grid.slots(),
            &[Slot {
                row: 2,
                col: 0,
                length: 2,
                direction: Direction::Across
            }]
        );
        assert!(grid.neighbors(0).is_empty());
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Grid::parse("___\n__\n___").unwrap_err();
        assert!(err.to_string().contains("not rectangular"));
    }

    #[test]
    fn structure_without_slots_is_rejected() {
        let err = Grid::parse("#_#\n###\n#_#").unwrap_err();
        assert!(err.to_string().contains("no slots"));
    }

    #[test]
    fn disjoint_parallel_slots_do_not_cross() {
        // Two across slots in separate rows.
        let grid = Grid::parse("___\n###\n___").unwrap();

        assert_eq!(grid.slot_count(), 2);
        assert_eq!(grid.overlap(0, 1), None);
        assert!(grid.neighbors(0).is_empty());
    }
}
