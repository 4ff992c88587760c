//! Projection of a finished assignment back onto the grid, for terminal
//! output, file output, and structured (JSON) output.

use serde::Serialize;

use crate::grid::{Direction, Grid};
use crate::solver::assignment::Assignment;
use crate::words::Word;

/// The letters an assignment places on the grid, `None` for cells no bound
/// slot covers.
pub fn letter_grid(grid: &Grid, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
    let mut letters = vec![vec![None; grid.width()]; grid.height()];
    for (&id, word) in assignment.iter() {
        for (offset, (row, col)) in grid.slot(id).cells().enumerate() {
            letters[row][col] = word.letter(offset);
        }
    }
    letters
}

/// Renders the assignment as a character grid, one row per line: blocked
/// cells as `█`, unfilled open cells as a space.
pub fn render_text(grid: &Grid, assignment: &Assignment) -> String {
    let letters = letter_grid(grid, assignment);
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for (row, cells) in letters.iter().enumerate() {
        for (col, letter) in cells.iter().enumerate() {
            if grid.is_open(row, col) {
                out.push(letter.unwrap_or(' '));
            } else {
                out.push('█');
            }
        }
        out.push('\n');
    }
    out
}

/// One filled-in slot, in serializable form.
#[derive(Debug, Serialize)]
pub struct FilledSlot {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub word: Word,
}

/// The serializable shape of a solved puzzle.
#[derive(Debug, Serialize)]
pub struct FilledGrid {
    pub width: usize,
    pub height: usize,
    pub rows: Vec<String>,
    pub entries: Vec<FilledSlot>,
}

impl FilledGrid {
    pub fn new(grid: &Grid, assignment: &Assignment) -> Self {
        let rows = render_text(grid, assignment)
            .lines()
            .map(str::to_owned)
            .collect();
        let entries = assignment
            .iter()
            .map(|(&id, word)| {
                let slot = grid.slot(id);
                FilledSlot {
                    row: slot.row,
                    col: slot.col,
                    direction: slot.direction,
                    word: word.clone(),
                }
            })
            .collect();
        Self {
            width: grid.width(),
            height: grid.height(),
            rows,
            entries,
        }
    }
}
