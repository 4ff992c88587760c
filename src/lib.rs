//! Crossfill fills crossword grids: given a structure (which cells are open)
//! and a word list, it places one word in every slot so that each word fits
//! its slot and every crossing agrees on the shared letter.
//!
//! The filler is a constraint-satisfaction pipeline. Slots are the
//! variables, words the values, and crossings the binary constraints. Two
//! consistency passes prune the candidate domains up front — node
//! consistency (word length) and AC-3 arc consistency (crossing support) —
//! and a backtracking search guided by minimum-remaining-values and
//! least-constraining-value heuristics finds a complete assignment, or
//! proves there is none.
//!
//! # Core Concepts
//!
//! - **[`Grid`]**: the parsed geometry — slots, and for each pair of
//!   crossing slots, the offsets at which they must agree.
//! - **[`WordList`]**: the normalized candidate dictionary.
//! - **[`SolverEngine`]**: runs the consistency passes and the search,
//!   returning an [`Assignment`] or `None` when the puzzle has no fill.
//!
//! # Example: A Two-Slot Puzzle
//!
//! An across slot and a down slot crossing at the across word's second
//! letter. Only `CAT`/`ATE` agrees there, so the fill is forced.
//!
//! ```
//! use crossfill::grid::Grid;
//! use crossfill::render::render_text;
//! use crossfill::solver::engine::SolverEngine;
//! use crossfill::words::WordList;
//!
//! let grid = Grid::parse("___\n#_#\n#_#").unwrap();
//! let words = WordList::from_words(["cat", "ate", "dog"]).unwrap();
//!
//! let (assignment, _stats) = SolverEngine::default().solve(&grid, &words);
//! let assignment = assignment.expect("this puzzle has a fill");
//!
//! assert_eq!(render_text(&grid, &assignment), "CAT\n█T█\n█E█\n");
//! ```
//!
//! [`Grid`]: grid::Grid
//! [`WordList`]: words::WordList
//! [`SolverEngine`]: solver::engine::SolverEngine
//! [`Assignment`]: solver::assignment::Assignment

pub mod error;
pub mod grid;
pub mod render;
pub mod solver;
pub mod words;
