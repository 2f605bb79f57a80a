//! This module contains logic for generating random Sudoku puzzles.
//!
//! Generation of puzzles is done by first generating a full grid with a
//! [Generator] and then removing some clues using a [Carver].

use crate::{SudokuGrid, SIZE};
use crate::rules;

use rand::Rng;
use rand::rngs::ThreadRng;

/// A generator randomly generates a full [SudokuGrid], that is, a grid with
/// no missing digits. It uses a random number generator to decide the
/// content. For most cases, sensible defaults are provided by
/// [Generator::new_default].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the random
    /// digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator to
    /// generate random digits.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn fill_rec(&mut self, grid: &mut SudokuGrid, column: usize, row: usize)
            -> bool {
        if row == SIZE {
            return true;
        }

        let next_column = (column + 1) % SIZE;
        let next_row =
            if next_column == 0 { row + 1 } else { row };

        if grid.get_cell(column, row).is_some() {
            return self.fill_rec(grid, next_column, next_row);
        }

        for number in shuffle(&mut self.rng, 1..=SIZE) {
            if rules::check_number(grid, column, row, number) {
                grid.set_cell(column, row, number);

                if self.fill_rec(grid, next_column, next_row) {
                    return true;
                }

                grid.clear_cell(column, row);
            }
        }

        false
    }

    /// Generates a new random [SudokuGrid] with all digits, satisfying the
    /// Sudoku rules. After this operation, [rules::check] on the result
    /// returns `true` and the grid is [full](SudokuGrid::is_full).
    ///
    /// The digits are found by a depth-first backtracking search over the
    /// cells in row-major order, where the candidates for each cell are tried
    /// in an independently shuffled order. Every empty grid is completable,
    /// so this operation cannot fail.
    pub fn generate(&mut self) -> SudokuGrid {
        let mut grid = SudokuGrid::new();
        let filled = self.fill_rec(&mut grid, 0, 0);

        debug_assert!(filled, "backtracking failed on an empty grid");

        grid
    }
}

/// A carver can be applied to the output of a [Generator] to remove digits
/// from the grid, deriving the initial state of a playable puzzle. A random
/// number generator decides which digits remain visible.
///
/// Note that the remaining clues are a uniformly random subset of the cells
/// of the requested size. The carved puzzle is always solvable, since its
/// clues are a subset of a known solution, but it is *not* guaranteed to have
/// a unique solution.
pub struct Carver<R: Rng> {
    rng: R
}

impl Carver<ThreadRng> {

    /// Creates a new carver that uses a [ThreadRng] to decide which digits
    /// remain visible.
    pub fn new_default() -> Carver<ThreadRng> {
        Carver::new(rand::thread_rng())
    }
}

impl<R: Rng> Carver<R> {

    /// Creates a new carver that uses the given random number generator to
    /// decide which digits remain visible.
    pub fn new(rng: R) -> Carver<R> {
        Carver {
            rng
        }
    }

    /// Derives the initial grid of a puzzle from the given complete
    /// `solution`. All 81 cell coordinates are brought into a uniformly
    /// random order, the first `clues` of them keep their digit from the
    /// solution, and all others are cleared.
    ///
    /// `clues` is not validated: a value of 0 yields an entirely empty grid
    /// and values of 81 or more yield an unchanged copy of the solution.
    pub fn carve(&mut self, solution: &SudokuGrid, clues: usize)
            -> SudokuGrid {
        let coordinates = (0..SIZE)
            .flat_map(|row| (0..SIZE)
                .map(move |column| (column, row)));
        let mut initial = solution.clone();

        for &(column, row) in
                shuffle(&mut self.rng, coordinates).iter().skip(clues) {
            initial.clear_cell(column, row);
        }

        initial
    }
}
