//! This module contains the constraint checking for classic Sudoku rules,
//! that is, "no duplicates in a row", "no duplicates in a column", and "no
//! duplicates in a block".
//!
//! The central function is [check_number], which decides whether a proposed
//! digit is legal in a given cell. It is used by the
//! [Generator](crate::generator::Generator) during its search and can be used
//! by a UI to give feedback on a proposed entry. [check] validates an entire
//! grid, which is mostly useful for tests and for imported grids.

use crate::{SudokuGrid, BLOCK_SIZE, SIZE};
use crate::util::DigitSet;

fn check_number_row(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> bool {
    for other_column in 0..SIZE {
        if other_column != column &&
                grid.has_number(other_column, row, number) {
            return false;
        }
    }

    true
}

fn check_number_column(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> bool {
    for other_row in 0..SIZE {
        if other_row != row && grid.has_number(column, other_row, number) {
            return false;
        }
    }

    true
}

fn check_number_block(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> bool {
    let block_column = (column / BLOCK_SIZE) * BLOCK_SIZE;
    let block_row = (row / BLOCK_SIZE) * BLOCK_SIZE;

    for other_row in block_row..(block_row + BLOCK_SIZE) {
        for other_column in block_column..(block_column + BLOCK_SIZE) {
            if (other_column != column || other_row != row) &&
                    grid.has_number(other_column, other_row, number) {
                return false;
            }
        }
    }

    true
}

/// Checks whether the given `number` would fit into the cell specified by
/// `column` and `row` into the `grid` without violating the Sudoku rules.
/// That is, `false` is returned if `number` is already present elsewhere in
/// the cell's row, column, or 3x3 block, and `true` otherwise.
///
/// The checked cell itself is skipped, so callers may query a digit for a
/// cell which currently contains it without getting a self-conflict. The
/// intended use is to check a placement *before* writing it into the grid.
pub fn check_number(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> bool {
    check_number_row(grid, column, row, number) &&
        check_number_column(grid, column, row, number) &&
        check_number_block(grid, column, row, number)
}

/// Checks whether the cell at the given position in the [SudokuGrid]
/// fulfills the Sudoku rules. This is the same as calling [check_number] with
/// the same coordinates and the digit which is actually filled in that cell.
/// If the cell is empty, this function always returns `true`.
pub fn check_cell(grid: &SudokuGrid, column: usize, row: usize) -> bool {
    if let Some(number) = grid.get_cell(column, row) {
        check_number(grid, column, row, number)
    }
    else {
        true
    }
}

fn check_rows(grid: &SudokuGrid) -> bool {
    let mut set = DigitSet::new();

    for row in 0..SIZE {
        set.clear();

        for column in 0..SIZE {
            if let Some(number) = grid.get_cell(column, row) {
                if !set.insert(number) {
                    return false;
                }
            }
        }
    }

    true
}

fn check_columns(grid: &SudokuGrid) -> bool {
    let mut set = DigitSet::new();

    for column in 0..SIZE {
        set.clear();

        for row in 0..SIZE {
            if let Some(number) = grid.get_cell(column, row) {
                if !set.insert(number) {
                    return false;
                }
            }
        }
    }

    true
}

fn check_blocks(grid: &SudokuGrid) -> bool {
    let mut set = DigitSet::new();

    for block_row in 0..BLOCK_SIZE {
        for block_column in 0..BLOCK_SIZE {
            set.clear();

            let start_column = block_column * BLOCK_SIZE;
            let start_row = block_row * BLOCK_SIZE;

            for row in start_row..(start_row + BLOCK_SIZE) {
                for column in start_column..(start_column + BLOCK_SIZE) {
                    if let Some(number) = grid.get_cell(column, row) {
                        if !set.insert(number) {
                            return false;
                        }
                    }
                }
            }
        }
    }

    true
}

/// Checks whether the given [SudokuGrid] matches the Sudoku rules, that is,
/// no row, column, or block contains a duplicate digit. Empty cells are
/// permitted, so this decides the partial-grid invariant; a grid which is
/// additionally [full](SudokuGrid::is_full) is a complete, valid solution.
pub fn check(grid: &SudokuGrid) -> bool {
    check_rows(grid) && check_columns(grid) && check_blocks(grid)
}
