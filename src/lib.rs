// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_crate_level_docs)]
#![warn(invalid_codeblock_attributes)]

//! This crate implements the core of a desktop Sudoku game. It supports the
//! following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Checking placements against the standard row, column, and block rules
//! * Generating random solved grids with a backtracking search
//! * Carving puzzles of a chosen difficulty out of a solved grid
//! * Tracking the state of a running game, including hints, resets, and the
//! solved check
//!
//! The crate only deals with ordinary 9x9 Sudoku, divided in 9 3x3 blocks,
//! each containing the digits 1 to 9, just like each row and column.
//!
//! # Parsing and printing grids
//!
//! See [SudokuGrid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange grids, while pretty prints can be used to
//! display a grid in a clearer manner. An example of how to parse and display
//! a grid is provided below.
//!
//! ```
//! use sudoku_game::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("\
//!     5,3, , ,7, , , , ,\
//!     6, , ,1,9,5, , , ,\
//!      ,9,8, , , , ,6, ,\
//!     8, , , ,6, , , ,3,\
//!     4, , ,8, ,3, , ,1,\
//!     7, , , ,2, , , ,6,\
//!      ,6, , , , ,2,8, ,\
//!      , , ,4,1,9, , ,5,\
//!      , , , ,8, , ,7,9").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking placements
//!
//! The [rules] module decides whether a digit is legal in a cell, which is
//! used both by the generator during its search and by a UI that wants to
//! give feedback on a proposed entry before committing it to the grid.
//!
//! ```
//! use sudoku_game::SudokuGrid;
//! use sudoku_game::rules;
//!
//! let mut grid = SudokuGrid::new();
//! grid.set_cell(0, 0, 5);
//!
//! // Another 5 in the top row is illegal, a 3 is fine.
//! assert!(!rules::check_number(&grid, 4, 0, 5));
//! assert!(rules::check_number(&grid, 4, 0, 3));
//! ```
//!
//! # Generating puzzles
//!
//! Puzzle generation is done in two steps: generating a full grid using a
//! [Generator](generator::Generator) and then clearing all but a chosen
//! number of cells using a [Carver](generator::Carver).
//!
//! Both use a random number generator, for which we use the `Rng` trait from
//! the [rand](https://rust-random.github.io/rand/rand/index.html) crate. Note
//! that the number of remaining clues is a rough difficulty control, not a
//! guarantee of a unique solution - the carved puzzle is always solvable,
//! since its clues are a subset of a known solution.
//!
//! ```
//! use sudoku_game::generator::{Carver, Generator};
//! use sudoku_game::rules;
//!
//! // new_default yields a generator/carver with rand::thread_rng()
//! let mut generator = Generator::new_default();
//! let mut carver = Carver::new_default();
//!
//! let solution = generator.generate();
//! assert!(solution.is_full());
//! assert!(rules::check(&solution));
//!
//! let initial = carver.carve(&solution, 35);
//! assert_eq!(35, initial.count_clues());
//! ```
//!
//! # Playing
//!
//! The [game] module tracks a running game. A [Puzzle](game::Puzzle) keeps
//! the generated solution, the immutable initial clues, and the grid the
//! player is filling in, while a [Game](game::Game) session additionally
//! manages the currently selected cell so that UI event handlers do not need
//! any state of their own.
//!
//! ```
//! use sudoku_game::game::{Difficulty, Game};
//!
//! let mut game = Game::new(Difficulty::Easy);
//!
//! // Clue cells cannot be selected, so find a free one.
//! let (column, row) = (0..81)
//!     .map(|i| (i % 9, i / 9))
//!     .find(|&(column, row)| game.puzzle().is_editable(column, row))
//!     .unwrap();
//!
//! assert!(game.select(column, row));
//! game.hint_selected();
//!
//! let expected = game.puzzle().solution().get_cell(column, row);
//! assert_eq!(expected, game.puzzle().current().get_cell(column, row));
//! ```

pub mod error;
pub mod game;
pub mod generator;
pub mod rules;
pub mod util;

use error::{SudokuParseError, SudokuParseResult};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The width and height of one block, that is, one of the nine 3x3 sub-grids
/// whose union tiles the entire grid.
pub const BLOCK_SIZE: usize = 3;

/// The number of cells along one axis of the grid (horizontally or
/// vertically).
pub const SIZE: usize = BLOCK_SIZE * BLOCK_SIZE;

/// The total number of cells in a grid.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// A Sudoku grid is a 9x9 square of cells, organized into nine 3x3 blocks.
/// Each cell may or may not be occupied by a digit from 1 to 9.
///
/// While a grid is being generated or played, the invariant is that no row,
/// column, or block contains a duplicate digit (see [rules::check]). A
/// complete grid additionally has no empty cells, in which case every row,
/// column, and block contains each digit exactly once.
///
/// `SudokuGrid` implements `Display`, which renders the grid with box-drawing
/// characters, and serializes to the same code accepted by
/// [SudokuGrid::parse].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct SudokuGrid {
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        ('0' as u8 + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.get_cell(x, y)), ' ', '║', true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line().as_str())?;
            }
            else {
                f.write_str(thin_separator_line().as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())
    }
}

fn to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

impl SudokuGrid {

    /// Creates a new, empty Sudoku grid, that is, one in which every cell is
    /// empty.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: vec![None; CELL_COUNT]
        }
    }

    /// Parses a code encoding a Sudoku grid. The code is a comma-separated
    /// list of 81 entries, which are either empty or a digit from 1 to 9. The
    /// entries are assigned left-to-right, top-to-bottom, where each row is
    /// completed before the next one is started. Whitespace in the entries is
    /// ignored to allow for more intuitive formatting.
    ///
    /// As an example, a code starting with `1, ,2, , ,3, ,4, ,4, , ...` will
    /// parse to a grid whose first row contains a 1, a 2, a 3, and a 4 in
    /// columns 0, 2, 5, and 7 and whose second row starts with a 4.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        let mut grid = SudokuGrid::new();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let number = entry.parse::<usize>()?;

            if number == 0 || number > SIZE {
                return Err(SudokuParseError::InvalidNumber);
            }

            grid.cells[i] = Some(number);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_game::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4);
    /// grid.set_cell(1, 2, 5);
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// Coordinates outside the grid are a programming error. They panic in
    /// debug builds and yield an empty cell in release builds.
    pub fn get_cell(&self, column: usize, row: usize) -> Option<usize> {
        debug_assert!(column < SIZE && row < SIZE,
            "cell coordinates ({}, {}) out of bounds", column, row);

        if column >= SIZE || row >= SIZE {
            return None;
        }

        self.cells[index(column, row)]
    }

    /// Indicates whether the cell at the specified position has the given
    /// digit. This will return `false` if there is a different digit in that
    /// cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The digit to check whether it is in the specified cell. If
    /// it is *not* in the range `[1, 9]`, `false` will always be returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> bool {
        self.get_cell(column, row) == Some(number)
    }

    /// Sets the content of the cell at the specified position to the given
    /// digit. If the cell was not empty, the old digit will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The digit to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// Arguments outside these ranges are a programming error. They panic in
    /// debug builds and leave the grid unchanged in release builds.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize) {
        debug_assert!(column < SIZE && row < SIZE,
            "cell coordinates ({}, {}) out of bounds", column, row);
        debug_assert!(number >= 1 && number <= SIZE,
            "digit {} out of range", number);

        if column >= SIZE || row >= SIZE || number < 1 || number > SIZE {
            return;
        }

        self.cells[index(column, row)] = Some(number);
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a digit, that digit is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    pub fn clear_cell(&mut self, column: usize, row: usize) {
        debug_assert!(column < SIZE && row < SIZE,
            "cell coordinates ({}, {}) out of bounds", column, row);

        if column >= SIZE || row >= SIZE {
            return;
        }

        self.cells[index(column, row)] = None;
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells. While on average puzzles with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .filter(|c| c.is_some())
            .count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// digit. In this case, [SudokuGrid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// digit. In this case, [SudokuGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some digit must be filled
    /// in `other` with the same digit. If this condition is met, `true` is
    /// returned, and `false` otherwise.
    pub fn is_subset(&self, other: &SudokuGrid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(self_number) =>
                        match other_cell {
                            Some(other_number) => self_number == other_number,
                            None => false
                        },
                    None => true
                }
            })
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some digit
    /// must be filled in this one with the same digit. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    pub fn is_superset(&self, other: &SudokuGrid) -> bool {
        other.is_subset(self)
    }

    /// Gets a reference to the vector which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &Vec<Option<usize>> {
        &self.cells
    }
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}

impl From<SudokuGrid> for String {
    fn from(grid: SudokuGrid) -> String {
        grid.to_parseable_string()
    }
}

impl TryFrom<String> for SudokuGrid {
    type Error = SudokuParseError;

    fn try_from(code: String) -> SudokuParseResult<SudokuGrid> {
        SudokuGrid::parse(code.as_str())
    }
}
