//! This module contains the play-state tracking for a running game.
//!
//! A [Puzzle] bundles the three grids that make up one game: the generated
//! solution, the immutable initial clues, and the grid the player is filling
//! in. All play operations (entering digits, hints, resetting, the solved
//! check) go through the puzzle, which enforces that clue cells are never
//! changed.
//!
//! A [Game] additionally tracks which cell is currently selected, so that a
//! UI can route number-pad input without keeping any state of its own.

use crate::{SudokuGrid, SIZE};
use crate::generator::{Carver, Generator};

use rand::Rng;

use serde::{Deserialize, Serialize};

/// An enumeration of the difficulty tiers offered to the player. The
/// difficulty only controls how many clues the carved puzzle retains.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Difficulty {

    /// An easy puzzle, retaining 45 clues.
    Easy,

    /// A medium puzzle, retaining 35 clues.
    Medium,

    /// A hard puzzle, retaining 25 clues.
    Hard
}

impl Difficulty {

    /// Gets the number of clues a puzzle of this difficulty retains.
    pub fn clue_count(self) -> usize {
        match self {
            Difficulty::Easy => 45,
            Difficulty::Medium => 35,
            Difficulty::Hard => 25
        }
    }
}

/// A puzzle holds the full state of one game: the complete `solution` grid,
/// the `initial` grid derived from it by carving, and the `current` grid
/// which starts as a copy of `initial` and is mutated by the player.
///
/// The invariant maintained by all operations is that `current` may differ
/// from `solution` only at cells where `initial` is empty. `solution` and
/// `initial` are never mutated after creation; a new game means a new puzzle.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Puzzle {
    solution: SudokuGrid,
    initial: SudokuGrid,
    current: SudokuGrid
}

impl Puzzle {

    /// Generates a new puzzle whose initial grid retains the given number of
    /// `clues`, using `rand::thread_rng()` for randomness.
    pub fn generate(clues: usize) -> Puzzle {
        Puzzle::generate_with(rand::thread_rng(), clues)
    }

    /// Generates a new puzzle whose initial grid retains the given number of
    /// `clues`, using the given random number generator both for the solution
    /// and for the carving. Providing a seeded generator makes the result
    /// deterministic, which is mostly useful for tests.
    pub fn generate_with<R: Rng>(mut rng: R, clues: usize) -> Puzzle {
        let solution = Generator::new(&mut rng).generate();
        let initial = Carver::new(&mut rng).carve(&solution, clues);
        let current = initial.clone();

        Puzzle {
            solution,
            initial,
            current
        }
    }

    /// Gets a reference to the complete solution grid.
    pub fn solution(&self) -> &SudokuGrid {
        &self.solution
    }

    /// Gets a reference to the initial grid, i.e. the clues the player
    /// started with.
    pub fn initial(&self) -> &SudokuGrid {
        &self.initial
    }

    /// Gets a reference to the grid the player is filling in.
    pub fn current(&self) -> &SudokuGrid {
        &self.current
    }

    /// Indicates whether the cell at the specified position may be changed by
    /// the player. That is the case if and only if it is empty in the initial
    /// grid.
    pub fn is_editable(&self, column: usize, row: usize) -> bool {
        self.initial.get_cell(column, row).is_none()
    }

    /// Sets the content of the cell at the specified position in the current
    /// grid to the given digit. If the cell is not editable, the current grid
    /// remains unchanged.
    ///
    /// Note that the entered digit is *not* checked against the rules or the
    /// solution. Wrong entries are allowed and simply cause
    /// [Puzzle::is_solved] to remain `false`.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize) {
        if !self.is_editable(column, row) {
            return;
        }

        self.current.set_cell(column, row, number);
    }

    /// Clears the content of the cell at the specified position in the
    /// current grid. If the cell is not editable, the current grid remains
    /// unchanged.
    pub fn clear_cell(&mut self, column: usize, row: usize) {
        if !self.is_editable(column, row) {
            return;
        }

        self.current.clear_cell(column, row);
    }

    /// Fills the cell at the specified position in the current grid with its
    /// digit from the solution. If the cell is not editable, the current grid
    /// remains unchanged.
    pub fn apply_hint(&mut self, column: usize, row: usize) {
        if !self.is_editable(column, row) {
            return;
        }

        if let Some(number) = self.solution.get_cell(column, row) {
            self.current.set_cell(column, row, number);
        }
    }

    /// Clears every editable cell of the current grid, returning it to the
    /// initial state. The solution and initial grids are not regenerated;
    /// the player restarts the same puzzle.
    pub fn reset(&mut self) {
        for row in 0..SIZE {
            for column in 0..SIZE {
                if self.is_editable(column, row) {
                    self.current.clear_cell(column, row);
                }
            }
        }
    }

    /// Indicates whether the puzzle is solved, that is, the current grid
    /// equals the solution grid cell-for-cell.
    ///
    /// This is stricter than satisfying the Sudoku rules: if the puzzle
    /// admits more than one valid completion, a player who finds a different
    /// one than the generated solution is *not* reported as having solved the
    /// puzzle.
    pub fn is_solved(&self) -> bool {
        self.current == self.solution
    }
}

/// A game session owns the active [Puzzle] together with the transient
/// selection state of the board. UI event handlers receive a mutable
/// reference to the session and call its operations; no state lives outside
/// of it.
///
/// At most one cell is selected at any time, and only editable cells can be
/// selected. Digit entry, clearing, and hints act on the selected cell and do
/// nothing while no cell is selected.
#[derive(Clone, Debug)]
pub struct Game {
    puzzle: Puzzle,
    selection: Option<(usize, usize)>
}

impl Game {

    /// Creates a new game session with a freshly generated puzzle of the
    /// given difficulty and no selected cell.
    pub fn new(difficulty: Difficulty) -> Game {
        Game::with_puzzle(Puzzle::generate(difficulty.clue_count()))
    }

    /// Creates a new game session playing the given puzzle, with no selected
    /// cell.
    pub fn with_puzzle(puzzle: Puzzle) -> Game {
        Game {
            puzzle,
            selection: None
        }
    }

    /// Gets a reference to the puzzle being played.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Abandons the current puzzle and starts a fresh one of the given
    /// difficulty. The selection is dropped.
    pub fn restart(&mut self, difficulty: Difficulty) {
        self.puzzle = Puzzle::generate(difficulty.clue_count());
        self.selection = None;
    }

    /// Gets the coordinates of the currently selected cell in the form
    /// `(column, row)`, or `None` if no cell is selected.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }

    /// Selects the cell at the specified position. Clue cells cannot be
    /// selected; in that case the previous selection is kept and `false` is
    /// returned.
    pub fn select(&mut self, column: usize, row: usize) -> bool {
        if !self.puzzle.is_editable(column, row) {
            return false;
        }

        self.selection = Some((column, row));
        true
    }

    /// Drops the selection, leaving no cell selected.
    pub fn deselect(&mut self) {
        self.selection = None;
    }

    /// Enters the given digit into the selected cell. Does nothing while no
    /// cell is selected.
    pub fn enter_digit(&mut self, number: usize) {
        if let Some((column, row)) = self.selection {
            self.puzzle.set_cell(column, row, number);
        }
    }

    /// Clears the selected cell. Does nothing while no cell is selected.
    pub fn clear_selected(&mut self) {
        if let Some((column, row)) = self.selection {
            self.puzzle.clear_cell(column, row);
        }
    }

    /// Fills the selected cell with its digit from the solution. Does nothing
    /// while no cell is selected.
    pub fn hint_selected(&mut self) {
        if let Some((column, row)) = self.selection {
            self.puzzle.apply_hint(column, row);
        }
    }

    /// Returns the current grid to the initial state and drops the
    /// selection. The puzzle itself is kept, see [Puzzle::reset].
    pub fn reset(&mut self) {
        self.puzzle.reset();
        self.selection = None;
    }

    /// Indicates whether the played puzzle is solved, see
    /// [Puzzle::is_solved].
    pub fn is_solved(&self) -> bool {
        self.puzzle.is_solved()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::CELL_COUNT;
    use crate::rules;

    use rand::SeedableRng;

    use rand_chacha::ChaCha8Rng;

    fn example_puzzle(clues: usize) -> Puzzle {
        Puzzle::generate_with(ChaCha8Rng::seed_from_u64(42), clues)
    }

    fn find_cell(puzzle: &Puzzle, editable: bool) -> (usize, usize) {
        for row in 0..SIZE {
            for column in 0..SIZE {
                if puzzle.is_editable(column, row) == editable {
                    return (column, row);
                }
            }
        }

        panic!("No cell with editability {} found.", editable);
    }

    #[test]
    fn difficulty_clue_counts() {
        assert_eq!(45, Difficulty::Easy.clue_count());
        assert_eq!(35, Difficulty::Medium.clue_count());
        assert_eq!(25, Difficulty::Hard.clue_count());
    }

    #[test]
    fn generated_puzzle_consistent() {
        let puzzle = example_puzzle(35);

        assert!(puzzle.solution().is_full());
        assert!(rules::check(puzzle.solution()));
        assert!(puzzle.initial().is_subset(puzzle.solution()));
        assert_eq!(35, puzzle.initial().count_clues());
        assert_eq!(puzzle.initial(), puzzle.current());
        assert!(!puzzle.is_solved());
    }

    #[test]
    fn editable_iff_initially_empty() {
        let puzzle = example_puzzle(35);

        for row in 0..SIZE {
            for column in 0..SIZE {
                let initially_empty =
                    puzzle.initial().get_cell(column, row).is_none();
                assert_eq!(initially_empty,
                    puzzle.is_editable(column, row));
            }
        }
    }

    #[test]
    fn set_cell_ignored_on_clue_cell() {
        let mut puzzle = example_puzzle(35);
        let (column, row) = find_cell(&puzzle, false);
        let clue = puzzle.current().get_cell(column, row).unwrap();
        let other = clue % SIZE + 1;

        puzzle.set_cell(column, row, other);

        assert_eq!(Some(clue), puzzle.current().get_cell(column, row));
        assert_eq!(puzzle.initial(), puzzle.current());

        puzzle.clear_cell(column, row);

        assert_eq!(Some(clue), puzzle.current().get_cell(column, row));
    }

    #[test]
    fn set_and_clear_editable_cell() {
        let mut puzzle = example_puzzle(35);
        let (column, row) = find_cell(&puzzle, true);

        puzzle.set_cell(column, row, 3);

        assert_eq!(Some(3), puzzle.current().get_cell(column, row));
        assert_eq!(None, puzzle.initial().get_cell(column, row));

        puzzle.clear_cell(column, row);

        assert_eq!(None, puzzle.current().get_cell(column, row));
    }

    #[test]
    fn hint_fills_solution_digit() {
        let mut puzzle = example_puzzle(35);
        let (column, row) = find_cell(&puzzle, true);
        let expected = puzzle.solution().get_cell(column, row);

        puzzle.apply_hint(column, row);

        assert_eq!(expected, puzzle.current().get_cell(column, row));
    }

    #[test]
    fn hint_ignored_on_clue_cell() {
        let mut puzzle = example_puzzle(35);
        let (column, row) = find_cell(&puzzle, false);

        puzzle.apply_hint(column, row);

        assert_eq!(puzzle.initial(), puzzle.current());
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut puzzle = example_puzzle(35);
        let (column, row) = find_cell(&puzzle, true);

        puzzle.set_cell(column, row, 5);
        puzzle.reset();

        assert_eq!(puzzle.initial(), puzzle.current());

        // resetting twice is equivalent to resetting once
        puzzle.reset();

        assert_eq!(puzzle.initial(), puzzle.current());
    }

    #[test]
    fn full_clue_puzzle_solved_immediately() {
        let puzzle = example_puzzle(CELL_COUNT);

        assert_eq!(puzzle.solution(), puzzle.initial());
        assert!(puzzle.is_solved());

        for row in 0..SIZE {
            for column in 0..SIZE {
                assert!(!puzzle.is_editable(column, row));
            }
        }
    }

    #[test]
    fn empty_puzzle_solved_after_filling_every_cell() {
        let mut puzzle = example_puzzle(0);

        assert!(puzzle.initial().is_empty());
        assert!(!puzzle.is_solved());

        for row in 0..SIZE {
            for column in 0..SIZE {
                assert!(puzzle.is_editable(column, row));
                puzzle.apply_hint(column, row);
            }
        }

        assert!(puzzle.is_solved());
    }

    #[test]
    fn wrong_entry_prevents_solved_state() {
        let mut puzzle = example_puzzle(CELL_COUNT - 1);
        let (column, row) = find_cell(&puzzle, true);
        let correct = puzzle.solution().get_cell(column, row).unwrap();
        let wrong = correct % SIZE + 1;

        puzzle.set_cell(column, row, wrong);

        assert!(!puzzle.is_solved());

        puzzle.apply_hint(column, row);

        assert!(puzzle.is_solved());
    }

    #[test]
    fn alternative_completion_not_reported_solved() {
        // Both grids are valid solved Sudoku, so with no clues at all, both
        // are legitimate completions. Only the generated solution counts.

        let solution = SudokuGrid::parse("\
            7,4,6,2,8,1,3,5,9,\
            9,1,2,5,3,7,8,4,6,\
            8,5,3,4,9,6,1,7,2,\
            3,7,4,1,2,5,6,9,8,\
            6,2,8,7,4,9,5,1,3,\
            5,9,1,3,6,8,7,2,4,\
            1,6,9,8,7,4,2,3,5,\
            2,8,5,9,1,3,4,6,7,\
            4,3,7,6,5,2,9,8,1").unwrap();
        let other_completion = SudokuGrid::parse("\
            8,1,2,3,4,5,6,7,9,\
            3,7,5,6,8,9,1,2,4,\
            4,9,6,1,7,2,3,5,8,\
            7,4,1,9,3,6,2,8,5,\
            2,6,3,7,5,8,9,4,1,\
            9,5,8,4,2,1,7,6,3,\
            5,2,7,8,9,3,4,1,6,\
            6,8,9,2,1,4,5,3,7,\
            1,3,4,5,6,7,8,9,2").unwrap();
        let puzzle = Puzzle {
            solution,
            initial: SudokuGrid::new(),
            current: other_completion
        };

        assert!(puzzle.current().is_full());
        assert!(rules::check(puzzle.current()));
        assert!(!puzzle.is_solved());
    }

    #[test]
    fn puzzle_serde_roundtrip() {
        let mut puzzle = example_puzzle(45);
        let (column, row) = find_cell(&puzzle, true);

        puzzle.set_cell(column, row, 8);

        let json = serde_json::to_string(&puzzle).unwrap();
        let deserialized: Puzzle = serde_json::from_str(&json).unwrap();

        assert_eq!(puzzle, deserialized);
    }

    #[test]
    fn new_game_has_requested_clues() {
        for &difficulty in
                &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let game = Game::new(difficulty);

            assert_eq!(difficulty.clue_count(),
                game.puzzle().initial().count_clues());
            assert_eq!(None, game.selection());
        }
    }

    #[test]
    fn only_editable_cells_selectable() {
        let mut game = Game::with_puzzle(example_puzzle(35));
        let (clue_column, clue_row) = find_cell(game.puzzle(), false);
        let (free_column, free_row) = find_cell(game.puzzle(), true);

        assert!(!game.select(clue_column, clue_row));
        assert_eq!(None, game.selection());

        assert!(game.select(free_column, free_row));
        assert_eq!(Some((free_column, free_row)), game.selection());

        // a failed selection keeps the previous one
        assert!(!game.select(clue_column, clue_row));
        assert_eq!(Some((free_column, free_row)), game.selection());
    }

    #[test]
    fn digit_entry_goes_to_selected_cell() {
        let mut game = Game::with_puzzle(example_puzzle(35));

        // without a selection, digit entry does nothing
        game.enter_digit(7);
        assert_eq!(game.puzzle().initial(), game.puzzle().current());

        let (column, row) = find_cell(game.puzzle(), true);

        assert!(game.select(column, row));
        game.enter_digit(7);

        assert_eq!(Some(7), game.puzzle().current().get_cell(column, row));

        game.clear_selected();

        assert_eq!(None, game.puzzle().current().get_cell(column, row));

        game.deselect();
        game.enter_digit(4);

        assert_eq!(None, game.puzzle().current().get_cell(column, row));
    }

    #[test]
    fn hint_goes_to_selected_cell() {
        let mut game = Game::with_puzzle(example_puzzle(35));
        let (column, row) = find_cell(game.puzzle(), true);
        let expected = game.puzzle().solution().get_cell(column, row);

        assert!(game.select(column, row));
        game.hint_selected();

        assert_eq!(expected, game.puzzle().current().get_cell(column, row));
    }

    #[test]
    fn reset_drops_selection() {
        let mut game = Game::with_puzzle(example_puzzle(35));
        let (column, row) = find_cell(game.puzzle(), true);

        assert!(game.select(column, row));
        game.enter_digit(2);
        game.reset();

        assert_eq!(None, game.selection());
        assert_eq!(game.puzzle().initial(), game.puzzle().current());
    }

    #[test]
    fn restart_generates_fresh_puzzle() {
        let mut game = Game::with_puzzle(example_puzzle(35));
        let (column, row) = find_cell(game.puzzle(), true);

        assert!(game.select(column, row));
        game.restart(Difficulty::Hard);

        assert_eq!(None, game.selection());
        assert_eq!(25, game.puzzle().initial().count_clues());
        assert_eq!(game.puzzle().initial(), game.puzzle().current());
    }
}
