//! This module contains some error and result definitions used in this crate.
//!
//! Note that the play and generation operations themselves are total and have
//! no error types: invalid coordinates or digits are precondition violations
//! which are asserted in debug builds and ignored in release builds, and
//! generating a puzzle from an empty grid cannot fail. The only fallible
//! operation is parsing a grid code.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// An enumeration of the errors that may occur when parsing a
/// [SudokuGrid](crate::SudokuGrid).
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal 81, the amount of cells in a grid.
    WrongNumberOfCells,

    /// Indicates that a cell entry could not be parsed as a number.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more than
    /// 9).
    InvalidNumber
}

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongNumberOfCells =>
                write!(f, "wrong number of cells"),
            SudokuParseError::NumberFormatError =>
                write!(f, "number format error"),
            SudokuParseError::InvalidNumber =>
                write!(f, "invalid number")
        }
    }
}

impl From<ParseIntError> for SudokuParseError {
    fn from(_: ParseIntError) -> Self {
        SudokuParseError::NumberFormatError
    }
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;
