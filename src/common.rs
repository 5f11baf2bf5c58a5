//! Common types for Othello: players, cells, outcomes, and move errors.

/// A side in the game. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// The other side.
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The cell value a disc of this colour occupies.
    pub fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl core::fmt::Display for Player {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Black,
    White,
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    BlackWin,
    WhiteWin,
    Tie,
}

/// Errors returned by move application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinate lies outside the 8x8 grid.
    OutOfBounds,
    /// Target cell already holds a disc.
    Occupied,
    /// Placement would not bracket any opponent run.
    Illegal,
    /// The game is over; no further moves are accepted.
    Finished,
}

impl core::fmt::Display for MoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveError::OutOfBounds => write!(f, "Coordinate is outside the board"),
            MoveError::Occupied => write!(f, "Cell already holds a disc"),
            MoveError::Illegal => write!(f, "Move would not flip any opponent disc"),
            MoveError::Finished => write!(f, "Game is already over"),
        }
    }
}
