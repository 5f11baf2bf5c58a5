//! Board state and the direction-scanning move logic.

use crate::common::{Cell, MoveError, Outcome, Player};
use crate::config::{BOARD_SIZE, DIRECTIONS};
use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Disc counts for both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    /// Number of cells holding no disc.
    pub fn empty(&self) -> usize {
        BOARD_SIZE * BOARD_SIZE - self.black - self.white
    }

    /// Winner by disc count, or a tie.
    pub fn outcome(&self) -> Outcome {
        use core::cmp::Ordering;
        match self.black.cmp(&self.white) {
            Ordering::Greater => Outcome::BlackWin,
            Ordering::Less => Outcome::WhiteWin,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

/// 8x8 Othello grid. Mutated only through [`Board::apply_move`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Starting position: the four centre cells hold two discs of each
    /// colour on opposing diagonals, everything else empty.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        cells[3][3] = Cell::White;
        cells[3][4] = Cell::Black;
        cells[4][3] = Cell::Black;
        cells[4][4] = Cell::White;
        Board { cells }
    }

    /// A board with no discs at all, for assembling arbitrary positions.
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Cell contents, or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Overwrite a single cell. Position-assembly helper; gameplay goes
    /// through [`Board::apply_move`].
    pub fn set_cell(&mut self, row: usize, col: usize, value: Cell) -> Result<(), MoveError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(MoveError::OutOfBounds);
        }
        self.cells[row][col] = value;
        Ok(())
    }

    /// Length of the opponent run that placing at (row, col) would flip in
    /// one direction. Zero unless the run is non-empty and terminated by one
    /// of `player`'s own discs before an empty cell or the board edge.
    fn run_length(&self, row: usize, col: usize, player: Player, dir: (i8, i8)) -> usize {
        let own = player.cell();
        let opp = player.opponent().cell();
        let (dr, dc) = dir;
        let mut r = row as i8 + dr;
        let mut c = col as i8 + dc;
        let mut seen = 0usize;
        while (0..BOARD_SIZE as i8).contains(&r) && (0..BOARD_SIZE as i8).contains(&c) {
            let cell = self.cells[r as usize][c as usize];
            if cell == opp {
                seen += 1;
            } else if cell == own {
                return seen;
            } else {
                break;
            }
            r += dr;
            c += dc;
        }
        0
    }

    /// Whether placing a disc at (row, col) is legal for `player`: the cell
    /// is an empty in-bounds cell and at least one direction brackets an
    /// opponent run.
    pub fn is_legal_move(&self, row: usize, col: usize, player: Player) -> bool {
        if self.cell(row, col) != Some(Cell::Empty) {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&dir| self.run_length(row, col, player, dir) > 0)
    }

    /// Place a disc for `player` and flip every bracketed opponent run.
    /// Returns the number of discs flipped.
    pub fn apply_move(&mut self, row: usize, col: usize, player: Player) -> Result<usize, MoveError> {
        match self.cell(row, col) {
            None => return Err(MoveError::OutOfBounds),
            Some(Cell::Empty) => {}
            Some(_) => return Err(MoveError::Occupied),
        }
        let mut flipped = 0usize;
        for &(dr, dc) in DIRECTIONS.iter() {
            let len = self.run_length(row, col, player, (dr, dc));
            for k in 1..=len as i8 {
                let r = (row as i8 + dr * k) as usize;
                let c = (col as i8 + dc * k) as usize;
                self.cells[r][c] = player.cell();
            }
            flipped += len;
        }
        if flipped == 0 {
            return Err(MoveError::Illegal);
        }
        self.cells[row][col] = player.cell();
        Ok(flipped)
    }

    /// All legal placements for `player`, in row-major order.
    pub fn legal_moves(&self, player: Player) -> Vec<(usize, usize)> {
        let mut moves = Vec::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.is_legal_move(row, col, player) {
                    moves.push((row, col));
                }
            }
        }
        moves
    }

    /// Whether `player` has at least one legal placement.
    pub fn has_legal_move(&self, player: Player) -> bool {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.is_legal_move(row, col, player) {
                    return true;
                }
            }
        }
        false
    }

    /// Neither side can move. Distinct from a full board: blocked positions
    /// with empty cells are also terminal.
    pub fn is_terminal(&self) -> bool {
        !self.has_legal_move(Player::Black) && !self.has_legal_move(Player::White)
    }

    /// Count discs of both colours.
    pub fn score(&self) -> Score {
        let mut score = Score { black: 0, white: 0 };
        for row in self.cells.iter() {
            for cell in row.iter() {
                match cell {
                    Cell::Black => score.black += 1,
                    Cell::White => score.white += 1,
                    Cell::Empty => {}
                }
            }
        }
        score
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            for cell in row.iter() {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Black => 'B',
                    Cell::White => 'W',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
