//! Game session: turn alternation, passes, and terminal detection on top of
//! the board engine.

use crate::board::{Board, Score};
use crate::common::{Cell, MoveError, Outcome, Player};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished(Outcome),
}

/// Notifications produced while advancing the turn after a move. How these
/// are presented (dialog, log line, banner) is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The named player had no legal move and the turn skipped them.
    Pass(Player),
    /// Neither side can move; the game is over.
    GameOver { score: Score, outcome: Outcome },
}

/// One game of Othello: the board, the player to move, and whether the game
/// has finished. Owns the board exclusively; all mutation goes through
/// [`GameSession::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    current: Player,
    finished: bool,
}

impl GameSession {
    /// Fresh game: standard starting position, Black to move.
    pub fn new() -> Self {
        GameSession {
            board: Board::new(),
            current: Player::Black,
            finished: false,
        }
    }

    /// Resume from an arbitrary position. The session is finished from the
    /// start when neither side can move.
    pub fn from_parts(board: Board, to_move: Player) -> Self {
        let finished = board.is_terminal();
        GameSession {
            board,
            current: to_move,
            finished,
        }
    }

    /// Read access to the grid for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side whose turn it is. Meaningless once finished.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Whether the game has reached its terminal state.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn status(&self) -> GameStatus {
        if self.finished {
            GameStatus::Finished(self.board.score().outcome())
        } else {
            GameStatus::InProgress
        }
    }

    /// Apply the current player's move at (row, col), then advance the turn.
    /// If the opponent has no reply the turn passes straight back; if neither
    /// side can move the session finishes. Returned events report passes and
    /// game over in the order they occurred.
    pub fn play(&mut self, row: usize, col: usize) -> Result<Vec<GameEvent>, MoveError> {
        if self.finished {
            return Err(MoveError::Finished);
        }
        if !self.board.is_legal_move(row, col, self.current) {
            return Err(match self.board.cell(row, col) {
                None => MoveError::OutOfBounds,
                Some(Cell::Empty) => MoveError::Illegal,
                Some(_) => MoveError::Occupied,
            });
        }
        self.board.apply_move(row, col, self.current)?;
        self.current = self.current.opponent();

        let mut events = Vec::new();
        if self.board.is_terminal() {
            self.finished = true;
            let score = self.board.score();
            events.push(GameEvent::GameOver {
                score,
                outcome: score.outcome(),
            });
        } else if !self.board.has_legal_move(self.current) {
            events.push(GameEvent::Pass(self.current));
            self.current = self.current.opponent();
        }
        Ok(events)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}
