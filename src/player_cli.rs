#![cfg(feature = "std")]

use std::io::{self, Write};

use crate::board::Board;
use crate::common::{Cell, Player};
use crate::config::BOARD_SIZE;
use crate::player::MoveSelector;
use rand::rngs::SmallRng;

/// Human player reading coordinates from stdin.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        CliPlayer::new()
    }
}

/// Format a coordinate in column-letter row-number form, e.g. `D3`.
pub fn coord_to_string(r: usize, c: usize) -> String {
    let col = (b'A' + c as u8) as char;
    format!("{}{}", col, r + 1)
}

/// Parse `D3`-style input back to a zero-based (row, col).
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let input = input.trim();
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str.parse().ok()?;
    if row == 0 || row > BOARD_SIZE || col >= BOARD_SIZE {
        return None;
    }
    Some((row - 1, col))
}

/// Print the grid, marking the given player's legal moves with `*`.
pub fn print_board(board: &Board, hints_for: Option<Player>) {
    print!("   ");
    for c in 0..BOARD_SIZE {
        let ch = (b'A' + c as u8) as char;
        print!(" {}", ch);
    }
    println!();
    for r in 0..BOARD_SIZE {
        print!("{:2} ", r + 1);
        for c in 0..BOARD_SIZE {
            let ch = match board.cell(r, c) {
                Some(Cell::Black) => 'B',
                Some(Cell::White) => 'W',
                _ => match hints_for {
                    Some(p) if board.is_legal_move(r, c, p) => '*',
                    _ => '.',
                },
            };
            print!(" {}", ch);
        }
        println!();
    }
}

/// Print the running disc counts.
pub fn print_score(board: &Board) {
    let score = board.score();
    println!("Black: {}  White: {}", score.black, score.white);
}

impl MoveSelector for CliPlayer {
    fn select_move(
        &mut self,
        _rng: &mut SmallRng,
        board: &Board,
        player: Player,
    ) -> Option<(usize, usize)> {
        let moves = board.legal_moves(player);
        if moves.is_empty() {
            return None;
        }
        loop {
            print!("{} to move (e.g. D3, ? for legal moves): ", player);
            let _ = io::stdout().flush();
            let mut line = String::new();
            if io::stdin().read_line(&mut line).is_err() {
                return None;
            }
            if line.trim() == "?" {
                let listed: Vec<String> =
                    moves.iter().map(|&(r, c)| coord_to_string(r, c)).collect();
                println!("Legal moves: {}", listed.join(" "));
                continue;
            }
            match parse_coord(&line) {
                Some((r, c)) if board.is_legal_move(r, c, player) => return Some((r, c)),
                Some((r, c)) => {
                    println!("{} is not a legal move.", coord_to_string(r, c));
                }
                None => {
                    println!("Could not read that as a coordinate.");
                }
            }
        }
    }
}
