/// Side length of the square board.
pub const BOARD_SIZE: usize = 8;

/// The eight compass directions used by the bracketing scan.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
];

/// Delay before the computer opponent takes its scheduled turn.
pub const AI_MOVE_DELAY_MS: u64 = 1000;
