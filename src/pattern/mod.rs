//! Tactical line pattern recognition.
//!
//! For a given player, every one of their stones is a potential scan origin in
//! each of the four line directions. A stone only starts a scan when the cell
//! one step back along that direction is off the board or not theirs, so a
//! run of stones is read once from its first stone rather than once per stone.
//!
//! A scan reads a six-cell window forward from the origin and encodes it over
//! the alphabet `1` (own stone), `0` (empty) and `2` (opponent stone or off
//! the board). The edge of the board blocks a line exactly like an opponent.
//!
//! Windows are classified cumulatively: every non-overlapping occurrence of
//! every signature is counted, so a single window can contribute to several
//! pattern kinds. A five anywhere in the window is the only thing counted
//! for that window.

mod pattern_kind;

pub use pattern_kind::{PatternCounts, PatternKind, PATTERN_KIND_COUNT};

use crate::board::{Board, Coordinate, Player, DIRECTIONS};

pub const WINDOW_LENGTH: usize = 6;

const OWN: u8 = b'1';
const EMPTY: u8 = b'0';
const OTHER: u8 = b'2';

type Window = [u8; WINDOW_LENGTH];

/// Counts every pattern `player` has on the board.
pub fn analyze(board: &Board, player: Player) -> PatternCounts {
    let mut counts = PatternCounts::new();

    for &origin in board.history() {
        if board.get(origin) != Some(player) {
            continue;
        }
        for &direction in DIRECTIONS.iter() {
            if !is_scan_origin(board, origin, direction, player) {
                continue;
            }
            let window = read_window(board, origin, direction, player);
            counts += classify_window(&window);
        }
    }

    counts
}

/// Classifies one encoded window.
pub fn classify_window(window: &[u8]) -> PatternCounts {
    let mut counts = PatternCounts::new();

    if contains(window, PatternKind::Five) {
        counts.add(PatternKind::Five, 1);
        return counts;
    }

    for &kind in PatternKind::ALL[1..].iter() {
        let occurrences = kind
            .signatures()
            .iter()
            .map(|signature| count_occurrences(window, signature.as_bytes()))
            .sum();
        counts.add(kind, occurrences);
    }

    counts
}

fn is_scan_origin(
    board: &Board,
    origin: Coordinate,
    direction: (isize, isize),
    player: Player,
) -> bool {
    match origin.offset(direction, -1, board.size()) {
        Some(previous) => board.get(previous) != Some(player),
        None => true,
    }
}

fn read_window(
    board: &Board,
    origin: Coordinate,
    direction: (isize, isize),
    player: Player,
) -> Window {
    let mut window = [OTHER; WINDOW_LENGTH];
    for (distance, symbol) in window.iter_mut().enumerate() {
        if let Some(cell) = origin.offset(direction, distance as isize, board.size()) {
            *symbol = match board.get(cell) {
                Some(stone) if stone == player => OWN,
                Some(_) => OTHER,
                None => EMPTY,
            };
        }
    }
    window
}

fn contains(window: &[u8], kind: PatternKind) -> bool {
    kind.signatures()
        .iter()
        .any(|signature| count_occurrences(window, signature.as_bytes()) > 0)
}

/// Non-overlapping occurrences of `needle`, scanning left to right.
fn count_occurrences(haystack: &[u8], needle: &[u8]) -> u32 {
    let mut count = 0;
    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        if &haystack[start..start + needle.len()] == needle {
            count += 1;
            start += needle.len();
        } else {
            start += 1;
        }
    }
    count
}
