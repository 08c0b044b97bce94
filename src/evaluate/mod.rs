use crate::board::{Board, Coordinate, Player};
use crate::pattern::{self, PatternCounts};

const CENTER_WEIGHT_NUMERATOR: i32 = 12;
const CENTER_WEIGHT_DENOMINATOR: i32 = 10;
const CENTER_BASE: i32 = 10;

/// Bonus per stone inside the central region: a weight of 1.2 on a base of 10.
pub const CENTER_BONUS: i32 = CENTER_BASE * CENTER_WEIGHT_NUMERATOR / CENTER_WEIGHT_DENOMINATOR;

/// Returns the score of the board from the perspective of the player to move.
///
/// Patterns of the player to move count for, the opponent's against, each
/// weighted by severity. Stones in the central third of the board add
/// `CENTER_BONUS` for their owner.
pub fn score(board: &Board) -> i32 {
    let player = board.current_player();
    let opponent = player.opposite();

    let player_patterns = pattern::analyze(board, player);
    let opponent_patterns = pattern::analyze(board, opponent);

    pattern_score(&player_patterns, &opponent_patterns) + positional_score(board, player)
}

#[inline(always)]
pub fn pattern_score(player_patterns: &PatternCounts, opponent_patterns: &PatternCounts) -> i32 {
    player_patterns.weighted_score() - opponent_patterns.weighted_score()
}

/// Centre bias for `player`: `+CENTER_BONUS` per own stone and
/// `-CENTER_BONUS` per opponent stone inside the central region.
pub fn positional_score(board: &Board, player: Player) -> i32 {
    board
        .history()
        .iter()
        .filter(|&&coordinate| is_central(board.size(), coordinate))
        .map(|&coordinate| match board.get(coordinate) {
            Some(stone) if stone == player => CENTER_BONUS,
            Some(_) => -CENTER_BONUS,
            None => 0,
        })
        .sum()
}

/// Rows and columns in `[size / 3, 2 * size / 3]`, both ends inclusive.
pub fn is_central(size: usize, coordinate: Coordinate) -> bool {
    let low = size / 3;
    let high = 2 * size / 3;
    (low..=high).contains(&coordinate.x) && (low..=high).contains(&coordinate.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{GameConfig, Radius};
    use crate::pattern::PatternKind;

    fn play(board: &mut Board, moves: &[(usize, usize)]) {
        for &(x, y) in moves {
            board.try_apply_move(x, y).unwrap();
        }
    }

    #[test]
    fn test_center_bonus_value() {
        assert_eq!(CENTER_BONUS, 12);
    }

    #[test]
    fn test_empty_board_scores_zero() {
        assert_eq!(score(&Board::default()), 0);
    }

    #[test]
    fn test_central_region_bounds() {
        assert!(is_central(15, Coordinate::new(5, 5)));
        assert!(is_central(15, Coordinate::new(10, 10)));
        assert!(!is_central(15, Coordinate::new(4, 7)));
        assert!(!is_central(15, Coordinate::new(7, 11)));
        assert!(is_central(3, Coordinate::new(1, 2)));
        assert!(!is_central(3, Coordinate::new(0, 1)));
    }

    #[test]
    fn test_central_stone_favours_its_owner() {
        let mut board = Board::default();
        play(&mut board, &[(7, 7)]);
        // player two is to move, player one owns the central stone
        assert_eq!(score(&board), -CENTER_BONUS);

        play(&mut board, &[(0, 0)]);
        // back to player one, the corner stone earns nothing
        assert_eq!(score(&board), CENTER_BONUS);
    }

    #[test]
    fn test_patterns_dominate_the_score() {
        let mut board = Board::default();
        play(
            &mut board,
            &[(7, 7), (0, 0), (9, 7), (0, 2), (10, 7), (0, 4), (11, 7)],
        );
        let expected_patterns = PatternKind::GappedFour.weight()
            + PatternKind::OpenThree.weight()
            + PatternKind::GappedThree.weight();
        // player two to move and facing player one's shape; (11, 7) lies
        // outside the central region
        assert_eq!(score(&board), -(expected_patterns + 3 * CENTER_BONUS));
        assert_eq!(board.evaluate(), score(&board));
    }

    #[test]
    fn test_score_is_zero_sum_between_sides() {
        let mut board = Board::new(GameConfig::new(15, Radius::Unlimited).unwrap());
        play(&mut board, &[(7, 7), (7, 8), (8, 8), (6, 6), (9, 9)]);

        let player = board.current_player();
        let own = pattern::analyze(&board, player);
        let theirs = pattern::analyze(&board, player.opposite());
        assert_eq!(
            pattern_score(&own, &theirs),
            -pattern_score(&theirs, &own)
        );
        assert_eq!(
            positional_score(&board, player),
            -positional_score(&board, player.opposite())
        );
    }
}
