//! Position scoring

use crate::board::Mark;
use crate::game::{Board, GameResult};

/// Score of a won position before depth adjustment
pub const WIN_VALUE: i32 = 10;

/// Score of a drawn position
pub const DRAW_VALUE: i32 = 0;

/// Bound larger than any reachable score
pub const INFINITY: i32 = WIN_VALUE * 100;

/// Score a terminal result from `perspective`, `ply` plies below the root.
///
/// Faster wins score higher and slower losses score less negative:
/// a win is `WIN_VALUE - ply`, a loss is `-WIN_VALUE + ply`.
pub fn terminal_score(result: GameResult, perspective: Mark, ply: u32) -> Option<i32> {
    match result {
        GameResult::Ongoing => None,
        GameResult::Draw => Some(DRAW_VALUE),
        GameResult::Won(winner) => {
            let ply = ply as i32;
            if winner == perspective {
                Some(WIN_VALUE - ply)
            } else {
                Some(-WIN_VALUE + ply)
            }
        }
    }
}

/// Value of a non-terminal frontier node in a depth-limited search
pub fn frontier_score(_board: &Board, _perspective: Mark) -> i32 {
    DRAW_VALUE
}

/// Plain-language reading of a root score
pub fn describe_score(score: i32) -> &'static str {
    if score > DRAW_VALUE {
        "forced win"
    } else if score < DRAW_VALUE {
        "forced loss against perfect play"
    } else {
        "draw with best play"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_scores() {
        assert_eq!(terminal_score(GameResult::Ongoing, Mark::X, 3), None);
        assert_eq!(terminal_score(GameResult::Draw, Mark::X, 9), Some(0));
        assert_eq!(terminal_score(GameResult::Won(Mark::X), Mark::X, 1), Some(9));
        assert_eq!(terminal_score(GameResult::Won(Mark::X), Mark::O, 2), Some(-8));
    }

    #[test]
    fn test_faster_wins_score_higher() {
        let quick = terminal_score(GameResult::Won(Mark::O), Mark::O, 1).unwrap();
        let slow = terminal_score(GameResult::Won(Mark::O), Mark::O, 5).unwrap();
        assert!(quick > slow);

        let early_loss = terminal_score(GameResult::Won(Mark::X), Mark::O, 2).unwrap();
        let late_loss = terminal_score(GameResult::Won(Mark::X), Mark::O, 6).unwrap();
        assert!(late_loss > early_loss);
        assert!(late_loss < DRAW_VALUE);
    }

    #[test]
    fn test_frontier_is_neutral() {
        assert_eq!(frontier_score(&Board::new(), Mark::X), DRAW_VALUE);
        assert!(INFINITY > WIN_VALUE);
    }
}
