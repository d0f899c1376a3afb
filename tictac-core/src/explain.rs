//! Human-readable move explanations
//!
//! Advisory text only; nothing in the engine branches on it.

use crate::ai::{Difficulty, RootMove, SearchStats};
use crate::board::{position_name, Mark, CENTER, CORNERS};
use crate::eval::describe_score;
use crate::game::Board;
use std::fmt::Write;

/// Number of alternative root moves listed for Hard
const MAX_ALTERNATIVES: usize = 3;

/// Tactical category of a chosen move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveReason {
    CompletesLine,
    BlocksLine,
    CreatesFork,
    TakesCenter,
    TakesCorner,
    Positional,
}

impl MoveReason {
    /// Classify `cell` as played by `player` on `board` (before the move)
    pub fn classify(board: &Board, player: Mark, cell: usize) -> Self {
        if board.winning_cells(player).contains(&cell) {
            return MoveReason::CompletesLine;
        }
        if board.winning_cells(player.opponent()).contains(&cell) {
            return MoveReason::BlocksLine;
        }
        if let Ok(after) = board.with_move(cell, player) {
            if after.winning_cells(player).len() >= 2 {
                return MoveReason::CreatesFork;
            }
        }
        if cell == CENTER {
            MoveReason::TakesCenter
        } else if CORNERS.contains(&cell) {
            MoveReason::TakesCorner
        } else {
            MoveReason::Positional
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MoveReason::CompletesLine => "Completes a winning line.",
            MoveReason::BlocksLine => "Blocks the opponent's winning line.",
            MoveReason::CreatesFork => "Creates two threats at once; only one can be blocked.",
            MoveReason::TakesCenter => "Takes the center for positional advantage.",
            MoveReason::TakesCorner => "Takes a corner, which sits on three lines.",
            MoveReason::Positional => "Keeps the position balanced.",
        }
    }
}

/// Explanation for a uniformly random pick
pub fn explain_random(cell: usize, available: usize, difficulty: Difficulty) -> String {
    format!(
        "Random exploratory move at {} (position {}), picked from {} available positions. \
         No strategy applied at {} difficulty.",
        position_name(cell),
        cell,
        available,
        difficulty
    )
}

/// Explanation for a searched move
pub fn explain_search(
    board: &Board,
    player: Mark,
    difficulty: Difficulty,
    cell: usize,
    score: i32,
    stats: &SearchStats,
    horizon: Option<u32>,
    root_moves: &[RootMove],
) -> String {
    let reason = MoveReason::classify(board, player, cell);
    let mut text = format!(
        "Selected {} (position {}) with evaluation score {}. {} ",
        position_name(cell),
        cell,
        score,
        reason.description()
    );

    match horizon {
        None => {
            let _ = write!(text, "Outcome: {}.", describe_score(score));
            let _ = write!(
                text,
                "\n\nExplored {} positions and pruned {} branches with alpha-beta search; \
                 the deepest line looked {} moves ahead.",
                stats.nodes_evaluated, stats.branches_pruned, stats.max_depth_reached
            );
        }
        Some(depth) => {
            let _ = write!(
                text,
                "\n\n{} search limited to {} plies explored {} positions and pruned {} branches.",
                difficulty, depth, stats.nodes_evaluated, stats.branches_pruned
            );
        }
    }

    let mut alternatives: Vec<&RootMove> = root_moves.iter().filter(|m| m.cell != cell).collect();
    alternatives.sort_by(|a, b| b.score.cmp(&a.score).then(a.cell.cmp(&b.cell)));
    if difficulty == Difficulty::Hard && !alternatives.is_empty() {
        text.push_str("\n\nAlternative moves considered:");
        for alt in alternatives.into_iter().take(MAX_ALTERNATIVES) {
            let bound = if alt.exact { "" } else { "at most " };
            let _ = write!(
                text,
                "\n- {} (position {}): score {}{}",
                position_name(alt.cell),
                alt.cell,
                bound,
                alt.score
            );
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_classify_categories() {
        let b = board("XX.OO....");
        assert_eq!(MoveReason::classify(&b, Mark::X, 2), MoveReason::CompletesLine);
        assert_eq!(MoveReason::classify(&b, Mark::O, 2), MoveReason::BlocksLine);
        assert_eq!(MoveReason::classify(&Board::new(), Mark::X, 4), MoveReason::TakesCenter);
        assert_eq!(MoveReason::classify(&Board::new(), Mark::X, 8), MoveReason::TakesCorner);
        assert_eq!(MoveReason::classify(&Board::new(), Mark::X, 1), MoveReason::Positional);
    }

    #[test]
    fn test_classify_fork() {
        // X on 0 and 8, O on 4 and 1: X at 6 threatens 3 and 7
        let b = board("XO..O...X");
        assert_eq!(MoveReason::classify(&b, Mark::X, 6), MoveReason::CreatesFork);
    }

    #[test]
    fn test_random_explanation_mentions_cell() {
        let text = explain_random(4, 7, Difficulty::Easy);
        assert!(text.contains("center"));
        assert!(text.contains("position 4"));
        assert!(text.contains("7 available"));
    }

    #[test]
    fn test_search_explanation_lists_alternatives() {
        let b = board("XX.OO....");
        let stats = SearchStats {
            nodes_evaluated: 12,
            branches_pruned: 3,
            max_depth_reached: 2,
        };
        let roots = vec![
            RootMove { cell: 2, score: 9, exact: true },
            RootMove { cell: 5, score: -8, exact: false },
        ];
        let text = explain_search(&b, Mark::X, Difficulty::Hard, 2, 9, &stats, None, &roots);
        assert!(text.contains("top-right"));
        assert!(text.contains("Completes a winning line"));
        assert!(text.contains("forced win"));
        assert!(text.contains("Explored 12 positions"));
        assert!(text.contains("score at most -8"));
    }
}
