//! Move selection: alpha-beta search and difficulty tiers

use crate::board::Mark;
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::eval::{frontier_score, terminal_score, INFINITY};
use crate::explain::{explain_random, explain_search};
use crate::game::Board;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// TYPES
// ============================================================================

/// Skill level; selects the move-selection policy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(EngineError::InvalidDifficulty {
                value: s.to_string(),
            }),
        }
    }
}

/// Counters accumulated during one search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes visited, root and terminals included
    pub nodes_evaluated: u64,
    /// Sibling subtrees skipped by alpha-beta cutoffs
    pub branches_pruned: u64,
    /// Deepest ply reached below the root
    pub max_depth_reached: u32,
}

impl SearchStats {
    fn visit(&mut self, ply: u32) {
        self.nodes_evaluated += 1;
        self.max_depth_reached = self.max_depth_reached.max(ply);
    }
}

/// The engine's answer for one position
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDecision {
    /// Chosen cell (0-8)
    #[serde(rename = "move")]
    pub cell: usize,
    /// Evaluation from the mover's perspective
    pub score: i32,
    pub nodes_evaluated: u64,
    pub branches_pruned: u64,
    pub explanation: String,
}

/// Score of one root move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootMove {
    #[serde(rename = "move")]
    pub cell: usize,
    pub score: i32,
    /// False when the score is only an upper bound (failed low against an earlier sibling)
    pub exact: bool,
}

/// Full Hard-difficulty analysis of a position
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub decision: MoveDecision,
    /// Every legal root move in ascending cell order
    pub root_moves: Vec<RootMove>,
    pub max_depth_reached: u32,
}

/// Result of a root search
#[derive(Clone, Debug)]
struct SearchOutcome {
    best_cell: usize,
    best_score: i32,
    root_moves: Vec<RootMove>,
    stats: SearchStats,
}

// ============================================================================
// MOVE ENGINE
// ============================================================================

/// Stateless move engine; holds configuration only
#[derive(Clone, Debug, Default)]
pub struct MoveEngine {
    config: EngineConfig,
}

impl MoveEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Choose a move for `player` at `difficulty`, drawing randomness from `rng`
    pub fn compute_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        player: Mark,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<MoveDecision> {
        check_playable(board)?;

        if !board.has_legal_counts() {
            tracing::debug!(
                "Position has unreachable mark counts (X={}, O={}); searching anyway",
                board.count(Mark::X),
                board.count(Mark::O)
            );
        }

        let decision = match difficulty {
            Difficulty::Easy => random_move(board, difficulty, rng)?,
            Difficulty::Medium => {
                if rng.gen_bool(self.config.medium_random_rate) {
                    random_move(board, difficulty, rng)?
                } else {
                    searched_move(board, player, difficulty, Some(self.config.medium_depth))?
                }
            }
            Difficulty::Hard => searched_move(board, player, difficulty, None)?,
        };

        tracing::debug!(
            "{} move for {}: cell={} score={} nodes={} pruned={}",
            difficulty,
            player,
            decision.cell,
            decision.score,
            decision.nodes_evaluated,
            decision.branches_pruned
        );

        Ok(decision)
    }

    /// Same as `compute_move` with a `ChaCha8Rng` seeded from `seed`
    pub fn compute_move_seeded(
        &self,
        board: &Board,
        player: Mark,
        difficulty: Difficulty,
        seed: u64,
    ) -> Result<MoveDecision> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.compute_move(board, player, difficulty, &mut rng)
    }

    /// Exhaustive analysis with per-move scores
    pub fn analyze(&self, board: &Board, player: Mark) -> Result<Analysis> {
        check_playable(board)?;
        let outcome = search_root(board, player, None)?;
        let explanation = explain_search(
            board,
            player,
            Difficulty::Hard,
            outcome.best_cell,
            outcome.best_score,
            &outcome.stats,
            None,
            &outcome.root_moves,
        );

        Ok(Analysis {
            decision: MoveDecision {
                cell: outcome.best_cell,
                score: outcome.best_score,
                nodes_evaluated: outcome.stats.nodes_evaluated,
                branches_pruned: outcome.stats.branches_pruned,
                explanation,
            },
            root_moves: outcome.root_moves,
            max_depth_reached: outcome.stats.max_depth_reached,
        })
    }
}

/// Compute a move with the default configuration
pub fn compute_move<R: Rng + ?Sized>(
    board: &Board,
    player: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<MoveDecision> {
    MoveEngine::default().compute_move(board, player, difficulty, rng)
}

/// Reject positions with nothing left to play
fn check_playable(board: &Board) -> Result<()> {
    if board.is_full() {
        return Err(EngineError::NoLegalMoves);
    }
    if let Some(winner) = board.winner() {
        return Err(EngineError::GameOver { winner });
    }
    Ok(())
}

// ============================================================================
// POLICIES
// ============================================================================

/// Uniform choice among empty cells
fn random_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<MoveDecision> {
    let moves = board.legal_moves();
    let cell = *moves.choose(rng).ok_or(EngineError::NoLegalMoves)?;

    Ok(MoveDecision {
        cell,
        score: 0,
        nodes_evaluated: 1,
        branches_pruned: 0,
        explanation: explain_random(cell, moves.len(), difficulty),
    })
}

/// Alpha-beta search, exhaustive when `horizon` is None
fn searched_move(
    board: &Board,
    player: Mark,
    difficulty: Difficulty,
    horizon: Option<u32>,
) -> Result<MoveDecision> {
    let outcome = search_root(board, player, horizon)?;
    let explanation = explain_search(
        board,
        player,
        difficulty,
        outcome.best_cell,
        outcome.best_score,
        &outcome.stats,
        horizon,
        &outcome.root_moves,
    );

    Ok(MoveDecision {
        cell: outcome.best_cell,
        score: outcome.best_score,
        nodes_evaluated: outcome.stats.nodes_evaluated,
        branches_pruned: outcome.stats.branches_pruned,
        explanation,
    })
}

// ============================================================================
// NEGAMAX WITH ALPHA-BETA
// ============================================================================

/// Score of `board` for `to_move`, `ply` plies below the root
fn negamax(
    board: &mut Board,
    to_move: Mark,
    ply: u32,
    horizon: Option<u32>,
    mut alpha: i32,
    beta: i32,
    stats: &mut SearchStats,
) -> i32 {
    stats.visit(ply);

    // Terminal check with depth adjustment
    if let Some(score) = terminal_score(board.outcome(), to_move, ply) {
        return score;
    }

    if matches!(horizon, Some(limit) if ply >= limit) {
        return frontier_score(board, to_move);
    }

    let moves = board.legal_moves();
    let mut best = -INFINITY;

    for (index, &cell) in moves.iter().enumerate() {
        board.place(cell, to_move);
        let score = -negamax(
            board,
            to_move.opponent(),
            ply + 1,
            horizon,
            -beta,
            -alpha,
            stats,
        );
        board.clear(cell);

        best = best.max(score);
        alpha = alpha.max(score);

        if alpha >= beta {
            stats.branches_pruned += (moves.len() - index - 1) as u64;
            break;
        }
    }

    best
}

/// Search every root move in ascending cell order.
///
/// Alpha is shared across root moves, so a move that cannot beat the current
/// best returns an upper bound; only strictly better scores replace the best,
/// which keeps the lowest cell among equal scores.
fn search_root(board: &Board, player: Mark, horizon: Option<u32>) -> Result<SearchOutcome> {
    let moves = board.legal_moves();
    if moves.is_empty() {
        return Err(EngineError::NoLegalMoves);
    }

    let mut stats = SearchStats::default();
    stats.visit(0);

    let mut work = *board;
    let mut alpha = -INFINITY;
    let beta = INFINITY;
    let mut best: Option<(usize, i32)> = None;
    let mut root_moves = Vec::with_capacity(moves.len());

    for cell in moves {
        work.place(cell, player);
        let score = -negamax(
            &mut work,
            player.opponent(),
            1,
            horizon,
            -beta,
            -alpha,
            &mut stats,
        );
        work.clear(cell);

        root_moves.push(RootMove {
            cell,
            score,
            exact: best.is_none() || score > alpha,
        });

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((cell, score));
        }
        alpha = alpha.max(score);
    }

    let (best_cell, best_score) = best.ok_or(EngineError::NoLegalMoves)?;
    Ok(SearchOutcome {
        best_cell,
        best_score,
        root_moves,
        stats,
    })
}

// ============================================================================
// TESTS
// ============================================================================
