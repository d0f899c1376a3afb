//! AI move and analysis endpoints

use crate::error::ApiError;
use crate::state::ServerState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tictac_core::{Board, Difficulty, EngineError, Mark, MoveDecision, RootMove, CELL_COUNT};

/// Body shared by `/api/ai/move` and `/api/ai/evaluate`
///
/// Fields are kept as raw JSON so that wrong types surface as the matching
/// engine error instead of a generic deserialization failure.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MoveRequest {
    /// Nine cells, each `null`, `""`, `"X"` or `"O"`
    #[serde(default)]
    pub board: Value,
    #[serde(default)]
    pub difficulty: Value,
    #[serde(default)]
    pub player: Value,
    /// Pins the random stream for Easy and Medium
    #[serde(default)]
    pub seed: Option<u64>,
}

impl MoveRequest {
    fn parse(&self) -> Result<(Board, Mark, Difficulty), ApiError> {
        let board = parse_board(&self.board)?;
        let player: Mark = match &self.player {
            Value::String(s) => s.parse()?,
            other => return Err(EngineError::InvalidPlayer { value: other.to_string() }.into()),
        };
        let difficulty: Difficulty = match &self.difficulty {
            Value::String(s) => s.parse()?,
            other => {
                return Err(EngineError::InvalidDifficulty { value: other.to_string() }.into())
            }
        };
        Ok((board, player, difficulty))
    }
}

fn parse_board(value: &Value) -> Result<Board, EngineError> {
    let items = value.as_array().ok_or_else(|| EngineError::InvalidBoard {
        reason: format!("expected an array of {} cells, got {}", CELL_COUNT, value),
    })?;

    let cells = items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.as_str())),
            other => Err(EngineError::InvalidBoard {
                reason: format!("cell {} has invalid value {}", i, other),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Board::from_cells(&cells)
}

/// Compute the engine's move
pub async fn get_ai_move(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<MoveDecision>, ApiError> {
    let Json(req) = payload?;
    let (board, player, difficulty) = req.parse()?;
    let seed = req.seed.unwrap_or_else(|| state.next_seed());

    let decision = state
        .engine
        .compute_move_seeded(&board, player, difficulty, seed)?;

    tracing::debug!(
        "AI move ({}): {} takes cell {} (seed {})",
        difficulty,
        player,
        decision.cell,
        seed
    );

    Ok(Json(decision))
}

/// Search counters reported by the analysis endpoint
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Performance {
    pub nodes_evaluated: u64,
    pub branches_pruned: u64,
    pub max_depth_reached: u32,
}

/// Full analysis of a position
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvaluateResponse {
    pub best_move: usize,
    pub evaluation: i32,
    pub analysis: String,
    pub performance: Performance,
    pub alternatives: Vec<RootMove>,
}

/// Exhaustive analysis regardless of the requested difficulty
pub async fn evaluate_position(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<EvaluateResponse>, ApiError> {
    let Json(req) = payload?;
    let (board, player, _) = req.parse()?;
    let analysis = state.engine.analyze(&board, player)?;

    Ok(Json(EvaluateResponse {
        best_move: analysis.decision.cell,
        evaluation: analysis.decision.score,
        analysis: analysis.decision.explanation,
        performance: Performance {
            nodes_evaluated: analysis.decision.nodes_evaluated,
            branches_pruned: analysis.decision.branches_pruned,
            max_depth_reached: analysis.max_depth_reached,
        },
        alternatives: analysis.root_moves,
    }))
}
