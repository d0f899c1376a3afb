//! Engine error types

use crate::board::Mark;
use thiserror::Error;

/// Everything the engine can refuse to do
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("invalid board: {reason}")]
    InvalidBoard { reason: String },

    #[error("invalid player '{value}' (expected 'X' or 'O')")]
    InvalidPlayer { value: String },

    #[error("invalid difficulty '{value}' (expected 'easy', 'medium' or 'hard')")]
    InvalidDifficulty { value: String },

    #[error("no legal moves: the board is full")]
    NoLegalMoves,

    #[error("game is already over: {winner} has completed a line")]
    GameOver { winner: Mark },

    #[error("invalid move: cell {cell} is {reason}")]
    InvalidMove { cell: usize, reason: &'static str },

    #[error("invalid engine configuration: {message}")]
    InvalidConfig { message: String },
}

impl EngineError {
    /// Stable snake_case discriminant for callers that translate errors
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::InvalidBoard { .. } => "invalid_board",
            EngineError::InvalidPlayer { .. } => "invalid_player",
            EngineError::InvalidDifficulty { .. } => "invalid_difficulty",
            EngineError::NoLegalMoves => "no_legal_moves",
            EngineError::GameOver { .. } => "game_over",
            EngineError::InvalidMove { .. } => "invalid_move",
            EngineError::InvalidConfig { .. } => "invalid_config",
        }
    }

    /// True for errors caused by malformed input rather than game state
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidBoard { .. }
                | EngineError::InvalidPlayer { .. }
                | EngineError::InvalidDifficulty { .. }
        )
    }
}

/// Result alias used throughout the core crate
pub type Result<T> = std::result::Result<T, EngineError>;
