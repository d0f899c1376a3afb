//! TicTac Core - Move engine for three-in-a-row
//!
//! This crate provides the decision engine for the 3x3 game:
//! - Board geometry (cells, lines, position names)
//! - Board state, move application and terminal detection
//! - Depth-adjusted terminal scoring
//! - Negamax alpha-beta search with Easy / Medium / Hard policies
//! - Human-readable move explanations
//!
//! Every call is independent: the engine holds configuration only and
//! takes its randomness from the caller.

pub mod board;
pub mod game;
pub mod eval;
pub mod ai;
pub mod explain;
pub mod config;
pub mod error;

// Re-exports for convenient access
pub use board::{Cell, Mark, CELL_COUNT, LINES, position_name};
pub use game::{Board, GameResult};
pub use eval::{terminal_score, WIN_VALUE};
pub use ai::{compute_move, Analysis, Difficulty, MoveDecision, MoveEngine, RootMove, SearchStats};
pub use explain::MoveReason;
pub use config::EngineConfig;
pub use error::{EngineError, Result};
