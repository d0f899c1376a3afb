//! Algorithm description endpoint

use crate::state::ServerState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;
use tictac_core::WIN_VALUE;

/// Describe the search and the difficulty tiers as configured
pub async fn get_algorithm(State(state): State<Arc<ServerState>>) -> Json<Value> {
    let config = state.engine.config();
    let random_percent = (config.medium_random_rate * 100.0).round();

    Json(json!({
        "algorithm": "Negamax with alpha-beta pruning",
        "description": "Searches the game tree assuming both sides play their best reply",
        "scoring": {
            "win": WIN_VALUE,
            "draw": 0,
            "loss": -WIN_VALUE,
            "depth_adjustment": "wins score 10 minus the plies needed, losses -10 plus the plies survived",
        },
        "tie_break": "lowest cell index among equally scored moves",
        "counters": {
            "nodes_evaluated": "every visited node, root included",
            "branches_pruned": "sibling subtrees skipped by a cutoff",
        },
        "difficulties": {
            "easy": "uniformly random empty cell",
            "medium": format!(
                "{}% random move, otherwise alpha-beta limited to {} plies",
                random_percent, config.medium_depth
            ),
            "hard": "exhaustive alpha-beta search; never loses",
        },
        "medium": {
            "depth": config.medium_depth,
            "random_rate": config.medium_random_rate,
        },
    }))
}
