//! Health check

use axum::Json;
use serde::Serialize;
use tictac_core::{Difficulty, CELL_COUNT};

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub engine: &'static str,
    pub cells: usize,
    pub difficulties: Vec<Difficulty>,
}

pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        engine: "rust",
        cells: CELL_COUNT,
        difficulties: Difficulty::ALL.to_vec(),
    })
}
