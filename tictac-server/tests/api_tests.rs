//! Integration tests for tictac-server API

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use std::sync::Arc;
use tictac_core::MoveEngine;
use tictac_server::{create_router, ServerState};
use tower::ServiceExt;

fn test_app() -> axum::Router {
    let state = Arc::new(ServerState::new(MoveEngine::default(), Some(42)));
    create_router(state)
}

async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let response = test_app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_status_endpoint() {
    let (status, json) = get_json("/api/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["engine"], "rust");
    assert_eq!(json["cells"], 9);
    assert_eq!(json["difficulties"], json!(["easy", "medium", "hard"]));
}

#[tokio::test]
async fn test_hard_move_completes_row() {
    let (status, json) = post_json(
        "/api/ai/move",
        json!({
            "board": ["X", "X", null, "O", "O", null, null, null, null],
            "difficulty": "hard",
            "player": "X"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["move"], 2);
    assert_eq!(json["score"], 9);
    assert!(json["nodes_evaluated"].as_u64().unwrap() > 0);
    assert!(json["branches_pruned"].as_u64().is_some());
    assert!(!json["explanation"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_blank_strings_are_empty_cells() {
    let (status, json) = post_json(
        "/api/ai/move",
        json!({
            "board": ["X", "O", "X", "X", "", "O", "O", "X", "O"],
            "difficulty": "HARD",
            "player": "X"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["move"], 4);
}

#[tokio::test]
async fn test_seeded_easy_is_reproducible() {
    let body = json!({
        "board": [null, null, null, null, null, null, null, null, null],
        "difficulty": "easy",
        "player": "X",
        "seed": 11
    });
    let (_, first) = post_json("/api/ai/move", body.clone()).await;
    let (_, second) = post_json("/api/ai/move", body).await;

    assert_eq!(first["move"], second["move"]);
    assert_eq!(first["nodes_evaluated"], 1);
}

#[tokio::test]
async fn test_full_board_is_bad_request() {
    let (status, json) = post_json(
        "/api/ai/move",
        json!({
            "board": ["X", "O", "X", "X", "O", "O", "O", "X", "X"],
            "difficulty": "hard",
            "player": "X"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error_code"], "no_legal_moves");
}

#[tokio::test]
async fn test_invalid_inputs_are_unprocessable() {
    let (status, json) = post_json(
        "/api/ai/move",
        json!({
            "board": ["X", null, null],
            "difficulty": "hard",
            "player": "X"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error_code"], "invalid_board");

    let (status, json) = post_json(
        "/api/ai/move",
        json!({
            "board": [null, null, null, null, null, null, null, null, null],
            "difficulty": "hard",
            "player": "Z"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error_code"], "invalid_player");

    let (status, json) = post_json(
        "/api/ai/move",
        json!({
            "board": [null, null, null, null, null, null, null, null, null],
            "difficulty": "impossible",
            "player": "O"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error_code"], "invalid_difficulty");
}

#[tokio::test]
async fn test_wrongly_typed_fields_use_error_format() {
    let cases = [
        (
            json!({
                "board": [5, null, null, null, null, null, null, null, null],
                "difficulty": "hard",
                "player": "X"
            }),
            "invalid_board",
        ),
        (
            json!({
                "board": [true, null, null, null, null, null, null, null, null],
                "difficulty": "hard",
                "player": "X"
            }),
            "invalid_board",
        ),
        (
            json!({ "board": "XX.OO....", "difficulty": "hard", "player": "X" }),
            "invalid_board",
        ),
        (
            json!({
                "board": [null, null, null, null, null, null, null, null, null],
                "difficulty": "hard",
                "player": 1
            }),
            "invalid_player",
        ),
        (
            json!({
                "board": [null, null, null, null, null, null, null, null, null],
                "difficulty": "hard",
                "player": "x"
            }),
            "invalid_player",
        ),
        (
            json!({
                "board": [null, null, null, null, null, null, null, null, null],
                "difficulty": 3,
                "player": "O"
            }),
            "invalid_difficulty",
        ),
        (
            json!({
                "board": [null, null, null, null, null, null, null, null, null],
                "difficulty": "hard"
            }),
            "invalid_player",
        ),
    ];

    for uri in ["/api/ai/move", "/api/ai/evaluate"] {
        for (body, code) in &cases {
            let (status, json) = post_json(uri, body.clone()).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{} {}", uri, body);
            assert_eq!(json["error_code"], *code, "{} {}", uri, body);
            assert!(json["detail"].is_string());
        }
    }
}

#[tokio::test]
async fn test_non_object_body_uses_error_format() {
    let (status, json) = post_json("/api/ai/move", json!("XX.OO....")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error_code"], "malformed_request");
    assert!(json["detail"].is_string());

    let (status, json) = post_json(
        "/api/ai/move",
        json!({
            "board": [null, null, null, null, null, null, null, null, null],
            "difficulty": "easy",
            "player": "X",
            "seed": "seven"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error_code"], "malformed_request");
}

#[tokio::test]
async fn test_evaluate_endpoint() {
    let (status, json) = post_json(
        "/api/ai/evaluate",
        json!({
            "board": ["X", null, null, null, "O", null, null, null, null],
            "difficulty": "easy",
            "player": "X"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["evaluation"], 0);
    assert!(json["analysis"].as_str().unwrap().contains("position"));
    assert!(json["performance"]["nodes_evaluated"].as_u64().unwrap() > 0);
    assert!(json["performance"]["max_depth_reached"].as_u64().unwrap() <= 7);
    assert_eq!(json["alternatives"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_algorithm_endpoint() {
    let (status, json) = get_json("/api/ai/algorithm").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["scoring"]["win"], 10);
    assert_eq!(json["medium"]["depth"], 4);
    assert!(json["difficulties"]["hard"].as_str().is_some());
}
