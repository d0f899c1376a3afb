//! Move command - ask the engine for one move
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: decide(), report()
//! - Level 3: resolve_player()
//! - Level 4: formatting utilities

use anyhow::{Context, Result};
use clap::Args;
use rand::Rng;

use tictac_core::{Board, Difficulty, EngineConfig, Mark, MoveDecision, MoveEngine};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MoveArgs {
    /// Board in row-major notation, e.g. "XX.OO...." (`.` is empty)
    pub board: Board,

    /// Mark to move for (inferred from mark counts if omitted)
    #[arg(long)]
    pub player: Option<Mark>,

    /// Difficulty tier
    #[arg(long, default_value = "hard")]
    pub difficulty: Difficulty,

    /// Print the full analysis of every root move (hard search)
    #[arg(long)]
    pub analyze: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run move command
pub fn run(args: MoveArgs, engine_config: EngineConfig, seed: Option<u64>) -> Result<()> {
    let engine = MoveEngine::new(engine_config).context("Invalid engine configuration")?;
    let player = resolve_player(&args);

    if args.analyze {
        let analysis = engine
            .analyze(&args.board, player)
            .context("Engine refused the position")?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        } else {
            print_board(&args.board);
            print_decision(&analysis.decision);
        }
        return Ok(());
    }

    let decision = decide(&engine, &args, player, seed)?;
    report(&args, &decision)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Compute the move
fn decide(
    engine: &MoveEngine,
    args: &MoveArgs,
    player: Mark,
    seed: Option<u64>,
) -> Result<MoveDecision> {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    tracing::debug!(
        "Computing {} move for {} (seed {})",
        args.difficulty,
        player,
        seed
    );

    engine
        .compute_move_seeded(&args.board, player, args.difficulty, seed)
        .context("Engine refused the position")
}

/// Print the decision
fn report(args: &MoveArgs, decision: &MoveDecision) -> Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(decision)?);
    } else {
        print_board(&args.board);
        print_decision(decision);
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Explicit player, or the side to move in a legal sequence
fn resolve_player(args: &MoveArgs) -> Mark {
    args.player.unwrap_or_else(|| {
        let inferred = args.board.side_to_move();
        tracing::debug!("No --player given; {} is to move", inferred);
        inferred
    })
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn print_board(board: &Board) {
    println!("{}\n", board);
}

fn print_decision(decision: &MoveDecision) {
    println!("Move:     {}", decision.cell);
    println!("Score:    {}", decision.score);
    println!(
        "Searched: {} nodes, {} branches pruned",
        decision.nodes_evaluated, decision.branches_pruned
    );
    println!("\n{}", decision.explanation);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(board: &str, player: Option<Mark>) -> MoveArgs {
        MoveArgs {
            board: board.parse().unwrap(),
            player,
            difficulty: Difficulty::Hard,
            analyze: false,
            json: false,
        }
    }

    #[test]
    fn test_resolve_player_infers_side() {
        assert_eq!(resolve_player(&args(".........", None)), Mark::X);
        assert_eq!(resolve_player(&args("X........", None)), Mark::O);
        assert_eq!(resolve_player(&args("X........", Some(Mark::X))), Mark::X);
    }

    #[test]
    fn test_decide_hard() {
        let a = args("XX.OO....", None);
        let decision = decide(&MoveEngine::default(), &a, Mark::X, Some(1)).unwrap();
        assert_eq!(decision.cell, 2);
    }

    #[test]
    fn test_decide_full_board_errors() {
        let a = args("XOXXOOOXX", None);
        assert!(decide(&MoveEngine::default(), &a, Mark::X, Some(1)).is_err());
    }
}
