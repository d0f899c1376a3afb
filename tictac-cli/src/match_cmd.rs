//! Match command - play games between two difficulty tiers
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_match(), report_results()
//! - Level 3: play_single_game(), compute_match_statistics()
//! - Level 4: formatting utilities

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use tictac_core::{Board, Difficulty, EngineConfig, GameResult, Mark, MoveEngine};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MatchArgs {
    /// Difficulty of the first engine
    #[arg(long, default_value = "medium")]
    pub first: Difficulty,

    /// Difficulty of the second engine
    #[arg(long, default_value = "easy")]
    pub second: Difficulty,

    /// Number of games to play (sides alternate who plays X)
    #[arg(long, default_value = "100")]
    pub games: usize,

    /// Play games one after another instead of in parallel
    #[arg(long)]
    pub sequential: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single game
#[derive(Clone, Debug)]
struct GameRecord {
    game_number: usize,
    /// True when the first engine played X
    first_played_x: bool,
    result: GameResult,
    moves: Vec<usize>,
}

impl GameRecord {
    fn first_mark(&self) -> Mark {
        if self.first_played_x {
            Mark::X
        } else {
            Mark::O
        }
    }
}

/// Aggregated match results
#[derive(Clone, Debug)]
struct MatchResults {
    games: Vec<GameRecord>,
    first_wins: usize,
    second_wins: usize,
    draws: usize,
    avg_moves: f32,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run match command
///
/// 1. Build the engine
/// 2. Play the match (multiple games)
/// 3. Report results
pub fn run(args: MatchArgs, engine_config: EngineConfig, seed: Option<u64>) -> Result<()> {
    let engine = MoveEngine::new(engine_config).context("Invalid engine configuration")?;
    let base_seed = seed.unwrap_or_else(|| create_rng(None).gen());

    tracing::info!(
        "Starting match: {} vs {} ({} games, base seed {})",
        args.first,
        args.second,
        args.games,
        base_seed
    );

    let results = play_match(&engine, &args, base_seed)?;

    tracing::info!(
        "Match finished: {} {} / {} {} / {} draws",
        args.first,
        results.first_wins,
        args.second,
        results.second_wins,
        results.draws
    );

    report_results(&results, &args);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Play all games in the match; game `i` uses seed `base_seed + i`
fn play_match(engine: &MoveEngine, args: &MatchArgs, base_seed: u64) -> Result<MatchResults> {
    let progress = create_progress(args.games as u64, args.json);

    let play = |game_index: usize| {
        let seed = base_seed.wrapping_add(game_index as u64);
        let record = play_single_game(engine, args.first, args.second, game_index, seed);
        progress.inc(1);
        record
    };

    let games: Vec<GameRecord> = if args.sequential {
        (0..args.games).map(play).collect::<Result<_>>()?
    } else {
        (0..args.games)
            .into_par_iter()
            .map(play)
            .collect::<Result<_>>()?
    };

    progress.finish_and_clear();

    Ok(compute_match_statistics(games))
}

/// Report match results
fn report_results(results: &MatchResults, args: &MatchArgs) {
    if args.json {
        print_json_results(results, args);
    } else {
        print_text_results(results, args);
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Play one game; the first engine takes X on even game indices
fn play_single_game(
    engine: &MoveEngine,
    first: Difficulty,
    second: Difficulty,
    game_index: usize,
    seed: u64,
) -> Result<GameRecord> {
    let mut rng = create_rng(Some(seed));
    let first_played_x = game_index % 2 == 0;

    let mut board = Board::new();
    let mut to_move = Mark::X;
    let mut moves = Vec::with_capacity(9);

    while !board.outcome().is_terminal() {
        let first_to_move = (to_move == Mark::X) == first_played_x;
        let difficulty = if first_to_move { first } else { second };

        let decision = engine
            .compute_move(&board, to_move, difficulty, &mut rng)
            .with_context(|| format!("Game {}: engine failed on\n{}", game_index + 1, board))?;

        board = board.with_move(decision.cell, to_move)?;
        moves.push(decision.cell);
        to_move = to_move.opponent();
    }

    tracing::debug!(
        "Game {}: {:?} after {} moves",
        game_index + 1,
        board.outcome(),
        moves.len()
    );

    Ok(GameRecord {
        game_number: game_index + 1,
        first_played_x,
        result: board.outcome(),
        moves,
    })
}

/// Compute aggregate statistics from game records
fn compute_match_statistics(games: Vec<GameRecord>) -> MatchResults {
    let mut first_wins = 0;
    let mut second_wins = 0;
    let mut draws = 0;

    for game in &games {
        match game.result {
            GameResult::Won(mark) if mark == game.first_mark() => first_wins += 1,
            GameResult::Won(_) => second_wins += 1,
            _ => draws += 1,
        }
    }

    let total_moves: usize = games.iter().map(|g| g.moves.len()).sum();
    let avg_moves = if games.is_empty() {
        0.0
    } else {
        total_moves as f32 / games.len() as f32
    };

    MatchResults {
        games,
        first_wins,
        second_wins,
        draws,
        avg_moves,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Progress bar, hidden when printing JSON
fn create_progress(total_games: u64, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(total_games);
    if let Ok(style) =
        ProgressStyle::default_bar().template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games")
    {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb
}

fn percent(count: usize, total: usize) -> f32 {
    if total > 0 {
        count as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

/// Print results as JSON
fn print_json_results(results: &MatchResults, args: &MatchArgs) {
    #[derive(serde::Serialize)]
    struct JsonGame {
        game_number: usize,
        x: Difficulty,
        o: Difficulty,
        result: String,
        moves: Vec<usize>,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput {
        first: Difficulty,
        second: Difficulty,
        total_games: usize,
        first_wins: usize,
        second_wins: usize,
        draws: usize,
        avg_moves: f32,
        games: Vec<JsonGame>,
    }

    let output = JsonOutput {
        first: args.first,
        second: args.second,
        total_games: results.games.len(),
        first_wins: results.first_wins,
        second_wins: results.second_wins,
        draws: results.draws,
        avg_moves: results.avg_moves,
        games: results
            .games
            .iter()
            .map(|g| {
                let (x, o) = if g.first_played_x {
                    (args.first, args.second)
                } else {
                    (args.second, args.first)
                };
                JsonGame {
                    game_number: g.game_number,
                    x,
                    o,
                    result: format_result(g.result),
                    moves: g.moves.clone(),
                }
            })
            .collect(),
    };

    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{}", json);
    }
}

/// Print results as text
fn print_text_results(results: &MatchResults, args: &MatchArgs) {
    let total = results.games.len();

    println!("\n=== Match Results ===");
    println!("Total games: {}", total);
    println!(
        "{:<8} wins: {} ({:.1}%)",
        args.first.as_str(),
        results.first_wins,
        percent(results.first_wins, total)
    );
    println!(
        "{:<8} wins: {} ({:.1}%)",
        args.second.as_str(),
        results.second_wins,
        percent(results.second_wins, total)
    );
    println!(
        "Draws:         {} ({:.1}%)",
        results.draws,
        percent(results.draws, total)
    );
    println!("Avg moves:     {:.1}", results.avg_moves);
}

fn format_result(result: GameResult) -> String {
    match result {
        GameResult::Won(mark) => format!("{} wins", mark),
        GameResult::Draw => "draw".to_string(),
        GameResult::Ongoing => "unfinished".to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
