//! Server state
//!
//! The engine itself is stateless; the server only owns the seed source
//! used when a request does not pin its own seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::{Mutex, PoisonError};
use tictac_core::MoveEngine;

/// Server-wide shared state
pub struct ServerState {
    pub engine: MoveEngine,
    seeds: Mutex<ChaCha8Rng>,
}

impl ServerState {
    pub fn new(engine: MoveEngine, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            engine,
            seeds: Mutex::new(rng),
        }
    }

    /// Draw a fresh per-request seed
    pub fn next_seed(&self) -> u64 {
        let mut rng = self.seeds.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen()
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new(MoveEngine::default(), None)
    }
}
