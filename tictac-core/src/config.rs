//! Engine configuration

use crate::board::CELL_COUNT;
use crate::error::{EngineError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default search horizon for Medium difficulty, in plies
pub const DEFAULT_MEDIUM_DEPTH: u32 = 4;

/// Default chance that Medium plays a random move instead of searching
pub const DEFAULT_MEDIUM_RANDOM_RATE: f64 = 0.2;

/// Tunable parameters of the difficulty tiers
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies searched below the root at Medium before scoring a node as neutral
    pub medium_depth: u32,
    /// Probability in [0, 1] that Medium falls back to a random legal move
    pub medium_random_rate: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            medium_depth: DEFAULT_MEDIUM_DEPTH,
            medium_random_rate: DEFAULT_MEDIUM_RANDOM_RATE,
        }
    }
}

impl EngineConfig {
    /// Set Medium search depth
    pub fn with_medium_depth(mut self, depth: u32) -> Self {
        self.medium_depth = depth;
        self
    }

    /// Set Medium random-move rate
    pub fn with_medium_random_rate(mut self, rate: f64) -> Self {
        self.medium_random_rate = rate;
        self
    }

    /// Check parameter ranges
    pub fn validate(&self) -> Result<()> {
        // Depth 2 is the shallowest horizon that still sees the opponent's reply
        if self.medium_depth < 2 || self.medium_depth > CELL_COUNT as u32 {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "medium_depth must be between 2 and {}, got {}",
                    CELL_COUNT, self.medium_depth
                ),
            });
        }
        if !(0.0..=1.0).contains(&self.medium_random_rate) {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "medium_random_rate must be within [0, 1], got {}",
                    self.medium_random_rate
                ),
            });
        }
        Ok(())
    }

    /// Load from a JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config: {}", path.display()))?;
        let config: EngineConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse engine config: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save as pretty JSON
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write engine config: {}", path.display()))?;
        Ok(())
    }
}
