use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::state::Playfield;

/// Configuration for the game
///
/// Dimensions are in pixels; every position on the board is a multiple of
/// `block_size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the playfield
    pub width: u32,
    /// Height of the playfield
    pub height: u32,
    /// Edge length of one cell, also the distance moved per step
    pub block_size: u32,
    /// Step rate cap; 0 runs unpaced
    pub fps: u32,
    /// Game ends once the step counter exceeds this factor times the body
    /// length. `None` disables the cutoff.
    pub step_budget_factor: Option<u32>,
    /// Lowest body length the budget is computed from. 0 keeps the plain
    /// rule, under which a bodiless snake is out of budget on its first step.
    pub step_budget_min_length: usize,

    // Rewards (for RL)
    /// Reward for eating food
    pub food_reward: f32,
    /// Penalty for dying or running out of step budget
    pub death_penalty: f32,

    /// Seed for food placement; random when unset
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            block_size: 20,
            fps: 10,
            step_budget_factor: Some(100),
            step_budget_min_length: 0,
            food_reward: 10.0,
            death_penalty: -10.0,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom playfield size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// A 10x10 cell board for testing
    pub fn small() -> Self {
        Self::new(200, 200)
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(config)
    }

    /// Manual play has no anti-stall cutoff
    pub fn without_step_budget(mut self) -> Self {
        self.step_budget_factor = None;
        self
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.block_size == 0 {
            return Err(GameError::InvalidConfig(
                "block_size must be positive".to_string(),
            ));
        }
        if self.width == 0 || self.height == 0 {
            return Err(GameError::InvalidConfig(format!(
                "playfield {}x{} is empty",
                self.width, self.height
            )));
        }
        if self.width % self.block_size != 0 || self.height % self.block_size != 0 {
            return Err(GameError::InvalidConfig(format!(
                "playfield {}x{} is not a multiple of block_size {}",
                self.width, self.height, self.block_size
            )));
        }
        if self.width > i32::MAX as u32 || self.height > i32::MAX as u32 {
            return Err(GameError::InvalidConfig(format!(
                "playfield {}x{} is too large",
                self.width, self.height
            )));
        }
        Ok(())
    }

    pub fn playfield(&self) -> Playfield {
        Playfield::new(
            self.width as i32,
            self.height as i32,
            self.block_size as i32,
        )
    }

    /// Number of cells across
    pub fn columns(&self) -> u32 {
        self.width / self.block_size.max(1)
    }

    /// Number of cells down
    pub fn rows(&self) -> u32 {
        self.height / self.block_size.max(1)
    }

    /// Time between steps, `None` when unpaced
    pub fn frame_period(&self) -> Option<Duration> {
        match self.fps {
            0 => None,
            fps => Some(Duration::from_nanos(1_000_000_000 / fps as u64)),
        }
    }
}
