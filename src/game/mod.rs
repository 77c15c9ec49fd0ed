//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! It is driven both by keyboard steering and by one-hot action vectors from agents.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod food;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction, Turn};
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use error::GameError;
pub use food::Food;
pub use state::{GameOverCause, GameState, Head, Playfield, Position, Snake};
