//! Pixel Snake - a grid Snake game playable by humans and by RL agents
//!
//! This library provides:
//! - Core game logic (game module)
//! - Environment and line protocol for external agents (rl module)
//! - Keyboard mapping and TUI rendering (input, render modules)
//! - Session metrics and execution modes (metrics, modes modules)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod rl;
