//! Environment interface for reinforcement-learning agents
//!
//! Provides:
//! - One-hot relative action stepping with (reward, game over, score) outcomes
//! - A pluggable render collaborator and fixed-rate step pacing
//! - A line-delimited JSON protocol for out-of-process agents

pub mod environment;
pub mod frame_clock;
pub mod protocol;

pub use environment::{Frontend, NullFrontend, SnakeEnvironment, StepOutcome};
pub use frame_clock::FrameClock;
pub use protocol::{Request, Response};
