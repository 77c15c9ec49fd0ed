use log::trace;
use serde::Serialize;

use super::frame_clock::FrameClock;
use crate::game::{Action, GameConfig, GameEngine, GameError, GameState, Turn};

/// Consumer of frames produced by the environment
///
/// Called once per step that leaves the game running. There is no error
/// channel; a frontend that can fail handles it internally.
pub trait Frontend {
    fn render(&mut self, state: &GameState);
}

/// Frontend for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct NullFrontend;

impl Frontend for NullFrontend {
    fn render(&mut self, _state: &GameState) {}
}

impl<F: FnMut(&GameState)> Frontend for F {
    fn render(&mut self, state: &GameState) {
        self(state)
    }
}

/// What an agent gets back from one step
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepOutcome {
    pub reward: f32,
    pub game_over: bool,
    pub score: usize,
}

/// Snake environment for reinforcement learning
///
/// Wraps the game engine and provides:
/// - A 3-way relative action space: `[straight, clockwise, counter_clockwise]`
/// - Standard RL interface (reset, step)
/// - Rendering and pacing on every step that does not end the game
pub struct SnakeEnvironment<F: Frontend = NullFrontend> {
    engine: GameEngine,
    state: GameState,
    clock: FrameClock,
    frontend: F,
    episodes: u32,
}

impl SnakeEnvironment<NullFrontend> {
    /// An environment that draws nothing
    pub fn headless(config: GameConfig) -> Result<Self, GameError> {
        Self::new(config, NullFrontend)
    }
}

impl<F: Frontend> SnakeEnvironment<F> {
    /// Create a new Snake environment. Steps are paced at `config.fps`.
    pub fn new(config: GameConfig, frontend: F) -> Result<Self, GameError> {
        let clock = FrameClock::new(config.frame_period());
        let mut engine = GameEngine::new(config)?;
        let state = engine.reset();

        Ok(Self {
            engine,
            state,
            clock,
            frontend,
            episodes: 1,
        })
    }

    /// Start a new episode
    pub fn reset(&mut self) -> &GameState {
        self.state = self.engine.reset();
        self.episodes += 1;
        trace!("Episode {} started", self.episodes);
        &self.state
    }

    /// Step with a one-hot `[straight, clockwise, counter_clockwise]` vector.
    ///
    /// Vectors without exactly one slot set are rejected and the game does
    /// not advance.
    pub fn play_step(&mut self, action: [u8; 3]) -> Result<StepOutcome, GameError> {
        let turn = Turn::from_one_hot(action)?;
        Ok(self.act(Action::Turn(turn)))
    }

    /// Step with an already decoded action
    pub fn act(&mut self, action: Action) -> StepOutcome {
        let result = self.engine.step(&mut self.state, action);

        if !result.game_over {
            self.frontend.render(&self.state);
            self.clock.tick();
        }

        trace!(
            "Step {}: {:?} -> reward {}, game_over {}, score {}",
            self.state.steps, action, result.reward, result.game_over, result.score
        );

        StepOutcome {
            reward: result.reward,
            game_over: result.game_over,
            score: result.score,
        }
    }

    /// Get reference to current game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Episodes started so far, the current one included
    pub fn episodes(&self) -> u32 {
        self.episodes
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }
}
