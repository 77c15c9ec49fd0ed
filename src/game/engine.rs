use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{
    action::Action,
    config::GameConfig,
    error::GameError,
    food::Food,
    state::{GameOverCause, GameState, Playfield, Snake},
};

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Why the game ended, if it did
    pub cause: Option<GameOverCause>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Reward for this step (for RL training)
    pub reward: f32,
    /// Whether the game has ended
    pub game_over: bool,
    /// Body length after the step
    pub score: usize,
    /// Additional information about the step
    pub info: StepInfo,
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    playfield: Playfield,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine. Food placement is seeded from `config.seed`
    /// when set, from entropy otherwise.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Create an engine with deterministic food placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            playfield: config.playfield(),
            config,
            rng,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a new game: bodiless snake at the centre facing right, fresh food
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(self.playfield.center());
        let food = Food::spawn(&mut self.rng, &self.playfield);
        debug!(
            "New game: head at {:?}, food at {:?}",
            snake.head(),
            food.position
        );

        GameState::new(snake, food, self.playfield)
    }

    /// Execute one step of the game
    ///
    /// The head moves first and collisions are judged against the body as it
    /// was before this step, so the tail still counts even though it would
    /// have moved away.
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.is_alive {
            return StepResult {
                reward: 0.0,
                game_over: true,
                score: state.score(),
                info: StepInfo {
                    ate_food: false,
                    cause: state.cause,
                },
            };
        }

        state.steps += 1;
        state.reward = 0.0;

        state
            .snake
            .move_head(action, state.playfield.block_size);

        if let Some(cause) = self.check_game_over(state) {
            state.is_alive = false;
            state.cause = Some(cause);
            state.reward = self.config.death_penalty;
            debug!(
                "Game over after {} steps: {:?} at {:?}, score {}",
                state.steps,
                cause,
                state.snake.head(),
                state.score()
            );

            return StepResult {
                reward: state.reward,
                game_over: true,
                score: state.score(),
                info: StepInfo {
                    ate_food: false,
                    cause: Some(cause),
                },
            };
        }

        let ate_food = state.snake.is_eating(&state.food);
        if ate_food {
            state.food.relocate(&mut self.rng, &state.playfield);
            state.snake.grow();
            state.reward = self.config.food_reward;
        } else {
            state.snake.shift_body();
        }

        StepResult {
            reward: state.reward,
            game_over: false,
            score: state.score(),
            info: StepInfo {
                ate_food,
                cause: None,
            },
        }
    }

    fn check_game_over(&self, state: &GameState) -> Option<GameOverCause> {
        let snake = &state.snake;

        if snake.hits_wall_at(snake.head(), &state.playfield) {
            return Some(GameOverCause::Wall);
        }

        if snake.hits_self_at(snake.head()) {
            return Some(GameOverCause::SelfCollision);
        }

        if let Some(factor) = self.config.step_budget_factor {
            let length = snake.body_len().max(self.config.step_budget_min_length);
            let budget = factor as u64 * length as u64;
            if state.steps as u64 > budget {
                return Some(GameOverCause::StepBudget);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::action::{Direction, Turn};
    use crate::game::state::{Head, Position};
    use std::collections::VecDeque;

    fn engine() -> GameEngine {
        GameEngine::with_seed(GameConfig::small().without_step_budget(), 7).unwrap()
    }

    fn budgeted_engine(min_length: usize) -> GameEngine {
        let config = GameConfig {
            step_budget_min_length: min_length,
            ..GameConfig::small()
        };
        GameEngine::with_seed(config, 7).unwrap()
    }

    fn state_with(head: (i32, i32), facing: Direction, body: &[(i32, i32)]) -> GameState {
        let snake = Snake::with_body(
            Head::new(Position::new(head.0, head.1), facing),
            body.iter().map(|&(x, y)| Position::new(x, y)),
        );
        GameState::new(
            snake,
            Food::at(Position::new(0, 0)),
            GameConfig::small().playfield(),
        )
    }

    #[test]
    fn test_reset() {
        let mut engine = engine();
        let state = engine.reset();

        assert!(state.is_alive);
        assert_eq!(state.score(), 0);
        assert_eq!(state.steps, 0);
        assert_eq!(state.reward, 0.0);
        assert_eq!(state.snake.head(), Position::new(100, 100));
        assert_eq!(state.snake.facing(), Direction::Right);
        assert!(state.playfield.contains(state.food.position));
    }

    #[test]
    fn test_reset_uses_injected_seed() {
        let config = GameConfig::small();
        let mut a = GameEngine::with_seed(config.clone(), 99).unwrap();
        let mut b = GameEngine::with_seed(config.clone(), 99).unwrap();
        assert_eq!(a.reset().food, b.reset().food);

        let mut rng = StdRng::seed_from_u64(99);
        let expected = Food::spawn(&mut rng, &config.playfield());
        let mut c = GameEngine::with_seed(config, 99).unwrap();
        assert_eq!(c.reset().food, expected);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = GameConfig::small();
        config.block_size = 0;
        assert!(GameEngine::new(config).is_err());
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = engine();
        let mut state = engine.reset();
        state.food = Food::at(Position::new(0, 0));

        let result = engine.step(&mut state, Action::CONTINUE);

        assert!(!result.game_over);
        assert!(!result.info.ate_food);
        assert_eq!(result.reward, 0.0);
        assert_eq!(state.steps, 1);
        assert_eq!(state.snake.head(), Position::new(120, 100));
    }

    #[test]
    fn test_food_consumption() {
        let config = GameConfig::small().without_step_budget();
        let mut engine = GameEngine::with_seed(config.clone(), 5).unwrap();
        let mut state = engine.reset();
        state.food = Food::at(Position::new(120, 100));

        let mut rng = StdRng::seed_from_u64(5);
        let _initial = Food::spawn(&mut rng, &config.playfield());
        let expected = Food::spawn(&mut rng, &config.playfield());

        let result = engine.step(&mut state, Action::CONTINUE);

        assert!(result.info.ate_food);
        assert_eq!(result.reward, 10.0);
        assert_eq!(result.score, 1);
        assert_eq!(state.snake.body, VecDeque::from(vec![Position::new(100, 100)]));
        assert_eq!(state.food, expected);
    }

    #[test]
    fn test_reward_resets_after_eating() {
        let mut engine = engine();
        let mut state = state_with((100, 100), Direction::Right, &[]);
        state.food = Food::at(Position::new(120, 100));

        assert_eq!(engine.step(&mut state, Action::CONTINUE).reward, 10.0);
        state.food = Food::at(Position::new(0, 0));
        assert_eq!(engine.step(&mut state, Action::CONTINUE).reward, 0.0);
    }

    #[test]
    fn test_tail_shift_invariant() {
        let mut engine = engine();
        let mut state = state_with((100, 100), Direction::Right, &[(60, 100), (80, 100)]);

        let result = engine.step(&mut state, Action::Steer(Direction::Down));

        assert!(!result.game_over);
        assert_eq!(result.score, 2);
        assert_eq!(state.snake.head(), Position::new(100, 120));
        assert_eq!(
            state.snake.body,
            VecDeque::from(vec![Position::new(80, 100), Position::new(100, 100)])
        );
    }

    #[test]
    fn test_wall_collision() {
        let mut engine = engine();
        let mut state = state_with((0, 100), Direction::Left, &[]);

        let result = engine.step(&mut state, Action::CONTINUE);

        assert!(result.game_over);
        assert!(!state.is_alive);
        assert_eq!(result.reward, -10.0);
        assert_eq!(result.info.cause, Some(GameOverCause::Wall));
    }

    #[test]
    fn test_last_column_is_safe() {
        let mut engine = engine();
        let mut state = state_with((160, 100), Direction::Right, &[]);

        let result = engine.step(&mut state, Action::CONTINUE);
        assert!(!result.game_over);
        assert_eq!(state.snake.head(), Position::new(180, 100));

        let result = engine.step(&mut state, Action::CONTINUE);
        assert_eq!(result.info.cause, Some(GameOverCause::Wall));
    }

    #[test]
    fn test_self_collision() {
        let mut engine = engine();
        // Head came from the neck on its right; its tail sits above it
        let mut state = state_with(
            (100, 100),
            Direction::Left,
            &[(100, 80), (120, 80), (120, 100)],
        );

        let result = engine.step(&mut state, Action::Steer(Direction::Up));

        assert!(result.game_over);
        assert_eq!(result.info.cause, Some(GameOverCause::SelfCollision));
    }

    #[test]
    fn test_relative_turn_step() {
        let mut engine = engine();
        let mut state = state_with((100, 100), Direction::Up, &[]);

        engine.step(&mut state, Action::Turn(Turn::Clockwise));
        assert_eq!(state.snake.facing(), Direction::Right);
        assert_eq!(state.snake.head(), Position::new(120, 100));

        engine.step(&mut state, Action::Turn(Turn::CounterClockwise));
        assert_eq!(state.snake.facing(), Direction::Up);
        assert_eq!(state.snake.head(), Position::new(120, 80));
    }

    #[test]
    fn test_prevent_180_degree_turn() {
        let mut engine = engine();
        let mut state = state_with((100, 100), Direction::Right, &[(80, 100)]);

        let result = engine.step(&mut state, Action::Steer(Direction::Left));

        assert!(!result.game_over);
        assert_eq!(state.snake.facing(), Direction::Right);
        assert_eq!(state.snake.head(), Position::new(120, 100));
    }

    #[test]
    fn test_step_budget_cutoff() {
        let mut engine = budgeted_engine(0);
        let mut state = state_with((100, 100), Direction::Right, &[(60, 100), (80, 100)]);
        state.steps = 199;

        let result = engine.step(&mut state, Action::CONTINUE);
        assert!(!result.game_over);

        let result = engine.step(&mut state, Action::CONTINUE);
        assert!(result.game_over);
        assert_eq!(result.reward, -10.0);
        assert_eq!(result.info.cause, Some(GameOverCause::StepBudget));
    }

    #[test]
    fn test_bodiless_game_out_of_budget_on_first_step() {
        let mut engine = budgeted_engine(0);
        let mut state = engine.reset();
        state.food = Food::at(Position::new(0, 0));

        let result = engine.step(&mut state, Action::CONTINUE);

        assert!(result.game_over);
        assert_eq!(result.reward, -10.0);
        assert_eq!(result.score, 0);
        assert_eq!(result.info.cause, Some(GameOverCause::StepBudget));
        assert_eq!(state.steps, 1);
        assert!(!state.is_alive);
    }

    #[test]
    fn test_budget_min_length_floor() {
        let mut engine = budgeted_engine(1);
        let mut state = state_with((100, 100), Direction::Right, &[]);
        state.steps = 99;

        let result = engine.step(&mut state, Action::CONTINUE);
        assert!(!result.game_over);

        let result = engine.step(&mut state, Action::CONTINUE);
        assert_eq!(result.info.cause, Some(GameOverCause::StepBudget));
    }

    #[test]
    fn test_budget_disabled() {
        let config = GameConfig::small().without_step_budget();
        let mut engine = GameEngine::with_seed(config, 1).unwrap();
        let mut state = state_with((100, 100), Direction::Right, &[]);
        state.steps = 10_000;

        let result = engine.step(&mut state, Action::CONTINUE);
        assert!(!result.game_over);
    }

    #[test]
    fn test_terminated_game_no_update() {
        let mut engine = engine();
        let mut state = engine.reset();
        state.is_alive = false;
        let steps_before = state.steps;
        let head_before = state.snake.head();

        let result = engine.step(&mut state, Action::CONTINUE);

        assert!(result.game_over);
        assert_eq!(state.steps, steps_before);
        assert_eq!(state.snake.head(), head_before);
    }
}
