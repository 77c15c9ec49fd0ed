//! Line-delimited JSON protocol for driving the environment from another
//! process
//!
//! Each request is one JSON object per line:
//!
//! ```text
//! {"cmd": "step", "action": [0, 1, 0]}
//! {"cmd": "reset"}
//! {"cmd": "state"}
//! ```
//!
//! and produces exactly one response line:
//!
//! ```text
//! {"kind": "outcome", "reward": 0.0, "game_over": false, "score": 0, "steps": 1}
//! {"kind": "state", "state": {...}}
//! {"kind": "error", "message": "..."}
//! ```

use serde::{Deserialize, Serialize};

use super::environment::{Frontend, SnakeEnvironment};
use crate::game::GameState;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Request {
    /// Advance one step with a one-hot `[straight, clockwise, counter_clockwise]` vector
    Step { action: [u8; 3] },
    /// Start a new episode
    Reset,
    /// Report the full game state without stepping
    State,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    Outcome {
        reward: f32,
        game_over: bool,
        score: usize,
        steps: u32,
    },
    State {
        state: GameState,
    },
    Error {
        message: String,
    },
}

impl Response {
    fn error(message: impl ToString) -> Self {
        Response::Error {
            message: message.to_string(),
        }
    }
}

/// Parse and apply one request line
pub fn handle_line<F: Frontend>(env: &mut SnakeEnvironment<F>, line: &str) -> Response {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => handle_request(env, request),
        Err(e) => Response::error(format!("Malformed request: {}", e)),
    }
}

pub fn handle_request<F: Frontend>(env: &mut SnakeEnvironment<F>, request: Request) -> Response {
    match request {
        Request::Step { action } => match env.play_step(action) {
            Ok(outcome) => Response::Outcome {
                reward: outcome.reward,
                game_over: outcome.game_over,
                score: outcome.score,
                steps: env.state().steps,
            },
            Err(e) => Response::error(e),
        },
        Request::Reset => Response::State {
            state: env.reset().clone(),
        },
        Request::State => Response::State {
            state: env.state().clone(),
        },
    }
}
