//! Agent mode: serve the RL environment over stdin/stdout
//!
//! An external agent writes one JSON request per line and reads one JSON
//! response per line (see [`crate::rl::protocol`]). Blank lines are ignored.
//! The session ends when the input closes.

use anyhow::{Context, Result};
use log::{info, warn};
use std::io::{BufRead, Write};

use crate::game::GameConfig;
use crate::rl::protocol::{Response, handle_line};
use crate::rl::{NullFrontend, SnakeEnvironment};

pub struct AgentMode {
    env: SnakeEnvironment<NullFrontend>,
}

impl AgentMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let env = SnakeEnvironment::headless(config).context("Failed to create environment")?;
        Ok(Self { env })
    }

    /// Process requests until `input` is exhausted
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        let config = self.env.config();
        info!(
            "Agent mode started: {}x{} cells, fps {}, budget factor {:?}",
            config.columns(),
            config.rows(),
            config.fps,
            config.step_budget_factor
        );

        let mut requests = 0u64;
        for line in input.lines() {
            let line = line.context("Failed to read request")?;
            if line.trim().is_empty() {
                continue;
            }
            requests += 1;

            let response = handle_line(&mut self.env, &line);
            if let Response::Error { message } = &response {
                warn!("Rejected request {:?}: {}", line, message);
            }

            serde_json::to_writer(&mut output, &response).context("Failed to encode response")?;
            output
                .write_all(b"\n")
                .and_then(|_| output.flush())
                .context("Failed to write response")?;
        }

        info!(
            "Agent mode finished after {} requests and {} episodes",
            requests,
            self.env.episodes()
        );
        Ok(())
    }
}
