use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};
use pixel_snake::game::GameConfig;
use pixel_snake::modes::{AgentMode, HumanMode};
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pixel_snake")]
#[command(version, about = "Snake game for keyboard play and RL agents")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Playfield width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Playfield height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Cell edge length in pixels
    #[arg(long)]
    block_size: Option<u32>,

    /// Steps per second; 0 runs unpaced
    #[arg(long)]
    fps: Option<u32>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Log file (the terminal belongs to the game)
    #[arg(long, default_value = "pixel_snake.log")]
    log_file: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Human,
    /// Serve the one-hot action protocol on stdin/stdout
    Agent,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(block_size) = self.block_size {
            config.block_size = block_size;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging before anything else
    let log_file = File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {:?}", cli.log_file))?;
    WriteLogger::init(cli.log_level, Config::default(), log_file)
        .context("Failed to initialize logger")?;

    let config = cli.game_config()?;
    info!("Starting pixel_snake with {:?}", config);

    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config)?;
            human_mode.run().await?;
        }
        Mode::Agent => {
            let mut agent_mode = AgentMode::new(config)?;
            // Pacing sleeps block the thread
            tokio::task::spawn_blocking(move || {
                agent_mode.run(std::io::stdin().lock(), std::io::stdout().lock())
            })
            .await
            .context("Agent task panicked")??;
        }
    }

    Ok(())
}
