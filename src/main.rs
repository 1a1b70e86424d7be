use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ssnake::game::{GameConfig, GameEngine};
use ssnake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "ssnake")]
#[command(version, about = "Wrap-around snake arcade game")]
struct Cli {
    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// Playfield width in units (multiple of 10)
    #[arg(long)]
    width: Option<i32>,

    /// Playfield height in units (multiple of 10)
    #[arg(long)]
    height: Option<i32>,

    /// Seed for food placement and timers
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(fps) = self.fps {
            config.frames_per_second = fps;
        }
        if let Some(width) = self.width {
            config.screen_width = width;
        }
        if let Some(height) = self.height {
            config.screen_height = height;
        }

        config.validate().context("Refusing to start")?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    ssnake::logging::init(cli.log_file.as_deref())?;

    let config = cli.game_config()?;
    let engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(config, seed),
        None => GameEngine::new(config),
    };

    let mut human_mode = HumanMode::new(engine);
    human_mode.run().await?;

    Ok(())
}
