//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use log::LevelFilter;

use crate::compute::fleet_layout;
use crate::settings::{Settings, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Largest accepted world side. Bigger worlds would need a fleet too large
/// to allocate.
pub const MAX_WORLD_SIDE: f64 = 100_000.0;

#[derive(Parser, Debug, Clone)]
#[command(name = "space_battle")]
#[command(about = "Shoot down the descending fleet before it reaches you")]
pub struct Config {
    /// Simulation ticks (and rendered frames) per second
    #[arg(long, default_value_t = 120, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub fps: u32,

    /// Logical world width
    #[arg(long, default_value_t = SCREEN_WIDTH)]
    pub width: f64,

    /// Logical world height
    #[arg(long, default_value_t = SCREEN_HEIGHT)]
    pub height: f64,

    /// Where to write the log; the terminal itself is busy drawing the game
    #[arg(long, default_value = "space_battle.log")]
    pub log_file: PathBuf,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Config {
    pub fn frame(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps as f64)
    }

    pub fn settings(&self) -> Settings {
        Settings::with_screen(self.width, self.height)
    }

    /// Reject worlds that cannot hold a single fleet row, or that are too
    /// large to populate.
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.height.is_finite()) {
            bail!("world size must be finite, got {}x{}", self.width, self.height);
        }
        if self.width > MAX_WORLD_SIDE || self.height > MAX_WORLD_SIDE {
            bail!(
                "a {}x{} world is too large, each side must be at most {}",
                self.width,
                self.height,
                MAX_WORLD_SIDE
            );
        }
        if fleet_layout(&self.settings()).is_empty() {
            bail!(
                "a {}x{} world is too small to hold a fleet",
                self.width,
                self.height
            );
        }
        Ok(())
    }
}
