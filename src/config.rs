//! Launch options and the tuning values the simulation reads.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::compute::ability_cost;
use crate::entities::Ability;
use crate::error::ConfigError;
use crate::gauge::{DEFAULT_CAPACITY, DEFAULT_REFILL_MS};

pub const MAX_FPS: u32 = 240;

/// Match tuning.
///
/// - `health`: hits (at damage 1) an actor survives minus one; the default
///   of 1 makes any hit end the round.
/// - `max_live_projectiles`: a side may not fire while this many of its
///   projectiles are still in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub fps: u32,
    pub health: u32,
    pub gauge_capacity: u32,
    pub gauge_refill_ms: u64,
    pub max_live_projectiles: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fps: 40,
            health: 1,
            gauge_capacity: DEFAULT_CAPACITY,
            gauge_refill_ms: DEFAULT_REFILL_MS,
            max_live_projectiles: 1,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(ConfigError::FpsOutOfRange {
                fps: self.fps,
                max: MAX_FPS,
            });
        }
        if self.health == 0 {
            return Err(ConfigError::ZeroHealth);
        }
        let min = Ability::ALL
            .iter()
            .map(|a| ability_cost(*a))
            .max()
            .unwrap_or(0);
        if self.gauge_capacity < min {
            return Err(ConfigError::GaugeTooSmall {
                capacity: self.gauge_capacity,
                min,
            });
        }
        if self.gauge_refill_ms == 0 {
            return Err(ConfigError::ZeroRefillInterval);
        }
        if self.max_live_projectiles == 0 {
            return Err(ConfigError::ZeroLiveProjectiles);
        }
        Ok(())
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.fps.max(1)))
    }
}

/// Two-player terminal duel: Player at the bottom, Alien at the top.
#[derive(Parser, Debug, Clone)]
#[command(name = "alien_duel", version)]
pub struct Args {
    /// Simulation frames per second.
    #[arg(long, default_value_t = 40)]
    pub fps: u32,

    /// Health of each side at the start of a round.
    #[arg(long, default_value_t = 1)]
    pub health: u32,

    /// Maximum gauge value.
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    pub gauge_capacity: u32,

    /// Milliseconds between gauge refills.
    #[arg(long, default_value_t = DEFAULT_REFILL_MS)]
    pub gauge_refill_ms: u64,

    /// Projectiles a side may have in flight before it must wait.
    #[arg(long, default_value_t = 1)]
    pub max_live_projectiles: usize,

    /// Seed for item timing and kinds; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write the log (defaults to the system temp directory).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let config = GameConfig {
            fps: self.fps,
            health: self.health,
            gauge_capacity: self.gauge_capacity,
            gauge_refill_ms: self.gauge_refill_ms,
            max_live_projectiles: self.max_live_projectiles,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("alien_duel.log"))
    }
}
