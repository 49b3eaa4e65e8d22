//! Startup configuration
//!
//! The visualizer has no command-line flags and no config file. Everything
//! tunable lives in [`Config`], whose [`Default`] carries the constants the
//! binary runs with.

use std::time::Duration;
use thiserror::Error;

/// Number of bars in a freshly generated dataset
pub const DEFAULT_COUNT: usize = 50;

/// Inclusive lower bound for generated values
pub const DEFAULT_MIN_VALUE: i32 = 0;

/// Inclusive upper bound for generated values
pub const DEFAULT_MAX_VALUE: i32 = 100;

/// Frames per second of the interaction loop
pub const DEFAULT_TICK_RATE: u32 = 60;

/// Horizontal padding of the chart, in columns (split evenly left/right)
pub const DEFAULT_SIDE_PAD: u16 = 4;

/// Headroom above the tallest bar, in terminal rows
pub const DEFAULT_TOP_PAD: u16 = 2;

/// Errors raised by [`Config::validate`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("dataset size must be at least 1")]
    EmptyDataset,

    #[error("value bounds are inverted: min {min} > max {max}")]
    InvalidBounds { min: i32, max: i32 },

    #[error("tick rate must be non-zero")]
    ZeroTickRate,
}

/// Visualizer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub count: usize,
    pub min_value: i32,
    pub max_value: i32,
    pub tick_rate: u32,
    pub side_pad: u16,
    pub top_pad: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            count: DEFAULT_COUNT,
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            tick_rate: DEFAULT_TICK_RATE,
            side_pad: DEFAULT_SIDE_PAD,
            top_pad: DEFAULT_TOP_PAD,
        }
    }
}

impl Config {
    /// Check the invariants the dataset generator and the loop rely on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::EmptyDataset);
        }
        if self.min_value > self.max_value {
            return Err(ConfigError::InvalidBounds {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }

    /// Duration of one frame of the interaction loop
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }
}
