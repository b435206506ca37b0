//! Disk Sim - elastic hard-disk dynamics in a rectangular box
//!
//! Core modules:
//! - `sim`: Deterministic physics (disks, walls, pairwise collisions, arena step)
//! - `layout`: Initial disk placement (grid, scatter) from a seeded RNG
//! - `config`: Scenario configuration and presets
//! - `persistence`: Append-only CSV log of per-step disk state
//! - `renderer`: Translation of disk state into drawable instances and HUD text

pub mod config;
pub mod error;
pub mod layout;
pub mod persistence;
pub mod renderer;
pub mod sim;

pub use config::{Preset, Scenario, ScenarioConfig};
pub use error::{Error, Result};

/// Simulation configuration constants
pub mod consts {
    /// Default fixed timestep (seconds per step)
    pub const DEFAULT_TIME_STEP: f64 = 0.01;

    /// Default container dimensions (unit box)
    pub const DEFAULT_WIDTH: f64 = 1.0;
    pub const DEFAULT_HEIGHT: f64 = 1.0;

    /// Default disk radius
    pub const DEFAULT_RADIUS: f64 = 0.1;
    /// Random initial velocity components are drawn from [-MAX, MAX)
    pub const DEFAULT_MAX_SPEED: f64 = 1.0;

    /// Frame interval of the interactive animation, in milliseconds
    pub const FRAME_INTERVAL_MS: u64 = 20;

    /// Attempts per disk before scatter placement gives up
    pub const SCATTER_MAX_ATTEMPTS: u32 = 1000;

    /// Default CSV log file name
    pub const LOG_FILE_NAME: &str = "simulation_data.csv";
}

