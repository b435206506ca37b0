//! Deterministic physics module
//!
//! Everything that changes disk state lives here. This module must stay pure
//! and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (by index in the disk collection)
//! - No rendering, I/O or RNG

pub mod arena;
pub mod collision;
pub mod disk;
pub mod record;
pub mod wall;

pub use arena::{Arena, StepReport};
pub use collision::{PairOutcome, detect, resolve, resolve_pair};
pub use disk::{Disk, MassPolicy};
pub use record::{StepRecord, header};
pub use wall::{Bounds, WallContact};
