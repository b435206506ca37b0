//! Rendering translation layer
//!
//! Maps plain disk state onto drawable data. The simulation never sees any of
//! this; a frontend pulls a `Frame` after each step and draws it however it
//! likes.

pub mod hud;
pub mod instance;

pub use hud::Hud;
pub use instance::{DiskInstance, as_bytes, colors};

use crate::sim::Arena;

/// Everything needed to draw one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub instances: Vec<DiskInstance>,
    pub hud: Hud,
}

impl Frame {
    /// Snapshot the arena; `colors[i]` paints disk `i`, missing entries use the default
    pub fn capture(arena: &Arena, colors: &[[f32; 4]], timer_visible: bool) -> Self {
        let instances = arena
            .disks()
            .iter()
            .enumerate()
            .map(|(i, disk)| {
                let color = colors.get(i).copied().unwrap_or(colors::DEFAULT_DISK);
                DiskInstance::new(disk, color)
            })
            .collect();

        Self {
            instances,
            hud: Hud::new(arena.elapsed_time(), arena.kinetic_energy(), timer_visible),
        }
    }

    /// Instance data as a GPU upload buffer
    pub fn instance_bytes(&self) -> &[u8] {
        as_bytes(&self.instances)
    }
}
