//! Per-disk instance data for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::Disk;

/// One drawable disk, laid out for direct upload as an instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct DiskInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub _pad: f32,
    pub color: [f32; 4],
}

impl DiskInstance {
    pub fn new(disk: &Disk, color: [f32; 4]) -> Self {
        Self {
            center: [disk.position.x as f32, disk.position.y as f32],
            radius: disk.radius() as f32,
            _pad: 0.0,
            color,
        }
    }
}

/// Raw bytes of an instance slice
pub fn as_bytes(instances: &[DiskInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}

/// Colors for scene elements and disk palettes
pub mod colors {
    pub const DEFAULT_DISK: [f32; 4] = [0.68, 0.85, 0.9, 1.0];

    /// Cycle used for generated layouts
    pub const PALETTE: [&str; 5] = ["#0033ff", "#cc0000", "#009933", "#ffcc33", "#990099"];

    /// Parse `#rrggbb` or a basic color name
    pub fn parse(name: &str) -> Option<[f32; 4]> {
        let name = name.trim();
        if let Some(hex) = name.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return None;
            }
            let channel = |i: usize| {
                u8::from_str_radix(&hex[i..i + 2], 16)
                    .ok()
                    .map(|v| v as f32 / 255.0)
            };
            return Some([channel(0)?, channel(2)?, channel(4)?, 1.0]);
        }

        let rgb = match name.to_lowercase().as_str() {
            "red" => [1.0, 0.0, 0.0],
            "green" => [0.0, 0.5, 0.0],
            "blue" => [0.0, 0.0, 1.0],
            "orange" => [1.0, 0.65, 0.0],
            "yellow" => [1.0, 1.0, 0.0],
            "purple" => [0.5, 0.0, 0.5],
            "white" => [1.0, 1.0, 1.0],
            "black" => [0.0, 0.0, 0.0],
            _ => return None,
        };
        Some([rgb[0], rgb[1], rgb[2], 1.0])
    }

    /// Palette color for disk `index`, cycling
    pub fn cycle(index: usize) -> [f32; 4] {
        parse(PALETTE[index % PALETTE.len()]).unwrap_or(DEFAULT_DISK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<DiskInstance>(), 32);

        let disk = Disk::new(DVec2::new(0.25, 0.75), DVec2::ZERO, 0.1, 0.1).unwrap();
        let instances = [DiskInstance::new(&disk, colors::DEFAULT_DISK); 3];
        assert_eq!(as_bytes(&instances).len(), 96);
        assert_eq!(instances[0].center, [0.25, 0.75]);
    }

    #[test]
    fn test_parse_colors() {
        assert_eq!(colors::parse("#ff0000"), Some([1.0, 0.0, 0.0, 1.0]));
        assert_eq!(colors::parse("Blue"), Some([0.0, 0.0, 1.0, 1.0]));
        assert_eq!(colors::parse("#12345"), None);
        assert_eq!(colors::parse("#gg0000"), None);
        assert_eq!(colors::parse("teal"), None);
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(colors::cycle(0), colors::cycle(5));
        assert_ne!(colors::cycle(0), colors::cycle(1));
        assert_eq!(colors::cycle(1), [0.8, 0.0, 0.0, 1.0]);
    }
}
