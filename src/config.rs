//! Scenario configuration
//!
//! Construction-time only: a `ScenarioConfig` is validated and turned into a
//! ready-to-step `Arena` by [`ScenarioConfig::build`]. Loaded from JSON or
//! taken from one of the named presets.

use std::path::Path;

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};
use crate::layout::{RadiusSpec, grid_placement, random_velocity, scatter_placement};
use crate::renderer::colors;
use crate::sim::{Arena, Bounds, Disk, MassPolicy};

/// Built-in scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Four disks near the corners of a unit box
    #[default]
    Four,
    /// Fifty small equal disks on a grid
    Gas,
    /// Fifty disks of mixed radius on a grid
    Many,
    /// Two disks approaching head-on in a centered box
    HeadOn,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Four, Preset::Gas, Preset::Many, Preset::HeadOn];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Four => "four",
            Preset::Gas => "gas",
            Preset::Many => "many",
            Preset::HeadOn => "head-on",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "four" => Some(Preset::Four),
            "gas" => Some(Preset::Gas),
            "many" => Some(Preset::Many),
            "head-on" | "headon" | "head_on" => Some(Preset::HeadOn),
            _ => None,
        }
    }
}

/// Initial state of one explicitly placed disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskConfig {
    pub position: [f64; 2],
    /// Random when absent
    #[serde(default)]
    pub velocity: Option<[f64; 2]>,
    #[serde(default = "default_radius")]
    pub radius: f64,
    /// Overrides the scenario mass policy
    #[serde(default)]
    pub mass: Option<f64>,
    /// `#rrggbb` or a color name; cosmetic
    #[serde(default)]
    pub color: Option<String>,
}

impl DiskConfig {
    fn at(x: f64, y: f64, radius: f64, color: &str) -> Self {
        Self {
            position: [x, y],
            velocity: None,
            radius,
            mass: None,
            color: Some(color.to_string()),
        }
    }
}

/// How the initial disks are placed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Placement {
    /// Random distinct cells of the smallest square grid that holds `count`
    Grid { count: usize, radius: RadiusSpec },
    /// Random non-overlapping positions
    Scatter {
        count: usize,
        radius: RadiusSpec,
        #[serde(default = "default_max_attempts")]
        max_attempts: u32,
    },
    /// Every disk given by hand
    Explicit { disks: Vec<DiskConfig> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Lower-left corner of the container
    pub origin: [f64; 2],
    pub width: f64,
    pub height: f64,
    pub time_step: f64,
    /// RNG seed for random velocities, radii and placement; fresh when absent
    pub seed: Option<u64>,
    pub max_speed: f64,
    pub mass: MassPolicy,
    /// Show the elapsed-time counter (cosmetic)
    pub timer_visible: bool,
    pub placement: Placement,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

/// A built scenario, ready to step
#[derive(Debug, Clone)]
pub struct Scenario {
    pub arena: Arena,
    /// Render color per disk, same order as the arena
    pub colors: Vec<[f32; 4]>,
    pub timer_visible: bool,
    /// Seed actually used
    pub seed: u64,
}

impl ScenarioConfig {
    pub fn from_preset(preset: Preset) -> Self {
        let base = Self {
            origin: [0.0, 0.0],
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            time_step: DEFAULT_TIME_STEP,
            seed: None,
            max_speed: DEFAULT_MAX_SPEED,
            mass: MassPolicy::default(),
            timer_visible: true,
            placement: Placement::Explicit { disks: Vec::new() },
        };

        match preset {
            Preset::Four => Self {
                placement: Placement::Explicit {
                    disks: vec![
                        DiskConfig::at(0.2, 0.2, DEFAULT_RADIUS, "red"),
                        DiskConfig::at(0.8, 0.8, DEFAULT_RADIUS, "blue"),
                        DiskConfig::at(0.8, 0.2, DEFAULT_RADIUS, "green"),
                        DiskConfig::at(0.2, 0.8, DEFAULT_RADIUS, "orange"),
                    ],
                },
                ..base
            },
            Preset::Gas => Self {
                placement: Placement::Grid {
                    count: 50,
                    radius: RadiusSpec::Fixed(0.01),
                },
                ..base
            },
            Preset::Many => Self {
                time_step: 0.005,
                placement: Placement::Grid {
                    count: 50,
                    radius: RadiusSpec::Range { min: 0.01, max: 0.05 },
                },
                ..base
            },
            Preset::HeadOn => {
                let mut left = DiskConfig::at(-0.3, 0.0, 0.05, "blue");
                left.velocity = Some([1.0, 0.0]);
                let mut right = DiskConfig::at(0.3, 0.0, 0.05, "red");
                right.velocity = Some([-1.0, 0.0]);
                Self {
                    origin: [-0.5, -0.5],
                    placement: Placement::Explicit {
                        disks: vec![left, right],
                    },
                    ..base
                }
            }
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        log::info!("Loaded scenario from {}", path.as_ref().display());
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn bounds(&self) -> Result<Bounds> {
        Bounds::from_size(DVec2::from(self.origin), self.width, self.height)
    }

    /// Validate the configuration and build the arena
    pub fn build(&self) -> Result<Scenario> {
        let bounds = self.bounds()?;
        if !(self.max_speed.is_finite() && self.max_speed >= 0.0) {
            return Err(Error::InvalidParam(format!(
                "max_speed must be finite and >= 0, got {}",
                self.max_speed
            )));
        }

        let seed = self.seed.unwrap_or_else(rand::random);
        log::info!("Scenario seed: {seed}");
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut disks = Vec::new();
        let mut palette = Vec::new();

        match &self.placement {
            Placement::Grid { count, radius } => {
                radius.validate()?;
                let positions = grid_placement(&mut rng, *count, &bounds, radius.max())?;
                for (i, position) in positions.into_iter().enumerate() {
                    let r = radius.sample(&mut rng);
                    let velocity = random_velocity(&mut rng, self.max_speed);
                    disks.push(Disk::with_policy(position, velocity, r, self.mass)?);
                    palette.push(colors::cycle(i));
                }
            }
            Placement::Scatter {
                count,
                radius,
                max_attempts,
            } => {
                radius.validate()?;
                let radii: Vec<f64> = (0..*count).map(|_| radius.sample(&mut rng)).collect();
                let positions = scatter_placement(&mut rng, &radii, &bounds, *max_attempts)?;
                for (i, (position, r)) in positions.into_iter().zip(radii).enumerate() {
                    let velocity = random_velocity(&mut rng, self.max_speed);
                    disks.push(Disk::with_policy(position, velocity, r, self.mass)?);
                    palette.push(colors::cycle(i));
                }
            }
            Placement::Explicit { disks: configs } => {
                for (i, cfg) in configs.iter().enumerate() {
                    let velocity = match cfg.velocity {
                        Some(v) => DVec2::from(v),
                        None => random_velocity(&mut rng, self.max_speed),
                    };
                    let mass = cfg.mass.unwrap_or_else(|| self.mass.mass_for(cfg.radius));
                    disks.push(Disk::new(DVec2::from(cfg.position), velocity, cfg.radius, mass)?);

                    let color = match cfg.color.as_deref() {
                        Some(name) => colors::parse(name).ok_or_else(|| {
                            Error::InvalidParam(format!("disk {}: unknown color {name:?}", i + 1))
                        })?,
                        None => colors::cycle(i),
                    };
                    palette.push(color);
                }
            }
        }

        let arena = Arena::new(disks, bounds, self.time_step)?;
        Ok(Scenario {
            arena,
            colors: palette,
            timer_visible: self.timer_visible,
            seed,
        })
    }
}

fn default_radius() -> f64 {
    DEFAULT_RADIUS
}

fn default_max_attempts() -> u32 {
    SCATTER_MAX_ATTEMPTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names() {
        for preset in Preset::ALL {
            assert_eq!(Preset::from_str(preset.as_str()), Some(preset));
        }
        assert_eq!(Preset::from_str("HEAD_ON"), Some(Preset::HeadOn));
        assert_eq!(Preset::from_str("nope"), None);
    }

    #[test]
    fn test_every_preset_builds() {
        for preset in Preset::ALL {
            let mut config = ScenarioConfig::from_preset(preset);
            config.seed = Some(1);
            let scenario = config.build().unwrap();
            assert_eq!(scenario.colors.len(), scenario.arena.disks().len());
            assert_eq!(scenario.seed, 1);
        }
    }

    #[test]
    fn test_head_on_preset() {
        let scenario = ScenarioConfig::from_preset(Preset::HeadOn).build().unwrap();
        let disks = scenario.arena.disks();
        assert_eq!(disks.len(), 2);
        assert_eq!(disks[0].velocity, DVec2::new(1.0, 0.0));
        assert_eq!(disks[0].mass(), 0.05);
        assert_eq!(scenario.arena.bounds().min, DVec2::splat(-0.5));
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut config = ScenarioConfig::from_preset(Preset::Many);
        config.seed = Some(2024);

        let mut first = config.build().unwrap().arena;
        let mut second = config.build().unwrap().arena;
        assert_eq!(first.disks(), second.disks());

        for _ in 0..300 {
            let a = first.step();
            let b = second.step();
            assert_eq!(a.record, b.record);
        }
        assert_eq!(first.disks(), second.disks());
    }

    #[test]
    fn test_different_seed_different_velocities() {
        let mut config = ScenarioConfig::from_preset(Preset::Four);
        config.seed = Some(1);
        let a = config.build().unwrap().arena;
        config.seed = Some(2);
        let b = config.build().unwrap().arena;
        assert_ne!(a.disks()[0].velocity, b.disks()[0].velocity);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r##"{
            "seed": 7,
            "time_step": 0.02,
            "mass": { "kind": "uniform", "mass": 1.0 },
            "placement": {
                "kind": "explicit",
                "disks": [
                    { "position": [0.5, 0.5], "velocity": [0.1, 0.0], "color": "#00ff00" },
                    { "position": [0.2, 0.5], "radius": 0.05 }
                ]
            }
        }"##;
        let config = ScenarioConfig::from_json(json).unwrap();
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert!(config.timer_visible);

        let scenario = config.build().unwrap();
        let disks = scenario.arena.disks();
        assert_eq!(disks[0].radius(), DEFAULT_RADIUS);
        assert_eq!(disks[0].mass(), 1.0);
        assert_eq!(disks[1].mass(), 1.0);
        assert_eq!(scenario.colors[0], [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(scenario.arena.time_step(), 0.02);
    }

    #[test]
    fn test_scatter_placement_json() {
        let json = r##"{
            "seed": 11,
            "placement": { "kind": "scatter", "count": 30, "radius": { "min": 0.01, "max": 0.03 } }
        }"##;
        let scenario = ScenarioConfig::from_json(json).unwrap().build().unwrap();
        let disks = scenario.arena.disks();
        assert_eq!(disks.len(), 30);
        for d in disks {
            assert!((0.01..0.03).contains(&d.radius()));
            assert_eq!(d.mass(), d.radius());
        }
    }

    #[test]
    fn test_invalid_configs_rejected() {
        let mut config = ScenarioConfig::from_preset(Preset::Four);
        config.width = 0.0;
        assert!(matches!(config.build(), Err(Error::InvalidBounds(_))));

        let mut config = ScenarioConfig::from_preset(Preset::Four);
        config.time_step = -1.0;
        assert!(matches!(config.build(), Err(Error::InvalidTimeStep(_))));

        let mut config = ScenarioConfig::from_preset(Preset::Four);
        config.max_speed = f64::NAN;
        assert!(config.build().is_err());

        let mut config = ScenarioConfig::from_preset(Preset::Four);
        if let Placement::Explicit { disks } = &mut config.placement {
            disks[0].color = Some("chartreuse-ish".to_string());
        }
        assert!(matches!(config.build(), Err(Error::InvalidParam(_))));

        let mut config = ScenarioConfig::from_preset(Preset::Four);
        if let Placement::Explicit { disks } = &mut config.placement {
            disks[0].position = [1.5, 0.5];
        }
        assert!(matches!(config.build(), Err(Error::InvalidDisk(_))));

        assert!(ScenarioConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_to_json_reloads() {
        let config = ScenarioConfig::from_preset(Preset::Many);
        let json = config.to_json().unwrap();
        assert_eq!(ScenarioConfig::from_json(&json).unwrap(), config);
    }
}
