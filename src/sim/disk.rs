//! Disk entity and single-body motion

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How a disk's mass is derived from its radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MassPolicy {
    /// Every disk has the same mass
    Uniform { mass: f64 },
    /// mass = density * radius
    ProportionalToRadius { density: f64 },
}

impl Default for MassPolicy {
    fn default() -> Self {
        MassPolicy::ProportionalToRadius { density: 1.0 }
    }
}

impl MassPolicy {
    pub fn mass_for(&self, radius: f64) -> f64 {
        match *self {
            MassPolicy::Uniform { mass } => mass,
            MassPolicy::ProportionalToRadius { density } => density * radius,
        }
    }
}

/// A rigid circular body. Point mass, no rotation.
///
/// Radius and mass are fixed at construction and always positive; position and
/// velocity are mutated in place every step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Disk {
    pub position: DVec2,
    pub velocity: DVec2,
    radius: f64,
    mass: f64,
}

impl Disk {
    pub fn new(position: DVec2, velocity: DVec2, radius: f64, mass: f64) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(Error::InvalidDisk(format!(
                "radius must be finite and > 0, got {radius}"
            )));
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(Error::InvalidDisk(format!(
                "mass must be finite and > 0, got {mass}"
            )));
        }
        if !position.is_finite() || !velocity.is_finite() {
            return Err(Error::InvalidDisk(format!(
                "position {position} and velocity {velocity} must be finite"
            )));
        }
        Ok(Self {
            position,
            velocity,
            radius,
            mass,
        })
    }

    /// Create a disk whose mass follows `policy`
    pub fn with_policy(
        position: DVec2,
        velocity: DVec2,
        radius: f64,
        policy: MassPolicy,
    ) -> Result<Self> {
        Self::new(position, velocity, radius, policy.mass_for(radius))
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Advance position by one explicit Euler step
    #[inline]
    pub fn integrate(&mut self, dt: f64) {
        debug_assert!(dt.is_finite(), "time step must be finite");
        self.position += self.velocity * dt;
    }

    /// m * |v|^2 (no 1/2 factor; diagnostic units only)
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        self.mass * self.velocity.length_squared()
    }

    #[inline]
    pub fn momentum(&self) -> DVec2 {
        self.velocity * self.mass
    }

    /// Position and velocity as `[x, y, vx, vy]`
    pub fn state(&self) -> [f64; 4] {
        [
            self.position.x,
            self.position.y,
            self.velocity.x,
            self.velocity.y,
        ]
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}
