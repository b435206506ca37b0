//! Container bounds and disk-wall collision
//!
//! Walls are perfectly elastic and the positional correction is immediate:
//! a disk found touching or past a wall is placed flush against it and the
//! matching velocity component flips sign. There is no sub-step search for the
//! exact moment of impact.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::disk::Disk;
use crate::error::{Error, Result};

/// Axis-aligned container rectangle `[min.x, max.x] x [min.y, max.y]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    pub fn new(min: DVec2, max: DVec2) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::InvalidBounds(format!(
                "corners must be finite, got {min} .. {max}"
            )));
        }
        if max.x <= min.x || max.y <= min.y {
            return Err(Error::InvalidBounds(format!(
                "width and height must be > 0, got {min} .. {max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Box of the given size with its lower-left corner at `origin`
    pub fn from_size(origin: DVec2, width: f64, height: f64) -> Result<Self> {
        Self::new(origin, origin + DVec2::new(width, height))
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Whether a disk of `radius` can sit anywhere in the box at all
    pub fn fits(&self, radius: f64) -> bool {
        2.0 * radius <= self.width() && 2.0 * radius <= self.height()
    }

    /// Whether the disk's full extent lies inside, allowing `eps` of slack
    pub fn contains_disk(&self, position: DVec2, radius: f64, eps: f64) -> bool {
        position.x - radius >= self.min.x - eps
            && position.x + radius <= self.max.x + eps
            && position.y - radius >= self.min.y - eps
            && position.y + radius <= self.max.y + eps
    }

    /// Whether any part of the disk touches the closed rectangle
    pub fn reaches(&self, position: DVec2, radius: f64) -> bool {
        position.x >= self.min.x - radius
            && position.x <= self.max.x + radius
            && position.y >= self.min.y - radius
            && position.y <= self.max.y + radius
    }
}

/// Which walls a disk touched during one wall check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    pub x_min: bool,
    pub x_max: bool,
    pub y_min: bool,
    pub y_max: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.x_min || self.x_max || self.y_min || self.y_max
    }
}

impl Disk {
    /// Reflect off any wall the disk touches or has crossed
    ///
    /// All four checks run; the min and max check of one axis are separate
    /// `if`s so a corner hit flips both components.
    pub fn resolve_wall(&mut self, bounds: &Bounds) -> WallContact {
        let r = self.radius();
        let mut contact = WallContact::default();

        if self.position.x - r <= bounds.min.x {
            self.velocity.x = -self.velocity.x;
            self.position.x = bounds.min.x + r;
            contact.x_min = true;
        }
        if self.position.x + r >= bounds.max.x {
            self.velocity.x = -self.velocity.x;
            self.position.x = bounds.max.x - r;
            contact.x_max = true;
        }

        if self.position.y - r <= bounds.min.y {
            self.velocity.y = -self.velocity.y;
            self.position.y = bounds.min.y + r;
            contact.y_min = true;
        }
        if self.position.y + r >= bounds.max.y {
            self.velocity.y = -self.velocity.y;
            self.position.y = bounds.max.y - r;
            contact.y_max = true;
        }

        contact
    }

    /// Clamp position back inside the box without touching velocity
    ///
    /// Returns true if the disk was moved.
    pub(crate) fn confine(&mut self, bounds: &Bounds) -> bool {
        let r = self.radius();
        let lo = bounds.min + DVec2::splat(r);
        let hi = bounds.max - DVec2::splat(r);
        let clamped = DVec2::new(
            self.position.x.max(lo.x).min(hi.x),
            self.position.y.max(lo.y).min(hi.y),
        );
        let moved = clamped != self.position;
        self.position = clamped;
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn centered_box() -> Bounds {
        Bounds::new(DVec2::splat(-0.5), DVec2::splat(0.5)).unwrap()
    }

    #[test]
    fn test_bounds_validation() {
        assert!(Bounds::new(DVec2::ZERO, DVec2::ONE).is_ok());
        assert!(Bounds::new(DVec2::ONE, DVec2::ZERO).is_err());
        assert!(Bounds::from_size(DVec2::ZERO, 0.0, 1.0).is_err());
        assert!(Bounds::from_size(DVec2::ZERO, 1.0, -1.0).is_err());
        assert!(Bounds::new(DVec2::ZERO, DVec2::new(f64::INFINITY, 1.0)).is_err());

        let b = Bounds::from_size(DVec2::new(-1.0, 2.0), 3.0, 4.0).unwrap();
        assert_eq!(b.max, DVec2::new(2.0, 6.0));
        assert_eq!(b.width(), 3.0);
        assert_eq!(b.height(), 4.0);
    }

    #[test]
    fn test_right_wall_bounce() {
        let bounds = centered_box();
        let mut disk = Disk::new(DVec2::new(0.51, 0.0), DVec2::new(1.0, 0.0), 0.05, 0.05).unwrap();
        let contact = disk.resolve_wall(&bounds);

        assert!(contact.x_max);
        assert!(!contact.x_min && !contact.y_min && !contact.y_max);
        assert_relative_eq!(disk.position.x, 0.45, epsilon = 1e-12);
        assert_eq!(disk.velocity, DVec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_min_wall_respects_offset_origin() {
        // Clamp is relative to the wall, not the coordinate origin
        let bounds = Bounds::from_size(DVec2::new(2.0, 2.0), 1.0, 1.0).unwrap();
        let mut disk = Disk::new(DVec2::new(2.05, 2.5), DVec2::new(-1.0, 0.0), 0.1, 0.1).unwrap();
        disk.resolve_wall(&bounds);

        assert_relative_eq!(disk.position.x, 2.1, epsilon = 1e-12);
        assert_eq!(disk.velocity.x, 1.0);
    }

    #[test]
    fn test_corner_flips_both_axes() {
        let bounds = centered_box();
        let mut disk = Disk::new(DVec2::new(-0.49, 0.49), DVec2::new(-1.0, 2.0), 0.05, 0.05).unwrap();
        let contact = disk.resolve_wall(&bounds);

        assert!(contact.x_min && contact.y_max);
        assert_eq!(disk.velocity, DVec2::new(1.0, -2.0));
        assert_relative_eq!(disk.position.x, -0.45, epsilon = 1e-12);
        assert_relative_eq!(disk.position.y, 0.45, epsilon = 1e-12);
    }

    #[test]
    fn test_no_contact_inside() {
        let bounds = centered_box();
        let mut disk = Disk::new(DVec2::new(0.1, -0.2), DVec2::new(0.3, 0.4), 0.05, 0.05).unwrap();
        let before = disk;
        let contact = disk.resolve_wall(&bounds);

        assert!(!contact.any());
        assert_eq!(disk, before);
    }

    #[test]
    fn test_wall_bounce_preserves_energy() {
        let bounds = centered_box();
        let mut disk = Disk::new(DVec2::new(0.6, -0.6), DVec2::new(0.7, -0.2), 0.05, 0.05).unwrap();
        let before = disk.kinetic_energy();
        disk.resolve_wall(&bounds);
        assert_relative_eq!(disk.kinetic_energy(), before);
    }

    #[test]
    fn test_confine() {
        let bounds = centered_box();
        let mut disk = Disk::new(DVec2::new(0.48, -0.7), DVec2::new(1.0, -1.0), 0.05, 0.05).unwrap();
        assert!(disk.confine(&bounds));
        assert!(bounds.contains_disk(disk.position, disk.radius(), 1e-12));
        // Velocity untouched
        assert_eq!(disk.velocity, DVec2::new(1.0, -1.0));

        assert!(!disk.confine(&bounds));
    }

    #[test]
    fn test_fits() {
        let bounds = Bounds::from_size(DVec2::ZERO, 1.0, 0.5).unwrap();
        assert!(bounds.fits(0.25));
        assert!(!bounds.fits(0.3));
    }

    #[test]
    fn test_reaches() {
        let bounds = centered_box();
        assert!(bounds.reaches(DVec2::ZERO, 0.05));
        assert!(bounds.reaches(DVec2::new(0.51, 0.0), 0.05));
        assert!(bounds.reaches(DVec2::new(-0.54, 0.54), 0.05));
        assert!(!bounds.reaches(DVec2::new(0.6, 0.0), 0.05));
        assert!(!bounds.reaches(DVec2::new(0.0, -0.6), 0.05));
    }
}
