//! Initial disk layout
//!
//! Produces valid starting positions, radii and velocities. All randomness
//! comes from the caller's seeded RNG so a scenario is reproducible from its
//! seed alone.

use glam::DVec2;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sim::Bounds;

/// Disk radius: a fixed value or uniform in `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RadiusSpec {
    Fixed(f64),
    Range { min: f64, max: f64 },
}

impl RadiusSpec {
    pub fn validate(&self) -> Result<()> {
        match *self {
            RadiusSpec::Fixed(r) if r.is_finite() && r > 0.0 => Ok(()),
            RadiusSpec::Range { min, max }
                if min.is_finite() && max.is_finite() && 0.0 < min && min < max =>
            {
                Ok(())
            }
            other => Err(Error::InvalidParam(format!("bad radius spec {other:?}"))),
        }
    }

    /// Largest radius this spec can produce
    pub fn max(&self) -> f64 {
        match *self {
            RadiusSpec::Fixed(r) => r,
            RadiusSpec::Range { max, .. } => max,
        }
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        match *self {
            RadiusSpec::Fixed(r) => r,
            RadiusSpec::Range { min, max } => rng.random_range(min..max),
        }
    }
}

/// Velocity with each component uniform in `[-max_speed, max_speed)`
pub fn random_velocity<R: Rng>(rng: &mut R, max_speed: f64) -> DVec2 {
    if max_speed <= 0.0 {
        return DVec2::ZERO;
    }
    DVec2::new(
        rng.random_range(-max_speed..max_speed),
        rng.random_range(-max_speed..max_speed),
    )
}

/// Every cell of the smallest square grid holding `count` disks
///
/// Cells are evenly spaced with one spacing of margin to each wall, in
/// row-major order starting at the lower-left corner.
pub fn grid_cells(count: usize, bounds: &Bounds) -> Vec<DVec2> {
    if count == 0 {
        return Vec::new();
    }
    let side = grid_side(count);
    let spacing = grid_spacing(side, bounds);

    let mut cells = Vec::with_capacity(side * side);
    for row in 1..=side {
        for col in 1..=side {
            cells.push(bounds.min + spacing * DVec2::new(col as f64, row as f64));
        }
    }
    cells
}

/// Choose `count` distinct grid cells at random
///
/// Fails if disks of `max_radius` in neighbouring cells would touch.
pub fn grid_placement<R: Rng>(
    rng: &mut R,
    count: usize,
    bounds: &Bounds,
    max_radius: f64,
) -> Result<Vec<DVec2>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    let side = grid_side(count);
    let spacing = grid_spacing(side, bounds);
    let gap = spacing.x.min(spacing.y);
    if gap <= 2.0 * max_radius {
        return Err(Error::Layout(format!(
            "{count} disks of radius {max_radius} overlap on a {side}x{side} grid (spacing {gap})"
        )));
    }

    let mut cells = grid_cells(count, bounds);
    cells.shuffle(rng);
    cells.truncate(count);
    log::debug!("grid placement: {count} disks on {side}x{side} grid, spacing {gap:.4}");
    Ok(cells)
}

/// Rejection-sample non-overlapping, fully contained centers for `radii`
pub fn scatter_placement<R: Rng>(
    rng: &mut R,
    radii: &[f64],
    bounds: &Bounds,
    max_attempts: u32,
) -> Result<Vec<DVec2>> {
    let mut placed: Vec<(DVec2, f64)> = Vec::with_capacity(radii.len());

    for (i, &r) in radii.iter().enumerate() {
        if !bounds.fits(r) {
            return Err(Error::Layout(format!("disk {} of radius {r} does not fit", i + 1)));
        }
        let lo = bounds.min + DVec2::splat(r);
        let hi = bounds.max - DVec2::splat(r);

        let mut found = None;
        for _ in 0..max_attempts {
            let candidate = DVec2::new(sample_span(rng, lo.x, hi.x), sample_span(rng, lo.y, hi.y));
            let clear = placed
                .iter()
                .all(|&(p, pr)| p.distance(candidate) > pr + r);
            if clear {
                found = Some(candidate);
                break;
            }
        }

        match found {
            Some(p) => placed.push((p, r)),
            None => {
                return Err(Error::Layout(format!(
                    "no free spot for disk {} after {max_attempts} attempts",
                    i + 1
                )));
            }
        }
    }

    Ok(placed.into_iter().map(|(p, _)| p).collect())
}

fn sample_span<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if lo < hi { rng.random_range(lo..hi) } else { lo }
}

fn grid_side(count: usize) -> usize {
    let mut side = 1;
    while side * side < count {
        side += 1;
    }
    side
}

fn grid_spacing(side: usize, bounds: &Bounds) -> DVec2 {
    DVec2::new(bounds.width(), bounds.height()) / (side + 1) as f64
}
