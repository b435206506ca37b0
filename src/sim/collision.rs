//! Pairwise disk-disk collision detection and response
//!
//! Resolution happens in two phases that must not interleave:
//! 1. De-penetration: both disks are pushed apart along the line of centers.
//! 2. Velocity exchange: the 1D elastic collision formula is applied along the
//!    line of centers, computed from the already-separated positions.
//!
//! Each disk is displaced by the full overlap regardless of mass. The velocity
//! update conserves momentum and kinetic energy exactly in exact arithmetic.

use super::disk::Disk;

/// What happened when a pair was resolved
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairOutcome {
    /// Centers farther apart than the sum of radii; nothing changed
    Apart,
    /// Disks were separated and exchanged momentum
    Resolved { overlap: f64 },
    /// Centers coincide exactly; the pair was skipped for this step
    Coincident,
    /// The update produced non-finite state and was rolled back
    Reverted,
}

impl PairOutcome {
    pub fn is_contact(&self) -> bool {
        !matches!(self, PairOutcome::Apart)
    }
}

/// True iff the disks touch or overlap (tangency counts)
#[inline]
pub fn detect(a: &Disk, b: &Disk) -> bool {
    a.position.distance(b.position) <= a.radius() + b.radius()
}

/// Detect and resolve a collision between two disks
pub fn resolve(a: &mut Disk, b: &mut Disk) -> PairOutcome {
    let reach = a.radius() + b.radius();
    let offset = a.position - b.position;
    let distance = offset.length();

    if distance > reach {
        return PairOutcome::Apart;
    }
    if distance == 0.0 {
        log::warn!(
            "coincident disk centers at {}, skipping pair this step",
            a.position
        );
        return PairOutcome::Coincident;
    }

    let before = (*a, *b);

    // Phase 1: push apart along b -> a
    let overlap = reach - distance;
    let shift = offset * (overlap / distance);
    a.position += shift;
    b.position -= shift;

    // Phase 2: both deltas from the separated positions, then apply both
    let total_mass = a.mass() + b.mass();
    let dp = b.position - a.position;
    let dv = b.velocity - a.velocity;
    let dist_sq = dp.length_squared();

    let dv_a = dp * (2.0 * b.mass() / total_mass * dv.dot(dp) / dist_sq);
    let dv_b = -dp * (2.0 * a.mass() / total_mass * (-dv).dot(-dp) / dist_sq);
    a.velocity += dv_a;
    b.velocity += dv_b;

    if !a.is_finite() || !b.is_finite() {
        log::warn!(
            "non-finite state resolving disks at {} and {}, reverting pair",
            before.0.position,
            before.1.position
        );
        *a = before.0;
        *b = before.1;
        return PairOutcome::Reverted;
    }

    PairOutcome::Resolved { overlap }
}

/// Resolve the pair `(i, j)` of a disk slice
///
/// Indices must satisfy `i < j < disks.len()`. Any other pair is left
/// untouched and reported as `Apart`.
pub fn resolve_pair(disks: &mut [Disk], i: usize, j: usize) -> PairOutcome {
    if i >= j || j >= disks.len() {
        log::warn!("invalid pair ({i}, {j}) for {} disks", disks.len());
        return PairOutcome::Apart;
    }
    let (head, tail) = disks.split_at_mut(j);
    resolve(&mut head[i], &mut tail[0])
}
