//! Arena: the bounded container plus its disks, advanced one fixed step at a time

use glam::DVec2;

use super::collision::{PairOutcome, resolve_pair};
use super::disk::Disk;
use super::record::{StepRecord, header};
use super::wall::Bounds;
use crate::error::{Error, Result};

/// Everything one `step()` produced
#[derive(Debug, Clone)]
pub struct StepReport {
    /// Disk state after walls, before pairwise collisions
    pub record: StepRecord,
    /// Total kinetic energy at the end of the step (sum of m * |v|^2)
    pub energy: f64,
    /// Disks that touched at least one wall
    pub wall_contacts: usize,
    /// Pairs separated and updated
    pub resolved_pairs: usize,
    /// Pairs skipped because their centers coincided
    pub coincident_pairs: usize,
    /// Pairs rolled back after producing non-finite state
    pub reverted_pairs: usize,
    /// Disks clamped back inside after collision pushes
    pub confined: usize,
}

#[derive(Debug, Default, Clone, Copy)]
struct SweepCounts {
    resolved: usize,
    coincident: usize,
    reverted: usize,
}

/// The simulation domain
///
/// Disk order is fixed for the whole run and defines both the log column
/// order and the pairwise sweep order.
#[derive(Debug, Clone)]
pub struct Arena {
    disks: Vec<Disk>,
    bounds: Bounds,
    time_step: f64,
    steps: u64,
}

impl Arena {
    pub fn new(disks: Vec<Disk>, bounds: Bounds, time_step: f64) -> Result<Self> {
        if !(time_step.is_finite() && time_step > 0.0) {
            return Err(Error::InvalidTimeStep(time_step));
        }
        for (i, disk) in disks.iter().enumerate() {
            if !bounds.fits(disk.radius()) {
                return Err(Error::InvalidDisk(format!(
                    "disk {} of radius {} does not fit in a {} x {} box",
                    i + 1,
                    disk.radius(),
                    bounds.width(),
                    bounds.height()
                )));
            }
            if !bounds.reaches(disk.position, disk.radius()) {
                return Err(Error::InvalidDisk(format!(
                    "disk {} of radius {} centered at {} lies outside {} .. {}",
                    i + 1,
                    disk.radius(),
                    disk.position,
                    bounds.min,
                    bounds.max
                )));
            }
        }

        log::info!(
            "Arena: {} disks in {} .. {}, dt={}",
            disks.len(),
            bounds.min,
            bounds.max,
            time_step
        );

        Ok(Self {
            disks,
            bounds,
            time_step,
            steps: 0,
        })
    }

    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Completed steps so far
    pub fn step_count(&self) -> u64 {
        self.steps
    }

    /// Simulated time after the completed steps
    pub fn elapsed_time(&self) -> f64 {
        self.time_step * self.steps as f64
    }

    /// Log header matching this arena's records
    pub fn header(&self) -> String {
        header(self.disks.len())
    }

    /// Sum of m * |v|^2 over all disks
    pub fn kinetic_energy(&self) -> f64 {
        self.disks.iter().map(Disk::kinetic_energy).sum()
    }

    pub fn momentum(&self) -> DVec2 {
        self.disks.iter().map(Disk::momentum).sum()
    }

    /// Advance the arena by one fixed timestep
    pub fn step(&mut self) -> StepReport {
        let time = self.elapsed_time();
        let dt = self.time_step;

        let mut wall_contacts = 0;
        for disk in &mut self.disks {
            disk.integrate(dt);
            if disk.resolve_wall(&self.bounds).any() {
                wall_contacts += 1;
            }
        }

        let record = StepRecord::capture(time, &self.disks);

        let sweep = self.sweep();

        // Collision pushes may shove a disk through a wall
        let bounds = self.bounds;
        let confined = self
            .disks
            .iter_mut()
            .map(|d| d.confine(&bounds))
            .filter(|&moved| moved)
            .count();

        self.steps += 1;

        let energy = self.kinetic_energy();
        log::debug!(
            "step {} t={:.4}: walls={} pairs={} energy={:.6}",
            self.steps,
            self.elapsed_time(),
            wall_contacts,
            sweep.resolved,
            energy
        );

        StepReport {
            record,
            energy,
            wall_contacts,
            resolved_pairs: sweep.resolved,
            coincident_pairs: sweep.coincident,
            reverted_pairs: sweep.reverted,
            confined,
        }
    }

    /// Resolve every unordered pair in order (i ascending, then j > i ascending)
    ///
    /// Sequential: a disk updated by an earlier pair feeds its new state into
    /// later pairs of the same sweep.
    fn sweep(&mut self) -> SweepCounts {
        let mut counts = SweepCounts::default();
        let n = self.disks.len();
        for i in 0..n {
            for j in (i + 1)..n {
                match resolve_pair(&mut self.disks, i, j) {
                    PairOutcome::Apart => {}
                    PairOutcome::Resolved { .. } => counts.resolved += 1,
                    PairOutcome::Coincident => counts.coincident += 1,
                    PairOutcome::Reverted => counts.reverted += 1,
                }
            }
        }
        counts
    }
}
