//! Per-step state snapshot in the log row format
//!
//! Header: `T,X_1,Y_1,Vx_1,Vy_1,...,X_n,Y_n,Vx_n,Vy_n` (1-based disk numbers).
//! Rows hold the elapsed time followed by every disk's position and velocity,
//! comma-separated, using the default `f64` display.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::disk::Disk;

/// Column header for `disk_count` disks
pub fn header(disk_count: usize) -> String {
    let mut line = String::from("T");
    for i in 1..=disk_count {
        line.push_str(&format!(",X_{i},Y_{i},Vx_{i},Vy_{i}"));
    }
    line
}

/// One log row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Elapsed time at the start of the step
    pub time: f64,
    /// `[x, y, vx, vy]` per disk, in collection order
    pub states: Vec<[f64; 4]>,
}

impl StepRecord {
    pub fn capture(time: f64, disks: &[Disk]) -> Self {
        Self {
            time,
            states: disks.iter().map(Disk::state).collect(),
        }
    }
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time)?;
        for [x, y, vx, vy] in &self.states {
            write!(f, ",{x},{y},{vx},{vy}")?;
        }
        Ok(())
    }
}
