//! CSV writer for step records

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::sim::StepRecord;

/// Writes the header once, then appends one line per record
pub struct CsvLog<W: Write> {
    out: W,
    rows: u64,
}

impl CsvLog<BufWriter<File>> {
    /// Create (or truncate) `path` and write the header
    pub fn create<P: AsRef<Path>>(path: P, header: &str) -> Result<Self> {
        let file = File::create(path.as_ref())?;
        log::info!("Logging simulation data to {}", path.as_ref().display());
        Self::new(BufWriter::new(file), header)
    }
}

impl<W: Write> CsvLog<W> {
    pub fn new(mut out: W, header: &str) -> Result<Self> {
        writeln!(out, "{header}")?;
        Ok(Self { out, rows: 0 })
    }

    pub fn append(&mut self, record: &StepRecord) -> Result<()> {
        writeln!(self.out, "{record}")?;
        self.rows += 1;
        Ok(())
    }

    /// Rows written after the header
    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Arena, Bounds, Disk, header};
    use glam::DVec2;

    #[test]
    fn test_header_then_rows() {
        let bounds = Bounds::from_size(DVec2::ZERO, 1.0, 1.0).unwrap();
        let disk = Disk::new(DVec2::new(0.5, 0.5), DVec2::new(0.5, 0.0), 0.1, 0.1).unwrap();
        let mut arena = Arena::new(vec![disk], bounds, 0.5).unwrap();

        let mut log = CsvLog::new(Vec::new(), &arena.header()).unwrap();
        for _ in 0..2 {
            let report = arena.step();
            log.append(&report.record).unwrap();
        }
        assert_eq!(log.rows(), 2);

        let text = String::from_utf8(log.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec![header(1).as_str(), "0,0.75,0.5,0.5,0", "0.5,0.9,0.5,-0.5,0"]);
    }

    #[test]
    fn test_create_truncates_file() {
        let path = std::env::temp_dir().join(format!("disk_sim_log_{}.csv", std::process::id()));
        std::fs::write(&path, "stale contents\n").unwrap();

        let mut log = CsvLog::create(&path, "T").unwrap();
        log.append(&StepRecord { time: 0.0, states: vec![] }).unwrap();
        log.flush().unwrap();
        drop(log);

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "T\n0\n");
        std::fs::remove_file(&path).unwrap();
    }
}
