//! On-screen counters

/// Text overlays drawn over the arena
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    /// `Time: 1.23 s`, absent when the timer is hidden
    pub timer: Option<String>,
    /// `Energy: 0.45 J`
    pub energy: String,
}

impl Hud {
    pub fn new(elapsed: f64, energy: f64, timer_visible: bool) -> Self {
        Self {
            timer: timer_visible.then(|| format!("Time: {elapsed:.2} s")),
            energy: format!("Energy: {energy:.2} J"),
        }
    }

    /// Visible lines, top to bottom
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.timer
            .as_deref()
            .into_iter()
            .chain(std::iter::once(self.energy.as_str()))
    }
}
