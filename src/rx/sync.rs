/// One-tick delay line for start-edge qualification.
///
/// Holds the line level observed one tick ago so a falling edge can be
/// declared from a `(previous, current)` pair instead of a single sample.
/// This is the only filtering the receiver does: a glitch that lasts a full
/// tick is indistinguishable from a genuine start bit.
#[derive(Debug, Default)]
pub struct LineSync {
    previous: bool,
}

impl LineSync {
    pub fn new() -> Self {
        Self { previous: false }
    }

    /// Level seen one tick ago.
    pub fn previous(&self) -> bool {
        self.previous
    }

    /// True when the line fell between the previous tick and now.
    pub fn falling_edge(&self, line: bool) -> bool {
        self.previous && !line
    }

    /// Shift the current raw level into the delay slot.
    pub fn tick(&mut self, line: bool) {
        self.previous = line;
    }

    pub fn reset(&mut self) {
        self.previous = false;
    }
}
