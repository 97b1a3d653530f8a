use tracing::debug;

/// Frame timing counter, the receiver's state machine.
///
/// `count() == 0` is idle; any other value is the number of ticks elapsed
/// since the qualified start edge. Frame completion is purely time-based:
/// the counter wraps to idle after `period` ticks with no stop-bit check,
/// so a spurious start edge still runs a full bogus frame.
#[derive(Debug)]
pub struct FrameTimer {
    period: u32,
    counter: u32,
}

impl FrameTimer {
    pub fn new(period: u32) -> Self {
        Self { period, counter: 0 }
    }

    /// Ticks elapsed since the start edge; 0 while idle.
    pub fn count(&self) -> u32 {
        self.counter
    }

    pub fn is_idle(&self) -> bool {
        self.counter == 0
    }

    /// Advance one tick. `start_edge` is the qualified falling edge for this
    /// tick; it is only honored while idle.
    pub fn tick(&mut self, start_edge: bool) {
        self.counter = if self.counter == 0 {
            if start_edge {
                debug!("start edge qualified, frame timing begins");
                1
            } else {
                0
            }
        } else if self.counter == self.period {
            0
        } else {
            self.counter + 1
        };
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_idle_without_start_edge() {
        let mut timer = FrameTimer::new(900);
        for _ in 0..5000 {
            timer.tick(false);
            assert!(timer.is_idle());
        }
    }

    #[test]
    fn counts_one_full_frame_then_returns_to_idle() {
        let mut timer = FrameTimer::new(900);
        timer.tick(true);
        for expected in 1..=900 {
            assert_eq!(timer.count(), expected);
            // mid-frame edges are ignored
            timer.tick(true);
        }
        assert!(timer.is_idle());
    }

    #[test]
    fn rearms_immediately_after_wrap() {
        let mut timer = FrameTimer::new(3);
        timer.tick(true);
        timer.tick(false);
        timer.tick(false);
        timer.tick(false); // counter was 3 == period, wraps
        assert!(timer.is_idle());
        timer.tick(true);
        assert_eq!(timer.count(), 1);
    }

    #[test]
    fn reset_drops_frame_in_progress() {
        let mut timer = FrameTimer::new(900);
        timer.tick(true);
        for _ in 0..400 {
            timer.tick(false);
        }
        timer.reset();
        assert!(timer.is_idle());
    }
}
