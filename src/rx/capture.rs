use super::config::DATA_BITS;
use tracing::trace;

/// Mid-bit sampler.
///
/// Writes the raw line level into bit `i` of the byte buffer on the tick
/// where the frame counter matches `offsets[i]`. All other bits keep their
/// value, and the buffer persists across frames — a dropped byte is simply
/// overwritten, never flagged.
#[derive(Debug)]
pub struct BitCapture {
    offsets: [u32; DATA_BITS],
    buffer: u8,
}

impl BitCapture {
    pub fn new(offsets: [u32; DATA_BITS]) -> Self {
        Self { offsets, buffer: 0 }
    }

    pub fn byte(&self) -> u8 {
        self.buffer
    }

    /// Sample the line if `counter` sits at one of the capture offsets.
    /// Bit 0 is sampled first (LSB first on the wire). The offsets are
    /// validated nonzero, so the idle counter value never matches.
    pub fn tick(&mut self, counter: u32, line: bool) {
        if let Some(bit) = self.offsets.iter().position(|&offset| offset == counter) {
            if line {
                self.buffer |= 1 << bit;
            } else {
                self.buffer &= !(1 << bit);
            }
            trace!(
                "bit {} sampled {} at tick {}, buffer {:#04x}",
                bit, line as u8, counter, self.buffer
            );
        }
    }

    pub fn reset(&mut self) {
        self.buffer = 0;
    }
}
