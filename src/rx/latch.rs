use tracing::debug;

/// Output stage: a stable byte register plus the one-tick valid pulse.
///
/// The two actions are independent equality tests against the frame counter.
/// With the default constants `valid_offset` (889) precedes `data_offset`
/// (890), so the pulse fires one tick before the byte is committed: a
/// consumer that reads the byte only while `valid` is high observes the
/// *previous* frame's byte. That relationship comes straight from the
/// original timing constants and is kept as-is — sample the byte on the tick
/// after the pulse, or use the commit event that
/// [`UartRx::tick`](crate::UartRx::tick) returns.
#[derive(Debug)]
pub struct OutputLatch {
    valid_offset: u32,
    data_offset: u32,
    byte: u8,
    valid: bool,
}

impl OutputLatch {
    pub fn new(valid_offset: u32, data_offset: u32) -> Self {
        Self {
            valid_offset,
            data_offset,
            byte: 0,
            valid: false,
        }
    }

    /// Last committed byte. Overwritten without warning on the next frame.
    pub fn byte(&self) -> u8 {
        self.byte
    }

    /// High for exactly one tick per completed frame.
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// Evaluate both latches against the pre-tick counter and the pre-tick
    /// capture buffer. Returns `Some(byte)` on the commit tick.
    pub fn tick(&mut self, counter: u32, buffer: u8) -> Option<u8> {
        self.valid = counter == self.valid_offset;
        if counter == self.data_offset {
            self.byte = buffer;
            debug!("byte committed: {:#04x}", buffer);
            Some(buffer)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.byte = 0;
        self.valid = false;
    }
}
