use crate::utils::consts;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Data bits per frame, sampled LSB first.
pub const DATA_BITS: usize = 8;

/// Timing constants for one frame, fixed at construction.
///
/// All values are tick counts measured from the qualified start edge
/// (`frame_counter == 1` on the tick after the edge). The invariant is
///
/// `0 < capture_offsets[0] < … < capture_offsets[7] < valid_offset
///  <= data_offset < frame_period`
///
/// and is enforced by [`RxConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RxConfig {
    /// Total ticks per frame: one start-bit period plus eight data-bit
    /// periods under the default timing.
    pub frame_period: u32,
    /// Counter value at which each data bit is sampled, one per bit,
    /// strictly increasing. Each sits at the temporal midpoint of its bit
    /// window so edge jitter from transmitter clock mismatch is rejected.
    pub capture_offsets: [u32; DATA_BITS],
    /// Counter value of the one-tick valid pulse.
    pub valid_offset: u32,
    /// Counter value at which the output byte is committed.
    ///
    /// The defaults put this one tick after `valid_offset`, so the valid
    /// pulse leads the commit — a configuration hazard inherited from the
    /// original timing constants and kept as-is. See `rx::latch`.
    pub data_offset: u32,
}

impl Default for RxConfig {
    /// The original constants: 900 ticks per frame, 100 ticks per bit,
    /// mid-bit samples at 149, 249, …, 849, valid at 889, data at 890.
    fn default() -> Self {
        Self {
            frame_period: consts::FRAME_PERIOD,
            capture_offsets: consts::CAPTURE_OFFSETS,
            valid_offset: consts::VALID_OFFSET,
            data_offset: consts::DATA_OFFSET,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("capture offsets must be nonzero and strictly increasing (offset[{index}] = {value})")]
    CaptureOrder { index: usize, value: u32 },
    #[error("valid offset {valid} must lie after the last capture offset {last_capture}")]
    ValidTooEarly { valid: u32, last_capture: u32 },
    #[error("data offset {data} must not precede valid offset {valid}")]
    DataBeforeValid { data: u32, valid: u32 },
    #[error("data offset {data} must lie inside the frame period {period}")]
    DataOutsideFrame { data: u32, period: u32 },
}

impl RxConfig {
    /// Timing for an arbitrary oversampling ratio, keeping the default
    /// layout: mid-bit capture points, valid pulse two ticks before the end
    /// of the frame, data commit one tick before. The valid-before-data
    /// relationship of the default constants is preserved.
    ///
    /// `ticks_per_bit` below 3 cannot satisfy the offset invariant and is
    /// rejected by the validation in [`UartRx::new`](crate::UartRx::new).
    pub fn with_ticks_per_bit(ticks_per_bit: u32) -> Self {
        let frame_period = 9 * ticks_per_bit;
        let mut capture_offsets = [0u32; DATA_BITS];
        for (bit, offset) in capture_offsets.iter_mut().enumerate() {
            // midpoint of the bit window, matching 149, 249, ... at 100:1
            *offset = (bit as u32 + 1) * ticks_per_bit + ticks_per_bit / 2 - 1;
        }
        Self {
            frame_period,
            capture_offsets,
            valid_offset: frame_period - 2,
            data_offset: frame_period - 1,
        }
    }

    /// Check the offset ordering invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut previous = 0u32;
        for (index, &value) in self.capture_offsets.iter().enumerate() {
            if value <= previous {
                return Err(ConfigError::CaptureOrder { index, value });
            }
            previous = value;
        }
        let last_capture = self.capture_offsets[DATA_BITS - 1];
        if self.valid_offset <= last_capture {
            return Err(ConfigError::ValidTooEarly {
                valid: self.valid_offset,
                last_capture,
            });
        }
        if self.data_offset < self.valid_offset {
            return Err(ConfigError::DataBeforeValid {
                data: self.data_offset,
                valid: self.valid_offset,
            });
        }
        if self.data_offset >= self.frame_period {
            return Err(ConfigError::DataOutsideFrame {
                data: self.data_offset,
                period: self.frame_period,
            });
        }
        Ok(())
    }
}
