/// Log level (overridable via RUST_LOG)
pub const LOG_LEVEL: &str = "info";

// ============================================================================
// Default line timing
// ============================================================================

/// Ticks of the local timing source per transmitted bit (100:1 oversampling,
/// e.g. 100 MHz ticks decode a 1 Mbps line).
pub const TICKS_PER_BIT: u32 = 100;

/// Ticks per frame: one start bit plus eight data bits.
pub const FRAME_PERIOD: u32 = 9 * TICKS_PER_BIT;

/// Counter values at which data bits 0..=7 are sampled, each the temporal
/// midpoint of its bit window. Bit 0 (LSB) arrives first.
pub const CAPTURE_OFFSETS: [u32; 8] = [149, 249, 349, 449, 549, 649, 749, 849];

/// Counter value of the one-tick valid pulse.
pub const VALID_OFFSET: u32 = 889;

/// Counter value at which the output byte is committed. One tick *after*
/// VALID_OFFSET; see `rx::latch` for the consumer-visible consequence.
pub const DATA_OFFSET: u32 = 890;

/// Sample rate stamped into generated WAV captures (one sample per tick).
pub const WAV_SAMPLE_RATE: u32 = 1_000_000;
