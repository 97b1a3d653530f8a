use super::capture::BitCapture;
use super::config::{ConfigError, RxConfig};
use super::latch::OutputLatch;
use super::sync::LineSync;
use super::timing::FrameTimer;

/// The assembled receiver.
///
/// One [`tick`](UartRx::tick) call per period of the local timing source.
/// Every stage reads a snapshot of pre-tick state, so the next state is a
/// pure function of the current state and the raw line level — the order of
/// the stage updates inside `tick` cannot leak a same-tick write into
/// another stage's read.
pub struct UartRx {
    config: RxConfig,
    sync: LineSync,
    timer: FrameTimer,
    capture: BitCapture,
    latch: OutputLatch,
}

impl UartRx {
    pub fn new(config: RxConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            sync: LineSync::new(),
            timer: FrameTimer::new(config.frame_period),
            capture: BitCapture::new(config.capture_offsets),
            latch: OutputLatch::new(config.valid_offset, config.data_offset),
            config,
        })
    }

    /// Receiver with the original timing constants (900 ticks per frame,
    /// 100 ticks per bit).
    pub fn new_default() -> Self {
        Self::new(RxConfig::default()).expect("default config satisfies the offset invariant")
    }

    pub fn config(&self) -> &RxConfig {
        &self.config
    }

    /// Last committed byte. Only one byte of capacity exists: a byte not
    /// consumed before the next frame completes is silently overwritten.
    pub fn data(&self) -> u8 {
        self.latch.byte()
    }

    /// One-tick pulse flagging a freshly received byte. With the default
    /// offsets it leads the data commit by one tick; see `rx::latch`.
    pub fn valid(&self) -> bool {
        self.latch.valid()
    }

    /// Ticks elapsed since the start edge; 0 while idle.
    pub fn frame_counter(&self) -> u32 {
        self.timer.count()
    }

    /// Byte accumulated so far in the current (or last) frame.
    pub fn capture_buffer(&self) -> u8 {
        self.capture.byte()
    }

    /// Advance the receiver by one tick, feeding it the raw line level.
    ///
    /// Returns `Some(byte)` on the tick where the output byte is committed
    /// and `None` on every other tick, so batch decoding does not have to
    /// reason about the valid/data offset hazard.
    pub fn tick(&mut self, line: bool) -> Option<u8> {
        // Pre-tick snapshot; every stage below reads only these.
        let counter = self.timer.count();
        let buffer = self.capture.byte();
        let start_edge = self.sync.falling_edge(line);

        let committed = self.latch.tick(counter, buffer);
        self.capture.tick(counter, line);
        self.timer.tick(start_edge);
        self.sync.tick(line);
        committed
    }

    /// Zero every state field. Models the asynchronous initialization
    /// input: callable between any two ticks, drops any frame in progress
    /// with no partial-data recovery.
    pub fn reset(&mut self) {
        self.sync.reset();
        self.timer.reset();
        self.capture.reset();
        self.latch.reset();
    }

    /// Tick once per sample and collect the committed bytes.
    pub fn process_samples(&mut self, samples: &[bool]) -> Vec<u8> {
        samples.iter().filter_map(|&level| self.tick(level)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::LineEncoder;

    /// Drive the receiver tick by tick and record observable events.
    fn drive(rx: &mut UartRx, samples: &[bool]) -> (Vec<usize>, Vec<(usize, u8)>) {
        let mut valid_ticks = Vec::new();
        let mut commits = Vec::new();
        for (index, &level) in samples.iter().enumerate() {
            if let Some(byte) = rx.tick(level) {
                commits.push((index, byte));
            }
            if rx.valid() {
                valid_ticks.push(index);
            }
        }
        (valid_ticks, commits)
    }

    #[test]
    fn idle_line_keeps_the_receiver_idle() {
        let mut rx = UartRx::new_default();
        for _ in 0..10_000 {
            assert_eq!(rx.tick(true), None);
            assert_eq!(rx.frame_counter(), 0);
            assert!(!rx.valid());
        }
    }

    #[test]
    fn decodes_0x55_with_the_original_constants() {
        let encoder = LineEncoder::new(100);
        let mut rx = UartRx::new_default();

        let mut samples = encoder.idle(100);
        samples.extend(encoder.encode_frame(0x55));
        let (valid_ticks, commits) = drive(&mut rx, &samples);

        // start edge at sample 100, so counter value N is processed at
        // sample 100 + N: valid at 989, commit at 990
        assert_eq!(valid_ticks, vec![100 + 889]);
        assert_eq!(commits, vec![(100 + 890, 0x55)]);
        assert_eq!(rx.data(), 0x55);
    }

    #[test]
    fn valid_pulse_leads_the_data_commit() {
        let encoder = LineEncoder::new(100);
        let mut rx = UartRx::new_default();

        let first = encoder.encode_bytes(&[0xa5], 0);
        rx.process_samples(&first);
        assert_eq!(rx.data(), 0xa5);

        // during the second frame's valid tick the byte register still
        // holds the first frame's byte
        let second = encoder.encode_bytes(&[0x3c], 0);
        for &level in &second {
            let committed = rx.tick(level);
            if rx.valid() {
                assert_eq!(committed, None);
                assert_eq!(rx.data(), 0xa5);
            }
        }
        assert_eq!(rx.data(), 0x3c);
    }

    #[test]
    fn one_valid_pulse_per_frame_across_many_frames() {
        let encoder = LineEncoder::new(100);
        let mut rx = UartRx::new_default();
        let payload = [0x00, 0xff, 0x81, 0x7e, 0x55];
        let samples = encoder.encode_bytes(&payload, 37);
        let (valid_ticks, commits) = drive(&mut rx, &samples);

        assert_eq!(valid_ticks.len(), payload.len());
        assert_eq!(
            commits.iter().map(|&(_, byte)| byte).collect::<Vec<_>>(),
            payload
        );
        // the pulse is never two ticks wide
        for pair in valid_ticks.windows(2) {
            assert!(pair[1] - pair[0] > 1);
        }
    }

    #[test]
    fn reset_mid_frame_zeroes_every_state_field() {
        let encoder = LineEncoder::new(100);
        let mut rx = UartRx::new_default();

        rx.process_samples(&encoder.encode_bytes(&[0xff], 0));
        assert_eq!(rx.data(), 0xff);

        // abandon a frame half way through
        let samples = encoder.encode_bytes(&[0xff], 0);
        rx.process_samples(&samples[..500]);
        assert_ne!(rx.frame_counter(), 0);

        rx.reset();
        assert_eq!(rx.frame_counter(), 0);
        assert_eq!(rx.capture_buffer(), 0);
        assert_eq!(rx.data(), 0);
        assert!(!rx.valid());

        // and the receiver still decodes the next frame normally
        let decoded = rx.process_samples(&encoder.encode_bytes(&[0x2b], 0));
        assert_eq!(decoded, vec![0x2b]);
    }

    #[test]
    fn single_tick_glitch_produces_a_full_bogus_frame() {
        let encoder = LineEncoder::new(100);
        let mut rx = UartRx::new_default();
        let mut samples = encoder.idle(50);
        samples.extend(encoder.glitch(1)); // one-tick glitch at sample 50
        samples.extend(encoder.idle(1000));

        let (valid_ticks, commits) = drive(&mut rx, &samples);

        // no debounce: the glitch runs a whole frame and reports a byte
        assert_eq!(valid_ticks, vec![50 + 889]);
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].0, 50 + 890);
    }

    #[test]
    fn overrun_silently_overwrites_the_unread_byte() {
        let encoder = LineEncoder::new(100);
        let mut rx = UartRx::new_default();
        let samples = encoder.encode_bytes(&[0x11, 0x22], 0);
        rx.process_samples(&samples);
        // the first byte was never consumed; no trace of it remains
        assert_eq!(rx.data(), 0x22);
    }

    #[test]
    fn low_line_out_of_reset_is_not_a_start_edge() {
        let mut rx = UartRx::new_default();
        // the synchronizer resets low, so a held-low line never qualifies
        for _ in 0..2000 {
            rx.tick(false);
            assert_eq!(rx.frame_counter(), 0);
        }
        // the edge fires only after the line has been seen high
        rx.tick(true);
        rx.tick(false);
        assert_eq!(rx.frame_counter(), 1);
    }

    #[test]
    fn decodes_at_a_different_oversampling_ratio() {
        let config = RxConfig::with_ticks_per_bit(16);
        let encoder = LineEncoder::new(16);
        let mut rx = UartRx::new(config).unwrap();
        let payload = [0x00, 0x01, 0x80, 0xfe, 0xc3];
        let decoded = rx.process_samples(&encoder.encode_bytes(&payload, 5));
        assert_eq!(decoded, payload);
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let mut config = RxConfig::default();
        config.data_offset = 900;
        assert!(UartRx::new(config).is_err());
    }
}
