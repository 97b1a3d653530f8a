//! Line-level waveform synthesis and capture file I/O.
//!
//! The receiver consumes one boolean sample per tick. [`LineEncoder`] builds
//! such streams — the transmit side of the link, used by the CLI, the tests
//! and the doc examples — and the free functions read and write them as
//! capture files: 16-bit mono WAV (level = sample above zero) or ASCII
//! `0`/`1` text, picked by file extension.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;

/// The line rests high between frames; the start bit pulls it low.
pub const IDLE_LEVEL: bool = true;

/// Amplitude used for generated WAV captures.
const WAV_LEVEL: i16 = 16_000;

#[derive(Debug, Error)]
pub enum WaveError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("wav error: {0}")]
    Wav(#[from] hound::Error),
    #[error("capture contains a character that is neither '0' nor '1': {0:?}")]
    BadSample(char),
}

/// Serializes bytes into line levels, one sample per receiver tick:
/// start bit low, eight data bits LSB first, one bit period of stop margin.
pub struct LineEncoder {
    ticks_per_bit: u32,
}

impl LineEncoder {
    pub fn new(ticks_per_bit: u32) -> Self {
        Self { ticks_per_bit }
    }

    /// Idle (high) line for `ticks` samples.
    pub fn idle(&self, ticks: u32) -> Vec<bool> {
        vec![IDLE_LEVEL; ticks as usize]
    }

    /// A low pulse shorter than a bit period, for exercising the
    /// receiver's lack of debounce on an idle line.
    pub fn glitch(&self, ticks: u32) -> Vec<bool> {
        vec![false; ticks as usize]
    }

    /// One complete frame. The caller must make sure the line was high on
    /// the preceding sample, or the start edge will not qualify.
    pub fn encode_frame(&self, byte: u8) -> Vec<bool> {
        let mut samples = Vec::with_capacity(self.samples_per_frame());
        self.push_level(&mut samples, false); // start bit
        for bit in 0..8 {
            self.push_level(&mut samples, (byte >> bit) & 1 == 1);
        }
        self.push_level(&mut samples, true); // stop margin
        samples
    }

    /// A stream of frames with a leading bit period of idle (so the first
    /// start edge qualifies) and `gap_ticks` of idle between frames.
    pub fn encode_bytes(&self, data: &[u8], gap_ticks: u32) -> Vec<bool> {
        let mut samples = self.idle(self.ticks_per_bit);
        for (index, &byte) in data.iter().enumerate() {
            if index > 0 {
                samples.extend(self.idle(gap_ticks));
            }
            samples.extend(self.encode_frame(byte));
        }
        samples
    }

    /// Samples in one encoded frame: start + 8 data bits + stop margin.
    pub fn samples_per_frame(&self) -> usize {
        10 * self.ticks_per_bit as usize
    }

    fn push_level(&self, samples: &mut Vec<bool>, high: bool) {
        for _ in 0..self.ticks_per_bit {
            samples.push(high);
        }
    }
}

/// Write a capture, format chosen by extension (`.wav` or text).
pub fn write_capture(path: &Path, samples: &[bool], sample_rate: u32) -> Result<(), WaveError> {
    if has_wav_extension(path) {
        write_wav(path, samples, sample_rate)
    } else {
        write_text(path, samples)
    }
}

/// Read a capture, format chosen by extension (`.wav` or text).
pub fn read_capture(path: &Path) -> Result<Vec<bool>, WaveError> {
    if has_wav_extension(path) {
        read_wav(path)
    } else {
        read_text(path)
    }
}

fn has_wav_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"))
}

pub fn write_wav(path: &Path, samples: &[bool], sample_rate: u32) -> Result<(), WaveError> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)?;
    for &level in samples {
        writer.write_sample(if level { WAV_LEVEL } else { -WAV_LEVEL })?;
    }
    writer.finalize()?;
    Ok(())
}

pub fn read_wav(path: &Path) -> Result<Vec<bool>, WaveError> {
    let mut reader = hound::WavReader::open(path)?;
    reader
        .samples::<i16>()
        .map(|sample| Ok(sample? > 0))
        .collect()
}

pub fn write_text(path: &Path, samples: &[bool]) -> Result<(), WaveError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for chunk in samples.chunks(80) {
        for &level in chunk {
            writer.write_all(if level { b"1" } else { b"0" })?;
        }
        writer.write_all(b"\n")?;
    }
    Ok(())
}

pub fn read_text(path: &Path) -> Result<Vec<bool>, WaveError> {
    let mut contents = String::new();
    File::open(path)?.read_to_string(&mut contents)?;
    contents
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(WaveError::BadSample(other)),
        })
        .collect()
}
