//! Receive side of an asynchronous serial (UART-style) link.
//!
//! The receiver recovers one byte per frame — one start bit, eight data bits
//! least-significant first, and at least one stop bit of margin — from a
//! single digital line, using only a local periodic tick source. There is no
//! shared clock with the transmitter: each data bit is sampled at the
//! temporal center of its window, so the decode survives clock mismatch as
//! long as the accumulated drift across a frame stays under half a bit
//! period.
//!
//! ```
//! use uartrx_rs::{UartRx, wave::LineEncoder};
//!
//! let encoder = LineEncoder::new(100);
//! let mut rx = UartRx::new_default();
//!
//! let samples = encoder.encode_bytes(&[0x55, 0xa1], 0);
//! assert_eq!(rx.process_samples(&samples), vec![0x55, 0xa1]);
//! ```
//!
//! The core is deliberately open-loop: no parity, no framing-error
//! detection, no buffering beyond a single byte. An unread byte is silently
//! overwritten by the next frame, and a one-tick low glitch on an idle line
//! produces a full garbage frame. See [`rx`] for the component breakdown.

pub mod rx;
pub mod utils;
pub mod wave;

pub use rx::{RxConfig, UartRx};
