// Receiver core.
// Four stages share one tick source: the line synchronizer delays the raw
// line by one tick for edge qualification, the frame timer counts through a
// detected frame, the bit capture register samples mid-bit, and the output
// latches publish the byte and the one-tick valid pulse.

pub mod capture;
pub mod config;
pub mod latch;
pub mod receiver;
pub mod sync;
pub mod timing;

pub use config::{ConfigError, RxConfig};
pub use receiver::UartRx;
