#![cfg_attr(not(test), no_std)]

mod clock;
mod delay;
mod hal;
mod units;

pub use clock::{ClockBackend, Duration, Instant, Timer};
pub use delay::TimerDelay;
pub use hal::{Delay, DriveActuator, DriveDirection, RangeFinder};
pub use units::{Distance, Millis, Speed};
