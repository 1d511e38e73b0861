#![cfg_attr(not(test), no_std)]

mod bot;
mod clock;
#[cfg(feature = "critical-section-impl")]
mod critical_section_impl;

pub use bot::error::{NotReady, RadarError};
pub use bot::{Bot, MotorDrive, RadarRange};
pub use clock::{Duration, Instant, KartoffelClock, KartoffelDelay, Timer};

#[cfg(target_arch = "riscv32")]
pub use kartoffel::{print, println};

