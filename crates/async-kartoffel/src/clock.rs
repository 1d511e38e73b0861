use async_rover_generic::{ClockBackend, TimerDelay};
use kartoffel::timer_ticks;

pub enum KartoffelClock {}
impl ClockBackend for KartoffelClock {
    fn now() -> u32 {
        timer_ticks()
    }

    fn ticks_per_milli() -> u32 {
        64
    }
}

pub type Timer = async_rover_generic::Timer<KartoffelClock>;
pub type Instant = async_rover_generic::Instant<KartoffelClock>;
pub type Duration = async_rover_generic::Duration<KartoffelClock>;
pub type KartoffelDelay = TimerDelay<KartoffelClock>;
