use core::cell::Cell;

use critical_section::Mutex;

use crate::KartoffelDelay;

pub mod error;
mod motor;
mod radar;

pub use motor::MotorDrive;
pub use radar::RadarRange;

/// The peripherals of the bot, as seen by an avoidance controller.
pub struct Bot {
    pub range: RadarRange,
    pub drive: MotorDrive,
    pub delay: KartoffelDelay,
}

static TAKEN: Mutex<Cell<bool>> = Mutex::new(Cell::new(false));

impl Bot {
    /// can be taken exactly once
    pub fn take() -> Self {
        Self::try_take().expect("bot peripherals already taken")
    }

    pub fn try_take() -> Option<Self> {
        let taken = critical_section::with(|cs| TAKEN.borrow(cs).replace(true));
        (!taken).then(|| Self {
            range: RadarRange::new(),
            drive: MotorDrive::new(),
            delay: KartoffelDelay::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // the only test taking the bot, TAKEN is process-wide
    #[test]
    fn peripherals_are_handed_out_once() {
        assert!(Bot::try_take().is_some());
        assert!(Bot::try_take().is_none());
        assert!(Bot::try_take().is_none());
    }
}
