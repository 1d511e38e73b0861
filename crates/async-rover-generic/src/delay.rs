use core::marker::PhantomData;

use crate::{ClockBackend, Delay, Duration, Millis, Timer};

/// [`Delay`] backed by the board clock.
pub struct TimerDelay<C: ClockBackend> {
    _phantom: PhantomData<C>,
}

impl<C: ClockBackend> TimerDelay<C> {
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<C: ClockBackend> Default for TimerDelay<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ClockBackend> Delay for TimerDelay<C> {
    async fn hold_for(&mut self, duration: Millis) {
        Timer::<C>::after(Duration::from(duration)).await
    }
}
