//! Capabilities a controller consumes from the robot it runs on.
//!
//! All methods are `async` so a board can wait for its peripherals to become ready, but from the
//! caller's point of view every command is fire-and-forget and cannot fail.

use crate::{Distance, Millis, Speed};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum DriveDirection {
    Forward,
    Backward,
    /// rotate in place, counter-clockwise seen from above
    SpinLeft,
    /// rotate in place, clockwise seen from above
    SpinRight,
    Stop,
}

/// A single forward-facing range sensor.
#[allow(async_fn_in_trait)]
pub trait RangeFinder {
    /// One reading, must return within a short bounded time.
    async fn distance_ahead(&mut self) -> Distance;
}

/// Differential drive. A command stays in effect until the next one.
#[allow(async_fn_in_trait)]
pub trait DriveActuator {
    async fn drive(&mut self, direction: DriveDirection, speed: Speed);

    /// full stop
    async fn stop(&mut self);
}

/// Blocking hold of the execution context, always runs the full duration.
#[allow(async_fn_in_trait)]
pub trait Delay {
    async fn hold_for(&mut self, duration: Millis);
}

impl<T: RangeFinder> RangeFinder for &mut T {
    async fn distance_ahead(&mut self) -> Distance {
        T::distance_ahead(&mut **self).await
    }
}

impl<T: DriveActuator> DriveActuator for &mut T {
    async fn drive(&mut self, direction: DriveDirection, speed: Speed) {
        T::drive(&mut **self, direction, speed).await
    }

    async fn stop(&mut self) {
        T::stop(&mut **self).await
    }
}

impl<T: Delay> Delay for &mut T {
    async fn hold_for(&mut self, duration: Millis) {
        T::hold_for(&mut **self, duration).await
    }
}
