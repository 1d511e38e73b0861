use kartoffel::{is_motor_ready, motor_step, motor_turn_left, motor_turn_right};

use async_rover_generic::{DriveActuator, DriveDirection, Speed};

use core::{future::poll_fn, task::Poll};

use super::error::NotReady;

/// Drives the tracks of the bot.
///
/// The motor only knows discrete steps and quarter turns, so every `Forward` command advances
/// one tile and every spin turns once. The tracks cannot reverse, `Backward` and `Stop` issue
/// nothing. Speeds are ignored.
#[non_exhaustive]
pub struct MotorDrive;

impl MotorDrive {
    pub(super) fn new() -> Self {
        MotorDrive
    }

    pub fn is_ready(&self) -> bool {
        is_motor_ready()
    }

    pub async fn wait(&self) {
        poll_fn(|cx| {
            if self.is_ready() {
                Poll::Ready(())
            } else {
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        })
        .await;
    }

    fn issue(direction: DriveDirection) {
        match direction {
            DriveDirection::Forward => motor_step(),
            DriveDirection::SpinLeft => motor_turn_left(),
            DriveDirection::SpinRight => motor_turn_right(),
            DriveDirection::Backward | DriveDirection::Stop => {}
        }
    }

    fn needs_motor(direction: DriveDirection) -> bool {
        !matches!(direction, DriveDirection::Backward | DriveDirection::Stop)
    }

    /// Like [`DriveActuator::drive`], but fails instead of waiting for the motor.
    pub fn try_drive(&mut self, direction: DriveDirection) -> Result<(), NotReady> {
        if !Self::needs_motor(direction) {
            Ok(())
        } else if self.is_ready() {
            Self::issue(direction);
            Ok(())
        } else {
            Err(NotReady)
        }
    }
}

impl DriveActuator for MotorDrive {
    async fn drive(&mut self, direction: DriveDirection, _speed: Speed) {
        if Self::needs_motor(direction) {
            self.wait().await;
            Self::issue(direction);
        }
    }

    async fn stop(&mut self) {}
}
