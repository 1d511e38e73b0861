#![cfg_attr(not(test), no_std)]

mod avoidance;
mod gate;
mod motion;
mod profile;
#[cfg(test)]
mod testing;

pub use avoidance::{Controller, Recovery};
pub use gate::{is_obstacle, ObstacleGate};
pub use motion::{Motion, Spin};
pub use profile::{BrakePulse, ControllerConfig, Mode, Profile, ProfileStore};

pub use async_rover_generic::{
    Delay, Distance, DriveActuator, DriveDirection, Millis, RangeFinder, Speed,
};
