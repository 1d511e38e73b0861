use core::fmt::Display;

use async_rover_generic::{Delay, DriveActuator, RangeFinder};

use crate::{ControllerConfig, Motion, ObstacleGate, ProfileStore};

/// How far a tick went up the escalation ladder.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Recovery {
    /// nothing ahead
    Clear,
    /// free after braking and one left turn
    TurnedLeft,
    /// free after two further right turns
    TurnedRight,
    /// still blocked, took the final right turn without reading again
    Exhausted,
}

impl Recovery {
    pub fn to_str(self) -> &'static str {
        match self {
            Recovery::Clear => "clear",
            Recovery::TurnedLeft => "turned left",
            Recovery::TurnedRight => "turned right",
            Recovery::Exhausted => "exhausted",
        }
    }
}

impl Display for Recovery {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Reactive sense-decide-act controller.
///
/// Holds no memory between ticks other than the profile selection. Each call to
/// [`Controller::run_each_loop`] reads the sensor afresh and always ends by driving
/// forward, the next tick is relied upon to stop again if the obstacle persists.
pub struct Controller<S, M, H> {
    store: ProfileStore,
    gate: ObstacleGate<S>,
    motion: Motion<M, H>,
}

impl<S: RangeFinder, M: DriveActuator, H: Delay> Controller<S, M, H> {
    pub fn new(sensor: S, actuator: M, delay: H) -> Self {
        Self::with_config(ControllerConfig::DEFAULT, sensor, actuator, delay)
    }

    pub fn with_config(config: ControllerConfig, sensor: S, actuator: M, delay: H) -> Self {
        Self {
            store: ProfileStore::new(config),
            gate: ObstacleGate::new(sensor),
            motion: Motion::new(actuator, delay),
        }
    }

    pub fn profiles(&self) -> &ProfileStore {
        &self.store
    }

    /// Only reachable between ticks, so a tick never sees a mix of profiles.
    pub fn profiles_mut(&mut self) -> &mut ProfileStore {
        &mut self.store
    }

    pub fn into_parts(self) -> (S, M, H) {
        let (actuator, delay) = self.motion.into_parts();
        (self.gate.into_inner(), actuator, delay)
    }

    /// Call once before the first tick.
    pub fn initialize(&mut self) {}

    async fn obstacle_ahead(&mut self) -> bool {
        self.gate.obstacle_ahead(&self.store).await
    }

    /// One tick of the escalation ladder, followed by an unconditional forward command.
    pub async fn run_each_loop(&mut self) -> Recovery {
        let recovery = self.escape().await;
        self.motion.forward(&self.store).await;
        recovery
    }

    async fn escape(&mut self) -> Recovery {
        if !self.obstacle_ahead().await {
            return Recovery::Clear;
        }
        self.motion.stop(&self.store).await;
        self.motion.turn_left(&self.store, 1).await;

        if !self.obstacle_ahead().await {
            return Recovery::TurnedLeft;
        }
        // overshoot back past the left turn
        self.motion.turn_right(&self.store, 2).await;

        if !self.obstacle_ahead().await {
            return Recovery::TurnedRight;
        }
        self.motion.turn_right(&self.store, 1).await;
        Recovery::Exhausted
    }
}
