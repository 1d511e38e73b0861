use async_rover_generic::{Delay, DriveActuator, DriveDirection};

use crate::ProfileStore;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Spin {
    Left,
    Right,
}

impl Spin {
    pub fn direction(self) -> DriveDirection {
        match self {
            Spin::Left => DriveDirection::SpinLeft,
            Spin::Right => DriveDirection::SpinRight,
        }
    }
}

/// Timed motion primitives on top of a drive actuator.
///
/// Every primitive resolves its speeds and durations through the given [`ProfileStore`] at the
/// moment it issues a command.
pub struct Motion<M, H> {
    actuator: M,
    delay: H,
}

impl<M: DriveActuator, H: Delay> Motion<M, H> {
    pub fn new(actuator: M, delay: H) -> Self {
        Self { actuator, delay }
    }

    pub fn into_parts(self) -> (M, H) {
        (self.actuator, self.delay)
    }

    /// keeps running until the next command
    pub async fn forward(&mut self, store: &ProfileStore) {
        self.actuator
            .drive(DriveDirection::Forward, store.drive_profile().drive_speed)
            .await;
    }

    pub async fn backward(&mut self, store: &ProfileStore) {
        self.actuator
            .drive(DriveDirection::Backward, store.drive_profile().drive_speed)
            .await;
    }

    /// A full stop alone does not arrest a moving platform, hence the reverse pulse first.
    pub async fn stop(&mut self, store: &ProfileStore) {
        let brake = store.brake();
        self.actuator
            .drive(DriveDirection::Backward, brake.speed)
            .await;
        self.delay.hold_for(brake.duration).await;
        self.actuator.stop().await;
    }

    /// Brakes, then rotates in place `repetitions` times, settling after each pulse.
    pub async fn spin_turn(&mut self, store: &ProfileStore, spin: Spin, repetitions: u8) {
        self.stop(store).await;
        for _ in 0..repetitions {
            let turn = store.turn_profile();
            self.actuator.drive(spin.direction(), turn.turn_speed).await;
            self.delay.hold_for(turn.turn_duration).await;
            self.actuator.stop().await;
            self.delay.hold_for(store.inter_turn_delay()).await;
        }
    }

    pub async fn turn_left(&mut self, store: &ProfileStore, times: u8) {
        self.spin_turn(store, Spin::Left, times).await
    }

    pub async fn turn_right(&mut self, store: &ProfileStore, times: u8) {
        self.spin_turn(store, Spin::Right, times).await
    }
}

#[cfg(test)]
mod tests {
    use embassy_futures::block_on;

    use super::*;
    use crate::testing::{brake_events, spin_events, Event, Rig};
    use crate::{ControllerConfig, Millis, Mode, Speed};

    fn motion(rig: &Rig) -> Motion<impl DriveActuator, impl Delay> {
        Motion::new(rig.drive(), rig.delay())
    }

    #[test]
    fn stop_pulses_backward_then_stops() {
        let rig = Rig::new();
        let mut motion = motion(&rig);
        block_on(motion.stop(&ProfileStore::default()));
        assert_eq!(rig.take(), brake_events());
    }

    #[test]
    fn forward_and_backward_use_drive_speed() {
        let rig = Rig::new();
        let mut motion = motion(&rig);
        let fast = ProfileStore::default();
        let slow = ProfileStore::new(ControllerConfig::DEFAULT.with_initial_mode(Mode::Slow));

        block_on(async {
            motion.forward(&fast).await;
            motion.backward(&fast).await;
            motion.forward(&slow).await;
            motion.backward(&slow).await;
        });

        assert_eq!(
            rig.take(),
            [
                Event::Drive(DriveDirection::Forward, Speed(225)),
                Event::Drive(DriveDirection::Backward, Speed(225)),
                Event::Drive(DriveDirection::Forward, Speed(105)),
                Event::Drive(DriveDirection::Backward, Speed(105)),
            ]
        );
    }

    #[test]
    fn spin_turn_repeats_pulses() {
        let rig = Rig::new();
        let mut motion = motion(&rig);
        let store = ProfileStore::default();

        for n in 0..4u8 {
            block_on(motion.spin_turn(&store, Spin::Right, n));
            let events = rig.take();
            assert_eq!(events, spin_events(DriveDirection::SpinRight, n.into()));

            let rotations = events
                .iter()
                .filter(|e| matches!(e, Event::Drive(DriveDirection::SpinRight, _)))
                .count();
            let stops = events.iter().filter(|e| **e == Event::Stop).count();
            let settles = events
                .iter()
                .filter(|e| **e == Event::Hold(Millis(350)))
                .count();
            assert_eq!(rotations, usize::from(n));
            // one extra stop belongs to the leading brake
            assert_eq!(stops, usize::from(n) + 1);
            assert_eq!(settles, usize::from(n));
        }
    }

    #[test]
    fn slow_mode_still_turns_fast() {
        let rig = Rig::new();
        let mut motion = motion(&rig);
        let store = ProfileStore::new(ControllerConfig::DEFAULT.with_initial_mode(Mode::Slow));

        block_on(motion.turn_left(&store, 1));
        assert_eq!(rig.take(), spin_events(DriveDirection::SpinLeft, 1));
    }

    #[test]
    fn wrappers_pick_direction() {
        let rig = Rig::new();
        let mut motion = motion(&rig);
        let store = ProfileStore::default();

        block_on(motion.turn_left(&store, 2));
        assert_eq!(rig.take(), spin_events(DriveDirection::SpinLeft, 2));
        block_on(motion.turn_right(&store, 1));
        assert_eq!(rig.take(), spin_events(DriveDirection::SpinRight, 1));
    }
}
