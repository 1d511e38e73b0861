//! Recording doubles for the robot capabilities.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_rover_generic::{
    Delay, Distance, DriveActuator, DriveDirection, Millis, RangeFinder, Speed,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Event {
    Measure(Distance),
    Drive(DriveDirection, Speed),
    Stop,
    Hold(Millis),
}

pub(crate) type Log = Rc<RefCell<Vec<Event>>>;

/// Replays scripted readings, then repeats `fallback` forever.
pub(crate) struct ScriptedRange {
    readings: VecDeque<u16>,
    fallback: u16,
    log: Log,
}

impl RangeFinder for ScriptedRange {
    async fn distance_ahead(&mut self) -> Distance {
        let distance = Distance(self.readings.pop_front().unwrap_or(self.fallback));
        self.log.borrow_mut().push(Event::Measure(distance));
        distance
    }
}

pub(crate) struct RecordingDrive {
    log: Log,
}

impl DriveActuator for RecordingDrive {
    async fn drive(&mut self, direction: DriveDirection, speed: Speed) {
        self.log.borrow_mut().push(Event::Drive(direction, speed));
    }

    async fn stop(&mut self) {
        self.log.borrow_mut().push(Event::Stop);
    }
}

pub(crate) struct RecordingDelay {
    log: Log,
}

impl Delay for RecordingDelay {
    async fn hold_for(&mut self, duration: Millis) {
        self.log.borrow_mut().push(Event::Hold(duration));
    }
}

pub(crate) struct Rig {
    pub log: Log,
}

impl Rig {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn range(&self, readings: &[u16], fallback: u16) -> ScriptedRange {
        ScriptedRange {
            readings: readings.iter().copied().collect(),
            fallback,
            log: self.log.clone(),
        }
    }

    pub fn drive(&self) -> RecordingDrive {
        RecordingDrive {
            log: self.log.clone(),
        }
    }

    pub fn delay(&self) -> RecordingDelay {
        RecordingDelay {
            log: self.log.clone(),
        }
    }

    pub fn take(&self) -> Vec<Event> {
        core::mem::take(&mut *self.log.borrow_mut())
    }
}

/// Events of one brake: reverse pulse, hold, full stop.
pub(crate) fn brake_events() -> [Event; 3] {
    [
        Event::Drive(DriveDirection::Backward, Speed(30)),
        Event::Hold(Millis(100)),
        Event::Stop,
    ]
}

/// Events of a fast spin turn, including the leading brake.
pub(crate) fn spin_events(direction: DriveDirection, repetitions: usize) -> Vec<Event> {
    let mut events = brake_events().to_vec();
    for _ in 0..repetitions {
        events.extend([
            Event::Drive(direction, Speed(170)),
            Event::Hold(Millis(125)),
            Event::Stop,
            Event::Hold(Millis(350)),
        ]);
    }
    events
}
