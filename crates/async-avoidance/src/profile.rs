use async_rover_generic::{Distance, Millis, Speed};

/// One parameter set for sensing, driving and turning.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Profile {
    /// readings at or below this count as an obstacle
    pub detection_distance: Distance,
    pub drive_speed: Speed,
    pub turn_speed: Speed,
    /// how long a single spin pulse is held
    pub turn_duration: Millis,
}

impl Profile {
    pub const FAST: Self = Self {
        detection_distance: Distance(30),
        drive_speed: Speed(225),
        turn_speed: Speed(170),
        turn_duration: Millis(125),
    };

    pub const SLOW: Self = Self {
        detection_distance: Distance(24),
        drive_speed: Speed(105),
        turn_speed: Speed(95),
        turn_duration: Millis(250),
    };
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub enum Mode {
    #[default]
    Fast,
    Slow,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Fast => Mode::Slow,
            Mode::Slow => Mode::Fast,
        }
    }
}

/// Short reverse pulse that arrests drift before a full stop.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct BrakePulse {
    pub speed: Speed,
    pub duration: Millis,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct ControllerConfig {
    pub fast: Profile,
    pub slow: Profile,
    /// settle pause after every spin pulse
    pub inter_turn_delay: Millis,
    pub brake: BrakePulse,
    pub initial_mode: Mode,
}

impl ControllerConfig {
    pub const DEFAULT: Self = Self {
        fast: Profile::FAST,
        slow: Profile::SLOW,
        inter_turn_delay: Millis(350),
        brake: BrakePulse {
            speed: Speed(30),
            duration: Millis(100),
        },
        initial_mode: Mode::Fast,
    };

    pub const fn with_initial_mode(mut self, mode: Mode) -> Self {
        self.initial_mode = mode;
        self
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Resolves the active profile for each concern from the current mode.
///
/// `is_running` and `is_stopped` are carried for future use, nothing in the control path reads
/// them.
#[derive(Clone, Debug)]
pub struct ProfileStore {
    config: ControllerConfig,
    mode: Mode,
    is_running: bool,
    is_stopped: bool,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new(ControllerConfig::DEFAULT)
    }
}

impl ProfileStore {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            mode: config.initial_mode,
            config,
            is_running: false,
            is_stopped: false,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_fast_mode(&self) -> bool {
        self.mode == Mode::Fast
    }

    fn active(&self) -> Profile {
        match self.mode {
            Mode::Fast => self.config.fast,
            Mode::Slow => self.config.slow,
        }
    }

    pub fn detection_profile(&self) -> Profile {
        self.active()
    }

    pub fn drive_profile(&self) -> Profile {
        self.active()
    }

    /// Always the fast profile, whatever the mode. Turns stay brisk in slow mode.
    pub fn turn_profile(&self) -> Profile {
        self.config.fast
    }

    pub fn inter_turn_delay(&self) -> Millis {
        self.config.inter_turn_delay
    }

    pub fn brake(&self) -> BrakePulse {
        self.config.brake
    }

    pub fn toggle_fast_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
    }

    pub fn is_stopped(&self) -> bool {
        self.is_stopped
    }
}
