use core::fmt::Display;

/// Range reading in centimetres, lower means closer.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd, Debug, Default, Hash)]
pub struct Distance(pub u16);

impl Distance {
    pub const fn as_cm(&self) -> u16 {
        self.0
    }
}

impl Display for Distance {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}cm", self.0)
    }
}

/// Motor duty, 0 is idle and 255 full power.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd, Debug, Default, Hash)]
pub struct Speed(pub u8);

impl Display for Speed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "v={}", self.0)
    }
}

/// Wall-clock span in milliseconds, independent of any clock backend.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd, Debug, Default, Hash)]
pub struct Millis(pub u32);

impl Millis {
    pub const fn as_millis(&self) -> u32 {
        self.0
    }
}

impl Display for Millis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
