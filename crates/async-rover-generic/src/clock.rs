use core::future::Future;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Sub};
use core::pin::Pin;
use core::task::{Context, Poll};

use crate::Millis;

/// Monotonic tick source of a board.
pub trait ClockBackend {
    fn now() -> u32;
    fn ticks_per_milli() -> u32;
}

pub struct Instant<C: ClockBackend> {
    ticks: u32,
    _phantom: PhantomData<C>,
}

pub struct Duration<C: ClockBackend> {
    ticks: u32,
    _phantom: PhantomData<C>,
}

// derives would put a bound on `C`, which is only ever an uninhabited marker
macro_rules! impl_tick_traits {
    ($name:ident, $fmt:literal) => {
        impl<C: ClockBackend> $name<C> {
            const fn with_ticks(ticks: u32) -> Self {
                Self {
                    ticks,
                    _phantom: PhantomData,
                }
            }
        }
        impl<C: ClockBackend> Copy for $name<C> {}
        impl<C: ClockBackend> Clone for $name<C> {
            fn clone(&self) -> Self {
                *self
            }
        }
        impl<C: ClockBackend> Eq for $name<C> {}
        impl<C: ClockBackend> PartialEq for $name<C> {
            fn eq(&self, other: &Self) -> bool {
                self.ticks == other.ticks
            }
        }
        impl<C: ClockBackend> PartialOrd for $name<C> {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl<C: ClockBackend> Ord for $name<C> {
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                self.ticks.cmp(&other.ticks)
            }
        }
        impl<C: ClockBackend> core::hash::Hash for $name<C> {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                self.ticks.hash(state);
            }
        }
        impl<C: ClockBackend> core::fmt::Debug for $name<C> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("ticks", &self.ticks)
                    .finish()
            }
        }
        impl<C: ClockBackend> core::fmt::Display for $name<C> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, $fmt, self.ticks)
            }
        }
    };
}

impl_tick_traits!(Instant, "t={}");
impl_tick_traits!(Duration, "Δt={}");

impl<C: ClockBackend> Instant<C> {
    pub fn now() -> Self {
        Self::with_ticks(C::now())
    }

    /// Ticks from `earlier` to `self`, correct across one wrap of the tick counter.
    pub fn wrapping_since(&self, earlier: Self) -> Duration<C> {
        Duration::with_ticks(self.ticks.wrapping_sub(earlier.ticks))
    }

    pub fn elapsed(&self) -> Duration<C> {
        Self::now().wrapping_since(*self)
    }
}

impl<C: ClockBackend> Default for Duration<C> {
    fn default() -> Self {
        Self::with_ticks(0)
    }
}

impl<C: ClockBackend> Duration<C> {
    pub fn from_ticks(n: u32) -> Self {
        Self::with_ticks(n)
    }

    pub fn from_millis(n: u32) -> Self {
        Self::with_ticks(n * C::ticks_per_milli())
    }

    pub fn as_ticks(&self) -> u32 {
        self.ticks
    }

    pub fn as_millis_floor(&self) -> u32 {
        self.ticks / C::ticks_per_milli()
    }

    pub fn as_millis_ceil(&self) -> u32 {
        self.ticks.div_ceil(C::ticks_per_milli())
    }
}

impl<C: ClockBackend> From<Millis> for Duration<C> {
    fn from(value: Millis) -> Self {
        Self::from_millis(value.as_millis())
    }
}

impl<C: ClockBackend> Add<Duration<C>> for Instant<C> {
    type Output = Instant<C>;

    fn add(self, rhs: Duration<C>) -> Self::Output {
        Instant::with_ticks(self.ticks.wrapping_add(rhs.ticks))
    }
}

impl<C: ClockBackend> AddAssign<Duration<C>> for Instant<C> {
    fn add_assign(&mut self, rhs: Duration<C>) {
        *self = *self + rhs;
    }
}

/// `None` if `rhs` has a larger tick count than `self`, see [`Instant::wrapping_since`] for spans
/// that may cross a wrap
impl<C: ClockBackend> Sub for Instant<C> {
    type Output = Option<Duration<C>>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.ticks.checked_sub(rhs.ticks).map(Duration::with_ticks)
    }
}

impl<C: ClockBackend> Add for Duration<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::with_ticks(self.ticks + rhs.ticks)
    }
}

impl<C: ClockBackend> Sub for Duration<C> {
    type Output = Option<Self>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.ticks.checked_sub(rhs.ticks).map(Self::with_ticks)
    }
}

impl<C: ClockBackend> AddAssign for Duration<C> {
    fn add_assign(&mut self, rhs: Self) {
        self.ticks += rhs.ticks;
    }
}

/// Resolves once `duration` has passed since the timer was created, after yielding at least
/// once. Elapsed time is measured with wrapping arithmetic, so a timer that spans the wrap of the
/// tick counter still waits its full duration.
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Timer<C: ClockBackend> {
    start: Instant<C>,
    duration: Duration<C>,
    yielded_once: bool,
}

impl<C: ClockBackend> Timer<C> {
    /// A deadline more than half the tick range ahead counts as already passed.
    pub fn at(expires_at: Instant<C>) -> Self {
        let start = Instant::now();
        let ahead = expires_at.wrapping_since(start).as_ticks();
        let duration = if ahead > i32::MAX as u32 { 0 } else { ahead };
        Self::starting_at(start, Duration::with_ticks(duration))
    }

    pub fn after(duration: Duration<C>) -> Self {
        Self::starting_at(Instant::now(), duration)
    }

    fn starting_at(start: Instant<C>, duration: Duration<C>) -> Self {
        Self {
            start,
            duration,
            yielded_once: false,
        }
    }

    #[inline]
    pub fn after_millis(millis: u32) -> Self {
        Self::after(Duration::from_millis(millis))
    }

    pub fn expires_at(&self) -> Instant<C> {
        self.start + self.duration
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed() >= self.duration
    }
}

impl<C: ClockBackend> Unpin for Timer<C> {}

impl<C: ClockBackend> Future for Timer<C> {
    type Output = ();
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.yielded_once && self.is_expired() {
            Poll::Ready(())
        } else {
            // TODO wake once the deadline is near instead of rescheduling on every poll
            cx.waker().wake_by_ref();
            self.yielded_once = true;
            Poll::Pending
        }
    }
}
