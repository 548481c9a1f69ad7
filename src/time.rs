//! Millisecond clock abstraction for platform-agnostic timing.
//!
//! The control loop owns a free-running millisecond counter that wraps at
//! `2^32`. Elapsed time is always computed with wrapping subtraction, so an
//! animation started just before the wrap keeps advancing smoothly across it.

/// Trait for abstracting the monotonic millisecond clock.
pub trait TimeSource {
    /// Returns the current time in milliseconds. Wraps at `u32::MAX`.
    fn now_ms(&self) -> u32;

    /// Returns the current time as an [`Instant`].
    #[inline]
    fn now(&self) -> Instant {
        Instant(self.now_ms())
    }
}

/// A point in time on the wrapping millisecond clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Instant(pub u32);

impl Instant {
    /// Creates an instant from a raw millisecond reading.
    #[inline]
    pub const fn from_millis(millis: u32) -> Self {
        Instant(millis)
    }

    /// Raw millisecond reading.
    #[inline]
    pub const fn as_millis(&self) -> u32 {
        self.0
    }

    /// Milliseconds elapsed since an earlier instant, wrap-safe.
    #[inline]
    pub const fn duration_since(&self, earlier: Instant) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /// Instant shifted forward by `millis`, wrapping like the clock does.
    #[inline]
    pub const fn wrapping_add(self, millis: u32) -> Self {
        Instant(self.0.wrapping_add(millis))
    }
}

impl From<u32> for Instant {
    fn from(millis: u32) -> Self {
        Instant(millis)
    }
}
