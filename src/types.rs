//! Core types shared by the animations.

use crate::time::Instant;

/// Persistent progress of one animation instance.
///
/// Created idle; the first tick (or any tick with `restart = true`) records
/// the start time on that same call, so progress is zero for that frame.
/// After that, elapsed time is always re-derived from the clock, never
/// counted in frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationState {
    start: Option<Instant>,
}

impl AnimationState {
    /// Creates a state that starts on its first tick.
    pub const fn new() -> Self {
        Self { start: None }
    }

    /// Starts the clock if needed and returns milliseconds since start.
    #[inline]
    pub fn advance(&mut self, now: Instant, restart: bool) -> u32 {
        let start = match self.start {
            Some(start) if !restart => start,
            _ => {
                self.start = Some(now);
                now
            }
        };
        now.duration_since(start)
    }

    /// Forgets the start time. The next tick starts fresh.
    pub fn reset(&mut self) {
        self.start = None;
    }

    /// Time of the first tick since the last restart.
    pub fn start_time(&self) -> Option<Instant> {
        self.start
    }

    /// Returns true once the first tick has run.
    pub fn is_started(&self) -> bool {
        self.start.is_some()
    }
}

/// Fraction of `duration` covered by `elapsed`, in 0.0-1.0.
///
/// A zero duration counts as already complete.
#[inline]
pub fn progress(elapsed: u32, duration: u32) -> f32 {
    if duration == 0 {
        return 1.0;
    }
    (elapsed as f32 / duration as f32).clamp(0.0, 1.0)
}

/// Clamps a strip fraction into 0.0-1.0. NaN becomes 0.0.
#[inline]
pub fn clamp_cut_off(cut_off: f32) -> f32 {
    if cut_off.is_nan() {
        return 0.0;
    }
    cut_off.clamp(0.0, 1.0)
}

/// Number of pixels covered by `fraction` of a strip of `count`, rounded down.
#[inline]
pub fn pixels_for(count: usize, fraction: f32) -> usize {
    let covered = libm::floorf(count as f32 * clamp_cut_off(fraction)) as usize;
    covered.min(count)
}

/// Phase of a [`ColorPulse`](crate::animation::ColorPulse).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulsePhase {
    /// Lit segment growing toward the cutoff.
    #[default]
    Rising,

    /// Lit segment fading to black.
    Falling,

    /// Both phases done.
    Done,
}

/// Palette construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PaletteError {
    /// No stops provided.
    Empty,

    /// More stops than the palette can hold.
    CapacityExceeded,
}

impl core::fmt::Display for PaletteError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PaletteError::Empty => write!(f, "palette must have at least one stop"),
            PaletteError::CapacityExceeded => write!(f, "palette capacity exceeded"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PaletteError {}
