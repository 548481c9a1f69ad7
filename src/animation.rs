//! Timed animations.
//!
//! Every animation here is a small value owning its parameters and its
//! [`AnimationState`]. Call `tick` once per control-loop iteration with the
//! current time; it draws one frame into the strip and returns `true` once the
//! animation has rendered its final frame. Passing `restart = true` restarts
//! the animation on that same call. Progress is derived from elapsed time, so
//! an irregular tick period only changes the frame rate, not the timing.
//!
//! None of the animations call [`LedStrip::show`]; that is left to the control
//! loop.

use crate::color::Pixel;
use crate::colors::{BLACK, BLUE, RED, dim};
use crate::config::POLICE_PERIOD_MS;
use crate::generator::ColorGenerator;
use crate::strip::{LedStrip, fill_range};
use crate::time::Instant;
use crate::types::{AnimationState, PulsePhase, pixels_for, progress};
use heapless::Vec;

/// Sets pixels `0..floor(count × cut_off)` from the generator.
///
/// Not time based. Pixels past the cutoff are left as they are; clear the
/// strip first if a clean frame is needed.
pub fn fill<G, L>(color: &G, strip: &mut L, cut_off: f32)
where
    G: ColorGenerator + ?Sized,
    L: LedStrip + ?Sized,
{
    let count = strip.pixel_count();
    let end = pixels_for(count, cut_off);
    for index in 0..end {
        strip.set_pixel(index, color.color_at(index, count));
    }
}

/// Draws `color` scaled by `level` over `range`.
fn fill_dimmed<G, L>(color: &G, strip: &mut L, range: core::ops::Range<usize>, level: f32)
where
    G: ColorGenerator + ?Sized,
    L: LedStrip + ?Sized,
{
    let count = strip.pixel_count();
    for index in range.start..range.end.min(count) {
        strip.set_pixel(index, dim(color.color_at(index, count), level));
    }
}

/// A single dot sweeping out to the cutoff and back within `duration`.
#[derive(Debug, Clone, Copy)]
pub struct DotPingPong {
    pub duration: u32,
    pub cut_off: f32,
    state: AnimationState,
    position: usize,
}

impl DotPingPong {
    pub fn new(duration: u32, cut_off: f32) -> Self {
        Self {
            duration,
            cut_off,
            state: AnimationState::new(),
            position: 0,
        }
    }

    /// Pixel lit by the last tick.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn tick<G, L>(&mut self, color: &G, now: Instant, restart: bool, strip: &mut L) -> bool
    where
        G: ColorGenerator + ?Sized,
        L: LedStrip + ?Sized,
    {
        let elapsed = self.state.advance(now, restart);
        let finished = elapsed >= self.duration;

        let count = strip.pixel_count();
        let span = pixels_for(count, self.cut_off);
        if span == 0 {
            self.position = 0;
            return finished;
        }

        // Triangle wave: 0 → 1 → 0 over the duration
        let phase = progress(elapsed, self.duration);
        let triangle = if phase < 0.5 {
            phase * 2.0
        } else {
            2.0 - phase * 2.0
        };
        let last = span - 1;
        let position = (libm::roundf(triangle * last as f32) as usize).min(last);

        fill_range(strip, 0..span, BLACK);
        strip.set_pixel(position, color.color_at(position, count));
        self.position = position;

        finished
    }
}

/// Fill up to the cutoff over `duration_up`, then fade out over `duration_down`.
#[derive(Debug, Clone, Copy)]
pub struct ColorPulse {
    pub duration_up: u32,
    pub duration_down: u32,
    pub cut_off: f32,
    state: AnimationState,
    phase: PulsePhase,
}

impl ColorPulse {
    pub fn new(duration_up: u32, duration_down: u32, cut_off: f32) -> Self {
        Self {
            duration_up,
            duration_down,
            cut_off,
            state: AnimationState::new(),
            phase: PulsePhase::Rising,
        }
    }

    /// Phase reached by the last tick.
    pub fn phase(&self) -> PulsePhase {
        self.phase
    }

    pub fn tick<G, L>(&mut self, color: &G, now: Instant, restart: bool, strip: &mut L) -> bool
    where
        G: ColorGenerator + ?Sized,
        L: LedStrip + ?Sized,
    {
        let elapsed = self.state.advance(now, restart);
        let span = pixels_for(strip.pixel_count(), self.cut_off);

        if elapsed < self.duration_up {
            self.phase = PulsePhase::Rising;
            let lit = pixels_for(span, progress(elapsed, self.duration_up));
            fill_dimmed(color, strip, 0..lit, 1.0);
            fill_range(strip, lit..span, BLACK);
            return false;
        }

        let falling = elapsed - self.duration_up;
        if falling >= self.duration_down {
            self.phase = PulsePhase::Done;
            fill_range(strip, 0..span, BLACK);
            return true;
        }

        self.phase = PulsePhase::Falling;
        let level = 1.0 - progress(falling, self.duration_down);
        fill_dimmed(color, strip, 0..span, level);
        false
    }
}

/// Two fronts filling from both ends, meeting in the middle after `duration`.
///
/// Like [`fill`], pixels not yet reached are left untouched.
#[derive(Debug, Clone, Copy)]
pub struct DoubleSideFill {
    pub duration: u32,
    state: AnimationState,
}

impl DoubleSideFill {
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            state: AnimationState::new(),
        }
    }

    pub fn tick<G, L>(&mut self, color: &G, now: Instant, restart: bool, strip: &mut L) -> bool
    where
        G: ColorGenerator + ?Sized,
        L: LedStrip + ?Sized,
    {
        let elapsed = self.state.advance(now, restart);
        let count = strip.pixel_count();
        let half = count.div_ceil(2);
        let front = pixels_for(half, progress(elapsed, self.duration));

        for offset in 0..front {
            let mirrored = count - 1 - offset;
            strip.set_pixel(offset, color.color_at(offset, count));
            strip.set_pixel(mirrored, color.color_at(mirrored, count));
        }

        elapsed >= self.duration
    }
}

/// Police lights: two colors strobing on alternating strip halves.
///
/// Each half-period one half of the strip flashes twice while the other
/// half stays dark. Never finishes.
#[derive(Debug, Clone, Copy)]
pub struct Police {
    /// Full cycle in milliseconds. Zero selects [`POLICE_PERIOD_MS`].
    pub period: u32,
    pub first: Pixel,
    pub second: Pixel,
    state: AnimationState,
}

impl Police {
    pub fn new(period: u32) -> Self {
        Self::with_colors(period, RED, BLUE)
    }

    pub fn with_colors(period: u32, first: Pixel, second: Pixel) -> Self {
        Self {
            period,
            first,
            second,
            state: AnimationState::new(),
        }
    }

    pub fn tick<L: LedStrip + ?Sized>(&mut self, now: Instant, restart: bool, strip: &mut L) -> bool {
        let elapsed = self.state.advance(now, restart);

        let period = if self.period == 0 {
            POLICE_PERIOD_MS
        } else {
            self.period
        };
        let half_period = (period / 2).max(1);

        let phase = elapsed % period;
        let first_active = phase < half_period;
        let within = if first_active {
            phase
        } else {
            phase - half_period
        };

        // Two flashes per half: on, off, on, off
        let slot = (within as u64 * 4 / half_period as u64).min(3);
        let flash_on = slot % 2 == 0;

        let count = strip.pixel_count();
        let middle = count / 2;

        let left = if first_active && flash_on { self.first } else { BLACK };
        let right = if !first_active && flash_on { self.second } else { BLACK };
        fill_range(strip, 0..middle, left);
        fill_range(strip, middle..count, right);

        false
    }
}

/// Dims whatever the strip currently shows linearly to black over `duration`.
///
/// The first tick (and every restart) captures the current frame, up to `N`
/// pixels, and each later tick writes the captured frame scaled by the
/// remaining level. Rounding never compounds, so the fade stays linear at any
/// tick rate. Pixels past the capacity are blanked when the frame is captured.
#[derive(Debug, Clone)]
pub struct FadeOut<const N: usize> {
    pub duration: u32,
    state: AnimationState,
    frame: Vec<Pixel, N>,
    level: f32,
}

impl<const N: usize> FadeOut<N> {
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            state: AnimationState::new(),
            frame: Vec::new(),
            level: 1.0,
        }
    }

    /// Brightness applied by the last tick, 1.0 at start.
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Frame captured at the start of the fade.
    pub fn frame(&self) -> &[Pixel] {
        &self.frame
    }

    pub fn tick<L: LedStrip + ?Sized>(&mut self, now: Instant, restart: bool, strip: &mut L) -> bool {
        let fresh = restart || !self.state.is_started();
        let elapsed = self.state.advance(now, restart);
        let count = strip.pixel_count();

        if fresh || self.frame.len() != count.min(N) {
            self.capture(strip);
        }

        if elapsed >= self.duration {
            self.level = 0.0;
            fill_range(strip, 0..count, BLACK);
            return true;
        }

        self.level = 1.0 - progress(elapsed, self.duration);
        for (index, pixel) in self.frame.iter().enumerate() {
            strip.set_pixel(index, dim(*pixel, self.level));
        }

        false
    }

    fn capture<L: LedStrip + ?Sized>(&mut self, strip: &mut L) {
        let count = strip.pixel_count();
        let kept = count.min(N);
        self.frame.clear();
        for index in 0..kept {
            // kept <= N, so the push always fits
            self.frame.push(strip.get_pixel(index)).ok();
        }
        fill_range(strip, kept..count, BLACK);
        self.level = 1.0;
    }
}

/// Ramps one color from black to full between two cutoffs over `duration`.
#[derive(Debug, Clone, Copy)]
pub struct FadeIn {
    pub duration: u32,
    pub first_cut_off: f32,
    pub second_cut_off: f32,
    state: AnimationState,
}

impl FadeIn {
    pub fn new(duration: u32) -> Self {
        Self::with_cut_offs(duration, 0.0, 1.0)
    }

    pub fn with_cut_offs(duration: u32, first_cut_off: f32, second_cut_off: f32) -> Self {
        Self {
            duration,
            first_cut_off,
            second_cut_off,
            state: AnimationState::new(),
        }
    }

    pub fn tick<G, L>(&mut self, color: &G, now: Instant, restart: bool, strip: &mut L) -> bool
    where
        G: ColorGenerator + ?Sized,
        L: LedStrip + ?Sized,
    {
        let elapsed = self.state.advance(now, restart);
        let count = strip.pixel_count();

        let first = pixels_for(count, self.first_cut_off);
        let second = pixels_for(count, self.second_cut_off);
        let range = first.min(second)..first.max(second);

        fill_dimmed(color, strip, range, progress(elapsed, self.duration));

        elapsed >= self.duration
    }
}
