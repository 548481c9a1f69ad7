//! Continuous procedural effects: fire, palette noise and candle flicker.
//!
//! These never report completion. Fire and candle advance a small random
//! simulation at a fixed step period derived from elapsed time, catching up
//! at most [`MAX_CATCH_UP_STEPS`] after a stalled loop, so the flame speed
//! does not depend on how often the loop runs.

use crate::colors::scale8;
use crate::config::{CandleConfig, FireConfig, MAX_CATCH_UP_STEPS, NoiseConfig};
use crate::noise::noise8;
use crate::palettes::ColorPalette;
use crate::strip::LedStrip;
use crate::time::Instant;
use crate::types::AnimationState;
use heapless::Vec;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Sparks are only lit in the first few cells.
const SPARK_ZONE: usize = 7;

/// Counts simulation steps owed since the animation started.
#[derive(Debug, Clone, Copy, Default)]
struct StepClock {
    done: u32,
}

impl StepClock {
    /// Steps to run now. One step is always due on the first frame.
    fn due(&mut self, elapsed: u32, step_ms: u32) -> u32 {
        let target = (elapsed / step_ms.max(1)).saturating_add(1);
        let pending = target.saturating_sub(self.done).min(MAX_CATCH_UP_STEPS);
        // Drop any backlog beyond the catch-up limit
        self.done = target;
        pending
    }

    fn reset(&mut self) {
        self.done = 0;
    }
}

/// 1-D fire simulation over up to `N` heat cells.
///
/// Each step cools every cell a little, lets heat drift away from the base,
/// and sometimes lights a spark near the base. Cells map through a fixed
/// black → red → orange → yellow → white palette. Strips longer than `N`
/// pixels stretch the cells over the whole strip.
#[derive(Debug, Clone)]
pub struct Fire<const N: usize> {
    config: FireConfig,
    heat: Vec<u8, N>,
    palette: ColorPalette,
    rng: SmallRng,
    state: AnimationState,
    steps: StepClock,
}

impl<const N: usize> Fire<N> {
    /// Creates a fire with default tuning and a fixed random seed.
    pub fn new(seed: u64) -> Self {
        Self::with_config(FireConfig::default(), seed)
    }

    pub fn with_config(config: FireConfig, seed: u64) -> Self {
        Self {
            config,
            heat: Vec::new(),
            palette: ColorPalette::heat(),
            rng: SmallRng::seed_from_u64(seed),
            state: AnimationState::new(),
            steps: StepClock::default(),
        }
    }

    pub fn config(&self) -> &FireConfig {
        &self.config
    }

    /// Current heat of every simulated cell, base first.
    pub fn heat(&self) -> &[u8] {
        &self.heat
    }

    /// Runs one tick. Always returns `false`.
    ///
    /// `restart` (or the first call) zeroes the heat array.
    pub fn tick<L: LedStrip + ?Sized>(&mut self, now: Instant, restart: bool, strip: &mut L) -> bool {
        let fresh = restart || !self.state.is_started();
        let elapsed = self.state.advance(now, restart);

        let count = strip.pixel_count();
        let cells = count.min(N);
        if fresh || self.heat.len() != cells {
            self.heat.clear();
            // cells <= N, so the resize always fits
            self.heat.resize(cells, 0).ok();
            self.steps.reset();
        }

        for _ in 0..self.steps.due(elapsed, self.config.step_ms) {
            self.step();
        }

        if cells == 0 {
            return false;
        }
        for index in 0..count {
            let cell = index * cells / count;
            strip.set_pixel(index, self.palette.sample(self.heat[cell]));
        }

        false
    }

    fn step(&mut self) {
        let cells = self.heat.len();
        if cells == 0 {
            return;
        }

        let cooling = ((self.config.cooling as usize * 10) / cells + 2).min(u8::MAX as usize) as u8;
        for cell in self.heat.iter_mut() {
            *cell = cell.saturating_sub(self.rng.gen_range(0..=cooling));
        }

        // Heat drifts away from the base and diffuses
        for k in (2..cells).rev() {
            let drifted = (self.heat[k - 1] as u16 + 2 * self.heat[k - 2] as u16) / 3;
            self.heat[k] = drifted as u8;
        }

        if self.rng.r#gen::<u8>() < self.config.sparking {
            let cell = self.rng.gen_range(0..cells.min(SPARK_ZONE));
            let spark = self.rng.gen_range(160..=u8::MAX);
            self.heat[cell] = self.heat[cell].saturating_add(spark);
        }
    }
}

/// Palette colors driven by a coherent noise field over (pixel, time).
///
/// `scale` is the noise distance between neighbouring pixels in 1/256 of a
/// noise cell: small values give broad, slowly varying blobs, large values
/// a busy speckle. With `color_loop` the palette index also rotates over
/// time.
#[derive(Debug, Clone, Copy)]
pub struct RandomNoise {
    pub scale: u16,
    pub color_loop: bool,
    config: NoiseConfig,
    state: AnimationState,
}

impl RandomNoise {
    pub fn new(scale: u16, color_loop: bool) -> Self {
        Self::with_config(scale, color_loop, NoiseConfig::default())
    }

    pub fn with_config(scale: u16, color_loop: bool, config: NoiseConfig) -> Self {
        Self {
            scale,
            color_loop,
            config,
            state: AnimationState::new(),
        }
    }

    /// Runs one tick. Always returns `false`.
    pub fn tick<L: LedStrip + ?Sized>(
        &mut self,
        palette: &ColorPalette,
        now: Instant,
        restart: bool,
        strip: &mut L,
    ) -> bool {
        let elapsed = self.state.advance(now, restart);

        // Truncation is harmless: the field wraps long before 2^32
        let z = (elapsed as u64 * self.config.speed as u64 / 1000) as u32;
        let shift = if self.color_loop {
            (elapsed / self.config.color_loop_ms.max(1)) as u8
        } else {
            0
        };

        for index in 0..strip.pixel_count() {
            let x = (index as u32).wrapping_mul(self.scale as u32);
            let mut data = noise8(x, z);

            // Stretch the contrast: raw noise clusters around the middle
            data = data.saturating_sub(16);
            data = data.saturating_add(scale8(data, 39));

            strip.set_pixel(index, palette.sample(data.wrapping_add(shift)));
        }

        false
    }
}

/// Candle flame: a flicker level doing a biased random walk, rendered
/// through a palette with a slight per-pixel shimmer.
#[derive(Debug, Clone)]
pub struct Candle {
    config: CandleConfig,
    rng: SmallRng,
    state: AnimationState,
    steps: StepClock,
    brightness: u8,
}

impl Candle {
    pub fn new(seed: u64) -> Self {
        Self::with_config(CandleConfig::default(), seed)
    }

    pub fn with_config(config: CandleConfig, seed: u64) -> Self {
        let mut candle = Self {
            config,
            rng: SmallRng::seed_from_u64(seed),
            state: AnimationState::new(),
            steps: StepClock::default(),
            brightness: 0,
        };
        candle.brightness = candle.rest_level();
        candle
    }

    /// Current flicker level.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Flicker range, tolerant of swapped bounds.
    fn bounds(&self) -> (u8, u8) {
        let CandleConfig {
            min_brightness,
            max_brightness,
            ..
        } = self.config;
        (min_brightness.min(max_brightness), min_brightness.max(max_brightness))
    }

    fn rest_level(&self) -> u8 {
        let (low, high) = self.bounds();
        self.config.rest_brightness.clamp(low, high)
    }

    /// Runs one tick. Always returns `false`.
    pub fn tick<L: LedStrip + ?Sized>(
        &mut self,
        palette: &ColorPalette,
        now: Instant,
        restart: bool,
        strip: &mut L,
    ) -> bool {
        let fresh = restart || !self.state.is_started();
        let elapsed = self.state.advance(now, restart);
        if fresh {
            self.brightness = self.rest_level();
            self.steps.reset();
        }

        for _ in 0..self.steps.due(elapsed, self.config.step_ms) {
            self.step();
        }

        let (low, high) = self.bounds();
        let t = (elapsed as u64 * 256 / 500) as u32;
        for index in 0..strip.pixel_count() {
            let shimmer = (noise8((index as u32).wrapping_mul(96), t) / 8) as i16 - 16;
            let level = (self.brightness as i16 + shimmer).clamp(low as i16, high as i16) as u8;
            strip.set_pixel(index, palette.sample_scaled(level, level));
        }

        false
    }

    fn step(&mut self) {
        let (low, high) = self.bounds();
        let max_step = self.config.max_step as i16;
        let jitter = if max_step > 0 {
            self.rng.gen_range(-max_step..=max_step)
        } else {
            0
        };

        let current = self.brightness as i16;
        let pull = (self.rest_level() as i16 - current) / 4;
        self.brightness = (current + jitter + pull).clamp(low as i16, high as i16) as u8;
    }
}
