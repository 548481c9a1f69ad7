//! Timing constants and per-effect tuning.

/// Nominal control-loop period. Animations stay correct under jitter; this is
/// only the rate their step-based simulations are tuned for.
pub const LOOP_UPDATE_PERIOD_MS: u32 = 40;

/// Default full cycle of the police strobe (both halves).
pub const POLICE_PERIOD_MS: u32 = 800;

/// Maximum number of stops a [`ColorPalette`](crate::ColorPalette) can hold.
pub const MAX_PALETTE_STOPS: usize = 16;

/// Upper bound on simulation steps run in one tick after a long stall.
pub const MAX_CATCH_UP_STEPS: u32 = 4;

/// Tuning for the fire simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FireConfig {
    /// How much every cell cools per step. Higher values give shorter flames.
    pub cooling: u8,
    /// Chance (out of 255) that a new spark is lit per step.
    pub sparking: u8,
    /// Simulation step period in milliseconds.
    pub step_ms: u32,
}

impl Default for FireConfig {
    fn default() -> Self {
        Self {
            cooling: 55,
            sparking: 120,
            step_ms: LOOP_UPDATE_PERIOD_MS,
        }
    }
}

/// Tuning for the candle flicker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CandleConfig {
    /// Dimmest flicker level.
    pub min_brightness: u8,
    /// Brightest flicker level.
    pub max_brightness: u8,
    /// Level the random walk is pulled back toward.
    pub rest_brightness: u8,
    /// Largest random change per step.
    pub max_step: u8,
    /// Random walk step period in milliseconds.
    pub step_ms: u32,
}

impl Default for CandleConfig {
    fn default() -> Self {
        Self {
            min_brightness: 96,
            max_brightness: 255,
            rest_brightness: 200,
            max_step: 24,
            step_ms: LOOP_UPDATE_PERIOD_MS,
        }
    }
}

/// Tuning for the palette noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoiseConfig {
    /// Distance travelled along the time axis per second, in 1/256 noise cells.
    pub speed: u16,
    /// Milliseconds per palette index step when color looping.
    pub color_loop_ms: u32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            speed: 512,
            color_loop_ms: LOOP_UPDATE_PERIOD_MS,
        }
    }
}
