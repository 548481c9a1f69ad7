//! Color palettes: ordered stops sampled by an 8-bit index.

use crate::color::{Color, Pixel, rgb};
use crate::colors::{blend, scale};
use crate::config::MAX_PALETTE_STOPS;
use crate::types::PaletteError;
use heapless::Vec;

/// Black → red → orange → yellow → white, used by the fire effect.
pub const HEAT_STOPS: [Pixel; 6] = [
    rgb(0, 0, 0),
    rgb(96, 0, 0),
    rgb(255, 0, 0),
    rgb(255, 128, 0),
    rgb(255, 255, 0),
    rgb(255, 255, 255),
];

pub const LAVA_STOPS: [Pixel; 8] = [
    rgb(0, 0, 0),
    rgb(128, 0, 0),
    rgb(139, 0, 0),
    rgb(255, 0, 0),
    rgb(255, 69, 0),
    rgb(255, 165, 0),
    rgb(255, 255, 0),
    rgb(255, 255, 255),
];

pub const OCEAN_STOPS: [Pixel; 8] = [
    rgb(25, 25, 112),
    rgb(0, 0, 139),
    rgb(0, 0, 128),
    rgb(0, 0, 255),
    rgb(0, 139, 139),
    rgb(0, 191, 255),
    rgb(127, 255, 212),
    rgb(135, 206, 235),
];

pub const FOREST_STOPS: [Pixel; 8] = [
    rgb(0, 100, 0),
    rgb(0, 128, 0),
    rgb(85, 107, 47),
    rgb(107, 142, 35),
    rgb(34, 139, 34),
    rgb(154, 205, 50),
    rgb(144, 238, 144),
    rgb(50, 205, 50),
];

pub const PARTY_STOPS: [Pixel; 8] = [
    rgb(85, 0, 171),
    rgb(171, 0, 85),
    rgb(255, 0, 0),
    rgb(171, 85, 0),
    rgb(171, 171, 0),
    rgb(0, 255, 0),
    rgb(0, 171, 85),
    rgb(0, 0, 255),
];

/// Deep ember to pale flame, for the candle effect.
pub const CANDLE_STOPS: [Pixel; 5] = [
    rgb(64, 8, 0),
    rgb(180, 40, 0),
    rgb(255, 96, 0),
    rgb(255, 147, 41),
    rgb(255, 197, 143),
];

/// An ordered, fixed-capacity list of color stops.
///
/// Sampling maps index 0 to the first stop and 255 to the last, blending
/// linearly between neighbours. Any index is in bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPalette {
    stops: Vec<Pixel, MAX_PALETTE_STOPS>,
}

impl ColorPalette {
    /// Builds a palette from pixels.
    ///
    /// # Errors
    /// * `Empty` - No stops were given
    /// * `CapacityExceeded` - More than [`MAX_PALETTE_STOPS`] stops
    pub fn from_stops(stops: &[Pixel]) -> Result<Self, PaletteError> {
        if stops.is_empty() {
            return Err(PaletteError::Empty);
        }
        let stops = Vec::from_slice(stops).map_err(|_| PaletteError::CapacityExceeded)?;
        Ok(Self { stops })
    }

    /// Builds a palette from colors in any representation.
    pub fn from_colors(colors: &[Color]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }

        let mut stops = Vec::new();
        for color in colors {
            stops
                .push(color.get_rgb())
                .map_err(|_| PaletteError::CapacityExceeded)?;
        }
        Ok(Self { stops })
    }

    /// Built-in palettes are known to fit.
    fn preset(stops: &[Pixel]) -> Self {
        Self {
            stops: stops.iter().copied().take(MAX_PALETTE_STOPS).collect(),
        }
    }

    pub fn heat() -> Self {
        Self::preset(&HEAT_STOPS)
    }

    pub fn lava() -> Self {
        Self::preset(&LAVA_STOPS)
    }

    pub fn ocean() -> Self {
        Self::preset(&OCEAN_STOPS)
    }

    pub fn forest() -> Self {
        Self::preset(&FOREST_STOPS)
    }

    pub fn party() -> Self {
        Self::preset(&PARTY_STOPS)
    }

    pub fn candle() -> Self {
        Self::preset(&CANDLE_STOPS)
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn stops(&self) -> &[Pixel] {
        &self.stops
    }

    /// Color at `index`, blending between the two nearest stops.
    pub fn sample(&self, index: u8) -> Pixel {
        let last = match self.stops.len() {
            0 => return crate::BLACK,
            1 => return self.stops[0],
            len => len - 1,
        };

        // 8.8 fixed-point position along the stops
        let position = index as usize * last * 256 / 255;
        let lower = (position >> 8).min(last);
        let upper = (lower + 1).min(last);
        let amount = (position & 0xFF) as u8;

        blend(self.stops[lower], self.stops[upper], amount)
    }

    /// Like [`sample`](Self::sample), then scaled by `brightness`.
    pub fn sample_scaled(&self, index: u8, brightness: u8) -> Pixel {
        scale(self.sample(index), brightness)
    }
}
