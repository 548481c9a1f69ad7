//! Color generators: what an animation asks for each pixel's color.

use crate::color::{Color, ColorModel, Hsv, Oklab, Pixel};
use crate::palettes::ColorPalette;

/// Anything that can produce a pixel color for a position on the strip.
///
/// `index` is the pixel being drawn and `count` the number of pixels on the
/// strip, so gradients keep their place when an animation only draws part of
/// it. Generators are stateless: the same arguments always give the same
/// color.
pub trait ColorGenerator {
    fn color_at(&self, index: usize, count: usize) -> Pixel;
}

impl ColorGenerator for Pixel {
    #[inline]
    fn color_at(&self, _index: usize, _count: usize) -> Pixel {
        *self
    }
}

impl ColorGenerator for Color {
    #[inline]
    fn color_at(&self, _index: usize, _count: usize) -> Pixel {
        self.get_rgb()
    }
}

/// Adapts a closure `(index, count) -> Pixel` into a generator.
#[derive(Debug, Clone, Copy)]
pub struct FnGenerator<F>(pub F);

impl<F: Fn(usize, usize) -> Pixel> ColorGenerator for FnGenerator<F> {
    #[inline]
    fn color_at(&self, index: usize, count: usize) -> Pixel {
        (self.0)(index, count)
    }
}

/// Position of `index` along a span of `count` pixels, 0.0 at the first pixel
/// and 1.0 at the last.
#[inline]
fn span_ratio(index: usize, count: usize) -> f32 {
    if count <= 1 {
        return 0.0;
    }
    (index.min(count - 1) as f32) / ((count - 1) as f32)
}

/// The built-in generators.
#[derive(Debug, Clone, PartialEq)]
pub enum Generator {
    /// One color everywhere.
    Solid(Pixel),

    /// Perceptual gradient from `start` on the first pixel to `end` on the last.
    Gradient { start: Oklab, end: Oklab },

    /// Full hue wheel spread over the span, rotated by a 16-bit hue offset.
    Rainbow { offset: u16 },

    /// Palette stretched over the span.
    Palette(ColorPalette),
}

impl Generator {
    pub fn solid(color: impl Into<Color>) -> Self {
        Generator::Solid(color.into().get_rgb())
    }

    /// Gradient interpolated in OKLab so brightness changes evenly.
    pub fn gradient(start: impl Into<Color>, end: impl Into<Color>) -> Self {
        Generator::Gradient {
            start: Oklab::from_rgb(start.into().get_rgb()),
            end: Oklab::from_rgb(end.into().get_rgb()),
        }
    }

    pub fn rainbow(offset: u16) -> Self {
        Generator::Rainbow { offset }
    }

    pub fn palette(palette: ColorPalette) -> Self {
        Generator::Palette(palette)
    }
}

impl ColorGenerator for Generator {
    fn color_at(&self, index: usize, count: usize) -> Pixel {
        match self {
            Generator::Solid(pixel) => *pixel,
            Generator::Gradient { start, end } => {
                start.mix(*end, span_ratio(index, count)).get_rgb()
            }
            Generator::Rainbow { offset } => {
                let step = if count == 0 {
                    0
                } else {
                    (index as u64 * 65_536 / count as u64) as u16
                };
                Hsv::from_scaled_hue(offset.wrapping_add(step), 1.0, 1.0).get_rgb()
            }
            Generator::Palette(palette) => {
                let position = span_ratio(index, count) * 255.0;
                palette.sample(libm::roundf(position) as u8)
            }
        }
    }
}

impl From<Pixel> for Generator {
    fn from(pixel: Pixel) -> Self {
        Generator::Solid(pixel)
    }
}

impl From<Color> for Generator {
    fn from(color: Color) -> Self {
        Generator::Solid(color.get_rgb())
    }
}

impl From<ColorPalette> for Generator {
    fn from(palette: ColorPalette) -> Self {
        Generator::Palette(palette)
    }
}
