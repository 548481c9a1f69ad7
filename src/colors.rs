//! Named colors and pixel helpers.
//!
//! Provides the small integer operations animations run per pixel (scaling,
//! blending), HSV shortcuts that are more intuitive for hue wheels, and a few
//! color pickers (random, complementary).

use crate::color::{ColorModel, Hsv, Pixel, normalize_hue, rgb, to_pixel};
use palette::Srgb;
use rand::Rng;

pub const BLACK: Pixel = rgb(0, 0, 0);
pub const WHITE: Pixel = rgb(255, 255, 255);
pub const RED: Pixel = rgb(255, 0, 0);
pub const GREEN: Pixel = rgb(0, 255, 0);
pub const BLUE: Pixel = rgb(0, 0, 255);
pub const YELLOW: Pixel = rgb(255, 255, 0);
pub const ORANGE: Pixel = rgb(255, 128, 0);
pub const CYAN: Pixel = rgb(0, 255, 255);
pub const MAGENTA: Pixel = rgb(255, 0, 255);

/// Exponent applied by [`hue_to_rgb_power`] to each channel weight.
const POWER_WHEEL_EXPONENT: f32 = 0.5;

/// Creates a pixel from HSV (Hue, Saturation, Value) components.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Pixel {
    Hsv::new(hue, saturation, value).get_rgb()
}

/// Creates a pixel from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Pixel {
    hsv(hue, 1.0, 1.0)
}

/// Scales one channel by `level / 256`, with 255 meaning unchanged.
#[inline]
pub const fn scale8(channel: u8, level: u8) -> u8 {
    ((channel as u16 * (level as u16 + 1)) >> 8) as u8
}

/// Scales every channel of a pixel by `level` (255 = unchanged, 0 = black).
#[inline]
pub const fn scale(pixel: Pixel, level: u8) -> Pixel {
    rgb(
        scale8(pixel.red, level),
        scale8(pixel.green, level),
        scale8(pixel.blue, level),
    )
}

/// Multiplies every channel by `factor`, rounding and clamping to 0-255.
#[inline]
pub fn dim(pixel: Pixel, factor: f32) -> Pixel {
    let channel = |c: u8| {
        let scaled = libm::roundf(c as f32 * factor);
        if scaled.is_nan() {
            0
        } else {
            scaled.clamp(0.0, 255.0) as u8
        }
    };
    rgb(channel(pixel.red), channel(pixel.green), channel(pixel.blue))
}

#[inline]
const fn lerp8(from: u8, to: u8, amount: u8) -> u8 {
    let from = from as i32;
    let delta = to as i32 - from;
    (from + (delta * amount as i32) / 255) as u8
}

/// Blends `from` toward `to`; `amount` 0 gives `from`, 255 gives `to`.
#[inline]
pub const fn blend(from: Pixel, to: Pixel, amount: u8) -> Pixel {
    rgb(
        lerp8(from.red, to.red, amount),
        lerp8(from.green, to.green, amount),
        lerp8(from.blue, to.blue, amount),
    )
}

/// Linear RGB gradient between two colors. `level` is clamped to 0.0-1.0.
pub fn gradient(start: Pixel, end: Pixel, level: f32) -> Pixel {
    let level = if level.is_nan() { 0.0 } else { level.clamp(0.0, 1.0) };
    let channel = |a: u8, b: u8| a as f32 + (b as f32 - a as f32) * level;
    let mixed = Srgb::new(
        channel(start.red, end.red) / 255.0,
        channel(start.green, end.green) / 255.0,
        channel(start.blue, end.blue) / 255.0,
    );
    to_pixel(mixed)
}

/// A random fully saturated color.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Pixel {
    hue(rng.gen_range(0.0..360.0))
}

/// The color on the opposite side of the hue wheel, same saturation and value.
pub fn complementary(color: Pixel) -> Pixel {
    let hsv = Hsv::from_rgb(color);
    Hsv::new(hsv.h + 180.0, hsv.s, hsv.v).get_rgb()
}

/// The complementary color shifted by a random hue offset.
///
/// `tolerance` in 0.0-1.0 bounds the offset to `tolerance × 180°` on either
/// side: 0 gives exactly [`complementary`], 1 any hue.
pub fn random_complementary<R: Rng + ?Sized>(color: Pixel, tolerance: f32, rng: &mut R) -> Pixel {
    let tolerance = if tolerance.is_nan() { 0.0 } else { tolerance.clamp(0.0, 1.0) };
    let hsv = Hsv::from_rgb(color);

    let spread = tolerance * 180.0;
    let offset = if spread > 0.0 {
        rng.gen_range(-spread..=spread)
    } else {
        0.0
    };

    Hsv::new(hsv.h + 180.0 + offset, hsv.s, hsv.v).get_rgb()
}

/// Hue of a pixel in whole degrees, 0-359.
pub fn rgb_to_hue(color: Pixel) -> u16 {
    let degrees = libm::roundf(Hsv::from_rgb(color).h) as u16;
    degrees % 360
}

/// Standard hexagonal hue wheel. `angle` is in degrees and wraps.
pub fn hue_to_rgb(angle: u16) -> Pixel {
    hue(angle as f32)
}

/// Weight of a channel centered at `center` degrees, 1.0 at the center
/// falling linearly to 0.0 at 120° away.
fn channel_weight(angle: f32, center: f32) -> f32 {
    let mut distance = libm::fabsf(normalize_hue(angle) - center);
    if distance > 180.0 {
        distance = 360.0 - distance;
    }
    (1.0 - distance / 120.0).clamp(0.0, 1.0)
}

/// Hue wheel whose channel weights follow a power law: each channel falls off
/// from its primary as a square root instead of linearly, so colors between
/// two primaries keep more of both.
pub fn hue_to_rgb_power(angle: u16) -> Pixel {
    let angle = angle as f32;
    let channel = |center: f32| libm::powf(channel_weight(angle, center), POWER_WHEEL_EXPONENT);
    to_pixel(Srgb::new(channel(0.0), channel(120.0), channel(240.0)))
}

/// Hue wheel built from three phase-shifted squared cosines (a "sinebow").
/// Channels always sum to 1.5, so brightness stays even around the wheel.
pub fn hue_to_rgb_sinus(angle: u16) -> Pixel {
    let angle = normalize_hue(angle as f32);
    let channel = |center: f32| {
        let c = libm::cosf(core::f32::consts::PI * (angle - center) / 360.0);
        c * c
    };
    to_pixel(Srgb::new(channel(0.0), channel(120.0), channel(240.0)))
}
