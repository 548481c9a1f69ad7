//! Color model: conversions between 8-bit RGB pixels and the XYZ, HSV, LAB,
//! LCH, OKLAB and OKLCH representations.
//!
//! RGB is the interchange format. Every other representation is built from a
//! [`Pixel`] with [`ColorModel::from_rgb`] and turned back into one with
//! [`ColorModel::get_rgb`]. The numeric work is done by `palette` in `f32`;
//! this module fixes the scaling and hue conventions used across the crate:
//!
//! - XYZ is scaled so that the D65 white point is `(95.047, 100.0, 108.883)`.
//! - Hues are degrees in `[0, 360)`. A color without chroma has hue `0`.
//! - Colors outside the sRGB gamut are clamped per channel when converted to
//!   RGB.

use palette::{FromColor, Srgb};

/// An 8-bit sRGB pixel, the format written to the strip.
pub type Pixel = Srgb<u8>;

/// Full `u16` range used for scaled hues.
const SCALED_HUE_MAX: f32 = u16::MAX as f32;

/// XYZ values are exposed on a 0-100 scale.
const XYZ_SCALE: f32 = 100.0;

/// Below this chroma a LAB color is treated as achromatic.
const LAB_CHROMA_EPSILON: f32 = 1e-2;

/// Below this chroma an OKLAB color is treated as achromatic.
const OKLAB_CHROMA_EPSILON: f32 = 2e-4;

/// Creates a pixel from its channels.
#[inline]
pub const fn rgb(red: u8, green: u8, blue: u8) -> Pixel {
    Srgb::new(red, green, blue)
}

/// Packs a pixel as `0x00RRGGBB`.
#[inline]
pub const fn pack(pixel: Pixel) -> u32 {
    ((pixel.red as u32) << 16) | ((pixel.green as u32) << 8) | pixel.blue as u32
}

/// Unpacks a `0x00RRGGBB` value. The top byte is ignored.
#[inline]
pub const fn unpack(packed: u32) -> Pixel {
    rgb((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
}

/// Wraps any angle into `[0, 360)`. Non-finite input maps to `0`.
pub fn normalize_hue(degrees: f32) -> f32 {
    if !degrees.is_finite() {
        return 0.0;
    }

    let mut hue = libm::fmodf(degrees, 360.0);
    if hue < 0.0 {
        hue += 360.0;
    }
    // -tiny + 360.0 rounds up to 360.0 in f32
    if hue >= 360.0 {
        hue = 0.0;
    }
    hue
}

/// Maps a hue in degrees onto the full `u16` range.
#[inline]
pub fn scale_hue(degrees: f32) -> u16 {
    (normalize_hue(degrees) / 360.0 * SCALED_HUE_MAX) as u16
}

/// Inverse of [`scale_hue`].
#[inline]
pub fn unscale_hue(scaled: u16) -> f32 {
    normalize_hue(scaled as f32 / SCALED_HUE_MAX * 360.0)
}

#[inline]
pub(crate) fn to_float(pixel: Pixel) -> Srgb {
    pixel.into_format()
}

#[inline]
pub(crate) fn to_pixel(color: Srgb) -> Pixel {
    // NaN fails every comparison in clamp, map it to black first
    let channel = |c: f32| if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) };
    Srgb::new(channel(color.red), channel(color.green), channel(color.blue)).into_format()
}

/// Conversion contract shared by every color representation.
pub trait ColorModel: Sized {
    /// Builds this representation from an RGB pixel. Total: every pixel is valid.
    fn from_rgb(rgb: Pixel) -> Self;

    /// Converts back to an RGB pixel, clamping out-of-gamut channels.
    fn get_rgb(&self) -> Pixel;
}

impl ColorModel for Pixel {
    #[inline]
    fn from_rgb(rgb: Pixel) -> Self {
        rgb
    }

    #[inline]
    fn get_rgb(&self) -> Pixel {
        *self
    }
}

/// CIE 1931 tristimulus values on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Xyz {
    /// D65 reference white.
    pub const WHITE: Xyz = Xyz::new(95.047, 100.0, 108.883);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl ColorModel for Xyz {
    fn from_rgb(rgb: Pixel) -> Self {
        let xyz: palette::Xyz = palette::Xyz::from_color(to_float(rgb));
        Self::new(xyz.x * XYZ_SCALE, xyz.y * XYZ_SCALE, xyz.z * XYZ_SCALE)
    }

    fn get_rgb(&self) -> Pixel {
        let xyz: palette::Xyz =
            palette::Xyz::new(self.x / XYZ_SCALE, self.y / XYZ_SCALE, self.z / XYZ_SCALE);
        let color: Srgb = Srgb::from_color(xyz);
        to_pixel(color)
    }
}

/// Hue (degrees), saturation and value (both 0.0-1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self {
            h: normalize_hue(h),
            s,
            v,
        }
    }

    /// Builds a color from a hue on the full `u16` range.
    pub fn from_scaled_hue(hue: u16, s: f32, v: f32) -> Self {
        Self::new(unscale_hue(hue), s, v)
    }

    /// Hue mapped onto the full `u16` range.
    pub fn scaled_hue(&self) -> u16 {
        scale_hue(self.h)
    }
}

impl ColorModel for Hsv {
    fn from_rgb(rgb: Pixel) -> Self {
        let max = rgb.red.max(rgb.green).max(rgb.blue);
        let min = rgb.red.min(rgb.green).min(rgb.blue);

        let hsv: palette::Hsv = palette::Hsv::from_color(to_float(rgb));
        let hue = if max == min {
            0.0
        } else {
            hsv.hue.into_positive_degrees()
        };

        Self::new(hue, hsv.saturation, hsv.value)
    }

    fn get_rgb(&self) -> Pixel {
        let hsv: palette::Hsv = palette::Hsv::new(self.h, self.s, self.v);
        let color: Srgb = Srgb::from_color(hsv);
        to_pixel(color)
    }
}

/// CIE L*a*b* relative to D65.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl Lab {
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    fn into_palette(self) -> palette::Lab {
        palette::Lab::new(self.l, self.a, self.b)
    }
}

impl ColorModel for Lab {
    fn from_rgb(rgb: Pixel) -> Self {
        let lab: palette::Lab = palette::Lab::from_color(to_float(rgb));
        Self::new(lab.l, lab.a, lab.b)
    }

    fn get_rgb(&self) -> Pixel {
        let color: Srgb = Srgb::from_color(self.into_palette());
        to_pixel(color)
    }
}

/// Polar form of [`Lab`]: lightness, chroma, hue (degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    pub l: f32,
    pub c: f32,
    pub h: f32,
}

impl Lch {
    pub fn new(l: f32, c: f32, h: f32) -> Self {
        Self {
            l,
            c,
            h: normalize_hue(h),
        }
    }

    pub fn scaled_hue(&self) -> u16 {
        scale_hue(self.h)
    }
}

impl From<Lab> for Lch {
    fn from(lab: Lab) -> Self {
        let lch: palette::Lch = palette::Lch::from_color(lab.into_palette());
        let hue = if lch.chroma < LAB_CHROMA_EPSILON {
            0.0
        } else {
            lch.hue.into_positive_degrees()
        };
        Lch::new(lch.l, lch.chroma, hue)
    }
}

impl From<Lch> for Lab {
    fn from(lch: Lch) -> Self {
        let polar: palette::Lch = palette::Lch::new(lch.l, lch.c, lch.h);
        let lab: palette::Lab = palette::Lab::from_color(polar);
        Lab::new(lab.l, lab.a, lab.b)
    }
}

impl ColorModel for Lch {
    fn from_rgb(rgb: Pixel) -> Self {
        Lab::from_rgb(rgb).into()
    }

    fn get_rgb(&self) -> Pixel {
        Lab::from(*self).get_rgb()
    }
}

/// Björn Ottosson's OKLab: lightness 0.0-1.0 and two opponent axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl Oklab {
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    fn into_palette(self) -> palette::Oklab {
        palette::Oklab::new(self.l, self.a, self.b)
    }

    /// Straight-line interpolation toward `other`, `t` clamped to 0.0-1.0.
    pub fn mix(self, other: Oklab, t: f32) -> Oklab {
        use palette::Mix;

        let mixed = self.into_palette().mix(other.into_palette(), t.clamp(0.0, 1.0));
        Oklab::new(mixed.l, mixed.a, mixed.b)
    }
}

impl ColorModel for Oklab {
    fn from_rgb(rgb: Pixel) -> Self {
        let oklab: palette::Oklab = palette::Oklab::from_color(to_float(rgb));
        Self::new(oklab.l, oklab.a, oklab.b)
    }

    fn get_rgb(&self) -> Pixel {
        let color: Srgb = Srgb::from_color(self.into_palette());
        to_pixel(color)
    }
}

/// Polar form of [`Oklab`]: lightness, chroma, hue (degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    pub l: f32,
    pub c: f32,
    pub h: f32,
}

impl Oklch {
    pub fn new(l: f32, c: f32, h: f32) -> Self {
        Self {
            l,
            c,
            h: normalize_hue(h),
        }
    }

    pub fn scaled_hue(&self) -> u16 {
        scale_hue(self.h)
    }
}

impl From<Oklab> for Oklch {
    fn from(oklab: Oklab) -> Self {
        let oklch: palette::Oklch = palette::Oklch::from_color(oklab.into_palette());
        let hue = if oklch.chroma < OKLAB_CHROMA_EPSILON {
            0.0
        } else {
            oklch.hue.into_positive_degrees()
        };
        Oklch::new(oklch.l, oklch.chroma, hue)
    }
}

impl From<Oklch> for Oklab {
    fn from(oklch: Oklch) -> Self {
        let polar: palette::Oklch = palette::Oklch::new(oklch.l, oklch.c, oklch.h);
        let oklab: palette::Oklab = palette::Oklab::from_color(polar);
        Oklab::new(oklab.l, oklab.a, oklab.b)
    }
}

impl ColorModel for Oklch {
    fn from_rgb(rgb: Pixel) -> Self {
        Oklab::from_rgb(rgb).into()
    }

    fn get_rgb(&self) -> Pixel {
        Oklab::from(*self).get_rgb()
    }
}

/// Names of the supported representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorSpace {
    Rgb,
    Xyz,
    Hsv,
    Lab,
    Lch,
    Oklab,
    Oklch,
}

/// A color in any supported representation.
///
/// Closed over the representations the crate knows about, so rendering code
/// dispatches with a `match` instead of a vtable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgb(Pixel),
    Xyz(Xyz),
    Hsv(Hsv),
    Lab(Lab),
    Lch(Lch),
    Oklab(Oklab),
    Oklch(Oklch),
}

impl Color {
    /// Builds a color in `space` from an RGB pixel.
    pub fn from_rgb(space: ColorSpace, rgb: Pixel) -> Self {
        match space {
            ColorSpace::Rgb => Color::Rgb(rgb),
            ColorSpace::Xyz => Color::Xyz(Xyz::from_rgb(rgb)),
            ColorSpace::Hsv => Color::Hsv(Hsv::from_rgb(rgb)),
            ColorSpace::Lab => Color::Lab(Lab::from_rgb(rgb)),
            ColorSpace::Lch => Color::Lch(Lch::from_rgb(rgb)),
            ColorSpace::Oklab => Color::Oklab(Oklab::from_rgb(rgb)),
            ColorSpace::Oklch => Color::Oklch(Oklch::from_rgb(rgb)),
        }
    }

    /// Builds an RGB color from a packed `0x00RRGGBB` value.
    pub const fn from_packed(packed: u32) -> Self {
        Color::Rgb(unpack(packed))
    }

    /// The pixel to display for this color.
    pub fn get_rgb(&self) -> Pixel {
        match self {
            Color::Rgb(pixel) => *pixel,
            Color::Xyz(c) => c.get_rgb(),
            Color::Hsv(c) => c.get_rgb(),
            Color::Lab(c) => c.get_rgb(),
            Color::Lch(c) => c.get_rgb(),
            Color::Oklab(c) => c.get_rgb(),
            Color::Oklch(c) => c.get_rgb(),
        }
    }

    /// Which representation this color is stored in.
    pub fn space(&self) -> ColorSpace {
        match self {
            Color::Rgb(_) => ColorSpace::Rgb,
            Color::Xyz(_) => ColorSpace::Xyz,
            Color::Hsv(_) => ColorSpace::Hsv,
            Color::Lab(_) => ColorSpace::Lab,
            Color::Lch(_) => ColorSpace::Lch,
            Color::Oklab(_) => ColorSpace::Oklab,
            Color::Oklch(_) => ColorSpace::Oklch,
        }
    }

    /// Re-expresses this color in another representation, through RGB.
    pub fn convert(&self, space: ColorSpace) -> Self {
        if self.space() == space {
            return *self;
        }
        Color::from_rgb(space, self.get_rgb())
    }
}

impl From<Pixel> for Color {
    fn from(pixel: Pixel) -> Self {
        Color::Rgb(pixel)
    }
}

impl From<Xyz> for Color {
    fn from(c: Xyz) -> Self {
        Color::Xyz(c)
    }
}

impl From<Hsv> for Color {
    fn from(c: Hsv) -> Self {
        Color::Hsv(c)
    }
}

impl From<Lab> for Color {
    fn from(c: Lab) -> Self {
        Color::Lab(c)
    }
}

impl From<Lch> for Color {
    fn from(c: Lch) -> Self {
        Color::Lch(c)
    }
}

impl From<Oklab> for Color {
    fn from(c: Oklab) -> Self {
        Color::Oklab(c)
    }
}

impl From<Oklch> for Color {
    fn from(c: Oklch) -> Self {
        Color::Oklch(c)
    }
}
