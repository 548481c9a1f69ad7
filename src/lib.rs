#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Pixel`**: 8-bit sRGB, the format every strip speaks
//! - **`Color`**: a color held in one of seven models (RGB, XYZ, HSV, LAB, LCH, OKLAB, OKLCH)
//! - **`ColorModel`**: conversion to and from `Pixel`, implemented by every model type
//! - **`ColorPalette`**: up to 16 evenly spaced stops sampled with a 0-255 index
//! - **`ColorGenerator`**: picks each pixel's color from its position on the strip
//! - **Animations** (`DotPingPong`, `ColorPulse`, `FadeIn`, `Fire`, ...): own their progress
//!   and draw one frame per `tick`
//! - **`Animator`**: runs one `Effect` on one strip from the control loop
//! - **`LedStrip`**: trait to implement for your strip driver
//! - **`TimeSource`**: trait to implement for your millisecond clock
//! - **`AnimatorAction`**: commands that can be sent to control animators
//!
//! Float math goes through `libm`, so everything works on targets without an FPU
//! runtime in `core`.

#[macro_use]
mod fmt;

pub mod time;
pub mod types;
pub mod config;
pub mod color;
pub mod colors;
pub mod palettes;
pub mod strip;
pub mod generator;
pub mod noise;
pub mod animation;
pub mod procedural;
pub mod animator;
pub mod command;

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub use color::{
    Color, ColorModel, ColorSpace, Hsv, Lab, Lch, Oklab, Oklch, Pixel, Xyz, pack, rgb, unpack,
};
pub use colors::{BLACK, BLUE, CYAN, GREEN, MAGENTA, ORANGE, RED, WHITE, YELLOW};
pub use palettes::ColorPalette;
pub use generator::{ColorGenerator, FnGenerator, Generator};
pub use animation::{ColorPulse, DotPingPong, DoubleSideFill, FadeIn, FadeOut, Police, fill};
pub use procedural::{Candle, Fire, RandomNoise};
pub use types::{AnimationState, PaletteError, PulsePhase};
pub use time::{Instant, TimeSource};
pub use strip::{AlertKind, AlertSink, LedStrip};
pub use config::{CandleConfig, FireConfig, NoiseConfig};
pub use animator::{Animator, AnimatorError, AnimatorState, Effect, TickOutcome};
pub use command::{AnimatorAction, AnimatorCommand};
