//! Memory calculator for strip-animator
//!
//! Calculates the footprint of effects and full `Animator` instances for a
//! few buffer capacities and strip drivers, and writes it to `report.md`.
//!
//! Usage:
//!   cd tools/sizeof-calculator
//!   cargo run --release
//!   cat report.md

use std::fs::File;
use std::io::Write;
use std::mem::size_of;
use strip_animator::{
    Animator, AnimatorAction, BLACK, Candle, Color, ColorPalette, ColorPulse, DotPingPong, Effect,
    FadeIn, FadeOut, Fire, Generator, LedStrip, Pixel, Police, RandomNoise, TimeSource,
};

// ============================================================================
// Mock Strip Types (representing different driver sizes)
// ============================================================================

// Small strip - 30 pixels buffered in RAM
#[allow(dead_code)]
struct SmallStrip {
    pixels: [Pixel; 30],
}

// Large strip - 144 pixels plus an SPI encoding buffer
#[allow(dead_code)]
struct LargeStrip {
    pixels: [Pixel; 144],
    _spi_buffer: [u8; 144 * 12],
}

macro_rules! impl_strip {
    ($strip:ty) => {
        impl LedStrip for $strip {
            fn pixel_count(&self) -> usize {
                self.pixels.len()
            }

            fn set_pixel(&mut self, index: usize, color: Pixel) {
                if let Some(pixel) = self.pixels.get_mut(index) {
                    *pixel = color;
                }
            }

            fn get_pixel(&self, index: usize) -> Pixel {
                self.pixels.get(index).copied().unwrap_or(BLACK)
            }

            fn show(&mut self) {
                // Mock implementation
            }
        }
    };
}

impl_strip!(SmallStrip);
impl_strip!(LargeStrip);

#[allow(dead_code)]
struct Clock;

impl TimeSource for Clock {
    fn now_ms(&self) -> u32 {
        0
    }
}

// ============================================================================
// Report Generation Functions
// ============================================================================

fn write_header(f: &mut File) -> std::io::Result<()> {
    writeln!(f, "# Strip Animator Memory Footprint Analysis")?;
    writeln!(f)?;
    writeln!(
        f,
        "**Generated:** {}  ",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(
        f,
        "**Architecture:** {}-bit host",
        std::mem::size_of::<usize>() * 8
    )?;
    writeln!(f)?;
    Ok(())
}

fn write_component_sizes(f: &mut File) -> std::io::Result<()> {
    writeln!(f, "## Component Sizes")?;
    writeln!(f)?;
    writeln!(f, "| Component | Size |")?;
    writeln!(f, "|-----------|------|")?;
    writeln!(f, "| `Pixel` | {} B |", size_of::<Pixel>())?;
    writeln!(f, "| `Color` | {} B |", size_of::<Color>())?;
    writeln!(f, "| `ColorPalette` | {} B |", size_of::<ColorPalette>())?;
    writeln!(f, "| `Generator` | {} B |", size_of::<Generator>())?;
    writeln!(f)?;
    Ok(())
}

fn write_animation_sizes(f: &mut File) -> std::io::Result<()> {
    writeln!(f, "## Animation State Sizes")?;
    writeln!(f)?;
    writeln!(f, "| Animation | Size |")?;
    writeln!(f, "|-----------|------|")?;
    writeln!(f, "| `DotPingPong` | {} B |", size_of::<DotPingPong>())?;
    writeln!(f, "| `ColorPulse` | {} B |", size_of::<ColorPulse>())?;
    writeln!(f, "| `Police` | {} B |", size_of::<Police>())?;
    writeln!(f, "| `FadeOut<30>` | {} B |", size_of::<FadeOut<30>>())?;
    writeln!(f, "| `FadeOut<144>` | {} B |", size_of::<FadeOut<144>>())?;
    writeln!(f, "| `FadeIn` | {} B |", size_of::<FadeIn>())?;
    writeln!(f, "| `RandomNoise` | {} B |", size_of::<RandomNoise>())?;
    writeln!(f, "| `Candle` | {} B |", size_of::<Candle>())?;
    writeln!(f, "| `Fire<30>` | {} B |", size_of::<Fire<30>>())?;
    writeln!(f, "| `Fire<144>` | {} B |", size_of::<Fire<144>>())?;
    writeln!(f)?;
    Ok(())
}

fn effect_row<const N: usize>(f: &mut File) -> std::io::Result<()> {
    writeln!(
        f,
        "| {} | {} B | {} B | {} B | {} B |",
        N,
        size_of::<Effect<N>>(),
        size_of::<AnimatorAction<N>>(),
        size_of::<Animator<'static, SmallStrip, Clock, N>>(),
        size_of::<Animator<'static, LargeStrip, Clock, N>>(),
    )
}

fn write_animator_table(f: &mut File) -> std::io::Result<()> {
    writeln!(f, "## Animator Memory Usage")?;
    writeln!(f)?;
    writeln!(
        f,
        "| Capacity `N` | `Effect` | `AnimatorAction` | Animator (30 px) | Animator (144 px) |"
    )?;
    writeln!(f, "|--------------|----------|------------------|------------------|-------------------|")?;
    effect_row::<16>(f)?;
    effect_row::<30>(f)?;
    effect_row::<64>(f)?;
    effect_row::<144>(f)?;
    writeln!(f)?;
    Ok(())
}

fn main() -> std::io::Result<()> {
    let report_path = "report.md";

    // Remove old report if it exists
    let _ = std::fs::remove_file(report_path);

    let mut file = File::create(report_path)?;

    println!("Generating memory footprint analysis...");

    write_header(&mut file)?;
    write_component_sizes(&mut file)?;
    write_animation_sizes(&mut file)?;
    write_animator_table(&mut file)?;

    println!("Report written to {report_path}");
    Ok(())
}
