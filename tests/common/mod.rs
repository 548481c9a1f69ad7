//! Shared test infrastructure for strip-animator integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use strip_animator::{AlertKind, AlertSink, BLACK, LedStrip, Pixel, TimeSource};

// ============================================================================
// Mock Strip
// ============================================================================

/// Frame-buffer strip that counts `show` calls
pub struct MockStrip {
    pixels: heapless::Vec<Pixel, 256>,
    show_count: usize,
}

impl MockStrip {
    pub fn new(count: usize) -> Self {
        let mut pixels = heapless::Vec::new();
        pixels.resize(count.min(256), BLACK).unwrap();
        Self {
            pixels,
            show_count: 0,
        }
    }

    /// Strip with every pixel preset to `color`
    pub fn filled(count: usize, color: Pixel) -> Self {
        let mut strip = Self::new(count);
        for pixel in strip.pixels.iter_mut() {
            *pixel = color;
        }
        strip
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn show_count(&self) -> usize {
        self.show_count
    }

    /// Number of pixels that are not black
    pub fn lit(&self) -> usize {
        self.pixels.iter().filter(|pixel| **pixel != BLACK).count()
    }

    pub fn all(&self, color: Pixel) -> bool {
        self.pixels.iter().all(|pixel| *pixel == color)
    }
}

impl LedStrip for MockStrip {
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
        self.show_count += 1;
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<u32>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(millis: u32) -> Self {
        Self {
            current_time: core::cell::Cell::new(millis),
        }
    }

    /// Advance time by the given number of milliseconds, wrapping like a hardware tick counter
    pub fn advance(&self, millis: u32) {
        let current = self.current_time.get();
        self.current_time.set(current.wrapping_add(millis));
    }

    pub fn set_time(&self, millis: u32) {
        self.current_time.set(millis);
    }
}

impl TimeSource for MockTimeSource {
    fn now_ms(&self) -> u32 {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Alert Sink
// ============================================================================

/// Records every alert raised
pub struct MockAlertSink {
    alerts: heapless::Vec<AlertKind, 16>,
}

impl MockAlertSink {
    pub fn new() -> Self {
        Self {
            alerts: heapless::Vec::new(),
        }
    }

    pub fn alerts(&self) -> &[AlertKind] {
        &self.alerts
    }
}

impl AlertSink for MockAlertSink {
    fn raise_alert(&mut self, kind: AlertKind) {
        let _ = self.alerts.push(kind);
    }
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use strip_animator::{BLUE, GREEN, RED, WHITE};

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two pixels with a per-channel tolerance
pub fn pixels_close(a: Pixel, b: Pixel, tolerance: u8) -> bool {
    a.red.abs_diff(b.red) <= tolerance
        && a.green.abs_diff(b.green) <= tolerance
        && a.blue.abs_diff(b.blue) <= tolerance
}
