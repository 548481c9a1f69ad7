//! Hardware boundary traits: the pixel surface animations draw into and the
//! optional alert sink used by power-management collaborators.

use crate::color::Pixel;

/// Trait for abstracting an addressable LED strip.
///
/// Implement this for your strip driver (WS2812 over SPI/PIO, SK6812, a
/// frame buffer in a test...). The buffer and its transmission stay with the
/// implementation: animations only read and write pixels through this trait
/// and never call [`show`](LedStrip::show) themselves.
pub trait LedStrip {
    /// Number of addressable pixels.
    fn pixel_count(&self) -> usize;

    /// Writes one pixel. Out-of-range indices must be ignored.
    fn set_pixel(&mut self, index: usize, color: Pixel);

    /// Reads back one pixel. Out-of-range indices return black.
    fn get_pixel(&self, index: usize) -> Pixel;

    /// Pushes the buffer to the hardware.
    ///
    /// Called by the control loop after each tick. Handle any hardware errors
    /// internally - this method cannot fail.
    fn show(&mut self);
}

impl<L: LedStrip + ?Sized> LedStrip for &mut L {
    fn pixel_count(&self) -> usize {
        (**self).pixel_count()
    }

    fn set_pixel(&mut self, index: usize, color: Pixel) {
        (**self).set_pixel(index, color)
    }

    fn get_pixel(&self, index: usize) -> Pixel {
        (**self).get_pixel(index)
    }

    fn show(&mut self) {
        (**self).show()
    }
}

/// Sets every pixel in `range` to `color`, ignoring anything past the end.
pub fn fill_range<L: LedStrip + ?Sized>(strip: &mut L, range: core::ops::Range<usize>, color: Pixel) {
    let end = range.end.min(strip.pixel_count());
    for index in range.start..end {
        strip.set_pixel(index, color);
    }
}

/// Turns the whole strip off.
pub fn clear<L: LedStrip + ?Sized>(strip: &mut L) {
    let count = strip.pixel_count();
    fill_range(strip, 0..count, crate::BLACK);
}

/// Conditions the surrounding firmware can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertKind {
    /// Battery below the low threshold.
    BatteryLow,
    /// Battery below the critical threshold.
    BatteryCritical,
    /// Charger reported a fault.
    ChargerFault,
    /// Power source cannot supply the requested current.
    PowerLimited,
    /// Strip drew more current than allowed.
    OverCurrent,
}

/// Sink for alerts raised by the power-management side of the firmware.
///
/// The animation engine never raises alerts; the trait lives here so the
/// control loop can hand one sink to every collaborator.
pub trait AlertSink {
    /// Records an alert.
    fn raise_alert(&mut self, kind: AlertKind);
}
