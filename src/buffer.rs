//! Shared pixel buffer
//!
//! Holds the authoritative color of every LED. All access goes through
//! short critical sections, so the buffer can be shared by reference
//! between tasks that are polled concurrently.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Vec;

use crate::color::{ColorChannel, Palette, Rgb};
use crate::error::ConfigError;

/// Fixed-length buffer of LED colors
///
/// MAX_LEDS is the capacity; the actual length is chosen at construction
/// and never changes afterwards. Index 0 is the start of the strip.
pub struct PixelBuffer<const MAX_LEDS: usize> {
    len: usize,
    pixels: Mutex<RefCell<Vec<Rgb, MAX_LEDS>>>,
}

impl<const MAX_LEDS: usize> PixelBuffer<MAX_LEDS> {
    /// Create a buffer of `len` black pixels
    pub fn new(len: usize) -> Result<Self, ConfigError> {
        let mut pixels = Vec::new();
        pixels
            .resize(len, Rgb::default())
            .map_err(|()| ConfigError::CapacityExceeded {
                requested: len,
                capacity: MAX_LEDS,
            })?;

        Ok(Self {
            len,
            pixels: Mutex::new(RefCell::new(pixels)),
        })
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check that `index` addresses a pixel of this buffer
    pub const fn check_index(&self, index: usize) -> Result<(), ConfigError> {
        if index < self.len {
            Ok(())
        } else {
            Err(ConfigError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// Check an inclusive `start..=end` range against this buffer
    pub const fn check_range(&self, start: usize, end: usize) -> Result<(), ConfigError> {
        if start > end {
            return Err(ConfigError::InvalidRange { start, end });
        }
        self.check_index(end)
    }

    /// Get the color of a pixel
    pub fn get(&self, index: usize) -> Result<Rgb, ConfigError> {
        self.check_index(index)?;
        Ok(self.with_pixels(|pixels| pixels[index]))
    }

    /// Set the color of a pixel
    pub fn set(&self, index: usize, color: Rgb) -> Result<(), ConfigError> {
        self.check_index(index)?;
        self.with_pixels(|pixels| pixels[index] = color);
        Ok(())
    }

    /// Set a single channel of a pixel, leaving the others untouched
    pub fn set_channel(
        &self,
        index: usize,
        channel: ColorChannel,
        value: u8,
    ) -> Result<(), ConfigError> {
        self.check_index(index)?;
        self.with_pixels(|pixels| pixels[index] = channel.with(pixels[index], value));
        Ok(())
    }

    /// Set every pixel to `color`
    pub fn set_all(&self, color: Rgb) {
        self.with_pixels(|pixels| pixels.fill(color));
    }

    /// Set pixels `start..=end` to `color`
    ///
    /// Nothing is written if the range is invalid.
    pub fn set_range(&self, start: usize, end: usize, color: Rgb) -> Result<(), ConfigError> {
        self.check_range(start, end)?;
        self.with_pixels(|pixels| pixels[start..=end].fill(color));
        Ok(())
    }

    /// Replace every pixel with `f(pixel)`
    pub fn map_all(&self, mut f: impl FnMut(Rgb) -> Rgb) {
        self.with_pixels(|pixels| {
            for pixel in pixels.iter_mut() {
                *pixel = f(*pixel);
            }
        });
    }

    /// Write palette entries shifted by `offset`, wrapping around the end
    ///
    /// Entry `i` lands on pixel `(i + offset) % len`. No-op on an empty buffer.
    pub fn apply_palette<const N: usize>(&self, palette: &Palette<N>, offset: usize) {
        if self.is_empty() {
            return;
        }
        self.with_pixels(|pixels| {
            for (index, color) in palette.iter() {
                pixels[(index % self.len + offset % self.len) % self.len] = color;
            }
        });
    }

    /// Copy the current colors into `out`
    ///
    /// Returns the number of pixels copied.
    pub fn snapshot(&self, out: &mut [Rgb]) -> usize {
        critical_section::with(|cs| {
            let pixels = self.pixels.borrow(cs).borrow();
            let count = pixels.len().min(out.len());
            out[..count].copy_from_slice(&pixels[..count]);
            count
        })
    }

    fn with_pixels<R>(&self, f: impl FnOnce(&mut [Rgb]) -> R) -> R {
        critical_section::with(|cs| {
            let mut pixels = self.pixels.borrow(cs).borrow_mut();
            f(&mut pixels)
        })
    }
}
