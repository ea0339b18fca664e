use core::cell::{Cell, RefCell};

use crate::OutputDriver;
use crate::buffer::PixelBuffer;
use crate::color::Rgb;

/// Flushes pixel buffers to the output driver
///
/// `show` is the only point at which buffer contents become visible. Only
/// the snapshot is taken inside a critical section; the driver write runs
/// with interrupts enabled. Flushes are serialized through the exclusive
/// borrow of the driver, and `show` never yields, so frames from tasks
/// polled on the same executor never interleave.
pub struct Renderer<D: OutputDriver, const MAX_LEDS: usize> {
    output: RefCell<D>,
    frames: Cell<u32>,
}

impl<D: OutputDriver, const MAX_LEDS: usize> Renderer<D, MAX_LEDS> {
    /// Create a renderer writing to `driver`
    pub const fn new(driver: D) -> Self {
        Self {
            output: RefCell::new(driver),
            frames: Cell::new(0),
        }
    }

    /// Copy the buffer to the driver
    ///
    /// Returns once the driver has accepted the frame.
    pub fn show(&self, buffer: &PixelBuffer<MAX_LEDS>) -> Result<(), D::Error> {
        let mut output = self.output.borrow_mut();

        let mut frame = [Rgb::default(); MAX_LEDS];
        let len = buffer.snapshot(&mut frame);
        output.write(&frame[..len])?;

        self.frames.set(self.frames.get().wrapping_add(1));
        Ok(())
    }

    /// Number of frames accepted by the driver so far
    pub fn frames(&self) -> u32 {
        self.frames.get()
    }

    /// Run `f` with exclusive access to the driver
    pub fn with_output<R>(&self, f: impl FnOnce(&mut D) -> R) -> R {
        f(&mut self.output.borrow_mut())
    }
}
