#![no_std]

mod fmt;

pub mod animation;
pub mod buffer;
pub mod color;
pub mod direction;
pub mod engine;
pub mod error;
pub mod math8;
pub mod random;
pub mod renderer;

pub use animation::{Animation, AnimationId, AnimationSlot, PixelTask, Schedule};
pub use buffer::PixelBuffer;
pub use color::{ColorChannel, Palette, Rgb, blend, sample_gradient};
pub use direction::Direction;
pub use engine::{AnimationEngine, AnimationEngineConfig};
pub use error::{AnimationError, ConfigError};
pub use random::{Rng, SeedSource};
pub use renderer::Renderer;

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The animation engine is generic over this trait.
pub trait OutputDriver {
    /// Error reported when a frame cannot be written
    type Error: core::fmt::Debug;

    /// Write colors to the LED strip
    ///
    /// `colors[0]` is the start of the strip.
    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error>;
}
