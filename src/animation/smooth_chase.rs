use embassy_time::Duration;
use heapless::Vec;

use super::{Animation, AnimationId};
use crate::OutputDriver;
use crate::color::{Palette, Rgb, sample_gradient};
use crate::direction::Direction;
use crate::engine::{AnimationEngine, pause};
use crate::error::{AnimationError, ConfigError};
use crate::random::Rng;

/// Maximum number of color stops of a chase palette
pub const PALETTE_STOPS: usize = 16;

const DEFAULT_DELAY_MS: u64 = 50;

/// Gradient rotating along the strip
///
/// The color stops are stretched into a gradient covering the whole strip.
/// Each frame writes that gradient shifted by one more pixel, so after
/// `len` frames it has travelled once around the strip.
#[derive(Debug, Clone)]
pub struct SmoothChaseAnimation {
    stops: Vec<Rgb, PALETTE_STOPS>,
    direction: Direction,
    delay: Duration,
}

impl SmoothChaseAnimation {
    /// Create a chase from up to [`PALETTE_STOPS`] color stops
    pub fn new(stops: &[Rgb], direction: Direction) -> Result<Self, ConfigError> {
        if stops.is_empty() {
            return Err(ConfigError::EmptyColorList);
        }
        let stops = Vec::from_slice(stops).map_err(|()| ConfigError::CapacityExceeded {
            requested: stops.len(),
            capacity: PALETTE_STOPS,
        })?;

        Ok(Self {
            stops,
            direction,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        })
    }

    /// Set the pause between frames
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Animation for SmoothChaseAnimation {
    fn id(&self) -> AnimationId {
        AnimationId::SmoothChase
    }

    async fn run<D: OutputDriver, const MAX_LEDS: usize>(
        &self,
        engine: &AnimationEngine<D, MAX_LEDS>,
        _rng: &mut Rng,
    ) -> Result<(), AnimationError<D::Error>> {
        let buffer = engine.buffer();
        let palette: Palette<MAX_LEDS> = sample_gradient(&self.stops, buffer.len())?;

        for offset in self.direction.traverse(buffer.len()) {
            buffer.apply_palette(&palette, offset);
            engine.show()?;
            pause(self.delay).await;
        }
        Ok(())
    }
}
