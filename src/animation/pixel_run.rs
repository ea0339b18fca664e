use embassy_time::Duration;

use super::{Animation, AnimationId};
use crate::OutputDriver;
use crate::color::{BLACK, Rgb, blend};
use crate::direction::Direction;
use crate::engine::{AnimationEngine, pause};
use crate::error::AnimationError;
use crate::random::Rng;

const DEFAULT_DELAY_MS: u64 = 50;

/// Share of the current color kept on every trail step (percent)
pub const TRAIL_DECAY_RATIO: u8 = 60;

/// A single lit pixel moving along the strip
///
/// Without a trail the strip is first filled with the background and the
/// lit pixel is reset after each step. With a trail every pixel decays
/// toward the background on each step instead, leaving a fading tail.
#[derive(Debug, Clone)]
pub struct PixelRunAnimation {
    lit: Rgb,
    background: Rgb,
    direction: Direction,
    trail: bool,
    delay: Duration,
}

impl PixelRunAnimation {
    pub const fn new(direction: Direction, lit: Rgb) -> Self {
        Self {
            lit,
            background: BLACK,
            direction,
            trail: false,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }

    /// Set the background color (black by default)
    #[must_use]
    pub const fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    /// Leave a decaying trail behind the lit pixel
    #[must_use]
    pub const fn with_trail(mut self) -> Self {
        self.trail = true;
        self
    }

    /// Set the pause between steps
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    async fn run_plain<D: OutputDriver, const MAX_LEDS: usize>(
        &self,
        engine: &AnimationEngine<D, MAX_LEDS>,
    ) -> Result<(), AnimationError<D::Error>> {
        let buffer = engine.buffer();
        if buffer.is_empty() {
            return Ok(());
        }
        engine.set_strip_color(self.background)?;

        for index in self.direction.traverse(buffer.len()) {
            buffer.set(index, self.lit)?;
            engine.show()?;
            pause(self.delay).await;
            buffer.set(index, self.background)?;
        }
        Ok(())
    }

    async fn run_with_trail<D: OutputDriver, const MAX_LEDS: usize>(
        &self,
        engine: &AnimationEngine<D, MAX_LEDS>,
    ) -> Result<(), AnimationError<D::Error>> {
        let buffer = engine.buffer();

        for index in self.direction.traverse(buffer.len()) {
            buffer.map_all(|color| blend(color, self.background, TRAIL_DECAY_RATIO));
            buffer.set(index, self.lit)?;
            engine.show()?;
            pause(self.delay).await;
        }
        Ok(())
    }
}

impl Animation for PixelRunAnimation {
    fn id(&self) -> AnimationId {
        if self.trail {
            AnimationId::PixelRunWithTrail
        } else {
            AnimationId::PixelRun
        }
    }

    async fn run<D: OutputDriver, const MAX_LEDS: usize>(
        &self,
        engine: &AnimationEngine<D, MAX_LEDS>,
        _rng: &mut Rng,
    ) -> Result<(), AnimationError<D::Error>> {
        if self.trail {
            self.run_with_trail(engine).await
        } else {
            self.run_plain(engine).await
        }
    }
}
