use embassy_time::Duration;

use super::{Animation, AnimationId};
use crate::OutputDriver;
use crate::color::Rgb;
use crate::direction::Direction;
use crate::engine::{AnimationEngine, pause};
use crate::error::AnimationError;
use crate::random::Rng;

const DEFAULT_DELAY_MS: u64 = 10;

/// Paints the strip pixel by pixel in traversal order
///
/// One frame is shown per pixel. The wipe covers the whole strip unless
/// restricted to an inclusive section.
#[derive(Debug, Clone)]
pub struct WipeAnimation {
    color: Rgb,
    direction: Direction,
    section: Option<(usize, usize)>,
    delay: Duration,
}

impl WipeAnimation {
    pub const fn new(color: Rgb, direction: Direction) -> Self {
        Self {
            color,
            direction,
            section: None,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }

    /// Restrict the wipe to pixels `start..=end`
    #[must_use]
    pub const fn with_section(mut self, start: usize, end: usize) -> Self {
        self.section = Some((start, end));
        self
    }

    /// Set the pause after each pixel
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Animation for WipeAnimation {
    fn id(&self) -> AnimationId {
        AnimationId::Wipe
    }

    async fn run<D: OutputDriver, const MAX_LEDS: usize>(
        &self,
        engine: &AnimationEngine<D, MAX_LEDS>,
        _rng: &mut Rng,
    ) -> Result<(), AnimationError<D::Error>> {
        let buffer = engine.buffer();
        let (start, count) = match self.section {
            Some((start, end)) => {
                buffer.check_range(start, end)?;
                (start, end - start + 1)
            }
            None => (0, buffer.len()),
        };

        for offset in self.direction.traverse(count) {
            buffer.set(start + offset, self.color)?;
            engine.show()?;
            pause(self.delay).await;
        }
        Ok(())
    }
}
