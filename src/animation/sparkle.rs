use embassy_time::Duration;
use heapless::Vec;

use super::{Animation, AnimationId};
use crate::OutputDriver;
use crate::color::Rgb;
use crate::engine::{AnimationEngine, pause};
use crate::error::AnimationError;
use crate::random::Rng;

const DEFAULT_DELAY_MS: u64 = 50;

/// Flashes every pixel once, one at a time, in a random order
///
/// The visiting order is a fresh uniform permutation of all indices for
/// every run. Each pixel is restored to the color it had right before the
/// flash, unless the animation was created with [`SparkleAnimation::to_color`],
/// which leaves the sparkle color in place.
#[derive(Debug, Clone)]
pub struct SparkleAnimation {
    color: Rgb,
    restore: bool,
    delay: Duration,
}

impl SparkleAnimation {
    pub const fn new(color: Rgb) -> Self {
        Self {
            color,
            restore: true,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }

    /// Sparkle that keeps every visited pixel at `color`
    pub const fn to_color(color: Rgb) -> Self {
        Self {
            restore: false,
            ..Self::new(color)
        }
    }

    /// Set how long each pixel is held
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Animation for SparkleAnimation {
    fn id(&self) -> AnimationId {
        if self.restore {
            AnimationId::Sparkle
        } else {
            AnimationId::SparkleToColor
        }
    }

    async fn run<D: OutputDriver, const MAX_LEDS: usize>(
        &self,
        engine: &AnimationEngine<D, MAX_LEDS>,
        rng: &mut Rng,
    ) -> Result<(), AnimationError<D::Error>> {
        let buffer = engine.buffer();
        let mut order: Vec<usize, MAX_LEDS> = (0..buffer.len()).collect();
        rng.shuffle(&mut order);

        for index in order {
            let original = buffer.get(index)?;
            buffer.set(index, self.color)?;
            let shown = engine.show();
            if shown.is_ok() {
                pause(self.delay).await;
            }
            if self.restore {
                buffer.set(index, original)?;
            }
            shown?;
        }
        Ok(())
    }
}
