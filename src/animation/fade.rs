use embassy_time::Duration;

use super::{Animation, AnimationId};
use crate::OutputDriver;
use crate::color::ColorChannel;
use crate::direction::steps;
use crate::engine::{AnimationEngine, pause};
use crate::error::AnimationError;
use crate::random::Rng;

/// Fades one channel of a single pixel between two intensities
///
/// Every intensity from `start` to `end` (inclusive) is shown once.
/// With `revert`, the pixel's pre-fade color is restored and shown as a
/// final step. Equal intensities make the animation a no-op.
///
/// The pixel index is checked before anything else, so on a zero-length
/// strip a fade fails with [`ConfigError::IndexOutOfRange`] instead of
/// succeeding like the other animations.
///
/// [`ConfigError::IndexOutOfRange`]: crate::ConfigError::IndexOutOfRange
#[derive(Debug, Clone)]
pub struct FadeAnimation {
    pixel: usize,
    channel: ColorChannel,
    start: u8,
    end: u8,
    revert: bool,
    delay: Duration,
}

impl FadeAnimation {
    pub const fn new(
        pixel: usize,
        channel: ColorChannel,
        start: u8,
        end: u8,
        revert: bool,
    ) -> Self {
        Self {
            pixel,
            channel,
            start,
            end,
            revert,
            delay: Duration::from_millis(0),
        }
    }

    /// Set the pause between intensity steps
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Animation for FadeAnimation {
    fn id(&self) -> AnimationId {
        AnimationId::Fade
    }

    async fn run<D: OutputDriver, const MAX_LEDS: usize>(
        &self,
        engine: &AnimationEngine<D, MAX_LEDS>,
        _rng: &mut Rng,
    ) -> Result<(), AnimationError<D::Error>> {
        let buffer = engine.buffer();
        let original = buffer.get(self.pixel)?;
        if self.start == self.end {
            return Ok(());
        }

        for intensity in steps(self.start, self.end) {
            buffer.set_channel(self.pixel, self.channel, intensity)?;
            engine.show()?;
            pause(self.delay).await;
        }

        if self.revert {
            buffer.set(self.pixel, original)?;
            engine.show()?;
        }
        Ok(())
    }
}
