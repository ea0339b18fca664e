use embassy_time::Duration;

use super::{Animation, AnimationId};
use crate::OutputDriver;
use crate::color::Rgb;
use crate::engine::{AnimationEngine, pause};
use crate::error::AnimationError;
use crate::random::Rng;

/// Fills the whole strip with one color, then with another
#[derive(Debug, Clone)]
pub struct AlternateAnimation {
    first: Rgb,
    second: Rgb,
    delay: Duration,
}

impl AlternateAnimation {
    /// Create a new alternate animation
    ///
    /// Each color is held for `delay`.
    pub const fn new(first: Rgb, second: Rgb, delay: Duration) -> Self {
        Self {
            first,
            second,
            delay,
        }
    }
}

impl Animation for AlternateAnimation {
    fn id(&self) -> AnimationId {
        AnimationId::Alternate
    }

    async fn run<D: OutputDriver, const MAX_LEDS: usize>(
        &self,
        engine: &AnimationEngine<D, MAX_LEDS>,
        _rng: &mut Rng,
    ) -> Result<(), AnimationError<D::Error>> {
        if engine.is_empty() {
            return Ok(());
        }
        for color in [self.first, self.second] {
            engine.set_strip_color(color)?;
            pause(self.delay).await;
        }
        Ok(())
    }
}
