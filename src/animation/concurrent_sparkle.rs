use embassy_time::Duration;

use super::{AnimationId, PixelTask};
use crate::OutputDriver;
use crate::color::Rgb;
use crate::engine::{AnimationEngine, pause};
use crate::error::AnimationError;
use crate::random::Rng;

const DEFAULT_HOLD_MS: u64 = 50;
const DEFAULT_MAX_JITTER_MS: u64 = 4_950;

/// Sparkle where every pixel flashes on its own timeline
///
/// Each pixel waits a random jitter drawn uniformly from `[0, max_jitter)`,
/// then flashes for `hold` and is restored to its original color. All
/// pixels run at the same time, so the whole animation takes roughly
/// `max_jitter + hold` regardless of the strip length.
#[derive(Debug, Clone)]
pub struct ConcurrentSparkleAnimation {
    color: Rgb,
    hold: Duration,
    max_jitter: Duration,
}

impl ConcurrentSparkleAnimation {
    pub const fn new(color: Rgb) -> Self {
        Self {
            color,
            hold: Duration::from_millis(DEFAULT_HOLD_MS),
            max_jitter: Duration::from_millis(DEFAULT_MAX_JITTER_MS),
        }
    }

    /// Set how long each pixel is held at the sparkle color
    #[must_use]
    pub const fn with_hold(mut self, hold: Duration) -> Self {
        self.hold = hold;
        self
    }

    /// Set the exclusive upper bound of the start jitter
    #[must_use]
    pub const fn with_max_jitter(mut self, max_jitter: Duration) -> Self {
        self.max_jitter = max_jitter;
        self
    }
}

impl PixelTask for ConcurrentSparkleAnimation {
    fn id(&self) -> AnimationId {
        AnimationId::SparkleConcurrent
    }

    fn start_delay(&self, rng: &mut Rng) -> Duration {
        Duration::from_ticks(rng.below(self.max_jitter.as_ticks()))
    }

    async fn run_pixel<D: OutputDriver, const MAX_LEDS: usize>(
        &self,
        engine: &AnimationEngine<D, MAX_LEDS>,
        index: usize,
        start_delay: Duration,
    ) -> Result<(), AnimationError<D::Error>> {
        let buffer = engine.buffer();
        let original = buffer.get(index)?;
        pause(start_delay).await;

        buffer.set(index, self.color)?;
        let shown = engine.show();
        if shown.is_ok() {
            pause(self.hold).await;
        }
        // Restore even when the flush failed, so no pixel is left lit
        buffer.set(index, original)?;
        shown
    }
}
