use embassy_time::Duration;

use super::{Animation, AnimationId};
use crate::OutputDriver;
use crate::color::Rgb;
use crate::direction::Direction;
use crate::engine::{AnimationEngine, pause};
use crate::error::{AnimationError, ConfigError};
use crate::random::Rng;

const DEFAULT_DELAY_MS: u64 = 100;
const DEFAULT_TO_COLOR_DELAY_MS: u64 = 150;

/// Chase of every `spacing`-th pixel
///
/// The lit pixels sit at `phase + k * spacing`. The phase sweeps once over
/// `0..spacing` (ascending when moving forward, descending when moving
/// backward), one frame per phase. With a background the strip is reset
/// between phases; without one, previously lit pixels keep the color.
#[derive(Debug, Clone)]
pub struct MultiPixelRunAnimation {
    spacing: usize,
    direction: Direction,
    lit: Rgb,
    background: Option<Rgb>,
    delay: Duration,
}

impl MultiPixelRunAnimation {
    /// Chase that resets to `background` between phases
    pub const fn new(spacing: usize, direction: Direction, lit: Rgb, background: Rgb) -> Self {
        Self {
            spacing,
            direction,
            lit,
            background: Some(background),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }

    /// Chase that leaves every lit pixel at `color`
    pub const fn to_color(spacing: usize, direction: Direction, color: Rgb) -> Self {
        Self {
            spacing,
            direction,
            lit: color,
            background: None,
            delay: Duration::from_millis(DEFAULT_TO_COLOR_DELAY_MS),
        }
    }

    /// Set the pause between phases
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Animation for MultiPixelRunAnimation {
    fn id(&self) -> AnimationId {
        if self.background.is_some() {
            AnimationId::MultiPixelRun
        } else {
            AnimationId::MultiPixelRunToColor
        }
    }

    async fn run<D: OutputDriver, const MAX_LEDS: usize>(
        &self,
        engine: &AnimationEngine<D, MAX_LEDS>,
        _rng: &mut Rng,
    ) -> Result<(), AnimationError<D::Error>> {
        if self.spacing == 0 {
            return Err(ConfigError::ZeroSpacing.into());
        }
        let buffer = engine.buffer();
        let len = buffer.len();
        if len == 0 {
            return Ok(());
        }

        for phase in self.direction.traverse(self.spacing) {
            if let Some(background) = self.background {
                buffer.set_all(background);
            }
            for index in (phase..len).step_by(self.spacing) {
                buffer.set(index, self.lit)?;
            }
            engine.show()?;
            pause(self.delay).await;
        }

        if let Some(background) = self.background {
            buffer.set_all(background);
        }
        Ok(())
    }
}
