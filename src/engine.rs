use embassy_futures::join::join_array;
use embassy_time::{Duration, Timer};

use crate::OutputDriver;
use crate::animation::{
    AlternateAnimation, AnimationSlot, ConcurrentSparkleAnimation, FadeAnimation,
    MultiPixelRunAnimation, PixelRunAnimation, PixelTask, SmoothChaseAnimation,
    SparkleAnimation, WipeAnimation,
};
use crate::buffer::PixelBuffer;
use crate::color::{ColorChannel, Palette, Rgb, rgb_to_u32, sample_gradient};
use crate::direction::Direction;
use crate::error::{AnimationError, ConfigError};
use crate::fmt::{debug, warning};
use crate::random::{Rng, SeedSource, time_seed};
use crate::renderer::Renderer;

/// Configuration for the animation engine
#[derive(Clone)]
pub struct AnimationEngineConfig {
    /// Number of LEDs in the strip
    pub led_count: usize,
    /// Seed for the per-call random generator
    pub seed: SeedSource,
}

impl AnimationEngineConfig {
    /// Config for `led_count` LEDs, seeded from the clock
    pub const fn new(led_count: usize) -> Self {
        Self {
            led_count,
            seed: time_seed,
        }
    }
}

/// Sleep for `delay`, skipping the timer entirely for zero delays
pub(crate) async fn pause(delay: Duration) {
    if delay.as_ticks() > 0 {
        Timer::after(delay).await;
    }
}

/// Animation Engine - the main orchestrator
///
/// Owns the pixel buffer and the renderer. Sequential animations run on the
/// calling task; concurrent ones are fanned out into one task per pixel and
/// joined before the call returns.
pub struct AnimationEngine<D: OutputDriver, const MAX_LEDS: usize> {
    buffer: PixelBuffer<MAX_LEDS>,
    renderer: Renderer<D, MAX_LEDS>,
    seed: SeedSource,
}

impl<D: OutputDriver, const MAX_LEDS: usize> AnimationEngine<D, MAX_LEDS> {
    /// Create a new animation engine writing to `driver`
    ///
    /// Fails if the strip is longer than `MAX_LEDS`.
    pub fn new(driver: D, config: &AnimationEngineConfig) -> Result<Self, ConfigError> {
        let buffer = PixelBuffer::new(config.led_count)?;
        debug!(
            "[AnimationEngine.new] {} leds, capacity {}",
            config.led_count, MAX_LEDS
        );

        Ok(Self {
            buffer,
            renderer: Renderer::new(driver),
            seed: config.seed,
        })
    }

    pub fn buffer(&self) -> &PixelBuffer<MAX_LEDS> {
        &self.buffer
    }

    pub fn renderer(&self) -> &Renderer<D, MAX_LEDS> {
        &self.renderer
    }

    /// Number of LEDs in the strip
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Flush the buffer to the driver
    pub fn show(&self) -> Result<(), AnimationError<D::Error>> {
        self.renderer
            .show(&self.buffer)
            .map_err(AnimationError::Output)
    }

    /// Run an animation to completion
    ///
    /// Every call gets its own random generator seeded from the configured
    /// seed source.
    pub async fn run(&self, animation: &AnimationSlot) -> Result<(), AnimationError<D::Error>> {
        let id = animation.id();
        debug!(
            "[AnimationEngine.run] {} ({:?}) on {} leds",
            id.as_str(),
            id.schedule(),
            self.len()
        );

        let mut rng = Rng::new((self.seed)());
        let result = animation.run(self, &mut rng).await;
        match &result {
            Ok(()) => debug!("[AnimationEngine.run] {} done", id.as_str()),
            Err(e) => warning!("[AnimationEngine.run] {} failed: {:?}", id.as_str(), e),
        }
        result
    }

    /// Run `task` for every pixel at the same time and wait for all of them
    ///
    /// Exactly one task is created per pixel index, so concurrent writes
    /// never target the same pixel. Start delays are drawn up front from
    /// `rng`. The first error is returned only after every task finished.
    pub async fn fan_out<T: PixelTask>(
        &self,
        task: &T,
        rng: &mut Rng,
    ) -> Result<(), AnimationError<D::Error>> {
        let len = self.len();
        let mut delays = [Duration::from_ticks(0); MAX_LEDS];
        for delay in delays.iter_mut().take(len) {
            *delay = task.start_delay(rng);
        }

        let tasks: [_; MAX_LEDS] =
            core::array::from_fn(|index| self.run_pixel(task, index, delays[index]));
        let results = join_array(tasks).await;

        results.into_iter().find(Result::is_err).unwrap_or(Ok(()))
    }

    async fn run_pixel<T: PixelTask>(
        &self,
        task: &T,
        index: usize,
        start_delay: Duration,
    ) -> Result<(), AnimationError<D::Error>> {
        if index >= self.len() {
            return Ok(());
        }
        task.run_pixel(self, index, start_delay).await
    }

    /// Set a pixel's color without showing it
    pub fn set_pixel_color(&self, index: usize, color: Rgb) -> Result<(), ConfigError> {
        self.buffer.set(index, color)
    }

    /// Get the color of a pixel
    pub fn pixel_color(&self, index: usize) -> Result<Rgb, ConfigError> {
        self.buffer.get(index)
    }

    /// Get the color of a pixel packed as 0xRRGGBB
    pub fn pixel_color_u32(&self, index: usize) -> Result<u32, ConfigError> {
        self.buffer.get(index).map(rgb_to_u32)
    }

    /// Set every pixel to `color` and show it
    pub fn set_strip_color(&self, color: Rgb) -> Result<(), AnimationError<D::Error>> {
        self.buffer.set_all(color);
        self.show()
    }

    /// Set pixels `start..=end` to `color` and show it
    pub fn set_section_color(
        &self,
        start: usize,
        end: usize,
        color: Rgb,
    ) -> Result<(), AnimationError<D::Error>> {
        self.buffer.set_range(start, end, color)?;
        self.show()
    }

    /// Write a palette shifted by `offset` without showing it
    pub fn set_strip_from_palette<const N: usize>(&self, palette: &Palette<N>, offset: usize) {
        self.buffer.apply_palette(palette, offset);
    }

    /// Stretch color stops into a gradient over the strip without showing it
    pub fn set_strip_gradient(&self, colors: &[Rgb]) -> Result<(), ConfigError> {
        let palette: Palette<MAX_LEDS> = sample_gradient(colors, self.len())?;
        self.buffer.apply_palette(&palette, 0);
        Ok(())
    }

    pub async fn alternate(
        &self,
        first: Rgb,
        second: Rgb,
        delay: Duration,
    ) -> Result<(), AnimationError<D::Error>> {
        self.run(&AlternateAnimation::new(first, second, delay).into())
            .await
    }

    pub async fn fade_pixel(
        &self,
        pixel: usize,
        channel: ColorChannel,
        start: u8,
        end: u8,
        revert: bool,
    ) -> Result<(), AnimationError<D::Error>> {
        self.run(&FadeAnimation::new(pixel, channel, start, end, revert).into())
            .await
    }

    pub async fn wipe(
        &self,
        color: Rgb,
        direction: Direction,
    ) -> Result<(), AnimationError<D::Error>> {
        self.run(&WipeAnimation::new(color, direction).into()).await
    }

    pub async fn pixel_run(
        &self,
        direction: Direction,
        lit: Rgb,
        background: Rgb,
    ) -> Result<(), AnimationError<D::Error>> {
        let animation = PixelRunAnimation::new(direction, lit).with_background(background);
        self.run(&animation.into()).await
    }

    pub async fn pixel_run_with_trail(
        &self,
        direction: Direction,
        lit: Rgb,
        background: Rgb,
    ) -> Result<(), AnimationError<D::Error>> {
        let animation = PixelRunAnimation::new(direction, lit)
            .with_background(background)
            .with_trail();
        self.run(&animation.into()).await
    }

    pub async fn sparkle(&self, color: Rgb) -> Result<(), AnimationError<D::Error>> {
        self.run(&SparkleAnimation::new(color).into()).await
    }

    pub async fn sparkle_to_color(&self, color: Rgb) -> Result<(), AnimationError<D::Error>> {
        self.run(&SparkleAnimation::to_color(color).into()).await
    }

    pub async fn multi_pixel_run(
        &self,
        spacing: usize,
        direction: Direction,
        lit: Rgb,
        background: Rgb,
    ) -> Result<(), AnimationError<D::Error>> {
        self.run(&MultiPixelRunAnimation::new(spacing, direction, lit, background).into())
            .await
    }

    pub async fn multi_pixel_run_to_color(
        &self,
        spacing: usize,
        direction: Direction,
        color: Rgb,
    ) -> Result<(), AnimationError<D::Error>> {
        self.run(&MultiPixelRunAnimation::to_color(spacing, direction, color).into())
            .await
    }

    pub async fn smooth_chase(
        &self,
        stops: &[Rgb],
        direction: Direction,
    ) -> Result<(), AnimationError<D::Error>> {
        let animation = SmoothChaseAnimation::new(stops, direction)?;
        self.run(&animation.into()).await
    }

    pub async fn sparkle_concurrent(&self, color: Rgb) -> Result<(), AnimationError<D::Error>> {
        self.run(&ConcurrentSparkleAnimation::new(color).into())
            .await
    }
}
