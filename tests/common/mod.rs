#![allow(dead_code)]

use myrtio_light_animator::{AnimationEngine, AnimationEngineConfig, OutputDriver, Rgb};

pub const SEED: u64 = 0x5eed_1234;

pub fn fixed_seed() -> u64 {
    SEED
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// Driver that records every frame it is asked to write
#[derive(Debug, Default)]
pub struct MockDriver {
    pub frames: Vec<Vec<Rgb>>,
    /// Writes with this index or later are rejected
    pub fail_from: Option<usize>,
    pub rejected: usize,
}

impl MockDriver {
    pub fn failing_from(write: usize) -> Self {
        Self {
            fail_from: Some(write),
            ..Self::default()
        }
    }
}

impl OutputDriver for MockDriver {
    type Error = MockError;

    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        if self.fail_from.is_some_and(|limit| self.frames.len() >= limit) {
            self.rejected += 1;
            return Err(MockError);
        }
        self.frames.push(colors.to_vec());
        Ok(())
    }
}

pub fn engine<const N: usize>(led_count: usize) -> AnimationEngine<MockDriver, N> {
    engine_with(MockDriver::default(), led_count)
}

pub fn engine_with<const N: usize>(
    driver: MockDriver,
    led_count: usize,
) -> AnimationEngine<MockDriver, N> {
    let config = AnimationEngineConfig {
        led_count,
        seed: fixed_seed,
    };
    AnimationEngine::new(driver, &config).expect("strip fits the buffer")
}

pub fn frames<const N: usize>(engine: &AnimationEngine<MockDriver, N>) -> Vec<Vec<Rgb>> {
    engine.renderer().with_output(|driver| driver.frames.clone())
}

pub fn pixels<const N: usize>(engine: &AnimationEngine<MockDriver, N>) -> Vec<Rgb> {
    let mut out = [Rgb::default(); N];
    let count = engine.buffer().snapshot(&mut out);
    out[..count].to_vec()
}

/// Fill the strip with a distinct color per pixel
pub fn paint_distinct<const N: usize>(engine: &AnimationEngine<MockDriver, N>) -> Vec<Rgb> {
    let colors: Vec<Rgb> = (0..engine.len())
        .map(|i| Rgb::new(i as u8 + 1, 2 * i as u8, 200 - i as u8))
        .collect();
    for (index, color) in colors.iter().enumerate() {
        engine.set_pixel_color(index, *color).unwrap();
    }
    colors
}
