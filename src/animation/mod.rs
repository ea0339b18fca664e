//! Animation system with compile-time known animation variants
//!
//! All animations are stored in an enum to avoid heap allocations.
//! Sequential animations implement [`Animation`] and run as one control
//! flow. Concurrent animations implement [`PixelTask`] and are fanned out
//! by the engine into one task per pixel.

mod alternate;
mod concurrent_sparkle;
mod fade;
mod multi_pixel_run;
mod pixel_run;
mod smooth_chase;
mod sparkle;
mod wipe;

use embassy_time::Duration;

pub use alternate::AlternateAnimation;
pub use concurrent_sparkle::ConcurrentSparkleAnimation;
pub use fade::FadeAnimation;
pub use multi_pixel_run::MultiPixelRunAnimation;
pub use pixel_run::PixelRunAnimation;
pub use smooth_chase::{PALETTE_STOPS, SmoothChaseAnimation};
pub use sparkle::SparkleAnimation;
pub use wipe::WipeAnimation;

use crate::OutputDriver;
use crate::engine::AnimationEngine;
use crate::error::AnimationError;
use crate::random::Rng;

const ANIMATION_NAME_ALTERNATE: &str = "alternate";
const ANIMATION_NAME_FADE: &str = "fade";
const ANIMATION_NAME_WIPE: &str = "wipe";
const ANIMATION_NAME_PIXEL_RUN: &str = "pixel_run";
const ANIMATION_NAME_PIXEL_RUN_WITH_TRAIL: &str = "pixel_run_with_trail";
const ANIMATION_NAME_SPARKLE: &str = "sparkle";
const ANIMATION_NAME_SPARKLE_TO_COLOR: &str = "sparkle_to_color";
const ANIMATION_NAME_MULTI_PIXEL_RUN: &str = "multi_pixel_run";
const ANIMATION_NAME_MULTI_PIXEL_RUN_TO_COLOR: &str = "multi_pixel_run_to_color";
const ANIMATION_NAME_SMOOTH_CHASE: &str = "smooth_chase";
const ANIMATION_NAME_SPARKLE_CONCURRENT: &str = "sparkle_concurrent";

const ANIMATION_ID_ALTERNATE: u8 = 0;
const ANIMATION_ID_FADE: u8 = 1;
const ANIMATION_ID_WIPE: u8 = 2;
const ANIMATION_ID_PIXEL_RUN: u8 = 3;
const ANIMATION_ID_PIXEL_RUN_WITH_TRAIL: u8 = 4;
const ANIMATION_ID_SPARKLE: u8 = 5;
const ANIMATION_ID_SPARKLE_TO_COLOR: u8 = 6;
const ANIMATION_ID_MULTI_PIXEL_RUN: u8 = 7;
const ANIMATION_ID_MULTI_PIXEL_RUN_TO_COLOR: u8 = 8;
const ANIMATION_ID_SMOOTH_CHASE: u8 = 9;
const ANIMATION_ID_SPARKLE_CONCURRENT: u8 = 10;

/// A sequential animation
///
/// Runs to completion as a single control flow, mutating the engine's
/// buffer and calling `show` at the points it wants visible.
#[allow(async_fn_in_trait)]
pub trait Animation {
    /// Identifier of this animation
    fn id(&self) -> AnimationId;

    /// Run the animation to completion
    async fn run<D: OutputDriver, const MAX_LEDS: usize>(
        &self,
        engine: &AnimationEngine<D, MAX_LEDS>,
        rng: &mut Rng,
    ) -> Result<(), AnimationError<D::Error>>;
}

/// One per-pixel timeline of a concurrent animation
///
/// The engine runs `run_pixel` once for every pixel of the strip, all of
/// them at the same time. A task must only write its own pixel.
#[allow(async_fn_in_trait)]
pub trait PixelTask {
    /// Identifier of this animation
    fn id(&self) -> AnimationId;

    /// Draw the delay before a pixel's visible action
    fn start_delay(&self, rng: &mut Rng) -> Duration;

    /// Run the timeline of pixel `index`
    ///
    /// The pixel must be left in a consistent state even when an error
    /// is returned.
    async fn run_pixel<D: OutputDriver, const MAX_LEDS: usize>(
        &self,
        engine: &AnimationEngine<D, MAX_LEDS>,
        index: usize,
        start_delay: Duration,
    ) -> Result<(), AnimationError<D::Error>>;
}

/// How the engine schedules an animation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// Runs on the calling task, step by step
    Sequential,
    /// Fans out into one task per pixel and joins on all of them
    Concurrent,
}

/// Known animation ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    Alternate = ANIMATION_ID_ALTERNATE,
    Fade = ANIMATION_ID_FADE,
    Wipe = ANIMATION_ID_WIPE,
    PixelRun = ANIMATION_ID_PIXEL_RUN,
    PixelRunWithTrail = ANIMATION_ID_PIXEL_RUN_WITH_TRAIL,
    Sparkle = ANIMATION_ID_SPARKLE,
    SparkleToColor = ANIMATION_ID_SPARKLE_TO_COLOR,
    MultiPixelRun = ANIMATION_ID_MULTI_PIXEL_RUN,
    MultiPixelRunToColor = ANIMATION_ID_MULTI_PIXEL_RUN_TO_COLOR,
    SmoothChase = ANIMATION_ID_SMOOTH_CHASE,
    SparkleConcurrent = ANIMATION_ID_SPARKLE_CONCURRENT,
}

impl AnimationId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_ALTERNATE => Self::Alternate,
            ANIMATION_ID_FADE => Self::Fade,
            ANIMATION_ID_WIPE => Self::Wipe,
            ANIMATION_ID_PIXEL_RUN => Self::PixelRun,
            ANIMATION_ID_PIXEL_RUN_WITH_TRAIL => Self::PixelRunWithTrail,
            ANIMATION_ID_SPARKLE => Self::Sparkle,
            ANIMATION_ID_SPARKLE_TO_COLOR => Self::SparkleToColor,
            ANIMATION_ID_MULTI_PIXEL_RUN => Self::MultiPixelRun,
            ANIMATION_ID_MULTI_PIXEL_RUN_TO_COLOR => Self::MultiPixelRunToColor,
            ANIMATION_ID_SMOOTH_CHASE => Self::SmoothChase,
            ANIMATION_ID_SPARKLE_CONCURRENT => Self::SparkleConcurrent,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alternate => ANIMATION_NAME_ALTERNATE,
            Self::Fade => ANIMATION_NAME_FADE,
            Self::Wipe => ANIMATION_NAME_WIPE,
            Self::PixelRun => ANIMATION_NAME_PIXEL_RUN,
            Self::PixelRunWithTrail => ANIMATION_NAME_PIXEL_RUN_WITH_TRAIL,
            Self::Sparkle => ANIMATION_NAME_SPARKLE,
            Self::SparkleToColor => ANIMATION_NAME_SPARKLE_TO_COLOR,
            Self::MultiPixelRun => ANIMATION_NAME_MULTI_PIXEL_RUN,
            Self::MultiPixelRunToColor => ANIMATION_NAME_MULTI_PIXEL_RUN_TO_COLOR,
            Self::SmoothChase => ANIMATION_NAME_SMOOTH_CHASE,
            Self::SparkleConcurrent => ANIMATION_NAME_SPARKLE_CONCURRENT,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            ANIMATION_NAME_ALTERNATE => Some(Self::Alternate),
            ANIMATION_NAME_FADE => Some(Self::Fade),
            ANIMATION_NAME_WIPE => Some(Self::Wipe),
            ANIMATION_NAME_PIXEL_RUN => Some(Self::PixelRun),
            ANIMATION_NAME_PIXEL_RUN_WITH_TRAIL => Some(Self::PixelRunWithTrail),
            ANIMATION_NAME_SPARKLE => Some(Self::Sparkle),
            ANIMATION_NAME_SPARKLE_TO_COLOR => Some(Self::SparkleToColor),
            ANIMATION_NAME_MULTI_PIXEL_RUN => Some(Self::MultiPixelRun),
            ANIMATION_NAME_MULTI_PIXEL_RUN_TO_COLOR => Some(Self::MultiPixelRunToColor),
            ANIMATION_NAME_SMOOTH_CHASE => Some(Self::SmoothChase),
            ANIMATION_NAME_SPARKLE_CONCURRENT => Some(Self::SparkleConcurrent),
            _ => None,
        }
    }

    /// Scheduling shape used by the engine for this animation
    pub const fn schedule(self) -> Schedule {
        match self {
            Self::SparkleConcurrent => Schedule::Concurrent,
            _ => Schedule::Sequential,
        }
    }
}

/// Animation slot - enum containing all possible animations
#[derive(Debug, Clone)]
pub enum AnimationSlot {
    Alternate(AlternateAnimation),
    Fade(FadeAnimation),
    Wipe(WipeAnimation),
    PixelRun(PixelRunAnimation),
    Sparkle(SparkleAnimation),
    MultiPixelRun(MultiPixelRunAnimation),
    SmoothChase(SmoothChaseAnimation),
    ConcurrentSparkle(ConcurrentSparkleAnimation),
}

impl AnimationSlot {
    /// Get the animation ID for external observation
    pub fn id(&self) -> AnimationId {
        match self {
            Self::Alternate(animation) => animation.id(),
            Self::Fade(animation) => animation.id(),
            Self::Wipe(animation) => animation.id(),
            Self::PixelRun(animation) => animation.id(),
            Self::Sparkle(animation) => animation.id(),
            Self::MultiPixelRun(animation) => animation.id(),
            Self::SmoothChase(animation) => animation.id(),
            Self::ConcurrentSparkle(animation) => animation.id(),
        }
    }

    /// Run the animation on `engine` with its scheduling shape
    pub(crate) async fn run<D: OutputDriver, const MAX_LEDS: usize>(
        &self,
        engine: &AnimationEngine<D, MAX_LEDS>,
        rng: &mut Rng,
    ) -> Result<(), AnimationError<D::Error>> {
        match self {
            Self::Alternate(animation) => animation.run(engine, rng).await,
            Self::Fade(animation) => animation.run(engine, rng).await,
            Self::Wipe(animation) => animation.run(engine, rng).await,
            Self::PixelRun(animation) => animation.run(engine, rng).await,
            Self::Sparkle(animation) => animation.run(engine, rng).await,
            Self::MultiPixelRun(animation) => animation.run(engine, rng).await,
            Self::SmoothChase(animation) => animation.run(engine, rng).await,
            Self::ConcurrentSparkle(task) => engine.fan_out(task, rng).await,
        }
    }
}

macro_rules! impl_into_slot {
    ($($animation:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$animation> for AnimationSlot {
                fn from(animation: $animation) -> Self {
                    Self::$variant(animation)
                }
            }
        )*
    };
}

impl_into_slot! {
    AlternateAnimation => Alternate,
    FadeAnimation => Fade,
    WipeAnimation => Wipe,
    PixelRunAnimation => PixelRun,
    SparkleAnimation => Sparkle,
    MultiPixelRunAnimation => MultiPixelRun,
    SmoothChaseAnimation => SmoothChase,
    ConcurrentSparkleAnimation => ConcurrentSparkle,
}
