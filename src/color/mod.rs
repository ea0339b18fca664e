mod gradient;
mod palette;
mod utils;

use smart_leds::RGB8;

pub use gradient::sample_gradient;
pub use palette::Palette;
pub use utils::{ColorChannel, blend, rgb_from_u32, rgb_to_u32};

pub type Rgb = RGB8;

/// Black, the default background of every run animation
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
