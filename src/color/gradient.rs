use crate::color::{Palette, Rgb};
use crate::error::ConfigError;
use crate::math8::lerp8;

/// Interpolate between two colors at `step / steps`
#[allow(clippy::cast_possible_truncation)]
fn lerp_color(from: Rgb, to: Rgb, step: usize, steps: usize) -> Rgb {
    let (step, steps) = (step as u32, steps as u32);
    Rgb {
        r: lerp8(from.r, to.r, step, steps),
        g: lerp8(from.g, to.g, step, steps),
        b: lerp8(from.b, to.b, step, steps),
    }
}

/// Sample `length` evenly spaced colors along a list of color stops
///
/// Entry 0 is the first stop and entry `length - 1` is the last one. The
/// `length - 1` gaps are split over the `colors.len() - 1` segments between
/// consecutive stops; when they do not divide evenly, the earliest segments
/// get one extra gap each. A single stop yields `length` copies of it.
pub fn sample_gradient<const N: usize>(
    colors: &[Rgb],
    length: usize,
) -> Result<Palette<N>, ConfigError> {
    let (Some(&first), Some(&last)) = (colors.first(), colors.last()) else {
        return Err(ConfigError::EmptyColorList);
    };
    if length > N {
        return Err(ConfigError::CapacityExceeded {
            requested: length,
            capacity: N,
        });
    }

    let mut palette = Palette::new();
    if length == 0 {
        return Ok(palette);
    }

    let segments = colors.len() - 1;
    let gaps = length - 1;
    if segments == 0 || gaps == 0 {
        for index in 0..length {
            palette.insert(index, first)?;
        }
        return Ok(palette);
    }

    let base = gaps / segments;
    let remainder = gaps % segments;

    let mut index = 0;
    for (segment, stops) in colors.windows(2).enumerate() {
        let width = base + usize::from(segment < remainder);
        for step in 0..width {
            palette.insert(index + step, lerp_color(stops[0], stops[1], step, width))?;
        }
        index += width;
    }
    palette.insert(gaps, last)?;

    Ok(palette)
}
