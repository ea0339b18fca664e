use crate::{color::Rgb, math8::blend_ratio8};

/// Single channel of an RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
}

impl ColorChannel {
    /// Read this channel from a color
    pub const fn get(self, color: Rgb) -> u8 {
        match self {
            Self::Red => color.r,
            Self::Green => color.g,
            Self::Blue => color.b,
        }
    }

    /// Return `color` with this channel replaced by `value`
    pub const fn with(self, color: Rgb, value: u8) -> Rgb {
        match self {
            Self::Red => Rgb {
                r: value,
                g: color.g,
                b: color.b,
            },
            Self::Green => Rgb {
                r: color.r,
                g: value,
                b: color.b,
            },
            Self::Blue => Rgb {
                r: color.r,
                g: color.g,
                b: value,
            },
        }
    }
}

/// Blend two RGB colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `ratio` - Share of `a` in percent (100 = all a, 0 = all b)
///
/// Each channel is interpolated independently and rounded half up, so
/// `blend(a, b, 100 - r) == blend(b, a, r)`.
#[inline]
pub const fn blend(a: Rgb, b: Rgb, ratio: u8) -> Rgb {
    Rgb {
        r: blend_ratio8(a.r, b.r, ratio),
        g: blend_ratio8(a.g, b.g, ratio),
        b: blend_ratio8(a.b, b.b, ratio),
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
///
/// Bits above the low 24 are ignored.
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
#[allow(clippy::cast_lossless)]
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    (color.r as u32) << 16 | (color.g as u32) << 8 | color.b as u32
}
