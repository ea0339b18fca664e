/// Upper bound of a blend ratio (100 = fully the first value)
pub const RATIO_MAX: u8 = 100;

/// Interpolate between two 8-bit values
///
/// Returns `from` when `num == 0` and `to` when `num == den`, rounding
/// half up in between. `num` is clamped to `den`; a zero `den` yields `to`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn lerp8(from: u8, to: u8, num: u32, den: u32) -> u8 {
    if den == 0 {
        return to;
    }
    let num = if num > den { den } else { num };
    let weighted = from as u32 * (den - num) + to as u32 * num;

    // Weighted average of two bytes, can never exceed 255
    ((weighted + den / 2) / den) as u8
}

/// Blend two 8-bit values by a percentage
///
/// `ratio` is the share of `a` in percent: 100 returns `a`, 0 returns `b`.
/// Ratios above 100 are clamped.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn blend_ratio8(a: u8, b: u8, ratio: u8) -> u8 {
    let ratio = if ratio > RATIO_MAX { RATIO_MAX } else { ratio };
    lerp8(b, a, ratio as u32, RATIO_MAX as u32)
}
