use core::ops::RangeInclusive;

/// Apparent direction of movement along the strip
///
/// The start of the strip is the end where the signal is connected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// From the start to the end of the strip
    #[default]
    Forward,
    /// From the end to the start of the strip
    Backward,
}

impl Direction {
    /// Direction that leads from `start` to `end`
    ///
    /// Returns `None` when both are equal.
    pub fn between<T: Ord>(start: T, end: T) -> Option<Self> {
        match start.cmp(&end) {
            core::cmp::Ordering::Less => Some(Self::Forward),
            core::cmp::Ordering::Greater => Some(Self::Backward),
            core::cmp::Ordering::Equal => None,
        }
    }

    /// Visit `0..len` in this direction
    pub fn traverse(self, len: usize) -> impl Iterator<Item = usize> {
        self.walk(0..len)
    }

    /// Walk any double-ended range front to back (forward) or back to front
    pub fn walk<I: DoubleEndedIterator>(self, mut range: I) -> impl Iterator<Item = I::Item> {
        core::iter::from_fn(move || match self {
            Self::Forward => range.next(),
            Self::Backward => range.next_back(),
        })
    }
}

/// Inclusive steps from `start` to `end`, ascending or descending
pub fn steps(start: u8, end: u8) -> impl Iterator<Item = u8> {
    let direction = Direction::between(start, end).unwrap_or_default();
    direction.walk(RangeInclusive::new(start.min(end), start.max(end)))
}
