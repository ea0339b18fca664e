use heapless::LinearMap;

use crate::color::Rgb;
use crate::error::ConfigError;

/// Sparse mapping of strip positions to colors
///
/// Each index appears at most once; inserting an existing index replaces
/// its color. N is the maximum number of entries.
#[derive(Debug, Clone, Default)]
pub struct Palette<const N: usize> {
    entries: LinearMap<usize, Rgb, N>,
}

impl<const N: usize> Palette<N> {
    pub const fn new() -> Self {
        Self {
            entries: LinearMap::new(),
        }
    }

    /// Map `index` to `color`
    ///
    /// Returns the color previously stored at `index`, if any.
    pub fn insert(&mut self, index: usize, color: Rgb) -> Result<Option<Rgb>, ConfigError> {
        self.entries
            .insert(index, color)
            .map_err(|_| ConfigError::CapacityExceeded {
                requested: self.entries.len() + 1,
                capacity: N,
            })
    }

    /// Get the color mapped to `index`
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.entries.get(&index).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(index, color)` entries in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (usize, Rgb)> + '_ {
        self.entries.iter().map(|(index, color)| (*index, *color))
    }
}
