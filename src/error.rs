//! Error types for the animation engine

use core::fmt;

/// Invalid arguments, detected before the strip is mutated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Pixel index outside of `0..len`
    IndexOutOfRange { index: usize, len: usize },
    /// Inclusive range with `start > end`
    InvalidRange { start: usize, end: usize },
    /// More entries requested than the fixed capacity allows
    CapacityExceeded { requested: usize, capacity: usize },
    /// Gradient requested from an empty list of color stops
    EmptyColorList,
    /// Multi-pixel run with zero spacing between lit pixels
    ZeroSpacing,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IndexOutOfRange { index, len } => {
                write!(f, "Pixel index {} out of range for strip of {}", index, len)
            }
            ConfigError::InvalidRange { start, end } => {
                write!(f, "Invalid pixel range: start {} is after end {}", start, end)
            }
            ConfigError::CapacityExceeded {
                requested,
                capacity,
            } => write!(f, "Requested {} entries, capacity is {}", requested, capacity),
            ConfigError::EmptyColorList => write!(f, "Color list is empty"),
            ConfigError::ZeroSpacing => write!(f, "Spacing must be at least 1"),
        }
    }
}

/// Error returned by a running animation
///
/// `E` is the error type of the output driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationError<E> {
    /// Invalid animation arguments
    Config(ConfigError),
    /// The output driver rejected a frame
    Output(E),
}

impl<E: fmt::Debug> fmt::Display for AnimationError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationError::Config(e) => write!(f, "Configuration error: {}", e),
            AnimationError::Output(e) => write!(f, "Output error: {:?}", e),
        }
    }
}

impl<E> From<ConfigError> for AnimationError<E> {
    fn from(e: ConfigError) -> Self {
        AnimationError::Config(e)
    }
}
