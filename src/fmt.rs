//! Logging shims
//!
//! Forward to `log` and/or `esp-println` depending on enabled features.
//! With neither enabled the arguments are only borrowed, so call sites
//! compile to nothing.

macro_rules! debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "log")]
        ::log::debug!($fmt $(, $arg)*);
        #[cfg(feature = "esp32-log")]
        ::esp_println::println!($fmt $(, $arg)*);
        #[cfg(not(any(feature = "log", feature = "esp32-log")))]
        {
            $(let _ = &$arg;)*
        }
    }};
}

macro_rules! warning {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "log")]
        ::log::warn!($fmt $(, $arg)*);
        #[cfg(feature = "esp32-log")]
        ::esp_println::println!($fmt $(, $arg)*);
        #[cfg(not(any(feature = "log", feature = "esp32-log")))]
        {
            $(let _ = &$arg;)*
        }
    }};
}

pub(crate) use {debug, warning};
