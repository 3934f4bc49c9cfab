//! Wrappers around log macros.
//!
//! These allow logging within the crate without having to sprinkle `#[cfg(feature = "log")]` all
//! over the place. With the feature disabled, the arguments are not evaluated at all.

macro_rules! debug {
    ($($tokens:tt)*) => {
        #[cfg(feature = "log")]
        {
            ::log::debug!($($tokens)*)
        }
    }
}

macro_rules! info {
    ($($tokens:tt)*) => {
        #[cfg(feature = "log")]
        {
            ::log::info!($($tokens)*)
        }
    }
}

// Renamed at export, since `warn` is also a builtin attribute.
macro_rules! _warn {
    ($($tokens:tt)*) => {
        #[cfg(feature = "log")]
        {
            ::log::warn!($($tokens)*)
        }
    }
}

pub(crate) use _warn as warn;
pub(crate) use debug;
pub(crate) use info;
