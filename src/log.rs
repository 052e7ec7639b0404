//! Feature-gated logging.
//!
//! With the `tracing` feature on, `debug!`/`warn!` are the real `tracing`
//! macros; without it they compile to nothing, so the parser can trace
//! skipped commands at zero cost in release builds.

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};
