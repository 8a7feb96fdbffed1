#![forbid(unsafe_code)]

//! Core: render-target capabilities, geometry, and logging.

pub mod geometry;
pub mod logging;
pub mod target;

pub use geometry::{Extent, Rect};
pub use target::TargetInfo;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
