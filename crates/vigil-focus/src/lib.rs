//! VIGIL Focus - Viewport attention tracking
//!
//! This crate implements the focus side of exposure correction:
//! - Throttle gate for collapsing bursts of regain signals
//! - Focus/leave tracker computing away intervals between a viewport
//!   focus loss and the next (throttled) regain or scroll signal

pub mod throttle;
pub mod tracker;

pub use throttle::*;
pub use tracker::*;
