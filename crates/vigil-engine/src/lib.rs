//! VIGIL Engine - Exposure timing and registration
//!
//! This crate implements the exposure engine:
//! - Exposure state store keyed by element identity
//! - Exposure state machine consuming crossing-event batches
//! - Observation and reporting seams toward the host
//! - Registration API with lazy observer startup
//! - Mutex-serialized wrapper for multi-threaded hosts

pub mod store;
pub mod machine;
pub mod observer;
pub mod reporter;
pub mod engine;
pub mod shared;

pub use store::*;
pub use machine::*;
pub use observer::*;
pub use reporter::*;
pub use engine::*;
pub use shared::*;
