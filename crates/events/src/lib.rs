//! Event system for Sortlab
//!
//! This crate defines the frame and run-event types that carry an
//! instrumented sort's step stream, and a broadcast bus for observers
//! that want to watch runs from the side.

mod bus;
mod types;

pub use bus::EventBus;
pub use types::*;
