//! Core domain model for Sortlab
//!
//! This crate defines the types shared by every component: algorithm
//! identifiers, the `Step` snapshot descriptor emitted by instrumented
//! sorting engines, run configuration and lifecycle records, and the
//! height bounds of the working array.

pub mod domain;
pub mod error;

pub use domain::*;
pub use error::CoreError;
