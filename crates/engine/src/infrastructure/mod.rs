//! Infrastructure implementations.
//!
//! Contains port trait implementations and file loading.

pub mod clock;
pub mod memory;
pub mod ports;
pub mod scenario;
