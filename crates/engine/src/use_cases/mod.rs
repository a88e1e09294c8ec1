//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases load snapshots through ports, call the rules engine and store
//! the results.

pub mod combat;
pub mod vehicle;

pub use combat::CombatUseCases;
pub use vehicle::ApplyVehicleArchetype;
