//! Vehicle use cases.
//!
//! Archetype presets: listing the catalog and applying a preset to a stored
//! vehicle.

mod apply_archetype;

pub use apply_archetype::{ApplyVehicleArchetype, ArchetypeError};
