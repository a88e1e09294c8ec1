//! Vehicle archetype presets.
//!
//! Presets ship as JSON embedded in the crate. A catalog can also be loaded
//! from another JSON document with the same shape.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

const BUILTIN_ARCHETYPES: &str = include_str!("../../data/vehicle_archetypes.json");

/// Named stat line for a kind of vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleArchetype {
    pub name: String,
    pub acceleration: i32,
    pub handling: i32,
    pub squeal: i32,
    pub frame: i32,
    pub crunch: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VehicleArchetypeCatalog {
    archetypes: Vec<VehicleArchetype>,
}

impl VehicleArchetypeCatalog {
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let archetypes: Vec<VehicleArchetype> = serde_json::from_str(json)?;
        if let Some(blank) = archetypes.iter().find(|a| a.name.trim().is_empty()) {
            return Err(DomainError::validation(format!(
                "Vehicle archetype without a name: {:?}",
                blank
            )));
        }
        Ok(Self { archetypes })
    }

    /// Presets shipped with the crate.
    pub fn builtin() -> Result<Self, DomainError> {
        Self::from_json(BUILTIN_ARCHETYPES)
    }

    /// Case-insensitive lookup by name.
    pub fn find(&self, name: &str) -> Option<&VehicleArchetype> {
        let name = name.trim();
        self.archetypes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    pub fn get(&self, name: &str) -> Result<&VehicleArchetype, DomainError> {
        self.find(name)
            .ok_or_else(|| DomainError::not_found("Vehicle archetype", name))
    }

    pub fn names(&self) -> Vec<&str> {
        self.archetypes.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VehicleArchetype> {
        self.archetypes.iter()
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }
}
