//! Combatant - anything that can act in a fight or a chase.

use serde::{Deserialize, Serialize};

use crate::entities::{Character, Vehicle};

/// Tagged by `entity_class` ("Person" | "Vehicle") on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "entity_class")]
pub enum Combatant {
    Person(Character),
    Vehicle(Vehicle),
}

impl Combatant {
    pub fn name(&self) -> &str {
        match self {
            Combatant::Person(c) => &c.name,
            Combatant::Vehicle(v) => &v.name,
        }
    }

    pub fn entity_class(&self) -> &'static str {
        match self {
            Combatant::Person(_) => "Person",
            Combatant::Vehicle(_) => "Vehicle",
        }
    }

    pub fn as_person(&self) -> Option<&Character> {
        match self {
            Combatant::Person(c) => Some(c),
            Combatant::Vehicle(_) => None,
        }
    }

    pub fn as_vehicle(&self) -> Option<&Vehicle> {
        match self {
            Combatant::Vehicle(v) => Some(v),
            Combatant::Person(_) => None,
        }
    }
}

impl From<Character> for Combatant {
    fn from(value: Character) -> Self {
        Combatant::Person(value)
    }
}

impl From<Vehicle> for Combatant {
    fn from(value: Vehicle) -> Self {
        Combatant::Vehicle(value)
    }
}
