//! Character entity - a person who can act in a fight or drive in a chase
//!
//! Characters are small value snapshots. Rules never mutate them in place:
//! every rule returns a new `Character` (see `rules::shared::CombatantRules`).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::entities::Vehicle;
use crate::ids::{CharacterId, FactionId};
use crate::value_objects::{keys, ActionValue, ActionValues, CombatantType};

/// Lookup-only reference to the faction a combatant belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionRef {
    pub id: FactionId,
    pub name: String,
}

/// A person in a fight (PC, ally, boss, featured foe or mook group)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    #[serde(default)]
    pub id: CharacterId,
    pub name: String,
    #[serde(default)]
    pub action_values: ActionValues,
    /// Skill name to rating
    #[serde(default)]
    pub skills: HashMap<String, i32>,
    #[serde(default)]
    pub impairments: i32,
    /// Size of a mook group; meaningless for other types
    #[serde(default)]
    pub count: i32,
    #[serde(default)]
    pub current_shot: i32,
    /// Tasks are obstacles tracked on the shot counter, not people
    #[serde(default)]
    pub task: bool,
    #[serde(default)]
    pub faction: Option<FactionRef>,
    /// Vehicle this character is currently driving
    #[serde(default)]
    pub driving: Option<Box<Vehicle>>,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            action_values: ActionValues::new(),
            skills: HashMap::new(),
            impairments: 0,
            count: 0,
            current_shot: 0,
            task: false,
            faction: None,
            driving: None,
        }
    }

    pub fn with_id(mut self, id: CharacterId) -> Self {
        self.id = id;
        self
    }

    pub fn with_type(self, combatant_type: CombatantType) -> Self {
        self.with_action_value(keys::TYPE, combatant_type.label())
    }

    pub fn with_action_value(mut self, key: impl Into<String>, value: impl Into<ActionValue>) -> Self {
        self.action_values.set(key, value);
        self
    }

    pub fn with_skill(mut self, name: impl Into<String>, rating: i32) -> Self {
        self.skills.insert(name.into(), rating);
        self
    }

    pub fn with_impairments(mut self, impairments: i32) -> Self {
        self.impairments = impairments;
        self
    }

    pub fn with_count(mut self, count: i32) -> Self {
        self.count = count;
        self
    }

    pub fn with_faction(mut self, faction: FactionRef) -> Self {
        self.faction = Some(faction);
        self
    }

    pub fn driving(mut self, vehicle: Vehicle) -> Self {
        self.driving = Some(Box::new(vehicle));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faction_is_kept_as_a_reference() {
        let dragons = FactionRef {
            id: FactionId::new(),
            name: "The Dragons".to_string(),
        };
        let jack = Character::new("Jack Jones").with_faction(dragons.clone());

        let json = serde_json::to_value(&jack).unwrap();
        assert_eq!(json["faction"]["name"], "The Dragons");
        let back: Character = serde_json::from_value(json).unwrap();
        assert_eq!(back.faction, Some(dragons));
    }

    #[test]
    fn minimal_json_fills_defaults() {
        let thug: Character = serde_json::from_str(r#"{"name": "Thug"}"#).unwrap();
        assert_eq!(thug.faction, None);
        assert_eq!(thug.count, 0);
        assert!(thug.action_values.is_empty());
    }
}
