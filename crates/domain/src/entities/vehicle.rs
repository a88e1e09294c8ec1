//! Vehicle entity - a combatant in a chase
//!
//! A vehicle's stats (Acceleration, Handling, Squeal, Frame, Crunch) and its
//! chase state (Chase Points, Condition Points, Position, Pursuer) all live in
//! its action values. The driver is a snapshot of the person behind the wheel.

use serde::{Deserialize, Serialize};

use crate::entities::{Character, FactionRef};
use crate::ids::VehicleId;
use crate::value_objects::{keys, ActionValue, ActionValues, CombatantType, Position};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(default)]
    pub id: VehicleId,
    pub name: String,
    #[serde(default)]
    pub action_values: ActionValues,
    #[serde(default)]
    pub impairments: i32,
    /// Size of a mook convoy; meaningless for other types
    #[serde(default)]
    pub count: i32,
    #[serde(default)]
    pub current_shot: i32,
    #[serde(default)]
    pub task: bool,
    #[serde(default)]
    pub faction: Option<FactionRef>,
    /// Person supplying the Driving skill
    #[serde(default)]
    pub driver: Option<Box<Character>>,
}

impl Vehicle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: VehicleId::new(),
            name: name.into(),
            action_values: ActionValues::new(),
            impairments: 0,
            count: 0,
            current_shot: 0,
            task: false,
            faction: None,
            driver: None,
        }
    }

    pub fn with_id(mut self, id: VehicleId) -> Self {
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

    /// Set the five core stats at once.
    pub fn with_stats(
        self,
        acceleration: i32,
        handling: i32,
        squeal: i32,
        frame: i32,
        crunch: i32,
    ) -> Self {
        self.with_action_value(keys::ACCELERATION, acceleration)
            .with_action_value(keys::HANDLING, handling)
            .with_action_value(keys::SQUEAL, squeal)
            .with_action_value(keys::FRAME, frame)
            .with_action_value(keys::CRUNCH, crunch)
    }

    pub fn with_position(self, position: Position) -> Self {
        self.with_action_value(keys::POSITION, position.as_str())
    }

    pub fn with_pursuer(self, pursuer: bool) -> Self {
        self.with_action_value(keys::PURSUER, pursuer)
    }

    pub fn with_impairments(mut self, impairments: i32) -> Self {
        self.impairments = impairments;
        self
    }

    pub fn with_count(mut self, count: i32) -> Self {
        self.count = count;
        self
    }

    pub fn with_driver(mut self, driver: Character) -> Self {
        self.driver = Some(Box::new(driver));
        self
    }
}
