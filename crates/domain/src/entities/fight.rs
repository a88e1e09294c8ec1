//! Fight (encounter) and its event log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, FightEventId, FightId, VehicleId};

/// An encounter: which combatants take part and the current sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fight {
    #[serde(default)]
    pub id: FightId,
    pub name: String,
    #[serde(default)]
    pub sequence: i32,
    #[serde(default)]
    pub character_ids: Vec<CharacterId>,
    #[serde(default)]
    pub vehicle_ids: Vec<VehicleId>,
}

impl Fight {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: FightId::new(),
            name: name.into(),
            sequence: 0,
            character_ids: Vec::new(),
            vehicle_ids: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: FightId) -> Self {
        self.id = id;
        self
    }

    pub fn with_character(mut self, id: CharacterId) -> Self {
        self.character_ids.push(id);
        self
    }

    pub fn with_vehicle(mut self, id: VehicleId) -> Self {
        self.vehicle_ids.push(id);
        self
    }

    pub fn includes_vehicle(&self, id: VehicleId) -> bool {
        self.vehicle_ids.contains(&id)
    }

    pub fn includes_character(&self, id: CharacterId) -> bool {
        self.character_ids.contains(&id)
    }

    /// Start a new sequence; everyone rolls initiative again.
    pub fn next_sequence(mut self) -> Self {
        self.sequence += 1;
        self
    }
}

/// Kind of entry in a fight's event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FightEventType {
    Chase,
    Attack,
    Initiative,
}

/// One resolved action, recorded for the fight log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightEvent {
    pub id: FightEventId,
    pub fight_id: FightId,
    pub event_type: FightEventType,
    pub description: String,
    /// Serialized outcome of the action
    pub details: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl FightEvent {
    pub fn new(
        fight_id: FightId,
        event_type: FightEventType,
        description: impl Into<String>,
        details: serde_json::Value,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: FightEventId::new(),
            fight_id,
            event_type,
            description: description.into(),
            details,
            created_at: now,
        }
    }
}
