//! Combat operation errors.

use chiwar_domain::{CharacterId, FightId, VehicleId};

use crate::infrastructure::ports::RepoError;

/// Errors that can occur while resolving a chase, an attack or initiative.
#[derive(Debug, thiserror::Error)]
pub enum CombatError {
    #[error("Fight not found: {0}")]
    FightNotFound(FightId),
    #[error("Vehicle not found: {0}")]
    VehicleNotFound(VehicleId),
    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),
    #[error("Vehicle {vehicle_id} is not in fight {fight_id}")]
    VehicleNotInFight {
        fight_id: FightId,
        vehicle_id: VehicleId,
    },
    #[error("Character {character_id} is not in fight {fight_id}")]
    CharacterNotInFight {
        fight_id: FightId,
        character_id: CharacterId,
    },
    #[error("A combatant cannot target itself")]
    SelfTarget,
    #[error("Failed to serialize outcome: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
