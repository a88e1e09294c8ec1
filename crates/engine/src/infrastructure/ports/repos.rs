//! Repository port traits for combatant and fight storage.

use async_trait::async_trait;
use chiwar_domain::{Character, CharacterId, Fight, FightEvent, FightId, Vehicle, VehicleId};

use super::error::RepoError;

// =============================================================================
// Combatant Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError>;
    async fn save(&self, character: &Character) -> Result<(), RepoError>;
    async fn list(&self) -> Result<Vec<Character>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VehicleRepo: Send + Sync {
    async fn get(&self, id: VehicleId) -> Result<Option<Vehicle>, RepoError>;
    async fn save(&self, vehicle: &Vehicle) -> Result<(), RepoError>;
    async fn list(&self) -> Result<Vec<Vehicle>, RepoError>;
}

// =============================================================================
// Fight Port
// =============================================================================

/// Fights and their append-only event log.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FightRepo: Send + Sync {
    async fn get(&self, id: FightId) -> Result<Option<Fight>, RepoError>;
    async fn save(&self, fight: &Fight) -> Result<(), RepoError>;
    async fn record_event(&self, event: &FightEvent) -> Result<(), RepoError>;
    /// Events for a fight, oldest first.
    async fn list_events(&self, fight_id: FightId) -> Result<Vec<FightEvent>, RepoError>;
}
