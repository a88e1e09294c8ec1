//! In-memory repositories backed by `DashMap`.
//!
//! Snapshots are cloned in and out; no reference into the map outlives a call.

use std::sync::Arc;

use async_trait::async_trait;
use chiwar_domain::{Character, CharacterId, Fight, FightEvent, FightId, Vehicle, VehicleId};
use dashmap::DashMap;

use crate::infrastructure::ports::{CharacterRepo, FightRepo, RepoError, VehicleRepo};

#[derive(Default)]
pub struct InMemoryCharacterRepo {
    characters: DashMap<CharacterId, Character>,
}

impl InMemoryCharacterRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CharacterRepo for InMemoryCharacterRepo {
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError> {
        Ok(self.characters.get(&id).map(|c| c.value().clone()))
    }

    async fn save(&self, character: &Character) -> Result<(), RepoError> {
        tracing::debug!(character_id = %character.id, name = %character.name, "Saving character");
        self.characters.insert(character.id, character.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Character>, RepoError> {
        let mut characters: Vec<Character> =
            self.characters.iter().map(|c| c.value().clone()).collect();
        characters.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(characters)
    }
}

#[derive(Default)]
pub struct InMemoryVehicleRepo {
    vehicles: DashMap<VehicleId, Vehicle>,
}

impl InMemoryVehicleRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VehicleRepo for InMemoryVehicleRepo {
    async fn get(&self, id: VehicleId) -> Result<Option<Vehicle>, RepoError> {
        Ok(self.vehicles.get(&id).map(|v| v.value().clone()))
    }

    async fn save(&self, vehicle: &Vehicle) -> Result<(), RepoError> {
        tracing::debug!(vehicle_id = %vehicle.id, name = %vehicle.name, "Saving vehicle");
        self.vehicles.insert(vehicle.id, vehicle.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Vehicle>, RepoError> {
        let mut vehicles: Vec<Vehicle> = self.vehicles.iter().map(|v| v.value().clone()).collect();
        vehicles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(vehicles)
    }
}

#[derive(Default)]
pub struct InMemoryFightRepo {
    fights: DashMap<FightId, Fight>,
    events: DashMap<FightId, Vec<FightEvent>>,
}

impl InMemoryFightRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FightRepo for InMemoryFightRepo {
    async fn get(&self, id: FightId) -> Result<Option<Fight>, RepoError> {
        Ok(self.fights.get(&id).map(|f| f.value().clone()))
    }

    async fn save(&self, fight: &Fight) -> Result<(), RepoError> {
        tracing::debug!(fight_id = %fight.id, name = %fight.name, "Saving fight");
        self.fights.insert(fight.id, fight.clone());
        Ok(())
    }

    async fn record_event(&self, event: &FightEvent) -> Result<(), RepoError> {
        if !self.fights.contains_key(&event.fight_id) {
            return Err(RepoError::not_found("Fight", event.fight_id));
        }
        tracing::debug!(
            fight_id = %event.fight_id,
            event_type = ?event.event_type,
            "Recording fight event"
        );
        self.events
            .entry(event.fight_id)
            .or_default()
            .push(event.clone());
        Ok(())
    }

    async fn list_events(&self, fight_id: FightId) -> Result<Vec<FightEvent>, RepoError> {
        Ok(self
            .events
            .get(&fight_id)
            .map(|events| events.value().clone())
            .unwrap_or_default())
    }
}

/// All in-memory repositories, shareable as port trait objects.
#[derive(Clone, Default)]
pub struct InMemoryRepositories {
    pub character: Arc<InMemoryCharacterRepo>,
    pub vehicle: Arc<InMemoryVehicleRepo>,
    pub fight: Arc<InMemoryFightRepo>,
}

impl InMemoryRepositories {
    pub fn new() -> Self {
        Self::default()
    }
}
