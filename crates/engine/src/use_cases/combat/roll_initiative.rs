//! Roll initiative use case.
//!
//! Starts a new sequence: every combatant in the fight rolls a die and adds
//! its speed (Acceleration for vehicles and their drivers) to the shot it is
//! already carrying.

use std::sync::Arc;

use chiwar_domain::{roll_die, CombatantRules, FightEvent, FightEventType, FightId};
use serde::Serialize;

use crate::infrastructure::ports::{
    range_fn, CharacterRepo, ClockPort, FightRepo, RandomPort, VehicleRepo,
};

use super::error::CombatError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatantKind {
    Person,
    Vehicle,
}

/// One combatant's place on the shot counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitiativeEntry {
    pub name: String,
    pub kind: CombatantKind,
    pub speed: i32,
    pub die: i32,
    pub current_shot: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitiativeReport {
    pub fight_id: FightId,
    pub sequence: i32,
    /// Highest shot first
    pub entries: Vec<InitiativeEntry>,
}

/// Roll initiative use case.
///
/// Combatants listed in the fight but missing from storage are skipped.
pub struct RollInitiative {
    characters: Arc<dyn CharacterRepo>,
    vehicles: Arc<dyn VehicleRepo>,
    fights: Arc<dyn FightRepo>,
    random: Arc<dyn RandomPort>,
    clock: Arc<dyn ClockPort>,
}

impl RollInitiative {
    pub fn new(
        characters: Arc<dyn CharacterRepo>,
        vehicles: Arc<dyn VehicleRepo>,
        fights: Arc<dyn FightRepo>,
        random: Arc<dyn RandomPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            characters,
            vehicles,
            fights,
            random,
            clock,
        }
    }

    pub async fn execute(&self, fight_id: FightId) -> Result<InitiativeReport, CombatError> {
        let fight = self
            .fights
            .get(fight_id)
            .await?
            .ok_or(CombatError::FightNotFound(fight_id))?
            .next_sequence();

        let mut rng = range_fn(self.random.as_ref());
        let mut entries = Vec::new();

        for &character_id in &fight.character_ids {
            let Some(character) = self.characters.get(character_id).await? else {
                tracing::warn!(%fight_id, %character_id, "Skipping missing character");
                continue;
            };
            let die = roll_die(&mut rng);
            let updated = character.roll_initiative(Some(die), &mut rng);
            self.characters.save(&updated).await?;
            entries.push(InitiativeEntry {
                name: updated.name.clone(),
                kind: CombatantKind::Person,
                speed: character.initiative_speed(),
                die,
                current_shot: updated.current_shot,
            });
        }

        for &vehicle_id in &fight.vehicle_ids {
            let Some(vehicle) = self.vehicles.get(vehicle_id).await? else {
                tracing::warn!(%fight_id, %vehicle_id, "Skipping missing vehicle");
                continue;
            };
            let die = roll_die(&mut rng);
            let updated = vehicle.roll_initiative(Some(die), &mut rng);
            self.vehicles.save(&updated).await?;
            entries.push(InitiativeEntry {
                name: updated.name.clone(),
                kind: CombatantKind::Vehicle,
                speed: vehicle.initiative_speed(),
                die,
                current_shot: updated.current_shot,
            });
        }

        entries.sort_by(|a, b| {
            b.current_shot
                .cmp(&a.current_shot)
                .then_with(|| a.name.cmp(&b.name))
        });

        self.fights.save(&fight).await?;
        let report = InitiativeReport {
            fight_id: fight.id,
            sequence: fight.sequence,
            entries,
        };
        let event = FightEvent::new(
            fight.id,
            FightEventType::Initiative,
            format!(
                "Sequence {}: {} combatants rolled initiative",
                report.sequence,
                report.entries.len()
            ),
            serde_json::to_value(&report)?,
            self.clock.now(),
        );
        self.fights.record_event(&event).await?;

        tracing::info!(
            %fight_id,
            sequence = report.sequence,
            combatants = report.entries.len(),
            first = report.entries.first().map(|e| e.name.as_str()).unwrap_or(""),
            "Initiative rolled"
        );

        Ok(report)
    }
}
