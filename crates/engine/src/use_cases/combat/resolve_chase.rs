//! Resolve chase use case.
//!
//! Loads both vehicles from the fight, resolves the maneuver and stores the
//! updated snapshots together with a fight log entry.

use std::sync::Arc;

use chiwar_domain::{
    resolve_chase, ChaseAttack, ChaseMethod, ChaseOutcome, FightEvent, FightEventType, FightId,
    Position, SwerveInput, VehicleId,
};

use crate::infrastructure::ports::{range_fn, ClockPort, FightRepo, RandomPort, VehicleRepo};

use super::error::CombatError;

#[derive(Debug, Clone)]
pub struct ChaseInput {
    pub fight_id: FightId,
    pub attacker_id: VehicleId,
    pub target_id: VehicleId,
    pub method: ChaseMethod,
    /// Starting range; defaults to the attacker's recorded Position
    pub position: Option<Position>,
    pub swerve: SwerveInput,
    pub stunt: bool,
}

/// Resolve chase use case.
///
/// Orchestrates: fight lookup, membership check, vehicle lookup, swerve,
/// rules resolution, persistence of both vehicles, fight log.
pub struct ResolveChase {
    vehicles: Arc<dyn VehicleRepo>,
    fights: Arc<dyn FightRepo>,
    random: Arc<dyn RandomPort>,
    clock: Arc<dyn ClockPort>,
}

impl ResolveChase {
    pub fn new(
        vehicles: Arc<dyn VehicleRepo>,
        fights: Arc<dyn FightRepo>,
        random: Arc<dyn RandomPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            vehicles,
            fights,
            random,
            clock,
        }
    }

    pub async fn execute(&self, input: ChaseInput) -> Result<ChaseOutcome, CombatError> {
        if input.attacker_id == input.target_id {
            return Err(CombatError::SelfTarget);
        }

        let fight = self
            .fights
            .get(input.fight_id)
            .await?
            .ok_or(CombatError::FightNotFound(input.fight_id))?;

        for vehicle_id in [input.attacker_id, input.target_id] {
            if !fight.includes_vehicle(vehicle_id) {
                return Err(CombatError::VehicleNotInFight {
                    fight_id: fight.id,
                    vehicle_id,
                });
            }
        }

        let attacker = self
            .vehicles
            .get(input.attacker_id)
            .await?
            .ok_or(CombatError::VehicleNotFound(input.attacker_id))?;
        let target = self
            .vehicles
            .get(input.target_id)
            .await?
            .ok_or(CombatError::VehicleNotFound(input.target_id))?;

        let position = input
            .position
            .or_else(|| attacker.position())
            .unwrap_or_default();
        let swerve = input.swerve.resolve(&mut range_fn(self.random.as_ref()));

        let outcome = resolve_chase(&ChaseAttack {
            attacker,
            target,
            method: input.method,
            position,
            swerve,
            stunt: input.stunt,
        });

        self.vehicles.save(&outcome.attacker).await?;
        self.vehicles.save(&outcome.target).await?;

        let event = FightEvent::new(
            fight.id,
            FightEventType::Chase,
            describe(&outcome),
            serde_json::to_value(&outcome)?,
            self.clock.now(),
        );
        self.fights.record_event(&event).await?;

        tracing::info!(
            fight_id = %fight.id,
            attacker = %outcome.attacker.name,
            target = %outcome.target.name,
            method = %outcome.method,
            swerve = outcome.swerve.total,
            outcome = outcome.outcome,
            success = outcome.success,
            smackdown = ?outcome.smackdown,
            position = %outcome.position,
            "Chase maneuver resolved"
        );

        Ok(outcome)
    }
}

fn describe(outcome: &ChaseOutcome) -> String {
    let headline = format!(
        "{} tried {} on {}",
        outcome.attacker.name, outcome.method, outcome.target.name
    );
    match outcome.smackdown {
        None => format!("{headline} and missed ({})", outcome.swerve),
        Some(smackdown) => {
            let mut text = format!(
                "{headline}: smackdown {smackdown}, {} chase points",
                outcome.chase_points
            );
            if outcome.mooks_eliminated > 0 {
                text.push_str(&format!(", {} vehicles out", outcome.mooks_eliminated));
            }
            if outcome.bump > 0 {
                text.push_str(&format!(", {} bump", outcome.bump));
            }
            text.push_str(&format!(", now {}", outcome.position));
            text
        }
    }
}
