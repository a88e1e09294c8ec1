//! Resolve attack use case.
//!
//! Personal combat: one character attacks another with their main attack.

use std::sync::Arc;

use chiwar_domain::{
    resolve_attack, Attack, AttackOutcome, CharacterId, CombatantRules, FightEvent,
    FightEventType, FightId, SwerveInput,
};

use crate::infrastructure::ports::{range_fn, CharacterRepo, ClockPort, FightRepo, RandomPort};

use super::error::CombatError;

#[derive(Debug, Clone)]
pub struct AttackInput {
    pub fight_id: FightId,
    pub attacker_id: CharacterId,
    pub target_id: CharacterId,
    pub swerve: SwerveInput,
    pub stunt: bool,
    /// Mooks taken out on a hit; only meaningful against a mook group
    pub mooks_targeted: Option<i32>,
}

/// Resolve attack use case.
///
/// Orchestrates: fight lookup, membership check, character lookup, swerve,
/// rules resolution, persistence of the target, fight log.
pub struct ResolveAttack {
    characters: Arc<dyn CharacterRepo>,
    fights: Arc<dyn FightRepo>,
    random: Arc<dyn RandomPort>,
    clock: Arc<dyn ClockPort>,
}

impl ResolveAttack {
    pub fn new(
        characters: Arc<dyn CharacterRepo>,
        fights: Arc<dyn FightRepo>,
        random: Arc<dyn RandomPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            characters,
            fights,
            random,
            clock,
        }
    }

    pub async fn execute(&self, input: AttackInput) -> Result<AttackOutcome, CombatError> {
        if input.attacker_id == input.target_id {
            return Err(CombatError::SelfTarget);
        }

        let fight = self
            .fights
            .get(input.fight_id)
            .await?
            .ok_or(CombatError::FightNotFound(input.fight_id))?;

        for character_id in [input.attacker_id, input.target_id] {
            if !fight.includes_character(character_id) {
                return Err(CombatError::CharacterNotInFight {
                    fight_id: fight.id,
                    character_id,
                });
            }
        }

        let attacker = self
            .characters
            .get(input.attacker_id)
            .await?
            .ok_or(CombatError::CharacterNotFound(input.attacker_id))?;
        let target = self
            .characters
            .get(input.target_id)
            .await?
            .ok_or(CombatError::CharacterNotFound(input.target_id))?;

        if input.mooks_targeted.is_some() && !target.is_mook() {
            tracing::warn!(
                target = %target.name,
                mooks_targeted = ?input.mooks_targeted,
                "Ignoring mooks_targeted for a target that is not a mook group"
            );
        }

        let swerve = input.swerve.resolve(&mut range_fn(self.random.as_ref()));
        let attacker_name = attacker.name.clone();
        let outcome = resolve_attack(&Attack {
            attacker,
            target,
            swerve,
            stunt: input.stunt,
            mooks_targeted: input.mooks_targeted.unwrap_or(1),
        });

        self.characters.save(&outcome.target).await?;

        let event = FightEvent::new(
            fight.id,
            FightEventType::Attack,
            describe(&attacker_name, &outcome),
            serde_json::to_value(&outcome)?,
            self.clock.now(),
        );
        self.fights.record_event(&event).await?;

        tracing::info!(
            fight_id = %fight.id,
            attacker = %attacker_name,
            target = %outcome.target.name,
            swerve = outcome.swerve.total,
            outcome = outcome.outcome,
            success = outcome.success,
            smackdown = ?outcome.smackdown,
            wounds = outcome.wounds,
            mooks_eliminated = outcome.mooks_eliminated,
            "Attack resolved"
        );

        Ok(outcome)
    }
}

fn describe(attacker_name: &str, outcome: &AttackOutcome) -> String {
    let target = &outcome.target.name;
    match outcome.smackdown {
        None => format!("{attacker_name} attacked {target} and missed ({})", outcome.swerve),
        Some(_) if outcome.mooks_eliminated > 0 => format!(
            "{attacker_name} took out {} of {target}",
            outcome.mooks_eliminated
        ),
        Some(smackdown) => format!(
            "{attacker_name} hit {target}: smackdown {smackdown}, {} wounds",
            outcome.wounds
        ),
    }
}
