//! Outcome resolution for a single chase maneuver or personal attack.
//!
//! Both resolvers are pure: the swerve is thrown by the caller and passed in,
//! and the updated combatants come back inside the outcome.

use serde::{Deserialize, Serialize};

use super::shared::CombatantRules;
use super::vehicle::{bump, evade, narrow_the_gap, ram_sideswipe, widen_the_gap};
use crate::entities::{Character, Vehicle};
use crate::value_objects::{ChaseMethod, Position, Swerve};

/// Flat penalty to the outcome when the attacker performs a stunt.
pub const STUNT_PENALTY: i32 = 2;

fn stunt_penalty(stunt: bool) -> i32 {
    if stunt {
        STUNT_PENALTY
    } else {
        0
    }
}

// =============================================================================
// Chase
// =============================================================================

/// One driver's maneuver against another vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChaseAttack {
    pub attacker: Vehicle,
    pub target: Vehicle,
    pub method: ChaseMethod,
    /// Range between the vehicles before the maneuver
    #[serde(default)]
    pub position: Position,
    pub swerve: Swerve,
    #[serde(default)]
    pub stunt: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChaseOutcome {
    pub method: ChaseMethod,
    pub swerve: Swerve,
    pub action_value: i32,
    pub defense: i32,
    /// Handling, or Frame for a ram
    pub toughness: i32,
    /// Squeal, or Crunch for a ram
    pub damage: i32,
    pub outcome: i32,
    pub success: bool,
    pub smackdown: Option<i32>,
    /// Chase points added to the target
    pub chase_points: i32,
    /// Condition points added to the target
    pub condition_points: i32,
    /// Vehicles removed from a mook convoy
    pub mooks_eliminated: i32,
    /// Raw chase and condition points the rammer took
    pub bump: i32,
    pub position: Position,
    pub attacker: Vehicle,
    pub target: Vehicle,
}

/// Resolve a chase maneuver.
///
/// `outcome = swerve + attacker value - target defense - stunt penalty`.
/// A non-negative outcome hits for `outcome + damage`, applied through the
/// maneuver. On a hit Narrow the Gap and Ram/Sideswipe end near, Widen the Gap
/// ends far, and Evade keeps the range. A miss keeps the range and applies
/// nothing. The final range is written to both vehicles.
///
/// The range follows the maneuver alone. Pursuer and evader roles are left as
/// they are and do not change which way the range moves.
pub fn resolve_chase(attack: &ChaseAttack) -> ChaseOutcome {
    let ChaseAttack {
        attacker,
        target,
        method,
        position,
        swerve,
        stunt,
    } = attack;

    let action_value = attacker.main_attack_value();
    let defense = target.defense();
    let outcome = swerve.total + action_value - defense - stunt_penalty(*stunt);

    let (toughness, damage) = if method.is_ram() {
        (target.frame(), attacker.crunch())
    } else {
        (target.handling(), attacker.squeal())
    };

    let success = outcome >= 0;
    let (smackdown, updated_attacker, updated_target, final_position) = if success {
        let smackdown = outcome + damage;
        let (a, t, p) = match method {
            ChaseMethod::Evade => {
                let (a, t) = evade(attacker, smackdown, target);
                (a, t, *position)
            }
            ChaseMethod::NarrowTheGap => {
                let (a, t) = narrow_the_gap(attacker, smackdown, target);
                (a, t, Position::Near)
            }
            ChaseMethod::WidenTheGap => {
                let (a, t) = widen_the_gap(attacker, smackdown, target);
                (a, t, Position::Far)
            }
            ChaseMethod::RamSideswipe => {
                let (a, t) = ram_sideswipe(attacker, smackdown, target);
                (a, t, Position::Near)
            }
        };
        (Some(smackdown), a, t, p)
    } else {
        (None, attacker.clone(), target.clone(), *position)
    };

    let applied_bump = if success && method.is_ram() && !attacker.is_mook() {
        bump(attacker, target)
    } else {
        0
    };

    ChaseOutcome {
        method: *method,
        swerve: swerve.clone(),
        action_value,
        defense,
        toughness,
        damage,
        outcome,
        success,
        smackdown,
        chase_points: updated_target.chase_points() - target.chase_points(),
        condition_points: updated_target.condition_points() - target.condition_points(),
        mooks_eliminated: target.mooks() - updated_target.mooks(),
        bump: applied_bump,
        position: final_position,
        attacker: updated_attacker.update_position(final_position),
        target: updated_target.update_position(final_position),
    }
}

// =============================================================================
// Personal combat
// =============================================================================

fn default_mooks_targeted() -> i32 {
    1
}

/// One person's attack against another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attack {
    pub attacker: Character,
    pub target: Character,
    pub swerve: Swerve,
    #[serde(default)]
    pub stunt: bool,
    /// Mooks taken out on a hit against a mook group
    #[serde(default = "default_mooks_targeted")]
    pub mooks_targeted: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackOutcome {
    pub swerve: Swerve,
    pub action_value: i32,
    pub defense: i32,
    pub outcome: i32,
    pub success: bool,
    pub smackdown: Option<i32>,
    /// Wounds added to the target
    pub wounds: i32,
    pub mooks_eliminated: i32,
    pub target: Character,
}

/// Resolve a personal attack with the attacker's main attack.
///
/// A hit deals `outcome + Damage` smackdown. Named targets take it minus
/// Toughness as wounds; a mook group loses `mooks_targeted` mooks.
pub fn resolve_attack(attack: &Attack) -> AttackOutcome {
    let Attack {
        attacker,
        target,
        swerve,
        stunt,
        mooks_targeted,
    } = attack;

    let action_value = attacker.main_attack_value();
    let defense = target.defense();
    let outcome = swerve.total + action_value - defense - stunt_penalty(*stunt);
    let success = outcome >= 0;

    let (smackdown, updated_target) = if success {
        let smackdown = outcome + attacker.damage();
        let updated = if target.is_mook() {
            target.kill_mooks((*mooks_targeted).max(1))
        } else {
            target.take_smackdown(smackdown)
        };
        (Some(smackdown), updated)
    } else {
        (None, target.clone())
    };

    AttackOutcome {
        swerve: swerve.clone(),
        action_value,
        defense,
        outcome,
        success,
        smackdown,
        wounds: if target.is_mook() {
            0
        } else {
            updated_target.wounds() - target.wounds()
        },
        mooks_eliminated: target.mooks() - updated_target.mooks(),
        target: updated_target,
    }
}
