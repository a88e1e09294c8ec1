//! Combat use cases.
//!
//! Chases, personal attacks and initiative, each resolved by the rules engine
//! against stored snapshots.

mod error;
mod resolve_attack;
mod resolve_chase;
mod roll_initiative;

use std::sync::Arc;

pub use error::CombatError;
pub use resolve_attack::{AttackInput, ResolveAttack};
pub use resolve_chase::{ChaseInput, ResolveChase};
pub use roll_initiative::{CombatantKind, InitiativeEntry, InitiativeReport, RollInitiative};

/// Container for combat use cases.
pub struct CombatUseCases {
    pub chase: Arc<ResolveChase>,
    pub attack: Arc<ResolveAttack>,
    pub initiative: Arc<RollInitiative>,
}

impl CombatUseCases {
    pub fn new(
        chase: Arc<ResolveChase>,
        attack: Arc<ResolveAttack>,
        initiative: Arc<RollInitiative>,
    ) -> Self {
        Self {
            chase,
            attack,
            initiative,
        }
    }
}
