//! Chi War domain: the Feng Shui 2 combat and chase rules engine.
//!
//! Pure, synchronous and I/O-free. Combatants are value snapshots and every
//! rule returns a new snapshot. Randomness comes in as a range generator
//! (`FnMut(min, max) -> i32`, inclusive bounds) so callers own the RNG.

pub mod entities;
pub mod error;
pub mod ids;
pub mod rules;
pub mod value_objects;

pub use entities::{Character, Combatant, FactionRef, Fight, FightEvent, FightEventType, Vehicle};
pub use error::DomainError;
pub use ids::{CharacterId, FactionId, FightEventId, FightId, VehicleId};
pub use rules::{
    bump, evade, narrow_the_gap, ram_sideswipe, resolve_attack, resolve_chase, widen_the_gap,
    Attack, AttackOutcome, ChaseAttack, ChaseOutcome, CombatantRules, VehicleArchetype,
    VehicleArchetypeCatalog, MAX_DRIVE_IMPAIRMENT, STUNT_PENALTY, UNTRAINED_DRIVING,
};
pub use value_objects::{
    keys, roll_die, roll_exploding_die, ActionValue, ActionValues, ChaseMethod, CombatantType, PointThresholds,
    Position, Swerve, SwerveInput,
};
